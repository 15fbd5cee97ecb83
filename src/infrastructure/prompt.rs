use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input, Select};

use crate::application::port::{GtestSelection, UserPrompt};
use crate::domain::model::ResolvedConfig;

pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn input_module_name(&self, default: Option<&str>) -> Result<String, String> {
        let mut input = Input::<String>::new().with_prompt("Module name");
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        input
            .interact_text()
            .map_err(|e| format!("Prompt error: {e}"))
    }

    fn input_namespace(&self, default: &str) -> Result<String, String> {
        Input::<String>::new()
            .with_prompt("C++ namespace (empty to derive)")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Prompt error: {e}"))
    }

    fn input_prefix(&self, default: &str) -> Result<String, String> {
        Input::<String>::new()
            .with_prompt("Folder/file prefix (optional)")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Prompt error: {e}"))
    }

    fn input_suffix(&self, default: &str) -> Result<String, String> {
        Input::<String>::new()
            .with_prompt("Folder/file suffix (optional)")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Prompt error: {e}"))
    }

    fn input_output_dir(&self, default: &Path) -> Result<PathBuf, String> {
        let input: String = Input::new()
            .with_prompt("Output directory")
            .default(default.to_string_lossy().to_string())
            .interact_text()
            .map_err(|e| format!("Prompt error: {e}"))?;
        Ok(PathBuf::from(input))
    }

    fn select_gtest_source(
        &self,
        default_url: &str,
        local_versions: &[String],
    ) -> Result<GtestSelection, String> {
        let items = vec!["Fetch from URL", "Copy from local source tree"];
        let selection = Select::new()
            .with_prompt("GoogleTest source")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| format!("Prompt error: {e}"))?;

        match selection {
            0 => {
                let url: String = Input::new()
                    .with_prompt("GoogleTest archive URL")
                    .default(default_url.to_string())
                    .interact_text()
                    .map_err(|e| format!("Prompt error: {e}"))?;
                Ok(GtestSelection::FetchUrl(url))
            }
            1 => {
                if local_versions.is_empty() {
                    return Ok(GtestSelection::LocalVersion(None));
                }
                let chosen = Select::new()
                    .with_prompt("Local GoogleTest version")
                    .items(local_versions)
                    .default(0)
                    .interact()
                    .map_err(|e| format!("Prompt error: {e}"))?;
                Ok(GtestSelection::LocalVersion(
                    local_versions.get(chosen).cloned(),
                ))
            }
            _ => Err("Invalid selection".to_string()),
        }
    }

    fn confirm(&self, config: &ResolvedConfig) -> Result<bool, String> {
        println!("\nModule configuration:");
        println!("  Name:      {}", config.module_name);
        println!("  Namespace: {}", config.namespace);
        println!("  Folder:    {}", config.folder_name());
        println!("  Output:    {}", config.output_dir.display());
        println!(
            "  GoogleTest: {}",
            if config.gtest_is_local {
                config
                    .gtest_local_version
                    .as_deref()
                    .unwrap_or("local (no version)")
            } else {
                &config.gtest_url
            }
        );
        println!();

        Confirm::new()
            .with_prompt("Generate module?")
            .default(true)
            .interact()
            .map_err(|e| format!("Prompt error: {e}"))
    }
}
