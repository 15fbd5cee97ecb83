use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

use super::port::{GtestSelection, SessionStore, UserPrompt};
use crate::domain::error::{ConfigError, ModuleGenError};
use crate::domain::model::{RawConfig, ResolvedConfig};
use crate::infrastructure::generator::Generator;
use crate::progress::ProgressEvent;

pub struct GenerateArgs {
    /// Overlay from the config file and CLI flags; merged over the persisted
    /// session seed.
    pub raw: RawConfig,
    /// When set, never prompt; a missing module name is fatal.
    pub silent: bool,
    pub template_dir: PathBuf,
    pub asset_root: PathBuf,
}

/// Runs the full generation pipeline: merge configuration sources, prompt
/// for anything still missing, resolve and validate, then materialize the
/// module and persist the session.
pub struct GenerateUseCase<P: UserPrompt, S: SessionStore> {
    prompt: P,
    store: S,
}

impl<P: UserPrompt, S: SessionStore> GenerateUseCase<P, S> {
    pub fn new(prompt: P, store: S) -> Self {
        Self { prompt, store }
    }

    /// # Errors
    /// [`ModuleGenError`] on any configuration, filesystem, or template
    /// failure; `Cancelled` when the user declines the confirmation.
    pub fn execute(
        &self,
        args: GenerateArgs,
        sink: &mut dyn FnMut(ProgressEvent),
    ) -> Result<PathBuf, ModuleGenError> {
        let mut raw = self.store.load().unwrap_or_default().merge(args.raw);

        if args.silent {
            if raw.module_name.is_none() {
                return Err(ConfigError::MissingModuleName.into());
            }
        } else {
            self.fill_missing(&mut raw, &args.asset_root)
                .map_err(|e| ModuleGenError::Internal(anyhow!(e)))?;
        }

        let config = ResolvedConfig::resolve(&raw)?;

        if !args.silent {
            let confirmed = self
                .prompt
                .confirm(&config)
                .map_err(|e| ModuleGenError::Internal(anyhow!(e)))?;
            if !confirmed {
                return Err(ModuleGenError::Cancelled);
            }
        }

        let generator = Generator::new(&config, &args.template_dir);
        generator.create_target_dir(sink)?;
        generator.render_templates(sink)?;
        generator.import_gtest_sources(&args.asset_root, sink)?;

        if let Err(e) = self.store.save(&raw) {
            sink(ProgressEvent::warning(format!(
                "could not persist session: {e}"
            )));
        }

        Ok(generator.output_path().to_path_buf())
    }

    /// Prompts for every field the merged configuration still lacks.
    /// Provided fields are never asked again.
    fn fill_missing(&self, raw: &mut RawConfig, asset_root: &Path) -> Result<(), String> {
        if raw.module_name.is_none() {
            raw.module_name = Some(self.prompt.input_module_name(None)?);
        }
        if raw.namespace.is_none() {
            let answer = self.prompt.input_namespace("")?;
            if !answer.is_empty() {
                raw.namespace = Some(answer);
            }
        }
        if raw.prefix.is_none() {
            let answer = self.prompt.input_prefix("")?;
            if !answer.is_empty() {
                raw.prefix = Some(answer);
            }
        }
        if raw.suffix.is_none() {
            let answer = self.prompt.input_suffix("")?;
            if !answer.is_empty() {
                raw.suffix = Some(answer);
            }
        }
        if raw.output_dir.is_none() {
            let default = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let dir = self.prompt.input_output_dir(&default)?;
            raw.output_dir = Some(dir.to_string_lossy().into_owned());
        }
        if raw.gtest_is_local.is_none() {
            let versions = scan_local_versions(asset_root);
            let default_url = raw
                .gtest_url
                .clone()
                .unwrap_or_else(|| crate::domain::replacements::DEFAULT_GTEST_URL.to_string());
            match self.prompt.select_gtest_source(&default_url, &versions)? {
                GtestSelection::FetchUrl(url) => {
                    raw.gtest_is_local = Some(false);
                    raw.gtest_url = Some(url);
                }
                GtestSelection::LocalVersion(version) => {
                    raw.gtest_is_local = Some(true);
                    raw.gtest_local_version = version;
                }
            }
        }
        Ok(())
    }
}

/// Lists the version subdirectories available under the local GoogleTest
/// asset root. An unreadable or missing root yields an empty list.
pub fn scan_local_versions(asset_root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(asset_root) else {
        return Vec::new();
    };
    let mut versions: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    versions.sort();
    versions
}
