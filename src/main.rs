use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use modforge::application::generate::{GenerateArgs, GenerateUseCase};
use modforge::cli::Cli;
use modforge::domain::model::RawConfig;
use modforge::infrastructure::generator::{default_template_dir, GTEST_ASSET_ROOT};
use modforge::infrastructure::prompt::DialoguerPrompt;
use modforge::infrastructure::session_file::JsonSessionStore;
use modforge::infrastructure::ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(path) => {
            println!("Module generated at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", ui::format_error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf> {
    let mut overlay = RawConfig::default();
    if let Some(config_path) = &cli.config {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("config file '{}' not found", config_path.display()))?;
        let file_config: RawConfig = serde_json::from_str(&content)
            .with_context(|| format!("config file '{}' is not valid JSON", config_path.display()))?;
        overlay = overlay.merge(file_config);
    }
    overlay = overlay.merge(cli.to_overlay());

    if !cli.silent {
        ui::render_banner();
    }

    let use_case = GenerateUseCase::new(DialoguerPrompt::new(), JsonSessionStore::new(JsonSessionStore::default_path()));
    let args = GenerateArgs {
        raw: overlay,
        silent: cli.silent,
        template_dir: default_template_dir(),
        asset_root: PathBuf::from(GTEST_ASSET_ROOT),
    };

    let path = use_case
        .execute(args, &mut |event| println!("{}", ui::format_event(&event)))
        .map_err(anyhow::Error::from)?;
    Ok(path)
}
