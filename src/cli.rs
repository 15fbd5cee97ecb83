use clap::Parser;
use std::path::PathBuf;

use crate::domain::model::RawConfig;

/// Command line flags. Each maps to one raw configuration field; advanced
/// build switches (C++ standard, linkage, clang-tidy) are config-file only.
#[derive(Parser, Debug)]
#[command(name = "modforge", version, about = "modforge - C++ module scaffold generator")]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Module name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// C++ namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Folder/file prefix
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Folder/file suffix
    #[arg(short = 's', long)]
    pub suffix: Option<String>,

    /// GoogleTest archive URL
    #[arg(short = 'g', long = "gtest-url")]
    pub gtest_url: Option<String>,

    /// Copy GoogleTest from the local source tree instead of fetching
    #[arg(long = "gtest-local")]
    pub gtest_local: bool,

    /// Local GoogleTest version directory to copy
    #[arg(long = "gtest-local-version")]
    pub gtest_local_version: Option<String>,

    /// Output directory
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Overwrite an existing module directory
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Run without prompts (console output only)
    #[arg(long, default_value_t = false)]
    pub silent: bool,
}

impl Cli {
    /// Raw configuration overlay from the flags that were actually given.
    /// Boolean flags only override when set, so a session value survives an
    /// invocation that does not mention them.
    pub fn to_overlay(&self) -> RawConfig {
        RawConfig {
            module_name: self.name.clone(),
            namespace: self.namespace.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            output_dir: self.output.clone(),
            overwrite: self.overwrite.then_some(true),
            gtest_is_local: self.gtest_local.then_some(true),
            gtest_url: self.gtest_url.clone(),
            gtest_local_version: self.gtest_local_version.clone(),
            ..RawConfig::default()
        }
    }
}
