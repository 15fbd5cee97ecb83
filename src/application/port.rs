use std::path::{Path, PathBuf};

use crate::domain::model::{RawConfig, ResolvedConfig};

/// How the generated module should obtain GoogleTest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtestSelection {
    /// Fetch an archive from a URL at configure time.
    FetchUrl(String),
    /// Copy a vendored source tree; `None` when no local version exists.
    LocalVersion(Option<String>),
}

/// Interactive collector for configuration fields the caller left unset.
/// The core never depends on how a host renders these questions.
pub trait UserPrompt {
    fn input_module_name(&self, default: Option<&str>) -> Result<String, String>;
    /// Empty answer means "derive from the folder name".
    fn input_namespace(&self, default: &str) -> Result<String, String>;
    fn input_prefix(&self, default: &str) -> Result<String, String>;
    fn input_suffix(&self, default: &str) -> Result<String, String>;
    fn input_output_dir(&self, default: &Path) -> Result<PathBuf, String>;
    fn select_gtest_source(
        &self,
        default_url: &str,
        local_versions: &[String],
    ) -> Result<GtestSelection, String>;
    fn confirm(&self, config: &ResolvedConfig) -> Result<bool, String>;
}

/// Persists the last successful raw configuration between runs.
pub trait SessionStore {
    fn load(&self) -> Option<RawConfig>;
    fn save(&self, config: &RawConfig) -> Result<(), Box<dyn std::error::Error>>;
}
