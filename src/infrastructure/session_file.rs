use std::fs;
use std::path::PathBuf;

use crate::application::port::SessionStore;
use crate::domain::model::RawConfig;

/// File the last successful configuration is saved to, relative to the
/// working directory.
pub const SESSION_FILE_NAME: &str = "last_session.json";

/// Stores the last successful [`RawConfig`] as a flat JSON document. A
/// missing or corrupt file is treated as "no session".
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(SESSION_FILE_NAME)
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Option<RawConfig> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&self, config: &RawConfig) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("last_session.json"));

        let config = RawConfig {
            module_name: Some("Widgets".to_string()),
            overwrite: Some(true),
            ..RawConfig::default()
        };
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_returns_none_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("nonexistent.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn load_returns_none_on_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonSessionStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn saved_file_omits_unset_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.json");
        let store = JsonSessionStore::new(path.clone());

        store
            .save(&RawConfig {
                module_name: Some("Widgets".to_string()),
                ..RawConfig::default()
            })
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("module_name"));
        assert!(!content.contains("namespace"));
    }

    #[test]
    fn load_accepts_legacy_project_name_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.json");
        fs::write(&path, r#"{"project_name": "Legacy"}"#).unwrap();
        let store = JsonSessionStore::new(path);
        assert_eq!(store.load().unwrap().module_name.as_deref(), Some("Legacy"));
    }
}
