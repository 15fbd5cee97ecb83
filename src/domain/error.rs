use std::path::PathBuf;

use thiserror::Error;

/// Configuration problems. Reported before any filesystem mutation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required field 'module_name'")]
    MissingModuleName,
    #[error("invalid {field} '{value}': use only letters, digits, and underscores, and do not start with a digit")]
    InvalidIdentifier { field: &'static str, value: String },
    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Directory creation and copy failures. May occur after partial writes.
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("target directory already exists: {0} (enable overwrite to reuse it)")]
    TargetExists(PathBuf),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A template file could not be read, or its rendered output could not be
/// written. Always names the offending file.
#[derive(Debug, Error)]
#[error("template processing failed for {file}: {source}")]
pub struct TemplateError {
    pub file: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Base category for every generation failure. Callers can always tell a
/// known failure kind apart from an internal defect (`Internal`).
#[derive(Debug, Error)]
pub enum ModuleGenError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("generation cancelled by user")]
    Cancelled,
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
