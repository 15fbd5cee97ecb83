pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod progress;

pub use domain::error::{ConfigError, FileSystemError, ModuleGenError, TemplateError};
pub use domain::model::{LibType, RawConfig, ResolvedConfig};
pub use domain::replacements::{replacement_table, DEFAULT_GTEST_URL};
pub use infrastructure::generator::Generator;
pub use progress::ProgressEvent;
