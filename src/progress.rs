/// Progress event emitted by the generation pipeline.
///
/// Messages are plain text; styling is left to whatever sink the host
/// installs (the CLI renders them through `infrastructure::ui`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A notable step succeeded (directory created, file written, assets
    /// imported).
    Log { message: String },
    /// A non-fatal degradation; the run continues.
    Warning { message: String },
}

impl ProgressEvent {
    pub fn log(message: impl Into<String>) -> Self {
        ProgressEvent::Log {
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        ProgressEvent::Warning {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ProgressEvent::Log { message } | ProgressEvent::Warning { message } => message,
        }
    }
}

/// Default sink that prints events to stdout without any styling.
pub fn print_progress(event: &ProgressEvent) {
    match event {
        ProgressEvent::Log { message } => println!("  {message}"),
        ProgressEvent::Warning { message } => println!("  warning: {message}"),
    }
}
