use std::path::PathBuf;

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("too many {section} bindings (limit {limit})")]
    CapacityExceeded { section: &'static str, limit: usize },
    #[error("failed to create control channel at {path}")]
    ChannelCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open control channel at {path}")]
    ChannelOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("command \"{0}\" not understood")]
    UnknownCommand(String),
    #[error("command \"{0}\" needs a parameter")]
    MissingParameter(String),
    #[error("failed to append to history log {path}")]
    HistoryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand(name.into())
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Per-line command errors are reported and survived; everything else
    /// indicates a broken environment or configuration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCommand(_) | Self::MissingParameter(_))
    }
}
