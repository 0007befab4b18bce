//! Classifier error types.

use thiserror::Error;

/// Errors that can occur while loading tables or talking to the model.
#[derive(Debug, Error)]
pub enum NluError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid tables: {0}")]
    InvalidTables(String),

    #[error("invalid symptom pattern #{index}: {message}")]
    Pattern { index: usize, message: String },

    #[error("model load failed: {0}")]
    ModelLoad(String),

    #[error("model prediction failed: {0}")]
    Model(String),

    #[error("tool '{tool}' does not declare argument '{argument}'")]
    UnknownArgument { tool: String, argument: String },
}

impl From<std::io::Error> for NluError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for NluError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Convenience alias for classifier results.
pub type NluResult<T> = Result<T, NluError>;
