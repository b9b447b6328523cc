//! Error types for logger construction
//!
//! Configuration errors are `Clone` on purpose: the singleton caches the
//! `Result` of the first construction and hands the same error back to
//! every later caller, so io errors are carried as rendered messages
//! rather than as `std::io::Error` values.

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem failure while removing or opening a sink file
    #[error("file sink error for '{path}': {message}")]
    Sink { path: String, message: String },

    /// Caller information could not be resolved for runtime-context decoration
    #[error("failed to resolve runtime caller context")]
    RuntimeContext,

    /// Invalid option combination or value
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create a sink error from a path and an io error
    pub fn sink(path: impl Into<String>, source: &std::io::Error) -> Self {
        ConfigError::Sink {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a generic invalid-configuration error
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        ConfigError::Invalid(msg.into())
    }
}
