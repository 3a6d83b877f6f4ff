//! Chain Error Types

use thiserror::Error;

/// Errors raised while describing or assembling a chain
#[derive(Debug, Error)]
pub enum ChainError {
    /// Severity token not recognised
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// Sink kind not recognised
    #[error("Unknown sink kind: {0}")]
    UnknownSink(String),

    /// Chain configuration lists no handlers
    #[error("Chain has no handlers")]
    EmptyChain,

    /// Configuration source could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ChainError {
    fn from(err: config::ConfigError) -> Self {
        ChainError::Config(err.to_string())
    }
}
