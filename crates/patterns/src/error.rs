//! Pattern Error Types

use thiserror::Error;

/// Errors reported by the pattern illustrations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// Light switch token other than ON or OFF
    #[error("Argument 'ON' or 'OFF' is required.")]
    RejectedCommand(String),

    /// Explicit second initialisation of a singleton
    #[error("Singleton is already initialised")]
    SingletonAlreadyInitialised,

    /// Attempt to replace a shared flyweight with different state
    #[error("Flyweight {0:?} is immutable once stocked")]
    ImmutableFlyweight(String),

    /// Brand sold before it was stocked
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    /// Composite child not present
    #[error("No child named {0:?}")]
    LeafNotFound(String),

    /// Notification chain could not be assembled
    #[error("Chain error: {0}")]
    Chain(String),

    /// Catalogue lookup failed
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
}

impl From<notify_chain::ChainError> for PatternError {
    fn from(err: notify_chain::ChainError) -> Self {
        PatternError::Chain(err.to_string())
    }
}
