//! Error handling for the mpckyber ecosystem

pub mod validate;

use thiserror::Error;

/// Primary error type for the public API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A packed key had the wrong shape for the configured security level
    #[error("invalid key ({context}): {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// A packed ciphertext had the wrong shape for the configured security level
    #[error("invalid ciphertext ({context}): {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter or unsupported configuration
    #[error("invalid parameter ({context}): {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Two ring elements were combined across incompatible domains
    #[error("domain mismatch in {operation}: {message}")]
    DomainMismatch {
        operation: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("serialization error ({context}): {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for public API operations
pub type Result<T> = core::result::Result<T, Error>;
