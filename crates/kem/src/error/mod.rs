//! Error handling for KEM operations

use core::fmt;

pub(crate) use mpckyber_algorithms::error::Error as PrimitiveError;
use mpckyber_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error raised by the lattice primitives
    Primitive(PrimitiveError),

    /// A packed key had the wrong length for the configured level
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A packed ciphertext had the wrong length for the configured level
    InvalidCiphertext {
        /// Scheme that rejected the ciphertext
        algorithm: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Unsupported configuration, such as a module rank outside {2, 3, 4}
    Configuration {
        /// Offending parameter
        parameter: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Inconsistent arguments to an OT key-packaging helper
    Packaging {
        /// Helper that rejected the arguments
        context: &'static str,
        /// Why they were rejected
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, expected, actual } => {
                write!(
                    f,
                    "Invalid {}: expected {} bytes, got {}",
                    key_type, expected, actual
                )
            }
            Error::InvalidCiphertext { algorithm, expected, actual } => {
                write!(
                    f,
                    "Invalid {} ciphertext: expected {} bytes, got {}",
                    algorithm, expected, actual
                )
            }
            Error::Configuration { parameter, reason } => {
                write!(f, "Invalid configuration '{}': {}", parameter, reason)
            }
            Error::Packaging { context, reason } => {
                write!(f, "Key packaging error in {}: {}", context, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, expected, actual } => CoreError::InvalidKey {
                context: key_type,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::InvalidCiphertext { algorithm, expected, actual } => {
                CoreError::InvalidCiphertext {
                    context: algorithm,
                    message: format!("expected {} bytes, got {}", expected, actual),
                }
            }
            Error::Configuration { parameter, reason } => CoreError::InvalidParameter {
                context: parameter,
                message: reason.to_string(),
            },
            Error::Packaging { context, reason } => CoreError::Other {
                context,
                message: reason.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
