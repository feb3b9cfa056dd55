//! Validation utilities for KEM operations

use super::{Error, PrimitiveError, Result};

/// Validate the exact length of a message, seed or coin buffer
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Primitive(PrimitiveError::Length {
            context,
            expected,
            actual,
        }));
    }
    Ok(())
}

/// Validate the exact length of a packed key
pub fn key_length(key_type: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKey {
            key_type,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the exact length of a packed ciphertext
pub fn ciphertext_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidCiphertext {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a configuration parameter
pub fn configuration(condition: bool, parameter: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Configuration { parameter, reason });
    }
    Ok(())
}

/// Validate key-packaging arguments
pub fn packaging(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Packaging { context, reason });
    }
    Ok(())
}
