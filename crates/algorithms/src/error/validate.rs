//! Validation utilities for lattice primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// CBD noise parameter, 2 or 3
#[inline(always)]
pub fn eta(eta: u8) -> Result<()> {
    parameter(eta == 2 || eta == 3, "eta", "must be 2 or 3")
}

/// Ciphertext compression width, one of 4, 5, 10 or 11 bits
#[inline(always)]
pub fn compression_bits(d: usize) -> Result<()> {
    parameter(
        matches!(d, 4 | 5 | 10 | 11),
        "compression bits",
        "must be 4, 5, 10 or 11",
    )
}
