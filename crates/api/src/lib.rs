//! Public API traits and types for the mpckyber library
//!
//! This crate provides the public API surface shared by the mpckyber crates:
//! the error type, the [`Kem`] and [`KeyPackaging`] traits, the
//! [`SeedExpander`] hash/XOF collaborator interface and secret byte containers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Kem, KeyPackaging, SeedExpander, DIGEST_BYTES};
pub use types::SecretBytes;
