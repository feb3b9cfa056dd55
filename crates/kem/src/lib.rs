//! Key encapsulation for the mpckyber library
//!
//! This crate builds the schemes on top of the lattice primitives: the
//! IND-CPA public-key encryption, the implicit-rejection CCA transform, the
//! public-key combiners and packaging used by oblivious-transfer protocols,
//! and the [`Kem`](mpckyber_api::Kem) front-ends tying them together.

#![forbid(unsafe_code)]

pub mod error;
pub mod kyber;

// Re-exports
pub use error::{Error, Result};
pub use kyber::{KyberCca, KyberCpa, KyberParams};
