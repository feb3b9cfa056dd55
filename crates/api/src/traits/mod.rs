//! Trait definitions for the mpckyber public API

pub mod expand;
pub mod kem;

pub use expand::{SeedExpander, DIGEST_BYTES};
pub use kem::{Kem, KeyPackaging};
