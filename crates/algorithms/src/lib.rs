//! Lattice arithmetic for the mpckyber library
//!
//! This crate holds everything below the encryption schemes: modular
//! reduction kernels, the negacyclic NTT, domain-tagged polynomials,
//! deterministic samplers and the coefficient codec. Randomness never enters
//! here; every sampler is driven by a [`SeedExpander`](mpckyber_api::SeedExpander).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Ring engine, samplers and codec
pub mod poly;
pub use poly::params::{KyberField, Modulus, NttModulus};
pub use poly::polynomial::{Domain, Poly};
pub use poly::polyvec::PolyVec;

// Default SHA3/SHAKE expander (if enabled)
#[cfg(feature = "xof")]
pub mod xof;
#[cfg(feature = "xof")]
pub use xof::Sha3Expander;
