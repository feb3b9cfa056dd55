// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial ring engine for R_q = Z_q[X]/(X^256 + 1)
//!
//! Layered leaf-first: reduction kernels, the raw NTT, domain-tagged ring
//! elements and vectors, then the samplers and the byte codec built on them.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod polyvec;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::params::{KyberField, Modulus, NttModulus};
    pub use super::polynomial::{Domain, Poly};
    pub use super::polyvec::PolyVec;
    pub use super::reduce::{barrett_reduce, conditional_sub_q, freeze, montgomery_reduce};
    pub use super::sampling::{centered_binomial, generate_matrix, noise_poly, uniform_rejection};
}
