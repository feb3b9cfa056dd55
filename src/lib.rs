//! # mpckyber
//!
//! A Kyber-family lattice key-encapsulation core built for secure multi-party
//! computation protocols.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mpckyber = "0.3"
//! ```
//!
//! ```ignore
//! use mpckyber::kem::KyberCca;
//! use mpckyber::api::Kem;
//! use mpckyber::params::SecurityLevel;
//!
//! let kem = KyberCca::new(SecurityLevel::Kyber768);
//! let keypair = kem.keypair(&mut rng)?;
//! let (ct, ss) = kem.encapsulate(&mut rng, &keypair.public_key)?;
//! let ss2 = kem.decapsulate(&mut rng, &keypair.secret_key, &keypair.public_key, &ct)?;
//! assert_eq!(ss, ss2);
//! ```
//!
//! ## Features
//!
//! - `kem` (default): IND-CPA engine, CCA transform and OT key packaging
//! - `serde`: serde derives on configuration types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mpckyber-api`]: error type and the `Kem` / `SeedExpander` traits
//! - [`mpckyber-internal`]: constant-time and endian helpers
//! - [`mpckyber-params`]: numeric constants and security levels
//! - [`mpckyber-algorithms`]: field kernel, NTT ring engine, samplers, codec
//! - [`mpckyber-kem`]: IND-CPA engine, CCA transform, key containers

#![cfg_attr(not(feature = "std"), no_std)]

pub use mpckyber_algorithms as algorithms;
pub use mpckyber_api as api;
pub use mpckyber_internal as internal;
pub use mpckyber_params as params;

#[cfg(feature = "kem")]
pub use mpckyber_kem as kem;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use mpckyber_api::{Error, Kem, Result, SeedExpander};
    pub use mpckyber_params::SecurityLevel;
    pub use zeroize::Zeroize;

    #[cfg(feature = "kem")]
    pub use mpckyber_kem::kyber::{KyberCca, KyberCpa};
}
