// kem/src/kyber/mod.rs

//! Kyber key encapsulation for MPC protocols.
//!
//! The module stacks three layers: the IND-CPA scheme in [`cpa_pke`], the
//! implicit-rejection CCA transform in [`ind_cca`], and the oblivious-transfer
//! key packaging in [`ot`]. [`KyberCca`] and [`KyberCpa`] wrap them behind
//! `api::Kem`.

mod params;
mod keys;           // Key and ciphertext containers
mod serialize;      // Key and ciphertext wire layouts
pub mod cpa_pke;    // Core CPA-secure PKE scheme
pub mod ind_cca;    // Fujisaki-Okamoto transform with implicit rejection
pub mod ot;         // Public-key arithmetic and n-slot key packaging
mod kem;            // KyberCca / KyberCpa implementing api::Kem

pub use self::kem::{KyberCca, KyberCpa};
pub use self::keys::{
    CpaCiphertext, CpaPublicKey, CpaSecretKey, Encapsulation, KeyPair, SharedSecret,
};
pub use self::ot::KeySlots;
pub use self::params::{KyberParams, KYBER_MSG_BYTES, KYBER_SS_BYTES};
pub use mpckyber_params::pqc::kyber::SecurityLevel;

#[cfg(test)]
mod tests;
