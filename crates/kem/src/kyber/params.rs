// kem/src/kyber/params.rs

//! Kyber parameter definitions.
//!
//! A [`KyberParams`] value is the immutable configuration every scheme
//! function receives. It is built once from a [`SecurityLevel`] (or a raw
//! module rank) and every size it reports derives from that level.

use mpckyber_params::pqc::kyber::{
    KyberLevelParams, SecurityLevel, KYBER_POLY_BYTES, KYBER_SYM_BYTES,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shared secret size for all Kyber variants.
pub const KYBER_SS_BYTES: usize = 32;

/// Message size of the IND-CPA scheme.
pub const KYBER_MSG_BYTES: usize = KYBER_SYM_BYTES;

/// Immutable configuration for one Kyber security level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KyberParams {
    level: SecurityLevel,
}

impl KyberParams {
    /// Configuration for a security level
    pub fn new(level: SecurityLevel) -> Self {
        Self { level }
    }

    /// Configuration for a module rank, rejecting anything but 2, 3 or 4
    pub fn from_k(k: usize) -> Result<Self> {
        SecurityLevel::from_k(k)
            .map(Self::new)
            .ok_or(Error::Configuration {
                parameter: "k",
                reason: "security level must be 2, 3 or 4",
            })
    }

    fn table(&self) -> &'static KyberLevelParams {
        self.level.params()
    }

    /// Selected security level
    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    /// Algorithm name, e.g. `Kyber-768`
    pub fn name(&self) -> &'static str {
        self.table().name
    }

    /// Module rank k
    pub fn k(&self) -> usize {
        self.table().k
    }

    /// CBD parameter for s, e and r
    pub fn eta1(&self) -> u8 {
        self.table().eta1
    }

    /// CBD parameter for e1 and e2
    pub fn eta2(&self) -> u8 {
        self.table().eta2
    }

    /// Compression bits of u
    pub fn du(&self) -> usize {
        self.table().du
    }

    /// Compression bits of v
    pub fn dv(&self) -> usize {
        self.table().dv
    }

    /// Packed public-key vector `t` (or any key vector slot), `k * 384` bytes
    pub fn polyvec_bytes(&self) -> usize {
        self.k() * KYBER_POLY_BYTES
    }

    /// Compressed `u`
    pub fn polyvec_compressed_bytes(&self) -> usize {
        self.table().polyvec_compressed_bytes
    }

    /// Compressed `v`
    pub fn poly_compressed_bytes(&self) -> usize {
        self.table().poly_compressed_bytes
    }

    /// Packed public key, vector followed by the 32-byte matrix seed
    pub fn public_key_bytes(&self) -> usize {
        self.table().public_key_size
    }

    /// Packed secret key
    pub fn secret_key_bytes(&self) -> usize {
        self.table().secret_key_size
    }

    /// Packed ciphertext
    pub fn ciphertext_bytes(&self) -> usize {
        self.table().ciphertext_size
    }
}

impl From<SecurityLevel> for KyberParams {
    fn from(level: SecurityLevel) -> Self {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_per_level() {
        let expected = [
            (2, 3, 10, 4, 800, 768, 768),
            (3, 2, 10, 4, 1184, 1152, 1088),
            (4, 2, 11, 5, 1568, 1536, 1568),
        ];
        for (k, eta1, du, dv, pk, sk, ct) in expected {
            let p = KyberParams::from_k(k).unwrap();
            assert_eq!(p.k(), k);
            assert_eq!(p.eta1(), eta1);
            assert_eq!(p.eta2(), 2);
            assert_eq!(p.du(), du);
            assert_eq!(p.dv(), dv);
            assert_eq!(p.public_key_bytes(), pk);
            assert_eq!(p.secret_key_bytes(), sk);
            assert_eq!(p.ciphertext_bytes(), ct);
            assert_eq!(p.polyvec_bytes() + 32, pk);
            assert_eq!(p.polyvec_compressed_bytes() + p.poly_compressed_bytes(), ct);
        }
    }

    #[test]
    fn test_unsupported_rank() {
        for k in [0, 1, 5, 8] {
            assert!(matches!(
                KyberParams::from_k(k),
                Err(Error::Configuration { parameter: "k", .. })
            ));
        }
    }
}
