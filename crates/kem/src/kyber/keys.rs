// kem/src/kyber/keys.rs

//! Key and ciphertext containers.
//!
//! Containers own packed bytes. `from_bytes` checks the exact length for a
//! given level; `new` wraps bytes unchecked and leaves validation to the
//! operation that consumes them.

use core::fmt;

use mpckyber_api::SecretBytes;
use mpckyber_params::pqc::kyber::KYBER_SYM_BYTES;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::{KyberParams, KYBER_SS_BYTES};
use crate::error::{validate, Result};

/// 32-byte shared secret, zeroized on drop.
pub type SharedSecret = SecretBytes<KYBER_SS_BYTES>;

/// Packed public key: the NTT-domain vector `t` followed by the seed `rho`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CpaPublicKey {
    bytes: Vec<u8>,
}

impl CpaPublicKey {
    /// Wraps packed bytes without validation
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parses a packed public key, checking its length for `params`
    pub fn from_bytes(params: &KyberParams, bytes: &[u8]) -> Result<Self> {
        validate::key_length("public key", bytes.len(), params.public_key_bytes())?;
        Ok(Self::new(bytes.to_vec()))
    }

    /// Joins a packed vector and its matrix seed
    pub fn from_parts(vector: &[u8], seed: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(vector.len() + seed.len());
        bytes.extend_from_slice(vector);
        bytes.extend_from_slice(seed);
        Self { bytes }
    }

    /// Full packed encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Packed vector `t`, everything but the trailing seed
    pub fn vector(&self) -> &[u8] {
        &self.bytes[..self.bytes.len().saturating_sub(KYBER_SYM_BYTES)]
    }

    /// Matrix seed `rho`
    pub fn seed(&self) -> &[u8] {
        &self.bytes[self.bytes.len().saturating_sub(KYBER_SYM_BYTES)..]
    }

    /// Consumes the key
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for CpaPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CpaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpaPublicKey")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Packed secret vector `s` in the NTT domain.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CpaSecretKey {
    bytes: Vec<u8>,
}

impl CpaSecretKey {
    /// Wraps packed bytes without validation
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parses a packed secret key, checking its length for `params`
    pub fn from_bytes(params: &KyberParams, bytes: &[u8]) -> Result<Self> {
        validate::key_length("secret key", bytes.len(), params.secret_key_bytes())?;
        Ok(Self::new(bytes.to_vec()))
    }

    /// Full packed encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for CpaSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CpaSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CpaSecretKey([REDACTED])")
    }
}

/// Compressed `u` followed by compressed `v`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CpaCiphertext {
    bytes: Vec<u8>,
}

impl CpaCiphertext {
    /// Wraps packed bytes without validation
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parses a packed ciphertext, checking its length for `params`
    pub fn from_bytes(params: &KyberParams, bytes: &[u8]) -> Result<Self> {
        validate::ciphertext_length(params.name(), bytes.len(), params.ciphertext_bytes())?;
        Ok(Self::new(bytes.to_vec()))
    }

    /// Full packed encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable access, mainly for tampering in tests
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consumes the ciphertext
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for CpaCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CpaCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpaCiphertext")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A public key and its secret key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Public half
    pub public_key: CpaPublicKey,
    /// Secret half
    pub secret_key: CpaSecretKey,
}

/// Result of a CCA encapsulation: the ciphertext to send and the derived key.
///
/// Protocols that bind a shorter value than the full key take a prefix of
/// the shared secret with [`SecretBytes::prefix`].
#[derive(Clone, Debug)]
pub struct Encapsulation {
    /// Ciphertext for the key holder
    pub ciphertext: CpaCiphertext,
    /// Derived shared secret
    pub shared_secret: SharedSecret,
}

impl Encapsulation {
    /// Splits into `(ciphertext, shared_secret)`
    pub fn into_parts(self) -> (CpaCiphertext, SharedSecret) {
        (self.ciphertext, self.shared_secret)
    }
}
