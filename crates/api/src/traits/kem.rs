// File: crates/api/src/traits/kem.rs

//! Trait definitions for Key Encapsulation Mechanisms (KEM)
//!
//! Schemes are configured per instance (security level, hash/XOF collaborator),
//! so every operation takes `&self`. Randomness is always supplied by the caller.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Packed public key.
    type PublicKey: Clone + AsRef<[u8]>;

    /// Packed secret key.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + AsRef<[u8]>;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + AsRef<[u8]>;

    /// Keypair type for efficient storage of related keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// # Security Requirements
    /// - Must validate the public key length internally.
    /// - Must use fresh randomness from the provided RNG.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the secret key.
    ///
    /// The public key is needed by schemes that re-encrypt; the RNG supplies
    /// the implicit-rejection substitute.
    ///
    /// # Security Requirements
    /// - Should use implicit rejection for IND-CCA2 security where applicable.
    /// - A well-formed but invalid ciphertext must not produce an error.
    fn decapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}

/// Key-packaging helpers for 1-of-n oblivious transfer built on a KEM.
///
/// Slots hold packed public-key vectors (without the generator seed); the
/// returned arrays end with one extra slot carrying the shared seed.
pub trait KeyPackaging: Kem {
    /// Draw a decoy public-key vector that is indistinguishable from a real one.
    fn random_public_key<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Vec<u8>>;

    /// Hash arbitrary bytes onto the public-key vector space.
    fn hash_to_public_key(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Place the real key at `sigma` (0 or 1) and the decoy at the other slot.
    fn package_two_keys(
        &self,
        public_key: &Self::PublicKey,
        decoy: &[u8],
        sigma: usize,
    ) -> Result<Vec<Vec<u8>>>;

    /// Place the real key at `choice` among `n` slots filled by `decoys`.
    fn package_keys(
        &self,
        public_key: &Self::PublicKey,
        decoys: &[Vec<u8>],
        choice: usize,
        n: usize,
    ) -> Result<Vec<Vec<u8>>>;
}
