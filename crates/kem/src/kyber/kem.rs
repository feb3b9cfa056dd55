// kem/src/kyber/kem.rs

//! KEM front-ends implementing `api::Kem` and `api::KeyPackaging`.
//!
//! Both schemes are configured per instance with a security level and a
//! [`SeedExpander`]; the default expander is SHA3-256 with SHAKE128.

use mpckyber_algorithms::Sha3Expander;
use mpckyber_api::error::Result as ApiResult;
use mpckyber_api::{Kem as KemTrait, KeyPackaging, SeedExpander};
use mpckyber_params::pqc::kyber::{SecurityLevel, KYBER_SYM_BYTES};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa, keypair_cpa_from_seed};
use super::ind_cca;
use super::keys::{CpaCiphertext, CpaPublicKey, CpaSecretKey, Encapsulation, KeyPair, SharedSecret};
use super::ot::{self, KeySlots};
use super::params::KyberParams;
use crate::error::{validate, Result};

/// Inherent helpers shared by both front-ends
macro_rules! kyber_common {
    ($scheme:ident) => {
        impl $scheme<Sha3Expander> {
            /// Scheme at `level` with the SHA3 expander
            pub fn new(level: SecurityLevel) -> Self {
                Self::with_expander(level, Sha3Expander)
            }

            /// Scheme for module rank `k`, rejecting anything but 2, 3 or 4
            pub fn from_k(k: usize) -> Result<Self> {
                Ok(Self::with_params(KyberParams::from_k(k)?, Sha3Expander))
            }
        }

        impl<E: SeedExpander> $scheme<E> {
            /// Scheme at `level` with a custom hash/XOF collaborator
            pub fn with_expander(level: SecurityLevel, expander: E) -> Self {
                Self::with_params(KyberParams::new(level), expander)
            }

            /// Scheme from an existing configuration
            pub fn with_params(params: KyberParams, expander: E) -> Self {
                Self { params, expander }
            }

            /// Active configuration
            pub fn params(&self) -> &KyberParams {
                &self.params
            }

            /// Hash/XOF collaborator
            pub fn expander(&self) -> &E {
                &self.expander
            }

            /// Deterministic key generation from a 64-byte seed
            pub fn keypair_from_seed(&self, seed: &[u8]) -> Result<KeyPair> {
                keypair_cpa_from_seed(&self.params, &self.expander, seed)
            }

            /// `a + b` over packed key vectors
            pub fn pk_add(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
                ot::pk_add(&self.params, a, b)
            }

            /// `a - b` over packed key vectors
            pub fn pk_sub(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
                ot::pk_sub(&self.params, a, b)
            }

            /// `a += b` over packed key vectors
            pub fn pk_add_inplace(&self, a: &mut [u8], b: &[u8]) -> Result<()> {
                ot::pk_add_inplace(&self.params, a, b)
            }

            /// `a -= b` over packed key vectors
            pub fn pk_sub_inplace(&self, a: &mut [u8], b: &[u8]) -> Result<()> {
                ot::pk_sub_inplace(&self.params, a, b)
            }

            /// Package `pk` at `choice` among `n` slots with fresh random decoys
            pub fn package_keys_random<R: RngCore + CryptoRng>(
                &self,
                rng: &mut R,
                pk: &CpaPublicKey,
                choice: usize,
                n: usize,
            ) -> Result<KeySlots> {
                ot::package_keys_random(&self.params, rng, pk, choice, n)
            }
        }

        impl<E: SeedExpander> KeyPackaging for $scheme<E> {
            fn random_public_key<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Vec<u8>> {
                Ok(ot::random_public_key(&self.params, rng)?)
            }

            fn hash_to_public_key(&self, input: &[u8]) -> ApiResult<Vec<u8>> {
                Ok(ot::hash_to_public_key(&self.params, &self.expander, input)?)
            }

            fn package_two_keys(
                &self,
                public_key: &CpaPublicKey,
                decoy: &[u8],
                sigma: usize,
            ) -> ApiResult<Vec<Vec<u8>>> {
                Ok(ot::package_two_keys(&self.params, public_key, decoy, sigma)?)
            }

            fn package_keys(
                &self,
                public_key: &CpaPublicKey,
                decoys: &[Vec<u8>],
                choice: usize,
                n: usize,
            ) -> ApiResult<Vec<Vec<u8>>> {
                Ok(ot::package_keys(&self.params, public_key, decoys, choice, n)?)
            }
        }
    };
}

/// IND-CCA Kyber KEM with implicit rejection.
#[derive(Clone, Debug)]
pub struct KyberCca<E = Sha3Expander> {
    params: KyberParams,
    expander: E,
}

kyber_common!(KyberCca);

impl<E: SeedExpander> KyberCca<E> {
    /// Encapsulate a caller-chosen 32-byte message
    pub fn encapsulate_message(&self, message: &[u8], pk: &CpaPublicKey) -> Result<Encapsulation> {
        ind_cca::encapsulate_message(&self.params, &self.expander, message, pk)
    }
}

impl<E: SeedExpander> KemTrait for KyberCca<E> {
    type PublicKey = CpaPublicKey;
    type SecretKey = CpaSecretKey;
    type SharedSecret = SharedSecret;
    type Ciphertext = CpaCiphertext;
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        self.params.name()
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(keypair_cpa(&self.params, &self.expander, rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let encapsulation = ind_cca::encapsulate(&self.params, &self.expander, rng, public_key)?;
        Ok(encapsulation.into_parts())
    }

    fn decapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        Ok(ind_cca::decapsulate(
            &self.params,
            &self.expander,
            rng,
            secret_key,
            public_key,
            ciphertext,
        )?)
    }
}

/// IND-CPA Kyber used as a KEM: the shared secret is a random 32-byte key
/// encrypted directly under the public key.
///
/// There is no re-encryption check; a tampered ciphertext decrypts to an
/// unrelated key.
#[derive(Clone, Debug)]
pub struct KyberCpa<E = Sha3Expander> {
    params: KyberParams,
    expander: E,
}

kyber_common!(KyberCpa);

impl<E: SeedExpander> KemTrait for KyberCpa<E> {
    type PublicKey = CpaPublicKey;
    type SecretKey = CpaSecretKey;
    type SharedSecret = SharedSecret;
    type Ciphertext = CpaCiphertext;
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        self.params.name()
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(keypair_cpa(&self.params, &self.expander, rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let key = SharedSecret::random(rng);
        let mut coins = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
        rng.fill_bytes(&mut coins[..]);

        let ciphertext = encrypt_cpa(&self.params, &self.expander, &key[..], public_key, &coins[..])?;
        debug!(algorithm = self.params.name(), "encapsulated CPA key");
        Ok((ciphertext, key))
    }

    fn decapsulate<R: CryptoRng + RngCore>(
        &self,
        _rng: &mut R,
        secret_key: &Self::SecretKey,
        _public_key: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        validate::key_length(
            "secret key",
            secret_key.as_bytes().len(),
            self.params.secret_key_bytes(),
        )?;
        let message = decrypt_cpa(&self.params, secret_key, ciphertext)?;
        SharedSecret::from_slice(&message[..])
    }
}
