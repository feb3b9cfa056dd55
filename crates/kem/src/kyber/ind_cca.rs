// kem/src/kyber/ind_cca.rs

//! IND-CCA key encapsulation built on the IND-CPA scheme.
//!
//! Fujisaki-Okamoto style: the encryption coins are derived from the
//! message and the public key, so decapsulation can re-encrypt and compare.
//! A mismatch is never reported; the derived key is computed from fresh
//! random bytes instead (implicit rejection).
//!
//! With `H = digest` and `XOF_n = extend(., n)`:
//!
//! ```text
//! m'          = XOF_32(H(message))
//! public_hash = XOF_32(H(t || rho))
//! K || r      = XOF_64(H(m' || public_hash))
//! ct          = encrypt_cpa(m', pk, r)
//! tag         = XOF_32(H(ct))
//! key         = H(K || tag)
//! ```

use mpckyber_api::{SeedExpander, DIGEST_BYTES};
use mpckyber_internal::constant_time::{ct_eq_choice, ct_select_array};
use mpckyber_params::pqc::kyber::KYBER_SYM_BYTES;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa};
use super::keys::{CpaCiphertext, CpaPublicKey, CpaSecretKey, Encapsulation, SharedSecret};
use super::params::{KyberParams, KYBER_MSG_BYTES};
use crate::error::{validate, Result};

/// `XOF_32(H(parts))`
fn hash_extend32<E: SeedExpander + ?Sized>(expander: &E, parts: &[&[u8]]) -> [u8; KYBER_SYM_BYTES] {
    let mut out = [0u8; KYBER_SYM_BYTES];
    expander.digest_then_extend(parts, &mut out);
    out
}

/// Key material derived from the (decrypted) message
struct DerivedSeeds {
    pre_key: Zeroizing<[u8; KYBER_SYM_BYTES]>,
    coins: Zeroizing<[u8; KYBER_SYM_BYTES]>,
}

/// `K || r = XOF_64(H(m' || XOF_32(H(pk))))`
fn derive_seeds<E: SeedExpander + ?Sized>(
    expander: &E,
    m_prime: &[u8],
    pk: &CpaPublicKey,
) -> DerivedSeeds {
    let public_hash = hash_extend32(expander, &[pk.vector(), pk.seed()]);

    let mut kr = Zeroizing::new([0u8; 2 * KYBER_SYM_BYTES]);
    expander.digest_then_extend(&[m_prime, &public_hash[..]], &mut kr[..]);

    let mut pre_key = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    let mut coins = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    pre_key.copy_from_slice(&kr[..KYBER_SYM_BYTES]);
    coins.copy_from_slice(&kr[KYBER_SYM_BYTES..]);
    DerivedSeeds { pre_key, coins }
}

/// `H(key_material || XOF_32(H(ct)))`
fn finalize_key<E: SeedExpander + ?Sized>(
    expander: &E,
    key_material: &[u8],
    ciphertext: &[u8],
) -> SharedSecret {
    let tag = hash_extend32(expander, &[ciphertext]);
    let key: [u8; DIGEST_BYTES] = expander.digest_parts(&[key_material, &tag[..]]);
    SharedSecret::new(key)
}

fn check_public_key(params: &KyberParams, pk: &CpaPublicKey) -> Result<()> {
    validate::key_length("public key", pk.as_bytes().len(), params.public_key_bytes())
}

/// Encapsulate a caller-chosen 32-byte message.
///
/// The message is only read; the ciphertext and the derived key are
/// returned together.
pub fn encapsulate_message<E: SeedExpander + ?Sized>(
    params: &KyberParams,
    expander: &E,
    message: &[u8],
    pk: &CpaPublicKey,
) -> Result<Encapsulation> {
    validate::length("message", message.len(), KYBER_MSG_BYTES)?;
    check_public_key(params, pk)?;

    let m_prime = Zeroizing::new(hash_extend32(expander, &[message]));
    let seeds = derive_seeds(expander, &m_prime[..], pk);
    let ciphertext = encrypt_cpa(params, expander, &m_prime[..], pk, &seeds.coins[..])?;
    let shared_secret = finalize_key(expander, &seeds.pre_key[..], ciphertext.as_bytes());

    debug!(
        algorithm = params.name(),
        expander = expander.name(),
        ciphertext_len = ciphertext.as_bytes().len(),
        "encapsulated"
    );

    Ok(Encapsulation {
        ciphertext,
        shared_secret,
    })
}

/// Encapsulate a fresh random message.
pub fn encapsulate<E, R>(
    params: &KyberParams,
    expander: &E,
    rng: &mut R,
    pk: &CpaPublicKey,
) -> Result<Encapsulation>
where
    E: SeedExpander + ?Sized,
    R: RngCore + CryptoRng,
{
    let mut message = Zeroizing::new([0u8; KYBER_MSG_BYTES]);
    rng.fill_bytes(&mut message[..]);
    encapsulate_message(params, expander, &message[..], pk)
}

/// Recover the shared secret from a ciphertext.
///
/// Lengths of `sk`, `pk` and `ct` are checked up front and are the only
/// failure mode. A well-formed ciphertext that does not re-encrypt to itself
/// yields a key derived from fresh random bytes; both paths run the same
/// steps and draw the same randomness.
pub fn decapsulate<E, R>(
    params: &KyberParams,
    expander: &E,
    rng: &mut R,
    sk: &CpaSecretKey,
    pk: &CpaPublicKey,
    ct: &CpaCiphertext,
) -> Result<SharedSecret>
where
    E: SeedExpander + ?Sized,
    R: RngCore + CryptoRng,
{
    validate::key_length("secret key", sk.as_bytes().len(), params.secret_key_bytes())?;
    check_public_key(params, pk)?;
    validate::ciphertext_length(params.name(), ct.as_bytes().len(), params.ciphertext_bytes())?;

    let m_prime = decrypt_cpa(params, sk, ct)?;
    let seeds = derive_seeds(expander, &m_prime[..], pk);
    let reencrypted = encrypt_cpa(params, expander, &m_prime[..], pk, &seeds.coins[..])?;

    let mut fallback = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rng.fill_bytes(&mut fallback[..]);

    let matches: Choice = ct_eq_choice(reencrypted.as_bytes(), ct.as_bytes());
    let selected = Zeroizing::new(ct_select_array(&*fallback, &*seeds.pre_key, matches));

    trace!(algorithm = params.name(), "decapsulated");
    Ok(finalize_key(expander, &selected[..], ct.as_bytes()))
}
