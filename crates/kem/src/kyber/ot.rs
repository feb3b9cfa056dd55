// kem/src/kyber/ot.rs

//! Public-key arithmetic and key packaging for oblivious-transfer protocols.
//!
//! A slot is a packed key vector of `k * 384` bytes, i.e. a public key
//! without its trailing matrix seed. Packaged arrays end with one extra slot
//! holding the seed shared by every key in the array.
//!
//! Decoy vectors are uniformly random vectors, not `A*s + e`; they are
//! indistinguishable from real keys but have no secret key.

use mpckyber_algorithms::poly::serialize::polyvec_to_bytes;
use mpckyber_algorithms::PolyVec;
use mpckyber_api::SeedExpander;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use super::keys::CpaPublicKey;
use super::params::KyberParams;
use super::serialize::unpack_key_vector;
use crate::error::{validate, Result};

/// Packed key vectors plus a trailing seed slot
pub type KeySlots = Vec<Vec<u8>>;

fn combine(
    params: &KyberParams,
    a: &[u8],
    b: &[u8],
    op: fn(&mut PolyVec, &PolyVec) -> mpckyber_algorithms::Result<()>,
) -> Result<Vec<u8>> {
    let mut lhs = unpack_key_vector(params, a)?;
    let rhs = unpack_key_vector(params, b)?;
    op(&mut lhs, &rhs)?;
    lhs.reduce();
    Ok(polyvec_to_bytes(&lhs))
}

/// `a + b` over packed key vectors
pub fn pk_add(params: &KyberParams, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    combine(params, a, b, PolyVec::add_assign)
}

/// `a - b` over packed key vectors
pub fn pk_sub(params: &KyberParams, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    combine(params, a, b, PolyVec::sub_assign)
}

/// `a += b`, rewriting the packed bytes of `a`
pub fn pk_add_inplace(params: &KyberParams, a: &mut [u8], b: &[u8]) -> Result<()> {
    let sum = pk_add(params, a, b)?;
    a.copy_from_slice(&sum);
    Ok(())
}

/// `a -= b`, rewriting the packed bytes of `a`
pub fn pk_sub_inplace(params: &KyberParams, a: &mut [u8], b: &[u8]) -> Result<()> {
    let diff = pk_sub(params, a, b)?;
    a.copy_from_slice(&diff);
    Ok(())
}

/// Reduce arbitrary `k * 384` bytes to a canonical packed vector
fn canonicalize(params: &KyberParams, raw: &[u8]) -> Result<Vec<u8>> {
    let mut v = unpack_key_vector(params, raw)?;
    v.reduce();
    Ok(polyvec_to_bytes(&v))
}

/// A uniformly random key vector
pub fn random_public_key<R>(params: &KyberParams, rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut raw = vec![0u8; params.polyvec_bytes()];
    rng.fill_bytes(&mut raw);
    canonicalize(params, &raw)
}

/// Map `input` onto a key vector: `extend(digest(input), k * 384)`, reduced
pub fn hash_to_public_key<E: SeedExpander + ?Sized>(
    params: &KyberParams,
    expander: &E,
    input: &[u8],
) -> Result<Vec<u8>> {
    let mut raw = vec![0u8; params.polyvec_bytes()];
    expander.digest_then_extend(&[input], &mut raw);
    canonicalize(params, &raw)
}

fn check_slot(params: &KyberParams, slot: &[u8]) -> Result<()> {
    validate::key_length("public key vector", slot.len(), params.polyvec_bytes())
}

/// Two key slots and the seed slot: `pk` at `sigma`, `decoy` at `1 - sigma`.
pub fn package_two_keys(
    params: &KyberParams,
    pk: &CpaPublicKey,
    decoy: &[u8],
    sigma: usize,
) -> Result<KeySlots> {
    validate::packaging(sigma < 2, "package_two_keys", "sigma must be 0 or 1")?;
    validate::key_length("public key", pk.as_bytes().len(), params.public_key_bytes())?;
    check_slot(params, decoy)?;

    let mut slots = vec![decoy.to_vec(), decoy.to_vec(), pk.seed().to_vec()];
    slots[sigma] = pk.vector().to_vec();
    Ok(slots)
}

/// `n` key slots and the seed slot.
///
/// `pk` goes to `choice`; the `n - 1` decoys fill the other slots in order.
pub fn package_keys(
    params: &KyberParams,
    pk: &CpaPublicKey,
    decoys: &[Vec<u8>],
    choice: usize,
    n: usize,
) -> Result<KeySlots> {
    validate::packaging(n >= 2, "package_keys", "need at least two slots")?;
    validate::packaging(choice < n, "package_keys", "choice out of range")?;
    validate::packaging(
        decoys.len() + 1 == n,
        "package_keys",
        "expected n - 1 decoy keys",
    )?;
    validate::key_length("public key", pk.as_bytes().len(), params.public_key_bytes())?;
    for decoy in decoys {
        check_slot(params, decoy)?;
    }

    let mut decoys = decoys.iter();
    let mut slots = Vec::with_capacity(n + 1);
    for i in 0..n {
        if i == choice {
            slots.push(pk.vector().to_vec());
        } else if let Some(decoy) = decoys.next() {
            slots.push(decoy.clone());
        }
    }
    slots.push(pk.seed().to_vec());

    trace!(algorithm = params.name(), slots = n, "packaged public keys");
    Ok(slots)
}

/// [`package_keys`] with freshly drawn decoys
pub fn package_keys_random<R>(
    params: &KyberParams,
    rng: &mut R,
    pk: &CpaPublicKey,
    choice: usize,
    n: usize,
) -> Result<KeySlots>
where
    R: RngCore + CryptoRng,
{
    validate::packaging(n >= 2, "package_keys_random", "need at least two slots")?;
    let decoys = (1..n)
        .map(|_| random_public_key(params, rng))
        .collect::<Result<Vec<_>>>()?;
    package_keys(params, pk, &decoys, choice, n)
}
