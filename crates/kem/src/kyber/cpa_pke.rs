// kem/src/kyber/cpa_pke.rs

//! IND-CPA public-key encryption.
//!
//! Deterministic given its seeds: key generation is driven by a 64-byte
//! seed, encryption by 32 bytes of coins. Decryption is unauthenticated; the
//! CCA layer adds the re-encryption check.

use mpckyber_algorithms::poly::sampling::{generate_matrix, noise_poly};
use mpckyber_algorithms::poly::serialize::{poly_from_message, poly_to_message};
use mpckyber_algorithms::PolyVec;
use mpckyber_api::SeedExpander;
use mpckyber_params::pqc::kyber::{KYBER_KEYGEN_SEED_BYTES, KYBER_SYM_BYTES};
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use super::keys::{CpaCiphertext, CpaPublicKey, CpaSecretKey, KeyPair};
use super::params::{KyberParams, KYBER_MSG_BYTES};
use super::serialize::{pack_ciphertext, pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use crate::error::{validate, Result};

/// Sample `k` noise polynomials with consecutive nonces starting at `first_nonce`
fn noise_vec<E: SeedExpander + ?Sized>(
    expander: &E,
    seed: &[u8],
    k: usize,
    first_nonce: usize,
    eta: u8,
) -> Result<PolyVec> {
    let polys = (0..k)
        .map(|i| noise_poly(expander, seed, (first_nonce + i) as u8, eta))
        .collect::<core::result::Result<Vec<_>, _>>()?;
    Ok(PolyVec::from_polys(polys))
}

/// Generate a key pair from 64 fresh random bytes.
pub fn keypair_cpa<E, R>(params: &KyberParams, expander: &E, rng: &mut R) -> Result<KeyPair>
where
    E: SeedExpander + ?Sized,
    R: RngCore + CryptoRng,
{
    let mut seed = Zeroizing::new([0u8; KYBER_KEYGEN_SEED_BYTES]);
    rng.fill_bytes(&mut seed[..]);
    keypair_cpa_from_seed(params, expander, &seed[..])
}

/// Deterministic key generation.
///
/// The first half of `seed` becomes the public matrix seed `rho`, the second
/// half the noise seed `sigma`.
pub fn keypair_cpa_from_seed<E>(params: &KyberParams, expander: &E, seed: &[u8]) -> Result<KeyPair>
where
    E: SeedExpander + ?Sized,
{
    validate::length("keypair seed", seed.len(), KYBER_KEYGEN_SEED_BYTES)?;
    let k = params.k();
    let (rho_bytes, sigma) = seed.split_at(KYBER_SYM_BYTES);
    let mut rho = [0u8; KYBER_SYM_BYTES];
    rho.copy_from_slice(rho_bytes);

    let a = generate_matrix(expander, &rho, false, k)?;

    let mut s = noise_vec(expander, sigma, k, 0, params.eta1())?;
    let mut e = noise_vec(expander, sigma, k, k, params.eta1())?;
    s.ntt()?;
    s.reduce();
    e.ntt()?;

    let mut rows = Vec::with_capacity(k);
    for row in &a {
        let mut ti = row.pointwise_acc_mont(&s)?;
        ti.to_mont()?;
        rows.push(ti);
    }
    let mut t = PolyVec::from_polys(rows);
    t.add_assign(&e)?;
    t.reduce();

    let public_key = CpaPublicKey::new(pack_pk(&t, &rho));
    let secret_key = CpaSecretKey::new(pack_sk(&s));

    s.zeroize();
    e.zeroize();
    trace!(algorithm = params.name(), "generated IND-CPA key pair");

    Ok(KeyPair {
        public_key,
        secret_key,
    })
}

/// Encrypt a 32-byte message under `pk` with 32 bytes of coins.
pub fn encrypt_cpa<E>(
    params: &KyberParams,
    expander: &E,
    msg: &[u8],
    pk: &CpaPublicKey,
    coins: &[u8],
) -> Result<CpaCiphertext>
where
    E: SeedExpander + ?Sized,
{
    validate::length("message", msg.len(), KYBER_MSG_BYTES)?;
    validate::length("coins", coins.len(), KYBER_SYM_BYTES)?;
    let (t, rho) = unpack_pk(params, pk.as_bytes())?;
    let k = params.k();

    let at = generate_matrix(expander, &rho, true, k)?;

    let mut r = noise_vec(expander, coins, k, 0, params.eta1())?;
    let mut e1 = noise_vec(expander, coins, k, k, params.eta2())?;
    let mut e2 = noise_poly(expander, coins, (2 * k) as u8, params.eta2())?;
    r.ntt()?;
    r.reduce();

    let mut rows = Vec::with_capacity(k);
    for row in &at {
        let mut ui = row.pointwise_acc_mont(&r)?;
        ui.inv_ntt_mont()?;
        rows.push(ui);
    }
    let mut u = PolyVec::from_polys(rows);
    u.add_assign(&e1)?;
    u.reduce();

    let mut m = poly_from_message(msg)?;
    let mut v = t.pointwise_acc_mont(&r)?;
    v.inv_ntt_mont()?;
    v.add_assign(&e2)?;
    v.add_assign(&m)?;
    v.reduce();

    let packed = pack_ciphertext(params, &u, &v)?;

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    m.zeroize();

    Ok(CpaCiphertext::new(packed))
}

/// Decrypt a ciphertext with the secret vector.
pub fn decrypt_cpa(
    params: &KyberParams,
    sk: &CpaSecretKey,
    ct: &CpaCiphertext,
) -> Result<Zeroizing<[u8; KYBER_MSG_BYTES]>> {
    let (mut u, v) = unpack_ciphertext(params, ct.as_bytes())?;
    let mut s = unpack_sk(params, sk.as_bytes())?;

    u.ntt()?;
    let mut mp = s.pointwise_acc_mont(&u)?;
    mp.inv_ntt_mont()?;

    let mut diff = v.sub(&mp)?;
    diff.reduce();
    let msg = Zeroizing::new(poly_to_message(&diff));

    s.zeroize();
    mp.zeroize();
    diff.zeroize();

    Ok(msg)
}
