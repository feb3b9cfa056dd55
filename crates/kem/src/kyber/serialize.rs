// kem/src/kyber/serialize.rs

//! Serialization functions for Kyber data structures.
//!
//! Every unpack checks the exact length for the configured level before
//! slicing, so malformed input fails here and never reaches the arithmetic.

use mpckyber_algorithms::poly::serialize::{
    compress_poly, compress_polyvec, decompress_poly, decompress_polyvec, polyvec_from_bytes,
    polyvec_to_bytes,
};
use mpckyber_algorithms::{Domain, Poly, PolyVec};
use mpckyber_params::pqc::kyber::KYBER_SYM_BYTES;

use super::params::KyberParams;
use crate::error::{validate, Result};

/// Pack public key: `t` followed by `rho`
pub fn pack_pk(t: &PolyVec, rho: &[u8; KYBER_SYM_BYTES]) -> Vec<u8> {
    let mut packed = polyvec_to_bytes(t);
    packed.extend_from_slice(rho);
    packed
}

/// Unpack public key into the NTT-domain vector `t` and the seed `rho`
pub fn unpack_pk(params: &KyberParams, bytes: &[u8]) -> Result<(PolyVec, [u8; KYBER_SYM_BYTES])> {
    validate::key_length("public key", bytes.len(), params.public_key_bytes())?;
    let (vector, seed) = bytes.split_at(params.polyvec_bytes());

    let t = polyvec_from_bytes(vector, params.k(), Domain::Ntt)?;
    let mut rho = [0u8; KYBER_SYM_BYTES];
    rho.copy_from_slice(seed);
    Ok((t, rho))
}

/// Pack secret key
pub fn pack_sk(s: &PolyVec) -> Vec<u8> {
    polyvec_to_bytes(s)
}

/// Unpack secret key into the NTT-domain vector `s`
pub fn unpack_sk(params: &KyberParams, bytes: &[u8]) -> Result<PolyVec> {
    validate::key_length("secret key", bytes.len(), params.secret_key_bytes())?;
    Ok(polyvec_from_bytes(bytes, params.k(), Domain::Ntt)?)
}

/// Unpack a bare key vector (one OT slot) into `k` polynomials
pub fn unpack_key_vector(params: &KyberParams, bytes: &[u8]) -> Result<PolyVec> {
    validate::key_length("public key vector", bytes.len(), params.polyvec_bytes())?;
    Ok(polyvec_from_bytes(bytes, params.k(), Domain::Ntt)?)
}

/// Pack ciphertext: compressed `u` followed by compressed `v`
pub fn pack_ciphertext(params: &KyberParams, u: &PolyVec, v: &Poly) -> Result<Vec<u8>> {
    let mut packed = compress_polyvec(u, params.du())?;
    packed.extend_from_slice(&compress_poly(v, params.dv())?);
    Ok(packed)
}

/// Unpack ciphertext into coefficient-domain `u` and `v`
pub fn unpack_ciphertext(params: &KyberParams, bytes: &[u8]) -> Result<(PolyVec, Poly)> {
    validate::ciphertext_length(params.name(), bytes.len(), params.ciphertext_bytes())?;
    let (u_bytes, v_bytes) = bytes.split_at(params.polyvec_compressed_bytes());

    let u = decompress_polyvec(u_bytes, params.k(), params.du())?;
    let v = decompress_poly(v_bytes, params.dv())?;
    Ok((u, v))
}
