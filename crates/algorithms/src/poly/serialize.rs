//! serialize.rs - Polynomial coefficient packing and compression
//!
//! Every layout here is the same little-endian bitstream: coefficient `i`
//! occupies bits `[i * d, (i + 1) * d)` of the output, least significant bit
//! first. That covers the 12-bit key encoding, the 4/5/10/11-bit compressed
//! ciphertext encodings and the 1-bit message encoding.

use mpckyber_params::pqc::kyber::{KYBER_N, KYBER_POLY_BYTES, KYBER_SYM_BYTES};

use super::params::{KyberField, Modulus};
use super::polynomial::{Domain, Poly};
use super::polyvec::PolyVec;
use super::reduce::freeze;
use crate::error::{validate, Error, Result};

/// Bytes needed to pack `KYBER_N` coefficients of `bits` bits each
pub const fn bytes_required(bits: usize) -> usize {
    KYBER_N * bits / 8
}

/// Pack the low `bits` bits of each value into `out`, LSB first.
///
/// `out` must be exactly `values.len() * bits / 8` bytes.
pub fn pack_bits(values: &[u16], bits: usize, out: &mut [u8]) {
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    let mut pos = 0;
    let mask = (1u32 << bits) - 1;

    for &v in values {
        acc |= (u32::from(v) & mask) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
}

/// Inverse of [`pack_bits`]: fill `out` with `bits`-bit values read LSB first.
pub fn unpack_bits(bytes: &[u8], bits: usize, out: &mut [u16]) {
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    let mut bytes = bytes.iter();
    let mask = (1u32 << bits) - 1;

    for v in out.iter_mut() {
        while acc_bits < bits {
            let b = bytes.next().copied().unwrap_or(0);
            acc |= u32::from(b) << acc_bits;
            acc_bits += 8;
        }
        *v = (acc & mask) as u16;
        acc >>= bits;
        acc_bits -= bits;
    }
}

/// Canonical coefficients as unsigned values
fn canonical(poly: &Poly) -> [u16; KYBER_N] {
    let mut out = [0u16; KYBER_N];
    for (o, &c) in out.iter_mut().zip(poly.coeffs().iter()) {
        *o = freeze::<KyberField>(c) as u16;
    }
    out
}

/// Serialize a polynomial to 384 bytes (12 bits per canonical coefficient)
pub fn poly_to_bytes(poly: &Poly) -> Vec<u8> {
    let mut out = vec![0u8; KYBER_POLY_BYTES];
    pack_bits(&canonical(poly), 12, &mut out);
    out
}

/// Deserialize 384 bytes into a polynomial tagged `domain`.
///
/// Values are taken as-is (up to 4095); callers that need canonical
/// coefficients reduce afterwards.
pub fn poly_from_bytes(bytes: &[u8], domain: Domain) -> Result<Poly> {
    validate::length("poly_from_bytes", bytes.len(), KYBER_POLY_BYTES)?;
    let mut raw = [0u16; KYBER_N];
    unpack_bits(bytes, 12, &mut raw);

    let mut poly = Poly::zero(domain);
    for (c, &v) in poly.coeffs_mut().iter_mut().zip(raw.iter()) {
        *c = v as i16;
    }
    Ok(poly)
}

/// Map a 32-byte message to a polynomial: bit set -> (q + 1) / 2
pub fn poly_from_message(msg: &[u8]) -> Result<Poly> {
    validate::length("poly_from_message", msg.len(), KYBER_SYM_BYTES)?;
    let half = (KyberField::Q + 1) / 2;

    let mut poly = Poly::zero(Domain::Normal);
    for (i, c) in poly.coeffs_mut().iter_mut().enumerate() {
        let bit = (msg[i / 8] >> (i % 8)) & 1;
        // 0 or all-ones, no branch on the message bit
        let mask = -i16::from(bit);
        *c = mask & half;
    }
    Ok(poly)
}

/// Decode a polynomial to 32 bytes, rounding each coefficient to 0 or q/2
pub fn poly_to_message(poly: &Poly) -> [u8; KYBER_SYM_BYTES] {
    let q = KyberField::Q as u32;
    let mut msg = [0u8; KYBER_SYM_BYTES];

    for (i, &c) in canonical(poly).iter().enumerate() {
        let bit = (((u32::from(c) << 1) + q / 2) / q) & 1;
        msg[i / 8] |= (bit as u8) << (i % 8);
    }
    msg
}

/// Compress to `d` bits per coefficient, `d` in {4, 5, 10, 11}
pub fn compress_poly(poly: &Poly, d: usize) -> Result<Vec<u8>> {
    validate::compression_bits(d)?;
    let q = KyberField::Q as u32;
    let mask = (1u32 << d) - 1;

    let mut compressed = canonical(poly);
    for c in compressed.iter_mut() {
        *c = ((((u32::from(*c) << d) + q / 2) / q) & mask) as u16;
    }

    let mut out = vec![0u8; bytes_required(d)];
    pack_bits(&compressed, d, &mut out);
    Ok(out)
}

/// Decompress `32 * d` bytes into a coefficient-domain polynomial
pub fn decompress_poly(bytes: &[u8], d: usize) -> Result<Poly> {
    validate::compression_bits(d)?;
    validate::length("decompress_poly", bytes.len(), bytes_required(d))?;
    let q = KyberField::Q as u32;

    let mut raw = [0u16; KYBER_N];
    unpack_bits(bytes, d, &mut raw);

    let mut poly = Poly::zero(Domain::Normal);
    for (c, &v) in poly.coeffs_mut().iter_mut().zip(raw.iter()) {
        *c = ((u32::from(v) * q + (1 << (d - 1))) >> d) as i16;
    }
    Ok(poly)
}

/// Concatenated 12-bit encodings of every element
pub fn polyvec_to_bytes(vec: &PolyVec) -> Vec<u8> {
    let mut out = Vec::with_capacity(vec.len() * KYBER_POLY_BYTES);
    for p in vec.polys() {
        out.extend_from_slice(&poly_to_bytes(p));
    }
    out
}

/// Parse `k * 384` bytes into `k` polynomials tagged `domain`
pub fn polyvec_from_bytes(bytes: &[u8], k: usize, domain: Domain) -> Result<PolyVec> {
    validate::length("polyvec_from_bytes", bytes.len(), k * KYBER_POLY_BYTES)?;
    let polys = bytes
        .chunks_exact(KYBER_POLY_BYTES)
        .map(|chunk| poly_from_bytes(chunk, domain))
        .collect::<Result<Vec<_>>>()?;
    Ok(PolyVec::from_polys(polys))
}

/// Concatenated compressed encodings of every element
pub fn compress_polyvec(vec: &PolyVec, d: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(vec.len() * bytes_required(d));
    for p in vec.polys() {
        out.extend_from_slice(&compress_poly(p, d)?);
    }
    Ok(out)
}

/// Decompress `k` concatenated `d`-bit encodings
pub fn decompress_polyvec(bytes: &[u8], k: usize, d: usize) -> Result<PolyVec> {
    validate::compression_bits(d)?;
    let per_poly = bytes_required(d);
    if bytes.len() != k * per_poly {
        return Err(Error::Length {
            context: "decompress_polyvec",
            expected: k * per_poly,
            actual: bytes.len(),
        });
    }
    let polys = bytes
        .chunks_exact(per_poly)
        .map(|chunk| decompress_poly(chunk, d))
        .collect::<Result<Vec<_>>>()?;
    Ok(PolyVec::from_polys(polys))
}
