//! sampling.rs - Deterministic samplers driven by a seed expander
//!
//! Two distributions are needed: the centered binomial distribution for
//! secrets and errors, and the uniform distribution over `Z_q` for the public
//! matrix. Both consume bytes produced by a [`SeedExpander`], so the same
//! seed always yields the same polynomials.

use mpckyber_api::SeedExpander;
use mpckyber_internal::endian::{u24_from_le_bytes, u32_from_le_bytes};
use mpckyber_params::pqc::kyber::{
    SecurityLevel, KYBER_MATRIX_FIRST_PASS_BYTES, KYBER_MATRIX_XOF_BYTES, KYBER_N, KYBER_SYM_BYTES,
};
use mpckyber_params::utils::hash::SHAKE128_RATE;
use zeroize::Zeroizing;

use super::params::{KyberField, Modulus};
use super::polynomial::{Domain, Poly};
use super::polyvec::PolyVec;
use crate::error::{validate, Error, Result};

/// Longest XOF stream requested for a single matrix entry.
///
/// Beyond the standard 672 bytes the stream is extended one SHAKE128 block
/// at a time; 16 extra blocks make exhaustion practically impossible for an
/// honest expander.
pub const MATRIX_XOF_MAX_BYTES: usize = KYBER_MATRIX_XOF_BYTES + 16 * SHAKE128_RATE;

/// Number of uniform bytes a CBD_eta sample consumes
pub fn cbd_buffer_len(eta: u8) -> usize {
    usize::from(eta) * KYBER_N / 4
}

/// Sample a polynomial from CBD_eta using the reference bit layout.
///
/// `eta = 2` reads 32-bit little-endian words (128 bytes), `eta = 3` reads
/// 24-bit words (192 bytes). Coefficients land in `[-eta, eta]`.
pub fn centered_binomial(buf: &[u8], eta: u8) -> Result<Poly> {
    let mut poly = Poly::zero(Domain::Normal);
    let r = poly.coeffs_mut();

    match eta {
        2 => {
            validate::length("centered_binomial", buf.len(), cbd_buffer_len(2))?;
            for (i, chunk) in buf.chunks_exact(4).enumerate() {
                let t = u32_from_le_bytes(chunk);
                let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
                for j in 0..8 {
                    let a = ((d >> (4 * j)) & 0x3) as i16;
                    let b = ((d >> (4 * j + 2)) & 0x3) as i16;
                    r[8 * i + j] = a - b;
                }
            }
        }
        3 => {
            validate::length("centered_binomial", buf.len(), cbd_buffer_len(3))?;
            for (i, chunk) in buf.chunks_exact(3).enumerate() {
                let t = u24_from_le_bytes(chunk);
                let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
                for j in 0..4 {
                    let a = ((d >> (6 * j)) & 0x7) as i16;
                    let b = ((d >> (6 * j + 3)) & 0x7) as i16;
                    r[4 * i + j] = a - b;
                }
            }
        }
        _ => return Err(Error::param("eta", "must be 2 or 3")),
    }

    Ok(poly)
}

/// Rejection-sample uniform values below q from `buf` into `out`.
///
/// Each 3-byte group yields two 12-bit candidates. Sampling stops when `out`
/// is full or the buffer runs out; the number of values written is returned.
pub fn uniform_rejection(buf: &[u8], out: &mut [i16]) -> usize {
    let q = KyberField::Q as u16;
    let mut ctr = 0;

    for chunk in buf.chunks_exact(3) {
        if ctr >= out.len() {
            break;
        }
        let t = u24_from_le_bytes(chunk);
        let d1 = (t & 0xFFF) as u16;
        let d2 = (t >> 12) as u16;

        if d1 < q {
            out[ctr] = d1 as i16;
            ctr += 1;
        }
        if d2 < q && ctr < out.len() {
            out[ctr] = d2 as i16;
            ctr += 1;
        }
    }

    ctr
}

/// Sample one uniform polynomial from the XOF stream keyed by `entry_seed`.
///
/// The first 504 bytes are consumed first; a shortfall is completed from the
/// remaining bytes of the 672-byte stream, then from further blocks of the
/// same stream.
pub fn sample_uniform<E: SeedExpander + ?Sized>(expander: &E, entry_seed: &[u8]) -> Result<Poly> {
    let mut poly = Poly::zero(Domain::Ntt);
    let mut buf = vec![0u8; KYBER_MATRIX_XOF_BYTES];
    expander.extend(entry_seed, &mut buf);

    let coeffs = poly.coeffs_mut();
    let mut ctr = uniform_rejection(&buf[..KYBER_MATRIX_FIRST_PASS_BYTES], coeffs);
    let mut consumed = KYBER_MATRIX_FIRST_PASS_BYTES;

    while ctr < KYBER_N {
        if consumed == buf.len() {
            let next = buf.len() + SHAKE128_RATE;
            if next > MATRIX_XOF_MAX_BYTES {
                return Err(Error::Processing {
                    operation: "sample_uniform",
                    details: "XOF stream exhausted before 256 coefficients were accepted",
                });
            }
            buf.resize(next, 0);
            expander.extend(entry_seed, &mut buf);
        }
        ctr += uniform_rejection(&buf[consumed..], &mut coeffs[ctr..]);
        consumed = buf.len();
    }

    Ok(poly)
}

/// Generate the public `k x k` matrix from a 32-byte seed.
///
/// Entry `(i, j)` is sampled from `extend(digest(seed || a || b))` with
/// `(a, b) = (i, j)` when `transposed` and `(j, i)` otherwise. All entries
/// are tagged [`Domain::Ntt`].
pub fn generate_matrix<E: SeedExpander + ?Sized>(
    expander: &E,
    seed: &[u8],
    transposed: bool,
    k: usize,
) -> Result<Vec<PolyVec>> {
    validate::length("generate_matrix seed", seed.len(), KYBER_SYM_BYTES)?;
    validate::parameter(
        SecurityLevel::from_k(k).is_some(),
        "k",
        "must be 2, 3 or 4",
    )?;

    let mut matrix = Vec::with_capacity(k);
    for i in 0..k {
        let mut row = Vec::with_capacity(k);
        for j in 0..k {
            let (a, b) = if transposed { (i, j) } else { (j, i) };
            let entry_seed = expander.digest_parts(&[seed, &[a as u8, b as u8][..]]);
            row.push(sample_uniform(expander, &entry_seed)?);
        }
        matrix.push(PolyVec::from_polys(row));
    }

    Ok(matrix)
}

/// Keyed noise sampler: `CBD_eta(extend(digest(seed || nonce), 64 * eta))`
pub fn noise_poly<E: SeedExpander + ?Sized>(
    expander: &E,
    seed: &[u8],
    nonce: u8,
    eta: u8,
) -> Result<Poly> {
    validate::length("noise_poly seed", seed.len(), KYBER_SYM_BYTES)?;
    validate::eta(eta)?;

    let mut buf = Zeroizing::new(vec![0u8; cbd_buffer_len(eta)]);
    expander.digest_then_extend(&[seed, &[nonce][..]], &mut buf);
    centered_binomial(&buf, eta)
}
