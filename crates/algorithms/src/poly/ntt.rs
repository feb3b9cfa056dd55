//! Number Theoretic Transform over Z_q[X]/(X^256 + 1)
//!
//! Raw, untagged kernels over coefficient arrays. The forward transform stops
//! one layer early, so the evaluation domain consists of 128 degree-1
//! residues and multiplication is done pairwise by [`basemul_montgomery`].
//!
//! Output ordering is bit-reversed; nothing outside this module depends on
//! the order as long as both operands of a product were produced by [`ntt`].
//!
//! Domain bookkeeping is the caller's job at this level; the tagged
//! [`Poly`](super::polynomial::Poly) wrapper enforces it.

use mpckyber_params::pqc::kyber::KYBER_N;

use super::params::NttModulus;
use super::reduce::{barrett_reduce, fqmul};

/// In-place forward NTT (Cooley-Tukey butterflies).
///
/// Input coefficients must satisfy `|a| <= q`; outputs are bounded by `8q`
/// and are not reduced.
pub fn ntt<M: NttModulus>(r: &mut [i16; KYBER_N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < KYBER_N {
            let zeta = M::ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul::<M>(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// In-place inverse NTT (Gentleman-Sande butterflies), followed by
/// multiplication with `mont^2 / 128`.
///
/// The final scaling both divides by 128 and cancels one Montgomery factor,
/// so an input carrying `R^-1` from [`basemul_montgomery`] comes out in the
/// plain coefficient domain. Applied directly to an [`ntt`] output, the
/// result is `a * R`.
pub fn inv_ntt<M: NttModulus>(r: &mut [i16; KYBER_N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < KYBER_N {
            let zeta = M::ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce::<M>(t + r[j + len]);
                r[j + len] -= t;
                r[j + len] = fqmul::<M>(zeta, r[j + len]);
            }
            start += 2 * len;
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = fqmul::<M>(*c, M::INV_NTT_F);
    }
}

/// Product of two degree-1 residues modulo `X^2 - zeta`.
#[inline(always)]
fn basemul<M: NttModulus>(a: &[i16], b: &[i16], zeta: i16) -> (i16, i16) {
    let r0 = fqmul::<M>(fqmul::<M>(a[1], b[1]), zeta) + fqmul::<M>(a[0], b[0]);
    let r1 = fqmul::<M>(a[0], b[1]) + fqmul::<M>(a[1], b[0]);
    (r0, r1)
}

/// Pointwise product of two NTT-domain arrays.
///
/// Every coefficient picks up a factor `R^-1`; outputs are bounded by `2q`.
pub fn basemul_montgomery<M: NttModulus>(
    r: &mut [i16; KYBER_N],
    a: &[i16; KYBER_N],
    b: &[i16; KYBER_N],
) {
    for i in 0..KYBER_N / 4 {
        let zeta = M::ZETAS[64 + i];
        let base = 4 * i;

        let (r0, r1) = basemul::<M>(&a[base..base + 2], &b[base..base + 2], zeta);
        r[base] = r0;
        r[base + 1] = r1;

        let (r2, r3) = basemul::<M>(&a[base + 2..base + 4], &b[base + 2..base + 4], -zeta);
        r[base + 2] = r2;
        r[base + 3] = r3;
    }
}
