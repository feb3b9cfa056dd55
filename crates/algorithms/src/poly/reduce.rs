//! Modular reduction kernels
//!
//! These are the only functions that touch the modulus directly. Everything
//! above them (NTT, sampling, codec) routes reduction through here.

use super::params::Modulus;

/// Montgomery reduction: returns `a * 2^-16 mod q` in `(-q, q)`.
///
/// `a` must satisfy `|a| < q * 2^15`.
#[inline(always)]
pub fn montgomery_reduce<M: Modulus>(a: i32) -> i16 {
    let u = (a as i16).wrapping_mul(M::QINV as i16);
    ((a - i32::from(u) * i32::from(M::Q)) >> 16) as i16
}

/// Barrett reduction: returns the representative of `a mod q` in `[0, q]`.
#[inline(always)]
pub fn barrett_reduce<M: Modulus>(a: i16) -> i16 {
    let t = ((M::BARRETT_V * i32::from(a)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(M::Q))
}

/// Subtract q, then add it back if the result went negative.
///
/// Maps `[0, 2q)` onto `[0, q)` with a shift-and-mask instead of a branch.
#[inline(always)]
pub fn conditional_sub_q<M: Modulus>(a: i16) -> i16 {
    let a = a.wrapping_sub(M::Q);
    a.wrapping_add((a >> 15) & M::Q)
}

/// Canonical representative in `[0, q)` of any 16-bit value.
#[inline(always)]
pub fn freeze<M: Modulus>(a: i16) -> i16 {
    conditional_sub_q::<M>(barrett_reduce::<M>(a))
}

/// Montgomery multiplication, `a * b * 2^-16 mod q`.
#[inline(always)]
pub fn fqmul<M: Modulus>(a: i16, b: i16) -> i16 {
    montgomery_reduce::<M>(i32::from(a) * i32::from(b))
}

/// Multiply by 2^16, moving a value into Montgomery form.
#[inline(always)]
pub fn to_mont<M: Modulus>(a: i16) -> i16 {
    montgomery_reduce::<M>(i32::from(a) * i32::from(M::MONT_R2))
}
