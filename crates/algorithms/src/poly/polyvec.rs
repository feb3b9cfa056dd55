//! polyvec.rs - Vectors of ring elements
//!
//! A `PolyVec` of length `k` is the module-lattice counterpart of a single
//! [`Poly`]. Domain checks are delegated element-wise, lengths are checked
//! here.

use zeroize::Zeroize;

use super::polynomial::{Domain, Poly};
use crate::error::{validate, Result};

/// A vector of `k` polynomials
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    polys: Vec<Poly>,
}

impl PolyVec {
    /// `k` zero polynomials in `domain`
    pub fn zero(k: usize, domain: Domain) -> Self {
        Self {
            polys: vec![Poly::zero(domain); k],
        }
    }

    /// Wraps an existing list of polynomials
    pub fn from_polys(polys: Vec<Poly>) -> Self {
        Self { polys }
    }

    /// Number of polynomials
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Whether the vector has no polynomials
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Element view
    pub fn polys(&self) -> &[Poly] {
        &self.polys
    }

    /// Mutable element view
    pub fn polys_mut(&mut self) -> &mut [Poly] {
        &mut self.polys
    }

    /// Consumes the vector
    pub fn into_polys(self) -> Vec<Poly> {
        self.polys
    }

    /// Forward NTT on every element
    pub fn ntt(&mut self) -> Result<()> {
        self.polys.iter_mut().try_for_each(Poly::ntt)
    }

    /// Inverse NTT on every element
    pub fn inv_ntt_mont(&mut self) -> Result<()> {
        self.polys.iter_mut().try_for_each(Poly::inv_ntt_mont)
    }

    /// Barrett-reduce every element
    pub fn reduce(&mut self) {
        self.polys.iter_mut().for_each(Poly::reduce);
    }

    fn check_len(&self, context: &'static str, other: &Self) -> Result<()> {
        validate::length(context, other.len(), self.len())
    }

    /// Element-wise addition
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_len("PolyVec::add", other)?;
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b)?;
        }
        Ok(())
    }

    /// Element-wise subtraction
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_len("PolyVec::sub", other)?;
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.sub_assign(b)?;
        }
        Ok(())
    }

    /// `self + other` as a new vector
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.add_assign(other)?;
        Ok(out)
    }

    /// `self - other` as a new vector
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.sub_assign(other)?;
        Ok(out)
    }

    /// Inner product in the NTT domain.
    ///
    /// Both vectors must be `Ntt`. The sum of the pointwise products is
    /// Barrett-reduced and tagged `NttMontgomery`.
    pub fn pointwise_acc_mont(&self, other: &Self) -> Result<Poly> {
        self.check_len("PolyVec::pointwise_acc_mont", other)?;
        validate::parameter(!self.is_empty(), "PolyVec::pointwise_acc_mont", "empty vector")?;

        let mut acc = Poly::zero(Domain::NttMontgomery);
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            let prod = a.basemul_montgomery(b)?;
            acc.add_assign(&prod)?;
        }
        acc.reduce();
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::poly::params::KyberField;
    use crate::poly::reduce::freeze;
    use mpckyber_params::pqc::kyber::KYBER_N;

    fn small_poly(seed: usize, domain: Domain) -> Poly {
        let mut coeffs = [0i16; KYBER_N];
        for (i, c) in coeffs.iter_mut().enumerate() {
            *c = (((i + seed) * 7 % 5) as i16) - 2;
        }
        Poly::from_coeffs(coeffs, domain)
    }

    /// Negacyclic product reduced to canonical coefficients
    fn schoolbook(a: &Poly, b: &Poly) -> [i64; KYBER_N] {
        let mut r = [0i64; KYBER_N];
        for i in 0..KYBER_N {
            for j in 0..KYBER_N {
                let prod = i64::from(a.coeffs()[i]) * i64::from(b.coeffs()[j]);
                if i + j < KYBER_N {
                    r[i + j] += prod;
                } else {
                    r[i + j - KYBER_N] -= prod;
                }
            }
        }
        for c in r.iter_mut() {
            *c = c.rem_euclid(3329);
        }
        r
    }

    #[test]
    fn test_pointwise_acc_matches_schoolbook_inner_product() {
        let k = 3;
        let a = PolyVec::from_polys((0..k).map(|i| small_poly(i, Domain::Normal)).collect());
        let b = PolyVec::from_polys((0..k).map(|i| small_poly(i + 11, Domain::Normal)).collect());

        let mut expected = [0i64; KYBER_N];
        for i in 0..k {
            let p = schoolbook(&a.polys()[i], &b.polys()[i]);
            for (e, c) in expected.iter_mut().zip(p.iter()) {
                *e = (*e + c) % 3329;
            }
        }

        let mut a_hat = a.clone();
        let mut b_hat = b.clone();
        a_hat.ntt().unwrap();
        b_hat.ntt().unwrap();
        let mut acc = a_hat.pointwise_acc_mont(&b_hat).unwrap();
        assert_eq!(acc.domain(), Domain::NttMontgomery);
        acc.inv_ntt_mont().unwrap();

        for i in 0..KYBER_N {
            assert_eq!(i64::from(freeze::<KyberField>(acc.coeffs()[i])), expected[i]);
        }
    }

    #[test]
    fn test_pointwise_acc_rejects_normal_inputs() {
        let a = PolyVec::from_polys(vec![small_poly(0, Domain::Normal); 2]);
        let b = PolyVec::from_polys(vec![small_poly(1, Domain::Normal); 2]);
        assert!(matches!(
            a.pointwise_acc_mont(&b),
            Err(Error::DomainMismatch { .. })
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let a = PolyVec::zero(2, Domain::Ntt);
        let b = PolyVec::zero(3, Domain::Ntt);
        assert!(matches!(a.add(&b), Err(Error::Length { .. })));
        assert!(matches!(a.pointwise_acc_mont(&b), Err(Error::Length { .. })));
    }

    #[test]
    fn test_add_then_sub_is_identity() {
        let a = PolyVec::from_polys(vec![small_poly(3, Domain::Ntt), small_poly(4, Domain::Ntt)]);
        let b = PolyVec::from_polys(vec![small_poly(5, Domain::Ntt), small_poly(6, Domain::Ntt)]);
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        assert_eq!(back, a);
    }
}
