//! polynomial.rs - Ring elements tagged with their representation domain
//!
//! Every arithmetic entry point checks the tag, so combining operands from
//! different domains (multiplying coefficient-domain polynomials through the
//! NTT path, adding a Montgomery-scaled product to a plain one) fails with
//! [`Error::DomainMismatch`] instead of producing silently wrong results.

use core::fmt;

use mpckyber_params::pqc::kyber::KYBER_N;
use zeroize::Zeroize;

use super::ntt::{basemul_montgomery, inv_ntt, ntt};
use super::params::KyberField;
use super::reduce::{barrett_reduce, to_mont};
use crate::error::{Error, Result};

/// Representation domain of a ring element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Coefficient domain.
    Normal,
    /// NTT evaluation domain, no extra scaling.
    Ntt,
    /// NTT evaluation domain carrying the `R^-1` factor of a pointwise product.
    NttMontgomery,
}

impl Domain {
    /// Lower-case name used in error messages and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Normal => "normal",
            Domain::Ntt => "ntt",
            Domain::NttMontgomery => "ntt-montgomery",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A polynomial in R_q = Z_q[X]/(X^256 + 1) with q = 3329.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: [i16; KYBER_N],
    #[zeroize(skip)]
    domain: Domain,
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly")
            .field("domain", &self.domain)
            .field("head", &&self.coeffs[..8])
            .finish_non_exhaustive()
    }
}

impl Poly {
    /// The zero polynomial in the given domain
    pub fn zero(domain: Domain) -> Self {
        Self {
            coeffs: [0; KYBER_N],
            domain,
        }
    }

    /// Wraps raw coefficients, declaring their domain
    pub fn from_coeffs(coeffs: [i16; KYBER_N], domain: Domain) -> Self {
        Self { coeffs, domain }
    }

    /// Creates a polynomial from a slice of exactly 256 coefficients
    pub fn from_slice(coeffs: &[i16], domain: Domain) -> Result<Self> {
        if coeffs.len() != KYBER_N {
            return Err(Error::Length {
                context: "Poly::from_slice",
                expected: KYBER_N,
                actual: coeffs.len(),
            });
        }
        let mut poly = Self::zero(domain);
        poly.coeffs.copy_from_slice(coeffs);
        Ok(poly)
    }

    /// Current representation domain
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Coefficient view
    pub fn coeffs(&self) -> &[i16; KYBER_N] {
        &self.coeffs
    }

    /// Mutable coefficient view; the domain tag is left untouched
    pub fn coeffs_mut(&mut self) -> &mut [i16; KYBER_N] {
        &mut self.coeffs
    }

    /// Fails unless the polynomial is in `expected`
    pub fn expect_domain(&self, operation: &'static str, expected: Domain) -> Result<()> {
        if self.domain != expected {
            return Err(Error::DomainMismatch {
                operation,
                expected: expected.as_str(),
                actual: self.domain.as_str(),
            });
        }
        Ok(())
    }

    fn expect_same_domain(&self, operation: &'static str, other: &Self) -> Result<()> {
        other.expect_domain(operation, self.domain)
    }

    /// Barrett-reduce every coefficient into `[0, q]`
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce::<KyberField>(*c);
        }
    }

    /// Coefficient-wise addition, no reduction
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.expect_same_domain("Poly::add", other)?;
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wrapping_add(*b);
        }
        Ok(())
    }

    /// Coefficient-wise subtraction, no reduction
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.expect_same_domain("Poly::sub", other)?;
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wrapping_sub(*b);
        }
        Ok(())
    }

    /// `self + other` as a new polynomial
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.add_assign(other)?;
        Ok(out)
    }

    /// `self - other` as a new polynomial
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.sub_assign(other)?;
        Ok(out)
    }

    /// Forward NTT, `Normal -> Ntt`. Input is reduced first and the output
    /// is reduced again, so it is ready for multiplication.
    pub fn ntt(&mut self) -> Result<()> {
        self.expect_domain("Poly::ntt", Domain::Normal)?;
        self.reduce();
        ntt::<KyberField>(&mut self.coeffs);
        self.reduce();
        self.domain = Domain::Ntt;
        Ok(())
    }

    /// Inverse NTT removing the Montgomery factor, `NttMontgomery -> Normal`
    pub fn inv_ntt_mont(&mut self) -> Result<()> {
        self.expect_domain("Poly::inv_ntt_mont", Domain::NttMontgomery)?;
        inv_ntt::<KyberField>(&mut self.coeffs);
        self.domain = Domain::Normal;
        Ok(())
    }

    /// Multiply every coefficient by `R`, cancelling the `R^-1` of a
    /// pointwise product: `NttMontgomery -> Ntt`
    pub fn to_mont(&mut self) -> Result<()> {
        self.expect_domain("Poly::to_mont", Domain::NttMontgomery)?;
        for c in self.coeffs.iter_mut() {
            *c = to_mont::<KyberField>(*c);
        }
        self.domain = Domain::Ntt;
        Ok(())
    }

    /// Pointwise product of two `Ntt` polynomials, yielding `NttMontgomery`
    pub fn basemul_montgomery(&self, other: &Self) -> Result<Self> {
        self.expect_domain("Poly::basemul_montgomery", Domain::Ntt)?;
        other.expect_domain("Poly::basemul_montgomery", Domain::Ntt)?;
        let mut out = Self::zero(Domain::NttMontgomery);
        basemul_montgomery::<KyberField>(&mut out.coeffs, &self.coeffs, &other.coeffs);
        Ok(out)
    }
}
