//! Core byte containers with security guarantees

use core::fmt;
use core::ops::Deref;
use mpckyber_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::validate;
use crate::Result;

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("SecretBytes::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// First `len` bytes, e.g. a truncated key for a shorter symmetric primitive
    pub fn prefix(&self, len: usize) -> &[u8] {
        &self.data[..len.min(N)]
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(SecretBytes::<32>::from_slice(&[0u8; 31]).is_err());
        assert!(SecretBytes::<32>::from_slice(&[7u8; 32]).is_ok());
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretBytes::<4>::new([1, 2, 3, 4]);
        assert_eq!(format!("{:?}", secret), "SecretBytes<4>[REDACTED]");
    }

    #[test]
    fn test_prefix_and_equality() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let a = SecretBytes::<32>::random(&mut rng);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.prefix(16), &a.as_ref()[..16]);
        assert_eq!(a.prefix(64).len(), 32);
    }
}
