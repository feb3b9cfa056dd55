//! Shared helpers for the mpckyber integration and property tests

use mpckyber_kem::kyber::{CpaCiphertext, SecurityLevel};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Every supported security level, smallest first
pub const ALL_LEVELS: [SecurityLevel; 3] = [
    SecurityLevel::Kyber512,
    SecurityLevel::Kyber768,
    SecurityLevel::Kyber1024,
];

/// Deterministic RNG so failures reproduce
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Copy of `ct` with one bit flipped
pub fn flip_bit(ct: &CpaCiphertext, bit: usize) -> CpaCiphertext {
    let mut tampered = ct.clone();
    let bytes = tampered.as_bytes_mut();
    let len = bytes.len();
    bytes[(bit / 8) % len] ^= 1 << (bit % 8);
    tampered
}

/// Centered distance between two residues mod `q`
pub fn centered_distance(a: i32, b: i32, q: i32) -> i32 {
    let d = (a - b).rem_euclid(q);
    d.min(q - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_distance() {
        assert_eq!(centered_distance(0, 3328, 3329), 1);
        assert_eq!(centered_distance(10, 5, 3329), 5);
        assert_eq!(centered_distance(0, 1664, 3329), 1664);
    }

    #[test]
    fn test_flip_bit_changes_one_bit() {
        let ct = CpaCiphertext::new(vec![0u8; 4]);
        let flipped = flip_bit(&ct, 9);
        assert_eq!(flipped.as_bytes(), &[0, 2, 0, 0]);
    }
}
