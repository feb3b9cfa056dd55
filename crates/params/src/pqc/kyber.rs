//! Constants for the Kyber key encapsulation mechanism

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: i16 = 3329;

/// q^-1 mod 2^16
pub const KYBER_QINV: u16 = 62209;

/// Barrett multiplier, ((1 << 26) + q / 2) / q
pub const KYBER_BARRETT_V: i32 = 20159;

/// 2^32 mod q, multiplies a value into Montgomery form
pub const KYBER_MONT_R2: i16 = 1353;

/// mont^2 / 128 mod q, final scaling of the inverse NTT
pub const KYBER_INV_NTT_F: i16 = 1441;

/// Size of every symmetric seed, message and derived key in bytes
pub const KYBER_SYM_BYTES: usize = 32;

/// Size of a 12-bit packed polynomial in bytes
pub const KYBER_POLY_BYTES: usize = 384;

/// Size of the IND-CPA key generation seed (rho || sigma)
pub const KYBER_KEYGEN_SEED_BYTES: usize = 2 * KYBER_SYM_BYTES;

/// Expanded XOF output per matrix entry
pub const KYBER_MATRIX_XOF_BYTES: usize = 672;

/// Portion of the matrix XOF output consumed by the first rejection pass
pub const KYBER_MATRIX_FIRST_PASS_BYTES: usize = 504;

/// Noise parameter of the encryption error terms e1 and e2
pub const KYBER_ETA2: u8 = 2;

/// Kyber security level, selecting the module rank k
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SecurityLevel {
    /// k = 2
    Kyber512,
    /// k = 3
    Kyber768,
    /// k = 4
    Kyber1024,
}

impl SecurityLevel {
    /// Every supported level, smallest first
    pub const ALL: [SecurityLevel; 3] = [
        SecurityLevel::Kyber512,
        SecurityLevel::Kyber768,
        SecurityLevel::Kyber1024,
    ];

    /// Maps a module rank to its level, `None` for unsupported ranks
    pub const fn from_k(k: usize) -> Option<Self> {
        match k {
            2 => Some(SecurityLevel::Kyber512),
            3 => Some(SecurityLevel::Kyber768),
            4 => Some(SecurityLevel::Kyber1024),
            _ => None,
        }
    }

    /// Module rank k
    pub fn k(self) -> usize {
        self.params().k
    }

    /// Constant parameter table for this level
    pub fn params(self) -> &'static KyberLevelParams {
        match self {
            SecurityLevel::Kyber512 => &KYBER512,
            SecurityLevel::Kyber768 => &KYBER768,
            SecurityLevel::Kyber1024 => &KYBER1024,
        }
    }
}

/// Structure containing the parameters of one Kyber security level
#[derive(Debug, PartialEq, Eq)]
pub struct KyberLevelParams {
    /// Algorithm name
    pub name: &'static str,

    /// Number of polynomials (dimension)
    pub k: usize,

    /// Noise parameter for s, e and r
    pub eta1: u8,

    /// Noise parameter for e1 and e2
    pub eta2: u8,

    /// Compression bits of the ciphertext vector u
    pub du: usize,

    /// Compression bits of the ciphertext polynomial v
    pub dv: usize,

    /// Size of the compressed vector u in bytes
    pub polyvec_compressed_bytes: usize,

    /// Size of the compressed polynomial v in bytes
    pub poly_compressed_bytes: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,
}

/// Kyber-512 parameters
pub const KYBER512: KyberLevelParams = KyberLevelParams {
    name: "Kyber-512",
    k: 2,
    eta1: 3,
    eta2: KYBER_ETA2,
    du: 10,
    dv: 4,
    polyvec_compressed_bytes: 2 * 320,
    poly_compressed_bytes: 128,
    public_key_size: 2 * KYBER_POLY_BYTES + KYBER_SYM_BYTES,
    secret_key_size: 2 * KYBER_POLY_BYTES,
    ciphertext_size: 2 * 320 + 128,
};

/// Kyber-768 parameters
pub const KYBER768: KyberLevelParams = KyberLevelParams {
    name: "Kyber-768",
    k: 3,
    eta1: 2,
    eta2: KYBER_ETA2,
    du: 10,
    dv: 4,
    polyvec_compressed_bytes: 3 * 320,
    poly_compressed_bytes: 128,
    public_key_size: 3 * KYBER_POLY_BYTES + KYBER_SYM_BYTES,
    secret_key_size: 3 * KYBER_POLY_BYTES,
    ciphertext_size: 3 * 320 + 128,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberLevelParams = KyberLevelParams {
    name: "Kyber-1024",
    k: 4,
    eta1: 2,
    eta2: KYBER_ETA2,
    du: 11,
    dv: 5,
    polyvec_compressed_bytes: 4 * 352,
    poly_compressed_bytes: 160,
    public_key_size: 4 * KYBER_POLY_BYTES + KYBER_SYM_BYTES,
    secret_key_size: 4 * KYBER_POLY_BYTES,
    ciphertext_size: 4 * 352 + 160,
};
