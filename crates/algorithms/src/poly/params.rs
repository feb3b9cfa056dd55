//! params.rs - Field configuration for the reduction kernels
//!
//! The modulus and every constant derived from it live on one [`Modulus`]
//! implementation. Kernels take the configuration as a type parameter, so
//! there is no process-wide modulus and tests can run the kernels over an
//! alternate prime.

use mpckyber_params::pqc::kyber::{
    KYBER_BARRETT_V, KYBER_INV_NTT_F, KYBER_MONT_R2, KYBER_Q, KYBER_QINV,
};

/// Basic trait defining the modulus and its derived reduction constants
pub trait Modulus: Copy + Send + Sync + 'static {
    /// The prime modulus q, which must satisfy q < 2^15
    const Q: i16;

    /// q^-1 mod 2^16
    const QINV: u16;

    /// Barrett multiplier ((1 << 26) + q / 2) / q
    const BARRETT_V: i32;

    /// 2^32 mod q, used to move a value into Montgomery form
    const MONT_R2: i16;
}

/// Extended trait for moduli with a degree-256 negacyclic NTT
pub trait NttModulus: Modulus {
    /// Bit-reversed powers of the primitive 256-th root of unity, Montgomery
    /// form, centered representatives
    const ZETAS: [i16; 128];

    /// mont^2 / 128 mod q, folded into the last inverse NTT layer
    const INV_NTT_F: i16;
}

/// The Kyber field, q = 3329
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KyberField;

impl Modulus for KyberField {
    const Q: i16 = KYBER_Q;
    const QINV: u16 = KYBER_QINV;
    const BARRETT_V: i32 = KYBER_BARRETT_V;
    const MONT_R2: i16 = KYBER_MONT_R2;
}

impl NttModulus for KyberField {
    const ZETAS: [i16; 128] = [
        -1044, -758, -359, -1517, 1493, 1422, 287, 202, -171, 622, 1577, 182, 962, -1202, -1474,
        1468, 573, -1325, 264, 383, -829, 1458, -1602, -130, -681, 1017, 732, 608, -1542, 411,
        -205, -1571, 1223, 652, -552, 1015, -1293, 1491, -282, -1544, 516, -8, -320, -666, -1618,
        -1162, 126, 1469, -853, -90, -271, 830, 107, -1421, -247, -951, -398, 961, -1508, -725,
        448, -1065, 677, -1275, -1103, 430, 555, 843, -1251, 871, 1550, 105, 422, 587, 177, -235,
        -291, -460, 1574, 1653, -246, 778, 1159, -147, -777, 1483, -602, 1119, -1590, 644, -872,
        349, 418, 329, -156, -75, 817, 1097, 603, 610, 1322, -1285, -1465, 384, -1215, -136,
        1218, -1335, -874, 220, -1187, -1659, -1185, -1530, -1278, 794, -1510, -854, -870, 478,
        -108, -308, 996, 991, 958, -1460, 1522, 1628,
    ];
    const INV_NTT_F: i16 = KYBER_INV_NTT_F;
}
