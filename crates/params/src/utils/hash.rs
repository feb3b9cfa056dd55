//! Constants for hash functions

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Rate of SHAKE128 in bytes (one squeeze block)
pub const SHAKE128_RATE: usize = 168;
