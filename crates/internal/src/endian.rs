//! Endianness utility functions
//!
//! Callers guarantee the slice is long enough; these are used on fixed-stride
//! chunks produced by `chunks_exact`.

/// Read the first 3 bytes as a little-endian unsigned value
#[inline(always)]
pub fn u24_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) | (u32::from(bytes[1]) << 8) | (u32::from(bytes[2]) << 16)
}

/// Read the first 4 bytes as a little-endian unsigned value
#[inline(always)]
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(u24_from_le_bytes(&bytes), 0x030201);
        assert_eq!(u32_from_le_bytes(&bytes), 0x04030201);
        assert_eq!(u24_from_le_bytes(&bytes[2..]), 0x050403);
    }
}
