// File: crates/api/src/traits/expand.rs

//! Hash/XOF collaborator interface
//!
//! Every deterministic expansion in the lattice core (matrix generation, noise
//! sampling, the CCA hash chain) goes through a [`SeedExpander`]. Both parties
//! of a protocol run must use the same implementation.

/// Output length of [`SeedExpander::digest`] in bytes
pub const DIGEST_BYTES: usize = 32;

/// A fixed-length hash paired with an extendable-output function.
pub trait SeedExpander: Send + Sync {
    /// Short identifier used in log events
    fn name(&self) -> &'static str;

    /// Hash the concatenation of `parts` to a fixed-length digest.
    fn digest_parts(&self, parts: &[&[u8]]) -> [u8; DIGEST_BYTES];

    /// Fill `out` with the XOF stream keyed by `seed`.
    ///
    /// The stream is prefix-consistent: a shorter `out` receives a prefix of a
    /// longer one for the same seed.
    fn extend(&self, seed: &[u8], out: &mut [u8]);

    /// Hash a single buffer.
    fn digest(&self, input: &[u8]) -> [u8; DIGEST_BYTES] {
        self.digest_parts(&[input])
    }

    /// `extend(digest(parts))`, the composition the samplers and the CCA
    /// transform use everywhere.
    fn digest_then_extend(&self, parts: &[&[u8]], out: &mut [u8]) {
        let seed = self.digest_parts(parts);
        self.extend(&seed, out);
    }
}
