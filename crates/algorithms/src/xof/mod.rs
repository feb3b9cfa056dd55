//! Default seed expander: SHA3-256 digest paired with the SHAKE128 XOF
//!
//! Both ends of a protocol must agree on the expander; matrix and noise
//! samples, and therefore every key and ciphertext, change with it.

use mpckyber_api::{SeedExpander, DIGEST_BYTES};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Digest, Sha3_256, Shake128,
};

/// SHA3-256 / SHAKE128 implementation of [`SeedExpander`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha3Expander;

impl SeedExpander for Sha3Expander {
    fn name(&self) -> &'static str {
        "SHA3-256/SHAKE128"
    }

    fn digest_parts(&self, parts: &[&[u8]]) -> [u8; DIGEST_BYTES] {
        let mut hasher = Sha3_256::new();
        for part in parts {
            Digest::update(&mut hasher, *part);
        }
        let mut out = [0u8; DIGEST_BYTES];
        out.copy_from_slice(&hasher.finalize());
        out
    }

    fn extend(&self, seed: &[u8], out: &mut [u8]) {
        let mut xof = Shake128::default();
        Update::update(&mut xof, seed);
        xof.finalize_xof().read(out);
    }
}
