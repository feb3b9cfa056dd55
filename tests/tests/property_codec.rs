//! Property-based tests for the ring engine and the byte codec

use mpckyber_algorithms::poly::ntt::{inv_ntt, ntt};
use mpckyber_algorithms::poly::reduce::{barrett_reduce, freeze, montgomery_reduce};
use mpckyber_algorithms::poly::serialize::{
    compress_poly, decompress_poly, poly_from_bytes, poly_from_message, poly_to_bytes,
    poly_to_message, polyvec_from_bytes, polyvec_to_bytes,
};
use mpckyber_algorithms::{Domain, KyberField, Poly, PolyVec};
use mpckyber_params::pqc::kyber::{KYBER_N, KYBER_Q};
use mpckyber_tests::centered_distance;
use proptest::prelude::*;

/// 256 canonical coefficients in [0, q)
fn canonical_coeffs() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(0..KYBER_Q, KYBER_N)
}

fn to_array(v: &[i16]) -> [i16; KYBER_N] {
    let mut out = [0i16; KYBER_N];
    out.copy_from_slice(v);
    out
}

proptest! {
    #[test]
    fn poly_bytes_roundtrip(coeffs in canonical_coeffs()) {
        let p = Poly::from_coeffs(to_array(&coeffs), Domain::Ntt);
        let bytes = poly_to_bytes(&p);
        prop_assert_eq!(bytes.len(), 384);
        prop_assert_eq!(poly_from_bytes(&bytes, Domain::Ntt).unwrap(), p);
    }

    #[test]
    fn polyvec_bytes_roundtrip(
        k in 2usize..=4,
        coeffs in prop::collection::vec(canonical_coeffs(), 4),
    ) {
        let polys = coeffs[..k]
            .iter()
            .map(|c| Poly::from_coeffs(to_array(c), Domain::Ntt))
            .collect();
        let v = PolyVec::from_polys(polys);
        let bytes = polyvec_to_bytes(&v);
        prop_assert_eq!(bytes.len(), k * 384);
        prop_assert_eq!(polyvec_from_bytes(&bytes, k, Domain::Ntt).unwrap(), v);
    }

    #[test]
    fn compression_error_is_bounded(
        coeffs in canonical_coeffs(),
        d in prop::sample::select(vec![4usize, 5, 10, 11]),
    ) {
        let p = Poly::from_coeffs(to_array(&coeffs), Domain::Normal);
        let back = decompress_poly(&compress_poly(&p, d).unwrap(), d).unwrap();
        let q = i32::from(KYBER_Q);
        // round(q / 2^(d+1))
        let bound = (q + (1 << d)) >> (d + 1);
        for (a, b) in coeffs.iter().zip(back.coeffs().iter()) {
            prop_assert!(centered_distance(i32::from(*a), i32::from(*b), q) <= bound);
        }
    }

    #[test]
    fn message_encoding_roundtrip(msg in any::<[u8; 32]>()) {
        let p = poly_from_message(&msg).unwrap();
        prop_assert_eq!(poly_to_message(&p), msg);
    }

    #[test]
    fn ntt_is_an_involution_up_to_montgomery(coeffs in canonical_coeffs()) {
        let original = to_array(&coeffs);
        let mut p = original;
        ntt::<KyberField>(&mut p);
        for c in p.iter_mut() {
            *c = barrett_reduce::<KyberField>(*c);
        }
        inv_ntt::<KyberField>(&mut p);
        for (i, c) in p.iter().enumerate() {
            let back = freeze::<KyberField>(montgomery_reduce::<KyberField>(i32::from(*c)));
            prop_assert_eq!(back, original[i]);
        }
    }
}
