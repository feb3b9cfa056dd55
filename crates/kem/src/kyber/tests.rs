// kem/src/kyber/tests.rs

use super::*;
use mpckyber_api::{Kem, KeyPackaging};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn check_keygen(k: usize, pk_len: usize, sk_len: usize) {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCca::from_k(k).unwrap();
    let kp = kem.keypair(&mut rng).unwrap();

    let pk = <KyberCca as Kem>::public_key(&kp);
    let sk = <KyberCca as Kem>::secret_key(&kp);
    assert_eq!(pk.as_ref().len(), pk_len);
    assert_eq!(sk.as_ref().len(), sk_len);
}

#[test]
fn test_kyber512_keygen() {
    check_keygen(2, 800, 768);
}

#[test]
fn test_kyber768_keygen() {
    check_keygen(3, 1184, 1152);
}

#[test]
fn test_kyber1024_keygen() {
    check_keygen(4, 1568, 1536);
}

#[test]
fn test_encaps_decaps_all_levels() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for (level, ct_len) in [
        (SecurityLevel::Kyber512, 768),
        (SecurityLevel::Kyber768, 1088),
        (SecurityLevel::Kyber1024, 1568),
    ] {
        let kem = KyberCca::new(level);
        let kp = kem.keypair(&mut rng).unwrap();

        let (ct, ss1) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
        assert_eq!(ct.as_ref().len(), ct_len);
        assert_eq!(ss1.as_ref().len(), KYBER_SS_BYTES);

        let ss2 = kem
            .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
            .unwrap();
        assert_eq!(ss1, ss2);
    }
}

#[test]
fn test_invalid_ciphertext() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCca::new(SecurityLevel::Kyber512);
    let kp = kem.keypair(&mut rng).unwrap();
    let (mut ct, ss) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();

    ct.as_bytes_mut()[0] ^= 0xFF;

    // Decapsulation still succeeds, with a different key
    let result = kem.decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct);
    assert!(result.is_ok());
    assert_ne!(result.unwrap(), ss);
}

#[test]
fn test_wrong_key_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCca::new(SecurityLevel::Kyber512);

    let bad_pk = CpaPublicKey::new(vec![0u8; 100]);
    let bad_sk = CpaSecretKey::new(vec![0u8; 100]);
    let bad_ct = CpaCiphertext::new(vec![0u8; 100]);

    assert!(kem.encapsulate(&mut rng, &bad_pk).is_err());

    let kp = kem.keypair(&mut rng).unwrap();
    let (ct, _) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
    assert!(kem
        .decapsulate(&mut rng, &bad_sk, &kp.public_key, &ct)
        .is_err());
    assert!(matches!(
        kem.decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &bad_ct),
        Err(mpckyber_api::Error::InvalidCiphertext { .. })
    ));

    // A key from another level has the wrong shape
    let other = KyberCca::new(SecurityLevel::Kyber768);
    let kp768 = other.keypair(&mut rng).unwrap();
    assert!(matches!(
        kem.encapsulate(&mut rng, &kp768.public_key),
        Err(mpckyber_api::Error::InvalidKey { .. })
    ));
}

#[test]
fn test_unsupported_rank() {
    assert!(KyberCca::from_k(5).is_err());
    assert!(KyberCpa::from_k(1).is_err());
}

#[test]
fn test_deterministic_keypair_from_seed() {
    let kem = KyberCca::new(SecurityLevel::Kyber768);
    let a = kem.keypair_from_seed(&[9u8; 64]).unwrap();
    let b = kem.keypair_from_seed(&[9u8; 64]).unwrap();
    assert_eq!(a.public_key, b.public_key);
    assert_eq!(kem.name(), "Kyber-768");
}

#[test]
fn test_encapsulate_message_matches_decapsulation() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let kem = KyberCca::new(SecurityLevel::Kyber1024);
    let kp = kem.keypair(&mut rng).unwrap();
    let enc = kem.encapsulate_message(&[1u8; 32], &kp.public_key).unwrap();
    let ss = kem
        .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &enc.ciphertext)
        .unwrap();
    assert_eq!(ss, enc.shared_secret);
}

#[test]
fn test_cpa_kem_roundtrip() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for k in 2..=4 {
        let kem = KyberCpa::from_k(k).unwrap();
        let kp = kem.keypair(&mut rng).unwrap();
        for _ in 0..5 {
            let (ct, ss1) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
            let ss2 = kem
                .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
                .unwrap();
            assert_eq!(ss1, ss2);
        }
    }
}

#[test]
fn test_cpa_kem_rejects_wrong_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCpa::new(SecurityLevel::Kyber512);
    let kp = kem.keypair(&mut rng).unwrap();
    let (ct, _) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
    let bad_sk = CpaSecretKey::new(vec![0u8; 10]);
    assert!(kem
        .decapsulate(&mut rng, &bad_sk, &kp.public_key, &ct)
        .is_err());
    assert!(kem
        .encapsulate(&mut rng, &CpaPublicKey::new(vec![0u8; 32]))
        .is_err());
}

#[test]
fn test_key_packaging_through_trait() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCca::new(SecurityLevel::Kyber768);
    let kp = kem.keypair(&mut rng).unwrap();

    let decoy = kem.random_public_key(&mut rng).unwrap();
    let slots = kem.package_two_keys(&kp.public_key, &decoy, 1).unwrap();
    assert_eq!(slots[1], kp.public_key.vector());
    assert_eq!(slots[0], decoy);

    // The receiver rebuilds the chosen key from its slot and the seed slot
    let rebuilt = CpaPublicKey::from_parts(&slots[1], &slots[2]);
    let (ct, ss) = kem.encapsulate(&mut rng, &rebuilt).unwrap();
    let ss2 = kem
        .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
        .unwrap();
    assert_eq!(ss, ss2);

    let hashed = kem.hash_to_public_key(b"slot").unwrap();
    let decoys = vec![decoy, hashed];
    let slots = kem.package_keys(&kp.public_key, &decoys, 0, 3).unwrap();
    assert_eq!(slots.len(), 4);
    assert!(kem.package_keys(&kp.public_key, &decoys, 3, 3).is_err());
}

#[test]
fn test_homomorphic_key_combination() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let kem = KyberCpa::new(SecurityLevel::Kyber512);
    let kp = kem.keypair(&mut rng).unwrap();
    let h = kem.hash_to_public_key(b"r").unwrap();

    let masked = kem.pk_sub(kp.public_key.vector(), &h).unwrap();
    let unmasked = kem.pk_add(&masked, &h).unwrap();
    assert_eq!(unmasked, kp.public_key.vector());

    let mut inplace = kp.public_key.vector().to_vec();
    kem.pk_sub_inplace(&mut inplace, &h).unwrap();
    assert_eq!(inplace, masked);
    kem.pk_add_inplace(&mut inplace, &h).unwrap();
    assert_eq!(inplace, kp.public_key.vector());

    let slots = kem
        .package_keys_random(&mut rng, &kp.public_key, 1, 4)
        .unwrap();
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[1], kp.public_key.vector());
}
