//! Integration tests for the Kyber KEM front-ends

use mpckyber_api::{Kem, KeyPackaging};
use mpckyber_kem::kyber::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use mpckyber_kem::kyber::{CpaPublicKey, KyberCca, KyberCpa, KyberParams};
use mpckyber_algorithms::Sha3Expander;
use mpckyber_tests::{flip_bit, test_rng, ALL_LEVELS};
use rand::RngCore;

const TRIALS: usize = 100;
const LONG_TRIALS: usize = 10_000;

fn cpa_roundtrips(trials: usize) {
    let mut rng = test_rng(1);
    for level in ALL_LEVELS {
        let params = KyberParams::new(level);
        let kp = keypair_cpa(&params, &Sha3Expander, &mut rng).unwrap();
        for _ in 0..trials {
            let mut msg = [0u8; 32];
            let mut coins = [0u8; 32];
            rng.fill_bytes(&mut msg);
            rng.fill_bytes(&mut coins);
            let ct = encrypt_cpa(&params, &Sha3Expander, &msg, &kp.public_key, &coins).unwrap();
            let dec = decrypt_cpa(&params, &kp.secret_key, &ct).unwrap();
            assert_eq!(*dec, msg, "{} decryption failure", params.name());
        }
    }
}

fn cca_roundtrips(trials: usize) {
    let mut rng = test_rng(2);
    for level in ALL_LEVELS {
        let kem = KyberCca::new(level);
        for i in 0..trials {
            // Alternate random and seeded key generation
            let kp = if i % 2 == 0 {
                kem.keypair(&mut rng).unwrap()
            } else {
                let mut seed = [0u8; 64];
                rng.fill_bytes(&mut seed);
                kem.keypair_from_seed(&seed).unwrap()
            };
            let (ct, ss1) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
            let ss2 = kem
                .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
                .unwrap();
            assert_eq!(ss1, ss2, "{} trial {}", kem.name(), i);
        }
    }
}

#[test]
fn test_cpa_roundtrip() {
    cpa_roundtrips(TRIALS);
}

#[test]
fn test_cca_roundtrip() {
    cca_roundtrips(TRIALS);
}

#[test]
#[ignore = "long run, 10k trials per level"]
fn test_cpa_roundtrip_long() {
    cpa_roundtrips(LONG_TRIALS);
}

#[test]
#[ignore = "long run, 10k trials per level"]
fn test_cca_roundtrip_long() {
    cca_roundtrips(LONG_TRIALS);
}

#[test]
fn test_single_bit_flips_are_rejected_implicitly() {
    let mut rng = test_rng(3);
    for level in ALL_LEVELS {
        let kem = KyberCca::new(level);
        let kp = kem.keypair(&mut rng).unwrap();
        let (ct, ss) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
        let bits = ct.as_bytes().len() * 8;

        for bit in (0..bits).step_by(bits / 16) {
            let tampered = flip_bit(&ct, bit);
            let rejected = kem
                .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &tampered)
                .unwrap();
            assert_ne!(rejected, ss, "{} bit {}", kem.name(), bit);
        }
    }
}

#[test]
fn test_wrong_recipient_gets_unrelated_key() {
    let mut rng = test_rng(4);
    let kem = KyberCca::new(ALL_LEVELS[1]);
    let alice = kem.keypair(&mut rng).unwrap();
    let bob = kem.keypair(&mut rng).unwrap();

    let (ct, ss) = kem.encapsulate(&mut rng, &alice.public_key).unwrap();
    let other = kem
        .decapsulate(&mut rng, &bob.secret_key, &bob.public_key, &ct)
        .unwrap();
    assert_ne!(ss, other);
}

#[test]
fn test_cpa_kem_roundtrip() {
    let mut rng = test_rng(5);
    for level in ALL_LEVELS {
        let kem = KyberCpa::new(level);
        let kp = kem.keypair(&mut rng).unwrap();
        for _ in 0..20 {
            let (ct, ss1) = kem.encapsulate(&mut rng, &kp.public_key).unwrap();
            let ss2 = kem
                .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
                .unwrap();
            assert_eq!(ss1, ss2);
        }
    }
}

/// 1-of-n transfer: the receiver's real key hides among decoys, the sender
/// encapsulates to every slot and only the chosen one is recoverable.
#[test]
fn test_one_of_n_transfer_flow() {
    let mut rng = test_rng(6);
    let kem = KyberCca::new(ALL_LEVELS[0]);
    let n = 4;
    let choice = 2;

    let kp = kem.keypair(&mut rng).unwrap();
    let slots = kem
        .package_keys_random(&mut rng, &kp.public_key, choice, n)
        .unwrap();
    assert_eq!(slots.len(), n + 1);
    let seed = &slots[n];

    let mut received = Vec::with_capacity(n);
    for slot in &slots[..n] {
        let pk = CpaPublicKey::from_parts(slot, seed);
        received.push(kem.encapsulate(&mut rng, &pk).unwrap());
    }

    for (i, (ct, ss)) in received.iter().enumerate() {
        let got = kem
            .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, ct)
            .unwrap();
        assert_eq!(got == *ss, i == choice, "slot {}", i);
    }
}

/// Masking a key with a hashed vector and unmasking it restores the key
#[test]
fn test_pk_add_then_sub_restores_key() {
    let mut rng = test_rng(7);
    for level in ALL_LEVELS {
        let kem = KyberCpa::new(level);
        let kp = kem.keypair(&mut rng).unwrap();
        let random = kem.random_public_key(&mut rng).unwrap();
        let hashed = kem.hash_to_public_key(b"session 42").unwrap();

        for mask in [&random, &hashed] {
            let masked = kem.pk_add(kp.public_key.vector(), mask).unwrap();
            assert_ne!(masked, kp.public_key.vector());
            let restored = kem.pk_sub(&masked, mask).unwrap();
            assert_eq!(restored, kp.public_key.vector());
        }
    }
}

#[test]
fn test_two_key_packaging() {
    let mut rng = test_rng(8);
    let kem = KyberCpa::new(ALL_LEVELS[2]);
    let kp = kem.keypair(&mut rng).unwrap();
    let decoy = kem.hash_to_public_key(b"decoy").unwrap();

    for sigma in 0..2 {
        let slots = kem.package_two_keys(&kp.public_key, &decoy, sigma).unwrap();
        let pk = CpaPublicKey::from_parts(&slots[sigma], &slots[2]);
        assert_eq!(pk, kp.public_key);
        let (ct, ss) = kem.encapsulate(&mut rng, &pk).unwrap();
        let got = kem
            .decapsulate(&mut rng, &kp.secret_key, &kp.public_key, &ct)
            .unwrap();
        assert_eq!(got, ss);
    }
    assert!(kem.package_two_keys(&kp.public_key, &decoy, 2).is_err());
}
