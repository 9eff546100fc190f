use crate::{
    rsa::{isqrt, PrimalityTestKind},
    RsaError, RsaService,
};
use num_bigint::BigInt;
use rand::Rng;

#[test]
fn encrypt_then_decrypt_round_trips() {
    let mut service = RsaService::new(PrimalityTestKind::MillerRabin, 512, 0.99);
    service.generate_new_keys();

    let n = service.public_key().unwrap().n.clone();
    let mut rng = rand::thread_rng();

    let messages = [
        BigInt::from(0),
        BigInt::from(1),
        &n - BigInt::from(1),
        BigInt::from(rng.gen_range(2u64..1_000_000_000)),
        BigInt::from(rng.gen_range(2u64..1_000_000_000)),
    ];

    for message in messages {
        let ciphertext = service.encrypt(&message).unwrap();
        assert_eq!(
            service.decrypt(&ciphertext).unwrap(),
            message,
            "round trip failed for message {message}"
        );
    }
}

#[test]
fn encrypt_rejects_oversized_message() {
    let mut service = RsaService::new(PrimalityTestKind::MillerRabin, 32, 0.99);
    service.generate_new_keys();

    let n = service.public_key().unwrap().n.clone();
    assert_eq!(service.encrypt(&n), Err(RsaError::MessageTooLarge));
}

#[test]
fn weak_keys_have_small_private_exponent() {
    let mut service = RsaService::new(PrimalityTestKind::MillerRabin, 64, 0.99);
    service.generate_weak_keys();

    let key = service.private_key().unwrap();
    let n = &service.public_key().unwrap().n;
    let n_root4 = isqrt(&isqrt(n));
    assert!(key.d < n_root4);

    let message = BigInt::from(7);
    let ciphertext = service.encrypt(&message).unwrap();
    assert_eq!(service.decrypt(&ciphertext).unwrap(), message);
}
