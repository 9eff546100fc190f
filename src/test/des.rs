//! The standard FIPS 46 worked example.

use crate::cipher::{des::Des, BlockCipher};

#[test]
fn fips46_known_answer() {
    let key = hex("133457799BBCDFF1");
    let plaintext = hex("0123456789ABCDEF");
    let expected_ciphertext = hex("85E813540F0AB405");

    let mut des = Des::new();
    des.set_key(&key).unwrap();

    let ciphertext = des.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, expected_ciphertext);

    let decrypted = des.decrypt_block(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn fips46_known_answer_all_zero_plaintext() {
    let key = hex("0101010101010101");
    let plaintext = hex("0000000000000000");
    let expected_ciphertext = hex("8CA64DE9C1B123A7");

    let mut des = Des::new();
    des.set_key(&key).unwrap();

    let ciphertext = des.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, expected_ciphertext);

    let decrypted = des.decrypt_block(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn rejects_wrong_key_length() {
    let mut des = Des::new();
    assert!(des.set_key(&[0u8; 7]).is_err());
}

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
