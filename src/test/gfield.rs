use crate::gfield::{self, AES_MOD_POLY};

#[test]
fn inverse_round_trips_for_every_nonzero_element() {
    for a in 1..=255u8 {
        let inv = gfield::inverse(a, AES_MOD_POLY);
        assert_eq!(gfield::mul(a, inv, AES_MOD_POLY), 1, "a = {a}");
    }
}

#[test]
fn inverse_of_zero_is_zero_by_convention() {
    assert_eq!(gfield::inverse(0, AES_MOD_POLY), 0);
}

#[test]
fn mul_is_commutative() {
    for a in [0x57, 0x83, 0x01, 0xFF] {
        for b in [0x13, 0x00, 0xAB] {
            assert_eq!(gfield::mul(a, b, AES_MOD_POLY), gfield::mul(b, a, AES_MOD_POLY));
        }
    }
}

#[test]
fn known_aes_multiplication() {
    // 0x57 * 0x83 = 0xC1, the textbook AES GF(2^8) example.
    assert_eq!(gfield::mul(0x57, 0x83, AES_MOD_POLY), 0xC1);
}

#[test]
fn aes_poly_is_among_the_degree8_irreducibles() {
    assert!(gfield::all_irreducible_degree8().contains(&AES_MOD_POLY));
}

#[test]
fn is_irreducible_rejects_a_known_reducible_polynomial() {
    // x^8 + 1 = (x+1)(x^7+x^6+...+1) over GF(2).
    assert!(!gfield::is_irreducible(0x101, 8));
}

#[test]
fn factorize_recombines_to_the_original_polynomial() {
    let poly = 0b1101_1010;
    let factors = gfield::factorize(poly);
    assert!(!factors.is_empty());
    let product = factors.iter().fold(1i32, |acc, &f| {
        // multiply over GF(2): repeated shift-and-xor, the inverse of poly_div.
        let mut result = 0;
        let mut a = acc;
        let mut b = f;
        while b != 0 {
            if b & 1 != 0 {
                result ^= a;
            }
            a <<= 1;
            b >>= 1;
        }
        result
    });
    assert_eq!(product, poly);
}
