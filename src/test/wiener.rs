use {crate::wiener::attack, num_bigint::BigInt};

#[test]
fn recovers_small_private_exponent() {
    // n = 90581 = 173 * 523, phi = 172*522 = 89784, d = 5, e = d^-1 mod phi = 17993
    let n = BigInt::from(90581);
    let e = BigInt::from(17993);

    let result = attack(&e, &n).expect("attack should succeed against a small d");
    assert_eq!(result.d, BigInt::from(5));
}

#[test]
fn fails_against_a_safe_exponent() {
    let n = BigInt::from(90581);
    let e = BigInt::from(65537);
    let result = attack(&e, &n);
    assert!(result.is_err() || result.unwrap().d != BigInt::from(5));
}
