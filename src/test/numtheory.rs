use {
    crate::numtheory::{extended_gcd, gcd, jacobi_symbol, legendre_symbol, mod_exp},
    num_bigint::BigInt,
    num_traits::One,
};

#[test]
fn mod_exp_matches_pow_mod() {
    let base = BigInt::from(7);
    let exp = BigInt::from(560);
    let m = BigInt::from(561);
    assert_eq!(mod_exp(&base, &exp, &m), BigInt::one());
}

#[test]
fn gcd_of_coprime_is_one() {
    assert_eq!(gcd(&BigInt::from(17), &BigInt::from(23)), BigInt::one());
}

#[test]
fn extended_gcd_satisfies_bezout() {
    let (a, b) = (BigInt::from(240), BigInt::from(46));
    let (g, x, y) = extended_gcd(&a, &b);
    assert_eq!(g, gcd(&a, &b));
    assert_eq!(&a * &x + &b * &y, g);
}

#[test]
fn jacobi_symbol_known_values() {
    assert_eq!(jacobi_symbol(&BigInt::from(1001), &BigInt::from(9907)), -1);
    assert_eq!(jacobi_symbol(&BigInt::from(19), &BigInt::from(45)), 1);
}

#[test]
fn legendre_symbol_quadratic_residue() {
    assert_eq!(legendre_symbol(&BigInt::from(4), &BigInt::from(7)), 1);
    assert_eq!(legendre_symbol(&BigInt::from(5), &BigInt::from(7)), -1);
}
