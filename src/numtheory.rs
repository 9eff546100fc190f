//! Modular arithmetic and the number-theoretic symbols RSA and its
//! attacks are built from: modular exponentiation, (extended) GCD, and
//! the Legendre/Jacobi symbols.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// `base^exp mod m`, by repeated squaring. `base` is reduced mod `m` first
/// so negative or oversized bases are handled.
///
/// # Panics
/// Panics if `m` is zero.
pub fn mod_exp(base: &BigInt, exp: &BigInt, m: &BigInt) -> BigInt {
    assert!(!m.is_zero(), "modulus cannot be zero");

    let mut result = BigInt::one();
    let mut base = base.mod_floor(m);
    let mut exp = exp.clone();

    let two = BigInt::from(2);
    while exp > BigInt::zero() {
        if (&exp % &two) == BigInt::one() {
            result = (&result * &base).mod_floor(m);
        }
        base = (&base * &base).mod_floor(m);
        exp /= &two;
    }
    result
}

/// Euclid's algorithm, `gcd(a, b) = gcd(b mod a, a)`. Always non-negative.
///
/// # Panics
/// Panics if both `a` and `b` are zero.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let a = a.abs();
    let b = b.abs();
    assert!(!(a.is_zero() && b.is_zero()), "both arguments are zero");

    if a.is_zero() {
        return b;
    }
    gcd(&b.mod_floor(&a), &a)
}

/// Solves `gcd = a*x + b*y`, returning `(gcd, x, y)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (gcd, x1, y1) = extended_gcd(&b.mod_floor(a), a);
    let x = &y1 - (b / a) * &x1;
    let y = x1;

    (gcd, x, y)
}

/// The Legendre symbol `(a/p)` for an odd prime `p >= 3`, computed via the
/// same reciprocity-step loop as the Jacobi symbol (valid since a prime
/// modulus is a special case of an odd modulus).
///
/// # Panics
/// Panics if `p < 3` or `p` is even.
pub fn legendre_symbol(a: &BigInt, p: &BigInt) -> i32 {
    assert!(*p >= BigInt::from(3) && p.is_odd(), "p must be an odd prime >= 3");
    jacobi_symbol(a, p)
}

/// The Jacobi symbol `(a/n)` for an odd integer `n >= 3`.
///
/// # Panics
/// Panics if `n < 3` or `n` is even.
pub fn jacobi_symbol(a: &BigInt, n: &BigInt) -> i32 {
    assert!(*n >= BigInt::from(3) && n.is_odd(), "n must be an odd integer >= 3");

    let mut a = a.mod_floor(n);
    let mut n = n.clone();
    if a.is_zero() {
        return 0;
    }

    let mut result = 1;
    let zero = BigInt::zero();
    let eight = BigInt::from(8);
    let four = BigInt::from(4);

    while a != zero {
        while a.is_even() {
            a /= 2;
            let n_mod8 = n.mod_floor(&eight);
            if n_mod8 == BigInt::from(3) || n_mod8 == BigInt::from(5) {
                result = -result;
            }
        }

        std::mem::swap(&mut a, &mut n);

        if a.mod_floor(&four) == BigInt::from(3) && n.mod_floor(&four) == BigInt::from(3) {
            result = -result;
        }

        a = a.mod_floor(&n);
    }

    if n == BigInt::one() {
        result
    } else {
        0
    }
}
