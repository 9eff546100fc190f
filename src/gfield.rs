//! Arithmetic in $GF(2^8)$, the field [Rijndael](crate::Rijndael) does its
//! SubBytes and MixColumns transformations over.
//!
//! Every element of the field is a polynomial of degree < 8 with
//! coefficients in $\\{0, 1\\}$, represented as a byte (bit $i$ is the
//! coefficient of $x^i$). Addition is XOR. Multiplication is polynomial
//! multiplication modulo a degree-8 irreducible polynomial, whose low 8 bits
//! are supplied as `mod_poly` (the implicit $x^8$ term is never stored).

use std::{fmt, sync::OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotIrreducible;

impl fmt::Display for NotIrreducible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("polynomial is not irreducible")
    }
}

impl std::error::Error for NotIrreducible {}

/// `a XOR b`, i.e. addition in $GF(2^8)$.
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply `a` by `b` modulo the irreducible polynomial whose low 8 bits are
/// `mod_poly`.
///
/// Uses the Russian-peasant algorithm: for each of the 8 bits of `b`,
/// conditionally XOR the (doubling) accumulator `a` into the result, then
/// double `a` with reduction (XOR with `mod_poly` whenever the high bit was
/// set before the shift).
pub fn mul(mut a: u8, mut b: u8, mod_poly: u8) -> u8 {
    let mut result = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            result ^= a;
        }
        a = mul_by_x(a, mod_poly);
        b >>= 1;
    }
    result
}

fn mul_by_x(a: u8, mod_poly: u8) -> u8 {
    if a & 0x80 == 0x80 {
        (a << 1) ^ mod_poly
    } else {
        a << 1
    }
}

/// `a^254 mod mod_poly`, which is the multiplicative inverse of `a` in
/// $GF(2^8)$ by Fermat's little theorem (the field has `255` nonzero
/// elements). By convention, the inverse of `0` is `0`, matching the
/// convention the AES S-box construction relies on.
pub fn inverse(a: u8, mod_poly: u8) -> u8 {
    binary_power(a, 254, mod_poly)
}

fn binary_power(mut base: u8, mut power: u32, mod_poly: u8) -> u8 {
    let mut result = 1u8;
    while power != 0 {
        if power & 1 == 1 {
            result = mul(result, base, mod_poly);
        }
        base = mul(base, base, mod_poly);
        power >>= 1;
    }
    result
}

/// [`mul`], but checks that `mod_poly` (with the implicit `x^8` term
/// restored) is actually irreducible first.
pub fn mul_safe(a: u8, b: u8, mod_poly: u8) -> Result<u8, NotIrreducible> {
    if !is_irreducible(0x100 | mod_poly as i32, 8) {
        return Err(NotIrreducible);
    }
    Ok(mul(a, b, mod_poly))
}

/// [`inverse`], but checks that `mod_poly` is actually irreducible first.
pub fn inverse_safe(a: u8, mod_poly: u8) -> Result<u8, NotIrreducible> {
    if !is_irreducible(0x100 | mod_poly as i32, 8) {
        return Err(NotIrreducible);
    }
    Ok(inverse(a, mod_poly))
}

/// Whether `poly` (a polynomial over $GF(2)$, with its degree-`degree` term
/// implicit in the bit above the represented range) is irreducible: it has no
/// factor of degree `1..=degree/2`.
///
/// Trial division against every polynomial of degree `< degree/2 + 1`.
pub fn is_irreducible(poly: i32, degree: i32) -> bool {
    if degree < 1 {
        return false;
    }
    let max_check = 1i32 << (degree / 2 + 1);
    for divisor in 2..max_check {
        if poly_mod(poly, divisor) == 0 {
            return false;
        }
    }
    true
}

fn degree_of(poly: i32) -> i32 {
    if poly == 0 {
        return -1;
    }
    let mut degree = 0;
    let mut t = poly;
    while t > 1 {
        t >>= 1;
        degree += 1;
    }
    degree
}

/// Remainder of polynomial division of `a` by `b` over $GF(2)$.
pub fn poly_mod(mut a: i32, b: i32) -> i32 {
    if a == 0 {
        return 0;
    }
    let divisor_degree = degree_of(b);
    let mut dividend_degree = degree_of(a);
    while dividend_degree >= divisor_degree {
        let shift = dividend_degree - divisor_degree;
        a ^= b << shift;
        dividend_degree = degree_of(a);
    }
    a
}

/// Quotient of polynomial division of `a` by `b` over $GF(2)$.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
pub fn poly_div(mut a: i32, b: i32) -> i32 {
    assert_ne!(b, 0, "division by zero polynomial");
    if a == 0 {
        return 0;
    }
    let divisor_degree = degree_of(b);
    let mut dividend_degree = degree_of(a);
    let mut result = 0i32;
    while dividend_degree >= divisor_degree {
        let shift = dividend_degree - divisor_degree;
        result |= 1 << shift;
        a ^= b << shift;
        dividend_degree = degree_of(a);
    }
    result
}

/// Factorize `poly` into irreducible polynomials of degree `<= 7`.
pub fn factorize(mut poly: i32) -> Vec<i32> {
    let mut result = Vec::new();
    let degree = degree_of(poly);
    if degree <= 0 {
        return result;
    }

    let min_degree = degree.min(7);
    let mut irreducibles = Vec::new();
    for d in 1..=min_degree {
        irreducibles.extend(calculate_all_irreducible(d));
    }

    for irr in irreducibles {
        while poly_mod(poly, irr) == 0 {
            poly = poly_div(poly, irr);
            result.push(irr);
        }
    }
    result
}

fn calculate_all_irreducible(degree: i32) -> Vec<i32> {
    assert!(degree >= 1, "degree cannot be less than one");
    let mut result = Vec::new();
    let mut val = 1i32 << degree;
    let max_value = 1i32 << (degree + 1);
    while val < max_value {
        if is_irreducible(val, degree) {
            result.push(val);
        }
        val += 1;
    }
    result
}

static IRREDUCIBLE_DEGREE8: OnceLock<Vec<u8>> = OnceLock::new();

/// Enumerate the 30 degree-8 irreducible polynomials, memoized process-wide.
/// The low 8 bits of each are returned (the implicit `x^8` term is dropped),
/// so these values are exactly the `mod_poly` arguments accepted elsewhere in
/// this module. `0x1B` (the AES polynomial) is one of them.
pub fn all_irreducible_degree8() -> &'static [u8] {
    IRREDUCIBLE_DEGREE8.get_or_init(|| {
        calculate_all_irreducible(8)
            .into_iter()
            .map(|p| (p & 0xFF) as u8)
            .collect()
    })
}

/// The AES/Rijndael default reduction polynomial, $x^8 + x^4 + x^3 + x + 1$.
pub const AES_MOD_POLY: u8 = 0x1B;
