//! Wiener's continued-fraction attack: recovers a small RSA private
//! exponent `d` from the public key `(e, n)` alone, when `d` is small
//! enough relative to `n` to appear as a convergent of `e/n`'s continued
//! fraction expansion.

use {num_bigint::BigInt, num_integer::Integer, num_traits::{One, Signed, Zero}, std::fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convergent {
    pub k: BigInt,
    pub d: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackResult {
    pub d: BigInt,
    pub phi_n: BigInt,
    pub convergents: Vec<Convergent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WienerError {
    AttackFailed,
}

impl fmt::Display for WienerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wiener's attack failed: no valid key was found")
    }
}

impl std::error::Error for WienerError {}

/// Attempts to recover the private exponent for public key `(e, n)`.
pub fn attack(e: &BigInt, n: &BigInt) -> Result<AttackResult, WienerError> {
    let coeffs = continued_fraction(e, n);
    let mut convergents = Vec::new();

    let mut p_prev = BigInt::one();
    let mut q_prev = BigInt::zero();
    let mut p_curr = coeffs[0].clone();
    let mut q_curr = BigInt::one();

    for (i, coeff) in coeffs.iter().enumerate() {
        if i > 0 {
            let p_next = coeff * &p_curr + &p_prev;
            let q_next = coeff * &q_curr + &q_prev;
            p_prev = p_curr;
            q_prev = q_curr;
            p_curr = p_next;
            q_curr = q_next;
        }

        let k = p_curr.clone();
        let d = q_curr.clone();
        convergents.push(Convergent { k: k.clone(), d: d.clone() });

        if k.is_zero() || d.is_zero() || d.is_even() {
            continue;
        }

        let ed_minus_1 = e * &d - BigInt::one();
        if (&ed_minus_1 % &k) != BigInt::zero() {
            continue;
        }

        let phi_n = &ed_minus_1 / &k;
        if let Some((p, q)) = solve_quadratic(n, &phi_n) {
            if &p * &q == *n {
                return Ok(AttackResult { d, phi_n, convergents });
            }
        }
    }

    Err(WienerError::AttackFailed)
}

fn continued_fraction(a: &BigInt, b: &BigInt) -> Vec<BigInt> {
    let mut coeffs = Vec::new();
    let mut num = a.clone();
    let mut den = b.clone();

    while den > BigInt::zero() {
        let (div, rem) = num.div_mod_floor(&den);
        coeffs.push(div);
        num = den;
        den = rem;
    }
    coeffs
}

/// Solves `x^2 - b*x + c = 0` for integer roots, where `b = n - phi_n + 1`,
/// returning `(p, q)` with `p >= q` when both roots are integers.
fn solve_quadratic(n: &BigInt, phi_n: &BigInt) -> Option<(BigInt, BigInt)> {
    let b = n - phi_n + BigInt::one();
    let discriminant = &b * &b - BigInt::from(4) * n;

    if discriminant.is_negative() {
        return None;
    }

    let sqrt_d = isqrt(&discriminant);
    if &sqrt_d * &sqrt_d != discriminant {
        return None;
    }

    let p = (&b + &sqrt_d) / BigInt::from(2);
    let q = (&b - &sqrt_d) / BigInt::from(2);
    Some((p, q))
}

fn isqrt(n: &BigInt) -> BigInt {
    let (_, magnitude) = n.clone().into_parts();
    BigInt::from(magnitude.sqrt())
}
