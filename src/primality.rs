//! Probabilistic primality testing: Fermat, Solovay–Strassen and
//! Miller–Rabin, sharing a common iteration driver that turns a desired
//! confidence level into a round count.

use {
    crate::numtheory::{self, jacobi_symbol},
    num_bigint::{BigInt, RandBigInt},
    num_integer::Integer,
    num_traits::{One, Zero},
    rand::thread_rng,
};

/// A single round's "is `n` a witness-passing value for base `a`" test.
type IterationTester = fn(&BigInt, &BigInt) -> bool;

/// A primality test configured with its own false-positive rate per round;
/// [`PrimalityTest::is_prime`] derives the number of rounds from the
/// caller's desired confidence and that rate.
pub struct PrimalityTest {
    tester: IterationTester,
    error_chance: f64,
}

impl PrimalityTest {
    pub fn fermat() -> Self {
        Self {
            tester: fermat_round,
            error_chance: 0.5,
        }
    }

    pub fn solovay_strassen() -> Self {
        Self {
            tester: solovay_strassen_round,
            error_chance: 0.5,
        }
    }

    pub fn miller_rabin() -> Self {
        Self {
            tester: miller_rabin_round,
            error_chance: 0.25,
        }
    }

    /// Tests whether `n` is prime with at least `probability` confidence
    /// (clamped to the default 0.99 if outside `[0.5, 1.0)`).
    pub fn is_prime(&self, n: &BigInt, probability: f64) -> bool {
        if *n < BigInt::from(2) {
            return false;
        }
        if *n == BigInt::from(3) {
            return true;
        }
        if n.is_even() {
            return *n == BigInt::from(2);
        }
        if *n < BigInt::from(4) {
            return true;
        }

        let rounds = calculate_iterations(probability, self.error_chance);
        let mut rng = thread_rng();
        let upper = n - BigInt::from(3);

        for _ in 0..rounds {
            let a = rng.gen_bigint_range(&BigInt::zero(), &upper) + BigInt::from(2);
            if !(self.tester)(n, &a) {
                return false;
            }
        }
        true
    }
}

fn calculate_iterations(probability: f64, error_chance: f64) -> u32 {
    let probability = if !(0.5..1.0).contains(&probability) {
        0.99
    } else {
        probability
    };
    // k >= ln(1-p) / ln(errorChance)
    let k = (1.0 - probability).ln() / error_chance.ln();
    k.ceil() as u32
}

fn fermat_round(n: &BigInt, a: &BigInt) -> bool {
    let n_minus_1 = n - BigInt::one();
    numtheory::mod_exp(a, &n_minus_1, n) == BigInt::one()
}

fn solovay_strassen_round(n: &BigInt, a: &BigInt) -> bool {
    if numtheory::gcd(a, n) > BigInt::one() {
        return false;
    }

    let n_minus_1_div_2 = (n - BigInt::one()) >> 1u32;
    let left = numtheory::mod_exp(a, &n_minus_1_div_2, n);

    let jacobi = BigInt::from(jacobi_symbol(a, n));
    let right = jacobi.mod_floor(n);

    left == right
}

fn miller_rabin_round(n: &BigInt, a: &BigInt) -> bool {
    let n_minus_1 = n - BigInt::one();
    let (d, s) = decompose(&n_minus_1);

    let mut x = numtheory::mod_exp(a, &s, n);
    if x == BigInt::one() {
        return true;
    }

    for _ in 0..d {
        if x == n_minus_1 {
            return true;
        }
        x = numtheory::mod_exp(&x, &BigInt::from(2), n);
    }

    false
}

/// Writes `n_minus_1 = 2^d * s` with `s` odd, returning `(d, s)`.
fn decompose(n_minus_1: &BigInt) -> (u64, BigInt) {
    let mut s = n_minus_1.clone();
    let mut d = 0u64;
    while s.is_even() {
        s >>= 1u32;
        d += 1;
    }
    (d, s)
}
