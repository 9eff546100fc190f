//! Textbook RSA: key generation (guarded against Fermat's factorization
//! method and Wiener's low-private-exponent attack), encryption and
//! decryption. [`RsaService::generate_weak_keys`] deliberately skips those
//! guards — useful for exercising [`crate::wiener`] against a key it can
//! actually break.

use {
    crate::{
        numtheory::{extended_gcd, gcd, mod_exp},
        primality::PrimalityTest,
    },
    num_bigint::{BigInt, RandBigInt, Sign},
    num_integer::Integer,
    num_traits::{One, Signed, Zero},
    rand::thread_rng,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityTestKind {
    MillerRabin,
    SolovayStrassen,
    Fermat,
}

impl PrimalityTestKind {
    fn build(self) -> PrimalityTest {
        match self {
            Self::MillerRabin => PrimalityTest::miller_rabin(),
            Self::SolovayStrassen => PrimalityTest::solovay_strassen(),
            Self::Fermat => PrimalityTest::fermat(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigInt,
    pub n: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: BigInt,
    pub p: BigInt,
    pub q: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    KeysNotGenerated,
    MessageTooLarge,
}

impl fmt::Display for RsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeysNotGenerated => f.write_str("keys have not been generated yet"),
            Self::MessageTooLarge => f.write_str("message is too large for the key modulus"),
        }
    }
}

impl std::error::Error for RsaError {}

pub struct RsaService {
    test_kind: PrimalityTestKind,
    bit_length: u64,
    probability: f64,
    keys: Option<RsaKeyPair>,
}

impl RsaService {
    pub fn new(test_kind: PrimalityTestKind, bit_length: u64, probability: f64) -> Self {
        Self {
            test_kind,
            bit_length,
            probability,
            keys: None,
        }
    }

    /// Generates a fresh key pair, rejecting candidates too close to
    /// Fermat's factorization method or Wiener's attack.
    pub fn generate_new_keys(&mut self) {
        let test = self.test_kind.build();
        let e = BigInt::from(65537);

        loop {
            let p = generate_prime(self.bit_length, &test, self.probability);
            let mut q = generate_prime(self.bit_length, &test, self.probability);
            while q == p {
                q = generate_prime(self.bit_length, &test, self.probability);
            }

            let n = &p * &q;
            let phi_n = (&p - BigInt::one()) * (&q - BigInt::one());

            if gcd(&e, &phi_n) != BigInt::one() {
                continue;
            }
            let d = match mod_inverse(&e, &phi_n) {
                Some(d) => d,
                None => continue,
            };

            if !is_secure_against_attacks(&p, &q, &d, &n) {
                continue;
            }

            self.keys = Some(RsaKeyPair {
                public: RsaPublicKey { e, n },
                private: RsaPrivateKey { d, p, q },
            });
            return;
        }
    }

    /// Generates a key pair with a deliberately small private exponent,
    /// the way [`crate::wiener`]'s continued-fraction attack is tested
    /// against a key it can actually break.
    pub fn generate_weak_keys(&mut self) {
        let test = self.test_kind.build();

        loop {
            let p = generate_prime(self.bit_length, &test, self.probability);
            let mut q = generate_prime(self.bit_length, &test, self.probability);
            while q == p {
                q = generate_prime(self.bit_length, &test, self.probability);
            }

            let n = &p * &q;
            let phi_n = (&p - BigInt::one()) * (&q - BigInt::one());

            let n_root4 = isqrt(&isqrt(&n));
            let limit = &n_root4 / BigInt::from(3);
            if limit <= BigInt::from(3) {
                continue;
            }

            let mut rng = thread_rng();
            let mut d = None;
            for _ in 0..500 {
                let candidate = rng.gen_bigint_range(&BigInt::zero(), &(&limit - BigInt::from(3)))
                    + BigInt::from(3);
                if gcd(&candidate, &phi_n) == BigInt::one() {
                    d = Some(candidate);
                    break;
                }
            }
            let d = match d {
                Some(d) => d,
                None => continue,
            };

            let e = match mod_inverse(&d, &phi_n) {
                Some(e) => e,
                None => continue,
            };

            self.keys = Some(RsaKeyPair {
                public: RsaPublicKey { e, n },
                private: RsaPrivateKey { d, p, q },
            });
            return;
        }
    }

    pub fn encrypt(&self, message: &BigInt) -> Result<BigInt, RsaError> {
        let public = &self.keys.as_ref().ok_or(RsaError::KeysNotGenerated)?.public;
        if *message >= public.n {
            return Err(RsaError::MessageTooLarge);
        }
        Ok(mod_exp(message, &public.e, &public.n))
    }

    pub fn decrypt(&self, ciphertext: &BigInt) -> Result<BigInt, RsaError> {
        let keys = self.keys.as_ref().ok_or(RsaError::KeysNotGenerated)?;
        Ok(mod_exp(ciphertext, &keys.private.d, &keys.public.n))
    }

    pub fn public_key(&self) -> Result<&RsaPublicKey, RsaError> {
        self.keys
            .as_ref()
            .map(|k| &k.public)
            .ok_or(RsaError::KeysNotGenerated)
    }

    pub fn private_key(&self) -> Result<&RsaPrivateKey, RsaError> {
        self.keys
            .as_ref()
            .map(|k| &k.private)
            .ok_or(RsaError::KeysNotGenerated)
    }
}

fn generate_prime(bit_length: u64, test: &PrimalityTest, probability: f64) -> BigInt {
    let mut rng = thread_rng();
    loop {
        let mut candidate = rng.gen_biguint(bit_length);
        candidate.set_bit(bit_length - 1, true);
        candidate.set_bit(0, true);
        let candidate = BigInt::from(candidate);
        if test.is_prime(&candidate, probability) {
            return candidate;
        }
    }
}

/// `d` such that `e*d = 1 mod m`, or `None` if `e` has no inverse mod `m`.
fn mod_inverse(e: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = extended_gcd(e, m);
    if g != BigInt::one() {
        return None;
    }
    Some(x.mod_floor(m))
}

/// Integer square root (floor), via [`num_bigint::BigUint::sqrt`].
pub(crate) fn isqrt(n: &BigInt) -> BigInt {
    let (sign, magnitude) = n.clone().into_parts();
    assert_ne!(sign, Sign::Minus, "isqrt of a negative number");
    BigInt::from(magnitude.sqrt())
}

/// Rejects `p, q, d` too close to a Fermat factorization (`|p - q|` small)
/// or a Wiener attack (`d` small relative to `n^(1/4)`).
fn is_secure_against_attacks(p: &BigInt, q: &BigInt, d: &BigInt, n: &BigInt) -> bool {
    let diff = (p - q).abs();
    let n_root4 = isqrt(&isqrt(n));
    let limit_fermat = &n_root4 * BigInt::from(2);
    if diff <= limit_fermat {
        return false;
    }

    let limit_wiener = &n_root4 / BigInt::from(3);
    if *d <= limit_wiener {
        return false;
    }

    true
}
