use {crate::primality::PrimalityTest, num_bigint::BigInt};

const SMALL_PRIMES: [i64; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];
const CARMICHAEL_NUMBERS: [i64; 10] =
    [561, 1105, 1729, 2465, 2821, 6601, 8911, 10585, 15841, 29341];

#[test]
fn miller_rabin_agrees_on_small_primes() {
    let test = PrimalityTest::miller_rabin();
    for &p in &SMALL_PRIMES {
        assert!(test.is_prime(&BigInt::from(p), 0.999), "{p} should be prime");
    }
    for n in [4, 6, 8, 9, 10, 15, 21] {
        assert!(!test.is_prime(&BigInt::from(n), 0.999), "{n} should be composite");
    }
}

#[test]
fn miller_rabin_rejects_carmichael_numbers() {
    let test = PrimalityTest::miller_rabin();
    for &n in &CARMICHAEL_NUMBERS {
        assert!(
            !test.is_prime(&BigInt::from(n), 0.999),
            "{n} is a Carmichael number, Miller-Rabin should reject it"
        );
    }
}

#[test]
fn fermat_agrees_on_small_primes() {
    let test = PrimalityTest::fermat();
    for &p in &SMALL_PRIMES {
        assert!(test.is_prime(&BigInt::from(p), 0.999));
    }
}

#[test]
fn solovay_strassen_agrees_on_small_primes() {
    let test = PrimalityTest::solovay_strassen();
    for &p in &SMALL_PRIMES {
        assert!(test.is_prime(&BigInt::from(p), 0.999));
    }
    assert!(!test.is_prime(&BigInt::from(15), 0.999));
}

#[test]
fn solovay_strassen_rejects_carmichael_numbers() {
    let test = PrimalityTest::solovay_strassen();
    for &n in &CARMICHAEL_NUMBERS {
        assert!(
            !test.is_prime(&BigInt::from(n), 0.999),
            "{n} is a Carmichael number, Solovay-Strassen should reject it"
        );
    }
}
