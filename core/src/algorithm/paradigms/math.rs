//! Number theory: gcd/lcm, primes, modular arithmetic, binomials
//!
//! Modular products are widened to `u128` so no intermediate overflows for
//! any `u64` modulus.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Greatest common divisor by Euclid's algorithm
///
/// Returned as `u64` because `gcd(i64::MIN, 0)` is `2^63`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Non-negative least common multiple; undefined for `lcm(0, 0)`
pub fn lcm(a: i64, b: i64) -> AlgorithmResult<i64> {
    if a == 0 && b == 0 {
        return Err(AlgorithmError::invalid_argument("lcm(0, 0) is undefined"));
    }
    let magnitude = u128::from(a.unsigned_abs() / gcd(a, b)) * u128::from(b.unsigned_abs());
    i64::try_from(magnitude)
        .map_err(|_| AlgorithmError::ResourceExhausted(format!("lcm({}, {}) overflows i64", a, b)))
}

/// All primes `<= n` by the sieve of Eratosthenes
pub fn sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut composite = vec![false; n + 1];
    let mut p = 2;
    while p * p <= n {
        if !composite[p] {
            for multiple in (p * p..=n).step_by(p) {
                composite[multiple] = true;
            }
        }
        p += 1;
    }
    (2..=n).filter(|&i| !composite[i]).collect()
}

/// Trial division over odd candidates up to √n
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => (3..)
            .step_by(2)
            .take_while(|&i: &u64| i.saturating_mul(i) <= n)
            .all(|i| n % i != 0),
    }
}

/// Prime factors in non-decreasing order, with multiplicity
pub fn prime_factors(n: u64) -> AlgorithmResult<Vec<u64>> {
    if n == 0 {
        return Err(AlgorithmError::invalid_argument("0 has no prime factorisation"));
    }
    let mut n = n;
    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut f = 3u64;
    while f.saturating_mul(f) <= n {
        while n % f == 0 {
            factors.push(f);
            n /= f;
        }
        f += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    Ok(factors)
}

/// `base^exp mod modulus` by binary exponentiation
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> AlgorithmResult<u64> {
    if modulus == 0 {
        return Err(AlgorithmError::invalid_parameter("modulus", "must be non-zero"));
    }
    let m = modulus as u128;
    let (mut base, mut exp) = (base as u128 % m, exp);
    let mut result = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    Ok(result as u64)
}

/// Multiplicative inverse of `a` modulo `modulus` by the extended
/// Euclidean algorithm; `None` when `a` and `modulus` are not coprime
pub fn mod_inverse(a: u64, modulus: u64) -> AlgorithmResult<Option<u64>> {
    if modulus == 0 {
        return Err(AlgorithmError::invalid_parameter("modulus", "must be non-zero"));
    }
    let m = modulus as i128;
    let (mut old_r, mut r) = (a as i128 % m, m);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return Ok((modulus == 1).then_some(0));
    }
    Ok(Some(old_s.rem_euclid(m) as u64))
}

/// Binomial coefficient; 0 when `r > n`
pub fn n_cr(n: u64, r: u64) -> AlgorithmResult<u128> {
    if r > n {
        return Ok(0);
    }
    let r = r.min(n - r);
    let mut result: u128 = 1;
    for i in 1..=r as u128 {
        // result is C(n - r + i - 1, i - 1) here, so the division is exact
        result = result
            .checked_mul(n as u128 - r as u128 + i)
            .map(|v| v / i)
            .ok_or_else(|| {
                AlgorithmError::ResourceExhausted(format!("C({}, {}) overflows u128", n, r))
            })?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(lcm(48, 18), Ok(144));
        assert_eq!(lcm(-4, 6), Ok(12));
        assert_eq!(lcm(0, 5), Ok(0));
        assert!(lcm(0, 0).is_err());
        assert!(lcm(i64::MAX, i64::MAX - 1).is_err());
    }

    #[test]
    fn test_gcd_lcm_at_i64_min() {
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert!(matches!(lcm(i64::MIN, 1), Err(AlgorithmError::ResourceExhausted(_))));
        assert_eq!(lcm(i64::MIN, 0), Ok(0));
        assert_eq!(lcm(i64::MIN + 1, 1), Ok(i64::MAX));
    }

    #[test]
    fn test_primes() {
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(sieve(1).is_empty());
        assert!(is_prime(17));
        assert!(!is_prime(18));
        assert!(!is_prime(1));
        assert!(is_prime(1_000_000_007));
        assert_eq!(prime_factors(360), Ok(vec![2, 2, 2, 3, 3, 5]));
        assert_eq!(prime_factors(97), Ok(vec![97]));
        assert_eq!(prime_factors(1), Ok(vec![]));
        assert!(prime_factors(0).is_err());
    }

    #[test]
    fn test_modular() {
        assert_eq!(mod_pow(3, 13, 17), Ok(12));
        assert_eq!(mod_pow(2, 0, 1), Ok(0));
        assert_eq!(mod_pow(u64::MAX, 2, u64::MAX - 1), Ok(1));
        assert!(mod_pow(2, 3, 0).is_err());

        assert_eq!(mod_inverse(3, 17), Ok(Some(6)));
        assert_eq!(mod_inverse(3, 10), Ok(Some(7)));
        assert_eq!(mod_inverse(4, 10), Ok(None));
        assert!(mod_inverse(3, 0).is_err());
    }

    #[test]
    fn test_n_cr() {
        assert_eq!(n_cr(5, 2), Ok(10));
        assert_eq!(n_cr(10, 3), Ok(120));
        assert_eq!(n_cr(3, 5), Ok(0));
        assert_eq!(n_cr(60, 30), Ok(118_264_581_564_861_424));
        assert!(n_cr(1000, 500).is_err());
    }

    proptest! {
        #[test]
        fn prop_factors_multiply_back(n in 1u64..100_000) {
            let factors = prime_factors(n).unwrap();
            prop_assert_eq!(factors.iter().product::<u64>(), n);
            prop_assert!(factors.iter().all(|&f| is_prime(f)));
        }

        #[test]
        fn prop_inverse_is_inverse(a in 1u64..1000, m in 2u64..1000) {
            if let Some(inv) = mod_inverse(a, m).unwrap() {
                prop_assert_eq!(a % m * inv % m, 1);
            } else {
                prop_assert!(gcd(a as i64, m as i64) > 1);
            }
        }
    }
}
