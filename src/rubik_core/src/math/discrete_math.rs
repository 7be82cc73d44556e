use bnum::types::U512;

/// Calculate the GCD of two numbers
#[must_use]
pub fn gcd(mut a: U512, mut b: U512) -> U512 {
    loop {
        if b.is_zero() {
            return a;
        }

        let rem = a % b;
        a = b;
        b = rem;
    }
}

/// Calculate the LCM of two numbers
///
/// # Panics
///
/// Panics if either number is zero.
#[must_use]
pub fn lcm(a: U512, b: U512) -> U512 {
    assert!(!a.is_zero());
    assert!(!b.is_zero());

    b / gcd(a, b) * a
}

/// Calculate the LCM of a list of numbers
pub fn lcm_iter(values: impl Iterator<Item = U512>) -> U512 {
    values.fold(U512::ONE, lcm)
}

#[cfg(test)]
mod tests {
    use bnum::types::U512;

    use super::{gcd, lcm, lcm_iter};

    fn n(value: u64) -> U512 {
        U512::from(value)
    }

    #[test]
    fn lcm_and_gcd() {
        assert_eq!(gcd(n(3), n(5)), n(1));
        assert_eq!(gcd(n(3), n(6)), n(3));
        assert_eq!(gcd(n(4), n(6)), n(2));
        assert_eq!(gcd(n(0), n(6)), n(6));

        assert_eq!(lcm(n(3), n(5)), n(15));
        assert_eq!(lcm(n(3), n(6)), n(6));
        assert_eq!(lcm(n(4), n(6)), n(12));

        assert_eq!(lcm_iter([2, 3, 4].map(n).into_iter()), n(12));
        assert_eq!(lcm_iter([3, 5, 7].map(n).into_iter()), n(105));
        assert_eq!(lcm_iter(std::iter::empty()), n(1));
    }

    #[test]
    fn lcm_past_u64() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
        let lcm = lcm_iter(primes.map(n).into_iter());

        assert!(lcm > n(u64::MAX));
        assert_eq!(lcm, U512::from(32_589_158_477_190_044_730_u128));
    }
}
