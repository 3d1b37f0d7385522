//! Small integer helpers.

/// Greatest common divisor (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Lowest common multiple. `lcm(0, n) == 0`.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Lowest common multiple of every value; `1` for an empty input.
///
/// Used for "when do all these cycles line up" puzzles.
pub fn lcm_of(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gcd_known_values() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn lcm_of_cycle_lengths() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm_of([2, 3, 4]), 12);
        assert_eq!(lcm_of(std::iter::empty()), 1);
        assert_eq!(lcm_of([0, 5]), 0);
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(lcm(a, b) * g, a * b);
        }
    }
}
