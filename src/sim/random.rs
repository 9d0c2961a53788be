//! Inclusive integer ranges for seeding spawn state

use rand::Rng;

use crate::error::SimError;

/// Uniform integer in `[min, max]`, both ends included.
///
/// `min > max` is rejected rather than swapped.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Result<i32, SimError> {
    if min > max {
        return Err(SimError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// [`random_int`] drawing from the thread-local entropy source
pub fn thread_random_int(min: i32, max: i32) -> Result<i32, SimError> {
    random_int(&mut rand::rng(), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_single_value_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(random_int(&mut rng, 5, 5), Ok(5));
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(
            random_int(&mut rng, 3, -3),
            Err(SimError::InvalidRange { min: 3, max: -3 })
        );
        assert!(thread_random_int(1, 0).is_err());
    }

    #[test]
    fn test_both_ends_reachable() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let v = random_int(&mut rng, -2, 2).expect("valid range");
            seen[(v + 2) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in [-2, 2] drawn: {seen:?}");
    }

    proptest! {
        #[test]
        fn prop_value_within_bounds(seed in any::<u64>(), a in -1000i32..1000, b in -1000i32..1000) {
            let (min, max) = (a.min(b), a.max(b));
            let mut rng = Pcg32::seed_from_u64(seed);
            let v = random_int(&mut rng, min, max).unwrap();
            prop_assert!(min <= v && v <= max);
        }
    }
}
