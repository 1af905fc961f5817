use crate::domain::*;
use rand::prelude::*;

/// Uniform values in `[0, max_val)`.
/// Without a seed every call draws from entropy.
/// `max_val` must pass `ICType::check`.
pub fn rand_ic(sequence: &mut Sequence, max_val: f64, seed: Option<u64>) {
    debug_assert!(max_val > 0.0 && max_val.is_finite());
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sequence.set_values(|_| rng.gen_range(0.0..max_val));
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn bounds_test() {
        let mut s = Sequence::new(1000);
        rand_ic(&mut s, 4.0, None);
        for v in s.buffer() {
            assert!((0.0..4.0).contains(v));
        }
    }

    #[test]
    fn seeded_test() {
        let mut a = Sequence::new(50);
        let mut b = Sequence::new(50);
        rand_ic(&mut a, 1.0, Some(42));
        rand_ic(&mut b, 1.0, Some(42));
        assert_eq!(a, b);
    }
}
