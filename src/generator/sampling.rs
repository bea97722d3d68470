//! Operand and operator sampling.

use crate::core::{DifficultyConfig, Operator, PuzzleRng};

/// Draw an operand of the requested digit length.
pub(crate) fn sample_value(
    config: &DifficultyConfig,
    double_digit: bool,
    rng: &mut PuzzleRng,
) -> i64 {
    let range = if double_digit {
        config.double_digit
    } else {
        config.single_digit
    };
    rng.gen_range(range.min..=range.max)
}

/// Draw an operand, double-digit with the configured probability.
pub(crate) fn sample_operand(config: &DifficultyConfig, rng: &mut PuzzleRng) -> i64 {
    let double_digit = config.use_two_digit && rng.gen_bool(config.two_digit_probability());
    sample_value(config, double_digit, rng)
}

/// Draw an operator from the configured set.
///
/// Falls back to `+` for an empty set; validated configs never have one.
pub(crate) fn sample_operator(config: &DifficultyConfig, rng: &mut PuzzleRng) -> Operator {
    rng.choose(&config.operators).copied().unwrap_or(Operator::Add)
}

/// Tracks the double-digit quota while filler tiles are drawn.
///
/// Each draw is double-digit with probability
/// `remaining_quota / remaining_slots`, which spreads the quota evenly over
/// the slots that are left.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DoubleDigitQuota {
    remaining: usize,
    slots: usize,
}

impl DoubleDigitQuota {
    /// `already` double-digit tiles exist; `slots` filler tiles remain.
    pub(crate) fn new(quota: usize, already: usize, slots: usize) -> Self {
        Self {
            remaining: quota.saturating_sub(already),
            slots,
        }
    }

    /// Decide the digit length of the next filler tile.
    pub(crate) fn next(&mut self, rng: &mut PuzzleRng) -> bool {
        if self.slots == 0 {
            return false;
        }
        #[allow(clippy::cast_precision_loss)]
        let probability = self.remaining as f64 / self.slots as f64;
        self.slots -= 1;

        let double_digit = self.remaining > 0 && rng.gen_bool(probability);
        if double_digit {
            self.remaining -= 1;
        }
        double_digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;

    #[test]
    fn test_single_digit_only_when_disabled() {
        let config = GameMode::Normal.config();
        let mut rng = PuzzleRng::new(1);
        for _ in 0..500 {
            assert!(config.single_digit.contains(sample_operand(&config, &mut rng)));
        }
    }

    #[test]
    fn test_double_digit_range() {
        let config = GameMode::OhMyGod.config();
        let mut rng = PuzzleRng::new(2);
        for _ in 0..500 {
            let value = sample_value(&config, true, &mut rng);
            assert!((10..=30).contains(&value));
        }
    }

    #[test]
    fn test_operator_from_configured_set() {
        let config = GameMode::Easy.config();
        let mut rng = PuzzleRng::new(3);
        for _ in 0..200 {
            let op = sample_operator(&config, &mut rng);
            assert!(matches!(op, Operator::Add | Operator::Sub));
        }
    }

    #[test]
    fn test_quota_filled_exactly_when_forced() {
        // Quota equal to the slots left: every draw must be double-digit
        let mut quota = DoubleDigitQuota::new(7, 0, 7);
        let mut rng = PuzzleRng::new(4);
        assert!((0..7).all(|_| quota.next(&mut rng)));
    }

    #[test]
    fn test_quota_never_exceeded() {
        let mut rng = PuzzleRng::new(5);
        for _ in 0..200 {
            let mut quota = DoubleDigitQuota::new(5, 2, 7);
            let drawn = (0..7).filter(|_| quota.next(&mut rng)).count();
            assert_eq!(drawn, 3);
        }
    }

    #[test]
    fn test_quota_already_met() {
        let mut quota = DoubleDigitQuota::new(5, 5, 7);
        let mut rng = PuzzleRng::new(6);
        assert!((0..7).all(|_| !quota.next(&mut rng)));
    }
}
