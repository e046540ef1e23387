//! Random source for combat rolls
//!
//! Every probability roll in a resolution draws from one `Dice`, in call
//! order. Replaying the same calls against the same seed reproduces the
//! same fight, so the order of draws is part of the contract.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform rolls consumed by the resolvers
pub trait Dice {
    /// Uniform integer in `[min, max]`
    fn range_i32(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in `[min, max]`
    fn range_f32(&mut self, min: f32, max: f32) -> f32;

    /// Uniform roll in `[0, 100]`
    fn roll_percent(&mut self) -> f32 {
        self.range_f32(0.0, 100.0)
    }

    /// Percent check: certain at 100+, impossible at 0 or below.
    ///
    /// Neither certain case consumes a roll.
    fn percent_check(&mut self, chance: f32) -> bool {
        if chance >= 100.0 {
            true
        } else if chance <= 0.0 {
            false
        } else {
            self.roll_percent() <= chance
        }
    }
}

/// Seedable dice backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Dice that always land at the same fraction of every range.
///
/// `FixedDice::new(0.0)` makes every percent check with a positive chance
/// succeed; `FixedDice::new(1.0)` makes every check below 100 fail.
#[derive(Debug, Clone, Copy)]
pub struct FixedDice {
    fraction: f32,
}

impl FixedDice {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

impl Dice for FixedDice {
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        min + ((max - min) as f32 * self.fraction).round() as i32
    }

    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        min + (max - min) * self.fraction
    }
}

/// Round a damage figure and jitter it.
///
/// The jitter is a uniform integer in `±(rounded / amplitude)`, so a lower
/// amplitude gives a wider spread. Values in `(0, 1]` become 1 and values
/// at or below zero become 0, neither consuming a roll.
pub fn round_with_variance(dice: &mut dyn Dice, value: f32, amplitude: i32) -> i32 {
    if value <= 0.0 {
        return 0;
    }
    if value <= 1.0 {
        return 1;
    }

    let rounded = value.round() as i32;
    let spread = rounded / amplitude.max(1);
    if spread == 0 {
        return rounded;
    }

    (rounded + dice.range_i32(-spread, spread)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dice_replay() {
        let mut a = SeededDice::new(42);
        let mut b = SeededDice::new(42);

        for _ in 0..32 {
            assert_eq!(a.range_i32(0, 1000), b.range_i32(0, 1000));
            assert_eq!(a.roll_percent(), b.roll_percent());
        }
    }

    #[test]
    fn test_ranges_are_inclusive_and_bounded() {
        let mut dice = SeededDice::new(7);
        for _ in 0..500 {
            let v = dice.range_i32(-3, 3);
            assert!((-3..=3).contains(&v));
            let f = dice.range_f32(0.0, 100.0);
            assert!((0.0..=100.0).contains(&f));
        }
        assert_eq!(dice.range_i32(5, 5), 5);
    }

    #[test]
    fn test_percent_check_extremes() {
        let mut high = FixedDice::new(1.0);
        assert!(high.percent_check(100.0));
        assert!(!high.percent_check(99.9));

        let mut low = FixedDice::new(0.0);
        assert!(low.percent_check(0.1));
        assert!(!low.percent_check(0.0));
    }

    #[test]
    fn test_fixed_dice_fraction() {
        let mut dice = FixedDice::new(0.5);
        assert_eq!(dice.range_i32(0, 10), 5);
        assert_eq!(dice.range_f32(0.0, 100.0), 50.0);
    }

    #[test]
    fn test_round_with_variance_small_values() {
        let mut dice = SeededDice::new(1);
        assert_eq!(round_with_variance(&mut dice, 0.0, 3), 0);
        assert_eq!(round_with_variance(&mut dice, -2.0, 3), 0);
        assert_eq!(round_with_variance(&mut dice, 0.3, 3), 1);
        assert_eq!(round_with_variance(&mut dice, 1.0, 3), 1);
        // 2 / 3 == 0, no jitter
        assert_eq!(round_with_variance(&mut dice, 2.2, 3), 2);
    }

    #[test]
    fn test_round_with_variance_spread() {
        let mut dice = SeededDice::new(99);
        for _ in 0..200 {
            let v = round_with_variance(&mut dice, 12.0, 3);
            assert!((8..=16).contains(&v));
        }

        let mut lowest = FixedDice::new(0.0);
        assert_eq!(round_with_variance(&mut lowest, 12.0, 4), 9);
        let mut highest = FixedDice::new(1.0);
        assert_eq!(round_with_variance(&mut highest, 12.0, 4), 15);
    }
}
