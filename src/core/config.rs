//! Difficulty configuration.
//!
//! Presentation never builds a `DifficultyConfig` by hand: it picks a
//! `GameMode` and asks for its preset via `GameMode::config()`.
//!
//! | mode          | target    | operators | double digits | p(two digit) |
//! |---------------|-----------|-----------|---------------|--------------|
//! | easy          | 1..=15    | + -       | off           | -            |
//! | normal        | 1..=30    | + - × ÷   | off           | -            |
//! | hard          | 10..=50   | + - × ÷   | 10..=20       | 0.5          |
//! | ultimate-hard | 20..=100  | + - × ÷   | 10..=20       | 0.7          |
//! | oh-my-god     | 50..=300  | + - × ÷   | 10..=30       | 0.8          |

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Operator;
use crate::error::{ConfigError, ParseError};

/// Probability of a double-digit operand when enabled without an explicit value.
pub const DEFAULT_TWO_DIGIT_PROBABILITY: f64 = 0.5;

/// Inclusive range of operand values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitRange {
    /// Smallest value (inclusive).
    pub min: i64,
    /// Largest value (inclusive).
    pub max: i64,
}

impl DigitRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check if a value lies in the range.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < 1 {
            return Err(ConfigError::NonPositiveOperand { name, min: self.min });
        }
        Ok(())
    }
}

/// Constraints for generating one puzzle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Smallest acceptable target (inclusive).
    pub target_min: i64,

    /// Largest acceptable target (inclusive).
    pub target_max: i64,

    /// Operators tiles may carry. Must not be empty.
    pub operators: SmallVec<[Operator; 4]>,

    /// Range for single-digit operands.
    pub single_digit: DigitRange,

    /// Range for double-digit operands.
    pub double_digit: DigitRange,

    /// Whether double-digit operands may appear at all.
    pub use_two_digit: bool,

    /// Chance of a double-digit operand when `use_two_digit` is set.
    /// `None` falls back to `DEFAULT_TWO_DIGIT_PROBABILITY`.
    #[serde(default)]
    pub two_digit_probability: Option<f64>,
}

impl DifficultyConfig {
    /// Effective probability that a sampled operand is double-digit.
    #[must_use]
    pub fn two_digit_probability(&self) -> f64 {
        if self.use_two_digit {
            self.two_digit_probability.unwrap_or(DEFAULT_TWO_DIGIT_PROBABILITY)
        } else {
            0.0
        }
    }

    /// Check if a target lies in the configured range.
    #[must_use]
    pub fn accepts_target(&self, target: i64) -> bool {
        self.target_min <= target && target <= self.target_max
    }

    /// Check that the configuration can drive the generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operators.is_empty() {
            return Err(ConfigError::NoOperators);
        }
        if self.target_min > self.target_max {
            return Err(ConfigError::InvertedRange {
                name: "target",
                min: self.target_min,
                max: self.target_max,
            });
        }
        self.single_digit.validate("single-digit")?;
        if self.use_two_digit {
            self.double_digit.validate("double-digit")?;
        }
        if let Some(p) = self.two_digit_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidProbability(p));
            }
        }
        Ok(())
    }
}

/// Named difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Addition and subtraction over single digits.
    Easy,
    /// All operators over single digits.
    #[default]
    Normal,
    /// Half of the operands double-digit, up to 20.
    Hard,
    /// Mostly double-digit operands, larger targets.
    UltimateHard,
    /// Operands up to 30, targets up to 300.
    OhMyGod,
}

impl GameMode {
    /// All modes, easiest first.
    pub const ALL: [GameMode; 5] = [
        GameMode::Easy,
        GameMode::Normal,
        GameMode::Hard,
        GameMode::UltimateHard,
        GameMode::OhMyGod,
    ];

    /// The mode's name as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Easy => "easy",
            GameMode::Normal => "normal",
            GameMode::Hard => "hard",
            GameMode::UltimateHard => "ultimate-hard",
            GameMode::OhMyGod => "oh-my-god",
        }
    }

    /// The preset configuration for this mode.
    #[must_use]
    pub fn config(self) -> DifficultyConfig {
        let single_digit = DigitRange::new(1, 9);
        let all_ops = SmallVec::from_slice(&Operator::ALL);

        match self {
            GameMode::Easy => DifficultyConfig {
                target_min: 1,
                target_max: 15,
                operators: SmallVec::from_slice(&[Operator::Add, Operator::Sub]),
                single_digit,
                double_digit: DigitRange::new(10, 20),
                use_two_digit: false,
                two_digit_probability: None,
            },
            GameMode::Normal => DifficultyConfig {
                target_min: 1,
                target_max: 30,
                operators: all_ops,
                single_digit,
                double_digit: DigitRange::new(10, 20),
                use_two_digit: false,
                two_digit_probability: None,
            },
            GameMode::Hard => DifficultyConfig {
                target_min: 10,
                target_max: 50,
                operators: all_ops,
                single_digit,
                double_digit: DigitRange::new(10, 20),
                use_two_digit: true,
                two_digit_probability: Some(0.5),
            },
            GameMode::UltimateHard => DifficultyConfig {
                target_min: 20,
                target_max: 100,
                operators: all_ops,
                single_digit,
                double_digit: DigitRange::new(10, 20),
                use_two_digit: true,
                two_digit_probability: Some(0.7),
            },
            GameMode::OhMyGod => DifficultyConfig {
                target_min: 50,
                target_max: 300,
                operators: all_ops,
                single_digit,
                double_digit: DigitRange::new(10, 30),
                use_two_digit: true,
                two_digit_probability: Some(0.8),
            },
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or(ParseError::UnknownMode(name))
    }
}
