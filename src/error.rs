//! Error types for the puzzle engine.
//!
//! Division failure is not represented here: an inexact or zero division is
//! the `Undefined` evaluation result, not an error.

use thiserror::Error;

use crate::core::TileId;

/// A `DifficultyConfig` that cannot produce puzzles.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("operator set is empty")]
    NoOperators,

    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{name} range must start at 1 or above, got {min}")]
    NonPositiveOperand { name: &'static str, min: i64 },

    #[error("two-digit probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Failure to produce a verified puzzle.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("invalid difficulty configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no triple reached the target range within {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

/// A tile set that does not form a well-formed puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("puzzle needs {expected} tiles, got {got}")]
    WrongTileCount { expected: usize, got: usize },

    #[error("tile id {0} appears more than once")]
    DuplicateTile(TileId),

    #[error("tile id {id} is out of range for a {count}-tile puzzle")]
    TileIdOutOfRange { id: TileId, count: usize },

    #[error("tile {id} has value {value}; values must be at least 1")]
    NonPositiveValue { id: TileId, value: i64 },
}

/// Invalid interaction with a game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no tile with id {0} in the current puzzle")]
    UnknownTile(TileId),

    #[error("tile {0} is selected twice")]
    DuplicateSelection(TileId),

    #[error("{len} tiles selected; at most {max} allowed")]
    SelectionTooLong { len: usize, max: usize },

    #[error("phase does not match a selection of {selected} tiles")]
    PhaseMismatch { selected: usize },

    #[error("a notice is pending but the round is not resolved")]
    NoticeWithoutResolution,
}

/// Failure to parse an operator symbol or mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown game mode '{0}' (expected easy, normal, hard, ultimate-hard or oh-my-god)")]
    UnknownMode(String),
}
