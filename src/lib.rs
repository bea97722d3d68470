//! # number-pyramid
//!
//! Puzzle generator and evaluation engine for a three-tile arithmetic game.
//!
//! The player sees a target and ten tiles (an operator and an operand each)
//! laid out as a pyramid, and must pick three tiles whose chained
//! left-to-right calculation equals the target.
//!
//! ## Design Principles
//!
//! 1. **Solvable by construction**: The generator plants a solution triple
//!    before adding filler tiles, so every verified puzzle has an answer.
//!
//! 2. **Deterministic**: All randomness flows through an injected
//!    `PuzzleRng`. Same seed, same puzzle.
//!
//! 3. **Immutable round state**: Session transitions are pure functions that
//!    return a fresh `SessionState`.
//!
//! ## Modules
//!
//! - `core`: Tiles, puzzles, difficulty presets, RNG
//! - `eval`: Chained left-to-right evaluation
//! - `generator`: Puzzle generation and the brute-force solver
//! - `session`: Selection state machine and player messages
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod eval;
pub mod generator;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    DifficultyConfig, DigitRange, GameMode, Operator, Puzzle, PuzzleRng, PuzzleRngState, Tile,
    TileId,
};

pub use crate::error::{ConfigError, GenerationError, ParseError, PuzzleError, SessionError};

pub use crate::eval::{evaluate, evaluate_tiles, Evaluation};

pub use crate::generator::{GeneratorConfig, PuzzleGenerator, Solution};

pub use crate::session::{
    GameSession, Notice, Phase, RoundOutcome, SelectionEvent, SessionState,
};
