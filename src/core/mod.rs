//! Core puzzle types: tiles, puzzles, difficulty configuration, RNG.
//!
//! Everything here is plain data; generation lives in `generator` and
//! interaction in `session`.

pub mod config;
pub mod puzzle;
pub mod rng;
pub mod tile;

pub use config::{DifficultyConfig, DigitRange, GameMode, DEFAULT_TWO_DIGIT_PROBABILITY};
pub use puzzle::{Puzzle, PYRAMID_ROWS, SELECTION_SIZE, TILE_COUNT};
pub use rng::{PuzzleRng, PuzzleRngState};
pub use tile::{Operator, Tile, TileId};
