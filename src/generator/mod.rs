//! Puzzle generation.
//!
//! The generator guarantees solvability by construction: it first finds a
//! triple whose chained result lands in the difficulty's target range, then
//! hides it among seven filler tiles.
//!
//! ## Example Usage
//!
//! ```
//! use number_pyramid::core::{GameMode, PuzzleRng};
//! use number_pyramid::generator::{solver, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::default();
//! let mut rng = PuzzleRng::new(42);
//!
//! let puzzle = generator.generate_mode(GameMode::Hard, &mut rng);
//! assert_eq!(puzzle.len(), 10);
//! assert!(puzzle.is_verified());
//! assert!(solver::is_solvable(&puzzle));
//! ```

mod config;
mod engine;
mod sampling;
pub mod solver;

pub use config::GeneratorConfig;
pub use engine::PuzzleGenerator;
pub use solver::Solution;
