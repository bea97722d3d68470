//! Puzzle generation by rejection sampling.

use im::Vector;
use log::{debug, warn};

use super::config::GeneratorConfig;
use super::sampling::{sample_operand, sample_operator, sample_value, DoubleDigitQuota};
use crate::core::{
    DifficultyConfig,
    GameMode,
    Operator,
    Puzzle,
    PuzzleRng,
    Tile,
    TileId,
    SELECTION_SIZE,
    TILE_COUNT,
};
use crate::error::{ConfigError, GenerationError};
use crate::eval::{evaluate, Evaluation};

/// A sampled `v1 op1 v2 op2 v3` chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    values: [i64; 3],
    operators: [Operator; 2],
    result: Evaluation,
}

impl Candidate {
    fn sample(config: &DifficultyConfig, rng: &mut PuzzleRng) -> Self {
        let values = [
            sample_operand(config, rng),
            sample_operand(config, rng),
            sample_operand(config, rng),
        ];
        let operators = [sample_operator(config, rng), sample_operator(config, rng)];
        let result = evaluate(
            values[0],
            &[(operators[0], values[1]), (operators[1], values[2])],
        );
        Self {
            values,
            operators,
            result,
        }
    }

    fn accepted_by(&self, config: &DifficultyConfig) -> bool {
        self.result.value().is_some_and(|v| config.accepts_target(v))
    }

    /// Tiles 0, 1, 2. The first tile's operator is never applied and is
    /// fixed to `+`.
    fn tiles(&self) -> [Tile; 3] {
        [
            Tile::new(TileId::new(0), self.values[0], Operator::Add),
            Tile::new(TileId::new(1), self.values[1], self.operators[0]),
            Tile::new(TileId::new(2), self.values[2], self.operators[1]),
        ]
    }
}

enum Search {
    Found { candidate: Candidate, attempts: u32 },
    Exhausted { last: Option<Candidate> },
}

/// Produces solvable puzzles for a difficulty.
///
/// ## Algorithm
///
/// 1. Sample triples until one evaluates into the target range, up to
///    `max_attempts` times. The accepted triple becomes tiles 0..3 and its
///    result the target.
/// 2. Fill tiles 3..10 with fresh operands, steering the double-digit count
///    toward `double_digit_quota`.
/// 3. Shuffle the ten tiles. Ids keep their generation order.
#[derive(Clone, Debug, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle, failing if no triple reaches the target range.
    pub fn try_generate(
        &self,
        difficulty: &DifficultyConfig,
        rng: &mut PuzzleRng,
    ) -> Result<Puzzle, GenerationError> {
        difficulty.validate()?;
        match self.search(difficulty, rng) {
            Search::Found { candidate, attempts } => {
                debug!(
                    "accepted {} after {attempts} attempts",
                    describe(&candidate)
                );
                Ok(self.assemble(&candidate, difficulty, true, rng))
            }
            Search::Exhausted { .. } => Err(GenerationError::AttemptsExhausted {
                attempts: self.config.max_attempts,
            }),
        }
    }

    /// Generate a puzzle, degrading gracefully when the search is exhausted.
    ///
    /// On exhaustion the last sampled triple is used as is and the puzzle is
    /// marked unverified (see `Puzzle::is_verified`).
    pub fn generate(
        &self,
        difficulty: &DifficultyConfig,
        rng: &mut PuzzleRng,
    ) -> Result<Puzzle, ConfigError> {
        difficulty.validate()?;
        Ok(self.best_effort(difficulty, rng))
    }

    /// Generate a puzzle for a preset mode.
    ///
    /// Presets are always valid, so this cannot fail.
    pub fn generate_mode(&self, mode: GameMode, rng: &mut PuzzleRng) -> Puzzle {
        self.best_effort(&mode.config(), rng)
    }

    fn best_effort(&self, difficulty: &DifficultyConfig, rng: &mut PuzzleRng) -> Puzzle {
        match self.search(difficulty, rng) {
            Search::Found { candidate, attempts } => {
                debug!(
                    "accepted {} after {attempts} attempts",
                    describe(&candidate)
                );
                self.assemble(&candidate, difficulty, true, rng)
            }
            Search::Exhausted { last } => {
                let candidate = last.unwrap_or_else(|| Candidate::sample(difficulty, rng));
                warn!(
                    "no triple in target range {}..={} after {} attempts; using unverified {}",
                    difficulty.target_min,
                    difficulty.target_max,
                    self.config.max_attempts,
                    describe(&candidate)
                );
                self.assemble(&candidate, difficulty, false, rng)
            }
        }
    }

    fn search(&self, difficulty: &DifficultyConfig, rng: &mut PuzzleRng) -> Search {
        let mut last = None;
        for attempt in 1..=self.config.max_attempts {
            let candidate = Candidate::sample(difficulty, rng);
            if candidate.accepted_by(difficulty) {
                return Search::Found {
                    candidate,
                    attempts: attempt,
                };
            }
            last = Some(candidate);
        }
        Search::Exhausted { last }
    }

    fn assemble(
        &self,
        candidate: &Candidate,
        difficulty: &DifficultyConfig,
        verified: bool,
        rng: &mut PuzzleRng,
    ) -> Puzzle {
        let target = candidate.result.value().unwrap_or(difficulty.target_min);

        let mut tiles: Vec<Tile> = Vec::with_capacity(TILE_COUNT);
        tiles.extend(candidate.tiles());

        let quota = if difficulty.use_two_digit {
            self.config.double_digit_quota
        } else {
            0
        };
        let already = tiles.iter().filter(|t| t.is_double_digit()).count();
        let mut quota = DoubleDigitQuota::new(quota, already, TILE_COUNT - SELECTION_SIZE);

        for id in (SELECTION_SIZE..TILE_COUNT).filter_map(|i| u8::try_from(i).ok()) {
            let double_digit = quota.next(rng);
            let value = sample_value(difficulty, double_digit, rng);
            let operator = sample_operator(difficulty, rng);
            tiles.push(Tile::new(TileId::new(id), value, operator));
        }

        rng.shuffle(&mut tiles);
        Puzzle::from_parts(tiles.into_iter().collect::<Vector<_>>(), target, verified)
    }
}

fn describe(candidate: &Candidate) -> String {
    let [a, b, c] = candidate.values;
    let [op1, op2] = candidate.operators;
    match candidate.result {
        Evaluation::Value(v) => format!("{a} {op1}{b} {op2}{c} = {v}"),
        Evaluation::Undefined => format!("{a} {op1}{b} {op2}{c} (undefined)"),
    }
}
