//! Interactive game session.

use log::{info, trace, warn};

use super::state::{RoundOutcome, SelectionEvent, SessionState};
use crate::core::{GameMode, Puzzle, PuzzleRng, PuzzleRngState, Tile, TileId};
use crate::error::SessionError;
use crate::generator::PuzzleGenerator;

/// One player's game: the active mode, the RNG, and the current round.
///
/// Every event replaces the round's `SessionState` wholesale; earlier
/// snapshots obtained via `state()` stay valid. Each round is dealt from its
/// own fork of the session RNG, so `rng_state()` is enough to replay the
/// next round.
#[derive(Clone, Debug)]
pub struct GameSession {
    mode: GameMode,
    generator: PuzzleGenerator,
    rng: PuzzleRng,
    state: SessionState,
}

impl GameSession {
    /// Start a session seeded from entropy.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::with_generator(mode, PuzzleGenerator::default(), PuzzleRng::from_entropy())
    }

    /// Start a reproducible session.
    #[must_use]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_generator(mode, PuzzleGenerator::default(), PuzzleRng::new(seed))
    }

    /// Start a session with a custom generator and RNG.
    #[must_use]
    pub fn with_generator(mode: GameMode, generator: PuzzleGenerator, mut rng: PuzzleRng) -> Self {
        let state = SessionState::new(Self::new_puzzle(&generator, mode, &mut rng.fork()));
        Self {
            mode,
            generator,
            rng,
            state,
        }
    }

    /// Resume from a checkpoint taken with `rng_state()`.
    ///
    /// The first round is the one `reset()` would have dealt next on the
    /// checkpointed session.
    #[must_use]
    pub fn from_rng_state(mode: GameMode, state: &PuzzleRngState) -> Self {
        Self::with_generator(mode, PuzzleGenerator::default(), PuzzleRng::from_state(state))
    }

    /// Checkpoint of the session RNG.
    #[must_use]
    pub fn rng_state(&self) -> PuzzleRngState {
        self.rng.state()
    }

    fn new_puzzle(generator: &PuzzleGenerator, mode: GameMode, rng: &mut PuzzleRng) -> Puzzle {
        let puzzle = generator.generate_mode(mode, rng);
        if puzzle.is_verified() {
            info!("new {mode} round, target {}", puzzle.target());
        } else {
            warn!("new {mode} round with unverified target {}", puzzle.target());
        }
        puzzle
    }

    /// Click a tile: select it, deselect it, or be told to clear first.
    pub fn select_tile(&mut self, id: TileId) -> Result<SelectionEvent, SessionError> {
        let (next, event) = self.state.select(id)?;
        trace!("{id}: {event:?}");
        self.state = next;
        Ok(event)
    }

    /// Start a new round in the current mode.
    pub fn reset(&mut self) {
        let mut round = self.rng.fork();
        self.state = SessionState::new(Self::new_puzzle(&self.generator, self.mode, &mut round));
    }

    /// Switch mode and start a new round.
    pub fn change_difficulty(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Snapshot of the current round.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        self.state.puzzle()
    }

    /// Selected tile ids, in evaluation order.
    #[must_use]
    pub fn selection(&self) -> &[TileId] {
        self.state.selection()
    }

    /// Selected tiles, in evaluation order.
    #[must_use]
    pub fn selected_tiles(&self) -> Vec<Tile> {
        self.state.selected_tiles()
    }

    /// Outcome of the current round.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        self.state.outcome()
    }

    /// Message for the player, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.state.message()
    }

    /// The selection as the player reads it.
    #[must_use]
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    /// Check if a tile is selected.
    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.state.is_selected(id)
    }

    /// Check if a tile can currently be clicked.
    #[must_use]
    pub fn is_selectable(&self, id: TileId) -> bool {
        self.state.is_selectable(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::solver;
    use crate::session::Phase;

    #[test]
    fn test_new_session() {
        let session = GameSession::with_seed(GameMode::Normal, 42);
        assert_eq!(session.mode(), GameMode::Normal);
        assert_eq!(session.puzzle().len(), 10);
        assert!(session.selection().is_empty());
        assert_eq!(session.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = GameSession::with_seed(GameMode::Hard, 7);
        let b = GameSession::with_seed(GameMode::Hard, 7);
        assert_eq!(a.puzzle(), b.puzzle());
    }

    #[test]
    fn test_solving_round() {
        let mut session = GameSession::with_seed(GameMode::Normal, 3);
        let solution = solver::first_solution(session.puzzle()).unwrap();

        assert!(matches!(session.select_tile(solution[0]), Ok(SelectionEvent::Selected(_))));
        assert!(matches!(session.select_tile(solution[1]), Ok(SelectionEvent::Selected(_))));
        assert_eq!(
            session.select_tile(solution[2]),
            Ok(SelectionEvent::Resolved(RoundOutcome::Matched))
        );
        assert_eq!(session.state().phase(), Phase::Resolved);
        assert_eq!(session.message().as_deref(), Some("🎉 Clear!"));
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut session = GameSession::with_seed(GameMode::Easy, 11);
        let first = session.puzzle().clone();
        let id = first.tiles().next().unwrap().id;
        session.select_tile(id).unwrap();

        session.reset();

        assert!(session.selection().is_empty());
        assert_eq!(session.message(), None);
        assert_ne!(session.puzzle(), &first);
    }

    #[test]
    fn test_change_difficulty() {
        let mut session = GameSession::with_seed(GameMode::Easy, 5);
        session.change_difficulty(GameMode::OhMyGod);

        assert_eq!(session.mode(), GameMode::OhMyGod);
        let target = session.puzzle().target();
        assert!((50..=300).contains(&target));
    }

    #[test]
    fn test_restored_rng_deals_next_round() {
        let mut session = GameSession::with_seed(GameMode::UltimateHard, 21);
        session.reset();
        let checkpoint = session.rng_state();

        session.reset();
        let restored = GameSession::from_rng_state(GameMode::UltimateHard, &checkpoint);

        assert_eq!(restored.puzzle(), session.puzzle());
        assert_eq!(restored.rng_state(), session.rng_state());
    }

    #[test]
    fn test_rounds_do_not_depend_on_clicks() {
        let mut clicked = GameSession::with_seed(GameMode::Hard, 8);
        let mut idle = GameSession::with_seed(GameMode::Hard, 8);
        let id = clicked.puzzle().tiles().next().unwrap().id;
        clicked.select_tile(id).unwrap();

        clicked.reset();
        idle.reset();
        assert_eq!(clicked.puzzle(), idle.puzzle());
    }

    #[test]
    fn test_unknown_tile_leaves_state() {
        let mut session = GameSession::with_seed(GameMode::Normal, 1);
        let before = session.state().clone();
        assert_eq!(
            session.select_tile(TileId::new(10)),
            Err(SessionError::UnknownTile(TileId::new(10)))
        );
        assert_eq!(session.state(), &before);
    }
}
