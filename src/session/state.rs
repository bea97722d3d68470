//! Immutable per-round session state and its pure transitions.
//!
//! ## State Machine
//!
//! ```text
//! Selecting(0) -> Selecting(1) -> Selecting(2) -> Resolved(outcome)
//!      ^              |  ^             |  ^               |
//!      +-- deselect --+  +- deselect --+  +-- deselect ---+
//! ```
//!
//! Reaching three tiles evaluates the selection and latches the outcome.
//! While latched, selecting another tile is rejected with a notice; only a
//! deselect (or a new round) unlatches.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Puzzle, Tile, TileId, SELECTION_SIZE};
use crate::error::SessionError;
use crate::eval::{evaluate_tiles, Evaluation};

/// Tile ids in the order the player picked them.
pub type Selection = SmallVec<[TileId; SELECTION_SIZE]>;

/// Result of the current round, derived from selection and target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Fewer than three tiles selected.
    InProgress,
    /// The selection divides by zero or inexactly.
    Undefined,
    /// The selection reaches the target.
    Matched,
    /// The selection evaluates to a different number.
    Mismatched(i64),
}

impl RoundOutcome {
    /// Message shown to the player, if any.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            RoundOutcome::InProgress => None,
            RoundOutcome::Undefined => Some("Cannot calculate😕".to_string()),
            RoundOutcome::Matched => Some("🎉 Clear!".to_string()),
            RoundOutcome::Mismatched(actual) => Some(format!("Failed! Your answer is {actual}")),
        }
    }
}

/// Advisory notices that do not change the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// A fourth tile was clicked while the round was resolved.
    SelectionFull,
}

impl Notice {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Notice::SelectionFull => {
                "Three tiles are already selected. Deselect one or reset to choose again."
            }
        }
    }
}

/// Round phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fewer than three tiles selected.
    #[default]
    Selecting,
    /// Three tiles selected and evaluated; further selection is blocked.
    Resolved,
}

/// What a selection click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The tile was added to the selection.
    Selected(TileId),
    /// The tile was already selected and has been removed.
    Deselected(TileId),
    /// The tile was added as the third and the round resolved.
    Resolved(RoundOutcome),
    /// The round is resolved; nothing changed except the notice.
    Rejected(Notice),
}

/// Complete state of one round.
///
/// Transitions never mutate: each returns a new state. Cloning is O(1)
/// because the puzzle's tiles are a persistent vector.
///
/// Deserialized states are checked against the same invariants `select`
/// maintains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct SessionState {
    puzzle: Puzzle,
    selection: Selection,
    phase: Phase,
    notice: Option<Notice>,
}

/// Unchecked wire form of a `SessionState`.
#[derive(Deserialize)]
struct SessionRecord {
    puzzle: Puzzle,
    selection: Selection,
    phase: Phase,
    #[serde(default)]
    notice: Option<Notice>,
}

impl TryFrom<SessionRecord> for SessionState {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let SessionRecord {
            puzzle,
            selection,
            phase,
            notice,
        } = record;

        if selection.len() > SELECTION_SIZE {
            return Err(SessionError::SelectionTooLong {
                len: selection.len(),
                max: SELECTION_SIZE,
            });
        }
        for (i, &id) in selection.iter().enumerate() {
            if !puzzle.contains(id) {
                return Err(SessionError::UnknownTile(id));
            }
            if selection[..i].contains(&id) {
                return Err(SessionError::DuplicateSelection(id));
            }
        }
        if (phase == Phase::Resolved) != (selection.len() == SELECTION_SIZE) {
            return Err(SessionError::PhaseMismatch {
                selected: selection.len(),
            });
        }
        if notice.is_some() && phase != Phase::Resolved {
            return Err(SessionError::NoticeWithoutResolution);
        }

        Ok(Self {
            puzzle,
            selection,
            phase,
            notice,
        })
    }
}

impl SessionState {
    /// Start a round with nothing selected.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            selection: Selection::new(),
            phase: Phase::Selecting,
            notice: None,
        }
    }

    /// The current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Selected tile ids, in evaluation order.
    #[must_use]
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pending advisory notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Check if a tile is selected.
    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.selection.contains(&id)
    }

    /// Check if clicking a tile would do anything.
    ///
    /// Once resolved, only the selected tiles (to deselect) are clickable.
    #[must_use]
    pub fn is_selectable(&self, id: TileId) -> bool {
        self.puzzle.contains(id) && (self.phase == Phase::Selecting || self.is_selected(id))
    }

    /// Selected tiles, in evaluation order.
    #[must_use]
    pub fn selected_tiles(&self) -> Vec<Tile> {
        self.selection
            .iter()
            .filter_map(|&id| self.puzzle.tile(id).copied())
            .collect()
    }

    /// Outcome of the round so far.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        if self.phase == Phase::Selecting {
            return RoundOutcome::InProgress;
        }
        match evaluate_tiles(&self.selected_tiles()) {
            Evaluation::Undefined => RoundOutcome::Undefined,
            Evaluation::Value(v) if v == self.puzzle.target() => RoundOutcome::Matched,
            Evaluation::Value(v) => RoundOutcome::Mismatched(v),
        }
    }

    /// Message shown to the player: the notice if there is one, otherwise
    /// the outcome.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.notice {
            Some(notice) => Some(notice.message().to_string()),
            None => self.outcome().message(),
        }
    }

    /// The selection as the player reads it, e.g. `5 +3 ×2`.
    ///
    /// The first tile is shown without its operator.
    #[must_use]
    pub fn expression(&self) -> String {
        self.selected_tiles()
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                if i == 0 {
                    tile.value.to_string()
                } else {
                    tile.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Apply a tile click.
    ///
    /// Returns the next state and what happened. Unknown ids are an error
    /// and leave no trace.
    pub fn select(&self, id: TileId) -> Result<(SessionState, SelectionEvent), SessionError> {
        if !self.puzzle.contains(id) {
            return Err(SessionError::UnknownTile(id));
        }

        if self.is_selected(id) {
            let mut next = self.clone();
            next.selection.retain(|selected| *selected != id);
            next.phase = Phase::Selecting;
            next.notice = None;
            return Ok((next, SelectionEvent::Deselected(id)));
        }

        if self.phase == Phase::Resolved || self.selection.len() >= SELECTION_SIZE {
            let mut next = self.clone();
            next.notice = Some(Notice::SelectionFull);
            return Ok((next, SelectionEvent::Rejected(Notice::SelectionFull)));
        }

        let mut next = self.clone();
        next.selection.push(id);
        next.notice = None;
        if next.selection.len() == SELECTION_SIZE {
            next.phase = Phase::Resolved;
            let outcome = next.outcome();
            return Ok((next, SelectionEvent::Resolved(outcome)));
        }
        Ok((next, SelectionEvent::Selected(id)))
    }
}
