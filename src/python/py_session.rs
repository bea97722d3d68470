//! Game session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::py_core::{parse_mode, PyPuzzle, PyTile};
use crate::core::TileId;
use crate::session::{GameSession, RoundOutcome, SelectionEvent};

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
#[derive(Clone, Debug)]
pub struct PyGameSession(pub GameSession);

#[pymethods]
impl PyGameSession {
    /// Start a session in the given mode.
    #[new]
    #[pyo3(signature = (mode="normal", seed=None))]
    fn new(mode: &str, seed: Option<u64>) -> PyResult<Self> {
        let mode = parse_mode(mode)?;
        Ok(Self(match seed {
            Some(seed) => GameSession::with_seed(mode, seed),
            None => GameSession::new(mode),
        }))
    }

    /// Click a tile. Returns one of `selected`, `deselected`, `resolved`,
    /// `rejected`.
    fn select_tile(&mut self, id: u8) -> PyResult<&'static str> {
        let event = self
            .0
            .select_tile(TileId::new(id))
            .map_err(|e| PyValueError::new_err(format!("{e}")))?;
        Ok(match event {
            SelectionEvent::Selected(_) => "selected",
            SelectionEvent::Deselected(_) => "deselected",
            SelectionEvent::Resolved(_) => "resolved",
            SelectionEvent::Rejected(_) => "rejected",
        })
    }

    /// Start a new round in the current mode.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Switch mode and start a new round.
    fn change_difficulty(&mut self, mode: &str) -> PyResult<()> {
        self.0.change_difficulty(parse_mode(mode)?);
        Ok(())
    }

    /// Active mode name.
    #[getter]
    fn mode(&self) -> &'static str {
        self.0.mode().name()
    }

    /// Current puzzle.
    #[getter]
    fn puzzle(&self) -> PyPuzzle {
        PyPuzzle(self.0.puzzle().clone())
    }

    /// Selected tiles in evaluation order.
    fn selection(&self) -> Vec<PyTile> {
        self.0.selected_tiles().into_iter().map(PyTile).collect()
    }

    /// Outcome as a string: `in_progress`, `undefined`, `matched` or
    /// `mismatched`.
    fn outcome(&self) -> &'static str {
        match self.0.outcome() {
            RoundOutcome::InProgress => "in_progress",
            RoundOutcome::Undefined => "undefined",
            RoundOutcome::Matched => "matched",
            RoundOutcome::Mismatched(_) => "mismatched",
        }
    }

    /// Message for the player, if any.
    fn message(&self) -> Option<String> {
        self.0.message()
    }

    /// Selection as the player reads it.
    fn expression(&self) -> String {
        self.0.expression()
    }

    /// Check if a tile can currently be clicked.
    fn is_selectable(&self, id: u8) -> bool {
        self.0.is_selectable(TileId::new(id))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(mode={}, target={}, selection='{}')",
            self.0.mode(),
            self.0.puzzle().target(),
            self.0.expression()
        )
    }
}
