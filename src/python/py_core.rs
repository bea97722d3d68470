//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameMode, Operator, Puzzle, PuzzleRng, Tile, TileId};
use crate::generator::{solver, PuzzleGenerator};

/// Python wrapper for Tile.
#[pyclass(name = "Tile")]
#[derive(Clone, Debug)]
pub struct PyTile(pub Tile);

#[pymethods]
impl PyTile {
    /// Create a new tile from an id, value and operator symbol.
    #[new]
    fn new(id: u8, value: i64, operator: &str) -> PyResult<Self> {
        let operator: Operator = operator
            .parse()
            .map_err(|e| PyValueError::new_err(format!("{e}")))?;
        Ok(Self(Tile::new(TileId::new(id), value, operator)))
    }

    /// Tile id.
    #[getter]
    fn id(&self) -> u8 {
        self.0.id.0
    }

    /// Operand value.
    #[getter]
    fn value(&self) -> i64 {
        self.0.value
    }

    /// Operator symbol.
    #[getter]
    fn operator(&self) -> String {
        self.0.operator.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Tile(id={}, {})", self.0.id.0, self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Puzzle.
#[pyclass(name = "Puzzle")]
#[derive(Clone, Debug)]
pub struct PyPuzzle(pub Puzzle);

#[pymethods]
impl PyPuzzle {
    /// Target number.
    #[getter]
    fn target(&self) -> i64 {
        self.0.target()
    }

    /// Whether a solution was confirmed.
    #[getter]
    fn verified(&self) -> bool {
        self.0.is_verified()
    }

    /// Tiles in display order.
    fn tiles(&self) -> Vec<PyTile> {
        self.0.tiles().copied().map(PyTile).collect()
    }

    /// Tiles grouped into pyramid rows.
    fn rows(&self) -> Vec<Vec<PyTile>> {
        self.0
            .pyramid_rows()
            .into_iter()
            .map(|row| row.into_iter().map(PyTile).collect())
            .collect()
    }

    /// Every ordered id triple that reaches the target.
    fn solutions(&self) -> Vec<(u8, u8, u8)> {
        solver::solutions(&self.0)
            .into_iter()
            .map(|[a, b, c]| (a.0, b.0, c.0))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Puzzle(target={}, tiles={})", self.0.target(), self.0.len())
    }
}

/// Parse a mode name, mapping errors to `ValueError`.
pub(crate) fn parse_mode(name: &str) -> PyResult<GameMode> {
    name.parse().map_err(|e| PyValueError::new_err(format!("{e}")))
}

/// Generate a puzzle for a named mode.
///
/// Pass `seed` for a reproducible puzzle.
#[pyfunction]
#[pyo3(signature = (mode="normal", seed=None))]
pub fn generate(mode: &str, seed: Option<u64>) -> PyResult<PyPuzzle> {
    let mode = parse_mode(mode)?;
    let mut rng = seed.map_or_else(PuzzleRng::from_entropy, PuzzleRng::new);
    Ok(PyPuzzle(PuzzleGenerator::default().generate_mode(mode, &mut rng)))
}

/// Names of all difficulty modes, easiest first.
#[pyfunction]
pub fn modes() -> Vec<&'static str> {
    GameMode::ALL.iter().map(|m| m.name()).collect()
}
