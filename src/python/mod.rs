//! Python bindings for the number-pyramid engine.
//!
//! # Quick Start
//!
//! ```python
//! import number_pyramid as np
//!
//! session = np.GameSession(mode="hard", seed=42)
//! a, b, c = session.puzzle.solutions()[0]
//!
//! session.select_tile(a)
//! session.select_tile(b)
//! session.select_tile(c)   # "resolved"
//! print(session.message()) # "🎉 Clear!"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// number_pyramid: three-tile arithmetic puzzle engine.
#[pymodule]
fn number_pyramid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTile>()?;
    m.add_class::<PyPuzzle>()?;
    m.add_class::<PyGameSession>()?;

    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(modes, m)?)?;

    Ok(())
}
