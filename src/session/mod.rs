//! Game session: selection tracking and result messaging.
//!
//! `SessionState` holds one round and exposes pure transitions;
//! `GameSession` owns the RNG and mode and swaps in each new state.
//!
//! ## Example Usage
//!
//! ```
//! use number_pyramid::core::GameMode;
//! use number_pyramid::generator::solver;
//! use number_pyramid::session::{GameSession, RoundOutcome, SelectionEvent};
//!
//! let mut session = GameSession::with_seed(GameMode::Normal, 42);
//! let [a, b, c] = solver::first_solution(session.puzzle()).unwrap();
//!
//! session.select_tile(a).unwrap();
//! session.select_tile(b).unwrap();
//! let event = session.select_tile(c).unwrap();
//!
//! assert_eq!(event, SelectionEvent::Resolved(RoundOutcome::Matched));
//! assert_eq!(session.message().as_deref(), Some("🎉 Clear!"));
//! ```

mod game;
mod state;

pub use game::GameSession;
pub use state::{Notice, Phase, RoundOutcome, Selection, SelectionEvent, SessionState};
