//! Model-View-Intent primitives.
//!
//! ```text
//! AppEvent ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! The reducer is the only place a feature's state changes. Side effects
//! (spawning fetches, logging) stay with the caller around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
