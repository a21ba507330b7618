//! Post list feature module.
//!
//! Holds the one observable slot the view renders: the current posts, the
//! load status and the selection.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Post list and load status (Idle → Loading → Loaded | Failed)
//! - `intent.rs` - Fetch outcomes and navigation
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::PostListIntent;
pub use reducer::PostListReducer;
pub use state::{LoadStatus, PostListState};
