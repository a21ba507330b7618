//! Post records and the fetch / validate / decode cycle.
//!
//! ```text
//! GET url ──→ status 2xx? ──→ decode [PostRecord] ──→ AppEvent::PostsLoaded
//!                  │                   │
//!                  └─ BadServerResponse └─ Decode
//! ```

mod error;
mod fetch;
mod loader;
mod model;

pub use error::FetchError;
pub use fetch::{check_status, decode_posts, PostFetcher};
pub use loader::{spawn_fetch, FetchHandle};
pub use model::PostRecord;
