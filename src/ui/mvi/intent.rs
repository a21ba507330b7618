//! Marker trait for intents.

/// An input to a reducer: a key press translated into an action, or a
/// system event such as a finished fetch.
pub trait Intent: Send + 'static {}
