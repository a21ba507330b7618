//! Marker trait for feature state.

/// State owned by one UI feature. Cloned and compared freely; `Default` is
/// the state before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
