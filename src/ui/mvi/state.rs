/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive new ones, compared to detect
/// changes, and defaulted for the initial screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
