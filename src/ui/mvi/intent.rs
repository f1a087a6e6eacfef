/// Marker trait for intents: key presses and navigation requests that a
/// reducer turns into a new state.
pub trait Intent: Send + 'static {}
