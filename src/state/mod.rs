//! Observable state containers shared by controllers and the UI.
//!
//! ```text
//! controller ── set/update ──→ ValueHolder ── notify ──→ subscribers
//!                                   │
//!                                   └── observe() ──→ Observable (read + subscribe)
//! ```

mod holder;

pub use holder::{Observable, Subscription, ValueHolder};
