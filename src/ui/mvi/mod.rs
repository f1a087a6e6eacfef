//! Model-View-Intent (MVI) primitives for the terminal front-end.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Only presentation state (which screen is shown) goes through reducers.
//! Data owned by controllers lives in [`ValueHolder`](crate::state::ValueHolder)s
//! and reaches the view through subscriptions.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
