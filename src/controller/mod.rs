//! Screen controllers: each owns one [`ValueHolder`](crate::state::ValueHolder)
//! and exposes read, subscribe and the screen's actions.

mod counter;
mod joke;

pub use counter::CounterController;
pub use joke::{FetchOutcome, JokeController};
