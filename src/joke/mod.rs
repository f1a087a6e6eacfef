//! Joke data and the remote source that produces it.

mod error;
mod record;
mod source;

pub use error::FetchError;
pub use record::JokeRecord;
pub use source::{HttpJokeSource, JokeSource, RANDOM_JOKE_PATH};
