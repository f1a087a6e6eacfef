//! Random jokes and a counter.
//!
//! The reusable part is the view-state unit: a [`state::ValueHolder`]
//! publishes an observable value, [`controller::JokeController`] fills it from
//! a [`joke::JokeSource`], and [`controller::CounterController`] bumps an
//! integer. The [`ui`] module is a thin terminal front-end over both.

pub mod cli;
pub mod config;
pub mod controller;
pub mod joke;
pub mod logging;
pub mod state;
pub mod ui;
