use std::sync::Arc;

use tokio::runtime::Handle;

use crate::controller::{CounterController, JokeController};
use crate::joke::{JokeRecord, JokeSource};
use crate::state::Subscription;
use crate::ui::events::{AppEvent, EventSender};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Screen};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the terminal front-end renders from.
///
/// Owns both screen controllers for the lifetime of the UI and keeps one
/// subscription per controller that wakes the event loop on change.
pub struct App {
    should_quit: bool,
    /// Which screen is shown (MVI pattern).
    nav: NavState,
    joke: JokeController,
    counter: CounterController,
    _subscriptions: Vec<Subscription>,
}

impl App {
    pub fn new(source: Arc<dyn JokeSource>, runtime: Handle, events: EventSender) -> Self {
        let joke = JokeController::new(source, runtime);
        let counter = CounterController::new();

        let joke_events = events.clone();
        let joke_sub = joke.joke().subscribe(move |_| {
            let _ = joke_events.send(AppEvent::StateChanged);
        });
        let counter_sub = counter.count().subscribe(move |_| {
            let _ = events.send(AppEvent::StateChanged);
        });

        Self {
            should_quit: false,
            nav: NavState::default(),
            joke,
            counter,
            _subscriptions: vec![joke_sub, counter_sub],
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.nav.current
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn navigate(&mut self, intent: NavIntent) {
        let before = self.nav.current;
        dispatch_mvi!(self, nav, NavReducer, intent);
        if before != self.nav.current {
            tracing::debug!(from = ?before, to = ?self.nav.current, "Screen changed");
        }
    }

    pub fn joke(&self) -> Option<JokeRecord> {
        self.joke.current()
    }

    pub fn refresh_joke(&self) {
        // Outcome is logged by the controller; the UI only reacts to the holder.
        drop(self.joke.fetch_joke());
    }

    pub fn counter(&self) -> u64 {
        self.counter.value()
    }

    pub fn increment_counter(&self) {
        self.counter.increment();
    }

    /// Stop reacting to in-flight fetches before the runtime goes away.
    pub fn shutdown(&self) {
        self.joke.dispose();
    }
}
