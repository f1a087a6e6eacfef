use crate::state::{Observable, ValueHolder};

/// Drives the counter screen.
#[derive(Clone, Default)]
pub struct CounterController {
    holder: ValueHolder<u64>,
}

impl CounterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and notify subscribers. Saturates at `u64::MAX`.
    pub fn increment(&self) {
        self.holder.update(|count| *count = count.saturating_add(1));
    }

    pub fn count(&self) -> Observable<u64> {
        self.holder.observe()
    }

    pub fn value(&self) -> u64 {
        self.holder.get()
    }
}
