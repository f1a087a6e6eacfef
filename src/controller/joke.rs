use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::joke::{JokeRecord, JokeSource};
use crate::state::{Observable, ValueHolder};

/// What happened to a single [`JokeController::fetch_joke`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A new joke was written to the holder.
    Published,
    /// The source failed; the error was logged and the holder left as is.
    Failed,
    /// The controller was disposed before the response arrived.
    Discarded,
}

/// Drives the joke screen: owns the current joke and refreshes it on demand.
///
/// Each [`fetch_joke`](Self::fetch_joke) runs as its own task. Overlapping
/// fetches are not serialized, so whichever response lands last wins.
/// Failures never reach the caller; they are logged and the previous joke
/// stays in place.
pub struct JokeController {
    inner: Arc<JokeInner>,
    runtime: Handle,
}

struct JokeInner {
    source: Arc<dyn JokeSource>,
    holder: ValueHolder<Option<JokeRecord>>,
    /// Bumped on dispose; fetches tagged with an older value are dropped.
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl JokeController {
    /// Create the controller and immediately start the first fetch.
    pub fn new(source: Arc<dyn JokeSource>, runtime: Handle) -> Self {
        let controller = Self {
            inner: Arc::new(JokeInner {
                source,
                holder: ValueHolder::new(None),
                generation: AtomicU64::new(0),
                in_flight: AtomicUsize::new(0),
            }),
            runtime,
        };
        // The initial fetch is fire-and-forget like any user-triggered one.
        drop(controller.fetch_joke());
        controller
    }

    /// Start one fetch without blocking.
    ///
    /// The returned handle can be awaited to learn the outcome, or dropped;
    /// the fetch keeps running either way.
    pub fn fetch_joke(&self) -> JoinHandle<FetchOutcome> {
        let inner = Arc::clone(&self.inner);
        let generation = inner.generation.load(Ordering::SeqCst);
        self.runtime
            .spawn(async move { inner.run_fetch(generation).await })
    }

    pub fn joke(&self) -> Observable<Option<JokeRecord>> {
        self.inner.holder.observe()
    }

    pub fn current(&self) -> Option<JokeRecord> {
        self.inner.holder.get()
    }

    /// Detach from all in-flight fetches and subscribers.
    ///
    /// Responses that arrive afterwards are discarded. Also runs on drop.
    pub fn dispose(&self) {
        if self.inner.holder.is_disposed() {
            return;
        }
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.holder.dispose();
        tracing::debug!(
            generation,
            in_flight = self.inner.in_flight.load(Ordering::SeqCst),
            "Joke controller disposed"
        );
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.holder.is_disposed()
    }
}

impl Drop for JokeController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl JokeInner {
    async fn run_fetch(&self, generation: u64) -> FetchOutcome {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, in_flight, "Fetching joke");

        let result = self.source.fetch().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding joke for disposed controller");
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(joke) => {
                let joke_id = joke.id().to_string();
                if self.holder.set(Some(joke)) {
                    tracing::info!(joke_id = %joke_id, "Joke updated");
                    FetchOutcome::Published
                } else {
                    FetchOutcome::Discarded
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.kind(), "Error fetching joke");
                FetchOutcome::Failed
            }
        }
    }
}
