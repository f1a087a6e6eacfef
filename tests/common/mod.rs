//! Shared test utilities and stub joke sources.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use jokebox::joke::{FetchError, JokeRecord, JokeSource};
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub const CHUCK_JOKE: &str = "Chuck Norris counted to infinity, twice.";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn unavailable() -> FetchError {
    FetchError::status(503, "service unavailable")
}

/// Source that answers every call the same way, immediately.
pub struct StaticSource {
    joke: Option<JokeRecord>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn ok(joke: JokeRecord) -> Arc<Self> {
        Arc::new(Self {
            joke: Some(joke),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            joke: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeSource for StaticSource {
    async fn fetch(&self) -> Result<JokeRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.joke.clone().ok_or_else(unavailable)
    }
}

type Reply = Result<JokeRecord, FetchError>;

/// Source whose calls stay pending until the test answers them.
///
/// Calls are numbered in the order they reach the source, starting at 0.
/// Answering out of order lets tests pick which response lands first.
#[derive(Default)]
pub struct ScriptedSource {
    pending: Mutex<Vec<Option<oneshot::Sender<Reply>>>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.pending.lock().len()
    }

    /// Wait until at least `n` calls have reached the source.
    pub async fn wait_for_calls(&self, n: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.calls() < n {
            assert!(
                tokio::time::Instant::now() < deadline,
                "timed out waiting for {n} calls, saw {}",
                self.calls()
            );
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    pub fn respond(&self, call: usize, reply: Reply) {
        let sender = self.pending.lock()[call]
            .take()
            .expect("call already answered");
        let _ = sender.send(reply);
    }
}

#[async_trait]
impl JokeSource for ScriptedSource {
    async fn fetch(&self) -> Result<JokeRecord, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push(Some(tx));
        rx.await.unwrap_or_else(|_| Err(unavailable()))
    }
}

/// Poll `condition` until it holds or the timeout expires.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    condition()
}
