use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Longest the input thread blocks before re-checking the stop flag.
const POLL_SLICE: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A controller published a new value; redraw.
    StateChanged,
}

pub type EventSender = mpsc::Sender<AppEvent>;

/// Funnels terminal input, ticks and state notifications into the UI loop.
///
/// Controllers may publish from runtime worker threads; their observers only
/// post [`AppEvent::StateChanged`] here, so all rendering stays on the thread
/// that drains this handler.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: EventSender,
    stop: Arc<AtomicBool>,
    input: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let input = thread::Builder::new()
            .name("jokebox-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                while !stop_flag.load(Ordering::Relaxed) {
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(POLL_SLICE);

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                event_tx.send(AppEvent::Key(key))
                            }
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "Failed to read terminal event");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to poll terminal events");
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            });

        let input = match input {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::error!(error = %err, "Failed to spawn input thread");
                None
            }
        };

        Self {
            rx,
            tx,
            stop,
            input,
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.input.take() {
            let _ = handle.join();
        }
    }
}
