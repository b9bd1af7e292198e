// crates/atlas-core/src/debounce.rs

//! Timer-reset debouncing for the search input: each submission cancels
//! any pending value and restarts the delay, so a burst of keystrokes
//! produces exactly one callback invocation carrying the final value.
//! Dropping the debouncer cancels whatever is pending and joins the
//! worker, which is the unmount path.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Delay used by the search box.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

enum Msg<T> {
    Submit(T),
    Shutdown,
}

/// A cancellable delayed task on a dedicated worker thread.
pub struct Debouncer<T: Send + 'static> {
    tx: Sender<Msg<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn a debouncer that calls `on_fire` with the most recent
    /// submitted value once `delay` has elapsed without a newer one.
    pub fn new(delay: Duration, mut on_fire: impl FnMut(T) + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel::<Msg<T>>();
        let worker = thread::spawn(move || {
            let mut pending: Option<(T, Instant)> = None;
            loop {
                match pending.take() {
                    None => match rx.recv() {
                        Ok(Msg::Submit(value)) => {
                            pending = Some((value, Instant::now() + delay));
                        }
                        Ok(Msg::Shutdown) | Err(_) => return,
                    },
                    Some((value, deadline)) => {
                        let remaining = deadline.saturating_duration_since(Instant::now());
                        match rx.recv_timeout(remaining) {
                            // A newer value replaces the pending one and
                            // restarts the clock.
                            Ok(Msg::Submit(newer)) => {
                                pending = Some((newer, Instant::now() + delay));
                            }
                            Err(RecvTimeoutError::Timeout) => on_fire(value),
                            // Pending value is deliberately discarded.
                            Ok(Msg::Shutdown) | Err(RecvTimeoutError::Disconnected) => return,
                        }
                    }
                }
            }
        });
        Debouncer {
            tx,
            worker: Some(worker),
        }
    }

    pub fn with_default_delay(on_fire: impl FnMut(T) + Send + 'static) -> Self {
        Self::new(DEFAULT_DEBOUNCE, on_fire)
    }

    /// Submit a value, cancelling any pending one.
    pub fn submit(&self, value: T) {
        // Send only fails after shutdown, when nothing should fire anyway.
        let _ = self.tx.send(Msg::Submit(value));
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let _ = self.tx.send(Msg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
