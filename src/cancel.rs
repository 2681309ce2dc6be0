//! Cooperative cancellation
//!
//! Algorithms never stop on their own clock. They poll a
//! [`CancellationToken`] at fixed points and exit after finishing the
//! current unit of work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A shared flag signalling that a search should stop
///
/// Clones share the same flag, so a clone handed to another thread can
/// cancel the algorithm owning the original.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Cancels the token after `duration` from a background timer thread
    ///
    /// The returned handle can be joined; dropping it detaches the timer.
    pub fn cancel_after(&self, duration: Duration) -> thread::JoinHandle<()> {
        let token = self.clone();
        thread::spawn(move || {
            thread::sleep(duration);
            log::debug!("cancellation timer fired after {:?}", duration);
            token.cancel();
        })
    }
}
