//! Cancellation token
//!
//! The sampling loop blocks for fifteen minutes between ticks; the only
//! way out is the operator's interrupt signal. The token turns that
//! signal into a wakeup the loop observes at its suspension boundary,
//! so termination does not wait out the rest of the interval.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Clonable one-shot cancellation flag
///
/// `cancel` is called from the signal-handler thread; the sampling loop
/// checks the flag between operations and waits on it during the
/// inter-tick pause. Once set, the flag never clears.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: Mutex<bool>,
    wakeup: Condvar,
}

impl CancelToken {
    /// Fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag and wake every waiter
    pub fn cancel(&self) {
        *self.lock() = true;
        self.inner.wakeup.notify_all();
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        *self.lock()
    }

    /// Block for up to `timeout`, returning early on cancellation
    ///
    /// Returns `true` if the token was cancelled (before or during the
    /// wait), `false` if the full timeout elapsed.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut cancelled = self.lock();
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            cancelled = self
                .inner
                .wakeup
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(|e| e.into_inner())
                .0;
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        // A waiter never panics while holding the lock; recover the
        // guard rather than cascading a poisoned-mutex panic.
        self.inner
            .cancelled
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}
