use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use splash_logging::splash_debug;

use crate::surface::WindowHost;

/// One-shot deferred window close. Dropping the timer does not cancel
/// it; call [`CloseTimer::cancel`].
pub struct CloseTimer {
    cancelled: Arc<(Mutex<bool>, Condvar)>,
}

impl CloseTimer {
    /// Calls `host.request_close()` after `delay` unless cancelled first.
    pub fn schedule(delay: Duration, host: Arc<dyn WindowHost>) -> Self {
        let cancelled = Arc::new((Mutex::new(false), Condvar::new()));
        let pair = cancelled.clone();

        thread::spawn(move || {
            let (flag, signal) = &*pair;
            let guard = flag.lock().expect("close timer lock");
            let (guard, _timeout) = signal
                .wait_timeout_while(guard, delay, |cancelled| !*cancelled)
                .expect("close timer wait");
            if *guard {
                splash_debug!("close timer cancelled before firing");
                return;
            }
            drop(guard);
            host.request_close();
        });

        Self { cancelled }
    }

    /// Stops the pending close if it has not fired yet and wakes the
    /// timer thread so it exits without sleeping out the grace period.
    pub fn cancel(&self) {
        let (flag, signal) = &*self.cancelled;
        *flag.lock().expect("close timer lock") = true;
        signal.notify_all();
    }
}
