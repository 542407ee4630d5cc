use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use super::errors::DispatchError;

/// One-shot completion handle for a submitted print job.
///
/// The dispatcher signals `complete()` exactly once, from whichever event
/// ends the job (completion, cancellation, or the service reporting no
/// more events). The submitting side blocks on `wait_done()`, re-checking
/// the flag after every wakeup so a spurious wakeup never counts as
/// completion.
#[derive(Debug, Clone, Default)]
pub struct JobWatcher {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl JobWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the job finished and wakes every waiter. Idempotent; calling
    /// it again after the first signal changes nothing.
    pub fn complete(&self) {
        let (flag, condvar) = &*self.state;
        let mut done = flag.lock().unwrap_or_else(PoisonError::into_inner);
        *done = true;
        condvar.notify_all();
    }

    pub fn is_done(&self) -> bool {
        let (flag, _) = &*self.state;
        *flag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until `complete()` has been called, or until `timeout` has
    /// elapsed. A timeout is reported as a retryable `CompletionTimeout`,
    /// never a hang.
    pub fn wait_done(&self, timeout: Duration) -> Result<(), DispatchError> {
        let (flag, condvar) = &*self.state;
        let deadline = Instant::now() + timeout;

        let mut done = flag.lock().unwrap_or_else(PoisonError::into_inner);
        while !*done {
            let now = Instant::now();
            if now >= deadline {
                return Err(DispatchError::CompletionTimeout(timeout));
            }
            let (guard, _) = condvar
                .wait_timeout(done, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            done = guard;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn completed_before_wait_returns_immediately() {
        let watcher = JobWatcher::new();
        watcher.complete();
        watcher.wait_done(Duration::from_millis(10)).unwrap();
    }

    #[test]
    fn wait_blocks_until_signal_from_another_thread() {
        let watcher = JobWatcher::new();
        let signaller = watcher.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            signaller.complete();
        });
        watcher.wait_done(Duration::from_secs(5)).unwrap();
        handle.join().unwrap();
        assert!(watcher.is_done());
    }

    #[test]
    fn wait_times_out_without_signal() {
        let watcher = JobWatcher::new();
        let err = watcher.wait_done(Duration::from_millis(20)).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn complete_is_idempotent() {
        let watcher = JobWatcher::new();
        watcher.complete();
        watcher.complete();
        assert!(watcher.is_done());
    }
}
