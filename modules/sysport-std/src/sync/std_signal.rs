use std::{
  sync::{Condvar, Mutex},
  time::{Duration, Instant},
};

use sysport_core_rs::sync::{Signal, WaitFor, WaitOutcome};

#[cfg(test)]
mod tests;

/// Counting semaphore over a mutex/condvar pair.
///
/// `signal` takes the count lock briefly and notifies one waiter; it never
/// blocks on the semaphore itself, so event-source threads (the host
/// equivalent of an interrupt context) may call it freely. `wait` is safe
/// against spurious wakeups: it re-checks the count and re-arms the
/// remaining budget on every pass.
pub struct StdSignal {
  count:     Mutex<usize>,
  available: Condvar,
}

impl StdSignal {
  /// Creates a signal with the given initial count.
  #[must_use]
  pub fn new(initial: usize) -> Self {
    Self { count: Mutex::new(initial), available: Condvar::new() }
  }

  /// Current count; for diagnostics only, stale the moment it returns.
  #[must_use]
  pub fn count(&self) -> usize {
    *self.count.lock().unwrap_or_else(|err| err.into_inner())
  }
}

impl Signal for StdSignal {
  fn signal(&self) {
    let mut count = self.count.lock().unwrap_or_else(|err| err.into_inner());
    *count += 1;
    self.available.notify_one();
  }

  fn wait(&self, timeout: WaitFor) -> WaitOutcome {
    let mut count = self.count.lock().unwrap_or_else(|err| err.into_inner());
    match timeout {
      | WaitFor::Forever => {
        while *count == 0 {
          count = self.available.wait(count).unwrap_or_else(|err| err.into_inner());
        }
        *count -= 1;
        WaitOutcome::Acquired
      },
      | WaitFor::Millis(ms) => {
        let deadline = Instant::now() + Duration::from_millis(u64::from(ms));
        while *count == 0 {
          let now = Instant::now();
          if now >= deadline {
            return WaitOutcome::TimedOut;
          }
          let (guard, _result) = self
            .available
            .wait_timeout(count, deadline - now)
            .unwrap_or_else(|err| err.into_inner());
          count = guard;
        }
        *count -= 1;
        WaitOutcome::Acquired
      },
    }
  }
}
