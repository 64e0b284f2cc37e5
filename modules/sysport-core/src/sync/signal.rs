/// How long a [`Signal::wait`] call may block.
///
/// Unbounded and bounded waits are distinct variants rather than a zero
/// sentinel. `Millis(0)` is an already-expired budget and degenerates to a
/// non-blocking check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitFor {
  /// Block until the signal is satisfied, however long that takes.
  Forever,
  /// Block for at most this many milliseconds.
  Millis(u32),
}

/// Result of a [`Signal::wait`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
  /// The count was consumed before the budget elapsed.
  Acquired,
  /// The budget elapsed with the count still at zero.
  TimedOut,
}

impl WaitOutcome {
  /// Returns `true` when the wait was satisfied.
  #[must_use]
  pub const fn is_acquired(&self) -> bool {
    matches!(self, WaitOutcome::Acquired)
  }
}

/// Counting-semaphore seam over a kernel semaphore.
///
/// `signal` never blocks and must be callable from a hardware-event context;
/// device drivers use exactly that to wake a consumer when data arrives.
/// Waiters are released one per increment; the wake order among multiple
/// waiters is the underlying scheduler's policy.
pub trait Signal: Send + Sync + 'static {
  /// Increments the count, waking one blocked waiter if any.
  fn signal(&self);

  /// Blocks until the count is positive (then decrements it) or the budget
  /// elapses.
  fn wait(&self, timeout: WaitFor) -> WaitOutcome;
}
