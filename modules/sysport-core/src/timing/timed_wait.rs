use crate::{
  sync::{Signal, WaitFor, WaitOutcome},
  timing::{elapsed_millis, Clock},
};

/// Outcome of a bounded wait together with its elapsed-time accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimedWait {
  /// The signal was consumed; `elapsed_ms` is the floored, clamped wait time.
  Acquired {
    /// Elapsed wait in milliseconds, per [`elapsed_millis`]. Never zero.
    elapsed_ms: u32,
  },
  /// The budget elapsed first.
  TimedOut,
}

/// Waits on `signal` for at most `timeout_ms`, reporting how long the caller
/// actually blocked.
///
/// Upper layers schedule retransmissions from the reported value, so it
/// follows the [`elapsed_millis`] floor and clamp rules rather than the raw
/// tick delta.
#[must_use]
pub fn timed_wait<S: Signal, C: Clock>(signal: &S, clock: &C, timeout_ms: u32) -> TimedWait {
  let start = clock.ticks();
  match signal.wait(WaitFor::Millis(timeout_ms)) {
    | WaitOutcome::TimedOut => TimedWait::TimedOut,
    | WaitOutcome::Acquired => TimedWait::Acquired {
      elapsed_ms: elapsed_millis(start, clock.ticks(), clock.ticks_per_second(), timeout_ms),
    },
  }
}
