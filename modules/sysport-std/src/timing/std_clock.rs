use std::time::Instant;

use sysport_core_rs::timing::Clock;


/// Default tick rate of the host clock, one tick per millisecond.
pub const DEFAULT_TICK_RATE: u64 = 1000;

/// Monotonic tick source anchored to [`std::time::Instant`].
///
/// The tick rate is fixed at construction. Rates far below 1000 Hz are
/// useful in tests to reproduce the coarse timers of small kernels, where
/// the elapsed-time floor of the bridge actually matters.
#[derive(Clone, Debug)]
pub struct StdClock {
  epoch: Instant,
  hz:    u64,
}

impl StdClock {
  /// Creates a clock ticking at [`DEFAULT_TICK_RATE`].
  #[must_use]
  pub fn new() -> Self {
    Self::with_tick_rate(DEFAULT_TICK_RATE)
  }

  /// Creates a clock with an explicit tick rate in ticks per second.
  ///
  /// A zero rate is coerced to one tick per second.
  #[must_use]
  pub fn with_tick_rate(hz: u64) -> Self {
    Self { epoch: Instant::now(), hz: hz.max(1) }
  }
}

impl Default for StdClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for StdClock {
  fn ticks(&self) -> u64 {
    let elapsed = self.epoch.elapsed();
    elapsed.as_secs().saturating_mul(self.hz) + u64::from(elapsed.subsec_nanos()) * self.hz / 1_000_000_000
  }

  fn ticks_per_second(&self) -> u64 {
    self.hz
  }
}
