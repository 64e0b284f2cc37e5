/// Monotonic tick source seam.
///
/// The bridge consumes ticks, it never produces them; the kernel's timer
/// interrupt (or a host clock) drives the counter. The rate must be positive
/// and constant for the lifetime of the clock.
pub trait Clock: Send + Sync + 'static {
  /// Current value of the monotonic tick counter.
  fn ticks(&self) -> u64;

  /// Number of ticks per second.
  fn ticks_per_second(&self) -> u64;
}
