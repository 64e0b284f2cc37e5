
/// Converts a tick interval into the elapsed milliseconds reported to a
/// caller that waited with a bounded timeout.
///
/// Tick resolution can be coarser than a millisecond, so a genuine wait can
/// compute to zero. Reporting zero would let a retransmission timer above the
/// bridge spin forever on an apparently free wait, so the value is floored:
/// a zero result becomes `500 / hz` ms when the tick rate is below 500 Hz,
/// else 1 ms. The result is then clamped to the requested budget.
#[must_use]
pub fn elapsed_millis(start_ticks: u64, now_ticks: u64, ticks_per_second: u64, requested_ms: u32) -> u32 {
  let hz = ticks_per_second.max(1);
  let delta = now_ticks.saturating_sub(start_ticks);
  let mut millis = delta.saturating_mul(1000) / hz;
  if millis == 0 {
    millis = if hz < 500 { 500 / hz } else { 1 };
  }
  millis.min(u64::from(requested_ms)) as u32
}
