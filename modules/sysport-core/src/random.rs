#[cfg(test)]
mod tests;

/// Seedable linear-congruential pseudo-random source.
///
/// Used by upper protocol layers for timing jitter and identifier
/// randomization. Not cryptographically secure. Each owner holds its own
/// generator; there is no process-wide state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
  state: u32,
}

impl Lcg {
  /// Creates a generator from the given seed.
  #[must_use]
  pub const fn new(seed: u32) -> Self {
    Self { state: seed }
  }

  /// Resets the generator to the given seed.
  pub fn reseed(&mut self, seed: u32) {
    self.state = seed;
  }

  /// Advances the generator and returns the next value.
  ///
  /// The low bits of an LCG are weak; callers needing a small range should
  /// use [`Lcg::next_bounded`], which draws from the high bits.
  pub fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
    self.state
  }

  /// Returns a value uniformly-ish distributed in `0..bound`.
  ///
  /// Returns 0 when `bound` is 0.
  pub fn next_bounded(&mut self, bound: u32) -> u32 {
    let high = u64::from(self.next_u32() >> 8);
    ((high * u64::from(bound)) >> 24) as u32
  }
}

impl Default for Lcg {
  fn default() -> Self {
    Self::new(1)
  }
}
