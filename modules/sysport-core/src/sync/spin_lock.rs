use crate::sync::lock::Lock;

/// Thin wrapper around [`spin::Mutex`] implementing [`Lock`].
///
/// Suited for kernel ports that run the bridge before a blocking mutex is
/// available, and for single-core targets where spinning is acceptable.
pub struct SpinLock<T>(spin::Mutex<T>);

impl<T> SpinLock<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }
}

impl<T> Lock<T> for SpinLock<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn lock(&self) -> Self::Guard<'_> {
    SpinLock::lock(self)
  }
}
