use std::sync::Mutex;

use sysport_core_rs::sync::Lock;

/// Thin wrapper over [`std::sync::Mutex`] implementing the core [`Lock`]
/// seam.
///
/// Poisoning is deliberately ignored: the bridge treats a lock as
/// unconditionally valid once created, so a panicked holder does not take
/// the mailbox down with it.
pub struct StdLock<T>(Mutex<T>);

impl<T> StdLock<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(|err| err.into_inner())
  }

  /// Locks the mutex and returns the guard.
  pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(|err| err.into_inner())
  }
}

impl<T> Lock<T> for StdLock<T> {
  type Guard<'a>
    = std::sync::MutexGuard<'a, T>
  where
    T: 'a;

  fn lock(&self) -> Self::Guard<'_> {
    StdLock::lock(self)
  }
}
