use core::ops::{Deref, DerefMut};

/// Exclusive-ownership seam over a kernel mutex.
///
/// At most one task holds the guard at a time; acquisition blocks the caller
/// until the lock is free. Re-entrant acquisition by the task already holding
/// the guard is a contract violation and may deadlock.
pub trait Lock<T> {
  /// Guard type returned by [`Lock::lock`]; releasing is dropping the guard.
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Acquires the lock, blocking until it is held, and returns the guard.
  fn lock(&self) -> Self::Guard<'_>;
}

/// Convenience alias for guards produced by [`Lock`].
pub type LockGuard<'a, L, T> = <L as Lock<T>>::Guard<'a>;
