use crate::{
  error::CreateError,
  sync::{Lock, Signal},
  task::Spawner,
  timing::Clock,
};

/// One target's bundle of kernel seams.
///
/// A platform ties together the four primitives the bridge is built from:
/// an exclusive lock family, a counting semaphore, a monotonic tick source,
/// and a task factory. Mailboxes and drivers are generic over this trait so
/// the same algorithm runs unchanged on a real-time kernel or on a host OS.
pub trait Platform: Sized + 'static {
  /// Lock type protecting a value of type `T`.
  type Lock<T: Send + 'static>: Lock<T> + Send + Sync + 'static;
  /// Counting semaphore type.
  type Signal: Signal;
  /// Monotonic tick source type.
  type Clock: Clock;
  /// Task factory type.
  type Spawner: Spawner;

  /// Creates a lock protecting `value`.
  ///
  /// # Errors
  ///
  /// Returns [`CreateError::OutOfMemory`] when the kernel's object pool is
  /// exhausted. Host backends never fail.
  fn create_lock<T: Send + 'static>(value: T) -> Result<Self::Lock<T>, CreateError>;

  /// Creates a counting semaphore with the given initial count.
  ///
  /// # Errors
  ///
  /// Returns [`CreateError::OutOfMemory`] when the kernel's object pool is
  /// exhausted. Host backends never fail.
  fn create_signal(initial: usize) -> Result<Self::Signal, CreateError>;

  /// Returns the platform's tick source.
  fn clock() -> Self::Clock;

  /// Returns the platform's task factory.
  fn spawner() -> Self::Spawner;
}
