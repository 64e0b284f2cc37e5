use sysport_core_rs::{error::CreateError, mailbox::Mailbox, platform::Platform};
use tracing::debug;

use crate::{sync::{StdLock, StdSignal}, task::StdSpawner, timing::StdClock};

#[cfg(test)]
mod tests;

/// The host-OS platform bundle.
///
/// Locks are std mutexes, signals are mutex/condvar semaphores, ticks come
/// from [`StdClock`], and tasks are OS threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdPlatform;

impl Platform for StdPlatform {
  type Clock = StdClock;
  type Lock<T: Send + 'static> = StdLock<T>;
  type Signal = StdSignal;
  type Spawner = StdSpawner;

  fn create_lock<T: Send + 'static>(value: T) -> Result<Self::Lock<T>, CreateError> {
    Ok(StdLock::new(value))
  }

  fn create_signal(initial: usize) -> Result<Self::Signal, CreateError> {
    debug!(initial, "creating signal");
    Ok(StdSignal::new(initial))
  }

  fn clock() -> Self::Clock {
    StdClock::new()
  }

  fn spawner() -> Self::Spawner {
    StdSpawner::new()
  }
}

/// Bounded mailbox running on the host platform.
pub type StdMailbox<M> = Mailbox<M, StdPlatform>;
