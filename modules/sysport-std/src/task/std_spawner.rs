use std::thread;

use sysport_core_rs::{
  error::CreateError,
  task::{Spawner, TaskConfig, TaskHandle},
};
use tracing::debug;


/// Task factory backed by OS threads.
///
/// The task name and stack budget map directly onto
/// [`std::thread::Builder`]. The priority has no host equivalent; it is
/// recorded in the spawn event and otherwise left to the OS scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdSpawner;

impl StdSpawner {
  /// Creates the spawner.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Spawner for StdSpawner {
  fn spawn<F>(&self, config: TaskConfig, entry: F) -> Result<TaskHandle, CreateError>
  where
    F: FnOnce() + Send + 'static, {
    let handle = TaskHandle::allocate();
    debug!(
      task = config.name,
      id = handle.id(),
      priority = config.priority,
      stack_size = config.stack_size,
      "spawning task"
    );
    thread::Builder::new()
      .name(config.name.into())
      .stack_size(config.stack_size)
      .spawn(entry)
      .map_err(|_| CreateError::OutOfMemory)?;
    Ok(handle)
  }
}
