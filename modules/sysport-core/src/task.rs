use portable_atomic::{AtomicU64, Ordering};

use crate::error::CreateError;


/// Default stack budget for spawned tasks, in bytes.
pub const DEFAULT_STACK_SIZE: usize = 16 * 1024;
/// Default scheduling priority for spawned tasks.
pub const DEFAULT_PRIORITY: u8 = 1;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Name, priority, and stack budget for a task to be spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskConfig {
  /// Human-readable task name, used for logging and kernel task tables.
  pub name: &'static str,
  /// Scheduling priority; interpretation belongs to the target kernel.
  pub priority: u8,
  /// Stack budget in bytes.
  pub stack_size: usize,
}

impl TaskConfig {
  /// Creates a config with the given name and default priority and stack.
  #[must_use]
  pub const fn named(name: &'static str) -> Self {
    Self { name, priority: DEFAULT_PRIORITY, stack_size: DEFAULT_STACK_SIZE }
  }

  /// Sets the scheduling priority.
  #[must_use]
  pub const fn priority(mut self, priority: u8) -> Self {
    self.priority = priority;
    self
  }

  /// Sets the stack budget in bytes.
  #[must_use]
  pub const fn stack_size(mut self, stack_size: usize) -> Self {
    self.stack_size = stack_size;
    self
  }
}

impl Default for TaskConfig {
  fn default() -> Self {
    Self::named("task")
  }
}

/// Opaque identifier for a spawned task.
///
/// The spawner neither tracks nor joins tasks; the handle exists so logs and
/// diagnostics can name a task after the fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
  /// Allocates the next process-unique handle.
  #[must_use]
  pub fn allocate() -> Self {
    Self(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
  }

  /// Raw numeric id of the task.
  #[must_use]
  pub const fn id(&self) -> u64 {
    self.0
  }
}

/// Task factory seam.
///
/// Tasks run until their entry routine returns or loops forever; there is no
/// join or cancel at this layer. Cancellation, where needed, is the entry
/// routine's own loop condition.
pub trait Spawner: Send + Sync + 'static {
  /// Starts `entry` as a new concurrent task.
  ///
  /// # Errors
  ///
  /// Returns [`CreateError::OutOfMemory`] when the target cannot allocate
  /// another task.
  fn spawn<F>(&self, config: TaskConfig, entry: F) -> Result<TaskHandle, CreateError>
  where
    F: FnOnce() + Send + 'static;
}
