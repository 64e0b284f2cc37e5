use sysport_core_rs::{
  error::CreateError,
  mailbox::Element,
  sync::WaitFor,
  task::{Spawner, TaskConfig, TaskHandle},
};
use tracing::trace;

use crate::{platform::StdMailbox, task::StdSpawner};


/// Producer/consumer harness reproducing how device drivers use the bridge.
///
/// A driver's receive loop posts raw frames into a mailbox; a processing
/// task fetches them one at a time. This harness wires an arbitrary frame
/// source and handler into that exact shape, spawning both sides through
/// the task factory. Closing the pump wakes both tasks and lets them run
/// off the end of their loops, which is the only cancellation this layer
/// knows.
pub struct FramePump<M: Element> {
  mailbox: StdMailbox<M>,
  spawner: StdSpawner,
}

impl<M: Element> FramePump<M> {
  /// Creates a pump whose mailbox holds at most `capacity` frames.
  ///
  /// # Errors
  ///
  /// Propagates [`CreateError`] from mailbox creation.
  pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
    Ok(Self { mailbox: StdMailbox::with_capacity(capacity)?, spawner: StdSpawner::new() })
  }

  /// The mailbox the pump moves frames through.
  #[must_use]
  pub fn mailbox(&self) -> &StdMailbox<M> {
    &self.mailbox
  }

  /// Spawns a task feeding every frame from `source` into the mailbox.
  ///
  /// The task blocks on a full mailbox (backpressure) and stops early when
  /// the mailbox is closed.
  ///
  /// # Errors
  ///
  /// Propagates [`CreateError`] from the task factory.
  pub fn start_producer<I>(&self, name: &'static str, source: I) -> Result<TaskHandle, CreateError>
  where
    I: IntoIterator<Item = M> + Send + 'static,
    I::IntoIter: Send, {
    let mailbox = self.mailbox.clone();
    self.spawner.spawn(TaskConfig::named(name), move || {
      for frame in source {
        if mailbox.post(frame).is_err() {
          break;
        }
        trace!(task = name, "frame posted");
      }
    })
  }

  /// Spawns a task fetching frames and handing each to `handler`.
  ///
  /// The task runs until the mailbox is closed and drained.
  ///
  /// # Errors
  ///
  /// Propagates [`CreateError`] from the task factory.
  pub fn start_consumer<F>(&self, name: &'static str, mut handler: F) -> Result<TaskHandle, CreateError>
  where
    F: FnMut(M) + Send + 'static, {
    let mailbox = self.mailbox.clone();
    self.spawner.spawn(TaskConfig::named(name), move || loop {
      match mailbox.fetch(WaitFor::Forever) {
        | Ok(fetched) => {
          trace!(task = name, "frame fetched");
          handler(fetched.message);
        },
        | Err(_) => break,
      }
    })
  }

  /// Closes the mailbox, waking both sides so their loops can end.
  pub fn shutdown(&self) {
    self.mailbox.close();
  }
}
