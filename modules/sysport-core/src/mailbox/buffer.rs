use alloc::{boxed::Box, vec::Vec};

use crate::error::CreateError;


/// Default mailbox capacity when none is requested.
pub const DEFAULT_CAPACITY: usize = 128;

/// Fixed-capacity FIFO ring used as mailbox storage.
///
/// `head` and `tail` are monotonically increasing logical counters; a slot
/// index is the counter modulo capacity and the occupancy is `tail - head`.
/// The invariant `0 <= tail - head <= capacity` holds at all times. This
/// structure is not synchronized; the mailbox mutates it only under its lock.
#[derive(Debug)]
pub struct MailboxBuffer<M> {
  slots: Box<[Option<M>]>,
  head:  u64,
  tail:  u64,
}

impl<M> MailboxBuffer<M> {
  /// Creates an empty buffer with the given capacity.
  ///
  /// # Errors
  ///
  /// Returns [`CreateError::ZeroCapacity`] when `capacity` is zero.
  pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
    if capacity == 0 {
      return Err(CreateError::ZeroCapacity);
    }
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
      return Err(CreateError::OutOfMemory);
    }
    slots.resize_with(capacity, || None);
    Ok(Self { slots: slots.into_boxed_slice(), head: 0, tail: 0 })
  }

  /// Maximum number of messages the buffer can hold.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Current occupancy.
  #[must_use]
  pub fn len(&self) -> usize {
    (self.tail - self.head) as usize
  }

  /// Returns `true` when no message is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tail == self.head
  }

  /// Returns `true` when occupancy equals capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Appends a message at the tail, or hands it back when full.
  pub fn try_push(&mut self, message: M) -> Result<(), M> {
    if self.is_full() {
      return Err(message);
    }
    let index = (self.tail % self.slots.len() as u64) as usize;
    self.slots[index] = Some(message);
    self.tail += 1;
    Ok(())
  }

  /// Removes and returns the message at the head, if any.
  pub fn try_pop(&mut self) -> Option<M> {
    if self.is_empty() {
      return None;
    }
    let index = (self.head % self.slots.len() as u64) as usize;
    let message = self.slots[index].take();
    self.head += 1;
    message
  }
}
