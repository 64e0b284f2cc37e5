use core::fmt;

/// Errors that may arise while creating a bridge primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateError {
  /// The underlying allocator or kernel object pool is exhausted.
  OutOfMemory,
  /// A mailbox was requested with a capacity of zero.
  ZeroCapacity,
}

impl fmt::Display for CreateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | CreateError::OutOfMemory => write!(f, "allocator exhausted"),
      | CreateError::ZeroCapacity => write!(f, "mailbox capacity must be positive"),
    }
  }
}

/// Errors returned by non-blocking posts; the rejected message is handed back.
#[derive(Debug, PartialEq, Eq)]
pub enum PostError<M> {
  /// The mailbox is at capacity.
  Full(M),
  /// The mailbox has been closed and accepts no further messages.
  Closed(M),
}

impl<M> PostError<M> {
  /// Consumes the error and returns the message that was not delivered.
  #[must_use]
  pub fn into_message(self) -> M {
    match self {
      | PostError::Full(message) | PostError::Closed(message) => message,
    }
  }
}

impl<M> fmt::Display for PostError<M> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | PostError::Full(_) => write!(f, "mailbox full"),
      | PostError::Closed(_) => write!(f, "mailbox closed"),
    }
  }
}

/// Errors returned by fetch operations.
///
/// `TimedOut` is deliberately distinct from `Empty`: it tells the caller that
/// its deadline, not just the queue state, was exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchError {
  /// The mailbox holds no message and the caller asked not to wait.
  Empty,
  /// The wait budget elapsed before a message arrived.
  TimedOut,
  /// The mailbox has been closed and fully drained.
  Closed,
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | FetchError::Empty => write!(f, "mailbox empty"),
      | FetchError::TimedOut => write!(f, "wait timed out"),
      | FetchError::Closed => write!(f, "mailbox closed"),
    }
  }
}
