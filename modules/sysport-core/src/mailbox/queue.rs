use core::fmt;

use crate::{
  error::{CreateError, FetchError, PostError},
  mailbox::{
    buffer::{MailboxBuffer, DEFAULT_CAPACITY},
    element::Element,
  },
  platform::Platform,
  sync::{ArcShared, Lock, Signal, WaitFor},
  timing::{timed_wait, TimedWait},
};


/// A message returned by a bounded fetch, with elapsed-wait accounting.
#[derive(Debug, PartialEq, Eq)]
pub struct Fetched<M> {
  /// The dequeued message.
  pub message: M,
  /// How long the caller blocked, in milliseconds.
  ///
  /// Zero when the message was immediately available or the wait was
  /// unbounded; otherwise floored and clamped per
  /// [`elapsed_millis`](crate::timing::elapsed_millis).
  pub elapsed_ms: u32,
}

struct MailboxState<M> {
  buffer:     MailboxBuffer<M>,
  wait_send:  usize,
  wait_fetch: usize,
  closed:     bool,
}

struct MailboxShared<M, P>
where
  M: Element,
  P: Platform, {
  state:     P::Lock<MailboxState<M>>,
  not_empty: P::Signal,
  not_full:  P::Signal,
  clock:     P::Clock,
}

/// Bounded, FIFO, thread-safe mailbox of opaque messages.
///
/// Built from one lock and two counting signals: the lock guards the ring
/// buffer and the waiting-poster count, `not_empty` wakes one fetcher on the
/// empty-to-partial transition, and `not_full` wakes one blocked poster per
/// freed slot. Handles are cheap to clone and share; every task that posts
/// or fetches holds one.
pub struct Mailbox<M, P>
where
  M: Element,
  P: Platform, {
  shared: ArcShared<MailboxShared<M, P>>,
}

impl<M, P> Mailbox<M, P>
where
  M: Element,
  P: Platform,
{
  /// Creates a mailbox with [`DEFAULT_CAPACITY`].
  ///
  /// # Errors
  ///
  /// Propagates [`CreateError`] from the platform's allocators.
  pub fn new() -> Result<Self, CreateError> {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates a mailbox holding at most `capacity` messages.
  ///
  /// # Errors
  ///
  /// Returns [`CreateError::ZeroCapacity`] for a zero capacity and
  /// propagates [`CreateError::OutOfMemory`] from the platform.
  pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
    Self::with_clock(capacity, P::clock())
  }

  /// Creates a mailbox using an explicit tick source.
  ///
  /// Lets tests and unusual targets supply a clock with a tick rate other
  /// than the platform default.
  ///
  /// # Errors
  ///
  /// Same as [`Mailbox::with_capacity`].
  pub fn with_clock(capacity: usize, clock: P::Clock) -> Result<Self, CreateError> {
    let buffer = MailboxBuffer::with_capacity(capacity)?;
    let state = P::create_lock(MailboxState { buffer, wait_send: 0, wait_fetch: 0, closed: false })?;
    let not_empty = P::create_signal(0)?;
    let not_full = P::create_signal(0)?;
    Ok(Self { shared: ArcShared::new(MailboxShared { state, not_empty, not_full, clock }) })
  }

  /// Posts a message, blocking while the mailbox is at capacity.
  ///
  /// Blocked posters are woken one at a time as fetches free slots.
  ///
  /// # Errors
  ///
  /// Returns [`PostError::Closed`] with the message when the mailbox has
  /// been closed; never returns [`PostError::Full`].
  pub fn post(&self, message: M) -> Result<(), PostError<M>> {
    let shared = &*self.shared;
    let mut state = shared.state.lock();
    loop {
      if state.closed {
        return Err(PostError::Closed(message));
      }
      if !state.buffer.is_full() {
        break;
      }
      state.wait_send += 1;
      drop(state);
      shared.not_full.wait(WaitFor::Forever);
      state = shared.state.lock();
      state.wait_send -= 1;
    }
    let was_empty = state.buffer.is_empty();
    if let Err(message) = state.buffer.try_push(message) {
      return Err(PostError::Full(message));
    }
    if was_empty {
      // Only the empty-to-partial transition needs a wakeup; a partial or
      // full queue already has an outstanding not-empty signal or an
      // unblocked fetcher.
      shared.not_empty.signal();
    }
    Ok(())
  }

  /// Posts a message without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`PostError::Full`] when the mailbox is at capacity and
  /// [`PostError::Closed`] after [`Mailbox::close`]; the message is handed
  /// back in both cases. Queue state is untouched on failure.
  pub fn try_post(&self, message: M) -> Result<(), PostError<M>> {
    let shared = &*self.shared;
    let mut state = shared.state.lock();
    if state.closed {
      return Err(PostError::Closed(message));
    }
    if state.buffer.is_full() {
      return Err(PostError::Full(message));
    }
    let was_empty = state.buffer.is_empty();
    if let Err(message) = state.buffer.try_push(message) {
      return Err(PostError::Full(message));
    }
    if was_empty {
      shared.not_empty.signal();
    }
    Ok(())
  }

  /// Fetches the next message, blocking up to the given budget.
  ///
  /// With `WaitFor::Forever` the call blocks until a message arrives or the
  /// mailbox is closed. With a bounded budget, each wakeup's elapsed time is
  /// charged against the remainder, and the reported
  /// [`elapsed_ms`](Fetched::elapsed_ms) is never zero when the caller
  /// actually blocked, never more than the requested budget.
  ///
  /// # Errors
  ///
  /// [`FetchError::TimedOut`] when the budget elapses first;
  /// [`FetchError::Closed`] when the mailbox is closed and drained.
  pub fn fetch(&self, timeout: WaitFor) -> Result<Fetched<M>, FetchError> {
    let shared = &*self.shared;
    let mut state = shared.state.lock();
    let mut remaining = match timeout {
      | WaitFor::Forever => None,
      | WaitFor::Millis(ms) => Some(ms),
    };
    let mut waited_ms = 0_u32;
    while state.buffer.is_empty() {
      if state.closed {
        return Err(FetchError::Closed);
      }
      if remaining == Some(0) {
        return Err(FetchError::TimedOut);
      }
      state.wait_fetch += 1;
      drop(state);
      let outcome = match remaining {
        | None => {
          shared.not_empty.wait(WaitFor::Forever);
          None
        },
        | Some(budget) => Some(timed_wait(&shared.not_empty, &shared.clock, budget)),
      };
      state = shared.state.lock();
      state.wait_fetch -= 1;
      match outcome {
        | Some(TimedWait::TimedOut) => return Err(FetchError::TimedOut),
        | Some(TimedWait::Acquired { elapsed_ms }) => {
          waited_ms = waited_ms.saturating_add(elapsed_ms);
          remaining = remaining.map(|budget| budget.saturating_sub(elapsed_ms));
        },
        | None => {},
      }
    }
    let Some(message) = state.buffer.try_pop() else {
      return Err(FetchError::Empty);
    };
    if state.wait_send > 0 {
      // One slot was freed; wake exactly one waiting poster.
      shared.not_full.signal();
    }
    let elapsed_ms = match timeout {
      | WaitFor::Forever => 0,
      | WaitFor::Millis(ms) => waited_ms.min(ms),
    };
    Ok(Fetched { message, elapsed_ms })
  }

  /// Fetches the next message without blocking.
  ///
  /// # Errors
  ///
  /// [`FetchError::Empty`] when no message is queued; [`FetchError::Closed`]
  /// when the mailbox is closed and drained. Queue state is untouched on
  /// failure.
  pub fn try_fetch(&self) -> Result<M, FetchError> {
    let shared = &*self.shared;
    let mut state = shared.state.lock();
    match state.buffer.try_pop() {
      | Some(message) => {
        if state.wait_send > 0 {
          shared.not_full.signal();
        }
        Ok(message)
      },
      | None => {
        if state.closed {
          Err(FetchError::Closed)
        } else {
          Err(FetchError::Empty)
        }
      },
    }
  }

  /// Closes the mailbox, waking every blocked poster and fetcher.
  ///
  /// Woken waiters return `Closed`. Messages already queued remain
  /// fetchable until drained; fetching from a closed, drained mailbox
  /// returns [`FetchError::Closed`]. Closing twice is a no-op.
  pub fn close(&self) {
    let shared = &*self.shared;
    let mut state = shared.state.lock();
    if state.closed {
      return;
    }
    state.closed = true;
    let posters = state.wait_send;
    let fetchers = state.wait_fetch;
    drop(state);
    for _ in 0..posters {
      shared.not_full.signal();
    }
    for _ in 0..fetchers {
      shared.not_empty.signal();
    }
  }

  /// Returns `true` once [`Mailbox::close`] has run.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.shared.state.lock().closed
  }

  /// Current occupancy.
  #[must_use]
  pub fn len(&self) -> usize {
    self.shared.state.lock().buffer.len()
  }

  /// Maximum occupancy fixed at creation.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.shared.state.lock().buffer.capacity()
  }

  /// Returns `true` when no message is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.shared.state.lock().buffer.is_empty()
  }

  /// Returns `true` when occupancy equals capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.shared.state.lock().buffer.is_full()
  }
}

impl<M, P> Clone for Mailbox<M, P>
where
  M: Element,
  P: Platform,
{
  fn clone(&self) -> Self {
    Self { shared: self.shared.clone() }
  }
}

impl<M, P> fmt::Debug for Mailbox<M, P>
where
  M: Element,
  P: Platform,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.shared.state.lock();
    f.debug_struct("Mailbox")
      .field("len", &state.buffer.len())
      .field("capacity", &state.buffer.capacity())
      .field("closed", &state.closed)
      .finish()
  }
}
