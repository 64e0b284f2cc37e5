#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone, clippy::panic))]

//! Portable core of the sysport bridge.
//!
//! This crate defines the seams a real-time kernel must provide (an exclusive
//! lock, a counting semaphore, a monotonic tick source, and a task factory)
//! and builds the one non-trivial piece of the bridge on top of them: a
//! bounded, FIFO mailbox with blocking and timed-wait semantics. Everything
//! here is `no_std`; concrete backends live in companion crates such as
//! `sysport-std-rs`.

#[cfg(feature = "alloc")]
extern crate alloc;

/// Error taxonomy shared by all bridge primitives.
pub mod error;
/// Bounded FIFO mailbox built from one lock and two signals.
#[cfg(feature = "alloc")]
pub mod mailbox;
/// Bundle trait tying the kernel seams together for one target.
pub mod platform;
/// Seedable pseudo-random source for protocol-level jitter.
pub mod random;
/// Lock and signal seams plus shared-ownership helpers.
pub mod sync;
/// Task configuration and the spawner seam.
pub mod task;
/// Tick source seam and elapsed-wait accounting.
pub mod timing;

pub use error::{CreateError, FetchError, PostError};
#[cfg(feature = "alloc")]
pub use mailbox::{Element, Fetched, Mailbox, MailboxBuffer, DEFAULT_CAPACITY};
pub use platform::Platform;
pub use random::Lcg;
#[cfg(feature = "alloc")]
pub use sync::ArcShared;
pub use sync::{Lock, LockGuard, Signal, SpinLock, WaitFor, WaitOutcome};
pub use task::{Spawner, TaskConfig, TaskHandle, DEFAULT_PRIORITY, DEFAULT_STACK_SIZE};
pub use timing::{elapsed_millis, timed_wait, Clock, TimedWait};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  #[cfg(feature = "alloc")]
  pub use crate::{
    mailbox::{Element, Fetched, Mailbox, MailboxBuffer, DEFAULT_CAPACITY},
    sync::ArcShared,
  };
  pub use crate::{
    error::{CreateError, FetchError, PostError},
    platform::Platform,
    random::Lcg,
    sync::{Lock, LockGuard, Signal, SpinLock, WaitFor, WaitOutcome},
    task::{Spawner, TaskConfig, TaskHandle, DEFAULT_PRIORITY, DEFAULT_STACK_SIZE},
    timing::{elapsed_millis, timed_wait, Clock, TimedWait},
  };
}
