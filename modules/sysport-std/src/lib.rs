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

//! Host-OS backends for the sysport bridge.
//!
//! Binds the seams defined in `sysport-core-rs` to `std`: kernel locks
//! become [`std::sync::Mutex`], the counting signal becomes a mutex/condvar
//! pair, the tick source is anchored to [`std::time::Instant`], and tasks
//! are OS threads. The same mailbox algorithm that runs on a real-time
//! kernel runs here unchanged, which is what makes the whole bridge
//! testable on a workstation.

/// The std platform bundle and mailbox alias.
pub mod platform;
/// Frame-pump harness reproducing the driver-side usage pattern.
pub mod pump;
/// Lock and signal backends over `std::sync`.
pub mod sync;
/// OS-thread task spawner.
pub mod task;
/// Instant-anchored tick source.
pub mod timing;

pub use platform::{StdMailbox, StdPlatform};
pub use pump::FramePump;
pub use sync::{StdLock, StdSignal};
pub use task::StdSpawner;
pub use timing::StdClock;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use sysport_core_rs::prelude::*;

  pub use crate::{
    platform::{StdMailbox, StdPlatform},
    pump::FramePump,
    sync::{StdLock, StdSignal},
    task::StdSpawner,
    timing::StdClock,
  };
}
