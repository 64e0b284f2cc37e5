#[cfg(feature = "alloc")]
mod arc_shared;
mod lock;
mod signal;
mod spin_lock;

#[cfg(feature = "alloc")]
pub use arc_shared::ArcShared;
pub use lock::{Lock, LockGuard};
pub use signal::{Signal, WaitFor, WaitOutcome};
pub use spin_lock::SpinLock;
