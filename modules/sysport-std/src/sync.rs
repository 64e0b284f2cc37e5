mod std_lock;
mod std_signal;

pub use std_lock::StdLock;
pub use std_signal::StdSignal;
