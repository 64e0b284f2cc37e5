mod std_clock;

pub use std_clock::{StdClock, DEFAULT_TICK_RATE};
