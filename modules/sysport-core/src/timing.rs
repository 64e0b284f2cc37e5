mod clock;
mod elapsed;
mod timed_wait;

pub use clock::Clock;
pub use elapsed::elapsed_millis;
pub use timed_wait::{timed_wait, TimedWait};
