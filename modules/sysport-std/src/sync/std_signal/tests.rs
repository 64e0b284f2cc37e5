use std::{sync::Arc, thread, time::Duration};

use sysport_core_rs::sync::{Signal, WaitFor, WaitOutcome};

use super::StdSignal;

#[test]
fn initial_count_is_consumable_without_blocking() {
  let signal = StdSignal::new(2);

  assert_eq!(signal.wait(WaitFor::Millis(10)), WaitOutcome::Acquired);
  assert_eq!(signal.wait(WaitFor::Millis(10)), WaitOutcome::Acquired);
  assert_eq!(signal.wait(WaitFor::Millis(10)), WaitOutcome::TimedOut);
}

#[test]
fn wait_times_out_when_never_signaled() {
  let signal = StdSignal::new(0);
  let started = std::time::Instant::now();

  assert_eq!(signal.wait(WaitFor::Millis(50)), WaitOutcome::TimedOut);
  assert!(started.elapsed() >= Duration::from_millis(45));
}

#[test]
fn signal_wakes_a_blocked_waiter() {
  let signal = Arc::new(StdSignal::new(0));
  let waiter = {
    let signal = Arc::clone(&signal);
    thread::spawn(move || signal.wait(WaitFor::Millis(2000)))
  };

  thread::sleep(Duration::from_millis(50));
  signal.signal();

  assert_eq!(waiter.join().unwrap(), WaitOutcome::Acquired);
}

#[test]
fn signal_before_wait_is_not_lost() {
  let signal = StdSignal::new(0);
  signal.signal();
  signal.signal();

  assert_eq!(signal.count(), 2);
  assert_eq!(signal.wait(WaitFor::Forever), WaitOutcome::Acquired);
  assert_eq!(signal.count(), 1);
}

#[test]
fn each_signal_releases_exactly_one_waiter() {
  let signal = Arc::new(StdSignal::new(0));
  let waiters: Vec<_> = (0..3)
    .map(|_| {
      let signal = Arc::clone(&signal);
      thread::spawn(move || signal.wait(WaitFor::Millis(500)))
    })
    .collect();

  thread::sleep(Duration::from_millis(50));
  signal.signal();
  signal.signal();

  let acquired = waiters
    .into_iter()
    .map(|handle| handle.join().unwrap())
    .filter(WaitOutcome::is_acquired)
    .count();
  assert_eq!(acquired, 2);
}
