use std::{
  sync::mpsc,
  thread,
  time::{Duration, Instant},
};

use sysport_core_rs::{
  error::{FetchError, PostError},
  sync::WaitFor,
};

use super::StdMailbox;
use crate::timing::StdClock;

#[test]
fn capacity_two_scenario() {
  let mbox = StdMailbox::with_capacity(2).unwrap();

  mbox.post("a").unwrap();
  mbox.post("b").unwrap();
  assert!(matches!(mbox.try_post("c"), Err(PostError::Full("c"))));

  assert_eq!(mbox.fetch(WaitFor::Forever).unwrap().message, "a");
  mbox.try_post("c").unwrap();

  assert_eq!(mbox.fetch(WaitFor::Forever).unwrap().message, "b");
  assert_eq!(mbox.fetch(WaitFor::Forever).unwrap().message, "c");
}

#[test]
fn bounded_fetch_sees_a_late_post_and_reports_elapsed() {
  let mbox = StdMailbox::with_capacity(1).unwrap();
  let fetcher = {
    let mbox = mbox.clone();
    thread::spawn(move || mbox.fetch(WaitFor::Millis(1000)))
  };

  thread::sleep(Duration::from_millis(300));
  mbox.post("x").unwrap();

  let fetched = fetcher.join().unwrap().unwrap();
  assert_eq!(fetched.message, "x");
  assert!(fetched.elapsed_ms > 0);
  assert!(fetched.elapsed_ms <= 1000);
  assert!((200..=700).contains(&fetched.elapsed_ms), "elapsed was {}", fetched.elapsed_ms);
}

#[test]
fn bounded_fetch_times_out_on_an_empty_mailbox() {
  let mbox = StdMailbox::<u32>::with_capacity(1).unwrap();
  let started = Instant::now();

  assert_eq!(mbox.fetch(WaitFor::Millis(50)).unwrap_err(), FetchError::TimedOut);
  assert!(started.elapsed() >= Duration::from_millis(40));
  assert!(mbox.is_empty());
}

#[test]
fn post_blocks_on_full_until_a_fetch_frees_a_slot() {
  let mbox = StdMailbox::with_capacity(1).unwrap();
  mbox.post(1).unwrap();

  let poster = {
    let mbox = mbox.clone();
    thread::spawn(move || {
      let started = Instant::now();
      mbox.post(2).unwrap();
      started.elapsed()
    })
  };

  thread::sleep(Duration::from_millis(100));
  assert_eq!(mbox.fetch(WaitFor::Forever).unwrap().message, 1);

  let blocked_for = poster.join().unwrap();
  assert!(blocked_for >= Duration::from_millis(50));
  assert_eq!(mbox.fetch(WaitFor::Forever).unwrap().message, 2);
}

#[test]
fn unbounded_fetch_blocks_until_a_post_arrives() {
  let mbox = StdMailbox::with_capacity(4).unwrap();
  let fetcher = {
    let mbox = mbox.clone();
    thread::spawn(move || mbox.fetch(WaitFor::Forever))
  };

  thread::sleep(Duration::from_millis(50));
  mbox.post(7_u64).unwrap();

  let fetched = fetcher.join().unwrap().unwrap();
  assert_eq!(fetched.message, 7);
  assert_eq!(fetched.elapsed_ms, 0);
}

#[test]
fn sub_tick_wait_reports_a_nonzero_floor() {
  // 100 Hz clock: a wait shorter than one 10 ms tick computes to zero and
  // must be floored to 500/hz = 5 ms.
  let mbox = StdMailbox::with_clock(1, StdClock::with_tick_rate(100)).unwrap();
  let (ready_tx, ready_rx) = mpsc::channel();
  let fetcher = {
    let mbox = mbox.clone();
    thread::spawn(move || {
      ready_tx.send(()).unwrap();
      mbox.fetch(WaitFor::Millis(1000))
    })
  };

  ready_rx.recv().unwrap();
  thread::sleep(Duration::from_millis(5));
  mbox.post("fast").unwrap();

  let fetched = fetcher.join().unwrap().unwrap();
  assert!(fetched.elapsed_ms >= 1);
  assert!(fetched.elapsed_ms <= 1000);
}

#[test]
fn concurrent_producers_lose_and_reorder_nothing() {
  const PER_PRODUCER: u32 = 1000;
  let mbox = StdMailbox::with_capacity(16).unwrap();

  let producers: Vec<_> = (0..2_u32)
    .map(|producer| {
      let mbox = mbox.clone();
      thread::spawn(move || {
        for seq in 0..PER_PRODUCER {
          mbox.post((producer, seq)).unwrap();
        }
      })
    })
    .collect();

  let consumer = {
    let mbox = mbox.clone();
    thread::spawn(move || {
      let mut received = Vec::with_capacity(2 * PER_PRODUCER as usize);
      for _ in 0..2 * PER_PRODUCER {
        received.push(mbox.fetch(WaitFor::Forever).unwrap().message);
      }
      received
    })
  };

  for producer in producers {
    producer.join().unwrap();
  }
  let received = consumer.join().unwrap();

  assert_eq!(received.len(), 2 * PER_PRODUCER as usize);
  let mut next_seq = [0_u32; 2];
  for (producer, seq) in received {
    assert_eq!(seq, next_seq[producer as usize], "producer {producer} out of order");
    next_seq[producer as usize] += 1;
  }
  assert_eq!(next_seq, [PER_PRODUCER, PER_PRODUCER]);
}

#[test]
fn close_wakes_a_blocked_fetcher() {
  let mbox = StdMailbox::<u8>::with_capacity(1).unwrap();
  let fetcher = {
    let mbox = mbox.clone();
    thread::spawn(move || mbox.fetch(WaitFor::Forever))
  };

  thread::sleep(Duration::from_millis(50));
  mbox.close();

  assert_eq!(fetcher.join().unwrap().unwrap_err(), FetchError::Closed);
}

#[test]
fn close_wakes_a_blocked_poster() {
  let mbox = StdMailbox::with_capacity(1).unwrap();
  mbox.post(1).unwrap();

  let poster = {
    let mbox = mbox.clone();
    thread::spawn(move || mbox.post(2))
  };

  thread::sleep(Duration::from_millis(50));
  mbox.close();

  assert!(matches!(poster.join().unwrap(), Err(PostError::Closed(2))));
}
