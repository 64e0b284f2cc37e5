//! Mailbox throughput benchmarks.
//!
//! Measures the uncontended post/fetch path and a producer/consumer pair
//! moving frames across threads through a small mailbox.

use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sysport_core_rs::sync::WaitFor;
use sysport_std_rs::StdMailbox;

fn bench_uncontended_post_fetch(c: &mut Criterion) {
  let mut group = c.benchmark_group("uncontended_post_fetch");

  for size in [64, 1024, 16_384].iter() {
    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
      let mbox = StdMailbox::with_capacity(size).unwrap();
      b.iter(|| {
        for value in 0..size {
          mbox.try_post(value).unwrap();
        }
        for _ in 0..size {
          black_box(mbox.try_fetch().unwrap());
        }
      });
    });
  }

  group.finish();
}

fn bench_cross_thread_handoff(c: &mut Criterion) {
  let mut group = c.benchmark_group("cross_thread_handoff");
  group.throughput(Throughput::Elements(10_000));

  group.bench_function("capacity_16", |b| {
    b.iter(|| {
      let mbox = StdMailbox::with_capacity(16).unwrap();
      let producer = {
        let mbox = mbox.clone();
        thread::spawn(move || {
          for value in 0..10_000_u32 {
            mbox.post(value).unwrap();
          }
        })
      };
      for _ in 0..10_000_u32 {
        black_box(mbox.fetch(WaitFor::Forever).unwrap().message);
      }
      producer.join().unwrap();
    });
  });

  group.finish();
}

criterion_group!(benches, bench_uncontended_post_fetch, bench_cross_thread_handoff);
criterion_main!(benches);
