use super::Lcg;

#[test]
fn same_seed_gives_same_sequence() {
  let mut a = Lcg::new(0xDEAD_BEEF);
  let mut b = Lcg::new(0xDEAD_BEEF);

  for _ in 0..64 {
    assert_eq!(a.next_u32(), b.next_u32());
  }
}

#[test]
fn reseed_restarts_the_sequence() {
  let mut gen = Lcg::new(7);
  let first = gen.next_u32();
  gen.next_u32();
  gen.reseed(7);

  assert_eq!(gen.next_u32(), first);
}

#[test]
fn different_seeds_diverge() {
  let mut a = Lcg::new(1);
  let mut b = Lcg::new(2);

  assert_ne!(a.next_u32(), b.next_u32());
}

#[test]
fn bounded_values_stay_in_range() {
  let mut gen = Lcg::new(99);
  for _ in 0..1000 {
    assert!(gen.next_bounded(16) < 16);
  }
  assert_eq!(gen.next_bounded(0), 0);
}
