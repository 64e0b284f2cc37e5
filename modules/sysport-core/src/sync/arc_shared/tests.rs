use super::ArcShared;

#[test]
fn clone_shares_the_same_value() {
  let shared = ArcShared::new(7_u32);
  let other = shared.clone();

  assert_eq!(*shared, 7);
  assert_eq!(*other, 7);
  assert_eq!(shared.handle_count(), 2);
}

#[test]
fn drop_releases_a_handle() {
  let shared = ArcShared::new("frame");
  {
    let _held = shared.clone();
    assert_eq!(shared.handle_count(), 2);
  }
  assert_eq!(shared.handle_count(), 1);
}
