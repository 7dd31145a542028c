// crates/shared-kernel/tests/way_count_sum.rs
use target_sum_shared_kernel::WayCount;

#[test]
fn waycount_sum() {
    let total = [1u64, 2, 3].into_iter().map(WayCount::from).sum::<WayCount>();
    assert_eq!(u64::from(total), 6);
}

#[test]
fn waycount_sum_ref() {
    let values = [WayCount::from(5), WayCount::from(7)];
    let total: WayCount = values.iter().sum();
    assert_eq!(total, 12u64);
}

#[test]
fn waycount_add_saturates() {
    let mut ways = WayCount::from(u64::MAX - 1);
    ways += WayCount::from(5);
    assert_eq!(ways, u64::MAX);
}

#[test]
fn waycount_default_is_zero() {
    assert!(WayCount::default().is_zero());
}
