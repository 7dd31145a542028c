use proptest::prelude::*;
use target_sum_engine::config::ConfigBuilder;
use target_sum_engine::solve;
use target_sum_shared_kernel::Problem;

proptest! {
    #[test]
    fn verification_always_agrees(
        numbers in prop::collection::vec(-9i64..=9, 0..10),
        target in -45i64..=45,
    ) {
        let config = ConfigBuilder::default().verify(true).build().unwrap();
        let outcome = solve(&config, &Problem::new(numbers.clone(), target)).unwrap();
        prop_assert_eq!(outcome.verified_by.len(), 3);
        prop_assert_eq!(outcome.ways.value(), target_sum_core::count_ways(&numbers, target));
    }
}
