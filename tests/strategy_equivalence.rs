use path_mwis::{
    best_total, best_with_selection, default_block_len, solve_blocked, try_best_total,
    PrefixTable,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_strategy_agrees(
        values in proptest::collection::vec(-1_000i64..=1_000, 0..300),
        block_len in 1usize..32
    ) {
        let rolling = best_total(&values);
        prop_assert_eq!(PrefixTable::build(&values).final_best(), rolling);
        prop_assert_eq!(solve_blocked(&values, block_len), rolling);
        prop_assert_eq!(
            solve_blocked(&values, default_block_len(values.len())),
            rolling
        );
        // Bounded values cannot overflow, so the checked path agrees too.
        prop_assert_eq!(try_best_total(&values), Ok(rolling));
    }

    #[test]
    fn selection_is_valid_and_optimal(
        values in proptest::collection::vec(-1_000i64..=1_000, 0..120)
    ) {
        let pick = best_with_selection(&values);
        prop_assert_eq!(pick.total, best_total(&values));
        prop_assert!(pick.chosen.windows(2).all(|w| w[1] > w[0] + 1));
        prop_assert!(pick.chosen.iter().all(|&i| i < values.len()));
        let sum: i64 = pick.chosen.iter().map(|&i| values[i]).sum();
        prop_assert_eq!(sum, pick.total);
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use path_mwis::solve_parallel;

    proptest! {
        #[test]
        fn parallel_reduction_is_bit_identical(
            values in proptest::collection::vec(-1_000i64..=1_000, 0..2_000),
            block_len in 1usize..128
        ) {
            prop_assert_eq!(solve_parallel(&values, block_len), best_total(&values));
        }
    }
}
