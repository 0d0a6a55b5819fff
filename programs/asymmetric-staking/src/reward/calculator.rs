//! Time-weighted reward calculations

use crate::{utils::U256, PRECISION};

/// Scale of the reward factor. The factor is reward-token units per unit of
/// weight, multiplied by this value.
pub const REWARD_FACTOR_PRECISION: u128 = PRECISION * PRECISION;

/// Stateless helpers turning stakes into weights and weights into payouts.
///
/// Every division floors. With
/// `factor = floor(pool * P / total_weight)` and
/// `reward_i = floor(weight_i * factor / P)` the sum of all rewards can never
/// exceed `pool`, and at most one unit per staker is left behind as dust
/// (plus `total_weight / P` from flooring the factor).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewardCalculator {}

impl RewardCalculator {
    /// Seconds a deposit counts for inside `[window_start, window_end)`.
    ///
    /// Deposits older than the window start count from the start; deposits at
    /// or after the end count for nothing.
    pub fn stake_duration(deposit_time: i64, window_start: i64, window_end: i64) -> u64 {
        let counted_from = deposit_time.max(window_start);
        if counted_from >= window_end {
            return 0;
        }
        window_end.abs_diff(counted_from)
    }

    /// `amount * duration`.
    pub fn stake_weight(amount: u64, duration: u64) -> Option<u128> {
        u128::from(amount).checked_mul(u128::from(duration))
    }

    /// Weight of `amount` deposited at `deposit_time` within the window.
    pub fn weight_at(
        amount: u64,
        deposit_time: i64,
        window_start: i64,
        window_end: i64,
    ) -> Option<u128> {
        Self::stake_weight(
            amount,
            Self::stake_duration(deposit_time, window_start, window_end),
        )
    }

    /// `floor(reward_pool * REWARD_FACTOR_PRECISION / total_weight)`, or zero
    /// when nobody carries weight.
    pub fn reward_factor(reward_pool: u64, total_weight: u128) -> Option<u128> {
        if total_weight == 0 {
            return Some(0);
        }
        let numerator =
            U256::from(reward_pool).checked_mul(U256::from(REWARD_FACTOR_PRECISION))?;
        numerator
            .checked_div(U256::from(total_weight))?
            .checked_as_u128()
    }

    /// `floor(weight * reward_factor / REWARD_FACTOR_PRECISION)`.
    pub fn reward_amount(weight: u128, reward_factor: u128) -> Option<u64> {
        U256::from(weight)
            .checked_mul(U256::from(reward_factor))?
            .checked_div(U256::from(REWARD_FACTOR_PRECISION))?
            .checked_as_u64()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::{QuickCheck, TestResult};

    const DAY: i64 = 24 * 60 * 60;

    #[test]
    fn duration_is_measured_to_window_end() {
        assert_eq!(RewardCalculator::stake_duration(0, 0, 45 * DAY), (45 * DAY) as u64);
        assert_eq!(
            RewardCalculator::stake_duration(45 * DAY, 0, 66 * DAY),
            (21 * DAY) as u64
        );
    }

    #[test]
    fn duration_clamps_outside_the_window() {
        // before the start counts from the start
        assert_eq!(RewardCalculator::stake_duration(-DAY, 0, DAY), DAY as u64);
        assert_eq!(RewardCalculator::stake_duration(DAY, 0, DAY), 0);
        assert_eq!(RewardCalculator::stake_duration(2 * DAY, 0, DAY), 0);
    }

    #[test]
    fn zero_weight_yields_zero_factor() {
        assert_eq!(RewardCalculator::reward_factor(100_000, 0), Some(0));
        assert_eq!(RewardCalculator::reward_factor(0, 0), Some(0));
    }

    #[test]
    fn single_staker_receives_the_pool_up_to_rounding() {
        let weight = RewardCalculator::weight_at(300, 0, 0, 45 * DAY).unwrap();
        let factor = RewardCalculator::reward_factor(100_000, weight).unwrap();
        assert_eq!(
            factor,
            100_000u128 * REWARD_FACTOR_PRECISION / (300 * 45 * DAY as u128)
        );
        let reward = RewardCalculator::reward_amount(weight, factor).unwrap();
        assert!(reward <= 100_000);
        assert!(reward >= 99_999);
    }

    #[test]
    fn earlier_deposit_earns_more_for_equal_principal() {
        let early = RewardCalculator::weight_at(300, 0, 0, 66 * DAY).unwrap();
        let late = RewardCalculator::weight_at(300, 45 * DAY, 0, 66 * DAY).unwrap();
        let factor = RewardCalculator::reward_factor(100_000, early + late).unwrap();
        let early_reward = RewardCalculator::reward_amount(early, factor).unwrap();
        let late_reward = RewardCalculator::reward_amount(late, factor).unwrap();
        assert!(early_reward > late_reward);
        // 66 : 21
        assert_eq!(early_reward, 75_862);
        assert_eq!(late_reward, 24_137);
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        let weight = RewardCalculator::stake_weight(u64::MAX, u64::MAX).unwrap();
        let factor = RewardCalculator::reward_factor(u64::MAX, 1).unwrap();
        assert_eq!(factor, u64::MAX as u128 * REWARD_FACTOR_PRECISION);
        assert_eq!(RewardCalculator::reward_amount(weight, factor), None);
    }

    #[test]
    fn reward_of_full_weight_never_exceeds_pool() {
        fn prop(pool: u64, amount: u32, duration: u32) -> TestResult {
            if amount == 0 || duration == 0 {
                return TestResult::discard();
            }
            let weight = RewardCalculator::stake_weight(amount.into(), duration.into()).unwrap();
            let factor = RewardCalculator::reward_factor(pool, weight).unwrap();
            let reward = RewardCalculator::reward_amount(weight, factor).unwrap();
            TestResult::from_bool(reward <= pool)
        }
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop as fn(u64, u32, u32) -> TestResult);
    }

    proptest! {
        #[test]
        fn sum_of_rewards_is_bounded_by_pool(
            pool in 0u64..1_000_000_000_000,
            stakes in prop::collection::vec((1u64..1_000_000_000, 0i64..120 * DAY), 1..40)
        ) {
            let end = 120 * DAY;
            let weights: Vec<u128> = stakes
                .iter()
                .map(|(amount, deposit)| RewardCalculator::weight_at(*amount, *deposit, 0, end).unwrap())
                .collect();
            let total: u128 = weights.iter().sum();
            let factor = RewardCalculator::reward_factor(pool, total).unwrap();

            let paid: u64 = weights
                .iter()
                .map(|w| RewardCalculator::reward_amount(*w, factor).unwrap())
                .sum();
            prop_assert!(paid <= pool);

            let dust_bound = weights.len() as u64 + (total / REWARD_FACTOR_PRECISION) as u64 + 1;
            prop_assert!(pool - paid <= dust_bound);
        }

        #[test]
        fn weight_is_monotonic_in_deposit_time(
            amount in 1u64..u32::MAX as u64,
            earlier in 0i64..60 * DAY,
            gap in 0i64..60 * DAY,
        ) {
            let end = 120 * DAY;
            let a = RewardCalculator::weight_at(amount, earlier, 0, end).unwrap();
            let b = RewardCalculator::weight_at(amount, earlier + gap, 0, end).unwrap();
            prop_assert!(a >= b);
        }
    }
}
