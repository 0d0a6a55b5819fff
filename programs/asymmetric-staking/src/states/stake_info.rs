use crate::error::ErrorCode;
use crate::reward::RewardCalculator;
use crate::states::{
    RewardFactorComputed, RewardPoolFunded, RewardsClaimed, Staked, StakingWindow, Unstaked,
    UserStakeInfo, WithdrawAllMonion,
};
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakeInfo Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global staking info account.
pub const STAKE_INFO_SEED: &str = "stake_info";

/// One-shot state of the reward factor.
///
/// `Computed { factor: 0 }` (nobody carried weight, or the pool was empty) is
/// distinct from `Pending`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RewardFactor {
    #[default]
    Pending,
    Computed {
        factor: u128,
    },
}

impl RewardFactor {
    pub fn is_pending(&self) -> bool {
        matches!(self, RewardFactor::Pending)
    }

    /// The factor, or `0` while pending.
    pub fn value(&self) -> u128 {
        match self {
            RewardFactor::Pending => 0,
            RewardFactor::Computed { factor } => *factor,
        }
    }
}

/// Stores aggregate ledger state for the whole staking program.
///
/// This account tracks:
/// - The staked principal across all stakers.
/// - The running total weight (`Σ amount * duration`) while the reward factor
///   is pending.
/// - The funded reward pool and how much of it has been paid.
/// - The one-shot reward factor.
///
/// Every `record_*` method validates the whole transition before touching any
/// field, so a returned error leaves both this account and the staker record
/// unchanged.
#[account]
#[derive(Default, Debug)]
pub struct StakeInfo {
    /// PDA bump for this account.
    pub bump: u8,

    /// Sum of `staked_amount` over every staker record.
    pub total_staked_balance: u64,

    /// Sum of the weights of every weighted stake. Frozen once the reward
    /// factor is computed.
    pub total_weight: u128,

    /// Reward tokens funded into the reward vault.
    pub reward_pool_balance: u64,

    /// Reward-token units per unit of weight, scaled by
    /// `REWARD_FACTOR_PRECISION`.
    pub reward_factor: RewardFactor,

    /// Reward tokens paid out so far. Never exceeds `reward_pool_balance`.
    pub total_rewards_paid: u64,

    /// Number of distinct addresses that have ever staked.
    pub staker_count: u64,

    /// Number of stakers that have claimed their reward.
    pub claimed_count: u64,
}

impl StakeInfo {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 8 * 5: five `u64` fields
    /// - 16: total weight
    /// - 1 + 16: reward factor variant and value
    pub const LEN: usize = 8 + 1 + 8 * 5 + 16 + (1 + 16);

    /// Deposit `amount` for `user` at `now`.
    ///
    /// The first positive deposit fixes `deposit_time`; later deposits are
    /// weighted from that same timestamp.
    pub fn record_stake(
        &mut self,
        user: &mut UserStakeInfo,
        window: &StakingWindow,
        amount: u64,
        now: i64,
    ) -> Result<Staked> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require!(window.is_open(now), ErrorCode::StakingPeriodClosed);
        require!(self.reward_factor.is_pending(), ErrorCode::AlreadyComputed);

        let first_deposit = user.deposit_time.is_none();
        let deposit_time = user.deposit_time.unwrap_or(now);
        let weight = RewardCalculator::weight_at(amount, deposit_time, window.start, window.end)
            .ok_or(ErrorCode::MathOverflow)?;

        let staked_amount = user
            .staked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let weighted_amount = user
            .weighted_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_staked_balance = self
            .total_staked_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(ErrorCode::MathOverflow)?;
        let staker_count = if first_deposit {
            self.staker_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?
        } else {
            self.staker_count
        };

        user.deposit_time = Some(deposit_time);
        user.staked_amount = staked_amount;
        user.weighted_amount = weighted_amount;
        self.total_staked_balance = total_staked_balance;
        self.total_weight = total_weight;
        self.staker_count = staker_count;

        Ok(Staked {
            staker: user.owner,
            amount,
            deposit_time,
            staked_balance: staked_amount,
            total_staked_balance,
        })
    }

    /// Return `amount` of principal to `user`. Allowed at any time; the
    /// deposit timestamp is left untouched.
    pub fn record_unstake(
        &mut self,
        user: &mut UserStakeInfo,
        window: &StakingWindow,
        amount: u64,
    ) -> Result<Unstaked> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require!(
            amount <= user.staked_amount,
            ErrorCode::InsufficientStakedBalance
        );
        self.release_principal(user, window, amount)?;

        Ok(Unstaked {
            staker: user.owner,
            amount,
            staked_balance: user.staked_amount,
            total_staked_balance: self.total_staked_balance,
        })
    }

    /// Return the whole remaining principal of `user`.
    pub fn record_withdrawal(
        &mut self,
        user: &mut UserStakeInfo,
        window: &StakingWindow,
    ) -> Result<WithdrawAllMonion> {
        let amount = user.staked_amount;
        require_gt!(amount, 0, ErrorCode::NothingToWithdraw);
        self.release_principal(user, window, amount)?;

        Ok(WithdrawAllMonion {
            staker: user.owner,
            amount,
            total_staked_balance: self.total_staked_balance,
        })
    }

    /// Add `amount` reward tokens to the pool. The pool is fixed once the
    /// staking window closes.
    pub fn record_funding(
        &mut self,
        funder: Pubkey,
        window: &StakingWindow,
        amount: u64,
        now: i64,
    ) -> Result<RewardPoolFunded> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require!(window.is_open(now), ErrorCode::StakingPeriodClosed);

        let reward_pool_balance = self
            .reward_pool_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.reward_pool_balance = reward_pool_balance;

        Ok(RewardPoolFunded {
            funder,
            amount,
            reward_pool_balance,
        })
    }

    /// Fix the reward factor from the current pool and total weight.
    /// Succeeds once, and only after the window has closed.
    pub fn compute_reward_factor(
        &mut self,
        window: &StakingWindow,
        now: i64,
    ) -> Result<RewardFactorComputed> {
        require!(self.reward_factor.is_pending(), ErrorCode::AlreadyComputed);
        require!(window.is_closed(now), ErrorCode::StakingPeriodStillOpen);

        let factor = RewardCalculator::reward_factor(self.reward_pool_balance, self.total_weight)
            .ok_or(ErrorCode::MathOverflow)?;
        self.reward_factor = RewardFactor::Computed { factor };

        Ok(RewardFactorComputed {
            reward_factor: factor,
            total_weight: self.total_weight,
            reward_pool_balance: self.reward_pool_balance,
            total_staked_balance: self.total_staked_balance,
        })
    }

    /// Work out and book the reward owed to `user`.
    ///
    /// The claim flag and paid totals are written here, before the caller moves
    /// any tokens, so a repeated or re-entered claim is rejected.
    pub fn record_claim(
        &mut self,
        user: &mut UserStakeInfo,
        window: &StakingWindow,
    ) -> Result<RewardsClaimed> {
        let factor = match self.reward_factor {
            RewardFactor::Pending => return err!(ErrorCode::RewardsNotComputed),
            RewardFactor::Computed { factor } => factor,
        };
        require!(!user.reward_claimed, ErrorCode::AlreadyClaimed);
        let deposit_time = user.deposit_time.ok_or(ErrorCode::NoRewardsToClaim)?;

        let reward = Self::reward_for(user.weighted_amount, deposit_time, window, factor)?;
        require_gt!(reward, 0, ErrorCode::NoRewardsToClaim);

        let total_rewards_paid = self
            .total_rewards_paid
            .checked_add(reward)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            total_rewards_paid <= self.reward_pool_balance,
            ErrorCode::RewardPoolExceeded
        );
        let claimed_count = self
            .claimed_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        user.reward_claimed = true;
        user.rewards_claimed = reward;
        self.total_rewards_paid = total_rewards_paid;
        self.claimed_count = claimed_count;

        Ok(RewardsClaimed {
            staker: user.owner,
            amount: reward,
            total_rewards_paid,
        })
    }

    /// Reward `user` would receive under the computed factor, `0` while
    /// pending or after claiming.
    pub fn pending_reward(&self, user: &UserStakeInfo, window: &StakingWindow) -> Result<u64> {
        match (self.reward_factor, user.deposit_time) {
            (RewardFactor::Computed { factor }, Some(deposit_time)) if !user.reward_claimed => {
                Self::reward_for(user.weighted_amount, deposit_time, window, factor)
            }
            _ => Ok(0),
        }
    }

    fn reward_for(
        weighted_amount: u64,
        deposit_time: i64,
        window: &StakingWindow,
        factor: u128,
    ) -> Result<u64> {
        let weight =
            RewardCalculator::weight_at(weighted_amount, deposit_time, window.start, window.end)
                .ok_or(ErrorCode::MathOverflow)?;
        RewardCalculator::reward_amount(weight, factor)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    /// Shared bookkeeping of unstake and withdrawal. While the factor is
    /// pending the released principal also gives up its weight; afterwards
    /// the weight snapshot stays as computed.
    fn release_principal(
        &mut self,
        user: &mut UserStakeInfo,
        window: &StakingWindow,
        amount: u64,
    ) -> Result<()> {
        let staked_amount = user
            .staked_amount
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientStakedBalance)?;
        let total_staked_balance = self
            .total_staked_balance
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        let (weighted_amount, total_weight) = if self.reward_factor.is_pending() {
            let deposit_time = user.deposit_time.ok_or(ErrorCode::InsufficientStakedBalance)?;
            let weight =
                RewardCalculator::weight_at(amount, deposit_time, window.start, window.end)
                    .ok_or(ErrorCode::MathOverflow)?;
            (
                user.weighted_amount
                    .checked_sub(amount)
                    .ok_or(ErrorCode::MathOverflow)?,
                self.total_weight
                    .checked_sub(weight)
                    .ok_or(ErrorCode::MathOverflow)?,
            )
        } else {
            (user.weighted_amount, self.total_weight)
        };

        user.staked_amount = staked_amount;
        user.weighted_amount = weighted_amount;
        self.total_staked_balance = total_staked_balance;
        self.total_weight = total_weight;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reward::REWARD_FACTOR_PRECISION;
    use crate::states::StakerPhase;
    use anchor_lang::error::Error;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const DAY: i64 = 24 * 60 * 60;
    const POOL: u64 = 100_000;

    fn window(days: i64) -> StakingWindow {
        StakingWindow {
            start: 0,
            end: days * DAY,
        }
    }

    fn staker() -> UserStakeInfo {
        UserStakeInfo {
            owner: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    fn funded(window: &StakingWindow) -> StakeInfo {
        let mut info = StakeInfo::default();
        info.record_funding(Pubkey::new_unique(), window, POOL, 0)
            .unwrap();
        info
    }

    fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
        let expected: Error = expected.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn first_stake_sets_deposit_time_once() {
        let window = window(120);
        let mut info = StakeInfo::default();
        let mut alice = staker();
        assert_eq!(alice.phase(), StakerPhase::Unstaked);
        assert_eq!(alice.deposit_timestamp(), 0);

        let event = info.record_stake(&mut alice, &window, 300, 5 * DAY).unwrap();
        assert_eq!(event.deposit_time, 5 * DAY);
        assert_eq!(event.staked_balance, 300);
        assert_eq!(alice.deposit_time, Some(5 * DAY));
        assert_eq!(alice.phase(), StakerPhase::Staked);

        let event = info.record_stake(&mut alice, &window, 50, 30 * DAY).unwrap();
        assert_eq!(event.deposit_time, 5 * DAY);
        assert_eq!(alice.deposit_time, Some(5 * DAY));
        assert_eq!(alice.staked_amount, 350);
        assert_eq!(info.total_staked_balance, 350);
        assert_eq!(info.staker_count, 1);
        assert_eq!(info.total_weight, 350 * 115 * DAY as u128);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let window = window(10);
        let mut info = StakeInfo::default();
        let mut alice = staker();
        assert_error(
            info.record_stake(&mut alice, &window, 0, 0),
            ErrorCode::ZeroAmount,
        );
        assert_error(
            info.record_unstake(&mut alice, &window, 0),
            ErrorCode::ZeroAmount,
        );
        assert_eq!(alice.deposit_time, None);
    }

    #[test]
    fn unstake_keeps_deposit_time_and_weights_the_remainder() {
        // a staker with 300 unstakes 100: balance 200, deposit time unchanged,
        // and the claim still uses the original deposit time
        let window = window(45);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();

        let event = info.record_unstake(&mut alice, &window, 100).unwrap();
        assert_eq!(event.staked_balance, 200);
        assert_eq!(alice.staked_amount, 200);
        assert_eq!(alice.deposit_time, Some(0));
        assert_eq!(info.total_staked_balance, 200);
        assert_eq!(info.total_weight, 200 * 45 * DAY as u128);

        info.compute_reward_factor(&window, 45 * DAY).unwrap();
        let claim = info.record_claim(&mut alice, &window).unwrap();
        let expected = RewardCalculator::reward_amount(
            200 * 45 * DAY as u128,
            info.reward_factor.value(),
        )
        .unwrap();
        assert_eq!(claim.amount, expected);
        assert!(claim.amount >= POOL - 1);
    }

    #[test]
    fn unstake_after_close_before_computation_drops_weight() {
        let window = window(10);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();
        info.record_stake(&mut bob, &window, 100, 0).unwrap();

        let event = info.record_unstake(&mut alice, &window, 100).unwrap();
        assert_eq!(event.staked_balance, 200);
        assert_eq!(info.total_weight, 300 * 10 * DAY as u128);

        info.compute_reward_factor(&window, window.end).unwrap();
        let a = info.record_claim(&mut alice, &window).unwrap().amount;
        let b = info.record_claim(&mut bob, &window).unwrap().amount;
        assert_eq!((a, b), (66_666, 33_333));
        assert!(a + b <= POOL);
    }

    #[test]
    fn restake_after_full_withdrawal_keeps_first_deposit_time() {
        let window = window(120);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        info.record_stake(&mut alice, &window, 1, 0).unwrap();
        info.record_withdrawal(&mut alice, &window).unwrap();
        assert_eq!(alice.phase(), StakerPhase::FullyWithdrawn);

        let event = info
            .record_stake(&mut alice, &window, 1_000, 119 * DAY)
            .unwrap();
        assert_eq!(event.deposit_time, 0);
        assert_eq!(info.staker_count, 1);
        info.record_stake(&mut bob, &window, 1_000, 0).unwrap();

        info.compute_reward_factor(&window, window.end).unwrap();
        let a = info.record_claim(&mut alice, &window).unwrap().amount;
        let b = info.record_claim(&mut bob, &window).unwrap().amount;
        assert_eq!(a, b);
        assert_eq!(a, 49_999);
    }

    #[test]
    fn unstake_beyond_balance_changes_nothing() {
        let window = window(10);
        let mut info = StakeInfo::default();
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();

        assert_error(
            info.record_unstake(&mut alice, &window, 301),
            ErrorCode::InsufficientStakedBalance,
        );
        assert_eq!(alice.staked_amount, 300);
        assert_eq!(info.total_staked_balance, 300);
        assert_eq!(info.total_weight, 300 * 10 * DAY as u128);
    }

    #[test]
    fn stake_one_second_after_close_is_rejected() {
        let window = window(45);
        let mut info = StakeInfo::default();
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();

        let mut charlie = staker();
        assert_error(
            info.record_stake(&mut charlie, &window, 50, window.end + 1),
            ErrorCode::StakingPeriodClosed,
        );
        assert_error(
            info.record_stake(&mut charlie, &window, 50, window.end),
            ErrorCode::StakingPeriodClosed,
        );
        assert_eq!(info.total_staked_balance, 300);
        assert_eq!(info.staker_count, 1);
        assert_eq!(charlie.deposit_time, None);
        assert_eq!(charlie.staked_amount, 0);
    }

    #[test]
    fn single_staker_over_whole_window() {
        let window = window(45);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();

        let computed = info.compute_reward_factor(&window, 45 * DAY).unwrap();
        let weight = 300 * 45 * DAY as u128;
        assert_eq!(computed.total_weight, weight);
        assert_eq!(
            computed.reward_factor,
            POOL as u128 * REWARD_FACTOR_PRECISION / weight
        );

        let claim = info.record_claim(&mut alice, &window).unwrap();
        assert_eq!(
            claim.amount as u128,
            weight * computed.reward_factor / REWARD_FACTOR_PRECISION
        );
        assert!(claim.amount <= POOL);
    }

    #[test]
    fn earlier_staker_earns_more_for_equal_principal() {
        let window = window(66);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        info.record_stake(&mut alice, &window, 300, 0).unwrap();
        info.record_stake(&mut bob, &window, 300, 45 * DAY).unwrap();

        info.compute_reward_factor(&window, 66 * DAY).unwrap();
        let alice_reward = info.record_claim(&mut alice, &window).unwrap().amount;
        let bob_reward = info.record_claim(&mut bob, &window).unwrap().amount;

        assert!(alice_reward > bob_reward);
        // weights are 300*66d and 300*21d
        assert_eq!(alice_reward, 75_862);
        assert_eq!(bob_reward, 24_137);
        assert!(info.total_rewards_paid <= POOL);
        assert_eq!(info.claimed_count, 2);
    }

    #[test]
    fn factor_is_computed_once_and_only_after_close() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        assert_eq!(info.reward_factor.value(), 0);
        assert!(info.reward_factor.is_pending());

        assert_error(
            info.compute_reward_factor(&window, window.end - 1),
            ErrorCode::StakingPeriodStillOpen,
        );
        assert!(info.reward_factor.is_pending());

        let computed = info.compute_reward_factor(&window, window.end).unwrap();
        assert!(computed.reward_factor > 0);
        assert_eq!(info.reward_factor.value(), computed.reward_factor);

        assert_error(
            info.compute_reward_factor(&window, window.end + DAY),
            ErrorCode::AlreadyComputed,
        );
        assert_eq!(info.reward_factor.value(), computed.reward_factor);
    }

    #[test]
    fn empty_ledger_computes_to_zero_not_pending() {
        let window = window(30);
        let mut info = funded(&window);
        let computed = info.compute_reward_factor(&window, window.end).unwrap();
        assert_eq!(computed.reward_factor, 0);
        assert_eq!(info.reward_factor, RewardFactor::Computed { factor: 0 });
        assert!(!info.reward_factor.is_pending());
    }

    #[test]
    fn claim_requires_computed_factor() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();

        assert_error(
            info.record_claim(&mut alice, &window),
            ErrorCode::RewardsNotComputed,
        );
        assert!(!alice.reward_claimed);
        assert_eq!(info.total_rewards_paid, 0);
    }

    #[test]
    fn second_claim_pays_nothing() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        info.compute_reward_factor(&window, window.end).unwrap();

        let first = info.record_claim(&mut alice, &window).unwrap();
        assert!(first.amount > 0);
        assert!(alice.reward_claimed);
        assert_eq!(alice.rewards_claimed, first.amount);

        assert_error(
            info.record_claim(&mut alice, &window),
            ErrorCode::AlreadyClaimed,
        );
        assert_eq!(info.total_rewards_paid, first.amount);
        assert_eq!(alice.rewards_claimed, first.amount);
        assert_eq!(info.pending_reward(&alice, &window).unwrap(), 0);
    }

    #[test]
    fn address_that_never_staked_cannot_claim() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        info.compute_reward_factor(&window, window.end).unwrap();

        let mut mallory = staker();
        assert_error(
            info.record_claim(&mut mallory, &window),
            ErrorCode::NoRewardsToClaim,
        );
        assert!(!mallory.reward_claimed);
    }

    #[test]
    fn withdrawal_after_computation_keeps_reward() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        info.record_stake(&mut bob, &window, 100, 0).unwrap();
        info.compute_reward_factor(&window, window.end).unwrap();
        let expected = info.pending_reward(&alice, &window).unwrap();

        let withdrawn = info.record_withdrawal(&mut alice, &window).unwrap();
        assert_eq!(withdrawn.amount, 100);
        assert_eq!(withdrawn.total_staked_balance, 100);
        assert_eq!(alice.phase(), StakerPhase::FullyWithdrawn);
        assert_eq!(alice.weighted_amount, 100);
        assert_eq!(info.total_weight, 200 * 30 * DAY as u128);

        let claim = info.record_claim(&mut alice, &window).unwrap();
        assert_eq!(claim.amount, expected);
        // half of the pool, less flooring dust
        assert_eq!(claim.amount, POOL / 2 - 1);
    }

    #[test]
    fn withdrawal_before_computation_forfeits_weight() {
        let window = window(30);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        info.record_stake(&mut bob, &window, 100, 0).unwrap();

        info.record_withdrawal(&mut alice, &window).unwrap();
        assert_eq!(alice.deposit_time, Some(0));
        assert_eq!(info.total_weight, 100 * 30 * DAY as u128);

        info.compute_reward_factor(&window, window.end).unwrap();
        assert_error(
            info.record_claim(&mut alice, &window),
            ErrorCode::NoRewardsToClaim,
        );
        let bob_reward = info.record_claim(&mut bob, &window).unwrap().amount;
        assert!(bob_reward >= POOL - 1);
    }

    #[test]
    fn second_withdrawal_moves_nothing() {
        let window = window(30);
        let mut info = StakeInfo::default();
        let mut alice = staker();
        info.record_stake(&mut alice, &window, 100, 0).unwrap();
        info.record_withdrawal(&mut alice, &window).unwrap();

        assert_error(
            info.record_withdrawal(&mut alice, &window),
            ErrorCode::NothingToWithdraw,
        );
        assert_eq!(info.total_staked_balance, 0);
        assert_error(
            info.record_withdrawal(&mut staker(), &window),
            ErrorCode::NothingToWithdraw,
        );
    }

    #[test]
    fn pool_is_fixed_once_window_closes() {
        let window = window(30);
        let mut info = funded(&window);
        let funder = Pubkey::new_unique();
        let event = info
            .record_funding(funder, &window, 500, window.end - 1)
            .unwrap();
        assert_eq!(event.reward_pool_balance, POOL + 500);

        assert_error(
            info.record_funding(funder, &window, 500, window.end),
            ErrorCode::StakingPeriodClosed,
        );
        assert_eq!(info.reward_pool_balance, POOL + 500);
    }

    #[test]
    fn staggered_creators_share_the_pool() {
        // 120-day window: alice stakes 300 at day 0 and unstakes 100, bob
        // stakes 300 at day 45, charlie stakes 400 at day 100
        let window = window(120);
        let mut info = funded(&window);
        let mut alice = staker();
        let mut bob = staker();
        let mut charlie = staker();

        info.record_stake(&mut alice, &window, 300, 0).unwrap();
        info.record_unstake(&mut alice, &window, 100).unwrap();
        info.record_stake(&mut bob, &window, 300, 45 * DAY).unwrap();
        info.record_stake(&mut charlie, &window, 400, 100 * DAY).unwrap();
        assert_error(
            info.record_stake(&mut charlie, &window, 50, 121 * DAY),
            ErrorCode::StakingPeriodClosed,
        );

        let computed = info.compute_reward_factor(&window, 121 * DAY).unwrap();
        assert!(computed.reward_factor > 0);
        assert_eq!(info.total_staked_balance, 900);

        let a = info.record_claim(&mut alice, &window).unwrap().amount;
        let b = info.record_claim(&mut bob, &window).unwrap().amount;
        let c = info.record_claim(&mut charlie, &window).unwrap().amount;
        // 200*120 : 300*75 : 400*20
        assert!(a > b && b > c);
        assert!(a + b + c <= POOL);
        assert!(POOL - (a + b + c) <= 3);

        let withdrawn = info.record_withdrawal(&mut alice, &window).unwrap();
        assert_eq!(withdrawn.amount, 200);
        assert_eq!(info.total_staked_balance, 700);
    }

    #[test]
    fn randomized_lifecycle_conserves_value() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let window = window(rng.random_range(1..200));
            let mut info = StakeInfo::default();
            let mut stakers: Vec<UserStakeInfo> = (0..rng.random_range(1..8)).map(|_| staker()).collect();
            let mut now = 0;

            while window.is_open(now) {
                let i = rng.random_range(0..stakers.len());
                match rng.random_range(0..4) {
                    0 | 1 => {
                        let amount = rng.random_range(1..10_000);
                        info.record_stake(&mut stakers[i], &window, amount, now).unwrap();
                    }
                    2 => {
                        let balance = stakers[i].staked_amount;
                        if balance > 0 {
                            let amount = rng.random_range(1..=balance);
                            info.record_unstake(&mut stakers[i], &window, amount).unwrap();
                        }
                    }
                    _ => {
                        let amount = rng.random_range(1..1_000_000);
                        info.record_funding(Pubkey::new_unique(), &window, amount, now)
                            .unwrap();
                    }
                }
                let total: u64 = stakers.iter().map(|s| s.staked_amount).sum();
                assert_eq!(info.total_staked_balance, total);
                now += rng.random_range(1..5 * DAY);
            }

            info.compute_reward_factor(&window, now).unwrap();
            for s in stakers.iter_mut() {
                let _ = info.record_claim(s, &window);
                assert!(info.total_rewards_paid <= info.reward_pool_balance);
                if s.staked_amount > 0 {
                    info.record_withdrawal(s, &window).unwrap();
                }
            }
            assert_eq!(info.total_staked_balance, 0);
        }
    }

    #[derive(Clone, Debug)]
    enum Op {
        Stake { who: usize, amount: u64, at: i64 },
        Unstake { who: usize, amount: u64 },
        Withdraw { who: usize },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4, 1u64..1_000_000, 0i64..90 * DAY)
                .prop_map(|(who, amount, at)| Op::Stake { who, amount, at }),
            (0usize..4, 1u64..1_000_000).prop_map(|(who, amount)| Op::Unstake { who, amount }),
            (0usize..4).prop_map(|who| Op::Withdraw { who }),
        ]
    }

    proptest! {
        #[test]
        fn totals_match_individual_records(mut ops in prop::collection::vec(op(), 1..60)) {
            let window = window(60);
            let mut info = StakeInfo::default();
            let mut stakers: Vec<UserStakeInfo> = (0..4).map(|_| staker()).collect();

            // time only moves forward
            let mut now = 0;
            for op in ops.iter_mut() {
                if let Op::Stake { at, .. } = op {
                    now = now.max(*at);
                    *at = now;
                }
            }

            for op in ops {
                let before_total = info.total_staked_balance;
                let result = match op {
                    Op::Stake { who, amount, at } => {
                        info.record_stake(&mut stakers[who], &window, amount, at).map(|_| ())
                    }
                    Op::Unstake { who, amount } => {
                        info.record_unstake(&mut stakers[who], &window, amount).map(|_| ())
                    }
                    Op::Withdraw { who } => {
                        info.record_withdrawal(&mut stakers[who], &window).map(|_| ())
                    }
                };
                if result.is_err() {
                    prop_assert_eq!(info.total_staked_balance, before_total);
                }

                let total: u64 = stakers.iter().map(|s| s.staked_amount).sum();
                prop_assert_eq!(info.total_staked_balance, total);

                let weight: u128 = stakers
                    .iter()
                    .filter_map(|s| s.deposit_time.map(|d| (s.weighted_amount, d)))
                    .map(|(amount, d)| RewardCalculator::weight_at(amount, d, window.start, window.end).unwrap())
                    .sum();
                prop_assert_eq!(info.total_weight, weight);
            }
        }

        #[test]
        fn claims_never_exceed_pool(
            pool in 0u64..10_000_000_000,
            deposits in prop::collection::vec((1u64..1_000_000_000, 0i64..30 * DAY), 1..20),
        ) {
            let window = window(30);
            let mut info = StakeInfo::default();
            if pool > 0 {
                info.record_funding(Pubkey::new_unique(), &window, pool, 0).unwrap();
            }
            let mut stakers: Vec<UserStakeInfo> = Vec::new();
            let mut sorted = deposits;
            sorted.sort_by_key(|(_, at)| *at);
            for (amount, at) in sorted {
                let mut s = staker();
                info.record_stake(&mut s, &window, amount, at).unwrap();
                stakers.push(s);
            }
            info.compute_reward_factor(&window, window.end).unwrap();

            let mut paid = 0u64;
            for s in stakers.iter_mut() {
                if let Ok(claim) = info.record_claim(s, &window) {
                    paid += claim.amount;
                }
                prop_assert!(info.record_claim(s, &window).is_err());
            }
            prop_assert_eq!(paid, info.total_rewards_paid);
            prop_assert!(paid <= pool);
        }
    }
}
