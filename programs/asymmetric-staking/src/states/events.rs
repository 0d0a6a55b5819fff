use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the staking configuration is initialized.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct StakingConfigInitialized {
    /// Operator allowed to compute the reward factor.
    pub admin: Pubkey,
    /// Mint of the token creators stake.
    pub staking_mint: Pubkey,
    /// Mint of the token paid out as rewards.
    pub reward_mint: Pubkey,
    /// UNIX timestamp (seconds) at which staking opened.
    pub staking_window_start: i64,
    /// UNIX timestamp (seconds) after which no stake is accepted.
    pub staking_window_end: i64,
}

/// Emitted when a creator deposits staking tokens.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct Staked {
    pub staker: Pubkey,
    /// Amount deposited by this call (base units).
    pub amount: u64,
    /// First-deposit timestamp the weight is measured from.
    pub deposit_time: i64,
    /// Staker's balance after the deposit.
    pub staked_balance: u64,
    /// Protocol-wide staked balance after the deposit.
    pub total_staked_balance: u64,
}

/// Emitted when a staker takes back part of their principal.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct Unstaked {
    pub staker: Pubkey,
    pub amount: u64,
    pub staked_balance: u64,
    pub total_staked_balance: u64,
}

/// Emitted when reward tokens are added to the pool.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct RewardPoolFunded {
    pub funder: Pubkey,
    pub amount: u64,
    /// Pool size after funding.
    pub reward_pool_balance: u64,
}

/// Emitted exactly once, when the operator fixes the reward factor.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct RewardFactorComputed {
    /// Reward-token units per unit of weight, scaled by `REWARD_FACTOR_PRECISION`.
    pub reward_factor: u128,
    /// Sum of `amount * duration` over all weighted stakes.
    pub total_weight: u128,
    pub reward_pool_balance: u64,
    pub total_staked_balance: u64,
}

/// Emitted when a staker collects their reward.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct RewardsClaimed {
    pub staker: Pubkey,
    /// Reward tokens paid (base units).
    pub amount: u64,
    /// Cumulative rewards paid across all stakers after this claim.
    pub total_rewards_paid: u64,
}

/// Emitted when a staker withdraws their whole remaining principal.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct WithdrawAllMonion {
    pub staker: Pubkey,
    pub amount: u64,
    pub total_staked_balance: u64,
}
