use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Input account owner is not the program address")]
    InvalidOwner,

    #[msg("Caller is not a registered creator")]
    NotACreator,

    #[msg("Caller is not the staking operator")]
    NotOperator,

    #[msg("Staking period is closed")]
    StakingPeriodClosed,

    #[msg("Staking period is still open")]
    StakingPeriodStillOpen,

    #[msg("Reward factor has already been computed")]
    AlreadyComputed,

    #[msg("Reward factor has not been computed yet")]
    RewardsNotComputed,

    #[msg("Rewards have already been claimed")]
    AlreadyClaimed,

    #[msg("No staked balance to withdraw")]
    NothingToWithdraw,

    #[msg("No rewards available to claim")]
    NoRewardsToClaim,

    #[msg("Requested amount exceeds the staked balance")]
    InsufficientStakedBalance,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Staking period must be greater than zero")]
    InvalidStakingPeriod,

    #[msg("Payout would exceed the funded reward pool")]
    RewardPoolExceeded,

    #[msg("Invalid staking mint account")]
    InvalidStakingMint,

    #[msg("Invalid reward mint account")]
    InvalidRewardMint,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Invalid timestamp conversion")]
    InvalidTimestamp,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,
}
