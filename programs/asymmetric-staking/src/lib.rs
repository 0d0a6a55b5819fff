use anchor_lang::prelude::*;

declare_id!("8a2sMRJuRTf1xBcfMtick7Jiaesp6ozhxo9XRLaejCeF");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("VyVaVfbL5YyHTaPDt8DdNFbJzvZQQweNWX3V8Z3b6PM");
}

pub const AUTH_SEED: &str = "stake_and_reward_auth";
pub const STAKING_VAULT_SEED: &str = "staking_vault";
pub const REWARD_VAULT_SEED: &str = "reward_vault";
pub const PRECISION: u128 = 1_000_000_000;

pub mod error;
pub mod instructions;
pub mod reward;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod asymmetric_staking {

    use super::*;

    pub fn initialise_configs(
        ctx: Context<InitialiseConfigs>,
        admin: Pubkey,
        staking_period: u64,
    ) -> Result<()> {
        instructions::initialise_configs(ctx, admin, staking_period)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
        instructions::fund_reward_pool(ctx, amount)
    }

    pub fn compute_total_rewards_constant(ctx: Context<ComputeTotalRewardsConstant>) -> Result<()> {
        instructions::compute_total_rewards_constant(ctx)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards(ctx)
    }

    pub fn withdraw_monion(ctx: Context<WithdrawMonion>) -> Result<()> {
        instructions::withdraw_monion(ctx)
    }

    pub fn staker_balance(ctx: Context<StakerView>) -> Result<u64> {
        instructions::staker_balance(ctx)
    }

    pub fn staker_to_deposit_time(ctx: Context<StakerView>) -> Result<i64> {
        instructions::staker_to_deposit_time(ctx)
    }

    pub fn staker_pending_reward(ctx: Context<StakerView>) -> Result<u64> {
        instructions::staker_pending_reward(ctx)
    }

    pub fn total_staked_balance(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::total_staked_balance(ctx)
    }

    pub fn total_reward_constant(ctx: Context<LedgerView>) -> Result<u128> {
        instructions::total_reward_constant(ctx)
    }

    pub fn contract_termination(ctx: Context<LedgerView>) -> Result<i64> {
        instructions::contract_termination(ctx)
    }
}
