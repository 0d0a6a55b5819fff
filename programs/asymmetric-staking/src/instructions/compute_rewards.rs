use crate::states::*;
use anchor_lang::prelude::*;

/// Operator-only, one-shot computation of the reward factor.
///
/// Reward math overview:
/// - Weight of a stake: `amount * (window_end - max(deposit_time, window_start))`.
/// - `total_weight` is the running sum kept by stake, unstake and withdraw.
/// - Factor = `reward_pool * PRECISION * PRECISION / total_weight`, or `0`
///   when nothing is weighted.
///
/// Once computed, the factor and every staker's weighted amount are frozen.
#[derive(Accounts)]
pub struct ComputeTotalRewardsConstant<'info> {
    /// Operator recorded in `global_config.admin`; checked in the handler.
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        address = global_config.stake_info,
    )]
    pub stake_info: Account<'info, StakeInfo>,
}

pub fn compute_total_rewards_constant(ctx: Context<ComputeTotalRewardsConstant>) -> Result<()> {
    ctx.accounts
        .global_config
        .require_operator(&ctx.accounts.owner.key())?;

    let now = Clock::get()?.unix_timestamp;
    let window = ctx.accounts.global_config.staking_window();

    let event = ctx
        .accounts
        .stake_info
        .compute_reward_factor(&window, now)?;

    msg!(
        "Reward factor {} over total weight {}",
        event.reward_factor,
        event.total_weight
    );
    emit!(event);
    Ok(())
}
