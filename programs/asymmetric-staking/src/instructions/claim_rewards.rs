use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

/// Claim the caller's share of the reward pool.
///
/// Reward math overview:
/// - Weight = `weighted_amount * (window_end - max(deposit_time, window_start))`,
///   recomputed from the stored deposit time.
/// - Reward = `weight * reward_factor / PRECISION / PRECISION`, floored.
///
/// Funds movement:
/// - Reward tokens move from `reward_vault` → caller's ATA.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// Staker claiming rewards (payer for ATA creation if needed).
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Per-user staking record (derived by USER_STAKE_INFO_SEED + owner).
    #[account(
        mut,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump = user_stake_info.bump,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    #[account(
        mut,
        address = global_config.stake_info,
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Program authority PDA (acts as token authority for vault transfers).
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = global_config.reward_vault @ ErrorCode::InvalidVault
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        address = global_config.reward_mint @ ErrorCode::InvalidRewardMint
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Caller's reward-token ATA; created on demand to receive rewards.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = reward_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA init).
    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

/// Pays the caller's reward once.
///
/// Steps:
/// 1) Book the claim: reward computed, `reward_claimed` set, totals updated.
/// 2) Transfer the reward from the reward vault to the caller.
/// 3) Emit `RewardsClaimed`.
pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    let window = ctx.accounts.global_config.staking_window();

    // --- 1) Accounting first; a second call hits `AlreadyClaimed` ---
    let event = ctx
        .accounts
        .stake_info
        .record_claim(&mut ctx.accounts.user_stake_info, &window)?;

    // --- 2) Pay from reward vault → user ---
    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_token.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        event.amount,
        ctx.accounts.reward_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    // --- 3) Event for indexers/UX ---
    msg!("Claimed {} reward tokens", event.amount);
    emit!(event);
    Ok(())
}
