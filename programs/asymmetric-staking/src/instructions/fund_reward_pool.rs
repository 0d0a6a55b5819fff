use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_pool_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Tops up the reward pool. Any signer may fund while the staking window is
/// open; the pool is fixed once the window closes.
#[derive(Accounts)]
pub struct FundRewardPool<'info> {
    pub funder: Signer<'info>,

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

    #[account(
        address = global_config.reward_mint @ ErrorCode::InvalidRewardMint
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.reward_vault @ ErrorCode::InvalidVault
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Funder's reward-token account debited by the top-up.
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let window = ctx.accounts.global_config.staking_window();

    let event = ctx.accounts.stake_info.record_funding(
        ctx.accounts.funder.key(),
        &window,
        amount,
        now,
    )?;

    transfer_from_user_to_pool_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_reward_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.reward_mint.decimals,
    )?;

    msg!("Reward pool funded, balance {}", event.reward_pool_balance);
    emit!(event);
    Ok(())
}
