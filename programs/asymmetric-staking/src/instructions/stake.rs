use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{require_registered_creator, transfer_from_user_to_pool_vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use creator_registry::states::CREATOR_INFO_SEED;

/// Accounts required for a creator to stake.
///
/// Flow summary:
/// 1) Check the caller against the creator registry.
/// 2) Book the deposit on the ledger (first deposit fixes `deposit_time`).
/// 3) Transfer staking tokens from the caller into the staking vault.
/// 4) Emit `Staked`.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// Creator depositing tokens (payer for the staker record).
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Registry record of the caller.
    ///
    /// CHECK: Address derived from the registry program. Owner, discriminator
    /// and creator key are checked in the handler so any mismatch reports
    /// `NotACreator`.
    #[account(
        seeds = [CREATOR_INFO_SEED.as_bytes(), owner.key().as_ref()],
        bump,
        seeds::program = creator_registry::ID,
    )]
    pub creator_info: UncheckedAccount<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Per-user staking record (created lazily).
    #[account(
        init_if_needed,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = UserStakeInfo::LEN
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    #[account(
        mut,
        address = global_config.stake_info,
    )]
    pub stake_info: Account<'info, StakeInfo>,

    #[account(
        address = global_config.staking_mint @ ErrorCode::InvalidStakingMint
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.staking_vault @ ErrorCode::InvalidVault
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Caller's staking-token account debited by the deposit.
    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_staking_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    require_registered_creator(&ctx.accounts.creator_info.to_account_info(), &owner)?;

    let now = Clock::get()?.unix_timestamp;
    let window = ctx.accounts.global_config.staking_window();

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    if user_stake_info.owner == Pubkey::default() {
        user_stake_info.bump = ctx.bumps.user_stake_info;
        user_stake_info.owner = owner;
    }

    let event = ctx
        .accounts
        .stake_info
        .record_stake(user_stake_info, &window, amount, now)?;

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_staking_token.to_account_info(),
        ctx.accounts.staking_vault.to_account_info(),
        ctx.accounts.staking_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.staking_mint.decimals,
    )?;

    msg!(
        "Staked {} (balance {}, deposit time {})",
        amount,
        event.staked_balance,
        event.deposit_time
    );
    emit!(event);
    Ok(())
}
