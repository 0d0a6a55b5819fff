use crate::error::ErrorCode;
use crate::{states::*, REWARD_VAULT_SEED, STAKING_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Accounts context for `initialise_configs`.
///
/// This handler:
/// - Initializes the global configuration and the staking ledger.
/// - Creates the staking vault (principal custody) and the reward vault.
/// - Opens the staking window at the current cluster time.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Deployer signer (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA, owner of both vaults.
    ///
    /// CHECK: PDA derivation enforced via seeds. Not read as an account; used as Pubkey.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Global configuration account holding mints, vaults and the window.
    #[account(
        init,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = GlobalConfig::LEN
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Aggregate staking ledger.
    #[account(
        init,
        seeds = [STAKE_INFO_SEED.as_bytes()],
        bump,
        payer = owner,
        space = StakeInfo::LEN
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Mint of the token creators stake.
    #[account(mint::token_program = token_program)]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Mint of the token paid out as rewards.
    #[account(mint::token_program = token_program)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned vault holding staked principal.
    #[account(
        init,
        seeds = [STAKING_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = staking_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program-owned vault holding the reward pool.
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = reward_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface (required for vault creation).
    pub token_program: Interface<'info, TokenInterface>,

    /// Solana System Program.
    pub system_program: Program<'info, System>,
}

/// Writes the global configuration and opens a staking window of
/// `staking_period` seconds starting now.
///
/// `admin` becomes the operator allowed to compute the reward factor.
pub fn initialise_configs(
    ctx: Context<InitialiseConfigs>,
    admin: Pubkey,
    staking_period: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let window = StakingWindow::starting_at(now, staking_period)?;

    let global_config = ctx.accounts.global_config.deref_mut();
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.staking_mint = ctx.accounts.staking_mint.key();
    global_config.reward_mint = ctx.accounts.reward_mint.key();
    global_config.staking_vault = ctx.accounts.staking_vault.key();
    global_config.reward_vault = ctx.accounts.reward_vault.key();
    global_config.stake_info = ctx.accounts.stake_info.key();
    global_config.staking_window_start = window.start;
    global_config.staking_window_end = window.end;
    msg!("Global Config initialized");

    let stake_info = ctx.accounts.stake_info.deref_mut();
    stake_info.bump = ctx.bumps.stake_info;

    msg!(
        "Staking window open from {} until {}",
        window.start,
        window.end
    );

    emit!(StakingConfigInitialized {
        admin,
        staking_mint: ctx.accounts.staking_mint.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        staking_window_start: window.start,
        staking_window_end: window.end,
    });
    Ok(())
}
