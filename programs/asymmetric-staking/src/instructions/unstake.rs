use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Returns part of the caller's principal.
///
/// Allowed before and after the window closes. The deposit timestamp is kept,
/// so the remaining balance keeps earning from the original deposit.
#[derive(Accounts)]
pub struct Unstake<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

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

    /// Program authority PDA (signs vault transfers).
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        address = global_config.staking_mint @ ErrorCode::InvalidStakingMint
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.staking_vault @ ErrorCode::InvalidVault
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Caller's staking-token account credited with the principal.
    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_staking_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let window = ctx.accounts.global_config.staking_window();

    // Ledger is settled before tokens leave the vault.
    let event = ctx.accounts.stake_info.record_unstake(
        &mut ctx.accounts.user_stake_info,
        &window,
        amount,
    )?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.staking_vault.to_account_info(),
        ctx.accounts.owner_staking_token.to_account_info(),
        ctx.accounts.staking_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.staking_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    msg!("Unstaked {} (balance {})", amount, event.staked_balance);
    emit!(event);
    Ok(())
}
