use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Withdraws the caller's whole remaining principal.
///
/// Independent of the reward claim: a staker may withdraw before or after
/// claiming. Withdrawing while the reward factor is still pending gives up the
/// stake's weight.
#[derive(Accounts)]
pub struct WithdrawMonion<'info> {
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

    #[account(
        mut,
        token::mint = staking_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_staking_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn withdraw_monion(ctx: Context<WithdrawMonion>) -> Result<()> {
    let window = ctx.accounts.global_config.staking_window();

    // Balance is zeroed before the transfer, a repeated call finds nothing.
    let event = ctx
        .accounts
        .stake_info
        .record_withdrawal(&mut ctx.accounts.user_stake_info, &window)?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.staking_vault.to_account_info(),
        ctx.accounts.owner_staking_token.to_account_info(),
        ctx.accounts.staking_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        event.amount,
        ctx.accounts.staking_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    msg!("Withdrew {} of principal", event.amount);
    emit!(event);
    Ok(())
}
