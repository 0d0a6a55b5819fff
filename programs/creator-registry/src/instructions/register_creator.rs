use crate::states::*;
use anchor_lang::prelude::*;

/// Registers the signer as a marketplace creator.
///
/// The record is a PDA keyed by the creator, so a second registration by the
/// same address fails at account creation.
#[derive(Accounts)]
pub struct RegisterCreator<'info> {
    /// Address registering itself; pays for the record.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Creator record (derived by CREATOR_INFO_SEED + owner).
    #[account(
        init,
        seeds = [
            CREATOR_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = CreatorInfo::LEN
    )]
    pub creator_info: Account<'info, CreatorInfo>,

    pub system_program: Program<'info, System>,
}

pub fn register_creator(ctx: Context<RegisterCreator>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let event = ctx.accounts.creator_info.register(
        ctx.accounts.owner.key(),
        ctx.bumps.creator_info,
        now,
    );
    msg!("Creator {} registered", event.creator);
    emit!(event);
    Ok(())
}
