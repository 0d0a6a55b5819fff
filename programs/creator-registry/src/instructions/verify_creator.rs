use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Marks an already registered creator as verified. Admin only.
#[derive(Accounts)]
pub struct VerifyCreator<'info> {
    #[account(
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// CHECK: identity key used to derive `creator_info`.
    pub creator: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            CREATOR_INFO_SEED.as_bytes(),
            creator.key().as_ref()
        ],
        bump = creator_info.bump,
    )]
    pub creator_info: Account<'info, CreatorInfo>,
}

pub fn verify_creator(ctx: Context<VerifyCreator>) -> Result<()> {
    let event = ctx
        .accounts
        .creator_info
        .verify(ctx.accounts.owner.key())?;
    emit!(event);
    Ok(())
}
