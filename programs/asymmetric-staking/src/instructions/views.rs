use crate::states::*;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Read surface
//
// Values are handed back through Anchor return data, so clients can simulate
// these instructions instead of decoding accounts themselves.
// ──────────────────────────────────────────────────────────────────────────────
//

/// Accounts for per-staker queries. `staker` can be any address; an address
/// that never staked has no record and reads as zero.
#[derive(Accounts)]
pub struct StakerView<'info> {
    /// CHECK: Only the key is used to derive the staker record.
    pub staker: UncheckedAccount<'info>,

    /// CHECK: PDA derivation enforced via seeds; may be uninitialised.
    #[account(
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            staker.key().as_ref()
        ],
        bump,
    )]
    pub user_stake_info: UncheckedAccount<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(address = global_config.stake_info)]
    pub stake_info: Account<'info, StakeInfo>,
}

/// Accounts for ledger-wide queries.
#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(address = global_config.stake_info)]
    pub stake_info: Account<'info, StakeInfo>,
}

/// Decodes a staker record if one has been created.
pub fn load_user_stake_info(account: &AccountInfo) -> Result<Option<UserStakeInfo>> {
    if account.data_is_empty() || *account.owner != crate::ID {
        return Ok(None);
    }
    let data = account.try_borrow_data()?;
    Ok(Some(UserStakeInfo::try_deserialize(&mut &data[..])?))
}

pub fn staker_balance(ctx: Context<StakerView>) -> Result<u64> {
    let record = load_user_stake_info(&ctx.accounts.user_stake_info.to_account_info())?;
    Ok(record.map(|user| user.staked_amount).unwrap_or_default())
}

/// First-deposit timestamp, `0` for an address that never staked.
pub fn staker_to_deposit_time(ctx: Context<StakerView>) -> Result<i64> {
    let record = load_user_stake_info(&ctx.accounts.user_stake_info.to_account_info())?;
    Ok(record
        .map(|user| user.deposit_timestamp())
        .unwrap_or_default())
}

/// Reward the staker would receive if they claimed now.
pub fn staker_pending_reward(ctx: Context<StakerView>) -> Result<u64> {
    let record = load_user_stake_info(&ctx.accounts.user_stake_info.to_account_info())?;
    match record {
        Some(user) => ctx
            .accounts
            .stake_info
            .pending_reward(&user, &ctx.accounts.global_config.staking_window()),
        None => Ok(0),
    }
}

pub fn total_staked_balance(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.stake_info.total_staked_balance)
}

/// Reward factor, `0` until computed.
pub fn total_reward_constant(ctx: Context<LedgerView>) -> Result<u128> {
    Ok(ctx.accounts.stake_info.reward_factor.value())
}

pub fn contract_termination(ctx: Context<LedgerView>) -> Result<i64> {
    Ok(ctx.accounts.global_config.staking_window_end)
}
