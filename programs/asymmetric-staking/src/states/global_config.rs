use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Global Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global configuration account.
pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Stores the fixed addresses and the staking window of the deployment.
///
/// This account is created once at initialization (`InitialiseConfigs`) and is
/// never modified afterwards.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Operator authorized to compute the reward factor.
    pub admin: Pubkey,

    /// Mint of the token creators stake.
    pub staking_mint: Pubkey,

    /// Mint of the token paid as rewards.
    pub reward_mint: Pubkey,

    /// Program-owned vault holding staked principal.
    pub staking_vault: Pubkey,

    /// Program-owned vault holding the reward pool.
    pub reward_vault: Pubkey,

    /// Account holding aggregate ledger state.
    pub stake_info: Pubkey,

    /// UNIX timestamp (seconds) at which staking opened.
    pub staking_window_start: i64,

    /// UNIX timestamp (seconds) at which staking closes; also the contract
    /// termination all durations are measured to.
    pub staking_window_end: i64,
}

impl GlobalConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 6: six Pubkeys
    /// - 8 * 2: two i64 timestamps
    pub const LEN: usize = 8 + 1 + 32 * 6 + 8 * 2;

    /// Only the operator recorded at initialization may compute rewards.
    pub fn require_operator(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(*key, self.admin, ErrorCode::NotOperator);
        Ok(())
    }

    pub fn staking_window(&self) -> StakingWindow {
        StakingWindow {
            start: self.staking_window_start,
            end: self.staking_window_end,
        }
    }
}

/// The half-open interval `[start, end)` in which stakes are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakingWindow {
    pub start: i64,
    pub end: i64,
}

impl StakingWindow {
    /// Window opening at `now` and lasting `staking_period` seconds.
    pub fn starting_at(now: i64, staking_period: u64) -> Result<Self> {
        require_gt!(staking_period, 0, ErrorCode::InvalidStakingPeriod);
        let period = i64::try_from(staking_period).map_err(|_| error!(ErrorCode::InvalidTimestamp))?;
        let end = now.checked_add(period).ok_or(ErrorCode::MathOverflow)?;
        Ok(Self { start: now, end })
    }

    pub fn is_open(&self, now: i64) -> bool {
        now < self.end
    }

    pub fn is_closed(&self, now: i64) -> bool {
        !self.is_open(now)
    }
}
