use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// UserStakeInfo Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each staker's record.
pub const USER_STAKE_INFO_SEED: &str = "user_stake_info";

/// Principal lifecycle of a single staker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakerPhase {
    /// Never deposited.
    Unstaked,
    /// Holds a positive balance.
    Staked,
    /// Deposited at some point, balance is now zero.
    FullyWithdrawn,
}

/// Stores staking and reward data for a single staker.
///
/// Each staker has one `UserStakeInfo` account, derived from
/// `USER_STAKE_INFO_SEED + user_pubkey`. Records are never closed: once the
/// balance settles to zero the account stays as proof of the claim state.
#[account]
#[derive(Default, Debug)]
pub struct UserStakeInfo {
    /// PDA bump for this account.
    pub bump: u8,

    /// Owner (staker) to whom this record belongs.
    pub owner: Pubkey,

    /// Current staked principal (base units).
    pub staked_amount: u64,

    /// Timestamp of the first deposit. Set once, never moved by later
    /// deposits, unstakes or withdrawals.
    pub deposit_time: Option<i64>,

    /// Principal that earns weight. Tracks `staked_amount` until the reward
    /// factor is computed, then stays frozen at that snapshot.
    pub weighted_amount: u64,

    /// Whether the reward has been paid.
    pub reward_claimed: bool,

    /// Reward paid to this staker (base units).
    pub rewards_claimed: u64,
}

impl UserStakeInfo {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: owner pubkey
    /// - 8: staked amount
    /// - 1 + 8: optional deposit timestamp
    /// - 8: weighted amount
    /// - 1: claimed flag
    /// - 8: rewards claimed
    pub const LEN: usize = 8 + 1 + 32 + 8 + (1 + 8) + 8 + 1 + 8;

    /// Deposit timestamp, `0` for accounts that never staked.
    pub fn deposit_timestamp(&self) -> i64 {
        self.deposit_time.unwrap_or_default()
    }

    pub fn phase(&self) -> StakerPhase {
        match (self.deposit_time, self.staked_amount) {
            (None, _) => StakerPhase::Unstaked,
            (Some(_), 0) => StakerPhase::FullyWithdrawn,
            (Some(_), _) => StakerPhase::Staked,
        }
    }
}
