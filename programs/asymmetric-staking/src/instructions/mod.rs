pub mod initialise_configs;
pub use initialise_configs::*;

pub mod stake;
pub use stake::*;

pub mod unstake;
pub use unstake::*;

pub mod fund_reward_pool;
pub use fund_reward_pool::*;

pub mod compute_rewards;
pub use compute_rewards::*;

pub mod claim_rewards;
pub use claim_rewards::*;

pub mod withdraw_monion;
pub use withdraw_monion::*;

pub mod views;
pub use views::*;
