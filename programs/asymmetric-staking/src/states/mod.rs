pub mod events;
pub use events::*;

pub mod global_config;
pub use global_config::*;

pub mod stake_info;
pub use stake_info::*;

pub mod user_stake_info;
pub use user_stake_info::*;
