pub mod events;
pub use events::*;

pub mod creator_info;
pub use creator_info::*;
