pub mod register_creator;
pub use register_creator::*;

pub mod verify_creator;
pub use verify_creator::*;
