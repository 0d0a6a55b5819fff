pub mod gate;
pub use gate::*;

pub mod math;
pub use math::*;

pub mod token;
pub use token::*;
