use anchor_lang::prelude::*;

declare_id!("2k4WesXn1rHyr4C95qYbS7B9Z7HSkeLpQW6pr8BRtVvK");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("VyVaVfbL5YyHTaPDt8DdNFbJzvZQQweNWX3V8Z3b6PM");
}

pub mod error;
pub mod instructions;
pub mod states;

use instructions::*;

#[program]
pub mod creator_registry {

    use super::*;

    pub fn register_creator(ctx: Context<RegisterCreator>) -> Result<()> {
        instructions::register_creator(ctx)
    }

    pub fn verify_creator(ctx: Context<VerifyCreator>) -> Result<()> {
        instructions::verify_creator(ctx)
    }
}
