use anchor_client::{Client, Cluster};
use anyhow::Result;
use creator_registry::accounts as registry_accounts;
use creator_registry::instruction as registry_instructions;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};
use std::rc::Rc;

use crate::instructions::utils::get_creator_info_address;

use super::super::{read_keypair_file, ClientConfig};

/// Registers the payer as a creator.
pub fn register_creator_instr(config: &ClientConfig) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.creator_registry_program)?;

    let instructions = program
        .request()
        .accounts(registry_accounts::RegisterCreator {
            owner: program.payer(),
            creator_info: get_creator_info_address(&program.payer(), &program.id()),
            system_program: system_program::id(),
        })
        .args(registry_instructions::RegisterCreator {})
        .instructions()?;
    Ok(instructions)
}

/// Marks `creator` as verified; signed by the registry admin.
pub fn verify_creator_instr(config: &ClientConfig, creator: Pubkey) -> Result<Vec<Instruction>> {
    let admin = read_keypair_file(&config.admin_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(admin));
    let program = client.program(config.creator_registry_program)?;

    let instructions = program
        .request()
        .accounts(registry_accounts::VerifyCreator {
            owner: program.payer(),
            creator,
            creator_info: get_creator_info_address(&creator, &program.id()),
        })
        .args(registry_instructions::VerifyCreator {})
        .instructions()?;
    Ok(instructions)
}
