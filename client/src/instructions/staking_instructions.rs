use anchor_client::{Client, Cluster, Program};
use anyhow::Result;
use asymmetric_staking::accounts as staking_accounts;
use asymmetric_staking::instruction as staking_instructions;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Keypair, system_program};
use std::rc::Rc;

use crate::instructions::utils::{
    get_associated_token_address, get_authority_address, get_creator_info_address,
    get_global_config_address, get_reward_vault_address, get_stake_info_address,
    get_staking_vault_address, get_user_stake_info_address,
};

use super::super::{read_keypair_file, ClientConfig};

/// Mint and owning token program of one side of the ledger.
#[derive(Clone, Copy, Debug)]
pub struct MintInfo {
    pub mint: Pubkey,
    pub token_program: Pubkey,
}

fn staking_program(config: &ClientConfig, signer_path: &str) -> Result<Program<Rc<Keypair>>> {
    let signer = read_keypair_file(signer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(signer));
    Ok(client.program(config.asymmetric_staking_program)?)
}

/// Signed by the deployer key in `admin_path`.
pub fn initialise_configs_instr(
    config: &ClientConfig,
    admin: Pubkey,
    staking_period: u64,
    staking: MintInfo,
    reward: MintInfo,
) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.admin_path)?;

    let instructions = program
        .request()
        .accounts(staking_accounts::InitialiseConfigs {
            owner: program.payer(),
            authority: get_authority_address(&program.id()),
            global_config: get_global_config_address(&program.id()),
            stake_info: get_stake_info_address(&program.id()),
            staking_mint: staking.mint,
            reward_mint: reward.mint,
            staking_vault: get_staking_vault_address(&program.id()),
            reward_vault: get_reward_vault_address(&program.id()),
            token_program: staking.token_program,
            system_program: system_program::id(),
        })
        .args(staking_instructions::InitialiseConfigs {
            admin,
            staking_period,
        })
        .instructions()?;
    Ok(instructions)
}

pub fn stake_instr(config: &ClientConfig, staking: MintInfo, amount: u64) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.payer_path)?;
    let owner = program.payer();

    let instructions = program
        .request()
        .accounts(staking_accounts::Stake {
            owner,
            creator_info: get_creator_info_address(&owner, &config.creator_registry_program),
            global_config: get_global_config_address(&program.id()),
            user_stake_info: get_user_stake_info_address(&owner, &program.id()),
            stake_info: get_stake_info_address(&program.id()),
            staking_mint: staking.mint,
            staking_vault: get_staking_vault_address(&program.id()),
            owner_staking_token: get_associated_token_address(
                &owner,
                &staking.mint,
                &staking.token_program,
            ),
            token_program: staking.token_program,
            system_program: system_program::id(),
        })
        .args(staking_instructions::Stake { amount })
        .instructions()?;
    Ok(instructions)
}

pub fn unstake_instr(config: &ClientConfig, staking: MintInfo, amount: u64) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.payer_path)?;
    let owner = program.payer();

    let instructions = program
        .request()
        .accounts(staking_accounts::Unstake {
            owner,
            global_config: get_global_config_address(&program.id()),
            user_stake_info: get_user_stake_info_address(&owner, &program.id()),
            stake_info: get_stake_info_address(&program.id()),
            authority: get_authority_address(&program.id()),
            staking_mint: staking.mint,
            staking_vault: get_staking_vault_address(&program.id()),
            owner_staking_token: get_associated_token_address(
                &owner,
                &staking.mint,
                &staking.token_program,
            ),
            token_program: staking.token_program,
        })
        .args(staking_instructions::Unstake { amount })
        .instructions()?;
    Ok(instructions)
}

pub fn withdraw_monion_instr(config: &ClientConfig, staking: MintInfo) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.payer_path)?;
    let owner = program.payer();

    let instructions = program
        .request()
        .accounts(staking_accounts::WithdrawMonion {
            owner,
            global_config: get_global_config_address(&program.id()),
            user_stake_info: get_user_stake_info_address(&owner, &program.id()),
            stake_info: get_stake_info_address(&program.id()),
            authority: get_authority_address(&program.id()),
            staking_mint: staking.mint,
            staking_vault: get_staking_vault_address(&program.id()),
            owner_staking_token: get_associated_token_address(
                &owner,
                &staking.mint,
                &staking.token_program,
            ),
            token_program: staking.token_program,
        })
        .args(staking_instructions::WithdrawMonion {})
        .instructions()?;
    Ok(instructions)
}

pub fn fund_reward_pool_instr(
    config: &ClientConfig,
    reward: MintInfo,
    amount: u64,
) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.payer_path)?;
    let funder = program.payer();

    let instructions = program
        .request()
        .accounts(staking_accounts::FundRewardPool {
            funder,
            global_config: get_global_config_address(&program.id()),
            stake_info: get_stake_info_address(&program.id()),
            reward_mint: reward.mint,
            reward_vault: get_reward_vault_address(&program.id()),
            funder_reward_token: get_associated_token_address(
                &funder,
                &reward.mint,
                &reward.token_program,
            ),
            token_program: reward.token_program,
        })
        .args(staking_instructions::FundRewardPool { amount })
        .instructions()?;
    Ok(instructions)
}

/// Signed by the operator key in `admin_path`.
pub fn compute_rewards_instr(config: &ClientConfig) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.admin_path)?;

    let instructions = program
        .request()
        .accounts(staking_accounts::ComputeTotalRewardsConstant {
            owner: program.payer(),
            global_config: get_global_config_address(&program.id()),
            stake_info: get_stake_info_address(&program.id()),
        })
        .args(staking_instructions::ComputeTotalRewardsConstant {})
        .instructions()?;
    Ok(instructions)
}

pub fn claim_rewards_instr(config: &ClientConfig, reward: MintInfo) -> Result<Vec<Instruction>> {
    let program = staking_program(config, &config.payer_path)?;
    let owner = program.payer();

    let instructions = program
        .request()
        .accounts(staking_accounts::ClaimRewards {
            owner,
            global_config: get_global_config_address(&program.id()),
            user_stake_info: get_user_stake_info_address(&owner, &program.id()),
            stake_info: get_stake_info_address(&program.id()),
            authority: get_authority_address(&program.id()),
            reward_vault: get_reward_vault_address(&program.id()),
            reward_mint: reward.mint,
            owner_reward_token: get_associated_token_address(
                &owner,
                &reward.mint,
                &reward.token_program,
            ),
            token_program: reward.token_program,
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::id(),
        })
        .args(staking_instructions::ClaimRewards {})
        .instructions()?;
    Ok(instructions)
}
