use anyhow::{format_err, Result};
use asymmetric_staking::states::{GlobalConfig, StakeInfo, UserStakeInfo};
use clap::Parser;
use configparser::ini::Ini;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::str::FromStr;

mod instructions;
use instructions::registry_instructions::*;
use instructions::rpc::*;
use instructions::staking_instructions::*;
use instructions::utils::*;

/// Default staking window: 120 days.
const DEFAULT_STAKING_PERIOD: u64 = 120 * 24 * 60 * 60;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    http_url: String,
    ws_url: String,
    payer_path: String,
    admin_path: String,
    asymmetric_staking_program: Pubkey,
    creator_registry_program: Pubkey,
}

fn get_required(config: &Ini, key: &str) -> Result<String> {
    match config.get("Global", key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format_err!("{} must not be empty", key)),
    }
}

fn load_cfg(client_config: &str) -> Result<ClientConfig> {
    let mut config = Ini::new();
    config
        .load(client_config)
        .map_err(|e| format_err!("failed to load {}: {}", client_config, e))?;

    let http_url = get_required(&config, "http_url")?;
    let ws_url = get_required(&config, "ws_url")?;
    let payer_path = get_required(&config, "payer_path")?;
    let admin_path = get_required(&config, "admin_path")?;
    let asymmetric_staking_program =
        Pubkey::from_str(&get_required(&config, "asymmetric_staking_program")?)?;
    let creator_registry_program =
        Pubkey::from_str(&get_required(&config, "creator_registry_program")?)?;

    Ok(ClientConfig {
        http_url,
        ws_url,
        payer_path,
        admin_path,
        asymmetric_staking_program,
        creator_registry_program,
    })
}

fn read_keypair_file(s: &str) -> Result<Keypair> {
    solana_sdk::signature::read_keypair_file(s)
        .map_err(|_| format_err!("failed to read keypair from {}", s))
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: StakingCommands,
}

#[derive(Debug, Parser)]
pub enum StakingCommands {
    InitialiseConfigs {
        #[arg(long)]
        admin: Pubkey,
        #[arg(long)]
        staking_mint: Pubkey,
        #[arg(long)]
        reward_mint: Pubkey,
        /// Length of the staking window in seconds.
        #[arg(long, default_value_t = DEFAULT_STAKING_PERIOD)]
        staking_period: u64,
    },
    RegisterCreator {},
    VerifyCreator {
        #[arg(long)]
        creator: Pubkey,
    },
    Stake {
        #[arg(long)]
        amount: u64,
    },
    Unstake {
        #[arg(long)]
        amount: u64,
    },
    FundRewardPool {
        #[arg(long)]
        amount: u64,
    },
    ComputeRewards {},
    ClaimRewards {},
    WithdrawMonion {},
    Query {
        /// Staker to report on; defaults to the payer.
        #[arg(long)]
        staker: Option<Pubkey>,
    },
}

fn send_instructions(
    rpc_client: &RpcClient,
    payer: &Keypair,
    extra_signer: Option<&Keypair>,
    instructions: Vec<Instruction>,
) -> Result<()> {
    let mut signers = vec![payer];
    if let Some(signer) = extra_signer {
        if signer.pubkey() != payer.pubkey() {
            signers.push(signer);
        }
    }
    let recent_hash = rpc_client.get_latest_blockhash()?;
    let txn = Transaction::new_signed_with_payer(
        &instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_hash,
    );
    let signature = send_txn(rpc_client, &txn, true)?;
    println!("{}", signature);
    Ok(())
}

fn load_global_config(rpc_client: &RpcClient, config: &ClientConfig) -> Result<GlobalConfig> {
    let address = get_global_config_address(&config.asymmetric_staking_program);
    let account = rpc_client.get_account(&address)?;
    deserialize_anchor_account::<GlobalConfig>(&account)
}

fn mint_info(rpc_client: &RpcClient, mint: Pubkey) -> Result<MintInfo> {
    Ok(MintInfo {
        mint,
        token_program: get_token_program(rpc_client, &mint)?,
    })
}

fn print_ledger(rpc_client: &RpcClient, config: &ClientConfig, staker: Pubkey) -> Result<()> {
    let program_id = config.asymmetric_staking_program;
    let addresses = [
        get_global_config_address(&program_id),
        get_stake_info_address(&program_id),
        get_user_stake_info_address(&staker, &program_id),
    ];
    let accounts = get_multiple_accounts(rpc_client, &addresses)?;

    let global_config = accounts[0]
        .as_ref()
        .ok_or_else(|| format_err!("global config not initialised"))?;
    let global_config = deserialize_anchor_account::<GlobalConfig>(global_config)?;
    let stake_info = accounts[1]
        .as_ref()
        .ok_or_else(|| format_err!("stake info not initialised"))?;
    let stake_info = deserialize_anchor_account::<StakeInfo>(stake_info)?;
    let user_stake_info = accounts[2]
        .as_ref()
        .map(deserialize_anchor_account::<UserStakeInfo>)
        .transpose()?
        .unwrap_or_default();

    let window = global_config.staking_window();
    println!("{:#?}", global_config);
    println!("{:#?}", stake_info);
    println!("contract termination: {}", window.end);
    println!("total reward constant: {}", stake_info.reward_factor.value());

    println!("staker: {}", staker);
    println!("  phase: {:?}", user_stake_info.phase());
    println!("  staked balance: {}", user_stake_info.staked_amount);
    println!("  deposit time: {}", user_stake_info.deposit_timestamp());
    println!("  reward claimed: {}", user_stake_info.reward_claimed);
    let pending = stake_info
        .pending_reward(&user_stake_info, &window)
        .map_err(|e| format_err!("{}", e))?;
    println!("  claimable reward: {}", pending);
    Ok(())
}

fn main() -> Result<()> {
    let client_config = "client_config.ini";
    let config = load_cfg(client_config)?;
    let payer = read_keypair_file(&config.payer_path)?;
    let rpc_client = RpcClient::new(config.http_url.to_string());

    let opts = Opts::parse();
    match opts.command {
        StakingCommands::InitialiseConfigs {
            admin,
            staking_mint,
            reward_mint,
            staking_period,
        } => {
            let deployer = read_keypair_file(&config.admin_path)?;
            let staking = mint_info(&rpc_client, staking_mint)?;
            let reward = mint_info(&rpc_client, reward_mint)?;
            let ixs = initialise_configs_instr(&config, admin, staking_period, staking, reward)?;
            send_instructions(&rpc_client, &payer, Some(&deployer), ixs)?;
        }
        StakingCommands::RegisterCreator {} => {
            let ixs = register_creator_instr(&config)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::VerifyCreator { creator } => {
            let admin = read_keypair_file(&config.admin_path)?;
            let ixs = verify_creator_instr(&config, creator)?;
            send_instructions(&rpc_client, &payer, Some(&admin), ixs)?;
        }
        StakingCommands::Stake { amount } => {
            let global_config = load_global_config(&rpc_client, &config)?;
            let staking = mint_info(&rpc_client, global_config.staking_mint)?;
            let ixs = stake_instr(&config, staking, amount)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::Unstake { amount } => {
            let global_config = load_global_config(&rpc_client, &config)?;
            let staking = mint_info(&rpc_client, global_config.staking_mint)?;
            let ixs = unstake_instr(&config, staking, amount)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::FundRewardPool { amount } => {
            let global_config = load_global_config(&rpc_client, &config)?;
            let reward = mint_info(&rpc_client, global_config.reward_mint)?;
            let ixs = fund_reward_pool_instr(&config, reward, amount)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::ComputeRewards {} => {
            let operator = read_keypair_file(&config.admin_path)?;
            let ixs = compute_rewards_instr(&config)?;
            send_instructions(&rpc_client, &payer, Some(&operator), ixs)?;
        }
        StakingCommands::ClaimRewards {} => {
            let global_config = load_global_config(&rpc_client, &config)?;
            let reward = mint_info(&rpc_client, global_config.reward_mint)?;
            let ixs = claim_rewards_instr(&config, reward)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::WithdrawMonion {} => {
            let global_config = load_global_config(&rpc_client, &config)?;
            let staking = mint_info(&rpc_client, global_config.staking_mint)?;
            let ixs = withdraw_monion_instr(&config, staking)?;
            send_instructions(&rpc_client, &payer, None, ixs)?;
        }
        StakingCommands::Query { staker } => {
            print_ledger(&rpc_client, &config, staker.unwrap_or_else(|| payer.pubkey()))?;
        }
    }
    Ok(())
}
