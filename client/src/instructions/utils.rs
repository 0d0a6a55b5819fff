use anchor_lang::AccountDeserialize;
use anyhow::{format_err, Result};
use asymmetric_staking::{
    states::{GLOBAL_CONFIG_SEED, STAKE_INFO_SEED, USER_STAKE_INFO_SEED},
    AUTH_SEED, REWARD_VAULT_SEED, STAKING_VAULT_SEED,
};
use creator_registry::states::CREATOR_INFO_SEED;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{account::Account, pubkey::Pubkey};

pub fn deserialize_anchor_account<T: AccountDeserialize>(account: &Account) -> Result<T> {
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(Into::into)
}

/// Token program owning `mint` (classic SPL token or token-2022).
pub fn get_token_program(rpc_client: &RpcClient, mint: &Pubkey) -> Result<Pubkey> {
    let account = rpc_client.get_account(mint)?;
    if account.owner == spl_token::id() || account.owner == spl_token_2022::id() {
        Ok(account.owner)
    } else {
        Err(format_err!("{} is not a token mint", mint))
    }
}

pub fn get_associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        owner,
        mint,
        token_program,
    )
}

pub fn get_global_config_address(program_id: &Pubkey) -> Pubkey {
    let (global_config, _bump) =
        Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED.as_bytes()], program_id);
    global_config
}

pub fn get_authority_address(program_id: &Pubkey) -> Pubkey {
    let (authority, _bump) = Pubkey::find_program_address(&[AUTH_SEED.as_bytes()], program_id);
    authority
}

pub fn get_stake_info_address(program_id: &Pubkey) -> Pubkey {
    let (stake_info, _bump) =
        Pubkey::find_program_address(&[STAKE_INFO_SEED.as_bytes()], program_id);
    stake_info
}

pub fn get_user_stake_info_address(user: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (user_stake_info, _bump) = Pubkey::find_program_address(
        &[USER_STAKE_INFO_SEED.as_bytes(), user.as_ref()],
        program_id,
    );
    user_stake_info
}

pub fn get_staking_vault_address(program_id: &Pubkey) -> Pubkey {
    let (staking_vault, _bump) =
        Pubkey::find_program_address(&[STAKING_VAULT_SEED.as_bytes()], program_id);
    staking_vault
}

pub fn get_reward_vault_address(program_id: &Pubkey) -> Pubkey {
    let (reward_vault, _bump) =
        Pubkey::find_program_address(&[REWARD_VAULT_SEED.as_bytes()], program_id);
    reward_vault
}

pub fn get_creator_info_address(creator: &Pubkey, registry_program_id: &Pubkey) -> Pubkey {
    let (creator_info, _bump) = Pubkey::find_program_address(
        &[CREATOR_INFO_SEED.as_bytes(), creator.as_ref()],
        registry_program_id,
    );
    creator_info
}
