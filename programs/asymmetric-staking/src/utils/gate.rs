use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use creator_registry::states::CreatorInfo;

/// Checks that `creator_info` is a live registry record for `owner`.
///
/// The account is taken unchecked by the instruction so that every failure
/// mode (missing record, foreign owner, wrong discriminator, record for
/// another key) maps to `NotACreator`.
pub fn require_registered_creator(creator_info: &AccountInfo, owner: &Pubkey) -> Result<()> {
    require_keys_eq!(
        *creator_info.owner,
        creator_registry::ID,
        ErrorCode::NotACreator
    );
    require!(!creator_info.data_is_empty(), ErrorCode::NotACreator);

    let data = creator_info.try_borrow_data()?;
    let record =
        CreatorInfo::try_deserialize(&mut &data[..]).map_err(|_| error!(ErrorCode::NotACreator))?;
    require!(record.is_creator(owner), ErrorCode::NotACreator);
    Ok(())
}
