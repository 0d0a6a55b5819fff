use anchor_lang::prelude::*;

/// Emitted when an address registers itself as a creator.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct NewCreator {
    pub creator: Pubkey,
    /// UNIX timestamp (seconds) of the registration.
    pub registered_at: i64,
}

/// Emitted when the registry admin marks a creator as verified.
#[event]
#[cfg_attr(any(test, feature = "client"), derive(Debug))]
pub struct CreatorVerified {
    pub creator: Pubkey,
    pub verified_by: Pubkey,
}
