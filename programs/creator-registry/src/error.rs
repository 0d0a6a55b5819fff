use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Input account owner is not the program admin")]
    InvalidOwner,

    #[msg("Creator is already verified")]
    AlreadyVerified,
}
