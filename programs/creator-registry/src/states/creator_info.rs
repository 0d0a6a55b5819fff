use crate::error::ErrorCode;
use crate::states::{CreatorVerified, NewCreator};
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// CreatorInfo Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each creator's registry record.
pub const CREATOR_INFO_SEED: &str = "creator_info";

/// Registry record for a single creator, derived from
/// `CREATOR_INFO_SEED + creator_pubkey`.
///
/// The existence of this account is what other programs treat as
/// "is a registered creator". Verification is an additional flag set by the
/// registry admin and is not required for registration-gated features.
#[account]
#[derive(Default, Debug)]
pub struct CreatorInfo {
    /// PDA bump for this account.
    pub bump: u8,

    /// The creator this record belongs to.
    pub creator: Pubkey,

    /// Set by the registry admin once the creator has been reviewed.
    pub is_verified: bool,

    /// UNIX timestamp (seconds) of registration.
    pub registered_at: i64,
}

impl CreatorInfo {
    /// Fixed serialized size of the account.
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: creator pubkey
    /// - 1: verified flag
    /// - 8: registration timestamp
    pub const LEN: usize = 8 + 1 + 32 + 1 + 8;

    pub fn is_creator(&self, key: &Pubkey) -> bool {
        self.creator != Pubkey::default() && self.creator == *key
    }

    pub fn register(&mut self, creator: Pubkey, bump: u8, now: i64) -> NewCreator {
        self.bump = bump;
        self.creator = creator;
        self.is_verified = false;
        self.registered_at = now;
        NewCreator {
            creator,
            registered_at: now,
        }
    }

    pub fn verify(&mut self, verified_by: Pubkey) -> Result<CreatorVerified> {
        require!(!self.is_verified, ErrorCode::AlreadyVerified);
        self.is_verified = true;
        Ok(CreatorVerified {
            creator: self.creator,
            verified_by,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anchor_lang::error::Error;
    use proptest::prelude::*;

    #[test]
    fn registered_record_answers_for_its_creator_only() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut info = CreatorInfo::default();
        assert!(!info.is_creator(&alice));

        let event = info.register(alice, 254, 1_700_000_000);
        assert_eq!(event.creator, alice);
        assert_eq!(event.registered_at, 1_700_000_000);
        assert!(info.is_creator(&alice));
        assert!(!info.is_creator(&bob));
        assert!(!info.is_verified);
    }

    #[test]
    fn default_record_never_matches_the_default_key() {
        let info = CreatorInfo::default();
        assert!(!info.is_creator(&Pubkey::default()));
    }

    #[test]
    fn verification_happens_once() {
        let admin = Pubkey::new_unique();
        let mut info = CreatorInfo::default();
        info.register(Pubkey::new_unique(), 255, 0);

        let event = info.verify(admin).unwrap();
        assert_eq!(event.verified_by, admin);
        assert!(info.is_verified);

        let err = info.verify(admin).unwrap_err();
        let expected: Error = ErrorCode::AlreadyVerified.into();
        assert_eq!(err, expected);
        assert!(info.is_verified);
    }

    #[test]
    fn account_round_trips_through_anchor_serialization() {
        let creator = Pubkey::new_unique();
        let mut info = CreatorInfo::default();
        info.register(creator, 7, 42);

        let mut data = Vec::with_capacity(CreatorInfo::LEN);
        info.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), CreatorInfo::LEN);

        let decoded = CreatorInfo::try_deserialize(&mut &data[..]).unwrap();
        assert!(decoded.is_creator(&creator));
        assert_eq!(decoded.bump, 7);
        assert_eq!(decoded.registered_at, 42);
    }

    proptest! {
        #[test]
        fn registration_keeps_timestamp(now in 0i64..i64::MAX, bump in any::<u8>()) {
            let creator = Pubkey::new_unique();
            let mut info = CreatorInfo::default();
            let event = info.register(creator, bump, now);
            prop_assert_eq!(event.registered_at, now);
            prop_assert_eq!(info.registered_at, now);
            prop_assert_eq!(info.bump, bump);
        }
    }
}
