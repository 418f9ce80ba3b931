use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MAX_UTF8_BYTES_PER_CHAR};

#[account] // seed [PLATFORM_V0_SEED_PREFIX]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PlatformV0 {
    /// The signer that initialized the platform.
    pub authority: Pubkey,

    /// Receives the platform fee portion of every tip.
    pub treasury: Pubkey,

    /// Number of content records published so far. The next publish uses this
    /// value as its content id, then increments it.
    pub total_content_count: u64,

    /// Maximum size of a content record's early supporter roster.
    pub early_supporter_limit: u16,

    /// Share of each tip paid to the early supporters once the roster is full.
    pub early_supporter_rate_bps: u16,

    /// Share of each tip paid to the treasury.
    pub platform_fee_rate_bps: u16,

    /// Bump seed for the Platform PDA.
    pub bump: u8,
}

impl PlatformV0 {
    /// `init_if_needed` leaves a zeroed record behind on first touch; a signer
    /// key is never the default pubkey.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

#[account] // seed [CREATOR_LEDGER_V0_SEED_PREFIX, creator]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct CreatorLedgerV0 {
    pub creator: Pubkey,

    /// Number of content records this creator has published.
    pub content_count: u32,

    /// Lamports received as creator share across all content.
    pub total_earnings: u64,

    pub created_at: i64,

    pub bump: u8,
}

impl CreatorLedgerV0 {
    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }
}

#[account] // seed [CONTENT_RECORD_V0_SEED_PREFIX, content_id (u64 LE)]
#[derive(Debug, PartialEq, Eq)]
pub struct ContentRecordV0 {
    /// Dense, strictly increasing from 0. Never changes after publish.
    pub content_id: u64,

    pub creator: Pubkey,

    pub title: String,

    pub description: String,

    /// Cumulative tipped amount, before any split.
    pub total_tips: u64,

    pub tip_count: u32,

    /// First distinct tippers, in enrollment order. Append-only, never longer
    /// than the platform's `early_supporter_limit`.
    pub early_supporters: Vec<Pubkey>,

    pub created_at: i64,

    pub bump: u8,
}

impl ContentRecordV0 {
    /// Account size (including the 8 byte discriminator) for a record whose
    /// roster holds at most `early_supporter_limit` entries. Title and
    /// description are reserved at their character caps so every valid
    /// publish fits.
    pub fn space(early_supporter_limit: u16) -> usize {
        8 // discriminator
            + 8 // content_id
            + 32 // creator
            + 4 + MAX_TITLE_LENGTH * MAX_UTF8_BYTES_PER_CHAR
            + 4 + MAX_DESCRIPTION_LENGTH * MAX_UTF8_BYTES_PER_CHAR
            + 8 // total_tips
            + 4 // tip_count
            + 4 + 32 * early_supporter_limit as usize
            + 8 // created_at
            + 1 // bump
    }

    /// Seed bytes for a content id: fixed-width little-endian.
    pub fn id_seed(content_id: u64) -> [u8; 8] {
        content_id.to_le_bytes()
    }

    pub fn is_supporter(&self, address: &Pubkey) -> bool {
        self.early_supporters.contains(address)
    }

    pub fn roster_is_full(&self, early_supporter_limit: u16) -> bool {
        self.early_supporters.len() >= early_supporter_limit as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_roster(roster: Vec<Pubkey>) -> ContentRecordV0 {
        ContentRecordV0 {
            content_id: 7,
            creator: Pubkey::new_unique(),
            title: "t".to_string(),
            description: "d".to_string(),
            total_tips: 0,
            tip_count: 0,
            early_supporters: roster,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_content_space_holds_maximal_record() {
        let limit = 10u16;
        let mut record = content_with_roster((0..limit).map(|_| Pubkey::new_unique()).collect());
        record.title = "语".repeat(MAX_TITLE_LENGTH);
        record.description = "🎨".repeat(MAX_DESCRIPTION_LENGTH);

        let mut data = Vec::new();
        record.try_serialize(&mut data).expect("serialize");

        assert!(
            data.len() <= ContentRecordV0::space(limit),
            "serialized {} bytes, reserved {}",
            data.len(),
            ContentRecordV0::space(limit)
        );
    }

    #[test]
    fn test_roster_helpers() {
        let first = Pubkey::new_unique();
        let record = content_with_roster(vec![first]);

        assert!(record.is_supporter(&first));
        assert!(!record.is_supporter(&Pubkey::new_unique()));
        assert!(record.roster_is_full(1));
        assert!(!record.roster_is_full(2));
    }

    #[test]
    fn test_id_seed_is_little_endian() {
        assert_eq!(ContentRecordV0::id_seed(1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            ContentRecordV0::id_seed(0x0102),
            [0x02, 0x01, 0, 0, 0, 0, 0, 0]
        );
    }
}
