use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const PLATFORM_V0_SEED_PREFIX: &[u8] = b"platform_v0";

#[constant]
pub const CREATOR_LEDGER_V0_SEED_PREFIX: &[u8] = b"creator_ledger_v0";

#[constant]
pub const CONTENT_RECORD_V0_SEED_PREFIX: &[u8] = b"content_v0";

/// Limits measured in characters (Unicode scalar values).
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Worst-case UTF-8 width, used to reserve storage for the character caps above.
pub const MAX_UTF8_BYTES_PER_CHAR: usize = 4;

/// Smallest accepted tip, in lamports (0.001 SOL).
#[constant]
pub const MIN_TIP_AMOUNT: u64 = 1_000_000;

/// Upper bound for `PlatformV0::early_supporter_limit`. Every supporter is an
/// extra account on each tip transaction.
#[constant]
pub const MAX_EARLY_SUPPORTER_LIMIT: u16 = 20;

/// Basis point denominator (10_000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const DEFAULT_EARLY_SUPPORTER_LIMIT: u16 = 10;
pub const DEFAULT_EARLY_SUPPORTER_RATE_BPS: u16 = 1_000;
pub const DEFAULT_PLATFORM_FEE_RATE_BPS: u16 = 200;
