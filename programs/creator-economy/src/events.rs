use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub platform: Pubkey,
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub early_supporter_limit: u16,
    pub early_supporter_rate_bps: u16,
    pub platform_fee_rate_bps: u16,
}

#[event]
pub struct CreatorLedgerCreated {
    pub creator_ledger: Pubkey,
    pub creator: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct ContentPublished {
    pub content: Pubkey,
    pub content_id: u64,
    pub creator: Pubkey,
    pub created_at: i64,
}

/// Full breakdown of one tip, enough to reconstruct every payout.
#[event]
pub struct TipDistributed {
    pub content: Pubkey,
    pub content_id: u64,
    pub tipper: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
    pub platform_fee: u64,
    pub supporter_share: u64,
    pub supporter_count: u16,
    pub creator_share: u64,
    /// Shares of supporters who could not accept them, paid to the creator.
    pub redirected_to_creator: u64,
    /// 1-based roster position when this tip enrolled the tipper.
    pub enrolled_position: Option<u16>,
}
