use {
    crate::{deterministic_keypair, deterministic_pubkey, FixtureStage},
    creator_economy::constants::{
        DEFAULT_EARLY_SUPPORTER_LIMIT, DEFAULT_EARLY_SUPPORTER_RATE_BPS,
        DEFAULT_PLATFORM_FEE_RATE_BPS,
    },
    creator_economy_sdk::AddressFinder,
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
};

#[derive(Debug)]
pub struct FixtureState {
    pub stage: FixtureStage,
    pub address_finder: AddressFinder,

    pub authority: Keypair,
    pub treasury: Pubkey,
    pub creator: Keypair,

    pub early_supporter_limit: u16,
    pub early_supporter_rate_bps: u16,
    pub platform_fee_rate_bps: u16,

    pub title: String,
    pub description: String,
}

impl FixtureState {
    pub fn program_id(&self) -> Pubkey {
        self.address_finder.program_id
    }

    pub fn platform_address(&self) -> Pubkey {
        self.address_finder.find_platform_v0_address().0
    }

    pub fn content_address(&self, content_id: u64) -> Pubkey {
        self.address_finder.find_content_record_v0_address(content_id).0
    }

    pub fn creator_ledger_address(&self, creator: &Pubkey) -> Pubkey {
        self.address_finder.find_creator_ledger_v0_address(creator).0
    }
}

impl Default for FixtureState {
    fn default() -> Self {
        Self {
            stage: FixtureStage::default(),
            address_finder: AddressFinder::default(),

            authority: deterministic_keypair("platform_authority"),
            treasury: deterministic_pubkey("platform_treasury"),
            creator: deterministic_keypair("creator"),

            early_supporter_limit: DEFAULT_EARLY_SUPPORTER_LIMIT,
            early_supporter_rate_bps: DEFAULT_EARLY_SUPPORTER_RATE_BPS,
            platform_fee_rate_bps: DEFAULT_PLATFORM_FEE_RATE_BPS,

            title: "Field recordings, vol. 1".to_string(),
            description: "Ambient sound from the northern coast.".to_string(),
        }
    }
}
