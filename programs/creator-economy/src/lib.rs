pub mod constants;
pub mod distribution;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::{
    CONTENT_RECORD_V0_SEED_PREFIX, CREATOR_LEDGER_V0_SEED_PREFIX, MAX_DESCRIPTION_LENGTH,
    MAX_EARLY_SUPPORTER_LIMIT, MAX_TITLE_LENGTH, MIN_TIP_AMOUNT, PLATFORM_V0_SEED_PREFIX,
};
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("39bUPvSuaMnY2z7pZi84RqCHSMnvTPt4UU3kqqdHhkHY");

#[program]
pub mod creator_economy {
    use super::instructions;
    use super::*;

    // platform authority, once
    pub fn init_platform_v0(
        ctx: Context<InitPlatformV0>,
        early_supporter_limit: u16,
        early_supporter_rate_bps: u16,
        platform_fee_rate_bps: u16,
    ) -> Result<()> {
        instructions::handle_init_platform_v0(
            ctx,
            early_supporter_limit,
            early_supporter_rate_bps,
            platform_fee_rate_bps,
        )
    }

    // creator
    pub fn create_creator_ledger_v0(ctx: Context<CreateCreatorLedgerV0>) -> Result<()> {
        instructions::handle_create_creator_ledger_v0(ctx)
    }

    // creator
    pub fn publish_content_v0(
        ctx: Context<PublishContentV0>,
        title: String,
        description: String,
    ) -> Result<()> {
        instructions::handle_publish_content_v0(ctx, title, description)
    }

    // anyone but the creator
    pub fn tip_content_v0<'info>(
        ctx: Context<'_, '_, '_, 'info, TipContentV0<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::handle_tip_content_v0(ctx, amount)
    }
}
