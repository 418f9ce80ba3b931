use crate::constants::CREATOR_LEDGER_V0_SEED_PREFIX;
use crate::events::CreatorLedgerCreated;
use crate::state::CreatorLedgerV0;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CreateCreatorLedgerV0<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorLedgerV0::INIT_SPACE,
        seeds = [CREATOR_LEDGER_V0_SEED_PREFIX, creator.key().as_ref()],
        bump
    )]
    pub creator_ledger: Account<'info, CreatorLedgerV0>,

    pub system_program: Program<'info, System>,
}

/// Fills in a freshly allocated ledger. Returns false (and leaves the ledger
/// alone) when it was already initialized.
///
/// Shared by `create_creator_ledger_v0` and `publish_content_v0`, which both
/// create the ledger on first use.
pub(crate) fn initialize_creator_ledger_if_absent(
    creator_ledger: &mut Account<'_, CreatorLedgerV0>,
    creator: Pubkey,
    bump: u8,
) -> Result<bool> {
    if creator_ledger.is_initialized() {
        return Ok(false);
    }

    let created_at = Clock::get()?.unix_timestamp;
    creator_ledger.set_inner(CreatorLedgerV0 {
        creator,
        content_count: 0,  // Incremented by every publish
        total_earnings: 0, // Incremented by every tip
        created_at,
        bump,
    });

    emit!(CreatorLedgerCreated {
        creator_ledger: creator_ledger.key(),
        creator,
        created_at,
    });

    Ok(true)
}

pub fn handle_create_creator_ledger_v0(ctx: Context<CreateCreatorLedgerV0>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let created = initialize_creator_ledger_if_absent(
        &mut ctx.accounts.creator_ledger,
        creator,
        ctx.bumps.creator_ledger,
    )?;

    if created {
        msg!("Creator ledger created for {}", creator);
    } else {
        msg!("Creator ledger already exists for {}", creator);
    }

    Ok(())
}
