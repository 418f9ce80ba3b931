use crate::constants::{
    CONTENT_RECORD_V0_SEED_PREFIX, CREATOR_LEDGER_V0_SEED_PREFIX, MAX_DESCRIPTION_LENGTH,
    MAX_TITLE_LENGTH, PLATFORM_V0_SEED_PREFIX,
};
use crate::error::ErrorCode;
use crate::events::ContentPublished;
use crate::instructions::create_creator_ledger_v0::initialize_creator_ledger_if_absent;
use crate::state::{ContentRecordV0, CreatorLedgerV0, PlatformV0};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PublishContentV0<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_V0_SEED_PREFIX],
        bump = platform.bump,
    )]
    pub platform: Account<'info, PlatformV0>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorLedgerV0::INIT_SPACE,
        seeds = [CREATOR_LEDGER_V0_SEED_PREFIX, creator.key().as_ref()],
        bump
    )]
    pub creator_ledger: Account<'info, CreatorLedgerV0>,

    // The caller derives this from the counter it read; a concurrent publish
    // that won the race makes the seeds stale and the transaction fails.
    #[account(
        init,
        payer = creator,
        space = ContentRecordV0::space(platform.early_supporter_limit),
        seeds = [
            CONTENT_RECORD_V0_SEED_PREFIX,
            ContentRecordV0::id_seed(platform.total_content_count).as_ref()
        ],
        bump
    )]
    pub content: Account<'info, ContentRecordV0>,

    pub system_program: Program<'info, System>,
}

pub fn validate_content_fields(title: &str, description: &str) -> Result<()> {
    require!(
        !title.is_empty() && !description.is_empty(),
        ErrorCode::EmptyField
    );
    require!(
        title.chars().count() <= MAX_TITLE_LENGTH,
        ErrorCode::TitleTooLong
    );
    require!(
        description.chars().count() <= MAX_DESCRIPTION_LENGTH,
        ErrorCode::DescriptionTooLong
    );
    Ok(())
}

pub fn handle_publish_content_v0(
    ctx: Context<PublishContentV0>,
    title: String,
    description: String,
) -> Result<()> {
    validate_content_fields(&title, &description)?;

    let creator = ctx.accounts.creator.key();
    let content_id = ctx.accounts.platform.total_content_count;

    let next_content_count = content_id.checked_add(1).ok_or(ErrorCode::Overflow)?;

    // A ledger created in this transaction starts at zero, so the increment
    // is checked against whatever is stored before anything is written.
    let ledger_content_count = if ctx.accounts.creator_ledger.is_initialized() {
        ctx.accounts.creator_ledger.content_count
    } else {
        0
    };
    let next_ledger_content_count = ledger_content_count
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;

    // All checks passed: apply.
    initialize_creator_ledger_if_absent(
        &mut ctx.accounts.creator_ledger,
        creator,
        ctx.bumps.creator_ledger,
    )?;

    let created_at = Clock::get()?.unix_timestamp;
    let content = &mut ctx.accounts.content;
    content.set_inner(ContentRecordV0 {
        content_id,
        creator,
        title,
        description,
        total_tips: 0,
        tip_count: 0,
        early_supporters: Vec::new(),
        created_at,
        bump: ctx.bumps.content,
    });

    ctx.accounts.platform.total_content_count = next_content_count;
    ctx.accounts.creator_ledger.content_count = next_ledger_content_count;

    msg!("Published content {} by {}", content_id, creator);

    emit!(ContentPublished {
        content: ctx.accounts.content.key(),
        content_id,
        creator,
        created_at,
    });

    Ok(())
}
