use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{
    CONTENT_RECORD_V0_SEED_PREFIX, CREATOR_LEDGER_V0_SEED_PREFIX, PLATFORM_V0_SEED_PREFIX,
};
use crate::distribution::{can_receive, plan_tip, Enrollment};
use crate::error::ErrorCode;
use crate::events::TipDistributed;
use crate::state::{ContentRecordV0, CreatorLedgerV0, PlatformV0};

/// Remaining accounts: the content's early supporters, writable, in roster order.
#[derive(Accounts)]
pub struct TipContentV0<'info> {
    #[account(mut)]
    pub tipper: Signer<'info>,

    #[account(mut)]
    pub creator: SystemAccount<'info>,

    #[account(
        seeds = [PLATFORM_V0_SEED_PREFIX],
        bump = platform.bump,
    )]
    pub platform: Account<'info, PlatformV0>,

    #[account(
        mut,
        seeds = [
            CONTENT_RECORD_V0_SEED_PREFIX,
            ContentRecordV0::id_seed(content.content_id).as_ref()
        ],
        bump = content.bump,
        has_one = creator @ ErrorCode::CreatorMismatch,
    )]
    pub content: Account<'info, ContentRecordV0>,

    #[account(
        mut,
        seeds = [CREATOR_LEDGER_V0_SEED_PREFIX, creator.key().as_ref()],
        bump = creator_ledger.bump,
    )]
    pub creator_ledger: Account<'info, CreatorLedgerV0>,

    #[account(
        mut,
        address = platform.treasury @ ErrorCode::TreasuryMismatch,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

fn transfer_from_tipper<'info>(
    system_program: &Program<'info, System>,
    tipper: &Signer<'info>,
    to: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    if lamports == 0 || to.key() == tipper.key() {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: tipper.to_account_info(),
                to,
            },
        ),
        lamports,
    )
}

pub fn handle_tip_content_v0<'info>(
    ctx: Context<'_, '_, '_, 'info, TipContentV0<'info>>,
    amount: u64,
) -> Result<()> {
    let tipper = ctx.accounts.tipper.key();

    // 1. Validation pass: nothing below this block runs unless every check passed.
    let supplied_supporters: Vec<Pubkey> =
        ctx.remaining_accounts.iter().map(|a| a.key()).collect();

    let plan = plan_tip(
        &ctx.accounts.platform,
        &ctx.accounts.content,
        &tipper,
        amount,
        &supplied_supporters,
    )?;
    let mut split = plan.split;

    // Supporters are paid by position; `payable[i]` covers remaining account i.
    let rent = Rent::get()?;
    let mut payable = Vec::with_capacity(ctx.remaining_accounts.len());
    for supporter in ctx.remaining_accounts {
        require!(supporter.is_writable, ErrorCode::SupporterNotWritable);

        let accepts = supporter.key() == tipper
            || can_receive(
                supporter.lamports(),
                rent.minimum_balance(supporter.data_len()),
                supporter.executable,
                split.supporter_share,
            );
        if !accepts {
            msg!(
                "Supporter {} cannot accept {} lamports; paying the creator instead",
                supporter.key(),
                split.supporter_share
            );
        }
        payable.push(accepts);
    }

    let unpayable = payable.iter().filter(|accepts| !**accepts).count() as u16;
    split.redirect_to_creator(unpayable)?;

    let total_earnings = ctx
        .accounts
        .creator_ledger
        .total_earnings
        .checked_add(split.creator_share)
        .ok_or(ErrorCode::Overflow)?;

    // 2. Transfers
    transfer_from_tipper(
        &ctx.accounts.system_program,
        &ctx.accounts.tipper,
        ctx.accounts.treasury.to_account_info(),
        split.platform_fee,
    )?;

    for (supporter, _) in ctx
        .remaining_accounts
        .iter()
        .zip(&payable)
        .filter(|(_, accepts)| **accepts)
    {
        transfer_from_tipper(
            &ctx.accounts.system_program,
            &ctx.accounts.tipper,
            supporter.clone(),
            split.supporter_share,
        )?;
    }

    transfer_from_tipper(
        &ctx.accounts.system_program,
        &ctx.accounts.tipper,
        ctx.accounts.creator.to_account_info(),
        split.creator_share,
    )?;

    // 3. State
    let content = &mut ctx.accounts.content;
    content.total_tips += amount; // checked in plan_tip
    content.tip_count += 1;

    let enrolled_position = match plan.enrollment {
        Enrollment::Enrolled { position } => {
            content.early_supporters.push(tipper);
            msg!("Enrolled {} as early supporter #{}", tipper, position);
            Some(position)
        }
        Enrollment::Unchanged => None,
    };

    ctx.accounts.creator_ledger.total_earnings = total_earnings;

    msg!(
        "Tip {} on content {}: fee {}, supporters {} x {}, creator {} ({} redirected)",
        amount,
        content.content_id,
        split.platform_fee,
        split.supporter_count,
        split.supporter_share,
        split.creator_share,
        split.redirected
    );

    emit!(TipDistributed {
        content: content.key(),
        content_id: content.content_id,
        tipper,
        creator: content.creator,
        amount,
        platform_fee: split.platform_fee,
        supporter_share: split.supporter_share,
        supporter_count: split.supporter_count,
        creator_share: split.creator_share,
        redirected_to_creator: split.redirected,
        enrolled_position,
    });

    Ok(())
}
