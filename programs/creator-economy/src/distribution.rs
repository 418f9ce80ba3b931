//! Tip splitting.
//!
//! Everything here is pure: [`plan_tip`] validates a tip against the current
//! platform and content state and computes every transfer and state change it
//! would cause. The instruction handler only applies an `Ok` plan, so a
//! rejected tip never moves lamports or touches an account.
//!
//! Policy: the early supporter pool is withheld until the roster is full.
//! From then on every tip pays `pool / limit` to each supporter and folds the
//! integer-division remainder into the creator's share.
//!
//! A supporter whose account cannot accept their share (see [`can_receive`])
//! is skipped for that tip and the share goes to the creator instead, so one
//! emptied wallet never blocks tipping on the content.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MIN_TIP_AMOUNT};
use crate::error::ErrorCode;
use crate::state::{ContentRecordV0, PlatformV0};

/// The three-way split of a single tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TipSplit {
    pub amount: u64,
    pub platform_fee: u64,
    /// Paid to every supporter on the roster. Zero while the roster is filling.
    pub supporter_share: u64,
    /// Number of supporters receiving `supporter_share`.
    pub supporter_count: u16,
    /// Part of the supporter pool that did not divide evenly; included in `creator_share`.
    pub remainder: u64,
    /// Shares of supporters who could not accept them; included in `creator_share`.
    pub redirected: u64,
    pub creator_share: u64,
}

impl TipSplit {
    /// Lamports actually paid to supporters (`supporter_share * supporter_count`).
    pub fn supporter_total(&self) -> u64 {
        self.supporter_share * self.supporter_count as u64
    }

    /// Moves the shares of `count` supporters to the creator.
    pub fn redirect_to_creator(&mut self, count: u16) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let moved = self
            .supporter_share
            .checked_mul(count as u64)
            .ok_or(ErrorCode::Overflow)?;

        self.supporter_count = self
            .supporter_count
            .checked_sub(count)
            .ok_or(ErrorCode::Overflow)?;
        self.redirected = self.redirected.checked_add(moved).ok_or(ErrorCode::Overflow)?;
        self.creator_share = self
            .creator_share
            .checked_add(moved)
            .ok_or(ErrorCode::Overflow)?;

        Ok(())
    }
}

/// Whether an account holding `balance` lamports can be credited `lamports`.
///
/// The runtime refuses to change an executable account's balance, and a
/// non-zero balance below the rent-exempt minimum for the account's data
/// fails the whole transaction.
pub fn can_receive(balance: u64, rent_exempt_minimum: u64, executable: bool, lamports: u64) -> bool {
    if lamports == 0 {
        return true;
    }
    !executable && balance.saturating_add(lamports) >= rent_exempt_minimum
}

/// Roster change caused by a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    /// The tipper joins the roster at this 1-based position.
    Enrolled { position: u16 },
    /// Roster already full, or the tipper is already on it.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPlan {
    pub split: TipSplit,
    pub enrollment: Enrollment,
}

/// `floor(amount * rate_bps / 10_000)`, failing on u64 overflow.
pub fn bps_of(amount: u64, rate_bps: u16) -> Result<u64> {
    let scaled = amount
        .checked_mul(rate_bps as u64)
        .ok_or(ErrorCode::Overflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

/// Splits `amount` given the platform rates and the roster size *before* this tip.
pub fn compute_split(
    amount: u64,
    platform_fee_rate_bps: u16,
    early_supporter_rate_bps: u16,
    early_supporter_limit: u16,
    roster_len: usize,
) -> Result<TipSplit> {
    let platform_fee = bps_of(amount, platform_fee_rate_bps)?;

    let roster_full = early_supporter_limit > 0 && roster_len >= early_supporter_limit as usize;

    let (supporter_share, supporter_count, remainder) = if roster_full {
        let pool = bps_of(amount, early_supporter_rate_bps)?;
        let limit = early_supporter_limit as u64;
        let share = pool / limit;
        (share, early_supporter_limit, pool - share * limit)
    } else {
        (0, 0, 0)
    };

    let supporter_total = supporter_share
        .checked_mul(supporter_count as u64)
        .ok_or(ErrorCode::Overflow)?;

    let creator_share = amount
        .checked_sub(platform_fee)
        .and_then(|rest| rest.checked_sub(supporter_total))
        .ok_or(ErrorCode::Overflow)?;

    Ok(TipSplit {
        amount,
        platform_fee,
        supporter_share,
        supporter_count,
        remainder,
        redirected: 0,
        creator_share,
    })
}

/// Checks the caller-supplied recipients against the stored roster, index by
/// index. Funds are routed by position, so order matters as much as membership.
pub fn verify_supporter_recipients(roster: &[Pubkey], supplied: &[Pubkey]) -> Result<()> {
    require_eq!(
        supplied.len(),
        roster.len(),
        ErrorCode::SupporterListMismatch
    );

    for (expected, actual) in roster.iter().zip(supplied) {
        require_keys_eq!(*actual, *expected, ErrorCode::SupporterListMismatch);
    }

    Ok(())
}

/// Validates a tip and computes its effects without mutating anything.
pub fn plan_tip(
    platform: &PlatformV0,
    content: &ContentRecordV0,
    tipper: &Pubkey,
    amount: u64,
    supplied_supporters: &[Pubkey],
) -> Result<TipPlan> {
    require_gte!(amount, MIN_TIP_AMOUNT, ErrorCode::TipTooSmall);
    require_keys_neq!(*tipper, content.creator, ErrorCode::CannotTipSelf);

    verify_supporter_recipients(&content.early_supporters, supplied_supporters)?;

    let split = compute_split(
        amount,
        platform.platform_fee_rate_bps,
        platform.early_supporter_rate_bps,
        platform.early_supporter_limit,
        content.early_supporters.len(),
    )?;

    let enrollment = if content.roster_is_full(platform.early_supporter_limit)
        || content.is_supporter(tipper)
    {
        Enrollment::Unchanged
    } else {
        Enrollment::Enrolled {
            position: content.early_supporters.len() as u16 + 1,
        }
    };

    // the running totals must also fit before anything is applied
    content
        .total_tips
        .checked_add(amount)
        .ok_or(ErrorCode::Overflow)?;
    content.tip_count.checked_add(1).ok_or(ErrorCode::Overflow)?;

    Ok(TipPlan { split, enrollment })
}
