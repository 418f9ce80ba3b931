use crate::{SdkError, SdkResult};
use anchor_lang::prelude::Pubkey;
use creator_economy::distribution::{plan_tip, TipPlan};
use creator_economy::{ContentRecordV0, PlatformV0};

/// What a tip of `amount` from `tipper` would do right now, assuming the
/// recipients are supplied in roster order. Rejections come back as
/// [`SdkError::Rejected`] with the code the program would return.
pub fn preview_tip(
    platform: &PlatformV0,
    content: &ContentRecordV0,
    tipper: &Pubkey,
    amount: u64,
) -> SdkResult<TipPlan> {
    plan_tip(
        platform,
        content,
        tipper,
        amount,
        &content.early_supporters,
    )
    .map_err(SdkError::from_anchor)
}
