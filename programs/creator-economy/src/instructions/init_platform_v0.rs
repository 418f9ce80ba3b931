use crate::constants::{BPS_DENOMINATOR, MAX_EARLY_SUPPORTER_LIMIT, PLATFORM_V0_SEED_PREFIX};
use crate::error::ErrorCode;
use crate::events::PlatformInitialized;
use crate::state::PlatformV0;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitPlatformV0<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: any account may receive fees as long as it is already rent
    /// exempt; its address is recorded and enforced on every tip.
    pub treasury: UncheckedAccount<'info>,

    // init_if_needed so a second call reaches the handler and fails with
    // AlreadyInitialized instead of a system program error
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + PlatformV0::INIT_SPACE,
        seeds = [PLATFORM_V0_SEED_PREFIX],
        bump
    )]
    pub platform: Account<'info, PlatformV0>,

    pub system_program: Program<'info, System>,
}

pub fn validate_platform_config(
    early_supporter_limit: u16,
    early_supporter_rate_bps: u16,
    platform_fee_rate_bps: u16,
) -> Result<()> {
    require!(
        early_supporter_limit > 0 && early_supporter_limit <= MAX_EARLY_SUPPORTER_LIMIT,
        ErrorCode::InvalidSupporterLimit
    );

    let total_bps = early_supporter_rate_bps as u64 + platform_fee_rate_bps as u64;
    require!(
        total_bps <= BPS_DENOMINATOR,
        ErrorCode::InvalidRateConfiguration
    );

    Ok(())
}

pub fn handle_init_platform_v0(
    ctx: Context<InitPlatformV0>,
    early_supporter_limit: u16,
    early_supporter_rate_bps: u16,
    platform_fee_rate_bps: u16,
) -> Result<()> {
    require!(
        !ctx.accounts.platform.is_initialized(),
        ErrorCode::AlreadyInitialized
    );

    validate_platform_config(
        early_supporter_limit,
        early_supporter_rate_bps,
        platform_fee_rate_bps,
    )?;

    // A fee smaller than the rent-exempt minimum cannot be the first deposit.
    let treasury = &ctx.accounts.treasury;
    require!(
        !treasury.executable
            && Rent::get()?.is_exempt(treasury.lamports(), treasury.data_len()),
        ErrorCode::TreasuryNotRentExempt
    );

    let platform = &mut ctx.accounts.platform;
    platform.set_inner(PlatformV0 {
        authority: ctx.accounts.authority.key(),
        treasury: ctx.accounts.treasury.key(),
        total_content_count: 0, // Incremented by every publish
        early_supporter_limit,
        early_supporter_rate_bps,
        platform_fee_rate_bps,
        bump: ctx.bumps.platform,
    });

    msg!(
        "Platform initialized: limit {}, supporter rate {} bps, fee rate {} bps",
        early_supporter_limit,
        early_supporter_rate_bps,
        platform_fee_rate_bps
    );

    emit!(PlatformInitialized {
        platform: platform.key(),
        authority: platform.authority,
        treasury: platform.treasury,
        early_supporter_limit,
        early_supporter_rate_bps,
        platform_fee_rate_bps,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code_of(result: Result<()>) -> u32 {
        match result.expect_err("expected an error") {
            anchor_lang::error::Error::AnchorError(err) => err.error_code_number,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_default_config() {
        assert!(validate_platform_config(10, 1_000, 200).is_ok());
        assert!(validate_platform_config(MAX_EARLY_SUPPORTER_LIMIT, 5_000, 5_000).is_ok());
    }

    #[test]
    fn test_rejects_rates_above_denominator() {
        assert_eq!(
            error_code_of(validate_platform_config(10, 9_000, 1_001)),
            ErrorCode::InvalidRateConfiguration.custom_code()
        );
        assert_eq!(
            error_code_of(validate_platform_config(10, u16::MAX, u16::MAX)),
            ErrorCode::InvalidRateConfiguration.custom_code()
        );
    }

    #[test]
    fn test_rejects_out_of_range_limit() {
        assert_eq!(
            error_code_of(validate_platform_config(0, 1_000, 200)),
            ErrorCode::InvalidSupporterLimit.custom_code()
        );
        assert_eq!(
            error_code_of(validate_platform_config(MAX_EARLY_SUPPORTER_LIMIT + 1, 1_000, 200)),
            ErrorCode::InvalidSupporterLimit.custom_code()
        );
    }
}
