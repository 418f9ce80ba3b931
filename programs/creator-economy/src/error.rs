use anchor_lang::{error::ERROR_CODE_OFFSET, prelude::*};

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    // configuration
    #[msg("Early supporter rate plus platform fee rate exceeds 10000 basis points.")]
    InvalidRateConfiguration,
    #[msg("The platform has already been initialized.")]
    AlreadyInitialized,
    #[msg("Early supporter limit must be between 1 and the maximum supported roster size.")]
    InvalidSupporterLimit,

    // input validation
    #[msg("Title exceeds the maximum length.")]
    TitleTooLong,
    #[msg("Description exceeds the maximum length.")]
    DescriptionTooLong,
    #[msg("Title and description must not be empty.")]
    EmptyField,
    #[msg("Tip amount is below the minimum.")]
    TipTooSmall,

    // business rules
    #[msg("Creators cannot tip their own content.")]
    CannotTipSelf,
    #[msg("Supplied supporter accounts do not match the stored early supporter roster.")]
    SupporterListMismatch,
    #[msg("Early supporter account must be writable to receive a payout.")]
    SupporterNotWritable,
    #[msg("Creator account does not match the content creator.")]
    CreatorMismatch,
    #[msg("Treasury account does not match the platform treasury.")]
    TreasuryMismatch,

    // arithmetic
    #[msg("A calculation resulted in a numeric overflow.")]
    Overflow,

    // codes are append-only
    #[msg("Treasury must hold at least the rent-exempt minimum before it can receive fees.")]
    TreasuryNotRentExempt,
}

impl ErrorCode {
    /// Every variant, in declaration order (index == discriminant).
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::InvalidRateConfiguration,
        ErrorCode::AlreadyInitialized,
        ErrorCode::InvalidSupporterLimit,
        ErrorCode::TitleTooLong,
        ErrorCode::DescriptionTooLong,
        ErrorCode::EmptyField,
        ErrorCode::TipTooSmall,
        ErrorCode::CannotTipSelf,
        ErrorCode::SupporterListMismatch,
        ErrorCode::SupporterNotWritable,
        ErrorCode::CreatorMismatch,
        ErrorCode::TreasuryMismatch,
        ErrorCode::Overflow,
        ErrorCode::TreasuryNotRentExempt,
    ];

    /// The `InstructionError::Custom` code the runtime reports for this error.
    pub fn custom_code(self) -> u32 {
        self as u32 + ERROR_CODE_OFFSET
    }

    /// Inverse of [`ErrorCode::custom_code`]. `None` for codes this program never raises.
    pub fn from_custom_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ERROR_CODE_OFFSET)?;
        Self::ALL.get(index as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (index, code) in ErrorCode::ALL.iter().enumerate() {
            assert_eq!(*code as u32, index as u32, "{code:?} is out of order");
        }
    }

    #[test]
    fn test_custom_code_round_trip() {
        assert_eq!(ErrorCode::InvalidRateConfiguration.custom_code(), 6000);
        assert_eq!(ErrorCode::Overflow.custom_code(), 6012);
        assert_eq!(ErrorCode::TreasuryNotRentExempt.custom_code(), 6013);

        let decoded = ErrorCode::from_custom_code(ErrorCode::CannotTipSelf.custom_code())
            .expect("code should decode");
        assert_eq!(decoded as u32, ErrorCode::CannotTipSelf as u32);
    }

    #[test]
    fn test_foreign_codes_do_not_decode() {
        // anchor framework errors (e.g. 3012 AccountNotInitialized) and system program errors
        assert!(ErrorCode::from_custom_code(0).is_none());
        assert!(ErrorCode::from_custom_code(3012).is_none());
        assert!(ErrorCode::from_custom_code(6000 + ErrorCode::ALL.len() as u32).is_none());
    }
}
