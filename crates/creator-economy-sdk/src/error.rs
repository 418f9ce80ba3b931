use anchor_lang::prelude::Pubkey;
use creator_economy::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Account {address} is owned by {actual}, expected {expected}")]
    WrongOwner {
        address: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },

    #[error("Failed to decode {kind}: {reason}")]
    Decode { kind: &'static str, reason: String },

    #[error("Program would reject: {0}")]
    Rejected(ErrorCode),

    #[error("Anchor error: {0}")]
    Anchor(String),
}

impl SdkError {
    /// Maps an error raised by the program's pure logic back to its code.
    pub fn from_anchor(err: anchor_lang::error::Error) -> Self {
        let code = match &err {
            anchor_lang::error::Error::AnchorError(inner) => {
                ErrorCode::from_custom_code(inner.error_code_number)
            }
            anchor_lang::error::Error::ProgramError(_) => None,
        };

        match code {
            Some(code) => SdkError::Rejected(code),
            None => SdkError::Anchor(err.to_string()),
        }
    }
}

pub type SdkResult<T> = std::result::Result<T, SdkError>;
