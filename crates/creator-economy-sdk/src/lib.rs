//! Off-chain helpers for the creator economy program: address derivation,
//! instruction builders, account decoding and tip previews.

mod account_decoding;
mod address_finder;
mod error;
mod instruction_builders;
mod tip_preview;

pub use account_decoding::*;
pub use address_finder::AddressFinder;
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use tip_preview::preview_tip;

pub use creator_economy::distribution::{Enrollment, TipPlan, TipSplit};
pub use creator_economy::state::*;
pub use creator_economy::ErrorCode;

// Re-export program ID
pub use creator_economy::ID as PROGRAM_ID;
