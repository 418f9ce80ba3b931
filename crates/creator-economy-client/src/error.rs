use creator_economy_sdk::{ErrorCode, SdkError};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC client error: {0}")]
    RpcClient(#[from] solana_client::client_error::ClientError),

    /// The program ran and refused the instruction. Never retried.
    #[error("Rejected by program: {0} ({code})", code = .0.custom_code())]
    Rejected(ErrorCode),

    #[error("Transaction failed after {retries} retries: {last_error}")]
    RetriesExhausted { retries: usize, last_error: String },

    #[error("Transaction landed but failed: {0}")]
    TransactionFailed(String),

    #[error("Failed to build instruction: {0}")]
    Build(String),

    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error(transparent)]
    Sdk(#[from] SdkError),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
