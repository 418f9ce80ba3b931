mod fixture_stage;
mod fixture_state;
mod ledger_snapshot;
mod test_fixture;

pub use fixture_stage::FixtureStage;
pub use fixture_state::FixtureState;
pub use ledger_snapshot::LedgerSnapshot;
pub use test_fixture::TestFixture;

use creator_economy::ErrorCode;
use litesvm::{types::TransactionResult, LiteSVM};
use sha2::Digest as _;
use solana_instruction::error::InstructionError;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_sdk::signature::SeedDerivable as _;
use solana_signer::Signer as _;
use solana_transaction_error::TransactionError;

/// Anchor framework error codes the program can surface through account validation.
pub const ANCHOR_CONSTRAINT_SEEDS: u32 = 2006;
pub const ANCHOR_ACCOUNT_NOT_INITIALIZED: u32 = 3012;

pub fn load_creator_economy(svm: &mut LiteSVM, program_id: Pubkey) {
    let program_path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/deploy/creator_economy.so"
    );
    svm.add_program_from_file(program_id, program_path)
        .unwrap_or_else(|e| panic!("Failed to load {program_path}: {e}"));
}

/// Same label, same keypair, on every run.
pub fn deterministic_keypair(identifier: &str) -> Keypair {
    let seed = sha2::Sha256::digest(identifier.as_bytes());
    Keypair::from_seed(&seed).expect("SHA256 output should always be valid seed")
}

pub fn deterministic_pubkey(identifier: &str) -> Pubkey {
    deterministic_keypair(identifier).pubkey()
}

/// Panics unless `result` failed with `InstructionError::Custom(expected_code)`.
pub fn demand_custom_error(result: TransactionResult, expected_code: u32, name: &str) {
    match result {
        Ok(_) => panic!("❌ Expected {name} ({expected_code}) but the transaction succeeded"),
        Err(failed_meta) => match failed_meta.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                assert_eq!(
                    code, expected_code,
                    "Expected {name} ({expected_code}), got custom error {code}"
                );
                println!("✅ Failed with {name} ({code})");
            }
            other => panic!("Expected {name} ({expected_code}), got: {other:?}"),
        },
    }
}

pub fn demand_creator_economy_error(result: TransactionResult, expected: ErrorCode) {
    demand_custom_error(result, expected.custom_code(), &format!("{expected:?}"));
}
