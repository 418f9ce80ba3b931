use creator_economy::{ErrorCode, MIN_TIP_AMOUNT};
use creator_economy_testing::{
    demand_creator_economy_error, FixtureStage, LedgerSnapshot, TestFixture,
};
use solana_signer::Signer as _;

/// Test a tip below the minimum → TipTooSmall, with no state change
#[test]
fn test_tip_too_small() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::ContentPublished);

    let fan = test.funded_keypair("frugal_fan");
    let before = LedgerSnapshot::capture_with_accounts(&test, 0, &[fan.pubkey()]);

    let result = test.try_tip_content(&fan, 0, MIN_TIP_AMOUNT - 1);
    demand_creator_economy_error(result, ErrorCode::TipTooSmall);

    let after = LedgerSnapshot::capture(&test, 0);
    assert_eq!(before.content, after.content);
    assert_eq!(before.creator_ledger, after.creator_ledger);
    assert_eq!(before.treasury_balance, after.treasury_balance);
    assert_eq!(before.creator_balance, after.creator_balance);

    test.try_tip_content(&fan, 0, MIN_TIP_AMOUNT)
        .expect("Exactly the minimum should be accepted");
}

/// Test a creator tipping their own content → CannotTipSelf
#[test]
fn test_tip_own_content() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::ContentPublished);

    let creator = test.state.creator.insecure_clone();
    let before = LedgerSnapshot::capture(&test, 0);

    let result = test.try_tip_content(&creator, 0, 10_000_000);
    demand_creator_economy_error(result, ErrorCode::CannotTipSelf);

    let after = LedgerSnapshot::capture(&test, 0);
    assert_eq!(before.content, after.content);
    assert_eq!(before.creator_ledger, after.creator_ledger);
    assert_eq!(before.treasury_balance, after.treasury_balance);
}
