use creator_economy_testing::{FixtureStage, LedgerSnapshot, TestFixture};
use creator_economy::MIN_TIP_AMOUNT;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer as _;

fn fill_roster(test: &mut TestFixture, limit: u16) -> Vec<Keypair> {
    let supporters: Vec<Keypair> = (0..limit)
        .map(|i| test.funded_keypair(&format!("early_supporter_{i}")))
        .collect();

    for supporter in &supporters {
        test.try_tip_content(supporter, 0, MIN_TIP_AMOUNT)
            .expect("Filling tip should succeed");
    }

    supporters
}

/// Test a tip once the roster is full pays every early supporter
///
/// 10_000_000 lamports with 10 supporters:
/// - treasury receives 200_000
/// - each supporter receives 100_000
/// - creator receives 8_800_000
/// - the late tipper is not enrolled
#[test]
fn test_tip_full_roster() {
    println!("🧪 Testing tip on content with a full roster...");

    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::ContentPublished);
    test.disable_send_transaction_logging();

    let supporters = fill_roster(&mut test, 10);
    let roster: Vec<Pubkey> = supporters.iter().map(|s| s.pubkey()).collect();

    let content = test.fetch_content_account(0).unwrap();
    assert_eq!(content.early_supporters, roster, "Roster should be in tip order");
    assert_eq!(content.tip_count, 10);

    let late_fan = test.funded_keypair("late_fan");
    let before = LedgerSnapshot::capture(&test, 0);

    test.enable_send_transaction_logging();
    test.try_tip_content(&late_fan, 0, 10_000_000)
        .expect("Tip on full roster should succeed");

    let after = LedgerSnapshot::capture(&test, 0);

    assert_eq!(before.treasury_delta(&after), 200_000);
    assert_eq!(before.creator_delta(&after), 8_800_000);
    assert_eq!(before.creator_earnings_delta(&after), 8_800_000);
    for supporter in &roster {
        assert_eq!(
            before.tracked_delta(&after, supporter),
            100_000,
            "Supporter {supporter} should receive an equal share"
        );
    }

    let content = after.content.as_ref().unwrap();
    assert_eq!(content.early_supporters, roster, "Late tipper must not be enrolled");
    assert_eq!(content.tip_count, 11);
    assert_eq!(content.total_tips, 10 * MIN_TIP_AMOUNT + 10_000_000);

    println!("✅ 10 supporters received 100_000 each, creator 8_800_000");
}

/// Test the tips that fill the roster withhold the supporter pool
///
/// Limit 3: the third tip still sees two supporters before it lands, so the
/// pool stays with the creator. The fourth tip is the first to pay out.
#[test]
fn test_tip_pool_withheld_until_full() {
    use creator_economy_testing::FixtureState;
    use litesvm::LiteSVM;

    let state = FixtureState {
        early_supporter_limit: 3,
        ..Default::default()
    };
    let mut test = TestFixture::new(state, LiteSVM::new()).expect("Fixture should build");
    test.jump_to(FixtureStage::ContentPublished);

    let amount = 3_000_000;

    for i in 0..3 {
        let tipper = test.funded_keypair(&format!("filler_{i}"));
        let before = LedgerSnapshot::capture(&test, 0);
        test.try_tip_content(&tipper, 0, amount).expect("tip");
        let after = LedgerSnapshot::capture(&test, 0);

        // 2% fee, no pool
        assert_eq!(before.creator_delta(&after), 2_940_000, "tip {i}");
    }

    let tipper = test.funded_keypair("first_paying_tip");
    let before = LedgerSnapshot::capture(&test, 0);
    test.try_tip_content(&tipper, 0, amount).expect("tip");
    let after = LedgerSnapshot::capture(&test, 0);

    // pool 300_000 / 3 = 100_000 each
    assert_eq!(before.treasury_delta(&after), 60_000);
    assert_eq!(before.creator_delta(&after), 2_640_000);
    for supporter in &after.content.as_ref().unwrap().early_supporters {
        assert_eq!(before.tracked_delta(&after, supporter), 100_000);
    }
}

/// Test the pool remainder goes to the creator
///
/// 1_234_567 lamports: fee 24_691, pool 123_456 → 12_345 each, remainder 6.
#[test]
fn test_tip_remainder_goes_to_creator() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::ContentPublished);
    test.disable_send_transaction_logging();
    fill_roster(&mut test, 10);

    let fan = test.funded_keypair("odd_amount_fan");
    let before = LedgerSnapshot::capture(&test, 0);
    test.try_tip_content(&fan, 0, 1_234_567).expect("tip");
    let after = LedgerSnapshot::capture(&test, 0);

    let supporter_total: i128 = after
        .content
        .as_ref()
        .unwrap()
        .early_supporters
        .iter()
        .map(|s| before.tracked_delta(&after, s))
        .sum();

    assert_eq!(before.treasury_delta(&after), 24_691);
    assert_eq!(supporter_total, 123_450);
    assert_eq!(before.creator_delta(&after), 1_086_426);
    assert_eq!(
        before.treasury_delta(&after) + supporter_total + before.creator_delta(&after),
        1_234_567,
        "Every lamport of the tip must be paid out"
    );
}
