use creator_economy_testing::{FixtureStage, TestFixture};
use solana_signer::Signer as _;

/// Test platform initialization stores the configuration and zeroed counter
#[test]
fn test_init_platform_success() {
    let mut test = TestFixture::default();

    test.jump_to(FixtureStage::PlatformInitialized);

    let platform = test
        .fetch_platform_account()
        .expect("Platform should exist after initialization");

    assert_eq!(platform.authority, test.state.authority.pubkey());
    assert_eq!(platform.treasury, test.state.treasury);
    assert_eq!(platform.total_content_count, 0);
    assert_eq!(platform.early_supporter_limit, 10);
    assert_eq!(platform.early_supporter_rate_bps, 1_000);
    assert_eq!(platform.platform_fee_rate_bps, 200);

    println!("✅ Platform initialized with limit 10, supporter rate 1000 bps, fee 200 bps");
}
