use creator_economy_testing::{FixtureStage, TestFixture};
use solana_signer::Signer as _;

/// Test publishing assigns dense ids from the platform counter
///
/// Ids are global across creators, and each creator's ledger counts only
/// their own content.
#[test]
fn test_publish_assigns_sequential_ids() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::ContentPublished);

    let creator = test.state.creator.insecure_clone();
    let other_creator = test.funded_keypair("other_creator");

    test.try_publish_content(&other_creator, "Second", "Published by someone else")
        .expect("Second publish should succeed");
    test.try_publish_content(&creator, "Third", "Back to the fixture creator")
        .expect("Third publish should succeed");

    let platform = test.fetch_platform_account().unwrap();
    assert_eq!(platform.total_content_count, 3);

    for (content_id, expected_creator, title) in [
        (0, creator.pubkey(), test.state.title.clone()),
        (1, other_creator.pubkey(), "Second".to_string()),
        (2, creator.pubkey(), "Third".to_string()),
    ] {
        let content = test
            .fetch_content_account(content_id)
            .unwrap_or_else(|| panic!("Content {content_id} should exist"));
        assert_eq!(content.content_id, content_id);
        assert_eq!(content.creator, expected_creator);
        assert_eq!(content.title, title);
        assert_eq!(content.total_tips, 0);
        assert_eq!(content.tip_count, 0);
        assert!(content.early_supporters.is_empty());
    }

    let creator_ledger = test.fetch_creator_ledger_account(&creator.pubkey()).unwrap();
    let other_ledger = test
        .fetch_creator_ledger_account(&other_creator.pubkey())
        .unwrap();
    assert_eq!(creator_ledger.content_count, 2);
    assert_eq!(other_ledger.content_count, 1);

    println!("✅ Ids 0, 1, 2 assigned in publish order");
}

/// Test publishing without a ledger creates one on the fly
#[test]
fn test_publish_creates_missing_ledger() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::PlatformInitialized);

    let newcomer = test.funded_keypair("newcomer");
    assert!(test.fetch_creator_ledger_account(&newcomer.pubkey()).is_none());

    test.try_publish_content(&newcomer, "Debut", "First upload")
        .expect("Publish should create the ledger");

    let ledger = test
        .fetch_creator_ledger_account(&newcomer.pubkey())
        .expect("Ledger should have been created");
    assert_eq!(ledger.creator, newcomer.pubkey());
    assert_eq!(ledger.content_count, 1);
    assert_eq!(ledger.total_earnings, 0);
}

/// Test the longest allowed multi-byte title fits the record
#[test]
fn test_publish_max_length_multibyte_title() {
    let mut test = TestFixture::default();
    test.jump_to(FixtureStage::CreatorLedgerCreated);

    let creator = test.state.creator.insecure_clone();
    let title = "音".repeat(100);

    test.try_publish_content(&creator, &title, "Soundscapes")
        .expect("100 characters is within the title limit");

    let content = test.fetch_content_account(0).unwrap();
    assert_eq!(content.title.chars().count(), 100);
    assert_eq!(content.title, title);
}
