/// Setup milestones, in order. [`crate::TestFixture::jump_to`] runs every
/// step between the current stage and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureStage {
    /// Program loaded and accounts funded; nothing on chain yet
    #[default]
    PlatformUninitialized,

    /// Platform record exists with the fixture's rates
    PlatformInitialized,

    /// The fixture creator has a ledger
    CreatorLedgerCreated,

    /// The fixture creator has published content id 0
    ContentPublished,
}

impl FixtureStage {
    pub fn all() -> &'static [FixtureStage] {
        &[
            FixtureStage::PlatformUninitialized,
            FixtureStage::PlatformInitialized,
            FixtureStage::CreatorLedgerCreated,
            FixtureStage::ContentPublished,
        ]
    }

    pub fn ord(&self) -> u8 {
        match self {
            FixtureStage::PlatformUninitialized => 0,
            FixtureStage::PlatformInitialized => 1,
            FixtureStage::CreatorLedgerCreated => 2,
            FixtureStage::ContentPublished => 3,
        }
    }
}

impl PartialOrd for FixtureStage {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixtureStage {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ord().cmp(&other.ord())
    }
}
