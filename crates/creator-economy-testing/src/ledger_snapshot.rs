use std::collections::BTreeMap;

use creator_economy::{ContentRecordV0, CreatorLedgerV0, PlatformV0};
use solana_pubkey::Pubkey;
use solana_signer::Signer as _;

use crate::TestFixture;

/// Program records for one piece of content plus the lamport balances of
/// every account a tip on it can pay. Compare two captures to prove a
/// rejected instruction left everything untouched, or to read off the exact
/// amount each recipient received.
///
/// The tipper is never tracked: it pays transaction fees either way.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub platform: Option<PlatformV0>,
    pub content: Option<ContentRecordV0>,
    pub creator_ledger: Option<CreatorLedgerV0>,
    pub treasury_balance: u64,
    pub creator_balance: u64,
    pub tracked_balances: BTreeMap<Pubkey, u64>,
}

impl LedgerSnapshot {
    /// Captures the platform, `content_id`'s record and its creator's ledger,
    /// tracking the treasury, the creator and every early supporter.
    pub fn capture(test: &TestFixture, content_id: u64) -> Self {
        Self::capture_with_accounts(test, content_id, &[])
    }

    /// Like [`LedgerSnapshot::capture`], additionally tracking `extra` balances.
    pub fn capture_with_accounts(test: &TestFixture, content_id: u64, extra: &[Pubkey]) -> Self {
        let platform = test.fetch_platform_account();
        let content = test.fetch_content_account(content_id);

        let creator = content
            .as_ref()
            .map(|c| c.creator)
            .unwrap_or_else(|| test.state.creator.pubkey());
        let treasury = platform
            .as_ref()
            .map(|p| p.treasury)
            .unwrap_or(test.state.treasury);

        let mut tracked_balances = BTreeMap::new();
        let supporters = content
            .as_ref()
            .map(|c| c.early_supporters.clone())
            .unwrap_or_default();
        for address in supporters.iter().chain(extra) {
            tracked_balances.insert(*address, test.balance(address));
        }

        Self {
            creator_ledger: test.fetch_creator_ledger_account(&creator),
            treasury_balance: test.balance(&treasury),
            creator_balance: test.balance(&creator),
            platform,
            content,
            tracked_balances,
        }
    }

    pub fn tracked_balance(&self, address: &Pubkey) -> u64 {
        self.tracked_balances.get(address).copied().unwrap_or(0)
    }

    /// Lamports gained by `address` between `self` and `after`.
    pub fn tracked_delta(&self, after: &Self, address: &Pubkey) -> i128 {
        after.tracked_balance(address) as i128 - self.tracked_balance(address) as i128
    }

    pub fn treasury_delta(&self, after: &Self) -> i128 {
        after.treasury_balance as i128 - self.treasury_balance as i128
    }

    pub fn creator_delta(&self, after: &Self) -> i128 {
        after.creator_balance as i128 - self.creator_balance as i128
    }

    pub fn creator_earnings_delta(&self, after: &Self) -> i128 {
        let earnings = |s: &Self| {
            s.creator_ledger
                .as_ref()
                .map(|l| l.total_earnings)
                .unwrap_or(0) as i128
        };
        earnings(after) - earnings(self)
    }
}
