use crate::AddressFinder;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{prelude::*, InstructionData as _};

pub fn build_init_platform_v0_ix(
    address_finder: &AddressFinder,
    authority: Pubkey,
    treasury: Pubkey,
    early_supporter_limit: u16,
    early_supporter_rate_bps: u16,
    platform_fee_rate_bps: u16,
) -> Result<(
    Instruction,
    creator_economy::accounts::InitPlatformV0,
    creator_economy::instruction::InitPlatformV0,
)> {
    let (platform, _) = address_finder.find_platform_v0_address();

    let ix_accounts = creator_economy::accounts::InitPlatformV0 {
        authority,
        treasury,
        platform,
        system_program: address_finder.system_program_id,
    };

    let ix_data = creator_economy::instruction::InitPlatformV0 {
        early_supporter_limit,
        early_supporter_rate_bps,
        platform_fee_rate_bps,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_create_creator_ledger_v0_ix(
    address_finder: &AddressFinder,
    creator: Pubkey,
) -> Result<(
    Instruction,
    creator_economy::accounts::CreateCreatorLedgerV0,
    creator_economy::instruction::CreateCreatorLedgerV0,
)> {
    let (creator_ledger, _) = address_finder.find_creator_ledger_v0_address(&creator);

    let ix_accounts = creator_economy::accounts::CreateCreatorLedgerV0 {
        creator,
        creator_ledger,
        system_program: address_finder.system_program_id,
    };

    let ix_data = creator_economy::instruction::CreateCreatorLedgerV0 {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// `content_id` must be the platform's current `total_content_count`; the
/// program derives the new record's address from that counter.
pub fn build_publish_content_v0_ix(
    address_finder: &AddressFinder,
    creator: Pubkey,
    content_id: u64,
    title: String,
    description: String,
) -> Result<(
    Instruction,
    creator_economy::accounts::PublishContentV0,
    creator_economy::instruction::PublishContentV0,
)> {
    let (platform, _) = address_finder.find_platform_v0_address();
    let (creator_ledger, _) = address_finder.find_creator_ledger_v0_address(&creator);
    let (content, _) = address_finder.find_content_record_v0_address(content_id);

    let ix_accounts = creator_economy::accounts::PublishContentV0 {
        creator,
        platform,
        creator_ledger,
        content,
        system_program: address_finder.system_program_id,
    };

    let ix_data = creator_economy::instruction::PublishContentV0 { title, description };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

/// `supporters` are appended as writable remaining accounts in the order
/// given. Pass the content record's `early_supporters` unchanged.
pub fn build_tip_content_v0_ix(
    address_finder: &AddressFinder,
    tipper: Pubkey,
    creator: Pubkey,
    treasury: Pubkey,
    content_id: u64,
    supporters: &[Pubkey],
    amount: u64,
) -> Result<(
    Instruction,
    creator_economy::accounts::TipContentV0,
    creator_economy::instruction::TipContentV0,
)> {
    let (platform, _) = address_finder.find_platform_v0_address();
    let (content, _) = address_finder.find_content_record_v0_address(content_id);
    let (creator_ledger, _) = address_finder.find_creator_ledger_v0_address(&creator);

    let ix_accounts = creator_economy::accounts::TipContentV0 {
        tipper,
        creator,
        platform,
        content,
        creator_ledger,
        treasury,
        system_program: address_finder.system_program_id,
    };

    let ix_data = creator_economy::instruction::TipContentV0 { amount };

    let mut accounts = ix_accounts.to_account_metas(None);
    accounts.extend(
        supporters
            .iter()
            .map(|supporter| AccountMeta::new(*supporter, false)),
    );

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts,
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_platform_accounts() {
        let finder = AddressFinder::default();
        let authority = Pubkey::new_unique();
        let treasury = Pubkey::new_unique();

        let (ix, accounts, data) =
            build_init_platform_v0_ix(&finder, authority, treasury, 10, 1_000, 200).unwrap();

        assert_eq!(ix.program_id, creator_economy::ID);
        assert_eq!(accounts.platform, finder.find_platform_v0_address().0);
        assert_eq!(data.early_supporter_limit, 10);

        let authority_meta = &ix.accounts[0];
        assert_eq!(authority_meta.pubkey, authority);
        assert!(authority_meta.is_signer);
        assert!(authority_meta.is_writable);
    }

    #[test]
    fn test_publish_targets_counter_derived_address() {
        let finder = AddressFinder::default();
        let creator = Pubkey::new_unique();

        let (_, accounts, _) =
            build_publish_content_v0_ix(&finder, creator, 7, "t".into(), "d".into()).unwrap();

        assert_eq!(accounts.content, finder.find_content_record_v0_address(7).0);
        assert_eq!(
            accounts.creator_ledger,
            finder.find_creator_ledger_v0_address(&creator).0
        );
    }

    #[test]
    fn test_tip_appends_supporters_in_order() {
        let finder = AddressFinder::default();
        let supporters: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

        let (ix, accounts, _) = build_tip_content_v0_ix(
            &finder,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            &supporters,
            10_000_000,
        )
        .unwrap();

        let fixed = accounts.to_account_metas(None).len();
        assert_eq!(ix.accounts.len(), fixed + supporters.len());

        for (meta, supporter) in ix.accounts[fixed..].iter().zip(&supporters) {
            assert_eq!(meta.pubkey, *supporter);
            assert!(meta.is_writable);
            assert!(!meta.is_signer);
        }
    }
}
