use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use creator_economy::{
    ContentRecordV0, CONTENT_RECORD_V0_SEED_PREFIX, CREATOR_LEDGER_V0_SEED_PREFIX,
    ID as CREATOR_ECONOMY_PROGRAM_ID, PLATFORM_V0_SEED_PREFIX,
};

/// Derives every program address from a namespace tag plus seed bytes.
/// Any party can reproduce these without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFinder {
    pub program_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, system_program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id,
        }
    }

    pub fn find_platform_v0_address(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PLATFORM_V0_SEED_PREFIX], &self.program_id)
    }

    pub fn find_creator_ledger_v0_address(&self, creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[CREATOR_LEDGER_V0_SEED_PREFIX, creator.as_ref()],
            &self.program_id,
        )
    }

    pub fn find_content_record_v0_address(&self, content_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                CONTENT_RECORD_V0_SEED_PREFIX,
                ContentRecordV0::id_seed(content_id).as_ref(),
            ],
            &self.program_id,
        )
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(CREATOR_ECONOMY_PROGRAM_ID, SYSTEM_PROGRAM_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_deterministic() {
        let finder = AddressFinder::default();
        let creator = Pubkey::new_unique();

        assert_eq!(
            finder.find_platform_v0_address(),
            finder.find_platform_v0_address()
        );
        assert_eq!(
            finder.find_creator_ledger_v0_address(&creator),
            AddressFinder::default().find_creator_ledger_v0_address(&creator)
        );
        assert_eq!(
            finder.find_content_record_v0_address(3),
            finder.find_content_record_v0_address(3)
        );
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let finder = AddressFinder::default();
        let (platform, _) = finder.find_platform_v0_address();
        let (content_0, _) = finder.find_content_record_v0_address(0);
        let (content_1, _) = finder.find_content_record_v0_address(1);
        let (ledger, _) = finder.find_creator_ledger_v0_address(&Pubkey::new_unique());

        assert_ne!(platform, content_0);
        assert_ne!(content_0, content_1);
        assert_ne!(ledger, platform);
        assert_ne!(ledger, content_0);
    }

    #[test]
    fn test_address_depends_on_program_id() {
        let other = AddressFinder::new(Pubkey::new_unique(), SYSTEM_PROGRAM_ID);
        assert_ne!(
            AddressFinder::default().find_platform_v0_address().0,
            other.find_platform_v0_address().0
        );
    }

    #[test]
    fn test_derived_address_verifies_with_bump() {
        let finder = AddressFinder::default();
        let (address, bump) = finder.find_content_record_v0_address(42);

        let recreated = Pubkey::create_program_address(
            &[
                CONTENT_RECORD_V0_SEED_PREFIX,
                &42u64.to_le_bytes(),
                &[bump],
            ],
            &finder.program_id,
        )
        .expect("bump should produce an off-curve address");

        assert_eq!(recreated, address);
    }
}
