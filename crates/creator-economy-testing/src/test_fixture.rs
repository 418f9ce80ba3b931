use {
    crate::{load_creator_economy, FixtureStage, FixtureState},
    anchor_lang::AccountDeserialize,
    creator_economy::{ContentRecordV0, CreatorLedgerV0, PlatformV0},
    creator_economy_sdk::{
        build_create_creator_ledger_v0_ix, build_init_platform_v0_ix, build_publish_content_v0_ix,
        build_tip_content_v0_ix,
    },
    litesvm::{
        types::{FailedTransactionMetadata, TransactionResult},
        LiteSVM,
    },
    solana_account::Account,
    solana_instruction::Instruction,
    solana_keypair::Keypair,
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_sdk::native_token::LAMPORTS_PER_SOL,
    solana_signer::Signer as _,
    solana_transaction::Transaction,
};

pub struct TestFixture {
    pub state: FixtureState,

    log_send_transaction_results: bool,
    svm: LiteSVM,
}

impl TestFixture {
    pub fn new(state: FixtureState, mut svm: LiteSVM) -> Result<Self, FailedTransactionMetadata> {
        load_creator_economy(&mut svm, state.program_id());

        svm.airdrop(&state.authority.pubkey(), LAMPORTS_PER_SOL * 10)?;
        svm.airdrop(&state.creator.pubkey(), LAMPORTS_PER_SOL * 10)?;
        // init_platform_v0 only accepts a rent-exempt treasury
        svm.airdrop(&state.treasury, LAMPORTS_PER_SOL)?;

        Ok(Self {
            state,
            svm,
            log_send_transaction_results: true,
        })
    }

    pub fn airdrop(&mut self, to: &Pubkey, amount: u64) {
        self.svm
            .airdrop(to, amount)
            .unwrap_or_else(|e| panic!("Failed to airdrop {amount} to {to}: {e:?}"));
    }

    /// Overwrites `address` with a plain system account holding `lamports`.
    pub fn set_balance(&mut self, address: &Pubkey, lamports: u64) {
        let account = Account {
            lamports,
            data: vec![],
            owner: solana_sdk::system_program::ID,
            executable: false,
            rent_epoch: 0,
        };
        self.svm
            .set_account(*address, account)
            .unwrap_or_else(|e| panic!("Failed to set balance of {address}: {e:?}"));
    }

    pub fn rent_exempt_minimum(&self, data_len: usize) -> u64 {
        self.svm.minimum_balance_for_rent_exemption(data_len)
    }

    /// A keypair derived from `label`, funded with 10 SOL.
    pub fn funded_keypair(&mut self, label: &str) -> Keypair {
        let keypair = crate::deterministic_keypair(label);
        self.airdrop(&keypair.pubkey(), LAMPORTS_PER_SOL * 10);
        keypair
    }

    pub fn latest_blockhash(&self) -> solana_sdk::hash::Hash {
        self.svm.latest_blockhash()
    }

    pub fn disable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = false;
    }

    pub fn enable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = true;
    }

    pub fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        signer: &Keypair,
    ) -> TransactionResult {
        let tx = Transaction::new(
            &[signer],
            Message::new(instructions, Some(&signer.pubkey())),
            self.latest_blockhash(),
        );

        self.send_transaction(tx)
    }

    /// Sends `tx`, prints its logs if enabled, then expires the blockhash so
    /// an identical follow-up transaction is not rejected as a duplicate.
    pub fn send_transaction(&mut self, tx: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(tx);
        self.svm.expire_blockhash();

        if self.log_send_transaction_results {
            match &result {
                Ok(meta) => {
                    println!("=== Transaction Logs (Success) ===");
                    for (i, log) in meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("=== End Logs ===\n");
                }
                Err(failed_meta) => {
                    println!("=== Transaction Logs (Failed) ===");
                    for (i, log) in failed_meta.meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("Error: {:?}", failed_meta.err);
                    println!("=== End Logs ===\n");
                }
            }
        }

        result
    }

    pub fn jump_to(&mut self, target_stage: FixtureStage) {
        let current_stage = self.state.stage;
        let stages_to_step = FixtureStage::all()
            .iter()
            .copied()
            .filter(|s| *s > current_stage && *s <= target_stage)
            .collect::<Vec<_>>();

        for stage in stages_to_step {
            self.step_to(stage);
        }
    }

    pub fn step_to(&mut self, stage: FixtureStage) {
        let creator = self.state.creator.insecure_clone();
        match stage {
            FixtureStage::PlatformUninitialized => return,
            FixtureStage::PlatformInitialized => self.try_init_platform(),
            FixtureStage::CreatorLedgerCreated => self.try_create_creator_ledger(&creator),
            FixtureStage::ContentPublished => {
                let title = self.state.title.clone();
                let description = self.state.description.clone();
                self.try_publish_content(&creator, &title, &description)
            }
        }
        .unwrap_or_else(|e| panic!("Failed to advance to {:?}: {:?}", stage, e));

        self.state.stage = stage;
    }

    pub fn try_init_platform(&mut self) -> TransactionResult {
        let authority = self.state.authority.insecure_clone();
        self.try_init_platform_with_args(
            &authority,
            self.state.treasury,
            self.state.early_supporter_limit,
            self.state.early_supporter_rate_bps,
            self.state.platform_fee_rate_bps,
        )
    }

    pub fn try_init_platform_with_args(
        &mut self,
        authority: &Keypair,
        treasury: Pubkey,
        early_supporter_limit: u16,
        early_supporter_rate_bps: u16,
        platform_fee_rate_bps: u16,
    ) -> TransactionResult {
        let (ix, _, _) = build_init_platform_v0_ix(
            &self.state.address_finder,
            authority.pubkey(),
            treasury,
            early_supporter_limit,
            early_supporter_rate_bps,
            platform_fee_rate_bps,
        )
        .expect("Failed to build init platform v0 ix");

        self.send_instructions(&[ix], authority)
    }

    pub fn try_create_creator_ledger(&mut self, creator: &Keypair) -> TransactionResult {
        let (ix, _, _) = build_create_creator_ledger_v0_ix(&self.state.address_finder, creator.pubkey())
            .expect("Failed to build create creator ledger v0 ix");

        self.send_instructions(&[ix], creator)
    }

    /// Publishes under the id the platform counter currently points at.
    pub fn try_publish_content(
        &mut self,
        creator: &Keypair,
        title: &str,
        description: &str,
    ) -> TransactionResult {
        let content_id = self
            .fetch_platform_account()
            .map(|p| p.total_content_count)
            .unwrap_or(0);

        self.try_publish_content_with_id(creator, content_id, title, description)
    }

    pub fn try_publish_content_with_id(
        &mut self,
        creator: &Keypair,
        content_id: u64,
        title: &str,
        description: &str,
    ) -> TransactionResult {
        let (ix, _, _) = build_publish_content_v0_ix(
            &self.state.address_finder,
            creator.pubkey(),
            content_id,
            title.to_string(),
            description.to_string(),
        )
        .expect("Failed to build publish content v0 ix");

        self.send_instructions(&[ix], creator)
    }

    /// Tips with the content's current roster, in order, as the supporter
    /// accounts.
    pub fn try_tip_content(
        &mut self,
        tipper: &Keypair,
        content_id: u64,
        amount: u64,
    ) -> TransactionResult {
        let supporters = self
            .fetch_content_account(content_id)
            .map(|c| c.early_supporters)
            .unwrap_or_default();

        self.try_tip_content_with_supporters(tipper, content_id, amount, &supporters)
    }

    pub fn try_tip_content_with_supporters(
        &mut self,
        tipper: &Keypair,
        content_id: u64,
        amount: u64,
        supporters: &[Pubkey],
    ) -> TransactionResult {
        let ix = self.build_tip_ix(tipper, content_id, amount, supporters);
        self.send_instructions(&[ix], tipper)
    }

    /// Builds the tip instruction against on-chain state so tests can tamper
    /// with individual account metas before sending.
    pub fn build_tip_ix(
        &self,
        tipper: &Keypair,
        content_id: u64,
        amount: u64,
        supporters: &[Pubkey],
    ) -> Instruction {
        let creator = self
            .fetch_content_account(content_id)
            .map(|c| c.creator)
            .unwrap_or_else(|| self.state.creator.pubkey());
        let treasury = self
            .fetch_platform_account()
            .map(|p| p.treasury)
            .unwrap_or(self.state.treasury);

        let (ix, _, _) = build_tip_content_v0_ix(
            &self.state.address_finder,
            tipper.pubkey(),
            creator,
            treasury,
            content_id,
            supporters,
            amount,
        )
        .expect("Failed to build tip content v0 ix");

        ix
    }

    pub fn fetch_account(&self, address: &Pubkey) -> Option<Account> {
        self.svm.get_account(address)
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or(0)
    }

    pub fn fetch_platform_account(&self) -> Option<PlatformV0> {
        self.fetch_account(&self.state.platform_address())
            .and_then(|a| PlatformV0::try_deserialize(&mut &a.data[..]).ok())
    }

    pub fn fetch_creator_ledger_account(&self, creator: &Pubkey) -> Option<CreatorLedgerV0> {
        self.fetch_account(&self.state.creator_ledger_address(creator))
            .and_then(|a| CreatorLedgerV0::try_deserialize(&mut &a.data[..]).ok())
    }

    pub fn fetch_content_account(&self, content_id: u64) -> Option<ContentRecordV0> {
        self.fetch_account(&self.state.content_address(content_id))
            .and_then(|a| ContentRecordV0::try_deserialize(&mut &a.data[..]).ok())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new(FixtureState::default(), LiteSVM::new())
            .expect("Failed to create default test fixture")
    }
}
