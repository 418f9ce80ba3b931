use crate::classify::{classify_failure, rejection_code, FailureClass};
use crate::{ClientConfig, ClientError, ClientResult};
use backoff::future::retry;
use creator_economy_sdk::{
    build_create_creator_ledger_v0_ix, build_init_platform_v0_ix, build_publish_content_v0_ix,
    build_tip_content_v0_ix, check_owner, decode_content_record, decode_content_records,
    decode_creator_ledger, decode_platform, preview_tip, AddressFinder, ContentRecordV0,
    CreatorLedgerV0, PlatformV0, TipPlan, CONTENT_RECORD_CREATOR_OFFSET,
    CONTENT_RECORD_DISCRIMINATOR,
};
use solana_account_decoder_client_types::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{
    RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcSendTransactionConfig,
};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Result of a successful publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Published {
    pub signature: Signature,
    pub content_id: u64,
    pub content: Pubkey,
}

/// Sends creator economy instructions signed by a single keypair, which acts
/// as authority, creator or tipper depending on the call.
pub struct CreatorEconomyClient {
    rpc_client: Arc<RpcClient>,
    payer: Keypair,
    address_finder: AddressFinder,
    config: ClientConfig,
}

impl CreatorEconomyClient {
    pub fn new(rpc_client: Arc<RpcClient>, payer: Keypair) -> Self {
        Self::with_config(rpc_client, payer, ClientConfig::default())
    }

    pub fn with_config(rpc_client: Arc<RpcClient>, payer: Keypair, config: ClientConfig) -> Self {
        Self {
            rpc_client,
            payer,
            address_finder: AddressFinder::default(),
            config,
        }
    }

    /// Targets a program deployed under a different id.
    pub fn with_address_finder(mut self, address_finder: AddressFinder) -> Self {
        self.address_finder = address_finder;
        self
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    pub async fn init_platform(
        &self,
        treasury: Pubkey,
        early_supporter_limit: u16,
        early_supporter_rate_bps: u16,
        platform_fee_rate_bps: u16,
    ) -> ClientResult<Signature> {
        let (ix, _, _) = build_init_platform_v0_ix(
            &self.address_finder,
            self.payer.pubkey(),
            treasury,
            early_supporter_limit,
            early_supporter_rate_bps,
            platform_fee_rate_bps,
        )
        .map_err(|e| ClientError::Build(e.to_string()))?;

        let signature = self.send_instruction(ix).await?;
        info!(
            "Initialized platform: limit {}, supporter rate {} bps, fee {} bps",
            early_supporter_limit, early_supporter_rate_bps, platform_fee_rate_bps
        );
        Ok(signature)
    }

    pub async fn create_creator_ledger(&self) -> ClientResult<Signature> {
        let (ix, accounts, _) =
            build_create_creator_ledger_v0_ix(&self.address_finder, self.payer.pubkey())
                .map_err(|e| ClientError::Build(e.to_string()))?;

        let signature = self.send_instruction(ix).await?;
        info!("Creator ledger ready at {}", accounts.creator_ledger);
        Ok(signature)
    }

    /// Reads the platform counter to find the next content id. If another
    /// publish lands first the derived address goes stale and the program
    /// rejects the transaction; call again to pick up the new counter.
    pub async fn publish_content(
        &self,
        title: String,
        description: String,
    ) -> ClientResult<Published> {
        let platform = self.fetch_platform().await?;
        let content_id = platform.total_content_count;

        let (ix, accounts, _) = build_publish_content_v0_ix(
            &self.address_finder,
            self.payer.pubkey(),
            content_id,
            title,
            description,
        )
        .map_err(|e| ClientError::Build(e.to_string()))?;

        let signature = self.send_instruction(ix).await?;
        info!("Published content {} at {}", content_id, accounts.content);

        Ok(Published {
            signature,
            content_id,
            content: accounts.content,
        })
    }

    /// Tips the content, passing its current early supporters as recipients.
    /// The tip is checked locally first so an obviously invalid one never
    /// costs a transaction fee.
    pub async fn tip_content(&self, content_id: u64, amount: u64) -> ClientResult<Signature> {
        let platform = self.fetch_platform().await?;
        let content = self.fetch_content(content_id).await?;

        let plan = preview_tip(&platform, &content, &self.payer.pubkey(), amount)?;
        debug!("Tip plan for content {}: {:?}", content_id, plan);

        let (ix, _, _) = build_tip_content_v0_ix(
            &self.address_finder,
            self.payer.pubkey(),
            content.creator,
            platform.treasury,
            content_id,
            &content.early_supporters,
            amount,
        )
        .map_err(|e| ClientError::Build(e.to_string()))?;

        let signature = self.send_instruction(ix).await?;
        info!(
            "Tipped {} lamports on content {}: creator received {}",
            amount, content_id, plan.split.creator_share
        );
        Ok(signature)
    }

    /// The split a tip from this client's keypair would produce right now.
    pub async fn preview_tip(&self, content_id: u64, amount: u64) -> ClientResult<TipPlan> {
        let platform = self.fetch_platform().await?;
        let content = self.fetch_content(content_id).await?;
        Ok(preview_tip(&platform, &content, &self.payer.pubkey(), amount)?)
    }

    pub async fn fetch_platform(&self) -> ClientResult<PlatformV0> {
        let (address, _) = self.address_finder.find_platform_v0_address();
        let account = self.fetch_program_account(&address).await?;
        Ok(decode_platform(&account.data)?)
    }

    pub async fn fetch_creator_ledger(&self, creator: &Pubkey) -> ClientResult<CreatorLedgerV0> {
        let (address, _) = self.address_finder.find_creator_ledger_v0_address(creator);
        let account = self.fetch_program_account(&address).await?;
        Ok(decode_creator_ledger(&account.data)?)
    }

    pub async fn fetch_content(&self, content_id: u64) -> ClientResult<ContentRecordV0> {
        let (address, _) = self.address_finder.find_content_record_v0_address(content_id);
        let account = self.fetch_program_account(&address).await?;
        Ok(decode_content_record(&account.data)?)
    }

    /// Every content record, newest first.
    pub async fn fetch_all_contents(&self) -> ClientResult<Vec<ContentRecordV0>> {
        self.fetch_contents(None).await
    }

    /// Content published by `creator`, newest first.
    pub async fn fetch_contents_by_creator(
        &self,
        creator: &Pubkey,
    ) -> ClientResult<Vec<ContentRecordV0>> {
        self.fetch_contents(Some(creator)).await
    }

    async fn fetch_contents(&self, creator: Option<&Pubkey>) -> ClientResult<Vec<ContentRecordV0>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(content_filters(creator)),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.config.commitment),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };

        let accounts = self
            .rpc_client
            .get_program_accounts_with_config(&self.address_finder.program_id, config)
            .await?;
        debug!("Found {} content records", accounts.len());

        Ok(decode_content_records(
            accounts.iter().map(|(_, account)| account.data.as_slice()),
        )?)
    }

    async fn fetch_program_account(&self, address: &Pubkey) -> ClientResult<Account> {
        let account = self
            .rpc_client
            .get_account_with_commitment(address, self.config.commitment)
            .await?
            .value
            .ok_or(ClientError::AccountNotFound(*address))?;

        check_owner(address, &account.owner, &self.address_finder.program_id)?;
        Ok(account)
    }

    /// Signs and sends a single instruction, retrying transient failures.
    ///
    /// A signed transaction is rebroadcast unchanged for as long as its
    /// blockhash is valid, and is only re-signed with a fresh blockhash once
    /// the old one has expired without the transaction landing. Two distinct
    /// transactions for the same instruction are therefore never live at once.
    async fn send_instruction(&self, instruction: Instruction) -> ClientResult<Signature> {
        let backoff = self.config.retry_backoff.clone();
        let max_retries = self.config.max_retries;
        let commitment = self.config.commitment;
        let send_config = RpcSendTransactionConfig {
            skip_preflight: self.config.skip_preflight,
            preflight_commitment: Some(commitment.commitment),
            ..Default::default()
        };
        let payer = &self.payer;
        let rpc_client = &self.rpc_client;

        let attempts = Arc::new(Mutex::new(0usize));
        let pending: Arc<Mutex<Option<Transaction>>> = Arc::new(Mutex::new(None));

        let result = retry(backoff, || {
            let message = Message::new(&[instruction.clone()], Some(&payer.pubkey()));
            let attempts = attempts.clone();
            let pending = pending.clone();
            let send_config = send_config.clone();

            async move {
                let attempt = {
                    let mut attempts = attempts.lock().await;
                    *attempts += 1;
                    *attempts
                };

                let previous = pending.lock().await.clone();
                let transaction = match previous {
                    Some(previous) => {
                        let signature = first_signature(&previous);
                        match previous_outcome(rpc_client, &previous, commitment).await {
                            Resend::Settled(Ok(())) => {
                                info!("Earlier attempt {} landed", signature);
                                return Ok(signature);
                            }
                            Resend::Settled(Err(tx_err)) => {
                                return Err(backoff::Error::Permanent(
                                    match rejection_code(&tx_err) {
                                        Some(code) => ClientError::Rejected(code),
                                        None => ClientError::TransactionFailed(tx_err.to_string()),
                                    },
                                ));
                            }
                            Resend::Rebroadcast => {
                                debug!("Rebroadcasting {}", signature);
                                previous
                            }
                            Resend::Resign => {
                                debug!("{} expired without landing, signing again", signature);
                                sign(rpc_client, payer, message, attempt, max_retries).await?
                            }
                        }
                    }
                    None => sign(rpc_client, payer, message, attempt, max_retries).await?,
                };

                *pending.lock().await = Some(transaction.clone());

                match rpc_client
                    .send_and_confirm_transaction_with_spinner_and_config(
                        &transaction,
                        commitment,
                        send_config,
                    )
                    .await
                {
                    Ok(signature) => {
                        debug!("Transaction {} confirmed on attempt {}", signature, attempt);
                        Ok(signature)
                    }
                    Err(e) => {
                        warn!("Attempt {} failed: {}", attempt, e);
                        Err(transient_or_permanent(e, attempt, max_retries))
                    }
                }
            }
        })
        .await;

        result.map_err(|e| match e {
            ClientError::RpcClient(rpc_err) => ClientError::RetriesExhausted {
                retries: max_retries,
                last_error: rpc_err.to_string(),
            },
            other => other,
        })
    }
}

fn content_filters(creator: Option<&Pubkey>) -> Vec<RpcFilterType> {
    let mut filters = vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
        0,
        CONTENT_RECORD_DISCRIMINATOR,
    ))];
    if let Some(creator) = creator {
        filters.push(RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            CONTENT_RECORD_CREATOR_OFFSET,
            creator.as_ref(),
        )));
    }
    filters
}

/// What to do with a transaction an earlier attempt already sent.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resend {
    /// It was processed; its outcome is final.
    Settled(Result<(), TransactionError>),
    /// It may still land, so only the same signed transaction may be sent.
    Rebroadcast,
    /// Its blockhash expired before it landed; a new signature is safe.
    Resign,
}

/// `blockhash_valid` must be read before `status`: once the blockhash has
/// expired the transaction can no longer land, so a later "not found" is final.
fn resend_decision(
    blockhash_valid: bool,
    status: Option<Result<(), TransactionError>>,
) -> Resend {
    match status {
        Some(outcome) => Resend::Settled(outcome),
        None if blockhash_valid => Resend::Rebroadcast,
        None => Resend::Resign,
    }
}

async fn previous_outcome(
    rpc_client: &RpcClient,
    previous: &Transaction,
    commitment: CommitmentConfig,
) -> Resend {
    let signature = first_signature(previous);

    let blockhash_valid = match rpc_client
        .is_blockhash_valid(&previous.message.recent_blockhash, CommitmentConfig::processed())
        .await
    {
        Ok(valid) => valid,
        Err(e) => {
            warn!("Could not check blockhash of {}: {}", signature, e);
            true
        }
    };

    match rpc_client
        .get_signature_status_with_commitment_and_history(&signature, commitment, true)
        .await
    {
        Ok(status) => resend_decision(blockhash_valid, status),
        Err(e) => {
            warn!("Could not look up earlier attempt {}: {}", signature, e);
            Resend::Rebroadcast
        }
    }
}

async fn sign(
    rpc_client: &RpcClient,
    payer: &Keypair,
    message: Message,
    attempt: usize,
    max_retries: usize,
) -> Result<Transaction, backoff::Error<ClientError>> {
    let recent_blockhash = rpc_client
        .get_latest_blockhash()
        .await
        .map_err(|e| transient_or_permanent(e, attempt, max_retries))?;

    let mut transaction = Transaction::new_unsigned(message);
    transaction
        .try_sign(&[payer], recent_blockhash)
        .map_err(|e| backoff::Error::Permanent(ClientError::Signing(e.to_string())))?;

    Ok(transaction)
}

fn first_signature(transaction: &Transaction) -> Signature {
    transaction.signatures.first().copied().unwrap_or_default()
}

fn transient_or_permanent(
    err: solana_client::client_error::ClientError,
    attempt: usize,
    max_retries: usize,
) -> backoff::Error<ClientError> {
    match classify_failure(&err) {
        FailureClass::Rejected(code) => backoff::Error::Permanent(ClientError::Rejected(code)),
        FailureClass::Transient if attempt <= max_retries => backoff::Error::Transient {
            err: ClientError::RpcClient(err),
            retry_after: None,
        },
        FailureClass::Transient => backoff::Error::Permanent(ClientError::RetriesExhausted {
            retries: max_retries,
            last_error: err.to_string(),
        }),
        FailureClass::Permanent => backoff::Error::Permanent(ClientError::RpcClient(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creator_economy_sdk::ErrorCode;
    use solana_sdk::instruction::InstructionError;

    fn client() -> CreatorEconomyClient {
        let rpc_client = RpcClient::new("http://localhost:8899".to_string());
        CreatorEconomyClient::new(Arc::new(rpc_client), Keypair::new())
    }

    #[test]
    fn test_payer_pubkey() {
        let payer = Keypair::new();
        let expected = payer.pubkey();
        let client = CreatorEconomyClient::new(
            Arc::new(RpcClient::new("http://localhost:8899".to_string())),
            payer,
        );
        assert_eq!(client.payer_pubkey(), expected);
    }

    #[test]
    fn test_custom_address_finder() {
        let program_id = Pubkey::new_unique();
        let finder = AddressFinder::new(program_id, solana_sdk::system_program::ID);
        let client = client().with_address_finder(finder);
        assert_eq!(client.address_finder().program_id, program_id);
    }

    #[test]
    fn test_rejection_is_never_retried() {
        let err = solana_client::client_error::ClientError::from(
            TransactionError::InstructionError(
                0,
                InstructionError::Custom(ErrorCode::CannotTipSelf.custom_code()),
            ),
        );

        match transient_or_permanent(err, 1, 5) {
            backoff::Error::Permanent(ClientError::Rejected(code)) => {
                assert_eq!(code, ErrorCode::CannotTipSelf)
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_transient_until_retries_run_out() {
        let transient = || {
            solana_client::client_error::ClientError::from(TransactionError::BlockhashNotFound)
        };

        assert!(matches!(
            transient_or_permanent(transient(), 5, 5),
            backoff::Error::Transient { .. }
        ));
        assert!(matches!(
            transient_or_permanent(transient(), 6, 5),
            backoff::Error::Permanent(ClientError::RetriesExhausted { retries: 5, .. })
        ));
    }

    #[test]
    fn test_unconfirmed_transaction_is_rebroadcast_while_blockhash_is_valid() {
        assert_eq!(resend_decision(true, None), Resend::Rebroadcast);
    }

    #[test]
    fn test_expired_transaction_is_signed_again() {
        assert_eq!(resend_decision(false, None), Resend::Resign);
    }

    #[test]
    fn test_landed_transaction_is_never_resent() {
        assert_eq!(resend_decision(true, Some(Ok(()))), Resend::Settled(Ok(())));
        assert_eq!(resend_decision(false, Some(Ok(()))), Resend::Settled(Ok(())));

        let rejected = TransactionError::InstructionError(
            0,
            InstructionError::Custom(ErrorCode::TipTooSmall.custom_code()),
        );
        assert_eq!(
            resend_decision(false, Some(Err(rejected.clone()))),
            Resend::Settled(Err(rejected))
        );
    }

    #[test]
    fn test_content_filters() {
        let all = content_filters(None);
        assert_eq!(
            all,
            vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                0,
                CONTENT_RECORD_DISCRIMINATOR
            ))]
        );

        let creator = Pubkey::new_unique();
        let by_creator = content_filters(Some(&creator));
        assert_eq!(by_creator.len(), 2);
        assert_eq!(
            by_creator[1],
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(16, &creator.to_bytes()))
        );
    }
}
