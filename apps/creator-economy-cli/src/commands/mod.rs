pub mod create_ledger;
pub mod init_platform;
pub mod list_content;
pub mod preview_tip;
pub mod publish;
pub mod show_content;
pub mod show_creator;
pub mod show_platform;
pub mod tip;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use creator_economy_client::{ClientConfig, CreatorEconomyClient};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Settings shared by every subcommand. Clients are built on demand so
/// read-only commands work without a keypair file.
pub struct CommandContext {
    config: CliConfig,
    client_config: ClientConfig,
}

impl CommandContext {
    pub fn new(config: CliConfig) -> CliResult<Self> {
        let client_config = ClientConfig {
            max_retries: config.max_retries,
            commitment: config.commitment_config()?,
            ..Default::default()
        };
        debug!("Using {:?}", config);

        Ok(Self {
            config,
            client_config,
        })
    }

    fn rpc_client(&self) -> Arc<RpcClient> {
        Arc::new(RpcClient::new_with_commitment(
            self.config.rpc_url.clone(),
            self.client_config.commitment,
        ))
    }

    pub fn signing_client(&self) -> CliResult<CreatorEconomyClient> {
        let keypair = read_keypair_file(&self.config.keypair_path).map_err(|e| {
            CliError::InvalidConfig(format!(
                "Failed to read keypair {}: {}",
                self.config.keypair_path.display(),
                e
            ))
        })?;

        Ok(CreatorEconomyClient::with_config(
            self.rpc_client(),
            keypair,
            self.client_config.clone(),
        ))
    }

    /// A client for account reads only; its keypair never signs anything.
    pub fn read_only_client(&self) -> CreatorEconomyClient {
        CreatorEconomyClient::with_config(
            self.rpc_client(),
            Keypair::new(),
            self.client_config.clone(),
        )
    }
}

pub fn parse_pubkey(value: &str, what: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|e| CliError::InvalidArgument(format!("{what} {value:?} is not a valid address: {e}")))
}
