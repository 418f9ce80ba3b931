/*!
# Creator Economy Client

Submits creator economy instructions over RPC. Transient failures (expired
blockhash, dropped connections, confirmation timeouts) are retried with
exponential backoff; program rejections come back as
[`ClientError::Rejected`] and are never retried.

```no_run
use creator_economy_client::{ClientConfig, CreatorEconomyClient};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Keypair;
use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc_client = Arc::new(RpcClient::new("http://localhost:8899".to_string()));
let config = ClientConfig {
    max_retries: 3,
    ..Default::default()
};
let client = CreatorEconomyClient::with_config(rpc_client, Keypair::new(), config);

let plan = client.preview_tip(0, 10_000_000).await?;
println!("creator would receive {}", plan.split.creator_share);
client.tip_content(0, 10_000_000).await?;
# Ok(())
# }
```
*/

mod classify;
mod client;
mod config;
mod error;

pub use classify::{classify_failure, rejection_code, FailureClass};
pub use client::{CreatorEconomyClient, Published};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
