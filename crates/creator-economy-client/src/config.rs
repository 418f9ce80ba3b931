use backoff::ExponentialBackoff;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

/// Submission settings for [`crate::CreatorEconomyClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Attempts after the first before giving up on a transient failure.
    pub max_retries: usize,

    pub retry_backoff: ExponentialBackoff,

    /// Commitment used both for confirmation and for account reads.
    pub commitment: CommitmentConfig,

    /// Skip the RPC node's simulation before sending.
    pub skip_preflight: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(10),
                max_elapsed_time: Some(Duration::from_secs(120)),
                multiplier: 2.0,
                ..Default::default()
            },
            commitment: CommitmentConfig::confirmed(),
            skip_preflight: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
        assert!(!config.skip_preflight);
        assert_eq!(
            config.retry_backoff.max_elapsed_time,
            Some(Duration::from_secs(120))
        );
    }
}
