use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// `~/.config/creator-economy/config.yml`, or the file given with `--config`.
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub rpc_url: String,

    pub keypair_path: PathBuf,

    /// `processed`, `confirmed` or `finalized`
    pub commitment: String,

    pub max_retries: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8899".to_string(),
            keypair_path: home_dir().join(".config/solana/id.json"),
            commitment: "confirmed".to_string(),
            max_retries: 5,
        }
    }
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        home_dir().join(".config/creator-economy/config.yml")
    }

    /// Reads `path` if given (it must exist), otherwise the default path if
    /// present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> CliResult<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.commitment_config()?;
        Ok(config)
    }

    /// Command-line flags win over the file.
    pub fn with_overrides(mut self, rpc_url: Option<String>, keypair: Option<PathBuf>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        if let Some(keypair) = keypair {
            self.keypair_path = keypair;
        }
        self
    }

    pub fn commitment_config(&self) -> CliResult<CommitmentConfig> {
        CommitmentConfig::from_str(&self.commitment).map_err(|_| {
            CliError::InvalidConfig(format!("unknown commitment level {:?}", self.commitment))
        })
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
