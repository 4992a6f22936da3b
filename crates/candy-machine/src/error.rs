use chain_sol::{Pubkey, SolError};
use thiserror::Error;

use crate::provider::ProviderError;

/// Errors from building candy machine transactions.
#[derive(Debug, Error)]
pub enum CandyMachineError {
    #[error("address derivation exhausted: {0}")]
    DerivationExhausted(String),

    #[error("candy machine account {address} lookup failed: {reason}")]
    AccountLookupFailed { address: Pubkey, reason: String },

    #[error("chain query failed: {0}")]
    ChainQueryFailed(#[source] ProviderError),

    #[error("invalid candy machine data: {0}")]
    InvalidCandyMachineData(String),

    #[error("transaction error: {0}")]
    Transaction(SolError),
}

impl From<SolError> for CandyMachineError {
    fn from(e: SolError) -> Self {
        match e {
            SolError::DerivationExhausted { .. } => {
                CandyMachineError::DerivationExhausted(e.to_string())
            }
            other => CandyMachineError::Transaction(other),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
