//! The read-only chain view the transaction builders depend on.

use async_trait::async_trait;
use chain_sol::{Hash, Pubkey};
use thiserror::Error;

/// An account as returned by the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Chain reads needed to build a transaction.
///
/// Implementations own transport, timeouts and commitment; callers never
/// retry.
#[async_trait]
pub trait ChainState: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash, ProviderError>;

    async fn minimum_balance_for_rent_exemption(&self, data_len: u64) -> Result<u64, ProviderError>;

    /// `Ok(None)` when the account does not exist.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ProviderError>;
}
