//! [`ChainState`] over Solana JSON-RPC.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chain_sol::{Hash, Pubkey};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::config::{ClientConfig, Commitment};
use crate::provider::{AccountData, ChainState, ProviderError};

/// JSON-RPC client for the three reads the builders need.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    commitment: Commitment,
}

impl RpcClient {
    pub fn new(url: impl Into<String>, commitment: Commitment) -> Self {
        Self::with_http_client(reqwest::Client::new(), url, commitment)
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.rpc_url.clone(), config.commitment)
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies).
    pub fn with_http_client(
        http: reqwest::Client,
        url: impl Into<String>,
        commitment: Commitment,
    ) -> Self {
        Self {
            http,
            url: url.into(),
            commitment,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        debug!(method, url = %self.url, "rpc request");

        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("HTTP {status}: {e}")))?;
        trace!(method, %payload, "rpc response");

        parse_envelope(payload)
    }

    fn commitment_config(&self) -> Value {
        json!({ "commitment": self.commitment.as_str() })
    }
}

#[async_trait]
impl ChainState for RpcClient {
    async fn latest_blockhash(&self) -> Result<Hash, ProviderError> {
        let result: Value = self
            .call("getLatestBlockhash", json!([self.commitment_config()]))
            .await?;
        parse_latest_blockhash(result)
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: u64,
    ) -> Result<u64, ProviderError> {
        self.call(
            "getMinimumBalanceForRentExemption",
            json!([data_len, self.commitment_config()]),
        )
        .await
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ProviderError> {
        let config = json!({
            "encoding": "base64",
            "commitment": self.commitment.as_str(),
        });
        let result: Value = self
            .call("getAccountInfo", json!([address.to_string(), config]))
            .await?;
        parse_account_info(result)
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockhashValue {
    blockhash: String,
}

#[derive(Debug, Deserialize)]
struct UiAccount {
    data: (String, String),
    lamports: u64,
    owner: String,
}

fn invalid(e: impl std::fmt::Display) -> ProviderError {
    ProviderError::InvalidResponse(e.to_string())
}

fn parse_envelope<T: DeserializeOwned>(payload: Value) -> Result<T, ProviderError> {
    let envelope: Envelope = serde_json::from_value(payload).map_err(invalid)?;

    if let Some(err) = envelope.error {
        return Err(ProviderError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let result = envelope
        .result
        .ok_or_else(|| invalid("response has neither result nor error"))?;
    serde_json::from_value(result).map_err(invalid)
}

fn parse_latest_blockhash(result: Value) -> Result<Hash, ProviderError> {
    let parsed: WithContext<BlockhashValue> = serde_json::from_value(result).map_err(invalid)?;
    parsed.value.blockhash.parse().map_err(invalid)
}

fn parse_account_info(result: Value) -> Result<Option<AccountData>, ProviderError> {
    let parsed: WithContext<Option<UiAccount>> = serde_json::from_value(result).map_err(invalid)?;

    let Some(account) = parsed.value else {
        return Ok(None);
    };

    let (encoded, encoding) = account.data;
    if encoding != "base64" {
        return Err(invalid(format!("unexpected account encoding {encoding}")));
    }

    Ok(Some(AccountData {
        owner: account.owner.parse().map_err(invalid)?,
        lamports: account.lamports,
        data: STANDARD.decode(encoded).map_err(invalid)?,
    }))
}
