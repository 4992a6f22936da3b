//! Client configuration.
//!
//! Loaded from JSON; every field is optional and falls back to mainnet-beta
//! defaults. Program ids are Base58 strings.
//!
//! ```json
//! {
//!   "rpc_url": "https://api.devnet.solana.com",
//!   "commitment": "finalized",
//!   "programs": { "candy_machine": "cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ" }
//! }
//! ```

use std::path::Path;

use chain_sol::Pubkey;
use serde::{Deserialize, Serialize};

use crate::constants::{CANDY_MACHINE_PROGRAM_ID, TOKEN_METADATA_PROGRAM_ID};
use crate::error::ConfigError;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// On-chain programs the builders target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramIds {
    pub candy_machine: Pubkey,
    pub token_metadata: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            candy_machine: CANDY_MACHINE_PROGRAM_ID,
            token_metadata: TOKEN_METADATA_PROGRAM_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
    pub programs: ProgramIds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: Commitment::default(),
            programs: ProgramIds::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ClientConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert_eq!(config.programs.candy_machine, CANDY_MACHINE_PROGRAM_ID);
    }

    #[test]
    fn partial_override() {
        let config = ClientConfig::from_json_str(
            r#"{
                "rpc_url": "https://api.devnet.solana.com",
                "commitment": "finalized",
                "programs": { "token_metadata": "11111111111111111111111111111111" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.commitment, Commitment::Finalized);
        assert_eq!(config.programs.candy_machine, CANDY_MACHINE_PROGRAM_ID);
        assert_eq!(
            config.programs.token_metadata,
            Pubkey::new_from_array([0u8; 32])
        );
    }

    #[test]
    fn bad_program_id_is_rejected() {
        let err = ClientConfig::from_json_str(r#"{"programs": {"candy_machine": "nope!"}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_commitment_is_rejected() {
        assert!(ClientConfig::from_json_str(r#"{"commitment": "max"}"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ClientConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn config_serializes_back_to_json() {
        let json = serde_json::to_string(&ClientConfig::default()).unwrap();
        assert!(json.contains("cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ"));
        assert!(json.contains("\"confirmed\""));
    }
}
