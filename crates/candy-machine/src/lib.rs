//! Client for the Metaplex Candy Machine v2 program.
//!
//! Builds the two transactions a minting frontend needs: initializing a candy
//! machine and minting one NFT from it. Chain reads go through [`ChainState`];
//! [`RpcClient`] implements it over JSON-RPC. Nothing here submits a
//! transaction.

pub mod commands;
pub mod config;
pub mod constants;
pub mod discriminator;
pub mod error;
pub mod identity;
pub mod instructions;
pub mod pda;
pub mod provider;
pub mod rpc;
pub mod state;

pub use commands::CandyMachineCommands;
pub use config::{ClientConfig, Commitment, ProgramIds};
pub use error::{CandyMachineError, ConfigError};
pub use identity::{IdentitySource, OsRngIdentities};
pub use pda::{find_candy_machine_creator_pda, find_master_edition_pda, find_metadata_pda};
pub use provider::{AccountData, ChainState, ProviderError};
pub use rpc::RpcClient;
pub use state::{CandyMachine, CandyMachineData};
