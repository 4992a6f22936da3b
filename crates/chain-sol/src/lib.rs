//! Solana primitives for building and signing transactions client-side.
//!
//! This crate handles addresses, program-derived address search, the legacy
//! transaction wire format with partial signing, and the handful of System /
//! SPL Token / Associated Token instructions needed to create and fund a mint,
//! all without pulling in `solana-sdk`.
//!
//! Signing uses `ed25519-dalek`; the PDA curve test uses `curve25519-dalek`.

pub mod address;
pub mod error;
pub mod instruction;
pub mod keypair;
pub mod pda;
pub mod spl_token;
pub mod system;
pub mod sysvar;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::Pubkey;
pub use error::SolError;
pub use instruction::{AccountMeta, Instruction};
pub use keypair::{Keypair, Signer};
pub use pda::{find_program_address, find_program_address_with, DerivationBackend, Ed25519Sha256};
pub use spl_token::{
    derive_associated_token_address, ASSOCIATED_TOKEN_PROGRAM_ID, MINT_ACCOUNT_SIZE,
    TOKEN_PROGRAM_ID,
};
pub use system::SYSTEM_PROGRAM_ID;
pub use transaction::{Hash, Message, Transaction};
