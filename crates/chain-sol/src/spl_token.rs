//! SPL Token and Associated Token Account instructions.
//!
//! Implements the mint-side token instructions and associated token account
//! (ATA) derivation without pulling in the `spl-token` crates.

use crate::address::Pubkey;
use crate::error::SolError;
use crate::instruction::{AccountMeta, Instruction};
use crate::pda::find_program_address;
use crate::system::SYSTEM_PROGRAM_ID;
use crate::sysvar;

// ---------------------------------------------------------------------------
// Well-known program IDs
// ---------------------------------------------------------------------------

/// SPL Token Program ID: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb,
    0x79, 0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85,
    0x7e, 0xff, 0x00, 0xa9,
]);

/// Associated Token Account Program ID: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e,
    0x0d, 0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8,
    0xdb, 0xe9, 0xf8, 0x59,
]);

/// Size of an SPL Token mint account.
pub const MINT_ACCOUNT_SIZE: u64 = 82;

const INITIALIZE_MINT_IX: u8 = 0;
const MINT_TO_IX: u8 = 7;
const ATA_CREATE_IX: u8 = 0;

// ---------------------------------------------------------------------------
// SPL Token instructions
// ---------------------------------------------------------------------------

/// Build an SPL Token `InitializeMint` instruction.
///
/// Data: [0] + decimals + 32-byte mint authority + COption freeze authority
/// (1-byte tag + 32 bytes, zero-filled when absent). Total 67 bytes.
pub fn initialize_mint(
    mint: &Pubkey,
    decimals: u8,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
) -> Instruction {
    let mut data = Vec::with_capacity(67);
    data.push(INITIALIZE_MINT_IX);
    data.push(decimals);
    data.extend_from_slice(mint_authority.as_ref());
    match freeze_authority {
        Some(authority) => {
            data.push(1);
            data.extend_from_slice(authority.as_ref());
        }
        None => {
            data.push(0);
            data.extend_from_slice(&[0u8; 32]);
        }
    }

    Instruction::new(
        TOKEN_PROGRAM_ID,
        vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(sysvar::RENT, false),
        ],
        data,
    )
}

/// Build an SPL Token `MintTo` instruction.
///
/// Data: [7] + u64 LE amount. Total 9 bytes.
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, SolError> {
    if amount == 0 {
        return Err(SolError::TransactionBuildError(
            "mint amount must be > 0".into(),
        ));
    }

    let mut data = Vec::with_capacity(9);
    data.push(MINT_TO_IX);
    data.extend_from_slice(&amount.to_le_bytes());

    Ok(Instruction::new(
        TOKEN_PROGRAM_ID,
        vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data,
    ))
}

// ---------------------------------------------------------------------------
// Associated Token Account
// ---------------------------------------------------------------------------

/// Derive the associated token account address for a wallet + mint pair.
///
/// Seeds: `[wallet, token_program_id, mint]` under the ATA program.
pub fn derive_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, SolError> {
    find_program_address(
        &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Build the ATA program `Create` instruction for `wallet` + `mint`, funded
/// by `payer`.
pub fn create_associated_token_account(
    payer: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction, SolError> {
    let ata = derive_associated_token_address(wallet, mint)?;

    Ok(Instruction::new(
        ASSOCIATED_TOKEN_PROGRAM_ID,
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(ata, false),
            AccountMeta::new_readonly(*wallet, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        vec![ATA_CREATE_IX],
    ))
}
