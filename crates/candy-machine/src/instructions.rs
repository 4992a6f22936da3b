//! Candy Machine v2 instruction builders.
//!
//! Account order follows the program's account structs; the program reads
//! accounts by position.

use chain_sol::{
    sysvar, AccountMeta, Instruction, Pubkey, SolError, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use crate::discriminator::instruction_discriminator;
use crate::state::CandyMachineData;

/// Accounts for `initialize_candy_machine`.
#[derive(Debug, Clone)]
pub struct InitializeCandyMachineAccounts {
    pub candy_machine: Pubkey,
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
}

/// Accounts for `mint_nft`.
#[derive(Debug, Clone)]
pub struct MintNftAccounts {
    pub candy_machine: Pubkey,
    pub candy_machine_creator: Pubkey,
    pub payer: Pubkey,
    pub wallet: Pubkey,
    pub metadata: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub update_authority: Pubkey,
    pub master_edition: Pubkey,
    pub token_metadata_program: Pubkey,
}

/// Build `initialize_candy_machine`.
///
/// The new candy machine account is marked as a signer so the freshly
/// generated identity can co-sign the transaction.
pub fn initialize_candy_machine(
    program_id: &Pubkey,
    accounts: &InitializeCandyMachineAccounts,
    data: &CandyMachineData,
) -> Result<Instruction, SolError> {
    let mut ix_data = instruction_discriminator("initialize_candy_machine").to_vec();
    borsh::to_writer(&mut ix_data, data)
        .map_err(|e| SolError::SerializationError(format!("candy machine data: {e}")))?;

    Ok(Instruction::new(
        *program_id,
        vec![
            AccountMeta::new(accounts.candy_machine, true),
            AccountMeta::new_readonly(accounts.wallet, false),
            AccountMeta::new_readonly(accounts.authority, false),
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(sysvar::RENT, false),
        ],
        ix_data,
    ))
}

/// Build `mint_nft` with the bump of the candy machine creator PDA.
pub fn mint_nft(program_id: &Pubkey, accounts: &MintNftAccounts, creator_bump: u8) -> Instruction {
    let mut data = instruction_discriminator("mint_nft").to_vec();
    data.push(creator_bump);

    Instruction::new(
        *program_id,
        vec![
            AccountMeta::new(accounts.candy_machine, false),
            AccountMeta::new_readonly(accounts.candy_machine_creator, false),
            AccountMeta::new_readonly(accounts.payer, true),
            AccountMeta::new(accounts.wallet, false),
            AccountMeta::new(accounts.metadata, false),
            AccountMeta::new(accounts.mint, false),
            AccountMeta::new_readonly(accounts.mint_authority, true),
            AccountMeta::new_readonly(accounts.update_authority, true),
            AccountMeta::new(accounts.master_edition, false),
            AccountMeta::new_readonly(accounts.token_metadata_program, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(sysvar::RENT, false),
            AccountMeta::new_readonly(sysvar::CLOCK, false),
            AccountMeta::new_readonly(sysvar::RECENT_BLOCKHASHES, false),
            AccountMeta::new_readonly(sysvar::INSTRUCTIONS, false),
        ],
        data,
    )
}
