//! System Program instructions.

use crate::address::Pubkey;
use crate::instruction::{AccountMeta, Instruction};

/// The System Program: 32 zero bytes, `11111111111111111111111111111111`.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// `CreateAccount` instruction index (little-endian u32).
const CREATE_ACCOUNT_IX_INDEX: u32 = 0;

/// Build a System Program `CreateAccount` instruction.
///
/// `from` funds `to` with `lamports`, allocates `space` bytes and assigns the
/// account to `owner`. Both `from` and `to` must sign.
///
/// Data: u32 LE index (0) + u64 LE lamports + u64 LE space + 32-byte owner.
pub fn create_account(
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(52);
    data.extend_from_slice(&CREATE_ACCOUNT_IX_INDEX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    data.extend_from_slice(&space.to_le_bytes());
    data.extend_from_slice(owner.as_ref());

    Instruction::new(
        SYSTEM_PROGRAM_ID,
        vec![AccountMeta::new(*from, true), AccountMeta::new(*to, true)],
        data,
    )
}
