//! Legacy Solana transaction wire format and partial signing.
//!
//! Transactions are built and parsed by hand, without `solana-sdk`.
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```
//!
//! A signature slot holding 64 zero bytes has not been signed yet.

use std::fmt;
use std::str::FromStr;

use crate::address::{decode_base58_32, Pubkey};
use crate::error::SolError;
use crate::instruction::Instruction;
use crate::keypair::{verify_signature, Signer};

/// Size of an Ed25519 signature.
pub const SIGNATURE_BYTES: usize = 64;

/// Maximum serialized transaction size accepted by the cluster.
pub const PACKET_DATA_SIZE: usize = 1232;

/// Signature slot value before signing.
const EMPTY_SIGNATURE: [u8; SIGNATURE_BYTES] = [0u8; SIGNATURE_BYTES];

/// Set on the first message byte by versioned (v0+) messages.
const VERSION_PREFIX_MASK: u8 = 0x80;

// ---------------------------------------------------------------------------
// Blockhash
// ---------------------------------------------------------------------------

/// A recent blockhash, Base58 encoded in text form.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash(pub [u8; 32]);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl FromStr for Hash {
    type Err = SolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_base58_32(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Compact-u16 encoding
// ---------------------------------------------------------------------------

/// Encode a `u16` value in Solana's compact-u16 format.
///
/// - Values 0..0x7f       -> 1 byte
/// - Values 0x80..0x3fff  -> 2 bytes
/// - Values 0x4000..      -> 3 bytes
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// Decode a compact-u16 value from a byte slice.
///
/// Returns `(value, bytes_consumed)` or an error if the data is truncated.
pub fn decode_compact_u16(data: &[u8]) -> Result<(u16, usize), SolError> {
    let mut value: u32 = 0;

    for (consumed, byte) in data.iter().take(3).enumerate() {
        value |= ((byte & 0x7f) as u32) << (7 * consumed);

        if byte & 0x80 == 0 {
            return u16::try_from(value)
                .map(|v| (v, consumed + 1))
                .map_err(|_| SolError::SerializationError("compact-u16 value overflow".into()));
        }
    }

    if data.len() >= 3 {
        return Err(SolError::SerializationError(
            "compact-u16 longer than 3 bytes".into(),
        ));
    }

    Err(SolError::SerializationError(
        "unexpected end of data while decoding compact-u16".into(),
    ))
}

fn compact_len(len: usize, what: &str) -> Result<Vec<u8>, SolError> {
    let len = u16::try_from(len)
        .map_err(|_| SolError::SerializationError(format!("too many {what}: {len}")))?;
    Ok(encode_compact_u16(len))
}

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageHeader {
    /// Number of required signatures (first N account keys are signers).
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed_accounts: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned_accounts: u8,
}

/// An instruction whose account references are indices into
/// [`Message::account_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

/// The signed portion of a legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    /// Canonical order:
    ///   1. writable signers (fee payer first)
    ///   2. read-only signers
    ///   3. writable non-signers
    ///   4. read-only non-signers
    pub account_keys: Vec<Pubkey>,
    pub recent_blockhash: Hash,
    pub instructions: Vec<CompiledInstruction>,
}

impl Message {
    /// Compile instructions into a message paid for by `fee_payer`.
    ///
    /// Instruction order is preserved exactly.
    pub fn compile(
        instructions: &[Instruction],
        fee_payer: &Pubkey,
        recent_blockhash: Hash,
    ) -> Result<Self, SolError> {
        struct AccountEntry {
            pubkey: Pubkey,
            is_signer: bool,
            is_writable: bool,
        }

        let mut entries: Vec<AccountEntry> = Vec::new();

        let mut upsert = |pubkey: Pubkey, signer: bool, writable: bool| {
            if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == pubkey) {
                entry.is_signer |= signer;
                entry.is_writable |= writable;
            } else {
                entries.push(AccountEntry {
                    pubkey,
                    is_signer: signer,
                    is_writable: writable,
                });
            }
        };

        // Fee payer is always signer + writable and inserted first.
        upsert(*fee_payer, true, true);

        for ix in instructions {
            for meta in &ix.accounts {
                upsert(meta.pubkey, meta.is_signer, meta.is_writable);
            }
            upsert(ix.program_id, false, false);
        }

        if entries.len() > u8::MAX as usize {
            return Err(SolError::TransactionBuildError(format!(
                "{} accounts exceeds the limit of 255",
                entries.len()
            )));
        }

        // Stable sort keeps insertion order within a category, so the fee
        // payer stays at index 0.
        entries.sort_by_key(|e| match (e.is_signer, e.is_writable) {
            (true, true) => 0u8,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        });

        let mut header = MessageHeader::default();
        for e in &entries {
            match (e.is_signer, e.is_writable) {
                (true, true) => header.num_required_signatures += 1,
                (true, false) => {
                    header.num_required_signatures += 1;
                    header.num_readonly_signed_accounts += 1;
                }
                (false, true) => {}
                (false, false) => header.num_readonly_unsigned_accounts += 1,
            }
        }

        let account_keys: Vec<Pubkey> = entries.iter().map(|e| e.pubkey).collect();

        let index_of = |key: &Pubkey| -> Result<u8, SolError> {
            account_keys
                .iter()
                .position(|k| k == key)
                .map(|i| i as u8)
                .ok_or_else(|| {
                    SolError::TransactionBuildError(format!("{key} not in account keys"))
                })
        };

        let mut compiled = Vec::with_capacity(instructions.len());
        for ix in instructions {
            let account_indices = ix
                .accounts
                .iter()
                .map(|meta| index_of(&meta.pubkey))
                .collect::<Result<Vec<u8>, _>>()?;

            compiled.push(CompiledInstruction {
                program_id_index: index_of(&ix.program_id)?,
                account_indices,
                data: ix.data.clone(),
            });
        }

        Ok(Self {
            header,
            account_keys,
            recent_blockhash,
            instructions: compiled,
        })
    }

    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.account_keys.first()
    }

    /// The accounts that must sign, in signature-slot order.
    pub fn signer_keys(&self) -> &[Pubkey] {
        let n = (self.header.num_required_signatures as usize).min(self.account_keys.len());
        &self.account_keys[..n]
    }

    pub fn is_writable(&self, index: usize) -> bool {
        let h = &self.header;
        let signers = h.num_required_signatures as usize;
        if index < signers {
            index < signers.saturating_sub(h.num_readonly_signed_accounts as usize)
        } else {
            index
                < self
                    .account_keys
                    .len()
                    .saturating_sub(h.num_readonly_unsigned_accounts as usize)
        }
    }

    /// Program id of the instruction at `index`.
    pub fn program_id(&self, index: usize) -> Option<&Pubkey> {
        let ix = self.instructions.get(index)?;
        self.account_keys.get(ix.program_id_index as usize)
    }

    /// Resolve the account list of the instruction at `index`.
    pub fn instruction_accounts(&self, index: usize) -> Option<Vec<Pubkey>> {
        let ix = self.instructions.get(index)?;
        ix.account_indices
            .iter()
            .map(|&i| self.account_keys.get(i as usize).copied())
            .collect()
    }

    /// Serialize the message (the bytes that get signed).
    pub fn serialize(&self) -> Result<Vec<u8>, SolError> {
        let mut buf = Vec::with_capacity(256);

        buf.push(self.header.num_required_signatures);
        buf.push(self.header.num_readonly_signed_accounts);
        buf.push(self.header.num_readonly_unsigned_accounts);

        buf.extend_from_slice(&compact_len(self.account_keys.len(), "account keys")?);
        for key in &self.account_keys {
            buf.extend_from_slice(key.as_ref());
        }

        buf.extend_from_slice(&self.recent_blockhash.0);

        buf.extend_from_slice(&compact_len(self.instructions.len(), "instructions")?);
        for ix in &self.instructions {
            buf.push(ix.program_id_index);

            buf.extend_from_slice(&compact_len(ix.account_indices.len(), "instruction accounts")?);
            buf.extend_from_slice(&ix.account_indices);

            buf.extend_from_slice(&compact_len(ix.data.len(), "instruction data bytes")?);
            buf.extend_from_slice(&ix.data);
        }

        Ok(buf)
    }

    /// Parse a legacy message, which must span all of `data`.
    pub fn deserialize(data: &[u8]) -> Result<Self, SolError> {
        let mut reader = WireReader::new(data);
        let message = Self::read(&mut reader)?;
        reader.finish()?;
        Ok(message)
    }

    fn read(reader: &mut WireReader<'_>) -> Result<Self, SolError> {
        let first = reader.read_u8()?;
        if first & VERSION_PREFIX_MASK != 0 {
            return Err(SolError::SerializationError(format!(
                "versioned message (v{}) is not supported",
                first & !VERSION_PREFIX_MASK
            )));
        }

        let header = MessageHeader {
            num_required_signatures: first,
            num_readonly_signed_accounts: reader.read_u8()?,
            num_readonly_unsigned_accounts: reader.read_u8()?,
        };

        let num_accounts = reader.read_compact_u16()? as usize;
        let mut account_keys = Vec::with_capacity(num_accounts);
        for _ in 0..num_accounts {
            account_keys.push(Pubkey::new_from_array(reader.read_array()?));
        }

        if (header.num_required_signatures as usize) > num_accounts {
            return Err(SolError::SerializationError(format!(
                "{} required signatures but only {num_accounts} accounts",
                header.num_required_signatures
            )));
        }

        if header.num_readonly_signed_accounts > header.num_required_signatures {
            return Err(SolError::SerializationError(format!(
                "{} read-only signers but only {} signers",
                header.num_readonly_signed_accounts, header.num_required_signatures
            )));
        }

        let unsigned = num_accounts - header.num_required_signatures as usize;
        if header.num_readonly_unsigned_accounts as usize > unsigned {
            return Err(SolError::SerializationError(format!(
                "{} read-only non-signers but only {unsigned} non-signers",
                header.num_readonly_unsigned_accounts
            )));
        }

        let recent_blockhash = Hash(reader.read_array()?);

        let num_instructions = reader.read_compact_u16()? as usize;
        let mut instructions = Vec::with_capacity(num_instructions);
        for _ in 0..num_instructions {
            let program_id_index = reader.read_u8()?;
            let n = reader.read_compact_u16()? as usize;
            let account_indices = reader.read_bytes(n)?.to_vec();
            let len = reader.read_compact_u16()? as usize;
            let data = reader.read_bytes(len)?.to_vec();

            let out_of_range = std::iter::once(&program_id_index)
                .chain(account_indices.iter())
                .any(|&i| i as usize >= num_accounts);
            if out_of_range {
                return Err(SolError::SerializationError(
                    "instruction references an account index out of range".into(),
                ));
            }

            instructions.push(CompiledInstruction {
                program_id_index,
                account_indices,
                data,
            });
        }

        Ok(Self {
            header,
            account_keys,
            recent_blockhash,
            instructions,
        })
    }
}

/// A legacy transaction: a message plus one signature slot per signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub signatures: Vec<[u8; SIGNATURE_BYTES]>,
    pub message: Message,
}

impl Transaction {
    /// Wrap a message with every signature slot empty.
    pub fn new_unsigned(message: Message) -> Self {
        let slots = message.header.num_required_signatures as usize;
        Self {
            signatures: vec![EMPTY_SIGNATURE; slots],
            message,
        }
    }

    /// Serialize into the wire format accepted by `sendTransaction`.
    pub fn serialize(&self) -> Result<Vec<u8>, SolError> {
        let message = self.message.serialize()?;

        let mut wire =
            Vec::with_capacity(3 + self.signatures.len() * SIGNATURE_BYTES + message.len());
        wire.extend_from_slice(&compact_len(self.signatures.len(), "signatures")?);
        for sig in &self.signatures {
            wire.extend_from_slice(sig);
        }
        wire.extend_from_slice(&message);

        Ok(wire)
    }

    /// Parse a wire-format transaction.
    pub fn deserialize(data: &[u8]) -> Result<Self, SolError> {
        let mut reader = WireReader::new(data);

        let num_sigs = reader.read_compact_u16()? as usize;
        let mut signatures = Vec::with_capacity(num_sigs);
        for _ in 0..num_sigs {
            signatures.push(reader.read_array()?);
        }

        let message = Message::read(&mut reader)?;
        reader.finish()?;

        if signatures.len() != message.header.num_required_signatures as usize {
            return Err(SolError::SerializationError(format!(
                "{} signatures for {} required signers",
                signatures.len(),
                message.header.num_required_signatures
            )));
        }

        Ok(Self {
            signatures,
            message,
        })
    }

    /// Sign with one of the required signers and leave the other slots as
    /// they are.
    pub fn partial_sign<S: Signer + ?Sized>(&mut self, signer: &S) -> Result<(), SolError> {
        let pubkey = signer.pubkey();
        let slot = self
            .message
            .signer_keys()
            .iter()
            .position(|k| *k == pubkey)
            .ok_or_else(|| {
                SolError::SigningError(format!("{pubkey} not found in transaction signers"))
            })?;

        let message = self.message.serialize()?;
        self.signatures[slot] = signer.try_sign_message(&message)?;
        Ok(())
    }

    /// The signature held for `pubkey`, if that signer has signed.
    pub fn signature_of(&self, pubkey: &Pubkey) -> Option<&[u8; SIGNATURE_BYTES]> {
        let slot = self.message.signer_keys().iter().position(|k| k == pubkey)?;
        self.signatures
            .get(slot)
            .filter(|sig| **sig != EMPTY_SIGNATURE)
    }

    /// Signers whose slot is still empty.
    pub fn missing_signers(&self) -> Vec<Pubkey> {
        self.message
            .signer_keys()
            .iter()
            .zip(&self.signatures)
            .filter(|(_, sig)| **sig == EMPTY_SIGNATURE)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn is_fully_signed(&self) -> bool {
        self.missing_signers().is_empty()
    }

    /// Check every filled signature slot against the message.
    pub fn verify_present_signatures(&self) -> Result<(), SolError> {
        let message = self.message.serialize()?;
        for (key, sig) in self.message.signer_keys().iter().zip(&self.signatures) {
            if *sig != EMPTY_SIGNATURE && !verify_signature(key, &message, sig) {
                return Err(SolError::SigningError(format!(
                    "signature for {key} does not verify"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], SolError> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.data.len());
        let end = end.ok_or_else(|| {
            SolError::SerializationError(format!(
                "unexpected end of data: wanted {len} bytes at offset {}",
                self.pos
            ))
        })?;
        let out = &self.data[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, SolError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SolError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_compact_u16(&mut self) -> Result<u16, SolError> {
        let (value, consumed) = decode_compact_u16(&self.data[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    fn finish(&self) -> Result<(), SolError> {
        if self.pos != self.data.len() {
            return Err(SolError::SerializationError(format!(
                "{} trailing bytes",
                self.data.len() - self.pos
            )));
        }
        Ok(())
    }
}
