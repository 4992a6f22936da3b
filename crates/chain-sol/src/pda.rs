//! Program Derived Address (PDA) search.
//!
//! A PDA is `SHA-256(seed_0 || ... || seed_n || bump || program_id || "ProgramDerivedAddress")`
//! for the highest `bump` in 255..=0 whose hash is NOT a valid Ed25519 point.
//! Such an address has no private key, so only the owning program can sign
//! for it.
//!
//! The hash and the curve test are behind [`DerivationBackend`] so the search
//! itself can be exercised with a scripted predicate.

use sha2::{Digest, Sha256};

use crate::address::Pubkey;
use crate::error::SolError;

/// Maximum number of seeds, counting the bump byte.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Domain separator appended after the program id.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// The primitives a PDA search depends on.
pub trait DerivationBackend {
    /// Hash the concatenation of `parts`.
    fn hash(&self, parts: &[&[u8]]) -> [u8; 32];

    /// Whether `bytes` is a valid point on the signing curve.
    fn is_on_curve(&self, bytes: &[u8; 32]) -> bool;
}

/// SHA-256 over Ed25519, the primitives used by the Solana runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Sha256;

impl Ed25519Sha256 {
    /// Attempts compressed-point decompression with `curve25519-dalek`.
    pub fn point_is_on_curve(bytes: &[u8; 32]) -> bool {
        curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
            .decompress()
            .is_some()
    }
}

impl DerivationBackend for Ed25519Sha256 {
    fn hash(&self, parts: &[&[u8]]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }

    fn is_on_curve(&self, bytes: &[u8; 32]) -> bool {
        Self::point_is_on_curve(bytes)
    }
}

/// Find the canonical PDA and bump for `seeds` under `program_id`.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SolError> {
    find_program_address_with(&Ed25519Sha256, seeds, program_id)
}

/// [`find_program_address`] with explicit primitives.
///
/// Tries bumps from 255 down to 0 and returns the first off-curve candidate.
pub fn find_program_address_with<B: DerivationBackend + ?Sized>(
    backend: &B,
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SolError> {
    check_seeds(seeds)?;

    for bump in (0u8..=255).rev() {
        if let Some(address) = create_program_address_with(backend, seeds, bump, program_id) {
            return Ok((address, bump));
        }
    }

    Err(SolError::DerivationExhausted {
        program: program_id.to_string(),
    })
}

/// Compute the candidate for a single bump.
///
/// Returns `None` when the hash lands on the curve and the caller must try
/// the next bump.
pub fn create_program_address_with<B: DerivationBackend + ?Sized>(
    backend: &B,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Option<Pubkey> {
    let bump_seed = [bump];

    let mut parts: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 3);
    parts.extend_from_slice(seeds);
    parts.push(&bump_seed);
    parts.push(program_id.as_ref());
    parts.push(PDA_MARKER);

    let hash = backend.hash(&parts);

    if backend.is_on_curve(&hash) {
        return None;
    }

    Some(Pubkey::new_from_array(hash))
}

fn check_seeds(seeds: &[&[u8]]) -> Result<(), SolError> {
    if seeds.len() >= MAX_SEEDS {
        return Err(SolError::InvalidSeeds(format!(
            "{} seeds plus the bump exceeds the limit of {MAX_SEEDS}",
            seeds.len()
        )));
    }

    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(SolError::InvalidSeeds(format!(
            "seed {index} is {} bytes, max is {MAX_SEED_LEN}",
            seed.len()
        )));
    }

    Ok(())
}
