//! Ed25519 key holders.

use ed25519_dalek::Signer as _;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::address::Pubkey;
use crate::error::SolError;

/// Anything that can produce an Ed25519 signature for an address.
pub trait Signer {
    fn pubkey(&self) -> Pubkey;

    /// Sign serialized message bytes.
    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SolError>;
}

/// An in-memory Ed25519 keypair.
///
/// The secret half is zeroized on drop by `ed25519-dalek`.
pub struct Keypair {
    signing_key: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair from the operating system RNG.
    pub fn new() -> Self {
        Self::generate(&mut rand_core::OsRng)
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::generate(rng),
        }
    }

    /// Rebuild a keypair from its 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let mut copy = *seed;
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&copy);
        copy.zeroize();
        Self { signing_key }
    }

    /// Parse the 64-byte `secret || public` layout used by Solana CLI key files.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self, SolError> {
        let arr: &[u8; 64] = bytes.try_into().map_err(|_| {
            SolError::SigningError(format!("expected 64 keypair bytes, got {}", bytes.len()))
        })?;
        let signing_key = ed25519_dalek::SigningKey::from_keypair_bytes(arr)
            .map_err(|e| SolError::SigningError(format!("invalid keypair bytes: {e}")))?;
        Ok(Self { signing_key })
    }
}

impl Default for Keypair {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}

impl Signer for Keypair {
    fn pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.signing_key.verifying_key().to_bytes())
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<[u8; 64], SolError> {
        Ok(self.signing_key.sign(message).to_bytes())
    }
}

/// Check an Ed25519 signature against an address.
pub fn verify_signature(pubkey: &Pubkey, message: &[u8], signature: &[u8; 64]) -> bool {
    let Ok(key) = ed25519_dalek::VerifyingKey::from_bytes(pubkey.as_array()) else {
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(signature);
    key.verify_strict(message, &signature).is_ok()
}
