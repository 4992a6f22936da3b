//! Anchor discriminators: the first 8 bytes of `SHA-256("<namespace>:<name>")`.

use sha2::{Digest, Sha256};

pub type Discriminator = [u8; 8];

/// Prefix of instruction data for the program method `name`.
pub fn instruction_discriminator(name: &str) -> Discriminator {
    hash_prefix("global", name)
}

/// Prefix of account data for the account type `name`.
pub fn account_discriminator(name: &str) -> Discriminator {
    hash_prefix("account", name)
}

fn hash_prefix(namespace: &str, name: &str) -> Discriminator {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}
