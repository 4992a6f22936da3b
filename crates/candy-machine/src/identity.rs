use chain_sol::Keypair;

/// Source of the one-shot keypairs a transaction creates (the new candy
/// machine account, the new mint).
pub trait IdentitySource: Send + Sync {
    fn generate(&self) -> Keypair;
}

/// Fresh keys from the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngIdentities;

impl IdentitySource for OsRngIdentities {
    fn generate(&self) -> Keypair {
        Keypair::new()
    }
}

#[cfg(test)]
mod tests {
    use chain_sol::Signer;

    use super::*;

    #[test]
    fn os_rng_identities_are_unique() {
        let source = OsRngIdentities;
        assert_ne!(source.generate().pubkey(), source.generate().pubkey());
    }
}
