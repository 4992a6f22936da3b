use thiserror::Error;

/// Solana chain operation errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid seeds: {0}")]
    InvalidSeeds(String),

    #[error("no off-curve address found for program {program} after trying every bump")]
    DerivationExhausted { program: String },

    #[error("transaction build error: {0}")]
    TransactionBuildError(String),

    #[error("signing error: {0}")]
    SigningError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = SolError::InvalidAddress("bad decode".into());
        assert_eq!(err.to_string(), "invalid address: bad decode");
    }

    #[test]
    fn display_invalid_seeds() {
        let err = SolError::InvalidSeeds("seed 0 is 40 bytes".into());
        assert_eq!(err.to_string(), "invalid seeds: seed 0 is 40 bytes");
    }

    #[test]
    fn display_derivation_exhausted() {
        let err = SolError::DerivationExhausted {
            program: "11111111111111111111111111111111".into(),
        };
        assert!(err.to_string().contains("11111111111111111111111111111111"));
        assert!(err.to_string().contains("every bump"));
    }

    #[test]
    fn display_transaction_build_error() {
        let err = SolError::TransactionBuildError("too many accounts".into());
        assert_eq!(err.to_string(), "transaction build error: too many accounts");
    }

    #[test]
    fn display_signing_error() {
        let err = SolError::SigningError("ed25519 failed".into());
        assert_eq!(err.to_string(), "signing error: ed25519 failed");
    }

    #[test]
    fn display_serialization_error() {
        let err = SolError::SerializationError("compact-u16 overflow".into());
        assert_eq!(err.to_string(), "serialization error: compact-u16 overflow");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(SolError::InvalidAddress("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
