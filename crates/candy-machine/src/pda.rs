//! Addresses derived for a candy machine mint.

use chain_sol::{find_program_address, Pubkey, SolError};

use crate::config::ProgramIds;
use crate::constants::{CANDY_MACHINE_PREFIX, EDITION_SUFFIX, METADATA_PREFIX};

/// Metadata account: `["metadata", token_metadata_program, mint]`.
pub fn find_metadata_pda(programs: &ProgramIds, mint: &Pubkey) -> Result<Pubkey, SolError> {
    let (pda, _bump) = find_program_address(
        &[
            METADATA_PREFIX.as_bytes(),
            programs.token_metadata.as_ref(),
            mint.as_ref(),
        ],
        &programs.token_metadata,
    )?;
    Ok(pda)
}

/// Master edition account: `["metadata", token_metadata_program, mint, "edition"]`.
pub fn find_master_edition_pda(programs: &ProgramIds, mint: &Pubkey) -> Result<Pubkey, SolError> {
    let (pda, _bump) = find_program_address(
        &[
            METADATA_PREFIX.as_bytes(),
            programs.token_metadata.as_ref(),
            mint.as_ref(),
            EDITION_SUFFIX.as_bytes(),
        ],
        &programs.token_metadata,
    )?;
    Ok(pda)
}

/// Creator PDA that signs for the candy machine, with its bump.
pub fn find_candy_machine_creator_pda(
    programs: &ProgramIds,
    candy_machine: &Pubkey,
) -> Result<(Pubkey, u8), SolError> {
    find_program_address(
        &[CANDY_MACHINE_PREFIX.as_bytes(), candy_machine.as_ref()],
        &programs.candy_machine,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn programs() -> ProgramIds {
        ProgramIds::default()
    }

    #[test]
    fn derivations_are_deterministic() {
        let mint = Pubkey::new_from_array([0x21u8; 32]);
        let cm = Pubkey::new_from_array([0x31u8; 32]);

        assert_eq!(
            find_metadata_pda(&programs(), &mint).unwrap(),
            find_metadata_pda(&programs(), &mint).unwrap()
        );
        assert_eq!(
            find_master_edition_pda(&programs(), &mint).unwrap(),
            find_master_edition_pda(&programs(), &mint).unwrap()
        );
        assert_eq!(
            find_candy_machine_creator_pda(&programs(), &cm).unwrap(),
            find_candy_machine_creator_pda(&programs(), &cm).unwrap()
        );
    }

    #[test]
    fn derived_addresses_are_pairwise_distinct() {
        for byte in [0x00u8, 0x01, 0x7f, 0xfe] {
            let input = Pubkey::new_from_array([byte; 32]);

            let metadata = find_metadata_pda(&programs(), &input).unwrap();
            let edition = find_master_edition_pda(&programs(), &input).unwrap();
            let (creator, _) = find_candy_machine_creator_pda(&programs(), &input).unwrap();

            assert_ne!(metadata, input);
            assert_ne!(edition, input);
            assert_ne!(creator, input);
            assert_ne!(metadata, edition);
            assert_ne!(metadata, creator);
            assert_ne!(edition, creator);
        }
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let mint = Pubkey::new_from_array([0x44u8; 32]);
        assert!(!find_metadata_pda(&programs(), &mint).unwrap().is_on_curve());
        assert!(!find_master_edition_pda(&programs(), &mint).unwrap().is_on_curve());
        let (creator, _) = find_candy_machine_creator_pda(&programs(), &mint).unwrap();
        assert!(!creator.is_on_curve());
    }

    #[test]
    fn creator_depends_on_program_id() {
        let cm = Pubkey::new_from_array([0x55u8; 32]);
        let other = ProgramIds {
            candy_machine: Pubkey::new_from_array([9u8; 32]),
            ..ProgramIds::default()
        };

        let (a, _) = find_candy_machine_creator_pda(&programs(), &cm).unwrap();
        let (b, _) = find_candy_machine_creator_pda(&other, &cm).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn metadata_matches_published_address_for_wrapped_sol() {
        // Metadata PDA for the wrapped SOL mint as reported by explorers.
        let mint: Pubkey = "So11111111111111111111111111111111111111112".parse().unwrap();
        let metadata = find_metadata_pda(&programs(), &mint).unwrap();
        assert_eq!(
            metadata.to_string(),
            "6dM4TqWyWJsbx7obrdLcviBkTafD5E8av61zfU6jq57X"
        );
    }
}
