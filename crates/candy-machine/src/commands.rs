//! Transaction assembly for the candy machine program.
//!
//! Each command returns a legacy [`Transaction`] that is partially signed by
//! the keypair it generated. The payer's signature slot is left empty for the
//! submission layer to fill.

use chain_sol::spl_token::{self, initialize_mint, mint_to};
use chain_sol::system::create_account;
use chain_sol::{
    Hash, Instruction, Keypair, Message, Pubkey, Signer, Transaction, MINT_ACCOUNT_SIZE,
    TOKEN_PROGRAM_ID,
};
use tracing::debug;

use crate::config::{ClientConfig, ProgramIds};
use crate::error::CandyMachineError;
use crate::identity::{IdentitySource, OsRngIdentities};
use crate::instructions::{self, InitializeCandyMachineAccounts, MintNftAccounts};
use crate::pda::{find_candy_machine_creator_pda, find_master_edition_pda, find_metadata_pda};
use crate::provider::ChainState;
use crate::state::{CandyMachine, CandyMachineData};

type Result<T> = std::result::Result<T, CandyMachineError>;

/// Builds candy machine transactions against one set of program ids.
#[derive(Debug, Clone)]
pub struct CandyMachineCommands<I: IdentitySource = OsRngIdentities> {
    programs: ProgramIds,
    identities: I,
}

impl CandyMachineCommands<OsRngIdentities> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.programs, OsRngIdentities)
    }
}

impl Default for CandyMachineCommands<OsRngIdentities> {
    fn default() -> Self {
        Self::new(ProgramIds::default(), OsRngIdentities)
    }
}

impl<I: IdentitySource> CandyMachineCommands<I> {
    pub fn new(programs: ProgramIds, identities: I) -> Self {
        Self {
            programs,
            identities,
        }
    }

    pub fn programs(&self) -> &ProgramIds {
        &self.programs
    }

    pub fn identities(&self) -> &I {
        &self.identities
    }

    /// Build the transaction that initializes a new candy machine account.
    ///
    /// `payer` acts as wallet, authority and fee payer. The returned
    /// transaction carries only the new candy machine's signature.
    pub async fn initialize_candy_machine(
        &self,
        payer: &Pubkey,
        data: &CandyMachineData,
        chain: &dyn ChainState,
    ) -> Result<Transaction> {
        data.validate().map_err(CandyMachineError::InvalidCandyMachineData)?;

        let candy_machine = self.identities.generate();
        let accounts = InitializeCandyMachineAccounts {
            candy_machine: candy_machine.pubkey(),
            wallet: *payer,
            authority: *payer,
            payer: *payer,
        };
        let ix =
            instructions::initialize_candy_machine(&self.programs.candy_machine, &accounts, data)?;

        let blockhash = chain
            .latest_blockhash()
            .await
            .map_err(CandyMachineError::ChainQueryFailed)?;

        let tx = finalize(&[ix], payer, blockhash, &candy_machine)?;
        debug!(
            candy_machine = %candy_machine.pubkey(),
            payer = %payer,
            "built initialize_candy_machine transaction"
        );
        Ok(tx)
    }

    /// Build the transaction that mints one NFT from `candy_machine` to
    /// `payer`.
    ///
    /// Instructions, in order: create the mint account, initialize it, create
    /// the payer's token account, mint one token, `mint_nft`. The returned
    /// transaction carries only the new mint's signature.
    pub async fn mint_one_token(
        &self,
        payer: &Pubkey,
        candy_machine: &Pubkey,
        chain: &dyn ChainState,
    ) -> Result<Transaction> {
        let mint = self.identities.generate();
        let mint_pubkey = mint.pubkey();
        let token_account = spl_token::derive_associated_token_address(payer, &mint_pubkey)?;

        let record = self.fetch_candy_machine(candy_machine, chain).await?;

        let (creator, creator_bump) =
            find_candy_machine_creator_pda(&self.programs, candy_machine)?;
        let metadata = find_metadata_pda(&self.programs, &mint_pubkey)?;
        let master_edition = find_master_edition_pda(&self.programs, &mint_pubkey)?;
        debug!(
            mint = %mint_pubkey,
            %token_account,
            %creator,
            creator_bump,
            %metadata,
            %master_edition,
            "derived mint accounts"
        );

        let mint_nft = instructions::mint_nft(
            &self.programs.candy_machine,
            &MintNftAccounts {
                candy_machine: *candy_machine,
                candy_machine_creator: creator,
                payer: *payer,
                wallet: record.wallet,
                metadata,
                mint: mint_pubkey,
                mint_authority: *payer,
                update_authority: *payer,
                master_edition,
                token_metadata_program: self.programs.token_metadata,
            },
            creator_bump,
        );

        let blockhash = chain
            .latest_blockhash()
            .await
            .map_err(CandyMachineError::ChainQueryFailed)?;
        let rent = chain
            .minimum_balance_for_rent_exemption(MINT_ACCOUNT_SIZE)
            .await
            .map_err(CandyMachineError::ChainQueryFailed)?;

        let ixs = [
            create_account(payer, &mint_pubkey, rent, MINT_ACCOUNT_SIZE, &TOKEN_PROGRAM_ID),
            initialize_mint(&mint_pubkey, 0, payer, Some(payer)),
            spl_token::create_associated_token_account(payer, payer, &mint_pubkey)?,
            mint_to(&mint_pubkey, &token_account, payer, 1)?,
            mint_nft,
        ];

        let tx = finalize(&ixs, payer, blockhash, &mint)?;
        debug!(
            candy_machine = %candy_machine,
            mint = %mint_pubkey,
            payer = %payer,
            "built mint_nft transaction"
        );
        Ok(tx)
    }

    async fn fetch_candy_machine(
        &self,
        address: &Pubkey,
        chain: &dyn ChainState,
    ) -> Result<CandyMachine> {
        let lookup_failed = |reason: String| CandyMachineError::AccountLookupFailed {
            address: *address,
            reason,
        };

        let account = chain
            .get_account(address)
            .await
            .map_err(|e| lookup_failed(e.to_string()))?
            .ok_or_else(|| lookup_failed("account not found".into()))?;

        if account.owner != self.programs.candy_machine {
            return Err(lookup_failed(format!(
                "account is owned by {}, not the candy machine program",
                account.owner
            )));
        }

        let record = CandyMachine::from_account_data(&account.data)
            .map_err(|e| lookup_failed(e.to_string()))?;
        debug!(
            candy_machine = %address,
            wallet = %record.wallet,
            items_redeemed = record.items_redeemed,
            "fetched candy machine"
        );
        Ok(record)
    }
}

/// Compile, round-trip through the wire format, then sign with `signer`.
fn finalize(
    ixs: &[Instruction],
    fee_payer: &Pubkey,
    blockhash: Hash,
    signer: &Keypair,
) -> Result<Transaction> {
    let message = Message::compile(ixs, fee_payer, blockhash)?;
    let wire = Transaction::new_unsigned(message).serialize()?;

    let mut tx = Transaction::deserialize(&wire)?;
    tx.partial_sign(signer)?;
    Ok(tx)
}
