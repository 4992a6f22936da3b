//! End-to-end transaction assembly against an in-memory chain.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use candy_machine_client::discriminator::{account_discriminator, instruction_discriminator};
use candy_machine_client::{
    find_candy_machine_creator_pda, find_master_edition_pda, find_metadata_pda, AccountData,
    CandyMachine, CandyMachineCommands, CandyMachineData, CandyMachineError, ChainState,
    IdentitySource, ProgramIds, ProviderError,
};
use chain_sol::keypair::verify_signature;
use chain_sol::{
    derive_associated_token_address, Hash, Keypair, Pubkey, Signer, Transaction,
    ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic keypairs that remember what they handed out.
struct SeededIdentities {
    rng: Mutex<StdRng>,
    issued: Mutex<Vec<Pubkey>>,
}

impl SeededIdentities {
    fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            issued: Mutex::new(Vec::new()),
        }
    }

    fn issued(&self) -> Vec<Pubkey> {
        self.issued.lock().unwrap().clone()
    }
}

impl IdentitySource for SeededIdentities {
    fn generate(&self) -> Keypair {
        let keypair = Keypair::generate(&mut *self.rng.lock().unwrap());
        self.issued.lock().unwrap().push(keypair.pubkey());
        keypair
    }
}

struct MemoryChain {
    blockhash: Result<Hash, String>,
    rent: u64,
    accounts: HashMap<Pubkey, AccountData>,
}

impl MemoryChain {
    fn new() -> Self {
        Self {
            blockhash: Ok(Hash([0x5A; 32])),
            rent: 1_461_600,
            accounts: HashMap::new(),
        }
    }

    fn with_candy_machine(mut self, address: Pubkey, wallet: Pubkey) -> Self {
        let record = CandyMachine {
            authority: wallet,
            wallet,
            token_mint: None,
            items_redeemed: 2,
            data: sample_data(),
        };
        let mut data = account_discriminator(CandyMachine::ACCOUNT_NAME).to_vec();
        data.extend_from_slice(&borsh::to_vec(&record).unwrap());
        // Config lines follow the record on chain.
        data.resize(data.len() + 400, 0);

        self.accounts.insert(
            address,
            AccountData {
                owner: ProgramIds::default().candy_machine,
                lamports: 5_000_000,
                data,
            },
        );
        self
    }
}

#[async_trait]
impl ChainState for MemoryChain {
    async fn latest_blockhash(&self) -> Result<Hash, ProviderError> {
        self.blockhash.clone().map_err(ProviderError::Transport)
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        _data_len: u64,
    ) -> Result<u64, ProviderError> {
        Ok(self.rent)
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountData>, ProviderError> {
        Ok(self.accounts.get(address).cloned())
    }
}

fn sample_data() -> CandyMachineData {
    CandyMachineData {
        uuid: "CNDY01".into(),
        price: 1_000_000,
        symbol: "CANDY".into(),
        seller_fee_basis_points: 500,
        is_mutable: true,
        items_available: 10,
        ..CandyMachineData::default()
    }
}

fn payer() -> Pubkey {
    Keypair::from_seed(&[0xAA; 32]).pubkey()
}

#[tokio::test]
async fn initialize_is_signed_by_new_candy_machine_only() {
    init_tracing();
    let identities = SeededIdentities::new(1);
    let commands = CandyMachineCommands::new(ProgramIds::default(), identities);
    let chain = MemoryChain::new();
    let payer = payer();

    let tx = commands
        .initialize_candy_machine(&payer, &sample_data(), &chain)
        .await
        .unwrap();

    assert_eq!(tx.message.instructions.len(), 1);
    assert_eq!(tx.message.program_id(0), Some(&ProgramIds::default().candy_machine));
    assert_eq!(
        &tx.message.instructions[0].data[..8],
        &instruction_discriminator("initialize_candy_machine")
    );

    // Fee payer first, then the new candy machine.
    assert_eq!(tx.message.fee_payer(), Some(&payer));
    assert_eq!(tx.message.header.num_required_signatures, 2);

    let issued = commands_issued(&commands);
    assert_eq!(issued.len(), 1);
    let candy_machine = issued[0];

    let message = tx.message.serialize().unwrap();
    let signature = tx.signature_of(&candy_machine).expect("candy machine signed");
    assert!(verify_signature(&candy_machine, &message, signature));
    assert!(tx.signature_of(&payer).is_none());
    assert_eq!(tx.missing_signers(), vec![payer]);

    let accounts = tx.message.instruction_accounts(0).unwrap();
    assert_eq!(accounts[..4], [candy_machine, payer, payer, payer]);
    assert_eq!(accounts[4], SYSTEM_PROGRAM_ID);
}

#[tokio::test]
async fn mint_builds_five_instructions_in_order() {
    init_tracing();
    let wallet = Pubkey::new_from_array([0xBB; 32]);
    let candy_machine = Pubkey::new_from_array([0xCC; 32]);
    let chain = MemoryChain::new().with_candy_machine(candy_machine, wallet);
    let commands = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(2));
    let payer = payer();

    let tx = commands
        .mint_one_token(&payer, &candy_machine, &chain)
        .await
        .unwrap();

    let programs: Vec<Pubkey> = (0..tx.message.instructions.len())
        .map(|i| *tx.message.program_id(i).unwrap())
        .collect();
    assert_eq!(
        programs,
        vec![
            SYSTEM_PROGRAM_ID,
            TOKEN_PROGRAM_ID,
            ASSOCIATED_TOKEN_PROGRAM_ID,
            TOKEN_PROGRAM_ID,
            ProgramIds::default().candy_machine,
        ]
    );

    let issued = commands_issued(&commands);
    assert_eq!(issued.len(), 1);
    let mint = issued[0];

    // Exactly the payer and the mint must sign; only the mint has.
    assert_eq!(tx.message.signer_keys(), &[payer, mint]);
    assert_eq!(tx.missing_signers(), vec![payer]);
    tx.verify_present_signatures().unwrap();

    // The signature survives the wire format.
    let reparsed = Transaction::deserialize(&tx.serialize().unwrap()).unwrap();
    let message = reparsed.message.serialize().unwrap();
    assert!(verify_signature(&mint, &message, reparsed.signature_of(&mint).unwrap()));

    // Token instructions target the new mint and the payer's token account.
    let ata = derive_associated_token_address(&payer, &mint).unwrap();
    assert_eq!(tx.message.instruction_accounts(0).unwrap(), vec![payer, mint]);
    assert_eq!(tx.message.instruction_accounts(1).unwrap()[0], mint);
    assert_eq!(tx.message.instruction_accounts(2).unwrap()[1], ata);
    assert_eq!(tx.message.instruction_accounts(3).unwrap()[..2], [mint, ata]);
    assert_eq!(&tx.message.instructions[3].data[1..], &1u64.to_le_bytes());

    let programs_ids = ProgramIds::default();
    let (creator, bump) = find_candy_machine_creator_pda(&programs_ids, &candy_machine).unwrap();
    let mint_nft = tx.message.instruction_accounts(4).unwrap();
    assert_eq!(mint_nft.len(), 16);
    assert_eq!(mint_nft[0], candy_machine);
    assert_eq!(mint_nft[1], creator);
    assert_eq!(mint_nft[3], wallet);
    assert_eq!(mint_nft[4], find_metadata_pda(&programs_ids, &mint).unwrap());
    assert_eq!(mint_nft[5], mint);
    assert_eq!(mint_nft[8], find_master_edition_pda(&programs_ids, &mint).unwrap());

    let data = &tx.message.instructions[4].data;
    assert_eq!(&data[..8], &instruction_discriminator("mint_nft"));
    assert_eq!(data[8], bump);

    assert_eq!(tx.message.recent_blockhash, Hash([0x5A; 32]));
}

#[tokio::test]
async fn mint_fails_when_candy_machine_is_missing() {
    init_tracing();
    let candy_machine = Pubkey::new_from_array([0xCC; 32]);
    let commands = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(3));

    let err = commands
        .mint_one_token(&payer(), &candy_machine, &MemoryChain::new())
        .await
        .unwrap_err();

    match err {
        CandyMachineError::AccountLookupFailed { address, reason } => {
            assert_eq!(address, candy_machine);
            assert_eq!(reason, "account not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn blockhash_failure_is_a_chain_query_error() {
    init_tracing();
    let candy_machine = Pubkey::new_from_array([0xCC; 32]);
    let mut chain =
        MemoryChain::new().with_candy_machine(candy_machine, Pubkey::new_from_array([1; 32]));
    chain.blockhash = Err("connection refused".into());
    let commands = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(4));

    let err = commands
        .initialize_candy_machine(&payer(), &sample_data(), &chain)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CandyMachineError::ChainQueryFailed(ProviderError::Transport(_))
    ));

    let err = commands
        .mint_one_token(&payer(), &candy_machine, &chain)
        .await
        .unwrap_err();
    assert!(matches!(err, CandyMachineError::ChainQueryFailed(_)));
}

#[tokio::test]
async fn invalid_data_is_rejected_before_any_chain_call() {
    init_tracing();
    let mut chain = MemoryChain::new();
    chain.blockhash = Err("must not be called".into());
    let commands = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(5));

    let mut data = sample_data();
    data.uuid = "TOOLONGUUID".into();

    let err = commands
        .initialize_candy_machine(&payer(), &data, &chain)
        .await
        .unwrap_err();
    assert!(matches!(err, CandyMachineError::InvalidCandyMachineData(_)));
    assert!(commands_issued(&commands).is_empty());
}

#[tokio::test]
async fn same_seed_builds_same_transaction() {
    let wallet = Pubkey::new_from_array([0xBB; 32]);
    let candy_machine = Pubkey::new_from_array([0xCC; 32]);
    let chain = MemoryChain::new().with_candy_machine(candy_machine, wallet);

    let a = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(9))
        .mint_one_token(&payer(), &candy_machine, &chain)
        .await
        .unwrap();
    let b = CandyMachineCommands::new(ProgramIds::default(), SeededIdentities::new(9))
        .mint_one_token(&payer(), &candy_machine, &chain)
        .await
        .unwrap();

    assert_eq!(a.serialize().unwrap(), b.serialize().unwrap());
}

fn commands_issued(commands: &CandyMachineCommands<SeededIdentities>) -> Vec<Pubkey> {
    commands.identities().issued()
}
