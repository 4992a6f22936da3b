//! Candy machine records, in the borsh layout used by the program.

use borsh::{BorshDeserialize, BorshSerialize};
use chain_sol::Pubkey;
use thiserror::Error;

use crate::constants::{
    CONFIG_ARRAY_START, CONFIG_LINE_SIZE, MAX_CREATOR_LIMIT, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH,
    MAX_URI_LENGTH, UUID_LENGTH,
};
use crate::discriminator::{account_discriminator, Discriminator};

#[derive(Debug, Error)]
pub enum StateError {
    #[error("account data is {0} bytes, too short for a discriminator")]
    TooShort(usize),

    #[error("account discriminator {found:?} does not match CandyMachine {expected:?}")]
    DiscriminatorMismatch {
        expected: Discriminator,
        found: Discriminator,
    },

    #[error("failed to decode candy machine: {0}")]
    Decode(#[from] std::io::Error),
}

/// Candy machine account state.
///
/// The account holds config lines and a mint bitmask after these fields;
/// they are never decoded here.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CandyMachine {
    pub authority: Pubkey,
    pub wallet: Pubkey,
    pub token_mint: Option<Pubkey>,
    pub items_redeemed: u64,
    pub data: CandyMachineData,
}

impl CandyMachine {
    pub const ACCOUNT_NAME: &'static str = "CandyMachine";

    /// Decode raw account data, discriminator included.
    pub fn from_account_data(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < 8 {
            return Err(StateError::TooShort(data.len()));
        }

        let expected = account_discriminator(Self::ACCOUNT_NAME);
        let mut found = [0u8; 8];
        found.copy_from_slice(&data[..8]);
        if found != expected {
            return Err(StateError::DiscriminatorMismatch { expected, found });
        }

        let mut rest = &data[8..];
        Ok(Self::deserialize(&mut rest)?)
    }

    /// Symbol without the zero padding the program stores.
    pub fn symbol(&self) -> &str {
        self.data.symbol.trim_end_matches('\0')
    }

    pub fn items_remaining(&self) -> u64 {
        self.data.items_available.saturating_sub(self.items_redeemed)
    }
}

/// Candy machine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CandyMachineData {
    pub uuid: String,
    pub price: u64,
    pub symbol: String,
    /// Royalty basis points that go to creators in secondary sales (0-10000).
    pub seller_fee_basis_points: u16,
    pub max_supply: u64,
    pub is_mutable: bool,
    pub retain_authority: bool,
    pub go_live_date: Option<i64>,
    pub end_settings: Option<EndSettings>,
    pub creators: Vec<Creator>,
    pub hidden_settings: Option<HiddenSettings>,
    pub whitelist_mint_settings: Option<WhitelistMintSettings>,
    pub items_available: u64,
    /// Requires gateway tokens on mint when set.
    pub gatekeeper: Option<GatekeeperConfig>,
}

impl CandyMachineData {
    /// Client-side checks for rules the program enforces at initialization.
    pub fn validate(&self) -> Result<(), String> {
        if self.uuid.len() != UUID_LENGTH {
            return Err(format!(
                "uuid must be exactly {UUID_LENGTH} bytes, got {}",
                self.uuid.len()
            ));
        }

        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(format!(
                "symbol is {} bytes, max is {MAX_SYMBOL_LENGTH}",
                self.symbol.len()
            ));
        }

        if self.seller_fee_basis_points > 10_000 {
            return Err(format!(
                "seller fee basis points {} exceeds 10000",
                self.seller_fee_basis_points
            ));
        }

        // The candy machine creator PDA takes one creator slot.
        if self.creators.len() > MAX_CREATOR_LIMIT - 1 {
            return Err(format!(
                "{} creators, max is {}",
                self.creators.len(),
                MAX_CREATOR_LIMIT - 1
            ));
        }

        if self.account_space().is_none() {
            return Err(format!(
                "{} items do not fit in a candy machine account",
                self.items_available
            ));
        }

        if let Some(hidden) = &self.hidden_settings {
            if hidden.name.len() > MAX_NAME_LENGTH {
                return Err(format!("hidden settings name exceeds {MAX_NAME_LENGTH} bytes"));
            }
            if hidden.uri.len() > MAX_URI_LENGTH {
                return Err(format!("hidden settings uri exceeds {MAX_URI_LENGTH} bytes"));
            }
        }

        Ok(())
    }

    /// Bytes the candy machine account needs for this configuration, or
    /// `None` when `items_available` is too large to address.
    pub fn account_space(&self) -> Option<usize> {
        if self.hidden_settings.is_some() {
            return Some(CONFIG_ARRAY_START);
        }

        let items = usize::try_from(self.items_available).ok()?;
        let lines = items.checked_mul(CONFIG_LINE_SIZE)?;
        let bitmask = (items / 8 + 1).checked_mul(2)?;
        (CONFIG_ARRAY_START + 4 + 8)
            .checked_add(lines)?
            .checked_add(bitmask)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct EndSettings {
    pub end_setting_type: EndSettingType,
    pub number: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum EndSettingType {
    Date,
    Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    /// In percentages, not basis points.
    pub share: u8,
}

/// Hidden settings for large mints that reveal metadata later.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct HiddenSettings {
    pub name: String,
    pub uri: String,
    pub hash: [u8; 32],
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct WhitelistMintSettings {
    pub mode: WhitelistMintMode,
    pub mint: Pubkey,
    pub presale: bool,
    pub discount_price: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum WhitelistMintMode {
    BurnEveryTime,
    NeverBurn,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct GatekeeperConfig {
    pub gatekeeper_network: Pubkey,
    /// Whether the gateway token expires after minting.
    pub expire_on_use: bool,
}
