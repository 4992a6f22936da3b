use chain_sol::Pubkey;

/// Candy Machine v2: `cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ`
pub const CANDY_MACHINE_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x09, 0x2a, 0xee, 0x3d, 0xfc, 0x2d, 0x0e, 0x55, 0x78, 0x23, 0x13, 0x83, 0x79, 0x69,
    0xea, 0xf5, 0x21, 0x51, 0xc0, 0x96, 0xc0, 0x6b, 0x5c, 0x2a, 0x82, 0xf0, 0x86, 0xa5,
    0x03, 0xe8, 0x2c, 0x34,
]);

/// Token Metadata: `metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s`
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    0x0b, 0x70, 0x65, 0xb1, 0xe3, 0xd1, 0x7c, 0x45, 0x38, 0x9d, 0x52, 0x7f, 0x6b, 0x04,
    0xc3, 0xcd, 0x58, 0xb8, 0x6c, 0x73, 0x1a, 0xa0, 0xfd, 0xb5, 0x49, 0xb6, 0xd1, 0xbc,
    0x03, 0xf8, 0x29, 0x46,
]);

pub const CANDY_MACHINE_PREFIX: &str = "candy_machine";
pub const METADATA_PREFIX: &str = "metadata";
pub const EDITION_SUFFIX: &str = "edition";

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_CREATOR_LIMIT: usize = 5;
pub const MAX_CREATOR_LEN: usize = 32 + 1 + 1;

/// Required uuid length in [`CandyMachineData`](crate::state::CandyMachineData).
pub const UUID_LENGTH: usize = 6;

pub const CONFIG_LINE_SIZE: usize = 4 + MAX_NAME_LENGTH + 4 + MAX_URI_LENGTH;

/// Offset of the config line array inside a candy machine account.
pub const CONFIG_ARRAY_START: usize = 8 + // key
    32 + // authority
    32 + // wallet
    33 + // token mint
    4 + 6 + // uuid
    8 + // price
    8 + // items available
    9 + // go live
    10 + // end settings
    4 + MAX_SYMBOL_LENGTH + // u32 len + symbol
    2 + // seller fee basis points
    4 + MAX_CREATOR_LIMIT * MAX_CREATOR_LEN + // u32 len + creators
    8 + // max supply
    1 + // is mutable
    1 + // retain authority
    1 + // option for hidden setting
    4 + MAX_NAME_LENGTH + // name
    4 + MAX_URI_LENGTH + // uri
    32 + // hash
    4 + // max number of lines
    8 + // items redeemed
    1 + // whitelist option
    1 + // whitelist mint mode
    1 + // allow presale
    9 + // discount price
    32 + // whitelist mint
    1 + 32 + 1; // gatekeeper
