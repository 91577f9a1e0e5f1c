use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const CHUDEX_PROGRAM_ID: Pubkey = pubkey!("G4QQ465gehN97upZxMh1Z4GWi347nhi9cuoxVRDdUTZf");

// SEEDS
pub const POOL_SEED: &[u8] = b"chudex_pool";
pub const POOL_MINT_SEED: &[u8] = b"chudex_pool_mint";
