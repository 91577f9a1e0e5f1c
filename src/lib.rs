//! # Chudex SDK
//!
//! A standalone SDK for interacting with Chudex exchange booth pools on Solana. This SDK provides two main usage flows:
//!
//! 1. **Transaction Functions (`_tx`)**: Return a fully formatted unsigned transaction that can be signed and sent
//! 2. **Instruction Functions (`_ix`)**: Return the core instruction, allowing users to manage additional calls as needed
//!
//! Everything below the RPC layer is pure: pool and pool-mint addresses are
//! program derived addresses computed from the mint pair, vaults are associated
//! token accounts of the pool, and each instruction payload is a 1-byte opcode
//! followed by fixed-width little-endian fields. Re-deriving or re-encoding the
//! same inputs always yields the same bytes.
//!
//! ## 🚀 Quick Start
//!
//! ### Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chudex-sdk = "0.1.0"
//! ```
//!
//! ### Basic Setup
//!
//! ```rust,no_run
//! use chudex_sdk::ChudexSDK;
//! use solana_sdk::commitment_config::CommitmentLevel;
//!
//! let mut sdk = ChudexSDK::new("https://api.devnet.solana.com", CommitmentLevel::Confirmed);
//! ```
//!
//! ## ⚠️ Important: mint order
//!
//! **A pool exists once per unordered mint pair.** The SDK sorts the pair
//! canonically (lower decimals first, byte-wise pubkey order on ties) before
//! deriving any address, so initializing or addressing a pool as `(A, B)` or
//! `(B, A)` resolves to the same accounts. Amount arguments of the `_tx`
//! functions follow the order you pass the pair in; the `_ix` builders take
//! amounts in canonical order.
//!
//! ## 📖 Usage Patterns
//!
//! ### 1. Transaction Functions (`_tx`)
//!
//! ```rust,no_run
//! # use chudex_sdk::ChudexSDK;
//! # use solana_sdk::pubkey::Pubkey;
//! # async fn run(mut sdk: ChudexSDK, mint_1: Pubkey, mint_2: Pubkey, oracle: Pubkey, user: Pubkey) -> anyhow::Result<()> {
//! // Initialize a pool charging fee / 10^fee_decimals per exchange
//! let tx = sdk.initialize_pool_tx(&mint_1, &mint_2, 5, 3, &user).await?;
//!
//! // Deposit liquidity: exactly 2 mint_1, at most 3 mint_2
//! let tx = sdk.deposit_tx(&mint_1, &mint_2, 2_000_000_000, 3_000_000, &user).await?;
//!
//! // Exchange 1 mint_1 for mint_2
//! let tx = sdk.exchange_tx(&mint_1, &mint_2, 1_000_000_000, &oracle, &user).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Each `_tx` function returns an unsigned `VersionedTransaction` with a fresh
//! blockhash; sign it with the user keypair and send it through any RPC
//! client.
//!
//! ### 2. Instruction Functions (`_ix`)
//!
//! `load_pool` must be called at least once before the `_ix` builders:
//!
//! ```rust,no_run
//! # use chudex_sdk::{ChudexSDK, DepositParams};
//! # use solana_sdk::pubkey::Pubkey;
//! # async fn run(mut sdk: ChudexSDK, mint_1: Pubkey, mint_2: Pubkey, user: Pubkey) -> anyhow::Result<()> {
//! let keys = sdk.load_pool(&mint_1, &mint_2).await?;
//!
//! let deposit_ix = sdk.deposit_ix(&DepositParams {
//!     user,
//!     token_a_amount: 2_000_000_000,   // canonical token A
//!     max_token_b_amount: 3_000_000,   // canonical token B
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! Callers that cannot use RPC at all can derive [`PoolKeys`] directly from
//! [`MintInfo`] values and drive [`ChudexAmm`] themselves; nothing in the
//! builder layer touches the network.

mod account_metas;
mod booth;
mod constants;
mod error;
mod instruction;
mod ordering;
mod params;
mod pda;
mod sdk;

pub use sdk::ChudexSDK;

pub use booth::{ChudexAmm, PoolKeys};
pub use error::ChudexError;
pub use instruction::{AMOUNT_WIDTH, ChudexInstruction, write_uint_le};
pub use ordering::{MintInfo, sort_mints};
pub use params::{
    DepositAndAccountMetas, DepositParams, Direction, ExchangeAndAccountMetas, ExchangeParams,
    InitializePoolAndAccountMetas, InitializePoolParams, WithdrawAndAccountMetas, WithdrawParams,
};
pub use pda::{find_pool_address, find_pool_mint_address, user_token_address, vault_address};

pub use constants::{CHUDEX_PROGRAM_ID, POOL_MINT_SEED, POOL_SEED};
