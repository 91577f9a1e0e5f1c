use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

/// Which way an exchange moves through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// User sends token A, receives token B.
    AToB,
    /// User sends token B, receives token A.
    BToA,
}

/// Initialize pool parameters
#[derive(Debug, Clone)]
pub struct InitializePoolParams {
    pub user: Pubkey,
    pub fee: u64,
    pub fee_decimals: u64,
}

/// Deposit parameters
#[derive(Debug, Clone)]
pub struct DepositParams {
    pub user: Pubkey,
    pub token_a_amount: u64,
    pub max_token_b_amount: u64,
}

/// Withdraw parameters
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    pub user: Pubkey,
    pub pool_token_amount: u64, // pool tokens to burn
    pub min_token_a_amount: u64,
    pub min_token_b_amount: u64,
}

/// Exchange parameters
#[derive(Debug, Clone)]
pub struct ExchangeParams {
    pub user: Pubkey,
    pub amount_in: u64,
    pub direction: Direction,
    /// Price oracle account; opaque to this crate, supplied by the caller.
    pub oracle: Pubkey,
}

/// Initialize pool result with account metadata
#[derive(Debug, Clone)]
pub struct InitializePoolAndAccountMetas {
    pub opcode: u8,
    pub data: Vec<u8>,
    pub account_metas: Vec<AccountMeta>,
}

/// Deposit result with account metadata
#[derive(Debug, Clone)]
pub struct DepositAndAccountMetas {
    pub opcode: u8,
    pub data: Vec<u8>,
    pub account_metas: Vec<AccountMeta>,
}

/// Withdraw result with account metadata
#[derive(Debug, Clone)]
pub struct WithdrawAndAccountMetas {
    pub opcode: u8,
    pub data: Vec<u8>,
    pub account_metas: Vec<AccountMeta>,
}

/// Exchange result with account metadata
#[derive(Debug, Clone)]
pub struct ExchangeAndAccountMetas {
    pub opcode: u8,
    pub data: Vec<u8>,
    pub account_metas: Vec<AccountMeta>,
}
