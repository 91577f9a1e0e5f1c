use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use solana_sdk::sysvar;

use crate::account_metas::{ChudexDeposit, ChudexExchange, ChudexInitializePool, ChudexWithdraw};
use crate::constants::CHUDEX_PROGRAM_ID;
use crate::error::ChudexError;
use crate::instruction::ChudexInstruction;
use crate::ordering::{MintInfo, sort_mints};
use crate::params::{
    DepositAndAccountMetas, DepositParams, Direction, ExchangeAndAccountMetas, ExchangeParams,
    InitializePoolAndAccountMetas, InitializePoolParams, WithdrawAndAccountMetas, WithdrawParams,
};
use crate::pda::{find_pool_address, find_pool_mint_address, user_token_address, vault_address};

/// Resolved addresses of one pool, in canonical mint order.
///
/// Derived once from the mint pair and owned by the caller; every builder
/// takes it by reference. Persisting and reloading it is the caller's
/// concern; re-deriving always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolKeys {
    pub pool: Pubkey,
    pub pool_bump: u8,
    pub mint_a: MintInfo,
    pub mint_b: MintInfo,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub pool_mint: Pubkey,
    pub pool_mint_bump: u8,
}

impl PoolKeys {
    /// Derive the full record from a mint pair, in either order.
    pub fn derive(token_a: &MintInfo, token_b: &MintInfo) -> Result<Self, ChudexError> {
        let (first, second) = sort_mints(token_a, token_b)?;
        let (pool, pool_bump) = find_pool_address(&first.key, &second.key)?;
        let (pool_mint, pool_mint_bump) = find_pool_mint_address(&pool)?;

        Ok(Self {
            pool,
            pool_bump,
            mint_a: first,
            mint_b: second,
            vault_a: vault_address(&pool, &first.key),
            vault_b: vault_address(&pool, &second.key),
            pool_mint,
            pool_mint_bump,
        })
    }

    /// Whether the caller's `(token_a, token_b)` order was flipped by
    /// canonical ordering. Callers passing per-token amounts must swap them
    /// when this returns true.
    pub fn is_reordered(&self, token_a: &Pubkey) -> bool {
        self.mint_a.key != *token_a
    }
}

/// Instruction builder for one exchange booth pool.
#[derive(Debug, Clone)]
pub struct ChudexAmm {
    keys: PoolKeys,
}

impl ChudexAmm {
    pub fn new(keys: PoolKeys) -> Self {
        Self { keys }
    }

    pub fn program_id(&self) -> Pubkey {
        CHUDEX_PROGRAM_ID
    }

    pub fn key(&self) -> Pubkey {
        self.keys.pool
    }

    pub fn keys(&self) -> &PoolKeys {
        &self.keys
    }

    pub fn get_initialize_pool_and_account_metas(
        &self,
        params: &InitializePoolParams,
    ) -> Result<InitializePoolAndAccountMetas, ChudexError> {
        let instruction = ChudexInstruction::InitializePool {
            fee: params.fee,
            fee_decimals: params.fee_decimals,
        };

        Ok(InitializePoolAndAccountMetas {
            opcode: instruction.opcode(),
            data: instruction.pack()?,
            account_metas: ChudexInitializePool {
                user: params.user,
                pool: self.keys.pool,
                vault_a: self.keys.vault_a,
                vault_b: self.keys.vault_b,
                mint_a: self.keys.mint_a.key,
                mint_b: self.keys.mint_b.key,
                pool_mint: self.keys.pool_mint,
                token_program: spl_token::ID,
                system_program: system_program::ID,
                rent_sysvar: sysvar::rent::ID,
                associated_token_program: spl_associated_token_account::ID,
            }
            .into(),
        })
    }

    pub fn get_deposit_and_account_metas(
        &self,
        params: &DepositParams,
    ) -> Result<DepositAndAccountMetas, ChudexError> {
        if params.token_a_amount == 0 {
            return Err(ChudexError::InvalidAmount("token_a_amount must be > 0"));
        }

        let instruction = ChudexInstruction::Deposit {
            token_a_amount: params.token_a_amount,
            max_token_b_amount: params.max_token_b_amount,
        };

        Ok(DepositAndAccountMetas {
            opcode: instruction.opcode(),
            data: instruction.pack()?,
            account_metas: ChudexDeposit {
                user: params.user,
                user_token_a: self.get_user_token_account(&params.user, &self.keys.mint_a.key),
                user_token_b: self.get_user_token_account(&params.user, &self.keys.mint_b.key),
                user_pool_token: self.get_user_token_account(&params.user, &self.keys.pool_mint),
                pool: self.keys.pool,
                vault_a: self.keys.vault_a,
                vault_b: self.keys.vault_b,
                pool_mint: self.keys.pool_mint,
                token_program: spl_token::ID,
                system_program: system_program::ID,
                rent_sysvar: sysvar::rent::ID,
                associated_token_program: spl_associated_token_account::ID,
            }
            .into(),
        })
    }

    pub fn get_withdraw_and_account_metas(
        &self,
        params: &WithdrawParams,
    ) -> Result<WithdrawAndAccountMetas, ChudexError> {
        if params.pool_token_amount == 0 {
            return Err(ChudexError::InvalidAmount("pool_token_amount must be > 0"));
        }

        let instruction = ChudexInstruction::Withdraw {
            pool_token_amount: params.pool_token_amount,
            min_token_a_amount: params.min_token_a_amount,
            min_token_b_amount: params.min_token_b_amount,
        };

        Ok(WithdrawAndAccountMetas {
            opcode: instruction.opcode(),
            data: instruction.pack()?,
            account_metas: ChudexWithdraw {
                user: params.user,
                user_token_a: self.get_user_token_account(&params.user, &self.keys.mint_a.key),
                user_token_b: self.get_user_token_account(&params.user, &self.keys.mint_b.key),
                user_pool_token: self.get_user_token_account(&params.user, &self.keys.pool_mint),
                pool: self.keys.pool,
                vault_a: self.keys.vault_a,
                vault_b: self.keys.vault_b,
                pool_mint: self.keys.pool_mint,
                token_program: spl_token::ID,
            }
            .into(),
        })
    }

    pub fn get_exchange_and_account_metas(
        &self,
        params: &ExchangeParams,
    ) -> Result<ExchangeAndAccountMetas, ChudexError> {
        if params.amount_in == 0 {
            return Err(ChudexError::InvalidAmount("amount_in must be > 0"));
        }

        let user_token_a = self.get_user_token_account(&params.user, &self.keys.mint_a.key);
        let user_token_b = self.get_user_token_account(&params.user, &self.keys.mint_b.key);
        let (user_token_src, user_token_dst) = match params.direction {
            Direction::AToB => (user_token_a, user_token_b),
            Direction::BToA => (user_token_b, user_token_a),
        };

        let instruction = ChudexInstruction::Exchange {
            amount_in: params.amount_in,
        };

        Ok(ExchangeAndAccountMetas {
            opcode: instruction.opcode(),
            data: instruction.pack()?,
            account_metas: ChudexExchange {
                pool: self.keys.pool,
                vault_a: self.keys.vault_a,
                vault_b: self.keys.vault_b,
                user: params.user,
                user_token_dst,
                user_token_src,
                mint_a: self.keys.mint_a.key,
                mint_b: self.keys.mint_b.key,
                oracle: params.oracle,
                token_program: spl_token::ID,
            }
            .into(),
        })
    }

    fn get_user_token_account(&self, user: &Pubkey, token_mint: &Pubkey) -> Pubkey {
        user_token_address(user, token_mint)
    }
}
