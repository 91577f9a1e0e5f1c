use anyhow::{Context, Result};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    instruction::Instruction,
    message::{VersionedMessage, v0},
    program_pack::Pack,
    pubkey::Pubkey,
    transaction::VersionedTransaction,
};

use crate::{
    booth::{ChudexAmm, PoolKeys},
    constants::CHUDEX_PROGRAM_ID,
    ordering::MintInfo,
    params::{DepositParams, Direction, ExchangeParams, InitializePoolParams, WithdrawParams},
};

/// High-level entry point: resolves mint metadata over RPC and assembles
/// unsigned transactions around the pure builders.
pub struct ChudexSDK {
    rpc_client: RpcClient,
    amm: Option<ChudexAmm>,
}

impl ChudexSDK {
    /// Create a new Chudex SDK instance
    pub fn new(rpc_endpoint: &str, commitment_level: CommitmentLevel) -> Self {
        let commitment_config = CommitmentConfig {
            commitment: commitment_level,
        };

        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_endpoint.to_string(), commitment_config),
            amm: None,
        }
    }

    /// Fetch a mint account and resolve its decimal precision.
    ///
    /// # Arguments
    /// * `mint` - The mint address
    ///
    /// # Returns
    /// Returns the `MintInfo` used by the ordering and derivation layers
    pub async fn mint_info(&self, mint: &Pubkey) -> Result<MintInfo> {
        let account = self
            .rpc_client
            .get_account(mint)
            .await
            .with_context(|| format!("Mint not found: {mint}"))?;

        let state = spl_token::state::Mint::unpack(&account.data)
            .with_context(|| format!("Account is not an SPL token mint: {mint}"))?;

        log::debug!("resolved mint {} with {} decimals", mint, state.decimals);

        Ok(MintInfo::new(*mint, state.decimals))
    }

    /// Resolve both mints and derive the pool record.
    ///
    /// Must be called once before any `_ix` builder; the record is also
    /// returned so callers can persist it.
    ///
    /// # Arguments
    /// * `token_a` - The first token mint address
    /// * `token_b` - The second token mint address
    ///
    /// # Returns
    /// Returns the derived `PoolKeys` (canonically ordered)
    pub async fn load_pool(&mut self, token_a: &Pubkey, token_b: &Pubkey) -> Result<PoolKeys> {
        let mint_a = self.mint_info(token_a).await?;
        let mint_b = self.mint_info(token_b).await?;

        let keys = PoolKeys::derive(&mint_a, &mint_b)?;
        self.amm = Some(ChudexAmm::new(keys));

        Ok(keys)
    }

    /// Initialize a new pool for a token pair
    ///
    /// # Arguments
    /// * `token_a` - The first token mint address
    /// * `token_b` - The second token mint address
    /// * `fee` - Fee numerator
    /// * `fee_decimals` - Fee denominator precision (fee / 10^fee_decimals)
    /// * `user` - The paying authority's public key
    ///
    /// # Returns
    /// Returns an unsigned `VersionedTransaction` ready to be signed and sent
    pub async fn initialize_pool_tx(
        &mut self,
        token_a: &Pubkey,
        token_b: &Pubkey,
        fee: u64,
        fee_decimals: u64,
        user: &Pubkey,
    ) -> Result<VersionedTransaction> {
        self.load_pool(token_a, token_b).await?;

        let initialize_pool_instruction = self.initialize_pool_ix(&InitializePoolParams {
            user: *user,
            fee,
            fee_decimals,
        })?;

        self.wrap_into_transaction(user, initialize_pool_instruction)
            .await
    }

    /// Deposit liquidity into a loaded pool
    ///
    /// Amounts are given in the order the pair was passed to this call; they
    /// are swapped internally when canonical ordering flips the pair.
    ///
    /// # Arguments
    /// * `token_a` - The first token mint address
    /// * `token_b` - The second token mint address
    /// * `token_a_amount` - Exact amount of `token_a` to deposit
    /// * `max_token_b_amount` - Cap on the matching `token_b` amount
    /// * `user` - The depositing user's public key
    ///
    /// # Returns
    /// Returns an unsigned `VersionedTransaction` ready to be signed and sent
    pub async fn deposit_tx(
        &mut self,
        token_a: &Pubkey,
        token_b: &Pubkey,
        token_a_amount: u64,
        max_token_b_amount: u64,
        user: &Pubkey,
    ) -> Result<VersionedTransaction> {
        let keys = self.load_pool(token_a, token_b).await?;

        let (token_a_amount, max_token_b_amount) = if keys.is_reordered(token_a) {
            (max_token_b_amount, token_a_amount)
        } else {
            (token_a_amount, max_token_b_amount)
        };

        let deposit_instruction = self.deposit_ix(&DepositParams {
            user: *user,
            token_a_amount,
            max_token_b_amount,
        })?;

        self.wrap_into_transaction(user, deposit_instruction).await
    }

    /// Withdraw liquidity from a loaded pool by burning pool tokens
    ///
    /// # Arguments
    /// * `token_a` - The first token mint address
    /// * `token_b` - The second token mint address
    /// * `pool_token_amount` - Amount of pool tokens to burn
    /// * `min_token_a_amount` - Minimum amount of `token_a` to receive
    /// * `min_token_b_amount` - Minimum amount of `token_b` to receive
    /// * `user` - The withdrawing user's public key
    ///
    /// # Returns
    /// Returns an unsigned `VersionedTransaction` ready to be signed and sent
    pub async fn withdraw_tx(
        &mut self,
        token_a: &Pubkey,
        token_b: &Pubkey,
        pool_token_amount: u64,
        min_token_a_amount: u64,
        min_token_b_amount: u64,
        user: &Pubkey,
    ) -> Result<VersionedTransaction> {
        let keys = self.load_pool(token_a, token_b).await?;

        let (min_token_a_amount, min_token_b_amount) = if keys.is_reordered(token_a) {
            (min_token_b_amount, min_token_a_amount)
        } else {
            (min_token_a_amount, min_token_b_amount)
        };

        let withdraw_instruction = self.withdraw_ix(&WithdrawParams {
            user: *user,
            pool_token_amount,
            min_token_a_amount,
            min_token_b_amount,
        })?;

        self.wrap_into_transaction(user, withdraw_instruction).await
    }

    /// Exchange one token of a loaded pool for the other
    ///
    /// # Arguments
    /// * `token_in` - The input token mint
    /// * `token_out` - The output token mint
    /// * `amount_in` - The amount of input tokens
    /// * `oracle` - The price oracle account address
    /// * `user` - The swapping user's public key
    ///
    /// # Returns
    /// Returns an unsigned `VersionedTransaction` ready to be signed and sent
    pub async fn exchange_tx(
        &mut self,
        token_in: &Pubkey,
        token_out: &Pubkey,
        amount_in: u64,
        oracle: &Pubkey,
        user: &Pubkey,
    ) -> Result<VersionedTransaction> {
        let keys = self.load_pool(token_in, token_out).await?;

        let direction = if keys.mint_a.key == *token_in {
            Direction::AToB
        } else {
            Direction::BToA
        };

        let exchange_instruction = self.exchange_ix(&ExchangeParams {
            user: *user,
            amount_in,
            direction,
            oracle: *oracle,
        })?;

        self.wrap_into_transaction(user, exchange_instruction).await
    }

    // MANUAL HANDLING

    // load_pool has to be called at least once before using the _ix builders

    /// Create an initialize pool instruction
    pub fn initialize_pool_ix(&self, params: &InitializePoolParams) -> Result<Instruction> {
        let amm = self.loaded_amm()?;
        let initialize_pool_and_account_metas = amm.get_initialize_pool_and_account_metas(params)?;

        Ok(Instruction {
            program_id: CHUDEX_PROGRAM_ID,
            accounts: initialize_pool_and_account_metas.account_metas,
            data: initialize_pool_and_account_metas.data,
        })
    }

    /// Create a deposit instruction
    ///
    /// Amounts refer to the pool's canonical mint order (`PoolKeys::mint_a`
    /// and `mint_b`), not the order the caller originally passed.
    pub fn deposit_ix(&self, params: &DepositParams) -> Result<Instruction> {
        let amm = self.loaded_amm()?;
        let deposit_and_account_metas = amm.get_deposit_and_account_metas(params)?;

        Ok(Instruction {
            program_id: CHUDEX_PROGRAM_ID,
            accounts: deposit_and_account_metas.account_metas,
            data: deposit_and_account_metas.data,
        })
    }

    /// Create a withdraw instruction
    pub fn withdraw_ix(&self, params: &WithdrawParams) -> Result<Instruction> {
        let amm = self.loaded_amm()?;
        let withdraw_and_account_metas = amm.get_withdraw_and_account_metas(params)?;

        Ok(Instruction {
            program_id: CHUDEX_PROGRAM_ID,
            accounts: withdraw_and_account_metas.account_metas,
            data: withdraw_and_account_metas.data,
        })
    }

    /// Create an exchange instruction
    pub fn exchange_ix(&self, params: &ExchangeParams) -> Result<Instruction> {
        let amm = self.loaded_amm()?;
        let exchange_and_account_metas = amm.get_exchange_and_account_metas(params)?;

        Ok(Instruction {
            program_id: CHUDEX_PROGRAM_ID,
            accounts: exchange_and_account_metas.account_metas,
            data: exchange_and_account_metas.data,
        })
    }

    fn loaded_amm(&self) -> Result<&ChudexAmm> {
        self.amm
            .as_ref()
            .context("Pool not loaded, call load_pool first")
    }

    async fn wrap_into_transaction(
        &self,
        payer: &Pubkey,
        instruction: Instruction,
    ) -> Result<VersionedTransaction> {
        let recent_blockhash = self.rpc_client.get_latest_blockhash().await?;
        let message_v0 = v0::Message::try_compile(payer, &[instruction], &[], recent_blockhash)?;

        Ok(VersionedTransaction {
            signatures: vec![],
            message: VersionedMessage::V0(message_v0),
        })
    }
}
