use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

pub(crate) struct ChudexInitializePool {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent_sysvar: Pubkey,
    pub associated_token_program: Pubkey,
}

impl From<ChudexInitializePool> for Vec<AccountMeta> {
    fn from(accounts: ChudexInitializePool) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.user, true),
            AccountMeta::new(accounts.pool, false),
            AccountMeta::new(accounts.vault_a, false),
            AccountMeta::new(accounts.vault_b, false),
            AccountMeta::new_readonly(accounts.mint_a, false),
            AccountMeta::new_readonly(accounts.mint_b, false),
            AccountMeta::new(accounts.pool_mint, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.rent_sysvar, false),
            AccountMeta::new_readonly(accounts.associated_token_program, false),
        ]
    }
}

pub(crate) struct ChudexDeposit {
    pub user: Pubkey,
    pub user_token_a: Pubkey,
    pub user_token_b: Pubkey,
    pub user_pool_token: Pubkey,
    pub pool: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent_sysvar: Pubkey,
    pub associated_token_program: Pubkey,
}

impl From<ChudexDeposit> for Vec<AccountMeta> {
    fn from(accounts: ChudexDeposit) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.user, true),
            AccountMeta::new(accounts.user_token_a, false),
            AccountMeta::new(accounts.user_token_b, false),
            AccountMeta::new(accounts.user_pool_token, false),
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new(accounts.vault_a, false),
            AccountMeta::new(accounts.vault_b, false),
            AccountMeta::new(accounts.pool_mint, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            AccountMeta::new_readonly(accounts.system_program, false),
            AccountMeta::new_readonly(accounts.rent_sysvar, false),
            AccountMeta::new_readonly(accounts.associated_token_program, false),
        ]
    }
}

pub(crate) struct ChudexWithdraw {
    pub user: Pubkey,
    pub user_token_a: Pubkey,
    pub user_token_b: Pubkey,
    pub user_pool_token: Pubkey,
    pub pool: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
}

impl From<ChudexWithdraw> for Vec<AccountMeta> {
    fn from(accounts: ChudexWithdraw) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.user, true),
            AccountMeta::new(accounts.user_token_a, false),
            AccountMeta::new(accounts.user_token_b, false),
            AccountMeta::new(accounts.user_pool_token, false),
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new(accounts.vault_a, false),
            AccountMeta::new(accounts.vault_b, false),
            AccountMeta::new(accounts.pool_mint, false),
            AccountMeta::new_readonly(accounts.token_program, false),
        ]
    }
}

pub(crate) struct ChudexExchange {
    pub pool: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub user: Pubkey,
    pub user_token_dst: Pubkey,
    pub user_token_src: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub oracle: Pubkey,
    pub token_program: Pubkey,
}

impl From<ChudexExchange> for Vec<AccountMeta> {
    fn from(accounts: ChudexExchange) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new(accounts.vault_a, false),
            AccountMeta::new(accounts.vault_b, false),
            AccountMeta::new_readonly(accounts.user, true),
            AccountMeta::new(accounts.user_token_dst, false),
            AccountMeta::new(accounts.user_token_src, false),
            AccountMeta::new_readonly(accounts.mint_a, false),
            AccountMeta::new_readonly(accounts.mint_b, false),
            AccountMeta::new_readonly(accounts.oracle, false),
            AccountMeta::new_readonly(accounts.token_program, false),
        ]
    }
}
