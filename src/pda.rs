use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::constants::{CHUDEX_PROGRAM_ID, POOL_MINT_SEED, POOL_SEED};
use crate::error::ChudexError;

/// Derive the pool address from a canonically ordered mint pair.
///
/// Callers must order the pair with [`crate::ordering::sort_mints`] first;
/// this function does not reorder.
pub fn find_pool_address(
    first_mint: &Pubkey,
    second_mint: &Pubkey,
) -> Result<(Pubkey, u8), ChudexError> {
    Pubkey::try_find_program_address(
        &[POOL_SEED, first_mint.as_ref(), second_mint.as_ref()],
        &CHUDEX_PROGRAM_ID,
    )
    .ok_or(ChudexError::NoValidAddress)
}

/// Derive the pool share mint address from the pool address.
pub fn find_pool_mint_address(pool: &Pubkey) -> Result<(Pubkey, u8), ChudexError> {
    Pubkey::try_find_program_address(&[POOL_MINT_SEED, pool.as_ref()], &CHUDEX_PROGRAM_ID)
        .ok_or(ChudexError::NoValidAddress)
}

/// Associated token account holding one side of the pool's reserves.
pub fn vault_address(pool: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(pool, mint, &spl_token::ID)
}

/// A user's associated token account for `mint`.
pub fn user_token_address(user: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(user, mint, &spl_token::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_derivation_is_deterministic() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let one = find_pool_address(&first, &second).unwrap();
        let two = find_pool_address(&first, &second).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn pool_mint_depends_on_pool() {
        let pool_a = Pubkey::new_unique();
        let pool_b = Pubkey::new_unique();
        let mint_a = find_pool_mint_address(&pool_a).unwrap();
        let mint_b = find_pool_mint_address(&pool_b).unwrap();
        assert_ne!(mint_a.0, mint_b.0);
    }

    #[test]
    fn vault_differs_per_mint() {
        let pool = Pubkey::new_unique();
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        assert_ne!(vault_address(&pool, &mint_a), vault_address(&pool, &mint_b));
    }
}
