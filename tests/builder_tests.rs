use chudex_sdk::{
    ChudexAmm, ChudexError, ChudexInstruction, DepositParams, Direction, ExchangeParams,
    InitializePoolParams, MintInfo, PoolKeys, WithdrawParams, write_uint_le,
};
use solana_sdk::{pubkey::Pubkey, system_program, sysvar};

use assert_matches::assert_matches;

fn test_amm() -> ChudexAmm {
    let a = MintInfo::new(Pubkey::new_from_array([1; 32]), 9);
    let b = MintInfo::new(Pubkey::new_from_array([2; 32]), 6);
    ChudexAmm::new(PoolKeys::derive(&a, &b).unwrap())
}

#[test]
fn test_initialize_pool_payload_bytes() {
    let ix = ChudexInstruction::InitializePool {
        fee: 5,
        fee_decimals: 3,
    };

    let mut expected = vec![0x00];
    expected.extend_from_slice(&5u64.to_le_bytes());
    expected.extend_from_slice(&3u64.to_le_bytes());
    assert_eq!(ix.pack().unwrap(), expected);
}

#[test]
fn test_payload_round_trips() {
    let instructions = [
        ChudexInstruction::InitializePool {
            fee: 5,
            fee_decimals: 3,
        },
        ChudexInstruction::Deposit {
            token_a_amount: 2_000_000_000,
            max_token_b_amount: 3_000_000,
        },
        ChudexInstruction::Withdraw {
            pool_token_amount: 1,
            min_token_a_amount: 0,
            min_token_b_amount: u64::MAX,
        },
        ChudexInstruction::Exchange { amount_in: 42 },
    ];

    for ix in instructions {
        assert_eq!(ChudexInstruction::unpack(&ix.pack().unwrap()).unwrap(), ix);
    }
}

#[test]
fn test_amount_width_boundary() {
    let mut buf = vec![];
    assert!(write_uint_le(&mut buf, (1u128 << 64) - 1, 8).is_ok());
    assert_matches!(
        write_uint_le(&mut buf, 1u128 << 64, 8),
        Err(ChudexError::AmountOutOfRange { width: 8, .. })
    );
}

#[test]
fn test_initialize_pool_account_list() {
    let amm = test_amm();
    let user = Pubkey::new_unique();

    let built = amm
        .get_initialize_pool_and_account_metas(&InitializePoolParams {
            user,
            fee: 5,
            fee_decimals: 3,
        })
        .unwrap();

    assert_eq!(built.opcode, 0);
    assert_eq!(built.account_metas.len(), 11);

    let metas = &built.account_metas;
    assert_eq!(metas[0].pubkey, user);
    assert!(metas[0].is_signer);
    assert!(!metas[0].is_writable);

    assert_eq!(metas[1].pubkey, amm.key());
    assert!(metas[1].is_writable);
    assert_eq!(metas[2].pubkey, amm.keys().vault_a);
    assert!(metas[2].is_writable);
    assert_eq!(metas[3].pubkey, amm.keys().vault_b);
    assert_eq!(metas[4].pubkey, amm.keys().mint_a.key);
    assert!(!metas[4].is_writable);
    assert_eq!(metas[5].pubkey, amm.keys().mint_b.key);
    assert_eq!(metas[6].pubkey, amm.keys().pool_mint);
    assert!(metas[6].is_writable);
    assert_eq!(metas[7].pubkey, spl_token::ID);
    assert_eq!(metas[8].pubkey, system_program::ID);
    assert_eq!(metas[9].pubkey, sysvar::rent::ID);
    assert_eq!(metas[10].pubkey, spl_associated_token_account::ID);
    for meta in &metas[7..] {
        assert!(!meta.is_signer);
        assert!(!meta.is_writable);
    }
}

#[test]
fn test_initialize_pool_identical_for_swapped_arguments() {
    let a = MintInfo::new(Pubkey::new_unique(), 9);
    let b = MintInfo::new(Pubkey::new_unique(), 6);
    let user = Pubkey::new_unique();

    let params = InitializePoolParams {
        user,
        fee: 5,
        fee_decimals: 3,
    };

    let built_ab = ChudexAmm::new(PoolKeys::derive(&a, &b).unwrap())
        .get_initialize_pool_and_account_metas(&params)
        .unwrap();
    let built_ba = ChudexAmm::new(PoolKeys::derive(&b, &a).unwrap())
        .get_initialize_pool_and_account_metas(&params)
        .unwrap();

    assert_eq!(built_ab.data, built_ba.data);
    assert_eq!(built_ab.account_metas, built_ba.account_metas);
}

#[test]
fn test_deposit_account_list() {
    let amm = test_amm();
    let user = Pubkey::new_unique();

    let built = amm
        .get_deposit_and_account_metas(&DepositParams {
            user,
            token_a_amount: 10,
            max_token_b_amount: 20,
        })
        .unwrap();

    assert_eq!(built.opcode, 1);
    assert_eq!(built.account_metas.len(), 12);
    assert_eq!(built.account_metas[0].pubkey, user);
    assert!(built.account_metas[0].is_signer);
    // pool is read-only on deposit
    assert_eq!(built.account_metas[4].pubkey, amm.key());
    assert!(!built.account_metas[4].is_writable);
    assert_eq!(built.account_metas[7].pubkey, amm.keys().pool_mint);
    assert!(built.account_metas[7].is_writable);
}

#[test]
fn test_deposit_zero_amount_is_invalid() {
    let amm = test_amm();

    assert_matches!(
        amm.get_deposit_and_account_metas(&DepositParams {
            user: Pubkey::new_unique(),
            token_a_amount: 0,
            max_token_b_amount: 20,
        }),
        Err(ChudexError::InvalidAmount(_))
    );
}

#[test]
fn test_withdraw_account_list_and_validation() {
    let amm = test_amm();
    let user = Pubkey::new_unique();

    let built = amm
        .get_withdraw_and_account_metas(&WithdrawParams {
            user,
            pool_token_amount: 5,
            min_token_a_amount: 1,
            min_token_b_amount: 1,
        })
        .unwrap();

    assert_eq!(built.opcode, 2);
    assert_eq!(built.account_metas.len(), 9);
    assert_eq!(built.account_metas[8].pubkey, spl_token::ID);

    assert_matches!(
        amm.get_withdraw_and_account_metas(&WithdrawParams {
            user,
            pool_token_amount: 0,
            min_token_a_amount: 1,
            min_token_b_amount: 1,
        }),
        Err(ChudexError::InvalidAmount(_))
    );
}

#[test]
fn test_exchange_direction_selects_user_accounts() {
    let amm = test_amm();
    let user = Pubkey::new_unique();
    let oracle = Pubkey::new_unique();

    let a_to_b = amm
        .get_exchange_and_account_metas(&ExchangeParams {
            user,
            amount_in: 7,
            direction: Direction::AToB,
            oracle,
        })
        .unwrap();
    let b_to_a = amm
        .get_exchange_and_account_metas(&ExchangeParams {
            user,
            amount_in: 7,
            direction: Direction::BToA,
            oracle,
        })
        .unwrap();

    assert_eq!(a_to_b.opcode, 3);
    assert_eq!(a_to_b.account_metas.len(), 10);
    assert_eq!(a_to_b.account_metas[8].pubkey, oracle);

    // dst sits at index 4, src at index 5; flipping direction swaps them
    assert_eq!(a_to_b.account_metas[4].pubkey, b_to_a.account_metas[5].pubkey);
    assert_eq!(a_to_b.account_metas[5].pubkey, b_to_a.account_metas[4].pubkey);

    // payload carries only the opcode and amount
    let mut expected = vec![0x03];
    expected.extend_from_slice(&7u64.to_le_bytes());
    assert_eq!(a_to_b.data, expected);
}

#[test]
fn test_exchange_zero_amount_is_invalid() {
    let amm = test_amm();

    assert_matches!(
        amm.get_exchange_and_account_metas(&ExchangeParams {
            user: Pubkey::new_unique(),
            amount_in: 0,
            direction: Direction::AToB,
            oracle: Pubkey::new_unique(),
        }),
        Err(ChudexError::InvalidAmount(_))
    );
}
