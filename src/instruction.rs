use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::ChudexError;

/// Field width of every amount in the booth's instruction layouts.
pub const AMOUNT_WIDTH: usize = 8;

/// Instruction set of the exchange booth program.
///
/// The wire layout is a 1-byte opcode (the variant index) followed by the
/// variant's fields as fixed-width little-endian integers. Every amount field
/// is 8 bytes wide, `fee_decimals` included.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum ChudexInstruction {
    /// Initializes a new pool. Creates the pool account, both token vaults
    /// and the pool share mint.
    InitializePool { fee: u64, fee_decimals: u64 },

    /// Provides liquidity at the current exchange rate for both tokens.
    /// Mints pool tokens to the user.
    Deposit {
        token_a_amount: u64,
        max_token_b_amount: u64,
    },

    /// Withdraws both tokens from the pool at the current exchange rate.
    /// Burns pool tokens.
    Withdraw {
        pool_token_amount: u64,
        min_token_a_amount: u64,
        min_token_b_amount: u64,
    },

    /// Swaps one token for the other.
    Exchange { amount_in: u64 },
}

impl ChudexInstruction {
    /// Opcode byte of this variant.
    pub fn opcode(&self) -> u8 {
        match self {
            ChudexInstruction::InitializePool { .. } => 0,
            ChudexInstruction::Deposit { .. } => 1,
            ChudexInstruction::Withdraw { .. } => 2,
            ChudexInstruction::Exchange { .. } => 3,
        }
    }

    /// Serialize into the exact byte layout the booth program parses.
    pub fn pack(&self) -> Result<Vec<u8>, ChudexError> {
        let mut data = vec![self.opcode()];
        match *self {
            ChudexInstruction::InitializePool { fee, fee_decimals } => {
                write_uint_le(&mut data, fee as u128, AMOUNT_WIDTH)?;
                write_uint_le(&mut data, fee_decimals as u128, AMOUNT_WIDTH)?;
            }
            ChudexInstruction::Deposit {
                token_a_amount,
                max_token_b_amount,
            } => {
                write_uint_le(&mut data, token_a_amount as u128, AMOUNT_WIDTH)?;
                write_uint_le(&mut data, max_token_b_amount as u128, AMOUNT_WIDTH)?;
            }
            ChudexInstruction::Withdraw {
                pool_token_amount,
                min_token_a_amount,
                min_token_b_amount,
            } => {
                write_uint_le(&mut data, pool_token_amount as u128, AMOUNT_WIDTH)?;
                write_uint_le(&mut data, min_token_a_amount as u128, AMOUNT_WIDTH)?;
                write_uint_le(&mut data, min_token_b_amount as u128, AMOUNT_WIDTH)?;
            }
            ChudexInstruction::Exchange { amount_in } => {
                write_uint_le(&mut data, amount_in as u128, AMOUNT_WIDTH)?;
            }
        }
        Ok(data)
    }

    /// Parse a payload back into a typed instruction.
    pub fn unpack(data: &[u8]) -> Result<Self, ChudexError> {
        let (&opcode, mut rest) = data
            .split_first()
            .ok_or(ChudexError::InvalidInstructionData)?;

        let instruction = match opcode {
            0 => ChudexInstruction::InitializePool {
                fee: read_u64_le(&mut rest)?,
                fee_decimals: read_u64_le(&mut rest)?,
            },
            1 => ChudexInstruction::Deposit {
                token_a_amount: read_u64_le(&mut rest)?,
                max_token_b_amount: read_u64_le(&mut rest)?,
            },
            2 => ChudexInstruction::Withdraw {
                pool_token_amount: read_u64_le(&mut rest)?,
                min_token_a_amount: read_u64_le(&mut rest)?,
                min_token_b_amount: read_u64_le(&mut rest)?,
            },
            3 => ChudexInstruction::Exchange {
                amount_in: read_u64_le(&mut rest)?,
            },
            _ => return Err(ChudexError::InvalidInstructionData),
        };

        if !rest.is_empty() {
            return Err(ChudexError::InvalidInstructionData);
        }
        Ok(instruction)
    }
}

/// Append `value` as a `width`-byte little-endian integer.
///
/// Rejects values that do not fit instead of truncating; a silent truncation
/// here would reach the program as a different amount. Widths beyond 16 bytes
/// have no u128 representation and are rejected the same way, never a panic.
pub fn write_uint_le(buf: &mut Vec<u8>, value: u128, width: usize) -> Result<(), ChudexError> {
    if width > 16 || (width < 16 && value >> (8 * width) != 0) {
        return Err(ChudexError::AmountOutOfRange { value, width });
    }
    buf.extend_from_slice(&value.to_le_bytes()[..width]);
    Ok(())
}

fn read_u64_le(data: &mut &[u8]) -> Result<u64, ChudexError> {
    if data.len() < AMOUNT_WIDTH {
        return Err(ChudexError::InvalidInstructionData);
    }
    let (bytes, rest) = data.split_at(AMOUNT_WIDTH);
    *data = rest;
    Ok(u64::from_le_bytes(bytes.try_into().expect("split at 8")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn write_uint_le_boundary() {
        let mut buf = vec![];
        write_uint_le(&mut buf, u64::MAX as u128, 8).unwrap();
        assert_eq!(buf, [0xff; 8]);

        assert_matches!(
            write_uint_le(&mut buf, 1u128 << 64, 8),
            Err(ChudexError::AmountOutOfRange { width: 8, .. })
        );
    }

    #[test]
    fn write_uint_le_rejects_oversized_width() {
        let mut buf = vec![];
        assert_matches!(
            write_uint_le(&mut buf, 1, 17),
            Err(ChudexError::AmountOutOfRange { width: 17, .. })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn pack_matches_borsh_layout() {
        // Manual pack and the borsh derive describe the same wire format.
        let ix = ChudexInstruction::Withdraw {
            pool_token_amount: 10,
            min_token_a_amount: 2,
            min_token_b_amount: 3,
        };
        assert_eq!(ix.pack().unwrap(), borsh::to_vec(&ix).unwrap());
    }

    #[test]
    fn unpack_rejects_trailing_bytes() {
        let mut data = ChudexInstruction::Exchange { amount_in: 1 }.pack().unwrap();
        data.push(0);
        assert_matches!(
            ChudexInstruction::unpack(&data),
            Err(ChudexError::InvalidInstructionData)
        );
    }
}
