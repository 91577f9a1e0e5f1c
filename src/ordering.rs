use solana_sdk::pubkey::Pubkey;

use crate::error::ChudexError;

/// A mint together with its decimal precision.
///
/// `decimals` comes from the mint account on chain; resolving it is the
/// caller's concern (or [`crate::ChudexSDK::mint_info`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintInfo {
    pub key: Pubkey,
    pub decimals: u8,
}

impl MintInfo {
    pub fn new(key: Pubkey, decimals: u8) -> Self {
        Self { key, decimals }
    }
}

/// Put a mint pair into canonical order.
///
/// Lower decimals sort first; equal decimals fall back to byte-wise pubkey
/// order. The result is identical regardless of argument order, which is what
/// makes the pool address independent of how the caller names the pair.
pub fn sort_mints(a: &MintInfo, b: &MintInfo) -> Result<(MintInfo, MintInfo), ChudexError> {
    if a.key == b.key {
        return Err(ChudexError::InvalidAsset);
    }

    let a_first = match a.decimals.cmp(&b.decimals) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => a.key < b.key,
    };

    if a_first {
        Ok((*a, *b))
    } else {
        Ok((*b, *a))
    }
}
