use thiserror::Error;

/// Errors surfaced by the derivation, encoding and builder layers.
///
/// All of these are local and synchronous: the caller can recover by fixing
/// its inputs. No variant is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChudexError {
    /// A pool cannot pair a mint with itself.
    #[error("invalid asset pair: both sides are the same mint")]
    InvalidAsset,

    /// The bump search space was exhausted without finding an off-curve
    /// address. Practically unreachable, but never a panic.
    #[error("no valid program address for the given seeds")]
    NoValidAddress,

    /// A value does not fit the fixed field width of its instruction layout.
    #[error("amount {value} does not fit in {width} bytes")]
    AmountOutOfRange { value: u128, width: usize },

    /// A non-positive or otherwise out-of-domain amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A payload that does not parse as any booth instruction.
    #[error("invalid instruction data")]
    InvalidInstructionData,
}
