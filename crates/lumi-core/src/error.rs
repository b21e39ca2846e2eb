//! Error types for Lumi Slots

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("unsupported reel count: {0} (the payline evaluator needs exactly 3 reels)")]
    UnsupportedReelCount(usize),

    #[error("bet {0} is not an allowed bet")]
    InvalidBet(u64),

    #[error("insufficient credits: balance {balance}, bet {bet}")]
    InsufficientCredits { balance: u64, bet: u64 },

    #[error("reel index {index} out of range ({count} reels)")]
    ReelIndexOutOfRange { index: usize, count: usize },

    #[error("strip position {position} out of range ({len} symbols)")]
    StripPositionOutOfRange { position: usize, len: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
