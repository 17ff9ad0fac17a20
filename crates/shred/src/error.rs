//! Error types for shredding, reassembly and configuration

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShredError {
    #[error("shred length must be positive")]
    InvalidShredLength,

    #[error("blob needs {count} shreds, more than a u32 index can address")]
    TooManyShreds { count: usize },

    #[error("shred {index} carries no signature")]
    Unsigned { index: u32 },

    #[error("shred index {index} out of range for total {total}")]
    IndexOutOfRange { index: u32, total: u32 },

    #[error("shred total mismatch - expected: {expected}, got: {actual}")]
    TotalMismatch { expected: u32, actual: u32 },

    #[error("conflicting payload for shred {index}")]
    DuplicateShred { index: u32 },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Crypto(#[from] shredsig_api::Error),
}

pub type Result<T> = std::result::Result<T, ShredError>;
