//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Invalid key length: expected 16 bytes, got {actual}")]
    InvalidKeyLength { actual: usize },

    #[error("Invalid IV length: expected 16 bytes, got {actual}")]
    InvalidIvLength { actual: usize },

    /// Deliberately carries no detail about which check failed.
    #[error("Invalid padding")]
    InvalidPadding,

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Truncated input: need at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Random generation failed: {0}")]
    GenerationFailure(String),

    #[error("Invalid random length {0} (must be > 0)")]
    InvalidLength(usize),

    #[error("Invalid block size (must be between 1 and 255)")]
    InvalidBlockSize,

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

impl CipherModeError {
    /// Process exit code a command-line front end should use for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CipherModeError::InvalidKeyLength { .. } => 10,
            CipherModeError::InvalidIvLength { .. } => 11,
            CipherModeError::InvalidPadding => 12,
            CipherModeError::UnsupportedMode(_) => 13,
            CipherModeError::TruncatedInput { .. } => 14,
            CipherModeError::GenerationFailure(_) => 15,
            CipherModeError::InvalidLength(_) => 16,
            CipherModeError::InvalidBlockSize => 17,
            CipherModeError::InvalidHex(_) => 18,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
