//! Key and IV value types
//!
//! Both are fixed 16-byte values that wipe themselves on drop. They are parsed
//! from hex text (optionally carrying the `--` prefix the command-line layer
//! historically passed through) or drawn from [`crate::Csprng`].

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{CipherModeError, Result};
use crate::{Block, BLOCK_SIZE};

/// Key length for AES-128 in bytes
pub const KEY_LEN: usize = 16;

/// IV length in bytes (one cipher block)
pub const IV_LEN: usize = BLOCK_SIZE;

/// Decode a hex string, tolerating surrounding whitespace and a leading `--`.
fn decode_hex(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix("--").unwrap_or(trimmed);
    hex::decode(digits)
        .map(Zeroizing::new)
        .map_err(|e| CipherModeError::InvalidHex(e.to_string()))
}

/// A 128-bit block cipher key
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a key from raw bytes, which must be exactly 16 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CipherModeError::InvalidKeyLength { actual: bytes.len() })?;
        Ok(Self(array))
    }

    /// Parse a key from hex text such as `00112233445566778899aabbccddeeff`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = decode_hex(text)?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, used to surface a generated key to the caller.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

/// A 128-bit initialization vector
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
    pub fn new(bytes: [u8; IV_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an IV from raw bytes, which must be exactly 16 long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; IV_LEN] = bytes
            .try_into()
            .map_err(|_| CipherModeError::InvalidIvLength { actual: bytes.len() })?;
        Ok(Self(array))
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = decode_hex(text)?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.0
    }

    pub fn to_block(self) -> Block {
        self.0
    }

    /// The IV read as a big-endian 128-bit integer (CTR counter base).
    pub fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<u128> for Iv {
    fn from(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({})", self.to_hex())
    }
}
