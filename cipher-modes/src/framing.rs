//! On-disk layout: `[IV: 16 bytes]? || ciphertext`
//!
//! ECB files are bare ciphertext. Every other mode carries its IV up front.
//! When an IV is also given out of band at decrypt time, the
//! [`FramingConvention`] decides whether the file still holds a prefix.

use tracing::debug;

use crate::error::{CipherModeError, Result};
use crate::key::{Iv, IV_LEN};
use crate::modes::Mode;

/// How an externally supplied IV relates to the file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingConvention {
    /// The IV prefix is always present; an override only replaces its value.
    #[default]
    Embedded,
    /// Legacy layout: with an override the whole input is ciphertext.
    Detached,
}

/// Prepend the IV for IV-requiring modes; ECB output is returned unchanged.
pub fn frame(mode: Mode, iv: Option<&Iv>, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if !mode.requires_iv() {
        return Ok(ciphertext.to_vec());
    }
    let iv = iv.ok_or(CipherModeError::InvalidIvLength { actual: 0 })?;

    let mut framed = Vec::with_capacity(IV_LEN + ciphertext.len());
    framed.extend_from_slice(iv.as_bytes());
    framed.extend_from_slice(ciphertext);
    Ok(framed)
}

/// Split framed bytes into the IV to use and the ciphertext.
pub fn unframe<'a>(
    mode: Mode,
    bytes: &'a [u8],
    iv_override: Option<&Iv>,
    convention: FramingConvention,
) -> Result<(Option<Iv>, &'a [u8])> {
    if !mode.requires_iv() {
        return Ok((None, bytes));
    }

    match (iv_override, convention) {
        (Some(iv), FramingConvention::Detached) => {
            debug!(%mode, "using out-of-band IV, no prefix stripped");
            Ok((Some(*iv), bytes))
        }
        (Some(iv), FramingConvention::Embedded) => {
            let (_, ciphertext) = split_prefix(bytes)?;
            debug!(%mode, "embedded IV replaced by out-of-band IV");
            Ok((Some(*iv), ciphertext))
        }
        (None, _) => {
            let (prefix, ciphertext) = split_prefix(bytes)?;
            Ok((Some(Iv::from_slice(prefix)?), ciphertext))
        }
    }
}

fn split_prefix(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    if bytes.len() < IV_LEN {
        return Err(CipherModeError::TruncatedInput {
            expected: IV_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes.split_at(IV_LEN))
}
