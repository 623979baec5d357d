//! PKCS#7 padding
//!
//! `pad` always appends between 1 and `block_size` bytes, so aligned input
//! (including empty input) gains a full block. `unpad` folds the checks on
//! every byte of the final block into one [`Choice`] and reports a single
//! [`CipherModeError::InvalidPadding`] whatever the cause.

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{CipherModeError, Result};

fn check_block_size(block_size: usize) -> Result<u8> {
    match u8::try_from(block_size) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CipherModeError::InvalidBlockSize),
    }
}

/// Add PKCS#7 padding to data
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let size = check_block_size(block_size)?;
    let padding_length = size - (data.len() % block_size) as u8;

    let mut padded = Vec::with_capacity(data.len() + padding_length as usize);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding_length as usize, padding_length);
    Ok(padded)
}

/// Remove PKCS#7 padding from data, returning the unpadded prefix
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let size = check_block_size(block_size)?;
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CipherModeError::InvalidPadding);
    }

    let tail = &data[data.len() - block_size..];
    let padding_length = tail[block_size - 1];

    let mut valid: Choice = !padding_length.ct_eq(&0) & !padding_length.ct_gt(&size);
    for (i, byte) in tail.iter().enumerate() {
        let distance_from_end = (block_size - i) as u8;
        let in_padding = !padding_length.ct_lt(&distance_from_end);
        valid &= !in_padding | byte.ct_eq(&padding_length);
    }

    if !bool::from(valid) {
        return Err(CipherModeError::InvalidPadding);
    }
    Ok(&data[..data.len() - padding_length as usize])
}

/// Strip PKCS#7 padding from an owned buffer without copying it.
pub fn unpad_vec(mut data: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
    let unpadded_len = unpad(&data, block_size)?.len();
    data.truncate(unpadded_len);
    Ok(data)
}
