//! CBC (Cipher Block Chaining) mode implementation

use zeroize::Zeroize;

use crate::error::{CipherModeError, Result};
use crate::utils::xor_in_place;
use crate::{padding, Block, BlockCipher, BLOCK_SIZE};

use super::load_block;

/// CBC mode encryption
///
/// `C_i = E(K, P_i ⊕ C_{i-1})` with `C_{-1} = IV`.
pub fn encrypt<C: BlockCipher + ?Sized>(cipher: &C, plaintext: &[u8], iv: &Block) -> Result<Vec<u8>> {
    let mut data = padding::pad(plaintext, BLOCK_SIZE)?;
    let mut chain = *iv;

    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        xor_in_place(&mut chain, chunk);
        cipher.encrypt_block(&mut chain);
        chunk.copy_from_slice(&chain);
    }

    Ok(data)
}

/// CBC mode decryption
///
/// `P_i = D(K, C_i) ⊕ C_{i-1}`, then the padding is checked and stripped.
pub fn decrypt<C: BlockCipher + ?Sized>(cipher: &C, ciphertext: &[u8], iv: &Block) -> Result<Vec<u8>> {
    let data = decrypt_blocks(cipher, ciphertext, iv)?;
    padding::unpad_vec(data, BLOCK_SIZE)
}

/// Undo the chaining without touching the padding.
fn decrypt_blocks<C: BlockCipher + ?Sized>(cipher: &C, ciphertext: &[u8], iv: &Block) -> Result<Vec<u8>> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherModeError::InvalidPadding);
    }

    let mut data = ciphertext.to_vec();
    let mut previous = *iv;

    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        // feedback is the ciphertext block, never the recovered plaintext
        let current = load_block(chunk);
        let mut block = current;
        cipher.decrypt_block(&mut block);
        xor_in_place(&mut block, &previous);
        chunk.copy_from_slice(&block);
        block.zeroize();
        previous = current;
    }

    Ok(data)
}
