//! CFB (Cipher Feedback) mode implementation, full 128-bit segments
//!
//! Only the forward direction of the block cipher is used. The feedback
//! register always takes the ciphertext block, on both sides.

use zeroize::Zeroize;

use crate::utils::xor_in_place;
use crate::{Block, BlockCipher, BLOCK_SIZE};

/// CFB mode encryption
///
/// Algorithm:
/// 1. F_0 = IV
/// 2. C_i = P_i ⊕ E(K, F_i)
/// 3. F_{i+1} = C_i
pub fn encrypt<C: BlockCipher + ?Sized>(cipher: &C, plaintext: &[u8], iv: &Block) -> Vec<u8> {
    let mut data = plaintext.to_vec();
    let mut register = *iv;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_block(&mut register);
        xor_in_place(chunk, &register);
        register[..chunk.len()].copy_from_slice(chunk);
    }

    register.zeroize();
    data
}

/// CFB mode decryption
pub fn decrypt<C: BlockCipher + ?Sized>(cipher: &C, ciphertext: &[u8], iv: &Block) -> Vec<u8> {
    let mut data = ciphertext.to_vec();
    let mut register = *iv;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = register;
        cipher.encrypt_block(&mut keystream);
        register[..chunk.len()].copy_from_slice(chunk);
        xor_in_place(chunk, &keystream);
        keystream.zeroize();
    }

    register.zeroize();
    data
}
