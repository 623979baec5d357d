//! OFB (Output Feedback) mode implementation

use zeroize::Zeroize;

use crate::utils::xor_in_place;
use crate::{Block, BlockCipher, BLOCK_SIZE};

/// OFB keystream XOR, used for both encryption and decryption
///
/// In OFB mode, the block cipher is used to generate a pseudorandom keystream
/// which is then XORed with the input.
///
/// Algorithm:
/// 1. O_0 = IV
/// 2. O_i = E(K, O_{i-1}) for i = 1, 2, ..., n
/// 3. C_i = P_i ⊕ O_i
pub fn apply<C: BlockCipher + ?Sized>(cipher: &C, input: &[u8], iv: &Block) -> Vec<u8> {
    let mut data = input.to_vec();
    let mut register = *iv;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        cipher.encrypt_block(&mut register);
        xor_in_place(chunk, &register);
    }

    register.zeroize();
    data
}
