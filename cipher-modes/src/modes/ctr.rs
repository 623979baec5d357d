//! CTR (Counter) mode implementation

use zeroize::Zeroize;

use crate::utils::xor_in_place;
use crate::{Block, BlockCipher, BLOCK_SIZE};

/// Keystream block for a given counter value: `E(K, N)` with `N` big-endian.
pub fn keystream_block<C: BlockCipher + ?Sized>(cipher: &C, counter: u128) -> Block {
    let mut block = counter.to_be_bytes();
    cipher.encrypt_block(&mut block);
    block
}

/// CTR keystream XOR, used for both encryption and decryption
///
/// Algorithm:
/// 1. N_i = IV + i mod 2^128
/// 2. C_i = P_i ⊕ E(K, N_i)
pub fn apply<C: BlockCipher + ?Sized>(cipher: &C, input: &[u8], initial_counter: u128) -> Vec<u8> {
    let mut data = input.to_vec();
    let mut counter = initial_counter;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let mut keystream = keystream_block(cipher, counter);
        xor_in_place(chunk, &keystream);
        keystream.zeroize();
        counter = counter.wrapping_add(1);
    }

    data
}
