//! Generic block cipher trait and the AES-128 primitive behind it

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;

use crate::key::Key;
use crate::Block;

/// Trait for a keyed 128-bit block cipher
///
/// The modes only ever ask for one block at a time. Implementors own their key
/// schedule; the engine builds one per call and drops it when the call returns.
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut Block);
}

/// AES-128 single-block primitive backed by the RustCrypto `aes` crate.
///
/// The expanded key schedule is wiped when this value is dropped.
pub struct Aes128Block {
    inner: Aes128,
}

impl Aes128Block {
    pub fn new(key: &Key) -> Self {
        Self {
            inner: Aes128::new(GenericArray::from_slice(key.as_bytes())),
        }
    }
}

impl BlockCipher for Aes128Block {
    fn encrypt_block(&self, block: &mut Block) {
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
    }
}
