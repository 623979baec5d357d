//! ECB (Electronic Code Book) mode implementation

use crate::error::{CipherModeError, Result};
use crate::{padding, BlockCipher, BLOCK_SIZE};

use super::load_block;

/// ECB mode encryption
///
/// Every padded block is encrypted independently: `C_i = E(K, P_i)`.
pub fn encrypt<C: BlockCipher + ?Sized>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut data = padding::pad(plaintext, BLOCK_SIZE)?;

    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = load_block(chunk);
        cipher.encrypt_block(&mut block);
        chunk.copy_from_slice(&block);
    }

    Ok(data)
}

/// ECB mode decryption
pub fn decrypt<C: BlockCipher + ?Sized>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherModeError::InvalidPadding);
    }

    let mut data = ciphertext.to_vec();
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut block = load_block(chunk);
        cipher.decrypt_block(&mut block);
        chunk.copy_from_slice(&block);
    }

    padding::unpad_vec(data, BLOCK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::vectors;

    #[test]
    fn test_ecb_sp800_38a() {
        let cipher = vectors::cipher();
        let plaintext = vectors::bytes(vectors::PLAINTEXT);

        let ciphertext = encrypt(&cipher, &plaintext).unwrap();
        // 64 aligned bytes gain one full padding block
        assert_eq!(ciphertext.len(), 80);
        assert_eq!(&ciphertext[..64], &vectors::bytes(vectors::ECB)[..]);

        assert_eq!(decrypt(&cipher, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_ecb_equal_blocks_leak() {
        let cipher = vectors::cipher();
        let ciphertext = encrypt(&cipher, &[0x41u8; 32]).unwrap();
        assert_eq!(ciphertext[..16], ciphertext[16..32]);
    }

    #[test]
    fn test_ecb_rejects_unaligned_and_empty() {
        let cipher = vectors::cipher();
        assert_eq!(decrypt(&cipher, &[0u8; 20]), Err(CipherModeError::InvalidPadding));
        assert_eq!(decrypt(&cipher, &[]), Err(CipherModeError::InvalidPadding));
    }
}
