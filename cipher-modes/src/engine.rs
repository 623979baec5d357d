//! Mode dispatch: the single entry point the file layer calls
//!
//! Builds a fresh AES-128 key schedule per call, sources an IV from the
//! [`Csprng`] when an IV-requiring mode is called without one, and runs the
//! selected [`ModeEngine`]. Nothing is kept between calls.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::Result;
use crate::key::{Iv, Key};
use crate::modes::{Mode, ModeEngine};
use crate::rng::Csprng;
use crate::Aes128Block;

/// Output of [`mode_encrypt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    /// IV actually used; `None` for ECB
    pub iv: Option<Iv>,
    /// True when the IV was drawn from the generator rather than supplied
    pub iv_generated: bool,
    pub ciphertext: Vec<u8>,
}

/// Encrypt `plaintext` under `mode`, generating an IV from the OS if needed.
pub fn mode_encrypt(mode: Mode, plaintext: &[u8], key: &Key, iv: Option<&Iv>) -> Result<Encrypted> {
    mode_encrypt_with_rng(&mut Csprng::os(), mode, plaintext, key, iv)
}

/// Same as [`mode_encrypt`] with an explicit random source.
pub fn mode_encrypt_with_rng<R: RngCore + CryptoRng>(
    rng: &mut Csprng<R>,
    mode: Mode,
    plaintext: &[u8],
    key: &Key,
    iv: Option<&Iv>,
) -> Result<Encrypted> {
    let (iv, iv_generated) = match (mode.requires_iv(), iv) {
        (false, supplied) => {
            if supplied.is_some() {
                debug!(%mode, "mode takes no IV, ignoring the supplied one");
            }
            (None, false)
        }
        (true, Some(iv)) => (Some(*iv), false),
        (true, None) => (Some(rng.generate_iv()?), true),
    };

    let engine = ModeEngine::new(mode, iv.as_ref())?;
    let cipher = Aes128Block::new(key);
    let ciphertext = engine.encrypt(&cipher, plaintext)?;

    debug!(
        %mode,
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        iv_generated,
        "encrypted buffer"
    );

    Ok(Encrypted {
        iv,
        iv_generated,
        ciphertext,
    })
}

/// Decrypt `ciphertext` under `mode`. IV-requiring modes fail without `iv`.
pub fn mode_decrypt(mode: Mode, ciphertext: &[u8], key: &Key, iv: Option<&Iv>) -> Result<Vec<u8>> {
    let engine = ModeEngine::new(mode, iv)?;
    let cipher = Aes128Block::new(key);
    let plaintext = engine.decrypt(&cipher, ciphertext)?;

    debug!(
        %mode,
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decrypted buffer"
    );

    Ok(plaintext)
}
