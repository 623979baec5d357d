//! Whole-file seal/open: key handling, mode dispatch and framing in one call

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::engine::{mode_decrypt, mode_encrypt_with_rng};
use crate::error::Result;
use crate::framing::{frame, unframe, FramingConvention};
use crate::key::{Iv, Key};
use crate::modes::Mode;
use crate::rng::Csprng;

/// Result of [`seal`]: the bytes to persist plus whatever was generated
#[derive(Debug)]
pub struct Sealed {
    pub framed: Vec<u8>,
    pub key: Key,
    pub key_generated: bool,
    pub iv: Option<Iv>,
    pub iv_generated: bool,
}

impl Sealed {
    /// Hex of the key, only when it was generated here and the caller
    /// therefore has no other copy of it.
    pub fn generated_key_hex(&self) -> Option<String> {
        self.key_generated.then(|| self.key.to_hex())
    }

    pub fn iv_hex(&self) -> Option<String> {
        self.iv.as_ref().map(Iv::to_hex)
    }
}

/// Encrypt and frame `plaintext`, generating a key and IV where omitted.
pub fn seal(mode: Mode, key: Option<Key>, iv: Option<Iv>, plaintext: &[u8]) -> Result<Sealed> {
    seal_with_rng(&mut Csprng::os(), mode, key, iv, plaintext)
}

pub fn seal_with_rng<R: RngCore + CryptoRng>(
    rng: &mut Csprng<R>,
    mode: Mode,
    key: Option<Key>,
    iv: Option<Iv>,
    plaintext: &[u8],
) -> Result<Sealed> {
    let (key, key_generated) = match key {
        Some(key) => (key, false),
        None => (rng.generate_key()?, true),
    };
    if key_generated {
        debug!(%mode, "no key supplied, generated a fresh one");
    }

    let encrypted = mode_encrypt_with_rng(rng, mode, plaintext, &key, iv.as_ref())?;
    let framed = frame(mode, encrypted.iv.as_ref(), &encrypted.ciphertext)?;

    Ok(Sealed {
        framed,
        key,
        key_generated,
        iv: encrypted.iv,
        iv_generated: encrypted.iv_generated,
    })
}

/// Unframe and decrypt bytes produced by [`seal`].
pub fn open(
    mode: Mode,
    key: &Key,
    framed: &[u8],
    iv_override: Option<&Iv>,
    convention: FramingConvention,
) -> Result<Vec<u8>> {
    let (iv, ciphertext) = unframe(mode, framed, iv_override, convention)?;
    mode_decrypt(mode, ciphertext, key, iv.as_ref())
}
