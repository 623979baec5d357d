//! Cryptographically secure random bytes for keys and IVs
//!
//! The entropy source is an injected capability: production code uses the
//! operating system generator, tests may hand in a seeded or failing source.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{CipherModeError, Result};
use crate::key::{Iv, Key, IV_LEN, KEY_LEN};

/// Random generator over an injected entropy source
pub struct Csprng<R = OsRng> {
    source: R,
}

impl Csprng<OsRng> {
    /// Generator backed by the operating system entropy pool.
    pub fn os() -> Self {
        Self { source: OsRng }
    }
}

impl Default for Csprng<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + CryptoRng> Csprng<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Draw `n` fresh bytes from the entropy source.
    pub fn random_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Err(CipherModeError::InvalidLength(n));
        }
        let mut bytes = vec![0u8; n];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }

    pub fn generate_key(&mut self) -> Result<Key> {
        let mut bytes = [0u8; KEY_LEN];
        self.fill(&mut bytes)?;
        let key = Key::new(bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        Ok(key)
    }

    pub fn generate_iv(&mut self) -> Result<Iv> {
        let mut bytes = [0u8; IV_LEN];
        self.fill(&mut bytes)?;
        Ok(Iv::new(bytes))
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.source
            .try_fill_bytes(dest)
            .map_err(|e| CipherModeError::GenerationFailure(e.to_string()))
    }
}
