//! Cipher modes implementation
//!
//! Each mode lives in its own module as a pure function over whole buffers.
//! [`ModeEngine`] is the tagged variant that pairs a mode with the state it
//! starts from (chain value, feedback register or counter base).

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherModeError, Result};
use crate::key::Iv;
use crate::{Block, BlockCipher, BLOCK_SIZE};

/// Supported modes of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Ecb, Mode::Cbc, Mode::Cfb, Mode::Ofb, Mode::Ctr];

    /// Whether the mode consumes an IV (everything except ECB).
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether plaintext is PKCS#7 padded before encryption.
    pub fn is_padded(self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherModeError::UnsupportedMode(s.to_string()))
    }
}

/// A mode together with its initial algorithm state
#[derive(Clone)]
pub enum ModeEngine {
    Ecb,
    Cbc { chain: Block },
    Cfb { feedback: Block },
    Ofb { feedback: Block },
    Ctr { counter: u128 },
}

impl ModeEngine {
    /// Set up the engine for `mode`. IV-requiring modes fail without an IV;
    /// ECB ignores one if given.
    pub fn new(mode: Mode, iv: Option<&Iv>) -> Result<Self> {
        if mode == Mode::Ecb {
            return Ok(ModeEngine::Ecb);
        }
        let iv = iv.ok_or(CipherModeError::InvalidIvLength { actual: 0 })?;
        Ok(match mode {
            Mode::Ecb => ModeEngine::Ecb,
            Mode::Cbc => ModeEngine::Cbc { chain: iv.to_block() },
            Mode::Cfb => ModeEngine::Cfb { feedback: iv.to_block() },
            Mode::Ofb => ModeEngine::Ofb { feedback: iv.to_block() },
            Mode::Ctr => ModeEngine::Ctr { counter: iv.as_u128() },
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            ModeEngine::Ecb => Mode::Ecb,
            ModeEngine::Cbc { .. } => Mode::Cbc,
            ModeEngine::Cfb { .. } => Mode::Cfb,
            ModeEngine::Ofb { .. } => Mode::Ofb,
            ModeEngine::Ctr { .. } => Mode::Ctr,
        }
    }

    pub fn encrypt<C: BlockCipher + ?Sized>(&self, cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeEngine::Ecb => ecb::encrypt(cipher, plaintext),
            ModeEngine::Cbc { chain } => cbc::encrypt(cipher, plaintext, chain),
            ModeEngine::Cfb { feedback } => Ok(cfb::encrypt(cipher, plaintext, feedback)),
            ModeEngine::Ofb { feedback } => Ok(ofb::apply(cipher, plaintext, feedback)),
            ModeEngine::Ctr { counter } => Ok(ctr::apply(cipher, plaintext, *counter)),
        }
    }

    pub fn decrypt<C: BlockCipher + ?Sized>(&self, cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeEngine::Ecb => ecb::decrypt(cipher, ciphertext),
            ModeEngine::Cbc { chain } => cbc::decrypt(cipher, ciphertext, chain),
            ModeEngine::Cfb { feedback } => Ok(cfb::decrypt(cipher, ciphertext, feedback)),
            // OFB and CTR are their own inverse
            ModeEngine::Ofb { feedback } => Ok(ofb::apply(cipher, ciphertext, feedback)),
            ModeEngine::Ctr { counter } => Ok(ctr::apply(cipher, ciphertext, *counter)),
        }
    }
}

impl Drop for ModeEngine {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        match self {
            ModeEngine::Ecb => {}
            ModeEngine::Cbc { chain: block }
            | ModeEngine::Cfb { feedback: block }
            | ModeEngine::Ofb { feedback: block } => block.zeroize(),
            ModeEngine::Ctr { counter } => counter.zeroize(),
        }
    }
}

/// Copy up to one block out of `chunk`; short chunks leave trailing zeros.
pub(crate) fn load_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..chunk.len()].copy_from_slice(chunk);
    block
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Aes128Block;
    use crate::Key;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("CBC".parse::<Mode>().unwrap(), Mode::Cbc);
        assert_eq!("ctr".parse::<Mode>().unwrap(), Mode::Ctr);
        assert!(matches!(
            "xts".parse::<Mode>(),
            Err(CipherModeError::UnsupportedMode(m)) if m == "xts"
        ));
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_properties() {
        assert!(!Mode::Ecb.requires_iv());
        assert!(Mode::Ecb.is_padded() && Mode::Cbc.is_padded());
        for mode in [Mode::Cbc, Mode::Cfb, Mode::Ofb, Mode::Ctr] {
            assert!(mode.requires_iv());
        }
        for mode in [Mode::Cfb, Mode::Ofb, Mode::Ctr] {
            assert!(!mode.is_padded());
        }
    }

    #[test]
    fn test_engine_requires_iv() {
        assert!(matches!(
            ModeEngine::new(Mode::Cfb, None),
            Err(CipherModeError::InvalidIvLength { actual: 0 })
        ));
        assert_eq!(ModeEngine::new(Mode::Ecb, None).unwrap().mode(), Mode::Ecb);
    }

    #[test]
    fn test_engine_carries_state() {
        let iv = Iv::from(5u128);
        let engine = ModeEngine::new(Mode::Ctr, Some(&iv)).unwrap();
        match &engine {
            ModeEngine::Ctr { counter } => assert_eq!(*counter, 5),
            _ => panic!("expected CTR engine"),
        }
    }

    #[test]
    fn test_engine_round_trip_all_modes() {
        let cipher = Aes128Block::new(&Key::new([9u8; 16]));
        let iv = Iv::new([3u8; 16]);
        let plaintext = b"Integration test message for all modes!";

        for mode in Mode::ALL {
            let engine = ModeEngine::new(mode, Some(&iv)).unwrap();
            let ciphertext = engine.encrypt(&cipher, plaintext).unwrap();
            assert_ne!(&ciphertext[..plaintext.len()], &plaintext[..], "{}", mode);
            assert_eq!(engine.decrypt(&cipher, &ciphertext).unwrap(), plaintext.to_vec(), "{}", mode);
        }
    }

    #[test]
    fn test_load_block_zero_fills() {
        assert_eq!(load_block(&[1, 2]), [1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }
}
