//! # CryptoCore
//!
//! AES-128 file encryption built from a single-block primitive and five
//! classical modes of operation.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - PKCS#7 padded, no IV
//! - **CBC** (Cipher Block Chaining) - PKCS#7 padded, requires IV
//! - **CFB** (Cipher Feedback, 128-bit segments) - stream mode, requires IV
//! - **OFB** (Output Feedback) - stream mode, requires IV
//! - **CTR** (Counter Mode) - stream mode, 128-bit big-endian counter
//!
//! ## Usage
//!
//! ```rust
//! use cryptocore::{open, seal, FramingConvention, Key, Mode};
//!
//! let key = Key::from_hex("00112233445566778899aabbccddeeff")?;
//! let plaintext = b"Hello, World!";
//!
//! // IV is generated and written in front of the ciphertext
//! let sealed = seal(Mode::Cbc, Some(key.clone()), None, plaintext)?;
//! assert_eq!(sealed.framed.len(), 16 + 16);
//!
//! let decrypted = open(Mode::Cbc, &key, &sealed.framed, None, FramingConvention::Embedded)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), cryptocore::CipherModeError>(())
//! ```
//!
//! Lower-level entry points are [`mode_encrypt`] / [`mode_decrypt`] for raw
//! ciphertext, [`frame`] / [`unframe`] for the file layout, and the per-mode
//! functions under [`modes`] for any [`BlockCipher`].

pub mod cipher;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod framing;
pub mod key;
pub mod modes;
pub mod padding;
pub mod rng;
pub mod utils;

// Re-exports for easy access
pub use cipher::{Aes128Block, BlockCipher};
pub use engine::{mode_decrypt, mode_encrypt, mode_encrypt_with_rng, Encrypted};
pub use envelope::{open, seal, seal_with_rng, Sealed};
pub use error::{CipherModeError, Result};
pub use framing::{frame, unframe, FramingConvention};
pub use key::{Iv, Key, IV_LEN, KEY_LEN};
pub use modes::{Mode, ModeEngine};
pub use rng::Csprng;

/// Cipher block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// One cipher block
pub type Block = [u8; BLOCK_SIZE];

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// List all supported cipher modes
pub fn supported_modes() -> Vec<&'static str> {
    Mode::ALL.iter().map(|mode| mode.name()).collect()
}
