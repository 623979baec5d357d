//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

/// Command-line arguments for the CryptoCore file cipher.
#[derive(Parser, Debug)]
#[command(name = "cryptocore", version, about = "AES-128 file encryption in ECB, CBC, CFB, OFB and CTR mode")]
#[command(group(ArgGroup::new("operation").required(true).args(["encrypt", "decrypt"])))]
pub struct Cli {
    /// Block cipher (only AES-128 is available)
    #[arg(long, value_enum)]
    pub algorithm: Algorithm,

    /// Mode of operation: ecb, cbc, cfb, ofb or ctr
    #[arg(long, value_name = "MODE")]
    pub mode: String,

    /// Encrypt the input file
    #[arg(long)]
    pub encrypt: bool,

    /// Decrypt the input file
    #[arg(long)]
    pub decrypt: bool,

    /// Key as 32 hex digits, optionally prefixed with `--`. Generated when omitted on encrypt.
    #[arg(long, allow_hyphen_values = true, value_name = "HEX")]
    pub key: Option<String>,

    /// IV as 32 hex digits. Generated on encrypt when omitted; read from the file on decrypt.
    #[arg(long, allow_hyphen_values = true, value_name = "HEX")]
    pub iv: Option<String>,

    /// Path to the input file
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the output file (default: <input stem>.encrypted or <input stem>.decrypted)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// With --iv on decrypt, treat the whole input as ciphertext (no IV prefix)
    #[arg(long)]
    pub legacy_framing: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}

/// Supported block ciphers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Aes,
}

/// Enum representing the direction of the operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    Encrypt,
    Decrypt,
}

impl Cli {
    pub fn operation(&self) -> OperationMode {
        if self.encrypt {
            OperationMode::Encrypt
        } else {
            OperationMode::Decrypt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("cryptocore").chain(args.iter().copied()))
    }

    #[test]
    fn parses_encrypt_without_key() {
        let cli = parse(&["--algorithm", "aes", "--mode", "cbc", "--encrypt", "--input", "in.txt"]).unwrap();
        assert_eq!(cli.operation(), OperationMode::Encrypt);
        assert_eq!(cli.mode, "cbc");
        assert!(cli.key.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn accepts_dash_prefixed_key() {
        let cli = parse(&[
            "--algorithm", "aes", "--mode", "ecb", "--decrypt",
            "--key=--00112233445566778899aabbccddeeff",
            "--input", "in.enc",
        ])
        .unwrap();
        assert_eq!(cli.key.as_deref(), Some("--00112233445566778899aabbccddeeff"));
        assert_eq!(cli.operation(), OperationMode::Decrypt);
    }

    #[test]
    fn requires_exactly_one_operation() {
        assert!(parse(&["--algorithm", "aes", "--mode", "ecb", "--input", "x"]).is_err());
        assert!(parse(&["--algorithm", "aes", "--mode", "ecb", "--encrypt", "--decrypt", "--input", "x"]).is_err());
    }

    #[test]
    fn leaves_mode_validation_to_the_core() {
        let cli = parse(&["--algorithm", "aes", "--mode", "xts", "--encrypt", "--input", "x"]).unwrap();
        assert_eq!(cli.mode, "xts");
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert!(parse(&["--algorithm", "des", "--mode", "ecb", "--encrypt", "--input", "x"]).is_err());
    }
}
