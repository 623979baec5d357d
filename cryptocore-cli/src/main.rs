//! `cryptocore` — encrypt or decrypt a file with AES-128.
//!
//! Startup sequence:
//! 1. Parse [`cli::Cli`].
//! 2. Initialise logging on stderr.
//! 3. Read the whole input, run the cipher, write the whole output.
//!
//! Generated keys are printed to stdout exactly once; nothing else stores them.

mod cli;
mod files;
mod telemetry;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cryptocore::{open, seal, CipherModeError, FramingConvention, Iv, Key, Mode};
use tracing::{info, warn};

use cli::{Cli, OperationMode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level) {
        eprintln!("WARNING: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Map a failure to the exit code of its [`CipherModeError`] kind, or 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CipherModeError>()
        .map_or(1, CipherModeError::exit_code)
}

fn run(cli: &Cli) -> Result<()> {
    let mode: Mode = cli.mode.parse()?;
    let operation = cli.operation();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| files::default_output_path(&cli.input, operation));

    let iv = cli
        .iv
        .as_deref()
        .map(Iv::from_hex)
        .transpose()
        .context("invalid --iv")?;
    if iv.is_some() && !mode.requires_iv() {
        warn!(%mode, "--iv is ignored for this mode");
    }

    info!(?operation, %mode, input = %cli.input.display(), output = %output.display(), "starting");

    match operation {
        OperationMode::Encrypt => encrypt_file(cli, mode, iv, &output),
        OperationMode::Decrypt => decrypt_file(cli, mode, iv, &output),
    }
}

fn encrypt_file(cli: &Cli, mode: Mode, iv: Option<Iv>, output: &Path) -> Result<()> {
    let key = cli
        .key
        .as_deref()
        .map(Key::from_hex)
        .transpose()
        .context("invalid --key")?;
    if key.is_none() {
        info!("no key provided, generating a random key");
    }

    let plaintext = files::read_input(&cli.input)?;
    let sealed = seal(mode, key, iv, &plaintext)?;
    files::write_output(output, &sealed.framed)?;

    info!(bytes = sealed.framed.len(), "encrypted file written");
    println!("[SUCCESS] Encryption completed: {}", output.display());
    if let Some(key_hex) = sealed.generated_key_hex() {
        println!("[IMPORTANT] Generated key (save it, it is not stored anywhere): {key_hex}");
    }
    if let Some(iv_hex) = sealed.iv_hex() {
        println!("IV (hex): {iv_hex}");
    }
    Ok(())
}

fn decrypt_file(cli: &Cli, mode: Mode, iv: Option<Iv>, output: &Path) -> Result<()> {
    let key_hex = cli
        .key
        .as_deref()
        .context("--key is mandatory for decryption")?;
    let key = Key::from_hex(key_hex).context("invalid --key")?;

    let convention = framing_convention(cli.legacy_framing, iv.is_some());

    let framed = files::read_input(&cli.input)?;
    let plaintext = open(mode, &key, &framed, iv.as_ref(), convention)?;
    files::write_output(output, &plaintext)?;

    info!(bytes = plaintext.len(), "decrypted file written");
    println!("[SUCCESS] Decryption completed: {}", output.display());
    Ok(())
}

/// `--legacy-framing` only changes anything when an IV is also given on the command line.
fn framing_convention(legacy_framing: bool, iv_supplied: bool) -> FramingConvention {
    if !legacy_framing {
        return FramingConvention::Embedded;
    }
    if !iv_supplied {
        warn!("--legacy-framing has no effect without --iv, reading the IV from the file");
        return FramingConvention::Embedded;
    }
    FramingConvention::Detached
}
