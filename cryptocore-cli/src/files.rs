//! Whole-file reads and writes for the cipher

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::OperationMode;

/// Output path used when `--output` is not given: the input's extension is
/// replaced with `.encrypted` or `.decrypted`.
pub fn default_output_path(input: &Path, operation: OperationMode) -> PathBuf {
    let extension = match operation {
        OperationMode::Encrypt => "encrypted",
        OperationMode::Decrypt => "decrypted",
    };
    input.with_extension(extension)
}

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read input file {}", path.display()))
}

/// Write `data` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("failed to write output file {}", path.display()))
}
