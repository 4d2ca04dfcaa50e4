// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Padding strategies used to align plaintext to the cipher block size.

pub mod ansi_x923;
pub mod iso10126;
pub mod iso7816;
pub mod pkcs7;

pub use ansi_x923::AnsiX923Padding;
pub use iso10126::Iso10126Padding;
pub use iso7816::Iso7816Padding;
pub use pkcs7::Pkcs7Padding;

use crate::error::{CryptoError, Result};

/// Pluggable padding policy consumed by a cipher session.
///
/// `padding_bytes` must return exactly `missing` bytes. `padding_size` must
/// return a count in `0..=buffer.len()`; zero means there is nothing to strip.
pub trait PaddingStrategy: Send + Sync {
    fn padding_bytes(&self, block_size: usize, missing: usize) -> Result<Vec<u8>>;

    fn padding_size(&self, buffer: &[u8], block_size: usize) -> Result<usize>;
}

/// Schemes that store the padding length in the final byte need it to fit.
pub(crate) fn check_length_byte_params(block_size: usize, missing: usize) -> Result<()> {
    if !(2..=255).contains(&block_size) {
        return Err(CryptoError::InvalidPadding(format!(
            "Invalid block size: {}",
            block_size
        )));
    }
    check_missing(block_size, missing)
}

pub(crate) fn check_missing(block_size: usize, missing: usize) -> Result<()> {
    if missing == 0 || missing > block_size {
        return Err(CryptoError::InvalidPadding(format!(
            "Cannot pad {} bytes into a {} byte block",
            missing, block_size
        )));
    }
    Ok(())
}

/// Reads the trailing length byte and checks it against the block and buffer.
pub(crate) fn trailing_length(buffer: &[u8], block_size: usize) -> Result<Option<usize>> {
    let Some(&last) = buffer.last() else {
        return Ok(None);
    };
    let padding_len = last as usize;
    if padding_len == 0 || padding_len > block_size || padding_len > buffer.len() {
        return Err(CryptoError::InvalidPadding(
            "Invalid padding length".into(),
        ));
    }
    Ok(Some(padding_len))
}

/// Compares every byte of `bytes` against `expected` without an early exit.
pub(crate) fn all_equal(bytes: &[u8], expected: u8) -> bool {
    bytes.iter().fold(0u8, |acc, &b| acc | (b ^ expected)) == 0
}
