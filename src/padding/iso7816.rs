// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};
use crate::padding::{check_missing, PaddingStrategy};

const MARKER: u8 = 0x80;

/// ISO/IEC 7816-4 padding: a `0x80` marker followed by zeros.
///
/// The length is not stored, so any block size works.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso7816Padding;

impl Iso7816Padding {
    pub fn new() -> Self {
        Self
    }
}

impl PaddingStrategy for Iso7816Padding {
    fn padding_bytes(&self, block_size: usize, missing: usize) -> Result<Vec<u8>> {
        check_missing(block_size, missing)?;
        let mut bytes = vec![0u8; missing];
        bytes[0] = MARKER;
        Ok(bytes)
    }

    fn padding_size(&self, buffer: &[u8], block_size: usize) -> Result<usize> {
        if buffer.is_empty() {
            return Ok(0);
        }
        let window = block_size.min(buffer.len());
        let tail = &buffer[buffer.len() - window..];
        match tail.iter().rposition(|&b| b != 0) {
            Some(pos) if tail[pos] == MARKER => Ok(window - pos),
            _ => Err(CryptoError::InvalidPadding(
                "Missing ISO 7816-4 marker".into(),
            )),
        }
    }
}
