// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};
use crate::padding::{all_equal, check_length_byte_params, trailing_length, PaddingStrategy};

/// PKCS#7 padding: every filler byte holds the padding length.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pkcs7Padding;

impl Pkcs7Padding {
    pub fn new() -> Self {
        Self
    }
}

impl PaddingStrategy for Pkcs7Padding {
    /// # Arguments
    /// * `block_size` - block size, between 2 and 255
    /// * `missing` - number of padding bytes to produce
    fn padding_bytes(&self, block_size: usize, missing: usize) -> Result<Vec<u8>> {
        check_length_byte_params(block_size, missing)?;
        Ok(vec![missing as u8; missing])
    }

    fn padding_size(&self, buffer: &[u8], block_size: usize) -> Result<usize> {
        let Some(padding_len) = trailing_length(buffer, block_size)? else {
            return Ok(0);
        };

        // Every padding byte must equal the length
        if !all_equal(&buffer[buffer.len() - padding_len..], padding_len as u8) {
            return Err(CryptoError::InvalidPadding("Invalid padding bytes".into()));
        }
        Ok(padding_len)
    }
}
