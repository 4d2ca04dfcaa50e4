// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};
use crate::padding::{all_equal, check_length_byte_params, trailing_length, PaddingStrategy};

/// ANSI X9.23 padding: zero filler followed by a length byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiX923Padding;

impl AnsiX923Padding {
    pub fn new() -> Self {
        Self
    }
}

impl PaddingStrategy for AnsiX923Padding {
    fn padding_bytes(&self, block_size: usize, missing: usize) -> Result<Vec<u8>> {
        check_length_byte_params(block_size, missing)?;
        let mut bytes = vec![0u8; missing];
        bytes[missing - 1] = missing as u8;
        Ok(bytes)
    }

    fn padding_size(&self, buffer: &[u8], block_size: usize) -> Result<usize> {
        let Some(padding_len) = trailing_length(buffer, block_size)? else {
            return Ok(0);
        };
        let filler = &buffer[buffer.len() - padding_len..buffer.len() - 1];
        if !all_equal(filler, 0) {
            return Err(CryptoError::InvalidPadding(
                "Non-zero ANSI X9.23 filler".into(),
            ));
        }
        Ok(padding_len)
    }
}
