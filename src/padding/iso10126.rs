// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::Result;
use crate::padding::{check_length_byte_params, trailing_length, PaddingStrategy};
use rand::RngCore;

/// ISO 10126 padding: random filler followed by a length byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso10126Padding;

impl Iso10126Padding {
    pub fn new() -> Self {
        Self
    }
}

impl PaddingStrategy for Iso10126Padding {
    fn padding_bytes(&self, block_size: usize, missing: usize) -> Result<Vec<u8>> {
        check_length_byte_params(block_size, missing)?;
        let mut bytes = vec![0u8; missing];
        rand::thread_rng().fill_bytes(&mut bytes[..missing - 1]);
        bytes[missing - 1] = missing as u8;
        Ok(bytes)
    }

    /// The filler is random, so only the length byte can be checked.
    fn padding_size(&self, buffer: &[u8], block_size: usize) -> Result<usize> {
        Ok(trailing_length(buffer, block_size)?.unwrap_or(0))
    }
}
