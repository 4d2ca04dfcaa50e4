// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Facade configuration.
//!
//! Deny-lists are applied during capability discovery, so a disabled cipher or
//! mode behaves exactly as if the engine did not offer it.

use crate::error::{CryptoError, Result};
use crate::types::{CipherAlgorithm, CipherMode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_LENGTH: usize = 16;
pub const DEFAULT_IMPLEMENTATION_NAME: &str = "cipherbridge";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Advisory tag length handed to new sessions.
    pub default_tag_length: usize,

    /// Ciphers never exposed, whatever the engine supports.
    pub disabled_ciphers: Vec<CipherAlgorithm>,

    /// Modes never exposed, whatever the engine supports.
    pub disabled_modes: Vec<CipherMode>,

    /// Implementation identity announced to external algorithm registries.
    pub implementation_name: String,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            default_tag_length: DEFAULT_TAG_LENGTH,
            disabled_ciphers: Vec::new(),
            disabled_modes: Vec::new(),
            implementation_name: DEFAULT_IMPLEMENTATION_NAME.to_string(),
        }
    }
}

impl FacadeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_tag_length(mut self, length: usize) -> Self {
        self.default_tag_length = length;
        self
    }

    pub fn with_disabled_cipher(mut self, cipher: CipherAlgorithm) -> Self {
        if !self.disabled_ciphers.contains(&cipher) {
            self.disabled_ciphers.push(cipher);
        }
        self
    }

    pub fn with_disabled_mode(mut self, mode: CipherMode) -> Self {
        if !self.disabled_modes.contains(&mode) {
            self.disabled_modes.push(mode);
        }
        self
    }

    pub fn with_implementation_name(mut self, name: impl Into<String>) -> Self {
        self.implementation_name = name.into();
        self
    }

    pub fn is_cipher_enabled(&self, cipher: CipherAlgorithm) -> bool {
        !self.disabled_ciphers.contains(&cipher)
    }

    pub fn is_mode_enabled(&self, mode: CipherMode) -> bool {
        !self.disabled_modes.contains(&mode)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_tag_length == 0 {
            return Err(CryptoError::InvalidConfig(
                "default_tag_length must be greater than zero".into(),
            ));
        }
        if self.implementation_name.trim().is_empty() {
            return Err(CryptoError::InvalidConfig(
                "implementation_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FacadeConfig = serde_json::from_str(json)
            .map_err(|e| CryptoError::InvalidConfig(format!("Malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
