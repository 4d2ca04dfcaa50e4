// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::cipher::capability::{CapabilityRegistry, REGISTRY};
use crate::engine::{CipherEngine, CipherToken, ModeToken};
use crate::error::{CryptoError, Result};
use crate::memory::SecretBytes;
use crate::padding::PaddingStrategy;
use crate::types::{CipherAlgorithm, CipherMode};
use std::sync::Arc;

/// Encryption output. `tag` is reserved for authenticated modes and is
/// always `None` for the block modes offered here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    pub bytes: Vec<u8>,
    pub tag: Option<Vec<u8>>,
}

impl Ciphertext {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// A validated cipher/mode pair bound to a key and a padding strategy.
///
/// Immutable after construction and safe to share between threads.
pub struct CipherSession {
    engine: Arc<dyn CipherEngine>,
    cipher: CipherAlgorithm,
    mode: CipherMode,
    cipher_token: CipherToken,
    mode_token: ModeToken,
    key: SecretBytes,
    padding: Arc<dyn PaddingStrategy>,
    tag_length: usize,
}

impl CipherSession {
    /// Creates a session against the process-wide registry.
    ///
    /// # Errors
    /// Returns `CryptoError::Unsupported` if the engine cannot perform the pair
    pub fn new(
        cipher: CipherAlgorithm,
        mode: CipherMode,
        padding: Arc<dyn PaddingStrategy>,
        key: impl Into<SecretBytes>,
        tag_length: Option<usize>,
    ) -> Result<Self> {
        Self::new_in(&REGISTRY, cipher, mode, padding, key, tag_length)
    }

    /// Creates a session against an explicit registry.
    ///
    /// The key is taken as-is; a length the engine rejects surfaces as
    /// `EngineFailure` on first use.
    ///
    /// # Errors
    /// Returns `CryptoError::Unsupported` if the registry cannot resolve the pair
    pub fn new_in(
        registry: &CapabilityRegistry,
        cipher: CipherAlgorithm,
        mode: CipherMode,
        padding: Arc<dyn PaddingStrategy>,
        key: impl Into<SecretBytes>,
        tag_length: Option<usize>,
    ) -> Result<Self> {
        let (cipher_token, mode_token) = registry.resolve(cipher, mode)?;
        let key = key.into();
        log::debug!(
            "session {}/{} resolved to {}/{} on engine '{}'",
            cipher,
            mode,
            cipher_token,
            mode_token,
            registry.engine().name()
        );

        Ok(Self {
            engine: registry.engine().clone(),
            cipher,
            mode,
            cipher_token,
            mode_token,
            key,
            padding,
            tag_length: tag_length.unwrap_or(registry.config().default_tag_length),
        })
    }

    pub fn cipher(&self) -> CipherAlgorithm {
        self.cipher
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn cipher_token(&self) -> &CipherToken {
        &self.cipher_token
    }

    pub fn mode_token(&self) -> &ModeToken {
        &self.mode_token
    }

    /// Advisory only; no tag is ever produced.
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// # Errors
    /// Returns `CryptoError::InternalInconsistency` if the engine no longer
    /// answers for the pair it validated at construction
    pub fn block_size(&self) -> Result<usize> {
        match self.engine.block_size(&self.cipher_token, &self.mode_token) {
            Ok(0) => Err(CryptoError::inconsistency(format!(
                "engine reported a zero block size for {}/{}",
                self.cipher_token, self.mode_token
            ))),
            Ok(size) => Ok(size),
            Err(e) => Err(CryptoError::inconsistency(format!(
                "block size query failed for validated pair {}/{}: {}",
                self.cipher_token, self.mode_token, e
            ))),
        }
    }

    /// # Errors
    /// Returns `CryptoError::InternalInconsistency` if the engine no longer
    /// answers for the pair it validated at construction
    pub fn iv_size(&self) -> Result<usize> {
        self.engine
            .iv_size(&self.cipher_token, &self.mode_token)
            .map_err(|e| {
                CryptoError::inconsistency(format!(
                    "IV size query failed for validated pair {}/{}: {}",
                    self.cipher_token, self.mode_token, e
                ))
            })
    }

    /// Pads and encrypts `plaintext`. Block-aligned input still receives a
    /// full block of padding, so the output is always longer than the input.
    ///
    /// # Errors
    /// Returns `CryptoError::EngineFailure` if the engine rejects the key, IV or data
    pub fn encrypt(&self, iv: &[u8], plaintext: &[u8], aad: Option<&[u8]>) -> Result<Ciphertext> {
        if aad.is_some() {
            log::warn!("associated data ignored by {}/{}", self.cipher, self.mode);
        }

        let block_size = self.block_size()?;
        let missing = block_size - plaintext.len() % block_size;
        let padding = self.padding.padding_bytes(block_size, missing)?;
        if padding.len() != missing {
            return Err(CryptoError::inconsistency(format!(
                "padding strategy produced {} bytes, expected {}",
                padding.len(),
                missing
            )));
        }

        let mut padded = Vec::with_capacity(plaintext.len() + missing);
        padded.extend_from_slice(plaintext);
        padded.extend_from_slice(&padding);
        log::trace!(
            "encrypting {} bytes ({} padding) with {}/{}",
            plaintext.len(),
            missing,
            self.cipher,
            self.mode
        );

        let bytes = self.engine.encrypt(
            &self.cipher_token,
            self.key.as_bytes(),
            &padded,
            &self.mode_token,
            iv,
        )?;
        Ok(Ciphertext { bytes, tag: None })
    }

    /// Decrypts and strips the padding.
    ///
    /// # Errors
    /// Returns `CryptoError::EngineFailure` if the engine rejects the input,
    /// `CryptoError::InvalidPadding` if the strategy rejects the trailing bytes
    pub fn decrypt(
        &self,
        iv: &[u8],
        ciphertext: &[u8],
        tag: Option<&[u8]>,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        if tag.is_some() || aad.is_some() {
            log::warn!("tag and associated data ignored by {}/{}", self.cipher, self.mode);
        }

        let mut padded = self.engine.decrypt(
            &self.cipher_token,
            self.key.as_bytes(),
            ciphertext,
            &self.mode_token,
            iv,
        )?;

        let block_size = self.block_size()?;
        let padding_len = self.padding.padding_size(&padded, block_size)?;
        if padding_len == 0 {
            return Ok(padded);
        }
        if padding_len > padded.len() {
            return Err(CryptoError::inconsistency(format!(
                "padding strategy reported {} bytes of padding in a {} byte buffer",
                padding_len,
                padded.len()
            )));
        }

        let plaintext_len = padded.len() - padding_len;
        log::trace!(
            "decrypted {} bytes ({} padding) with {}/{}",
            plaintext_len,
            padding_len,
            self.cipher,
            self.mode
        );
        padded.truncate(plaintext_len);
        Ok(padded)
    }
}

impl std::fmt::Debug for CipherSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherSession")
            .field("cipher", &self.cipher)
            .field("mode", &self.mode)
            .field("cipher_token", &self.cipher_token)
            .field("mode_token", &self.mode_token)
            .field("engine", &self.engine.name())
            .field("key", &self.key)
            .field("tag_length", &self.tag_length)
            .finish()
    }
}
