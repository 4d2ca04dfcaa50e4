// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Concrete cipher engines.
//!
//! An engine only knows its own algorithm and mode names. The capability
//! registry learns those names by enumeration and is the only place where
//! abstract identifiers meet concrete tokens.

pub mod native;

pub use native::NativeEngine;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-specific algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CipherToken(String);

/// Engine-specific mode name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModeToken(String);

macro_rules! impl_token {
    ($token:ty) => {
        impl $token {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $token {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $token {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }
    };
}

impl_token!(CipherToken);
impl_token!(ModeToken);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("invalid key length for {algorithm}: {actual} bytes")]
    InvalidKeyLength { algorithm: String, actual: usize },

    #[error("invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("data length {actual} is not a multiple of the {block_size} byte block")]
    InvalidDataLength { block_size: usize, actual: usize },

    #[error("keystream exhausted")]
    KeystreamExhausted,

    #[error("enumeration failed: {0}")]
    Enumeration(String),
}

/// Block-cipher engine addressed by concrete tokens.
pub trait CipherEngine: Send + Sync {
    /// Human-readable engine identity.
    fn name(&self) -> &str;

    fn list_algorithms(&self) -> Result<Vec<CipherToken>, EngineError>;

    fn list_modes(&self) -> Result<Vec<ModeToken>, EngineError>;

    fn encrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError>;

    fn decrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError>;

    fn iv_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError>;

    fn block_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError>;
}
