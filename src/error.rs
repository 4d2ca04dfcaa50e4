// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engine::EngineError;
use crate::types::{CipherAlgorithm, CipherMode};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The requested pair has no entry in the capability map.
    #[error("Unsupported cipher or mode: {cipher} / {mode}")]
    Unsupported {
        cipher: CipherAlgorithm,
        mode: CipherMode,
    },

    #[error("Engine failure: {0}")]
    EngineFailure(#[from] EngineError),

    /// A validated pair or a collaborator broke its contract. Indicates a
    /// defect or environment drift, not a recoverable condition.
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),

    #[error("Invalid padding: {0}")]
    InvalidPadding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CryptoError {
    /// Builds an `InternalInconsistency` and reports it loudly.
    pub(crate) fn inconsistency(message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("internal inconsistency: {}", message);
        CryptoError::InternalInconsistency(message)
    }

    /// True for errors that signal a defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, CryptoError::InternalInconsistency(_))
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
