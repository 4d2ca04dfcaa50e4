// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Engine-independent cipher identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    #[serde(rename = "DES")]
    Des,
    #[serde(rename = "3DES")]
    TripleDes,
    #[serde(rename = "BLOWFISH")]
    Blowfish,
    #[serde(rename = "CAST5")]
    Cast5,
    #[serde(rename = "TWOFISH")]
    Twofish,
    #[serde(rename = "AES-128")]
    Aes128,
    #[serde(rename = "AES-192")]
    Aes192,
    #[serde(rename = "AES-256")]
    Aes256,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 8] = [
        Self::Des,
        Self::TripleDes,
        Self::Blowfish,
        Self::Cast5,
        Self::Twofish,
        Self::Aes128,
        Self::Aes192,
        Self::Aes256,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Des => "DES",
            Self::TripleDes => "3DES",
            Self::Blowfish => "BLOWFISH",
            Self::Cast5 => "CAST5",
            Self::Twofish => "TWOFISH",
            Self::Aes128 => "AES-128",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
        }
    }

    /// Nominal key size in bytes. Variable-key ciphers report their usual
    /// default; the engine remains the authority on what it accepts.
    #[must_use]
    pub const fn key_size(&self) -> usize {
        match self {
            Self::Des => 8,
            Self::TripleDes => 24,
            Self::Blowfish => 16,
            Self::Cast5 => 16,
            Self::Twofish => 32,
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    pub fn is_aes(&self) -> bool {
        matches!(self, Self::Aes128 | Self::Aes192 | Self::Aes256)
    }
}

impl std::fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown cipher: {s}"))
    }
}

/// Engine-independent mode-of-operation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CipherMode {
    #[serde(rename = "ECB")]
    Ecb,
    #[serde(rename = "CBC")]
    Cbc,
    #[serde(rename = "CFB")]
    Cfb,
    #[serde(rename = "CTR")]
    Ctr,
    #[serde(rename = "OFB")]
    Ofb,
}

impl CipherMode {
    pub const ALL: [CipherMode; 5] = [Self::Ecb, Self::Cbc, Self::Cfb, Self::Ctr, Self::Ofb];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
            Self::Cfb => "CFB",
            Self::Ctr => "CTR",
            Self::Ofb => "OFB",
        }
    }
}

impl std::fmt::Display for CipherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CipherMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown mode: {s}"))
    }
}

/// How an implementation announced to an algorithm registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationKind {
    /// Pure software fallback supplied by another engine.
    Userland,
    /// Backed by compiled cipher code.
    Compiled,
}

impl std::fmt::Display for ImplementationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Userland => "userland",
            Self::Compiled => "compiled",
        };
        write!(f, "{name}")
    }
}
