// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::FacadeConfig;
use crate::engine::{native, CipherEngine, CipherToken, ModeToken, NativeEngine};
use crate::error::{CryptoError, Result};
use crate::types::{CipherAlgorithm, CipherMode};
use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Abstract cipher to the engine token it is known by.
///
/// All AES variants share one token: the engine derives the key schedule from
/// the key length.
const CIPHER_CANDIDATES: [(CipherAlgorithm, &str); 8] = [
    (CipherAlgorithm::Des, native::DES),
    (CipherAlgorithm::TripleDes, native::TRIPLE_DES),
    (CipherAlgorithm::Blowfish, native::BLOWFISH),
    (CipherAlgorithm::Cast5, native::CAST5),
    (CipherAlgorithm::Twofish, native::TWOFISH),
    (CipherAlgorithm::Aes128, native::AES),
    (CipherAlgorithm::Aes192, native::AES),
    (CipherAlgorithm::Aes256, native::AES),
];

const MODE_CANDIDATES: [(CipherMode, &str); 5] = [
    (CipherMode::Ecb, native::MODE_ECB),
    (CipherMode::Cbc, native::MODE_CBC),
    (CipherMode::Cfb, native::MODE_CFB),
    (CipherMode::Ctr, native::MODE_CTR),
    (CipherMode::Ofb, native::MODE_OFB),
];

/// Abstract identifiers the engine actually supports, with their tokens.
#[derive(Debug, Clone, Default)]
pub struct CapabilityMap {
    ciphers: HashMap<CipherAlgorithm, CipherToken>,
    modes: HashMap<CipherMode, ModeToken>,
}

impl CapabilityMap {
    fn discover(
        engine_ciphers: &[CipherToken],
        engine_modes: &[ModeToken],
        config: &FacadeConfig,
    ) -> Self {
        let ciphers = CIPHER_CANDIDATES
            .iter()
            .filter(|(cipher, _)| config.is_cipher_enabled(*cipher))
            .filter(|(_, token)| engine_ciphers.iter().any(|t| t.as_str() == *token))
            .map(|(cipher, token)| (*cipher, CipherToken::new(*token)))
            .collect();

        let modes = MODE_CANDIDATES
            .iter()
            .filter(|(mode, _)| config.is_mode_enabled(*mode))
            .filter(|(_, token)| engine_modes.iter().any(|t| t.as_str() == *token))
            .map(|(mode, token)| (*mode, ModeToken::new(*token)))
            .collect();

        Self { ciphers, modes }
    }

    pub fn cipher_token(&self, cipher: CipherAlgorithm) -> Option<&CipherToken> {
        self.ciphers.get(&cipher)
    }

    pub fn mode_token(&self, mode: CipherMode) -> Option<&ModeToken> {
        self.modes.get(&mode)
    }

    /// Supported ciphers in declaration order.
    pub fn ciphers(&self) -> Vec<CipherAlgorithm> {
        CipherAlgorithm::ALL
            .into_iter()
            .filter(|c| self.ciphers.contains_key(c))
            .collect()
    }

    /// Supported modes in declaration order.
    pub fn modes(&self) -> Vec<CipherMode> {
        CipherMode::ALL
            .into_iter()
            .filter(|m| self.modes.contains_key(m))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty() && self.modes.is_empty()
    }
}

/// Lazily discovers and caches what an engine can do.
///
/// Discovery runs at most once per registry, on first use, and the result is
/// read without locking afterwards.
pub struct CapabilityRegistry {
    engine: Arc<dyn CipherEngine>,
    config: FacadeConfig,
    map: OnceCell<CapabilityMap>,
}

impl CapabilityRegistry {
    pub fn new(engine: Arc<dyn CipherEngine>) -> Self {
        Self {
            engine,
            config: FacadeConfig::default(),
            map: OnceCell::new(),
        }
    }

    /// # Errors
    /// Returns `CryptoError::InvalidConfig` if the configuration does not validate
    pub fn with_config(engine: Arc<dyn CipherEngine>, config: FacadeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine,
            config,
            map: OnceCell::new(),
        })
    }

    pub fn engine(&self) -> &Arc<dyn CipherEngine> {
        &self.engine
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    pub fn is_built(&self) -> bool {
        self.map.get().is_some()
    }

    /// Builds the capability map if needed. Safe to call from many threads;
    /// exactly one of them performs the discovery.
    pub fn ensure_built(&self) -> &CapabilityMap {
        self.map.get_or_init(|| self.build())
    }

    fn build(&self) -> CapabilityMap {
        let listed = self
            .engine
            .list_algorithms()
            .and_then(|ciphers| Ok((ciphers, self.engine.list_modes()?)));

        let map = match listed {
            Ok((ciphers, modes)) => CapabilityMap::discover(&ciphers, &modes, &self.config),
            Err(e) => {
                log::error!(
                    "capability discovery on engine '{}' failed, no cipher will resolve: {}",
                    self.engine.name(),
                    e
                );
                CapabilityMap::default()
            }
        };

        log::debug!(
            "engine '{}' supports ciphers {:?} and modes {:?}",
            self.engine.name(),
            map.ciphers(),
            map.modes()
        );
        map
    }

    /// Maps an abstract pair to engine tokens.
    ///
    /// # Errors
    /// Returns `CryptoError::Unsupported` if either half is not supported
    pub fn resolve(&self, cipher: CipherAlgorithm, mode: CipherMode) -> Result<(CipherToken, ModeToken)> {
        let map = self.ensure_built();
        match (map.cipher_token(cipher), map.mode_token(mode)) {
            (Some(c), Some(m)) => Ok((c.clone(), m.clone())),
            _ => Err(CryptoError::Unsupported { cipher, mode }),
        }
    }

    pub fn is_supported(&self, cipher: CipherAlgorithm, mode: CipherMode) -> bool {
        self.resolve(cipher, mode).is_ok()
    }

    pub fn supported_ciphers(&self) -> Vec<CipherAlgorithm> {
        self.ensure_built().ciphers()
    }

    pub fn supported_modes(&self) -> Vec<CipherMode> {
        self.ensure_built().modes()
    }

    /// Every resolvable pair, modes outermost.
    pub fn supported_pairs(&self) -> Vec<(CipherAlgorithm, CipherMode)> {
        let map = self.ensure_built();
        let ciphers = map.ciphers();
        map.modes()
            .into_iter()
            .flat_map(|mode| ciphers.iter().map(move |cipher| (*cipher, mode)))
            .collect()
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("engine", &self.engine.name())
            .field("config", &self.config)
            .field("map", &self.map.get())
            .finish()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new(Arc::new(NativeEngine::new()))
    }
}

lazy_static! {
    pub static ref REGISTRY: CapabilityRegistry = CapabilityRegistry::default();
}
