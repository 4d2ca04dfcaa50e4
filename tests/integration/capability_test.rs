// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cipherbridge::engine::{CipherToken, EngineError, ModeToken};
use cipherbridge::{
    CapabilityRegistry, CipherAlgorithm, CipherEngine, CipherMode, CipherSession, CryptoError,
    NativeEngine, Pkcs7Padding, REGISTRY,
};
use std::sync::Arc;

/// A native engine build that does not offer some algorithm families.
struct PartialEngine {
    inner: NativeEngine,
    missing: Vec<&'static str>,
}

impl PartialEngine {
    fn without(missing: &[&'static str]) -> Self {
        Self {
            inner: NativeEngine::new(),
            missing: missing.to_vec(),
        }
    }
}

impl CipherEngine for PartialEngine {
    fn name(&self) -> &str {
        "partial"
    }

    fn list_algorithms(&self) -> Result<Vec<CipherToken>, EngineError> {
        Ok(self
            .inner
            .list_algorithms()?
            .into_iter()
            .filter(|t| !self.missing.contains(&t.as_str()))
            .collect())
    }

    fn list_modes(&self) -> Result<Vec<ModeToken>, EngineError> {
        self.inner.list_modes()
    }

    fn encrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.inner.encrypt(cipher, key, data, mode, iv)
    }

    fn decrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.inner.decrypt(cipher, key, data, mode, iv)
    }

    fn iv_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError> {
        self.inner.iv_size(cipher, mode)
    }

    fn block_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError> {
        self.inner.block_size(cipher, mode)
    }
}

fn open(registry: &CapabilityRegistry, cipher: CipherAlgorithm, mode: CipherMode) -> Result<CipherSession, CryptoError> {
    CipherSession::new_in(
        registry,
        cipher,
        mode,
        Arc::new(Pkcs7Padding::new()),
        vec![0u8; cipher.key_size()],
        None,
    )
}

#[test]
fn test_cast5_ctr_unsupported_without_cast5() {
    let registry = CapabilityRegistry::new(Arc::new(PartialEngine::without(&["cast5"])));

    let err = open(&registry, CipherAlgorithm::Cast5, CipherMode::Ctr).unwrap_err();
    assert_eq!(
        err,
        CryptoError::Unsupported {
            cipher: CipherAlgorithm::Cast5,
            mode: CipherMode::Ctr,
        }
    );
    assert!(open(&registry, CipherAlgorithm::Aes128, CipherMode::Ctr).is_ok());
}

#[test]
fn test_every_absent_pair_is_unsupported() {
    let registry = CapabilityRegistry::new(Arc::new(PartialEngine::without(&["aes", "blowfish"])));
    let supported = registry.supported_pairs();

    for cipher in CipherAlgorithm::ALL {
        for mode in CipherMode::ALL {
            let result = open(&registry, cipher, mode);
            if supported.contains(&(cipher, mode)) {
                assert!(result.is_ok(), "{cipher}/{mode}");
            } else {
                assert!(matches!(result, Err(CryptoError::Unsupported { .. })), "{cipher}/{mode}");
            }
        }
    }
    assert!(!registry.supported_ciphers().contains(&CipherAlgorithm::Aes192));
}

#[test]
fn test_global_registry_resolves_aes_to_one_token() {
    let (t128, m128) = REGISTRY.resolve(CipherAlgorithm::Aes128, CipherMode::Cbc).unwrap();
    let (t192, m192) = REGISTRY.resolve(CipherAlgorithm::Aes192, CipherMode::Cbc).unwrap();
    let (t256, m256) = REGISTRY.resolve(CipherAlgorithm::Aes256, CipherMode::Cbc).unwrap();

    assert_eq!(t128, t192);
    assert_eq!(t192, t256);
    assert_eq!(m128, m192);
    assert_eq!(m192, m256);
}

#[test]
fn test_init_warms_global_registry() {
    cipherbridge::init();
    assert!(REGISTRY.is_built());
    assert_eq!(REGISTRY.supported_modes(), CipherMode::ALL.to_vec());
}

#[cfg(all(feature = "des", feature = "blowfish", feature = "cast5", feature = "twofish"))]
#[test]
fn test_default_build_offers_every_cipher() {
    assert_eq!(REGISTRY.supported_ciphers(), CipherAlgorithm::ALL.to_vec());
}
