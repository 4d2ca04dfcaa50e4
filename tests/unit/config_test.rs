// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cipherbridge::{
    CapabilityRegistry, CipherAlgorithm, CipherMode, CipherSession, CryptoError, FacadeConfig,
    NativeEngine, Pkcs7Padding,
};
use std::sync::Arc;

#[test]
fn test_config_json_round_trip() {
    let config = FacadeConfig::new()
        .with_default_tag_length(8)
        .with_disabled_cipher(CipherAlgorithm::Des)
        .with_disabled_mode(CipherMode::Ecb);

    let json = serde_json::to_string(&config).unwrap();
    let parsed = FacadeConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_from_json_document() {
    let json = r#"{
        "default_tag_length": 12,
        "disabled_ciphers": ["BLOWFISH", "CAST5", "AES-128"],
        "implementation_name": "edge-node"
    }"#;
    let config = FacadeConfig::from_json_str(json).unwrap();

    assert_eq!(config.default_tag_length, 12);
    assert!(!config.is_cipher_enabled(CipherAlgorithm::Cast5));
    assert!(!config.is_cipher_enabled(CipherAlgorithm::Aes128));
    assert!(config.is_cipher_enabled(CipherAlgorithm::Aes192));
    assert!(config.disabled_modes.is_empty());
    assert_eq!(config.implementation_name, "edge-node");
}

#[test]
fn test_config_uses_display_names() {
    let config = FacadeConfig::new()
        .with_disabled_cipher(CipherAlgorithm::TripleDes)
        .with_disabled_mode(CipherMode::Ctr);
    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains(r#""disabled_ciphers":["3DES"]"#));
    assert!(json.contains(r#""disabled_modes":["CTR"]"#));
    let err = FacadeConfig::from_json_str(r#"{"disabled_ciphers":["Aes128"]}"#).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_unknown_cipher() {
    let err = FacadeConfig::from_json_str(r#"{"disabled_ciphers":["RC4"]}"#).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidConfig(_)));
}

#[test]
fn test_session_inherits_default_tag_length() {
    let config = FacadeConfig::new().with_default_tag_length(4);
    let registry = CapabilityRegistry::with_config(Arc::new(NativeEngine::new()), config).unwrap();

    let session = CipherSession::new_in(
        &registry,
        CipherAlgorithm::Aes128,
        CipherMode::Cbc,
        Arc::new(Pkcs7Padding::new()),
        vec![0u8; 16],
        None,
    )
    .unwrap();
    assert_eq!(session.tag_length(), 4);
}

#[test]
fn test_disabled_cipher_is_unsupported() {
    let config = FacadeConfig::new().with_disabled_cipher(CipherAlgorithm::Aes256);
    let registry = CapabilityRegistry::with_config(Arc::new(NativeEngine::new()), config).unwrap();

    let err = CipherSession::new_in(
        &registry,
        CipherAlgorithm::Aes256,
        CipherMode::Cbc,
        Arc::new(Pkcs7Padding::new()),
        vec![0u8; 32],
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        CryptoError::Unsupported {
            cipher: CipherAlgorithm::Aes256,
            mode: CipherMode::Cbc,
        }
    );
}
