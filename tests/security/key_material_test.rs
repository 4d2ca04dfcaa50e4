// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cipherbridge::memory::SecretBytes;
use cipherbridge::{CipherAlgorithm, CipherMode, CipherSession, CryptoError, Pkcs7Padding};
use std::sync::Arc;

#[test]
fn test_secret_bytes_debug_is_redacted() {
    let secret = SecretBytes::from(&b"super secret key"[..]);
    let rendered = format!("{:?}", secret);

    assert_eq!(rendered, "SecretBytes([REDACTED; 16])");
    assert_eq!(secret.as_bytes(), b"super secret key");
}

#[test]
fn test_session_debug_never_shows_key() {
    let session = CipherSession::new(
        CipherAlgorithm::Aes128,
        CipherMode::Ofb,
        Arc::new(Pkcs7Padding::new()),
        b"0123456789abcdef".to_vec(),
        None,
    )
    .unwrap();

    let rendered = format!("{:?}", session);
    assert!(!rendered.contains("0123456789abcdef"));
    assert!(!rendered.contains("48, 49, 50"));
}

#[test]
fn test_engine_errors_do_not_echo_key() {
    let session = CipherSession::new(
        CipherAlgorithm::Aes128,
        CipherMode::Cbc,
        Arc::new(Pkcs7Padding::new()),
        b"short-key".to_vec(),
        None,
    )
    .unwrap();

    let err = session.encrypt(&[0u8; 16], b"data", None).unwrap_err();
    assert!(matches!(err, CryptoError::EngineFailure(_)));
    assert!(!err.to_string().contains("short-key"));
}

#[test]
fn test_wrong_key_does_not_return_plaintext() {
    let writer = CipherSession::new(
        CipherAlgorithm::Aes256,
        CipherMode::Cbc,
        Arc::new(Pkcs7Padding::new()),
        vec![1u8; 32],
        None,
    )
    .unwrap();
    let reader = CipherSession::new(
        CipherAlgorithm::Aes256,
        CipherMode::Cbc,
        Arc::new(Pkcs7Padding::new()),
        vec![2u8; 32],
        None,
    )
    .unwrap();

    let ciphertext = writer.encrypt(&[0u8; 16], b"attack at dawn", None).unwrap();
    match reader.decrypt(&[0u8; 16], &ciphertext.bytes, None, None) {
        Ok(recovered) => assert_ne!(recovered, b"attack at dawn"),
        Err(e) => assert!(matches!(e, CryptoError::InvalidPadding(_))),
    }
}
