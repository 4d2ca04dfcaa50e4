// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cipherbridge::{
    AnsiX923Padding, CipherAlgorithm, CipherMode, CipherSession, Iso10126Padding, Iso7816Padding,
    PaddingStrategy, Pkcs7Padding,
};
use std::sync::Arc;

fn strategies() -> Vec<(&'static str, Arc<dyn PaddingStrategy>)> {
    vec![
        ("pkcs7", Arc::new(Pkcs7Padding::new())),
        ("x923", Arc::new(AnsiX923Padding::new())),
        ("iso7816", Arc::new(Iso7816Padding::new())),
        ("iso10126", Arc::new(Iso10126Padding::new())),
    ]
}

#[test]
fn test_every_strategy_pads_and_strips() {
    for (name, strategy) in strategies() {
        for len in 0..=32usize {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let missing = 16 - len % 16;
            let padding = strategy.padding_bytes(16, missing).unwrap();
            assert_eq!(padding.len(), missing, "{name} at {len}");

            let mut buffer = data.clone();
            buffer.extend(padding);
            assert_eq!(buffer.len() % 16, 0, "{name} at {len}");
            assert_eq!(strategy.padding_size(&buffer, 16).unwrap(), missing, "{name} at {len}");
        }
    }
}

#[test]
fn test_every_strategy_rejects_zero_missing() {
    for (name, strategy) in strategies() {
        assert!(strategy.padding_bytes(16, 0).is_err(), "{name}");
        assert!(strategy.padding_bytes(16, 17).is_err(), "{name}");
    }
}

#[test]
fn test_strategies_work_through_sessions() {
    for (name, strategy) in strategies() {
        let session = CipherSession::new(
            CipherAlgorithm::Aes192,
            CipherMode::Cbc,
            strategy,
            vec![0x11u8; 24],
            None,
        )
        .unwrap();

        let inputs: [&[u8]; 4] = [b"", b"short", &[0u8; 16], &[0x80u8; 31]];
        for plaintext in inputs {
            let ciphertext = session.encrypt(&[0u8; 16], plaintext, None).unwrap();
            assert!(ciphertext.len() > plaintext.len(), "{name}");
            let recovered = session.decrypt(&[0u8; 16], &ciphertext.bytes, None, None).unwrap();
            assert_eq!(recovered, plaintext, "{name}");
        }
    }
}

#[test]
fn test_iso10126_filler_is_random() {
    let strategy = Iso10126Padding::new();
    let first = strategy.padding_bytes(16, 16).unwrap();
    let second = strategy.padding_bytes(16, 16).unwrap();
    assert_eq!(first[15], 16);
    assert_eq!(second[15], 16);
    // 15 random bytes colliding is negligible
    assert_ne!(first[..15], second[..15]);
}
