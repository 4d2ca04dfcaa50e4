// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use cipherbridge::plugin::Registration;
use cipherbridge::{
    AlgorithmRegistry, CipherAlgorithm, CipherMode, ImplementationKind, ImplementationRegistry,
    Plugin, PluginRegistrar, REGISTRY,
};

#[test]
fn test_global_registrar_announces_supported_pairs() {
    let registry = ImplementationRegistry::new();
    let registrar = PluginRegistrar::global();
    registrar.register_algorithms(&registry);

    assert_eq!(registry.len(), REGISTRY.supported_pairs().len());
    let found = registry.find(CipherAlgorithm::Aes256, CipherMode::Ctr).unwrap();
    assert_eq!(
        found,
        Registration {
            implementation: "cipherbridge".to_string(),
            cipher: CipherAlgorithm::Aes256,
            mode: CipherMode::Ctr,
            kind: ImplementationKind::Compiled,
        }
    );
    assert!(!registrar.version().is_empty());
}

#[test]
fn test_repeated_registration_is_idempotent() {
    let registry = ImplementationRegistry::new();
    let registrar = PluginRegistrar::global();
    registrar.register_algorithms(&registry);
    let first = registry.list();
    registrar.register_algorithms(&registry);

    assert_eq!(registry.list(), first);
}

#[test]
fn test_compiled_wins_over_userland() {
    let registry = ImplementationRegistry::new();
    registry.add_cipher(
        "fallback",
        CipherAlgorithm::Aes128,
        CipherMode::Ofb,
        ImplementationKind::Userland,
    );
    PluginRegistrar::global().register_algorithms(&registry);

    let found = registry.find(CipherAlgorithm::Aes128, CipherMode::Ofb).unwrap();
    assert_eq!(found.kind, ImplementationKind::Compiled);
    assert_eq!(
        registry.implementations_of(CipherAlgorithm::Aes128),
        vec!["fallback", "cipherbridge"]
    );
}

#[test]
fn test_registration_serializes() {
    let registration = Registration {
        implementation: "cipherbridge".into(),
        cipher: CipherAlgorithm::TripleDes,
        mode: CipherMode::Cbc,
        kind: ImplementationKind::Compiled,
    };
    let json = serde_json::to_string(&registration).unwrap();
    let parsed: Registration = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, registration);
}
