// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Cipherbridge
//!
//! A uniform block-cipher facade. Callers pick an abstract cipher and mode;
//! the facade discovers what the installed engine supports, resolves the pair
//! to engine tokens once, and performs padded encryption through it.

pub mod cipher;
pub mod config;
pub mod engine;
pub mod error;
pub mod memory;
pub mod padding;
pub mod plugin;
pub mod types;

pub use cipher::{CapabilityRegistry, CipherSession, Ciphertext, REGISTRY};
pub use config::FacadeConfig;
pub use engine::{CipherEngine, NativeEngine};
pub use error::{CryptoError, Result};
pub use padding::{AnsiX923Padding, Iso10126Padding, Iso7816Padding, PaddingStrategy, Pkcs7Padding};
pub use plugin::{AlgorithmRegistry, ImplementationRegistry, Plugin, PluginRegistrar};
pub use types::{CipherAlgorithm, CipherMode, ImplementationKind};

/// Initialize the library by warming the global capability cache.
///
/// Optional: the cache is otherwise built on first use.
pub fn init() {
    let map = REGISTRY.ensure_built();
    log::info!(
        "cipherbridge ready on engine '{}': {} ciphers, {} modes",
        REGISTRY.engine().name(),
        map.ciphers().len(),
        map.modes().len()
    );
}
