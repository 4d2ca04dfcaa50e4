// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Announcing resolved ciphers to an external algorithm registry.

pub mod manager;

pub use manager::{ImplementationRegistry, Registration};

use crate::cipher::capability::{CapabilityRegistry, REGISTRY};
use crate::types::{CipherAlgorithm, CipherMode, ImplementationKind};

/// Receiver of implementation announcements.
///
/// Idempotency is the receiver's concern; announcers may repeat themselves.
pub trait AlgorithmRegistry: Send + Sync {
    fn add_cipher(
        &self,
        implementation: &str,
        cipher: CipherAlgorithm,
        mode: CipherMode,
        kind: ImplementationKind,
    );
}

pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn register_algorithms(&self, registry: &dyn AlgorithmRegistry);
}

/// Announces every pair a capability registry can resolve as a compiled
/// implementation.
#[derive(Debug, Clone, Copy)]
pub struct PluginRegistrar<'a> {
    capabilities: &'a CapabilityRegistry,
}

impl<'a> PluginRegistrar<'a> {
    pub fn new(capabilities: &'a CapabilityRegistry) -> Self {
        Self { capabilities }
    }
}

impl PluginRegistrar<'static> {
    /// Registrar backed by the process-wide registry.
    pub fn global() -> Self {
        Self::new(&REGISTRY)
    }
}

impl Plugin for PluginRegistrar<'_> {
    fn name(&self) -> &str {
        &self.capabilities.config().implementation_name
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn register_algorithms(&self, registry: &dyn AlgorithmRegistry) {
        let pairs = self.capabilities.supported_pairs();
        log::debug!("announcing {} cipher/mode pairs as '{}'", pairs.len(), self.name());
        for (cipher, mode) in pairs {
            registry.add_cipher(self.name(), cipher, mode, ImplementationKind::Compiled);
        }
    }
}
