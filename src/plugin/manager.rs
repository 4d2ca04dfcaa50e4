// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::plugin::AlgorithmRegistry;
use crate::types::{CipherAlgorithm, CipherMode, ImplementationKind};
use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One announced implementation of a cipher/mode pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Registration {
    pub implementation: String,
    pub cipher: CipherAlgorithm,
    pub mode: CipherMode,
    pub kind: ImplementationKind,
}

/// In-memory algorithm registry.
///
/// Identical announcements are stored once. Lookups prefer compiled
/// implementations over userland ones, then the earliest registration.
#[derive(Debug, Default)]
pub struct ImplementationRegistry {
    entries: RwLock<Vec<Registration>>,
}

impl ImplementationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are pushed whole, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Registration>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Registration>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<Registration> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn find(&self, cipher: CipherAlgorithm, mode: CipherMode) -> Option<Registration> {
        self.read()
            .iter()
            .filter(|r| r.cipher == cipher && r.mode == mode)
            .min_by_key(|r| std::cmp::Reverse(r.kind))
            .cloned()
    }

    /// Names of every implementation announced for `cipher`, in registration order.
    pub fn implementations_of(&self, cipher: CipherAlgorithm) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in self.read().iter().filter(|r| r.cipher == cipher) {
            if !names.contains(&entry.implementation) {
                names.push(entry.implementation.clone());
            }
        }
        names
    }

    pub fn clear(&self) {
        self.write().clear();
    }
}

impl AlgorithmRegistry for ImplementationRegistry {
    fn add_cipher(
        &self,
        implementation: &str,
        cipher: CipherAlgorithm,
        mode: CipherMode,
        kind: ImplementationKind,
    ) {
        let registration = Registration {
            implementation: implementation.to_string(),
            cipher,
            mode,
            kind,
        };
        let mut entries = self.write();
        if entries.contains(&registration) {
            log::trace!("{} {}/{} already registered", implementation, cipher, mode);
            return;
        }
        entries.push(registration);
    }
}
