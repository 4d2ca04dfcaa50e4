// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Cipher facade: capability discovery and padded sessions.

pub mod capability;
pub mod session;


pub use capability::{CapabilityMap, CapabilityRegistry, REGISTRY};
pub use session::{CipherSession, Ciphertext};
