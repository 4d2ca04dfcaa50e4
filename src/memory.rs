// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use zeroize::Zeroize;

#[cfg(unix)]
use libc::{c_void, mlock, munlock};

/// Owned secret buffer, zeroized on drop and pinned in RAM where possible.
pub struct SecretBytes {
    inner: Vec<u8>,
    locked_len: usize,
}

impl SecretBytes {
    pub fn new(data: Vec<u8>) -> Self {
        let mut secret = Self {
            inner: data,
            locked_len: 0,
        };
        secret.lock_memory();
        secret
    }

    #[cfg(unix)]
    fn lock_memory(&mut self) {
        if self.inner.is_empty() {
            return;
        }
        // SAFETY: pointer and length describe the live allocation owned by `inner`.
        let rc = unsafe { mlock(self.inner.as_ptr() as *const c_void, self.inner.len()) };
        if rc == 0 {
            self.locked_len = self.inner.len();
        } else {
            log::warn!("mlock failed for {} byte secret, continuing unlocked", self.inner.len());
        }
    }

    #[cfg(not(unix))]
    fn lock_memory(&mut self) {}

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&[u8]> for SecretBytes {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.inner.len())
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.inner.zeroize();
        #[cfg(unix)]
        if self.locked_len > 0 {
            // SAFETY: zeroize clears the length but keeps the allocation locked in `lock_memory`.
            unsafe {
                munlock(self.inner.as_ptr() as *const c_void, self.locked_len);
            }
        }
    }
}
