// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Engine backed by the RustCrypto block ciphers.
//!
//! Algorithm families other than AES are optional Cargo features, so the set
//! of names this engine advertises depends on how the crate was built.
//! AES is a single algorithm name; the key schedule is picked from the key
//! length on every call.

use crate::engine::{CipherEngine, CipherToken, EngineError, ModeToken};
use cipher::block_padding::NoPadding;
use cipher::crypto_common::InnerInit;
use cipher::{
    AsyncStreamCipher, BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut,
    BlockSizeUser, InnerIvInit, KeyInit, StreamCipher, StreamCipherCoreWrapper,
};

pub const DES: &str = "des";
pub const TRIPLE_DES: &str = "des-ede3";
pub const BLOWFISH: &str = "blowfish";
pub const CAST5: &str = "cast5";
pub const TWOFISH: &str = "twofish";
pub const AES: &str = "aes";

pub const MODE_ECB: &str = "ecb";
pub const MODE_CBC: &str = "cbc";
pub const MODE_CFB: &str = "cfb";
pub const MODE_CTR: &str = "ctr";
pub const MODE_OFB: &str = "ofb";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    #[cfg(feature = "des")]
    Des,
    #[cfg(feature = "des")]
    TripleDes,
    #[cfg(feature = "blowfish")]
    Blowfish,
    #[cfg(feature = "cast5")]
    Cast5,
    #[cfg(feature = "twofish")]
    Twofish,
    Aes,
}

impl Family {
    fn parse(token: &CipherToken) -> Result<Self, EngineError> {
        match token.as_str() {
            #[cfg(feature = "des")]
            DES => Ok(Family::Des),
            #[cfg(feature = "des")]
            TRIPLE_DES => Ok(Family::TripleDes),
            #[cfg(feature = "blowfish")]
            BLOWFISH => Ok(Family::Blowfish),
            #[cfg(feature = "cast5")]
            CAST5 => Ok(Family::Cast5),
            #[cfg(feature = "twofish")]
            TWOFISH => Ok(Family::Twofish),
            AES => Ok(Family::Aes),
            other => Err(EngineError::UnknownAlgorithm(other.to_string())),
        }
    }

    fn block_size(self) -> usize {
        match self {
            #[cfg(feature = "des")]
            Family::Des | Family::TripleDes => 8,
            #[cfg(feature = "blowfish")]
            Family::Blowfish => 8,
            #[cfg(feature = "cast5")]
            Family::Cast5 => 8,
            #[cfg(feature = "twofish")]
            Family::Twofish => 16,
            Family::Aes => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ctr,
    Ofb,
}

impl Mode {
    fn parse(token: &ModeToken) -> Result<Self, EngineError> {
        match token.as_str() {
            MODE_ECB => Ok(Mode::Ecb),
            MODE_CBC => Ok(Mode::Cbc),
            MODE_CFB => Ok(Mode::Cfb),
            MODE_CTR => Ok(Mode::Ctr),
            MODE_OFB => Ok(Mode::Ofb),
            other => Err(EngineError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Expands one algorithm family into the five modes with a concrete cipher
/// type, which keeps the OFB and CTR core bounds out of generic code.
macro_rules! run_mode {
    ($cipher:ty, $flavor:ty, $direction:expr, $mode:expr, $key:expr, $data:expr, $iv:expr, $name:expr) => {{
        let block_cipher = <$cipher as KeyInit>::new_from_slice($key).map_err(|_| {
            EngineError::InvalidKeyLength {
                algorithm: $name.to_string(),
                actual: $key.len(),
            }
        })?;
        match $mode {
            Mode::Ecb => ecb_apply(block_cipher, $direction, $data),
            Mode::Cbc => cbc_apply(block_cipher, $direction, $data, $iv),
            Mode::Cfb => cfb_apply(block_cipher, $direction, $data, $iv),
            Mode::Ofb => {
                let core = ofb::OfbCore::<$cipher>::inner_iv_slice_init(block_cipher, $iv)
                    .map_err(|_| invalid_iv(<$cipher as BlockSizeUser>::block_size(), $iv))?;
                keystream_apply(StreamCipherCoreWrapper::from_core(core), $data)
            }
            Mode::Ctr => {
                let core = ctr::CtrCore::<$cipher, $flavor>::inner_iv_slice_init(block_cipher, $iv)
                    .map_err(|_| invalid_iv(<$cipher as BlockSizeUser>::block_size(), $iv))?;
                keystream_apply(StreamCipherCoreWrapper::from_core(core), $data)
            }
        }
    }};
}

/// Default engine shipped with the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }

    fn run(
        &self,
        direction: Direction,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        let family = Family::parse(cipher)?;
        let mode = Mode::parse(mode)?;
        log::trace!(
            "native {:?} {}/{:?}: {} bytes",
            direction,
            cipher,
            mode,
            data.len()
        );

        match family {
            #[cfg(feature = "des")]
            Family::Des => {
                run_mode!(des::Des, ctr::flavors::Ctr64BE, direction, mode, key, data, iv, DES)
            }
            #[cfg(feature = "des")]
            Family::TripleDes => run_mode!(
                des::TdesEde3,
                ctr::flavors::Ctr64BE,
                direction,
                mode,
                key,
                data,
                iv,
                TRIPLE_DES
            ),
            #[cfg(feature = "blowfish")]
            Family::Blowfish => run_mode!(
                blowfish::Blowfish,
                ctr::flavors::Ctr64BE,
                direction,
                mode,
                key,
                data,
                iv,
                BLOWFISH
            ),
            #[cfg(feature = "cast5")]
            Family::Cast5 => {
                run_mode!(cast5::Cast5, ctr::flavors::Ctr64BE, direction, mode, key, data, iv, CAST5)
            }
            #[cfg(feature = "twofish")]
            Family::Twofish => run_mode!(
                twofish::Twofish,
                ctr::flavors::Ctr128BE,
                direction,
                mode,
                key,
                data,
                iv,
                TWOFISH
            ),
            Family::Aes => match key.len() {
                16 => run_mode!(aes::Aes128, ctr::flavors::Ctr128BE, direction, mode, key, data, iv, AES),
                24 => run_mode!(aes::Aes192, ctr::flavors::Ctr128BE, direction, mode, key, data, iv, AES),
                32 => run_mode!(aes::Aes256, ctr::flavors::Ctr128BE, direction, mode, key, data, iv, AES),
                actual => Err(EngineError::InvalidKeyLength {
                    algorithm: AES.to_string(),
                    actual,
                }),
            },
        }
    }
}

fn invalid_iv(expected: usize, iv: &[u8]) -> EngineError {
    EngineError::InvalidIvLength {
        expected,
        actual: iv.len(),
    }
}

fn misaligned<C: BlockSizeUser>(len: usize) -> EngineError {
    EngineError::InvalidDataLength {
        block_size: C::block_size(),
        actual: len,
    }
}

fn ecb_apply<C>(cipher: C, direction: Direction, data: &[u8]) -> Result<Vec<u8>, EngineError>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt,
{
    let mut buf = data.to_vec();
    let len = match direction {
        Direction::Encrypt => ecb::Encryptor::<C>::inner_init(cipher)
            .encrypt_padded_mut::<NoPadding>(&mut buf, data.len())
            .map_err(|_| misaligned::<C>(data.len()))?
            .len(),
        Direction::Decrypt => ecb::Decryptor::<C>::inner_init(cipher)
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| misaligned::<C>(data.len()))?
            .len(),
    };
    buf.truncate(len);
    Ok(buf)
}

fn cbc_apply<C>(
    cipher: C,
    direction: Direction,
    data: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, EngineError>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt,
{
    let mut buf = data.to_vec();
    let len = match direction {
        Direction::Encrypt => cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
            .map_err(|_| invalid_iv(C::block_size(), iv))?
            .encrypt_padded_mut::<NoPadding>(&mut buf, data.len())
            .map_err(|_| misaligned::<C>(data.len()))?
            .len(),
        Direction::Decrypt => cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
            .map_err(|_| invalid_iv(C::block_size(), iv))?
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| misaligned::<C>(data.len()))?
            .len(),
    };
    buf.truncate(len);
    Ok(buf)
}

fn cfb_apply<C>(
    cipher: C,
    direction: Direction,
    data: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, EngineError>
where
    C: BlockCipher + BlockEncrypt,
{
    let mut buf = data.to_vec();
    match direction {
        Direction::Encrypt => cfb_mode::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
            .map_err(|_| invalid_iv(C::block_size(), iv))?
            .encrypt(&mut buf),
        Direction::Decrypt => cfb_mode::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
            .map_err(|_| invalid_iv(C::block_size(), iv))?
            .decrypt(&mut buf),
    }
    Ok(buf)
}

/// OFB and CTR share the keystream path. Encryption and decryption are the
/// same operation.
fn keystream_apply<S: StreamCipher>(mut stream: S, data: &[u8]) -> Result<Vec<u8>, EngineError> {
    let mut buf = data.to_vec();
    stream
        .try_apply_keystream(&mut buf)
        .map_err(|_| EngineError::KeystreamExhausted)?;
    Ok(buf)
}

impl CipherEngine for NativeEngine {
    fn name(&self) -> &str {
        "native"
    }

    fn list_algorithms(&self) -> Result<Vec<CipherToken>, EngineError> {
        let mut names: Vec<&str> = Vec::new();
        #[cfg(feature = "des")]
        names.extend([DES, TRIPLE_DES]);
        #[cfg(feature = "blowfish")]
        names.push(BLOWFISH);
        #[cfg(feature = "cast5")]
        names.push(CAST5);
        #[cfg(feature = "twofish")]
        names.push(TWOFISH);
        names.push(AES);
        Ok(names.into_iter().map(CipherToken::from).collect())
    }

    fn list_modes(&self) -> Result<Vec<ModeToken>, EngineError> {
        Ok([MODE_ECB, MODE_CBC, MODE_CFB, MODE_CTR, MODE_OFB]
            .into_iter()
            .map(ModeToken::from)
            .collect())
    }

    fn encrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.run(Direction::Encrypt, cipher, key, data, mode, iv)
    }

    fn decrypt(
        &self,
        cipher: &CipherToken,
        key: &[u8],
        data: &[u8],
        mode: &ModeToken,
        iv: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.run(Direction::Decrypt, cipher, key, data, mode, iv)
    }

    /// ECB takes no IV; every other mode uses one block.
    fn iv_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError> {
        let family = Family::parse(cipher)?;
        match Mode::parse(mode)? {
            Mode::Ecb => Ok(0),
            _ => Ok(family.block_size()),
        }
    }

    fn block_size(&self, cipher: &CipherToken, mode: &ModeToken) -> Result<usize, EngineError> {
        let family = Family::parse(cipher)?;
        Mode::parse(mode)?;
        Ok(family.block_size())
    }
}
