//! Session with the permutation chosen at runtime.

use super::{AsconKeccak256, AsconKeccak512, Phase};
use crate::config::{AeadConfig, PermutationKind};
use crate::error::AeadError;

enum Cipher {
    Sha3_256(AsconKeccak256),
    Sha3_512(AsconKeccak512),
}

macro_rules! dispatch {
    ($cipher:expr, $inner:ident => $body:expr) => {
        match $cipher {
            Cipher::Sha3_256($inner) => $body,
            Cipher::Sha3_512($inner) => $body,
        }
    };
}

/// An [`AsconKeccak`](super::AsconKeccak) session built from an
/// [`AeadConfig`].
///
/// Tags are always the configured length.
pub struct AnyAsconKeccak {
    cipher: Cipher,
    tag_len: usize,
}

impl AnyAsconKeccak {
    /// Build an unkeyed session from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration does not validate.
    pub fn from_config(config: &AeadConfig) -> Result<Self, AeadError> {
        config.validate()?;
        let cipher = match config.permutation {
            PermutationKind::Sha3_256 => Cipher::Sha3_256(AsconKeccak256::new()),
            PermutationKind::Sha3_512 => Cipher::Sha3_512(AsconKeccak512::new()),
        };
        Ok(Self {
            cipher,
            tag_len: config.tag_len,
        })
    }

    /// Configured tag length.
    #[must_use]
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Rate of the selected permutation.
    #[must_use]
    pub fn rate(&self) -> usize {
        dispatch!(&self.cipher, c => c.rate())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        dispatch!(&self.cipher, c => c.phase())
    }

    /// Load a key and IV.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::set_key`](super::AsconKeccak::set_key).
    pub fn set_key(&mut self, key: &[u8], iv: &[u8]) -> Result<(), AeadError> {
        dispatch!(&mut self.cipher, c => c.set_key(key, iv))
    }

    /// Encrypt `plaintext`, returning the ciphertext and a tag of the
    /// configured length.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::encrypt`](super::AsconKeccak::encrypt).
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>), AeadError> {
        let tag_len = self.tag_len;
        dispatch!(&mut self.cipher, c => c.encrypt(plaintext, aad, tag_len))
    }

    /// Decrypt `ciphertext` and verify `tag`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `tag` is not the configured length,
    /// otherwise see [`AsconKeccak::decrypt`](super::AsconKeccak::decrypt).
    pub fn decrypt(
        &mut self,
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        self.check_tag(tag.len())?;
        dispatch!(&mut self.cipher, c => c.decrypt(ciphertext, aad, tag))
    }

    /// Start a streaming encryption.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::enc_init`](super::AsconKeccak::enc_init).
    pub fn enc_init(&mut self, aad: &[u8]) -> Result<(), AeadError> {
        dispatch!(&mut self.cipher, c => c.enc_init(aad))
    }

    /// Encrypt a chunk.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::enc_update`](super::AsconKeccak::enc_update).
    pub fn enc_update(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), AeadError> {
        dispatch!(&mut self.cipher, c => c.enc_update(input, output))
    }

    /// Finish a streaming encryption and return the tag.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::enc_final`](super::AsconKeccak::enc_final).
    pub fn enc_final(&mut self) -> Result<Vec<u8>, AeadError> {
        let mut tag = vec![0u8; self.tag_len];
        dispatch!(&mut self.cipher, c => c.enc_final(&mut tag))?;
        Ok(tag)
    }

    /// Start a streaming decryption.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::dec_init`](super::AsconKeccak::dec_init).
    pub fn dec_init(&mut self, aad: &[u8]) -> Result<(), AeadError> {
        dispatch!(&mut self.cipher, c => c.dec_init(aad))
    }

    /// Decrypt a chunk.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::dec_update`](super::AsconKeccak::dec_update).
    pub fn dec_update(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), AeadError> {
        dispatch!(&mut self.cipher, c => c.dec_update(input, output))
    }

    /// Finish a streaming decryption and verify `tag`.
    ///
    /// # Errors
    ///
    /// See [`AsconKeccak::dec_final`](super::AsconKeccak::dec_final).
    pub fn dec_final(&mut self, tag: &[u8]) -> Result<(), AeadError> {
        self.check_tag(tag.len())?;
        dispatch!(&mut self.cipher, c => c.dec_final(tag))
    }

    /// Wipe state and key material.
    pub fn zero(&mut self) {
        dispatch!(&mut self.cipher, c => c.zero());
    }

    fn check_tag(&self, len: usize) -> Result<(), AeadError> {
        if len != self.tag_len {
            return Err(AeadError::invalid_parameter(format!(
                "tag length {len}, configured {}",
                self.tag_len
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AnyAsconKeccak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("AnyAsconKeccak");
        dispatch!(&self.cipher, c => s.field("cipher", c));
        s.field("tag_len", &self.tag_len).finish()
    }
}
