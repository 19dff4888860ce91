//! Ascon-Keccak authenticated encryption.
//!
//! A duplex sponge over a [`Permutation`]: the key and IV are absorbed into
//! the state, AAD and data are absorbed rate block by rate block, and the tag
//! is squeezed from the capacity after the key has been mixed back in.
//! Features include:
//! - 256-bit or 512-bit keys depending on the permutation
//! - 128-bit IVs
//! - Tags from 128 bits up to the capacity of the permutation
//! - One-shot and streaming (init/update/final) interfaces
//! - In-place encryption/decryption for zero-copy operations
//!
//! ## Security Properties
//!
//! - Confidentiality and integrity: 256-bit security (capacity >= 512 bits)
//! - Tag comparison in constant time
//! - State, retained key slot and scratch buffers are zeroized on every exit
//!
//! A session is single use per key/IV: after `*_final` (or a one-shot
//! operation) it must be re-keyed before it can process another message.
//!
//! ## Module Organization
//!
//! - [`AsconKeccak`] - Session type with keying and one-shot operations
//! - `stream` - Streaming init/update/final on the same session
//! - [`AnyAsconKeccak`] - Permutation chosen at runtime from an [`AeadConfig`]
//!
//! ## Usage
//!
//! ```ignore
//! use ascon_keccak::aead::AsconKeccak256;
//!
//! let mut cipher = AsconKeccak256::with_key(&key, &iv)?;
//! let (ciphertext, tag) = cipher.encrypt(b"secret", b"aad", 16)?;
//!
//! let mut cipher = AsconKeccak256::with_key(&key, &iv)?;
//! let plaintext = cipher.decrypt(&ciphertext, b"aad", &tag)?;
//! ```
//!
//! [`AeadConfig`]: crate::config::AeadConfig

mod any;
mod stream;

pub use any::AnyAsconKeccak;

use crate::error::AeadError;
use crate::permutation::{Permutation, Sha3_256Permutation, Sha3_512Permutation};
use crate::sponge::Duplex;
use crate::variant::{KEY_SLOT_SIZE, Variant, check_tag_len};
use zeroize::{Zeroize, Zeroizing};

/// Ascon-Keccak over Keccak-f\[1600\] with rate 136 (256/256).
pub type AsconKeccak256 = AsconKeccak<Sha3_256Permutation>;

/// Ascon-Keccak over Keccak-f\[1600\] with rate 72 (256/512 and 512/512).
pub type AsconKeccak512 = AsconKeccak<Sha3_512Permutation>;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No key loaded (fresh or zeroized)
    Unkeyed,
    /// Key and IV absorbed, ready for `enc_init`/`dec_init`
    Keyed,
    /// AAD absorbed, accepting plaintext
    Encrypting,
    /// AAD absorbed, accepting ciphertext
    Decrypting,
    /// Tag produced; re-key before reuse
    Finalized,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unkeyed => "unkeyed",
            Self::Keyed => "keyed",
            Self::Encrypting => "encrypting",
            Self::Decrypting => "decrypting",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// Ascon-Keccak AEAD session over permutation `P`.
///
/// Owns the permutation state and the finalization key slot. Both are wiped
/// by [`zero`](Self::zero) and on drop.
pub struct AsconKeccak<P: Permutation> {
    sponge: Duplex<P>,
    key_slot: Zeroizing<[u8; KEY_SLOT_SIZE]>,
    variant: Option<Variant>,
    phase: Phase,
    /// Bytes absorbed into the current rate block of the data segment
    cursor: usize,
}

impl<P: Permutation> AsconKeccak<P> {
    /// Create an unkeyed session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sponge: Duplex::new(),
            key_slot: Zeroizing::new([0u8; KEY_SLOT_SIZE]),
            variant: None,
            phase: Phase::Unkeyed,
            cursor: 0,
        }
    }

    /// Create a session and key it.
    ///
    /// # Errors
    ///
    /// See [`set_key`](Self::set_key).
    pub fn with_key(key: &[u8], iv: &[u8]) -> Result<Self, AeadError> {
        let mut cipher = Self::new();
        cipher.set_key(key, iv)?;
        Ok(cipher)
    }

    /// Load a key and IV, discarding any previous state.
    ///
    /// Runs the library self-test on first use.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the key/IV lengths do not form a
    /// supported combination for `P`; the session is left unkeyed.
    /// Returns `SelfTestFailed` if the known-answer self-test fails.
    pub fn set_key(&mut self, key: &[u8], iv: &[u8]) -> Result<(), AeadError> {
        crate::selftest::init()?;
        self.load_key(key, iv)
    }

    pub(crate) fn load_key(&mut self, key: &[u8], iv: &[u8]) -> Result<(), AeadError> {
        let variant = match Variant::for_permutation::<P>(key.len(), iv.len()) {
            Ok(variant) => variant,
            Err(err) => {
                tracing::debug!(
                    rate = P::RATE,
                    key_len = key.len(),
                    iv_len = iv.len(),
                    "rejected keying parameters"
                );
                self.zero();
                return Err(err);
            }
        };

        // INIT || 0* || key || iv
        self.sponge.wipe();
        self.sponge.load_init_word(variant.init_word());
        self.sponge.absorb_tail(key, iv.len());
        self.sponge.absorb_tail(iv, 0);
        self.sponge.permute();
        self.sponge.absorb_tail(key, 0);

        variant.fill_key_slot(key, &mut self.key_slot);
        self.variant = Some(variant);
        self.phase = Phase::Keyed;
        self.cursor = 0;

        tracing::trace!(%variant, "session keyed");
        Ok(())
    }

    /// Wipe state and key material. The session returns to [`Phase::Unkeyed`].
    pub fn zero(&mut self) {
        self.sponge.wipe();
        self.key_slot.zeroize();
        self.variant = None;
        self.phase = Phase::Unkeyed;
        self.cursor = 0;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a key is loaded and the session has not been zeroized.
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        self.phase != Phase::Unkeyed
    }

    /// Parameter set selected by the last successful `set_key`.
    #[must_use]
    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    /// Rate of the permutation in bytes.
    #[must_use]
    pub const fn rate(&self) -> usize {
        P::RATE
    }

    /// Largest tag this session can produce.
    #[must_use]
    pub const fn max_tag_len(&self) -> usize {
        P::CAPACITY
    }

    /// Encrypt `plaintext` and return the ciphertext and a `tag_len`-byte tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unsupported tag length and
    /// `InvalidState` if the session is not freshly keyed.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        aad: &[u8],
        tag_len: usize,
    ) -> Result<(Vec<u8>, Vec<u8>), AeadError> {
        self.check_tag_len(tag_len)?;
        self.expect_phase(Phase::Keyed, "encrypt")?;

        let mut ciphertext = plaintext.to_vec();
        let mut tag = vec![0u8; tag_len];
        self.encrypt_in_place(&mut ciphertext, aad, &mut tag)?;
        Ok((ciphertext, tag))
    }

    /// Encrypt `plaintext` into `ciphertext`; the tag length is `tag.len()`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the buffers differ in length or the tag
    /// length is unsupported, `InvalidState` if the session is not freshly
    /// keyed.
    pub fn encrypt_into(
        &mut self,
        plaintext: &[u8],
        ciphertext: &mut [u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError> {
        check_output_len(plaintext.len(), ciphertext.len())?;
        self.check_tag_len(tag.len())?;
        self.enc_init(aad)?;
        self.enc_update(plaintext, ciphertext)?;
        self.enc_final(tag)
    }

    /// Encrypt `buffer` in place; the tag length is `tag.len()`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unsupported tag length and
    /// `InvalidState` if the session is not freshly keyed.
    pub fn encrypt_in_place(
        &mut self,
        buffer: &mut [u8],
        aad: &[u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError> {
        self.check_tag_len(tag.len())?;
        self.enc_init(aad)?;
        self.enc_update_in_place(buffer)?;
        self.enc_final(tag)
    }

    /// Decrypt `ciphertext` and verify `tag`.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailure` if the tag does not verify (no
    /// plaintext is released), `InvalidParameter` for an unsupported tag
    /// length and `InvalidState` if the session is not freshly keyed.
    pub fn decrypt(
        &mut self,
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let mut plaintext = Zeroizing::new(vec![0u8; ciphertext.len()]);
        self.decrypt_into(ciphertext, &mut plaintext[..], aad, tag)?;
        Ok(std::mem::take(&mut *plaintext))
    }

    /// Decrypt `ciphertext` into `plaintext` and verify `tag`.
    ///
    /// On `AuthenticationFailure` the output buffer is zeroized.
    ///
    /// # Errors
    ///
    /// As for [`decrypt`](Self::decrypt); additionally `InvalidParameter` if
    /// the buffers differ in length.
    pub fn decrypt_into(
        &mut self,
        ciphertext: &[u8],
        plaintext: &mut [u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        check_output_len(ciphertext.len(), plaintext.len())?;
        self.check_tag_len(tag.len())?;
        self.dec_init(aad)?;
        self.dec_update(ciphertext, plaintext)?;
        if let Err(err) = self.dec_final(tag) {
            plaintext.zeroize();
            return Err(err);
        }
        Ok(())
    }

    /// Decrypt `buffer` in place and verify `tag`.
    ///
    /// On `AuthenticationFailure` the buffer is zeroized.
    ///
    /// # Errors
    ///
    /// As for [`decrypt`](Self::decrypt).
    pub fn decrypt_in_place(
        &mut self,
        buffer: &mut [u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        self.check_tag_len(tag.len())?;
        self.dec_init(aad)?;
        self.dec_update_in_place(buffer)?;
        if let Err(err) = self.dec_final(tag) {
            buffer.zeroize();
            return Err(err);
        }
        Ok(())
    }

    fn check_tag_len(&self, tag_len: usize) -> Result<(), AeadError> {
        check_tag_len(tag_len, P::CAPACITY)
    }

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<(), AeadError> {
        if self.phase != expected {
            tracing::warn!(operation, phase = %self.phase, "operation out of order");
            return Err(AeadError::InvalidState {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Absorb the whole AAD and apply domain separation.
    ///
    /// Every AAD block is followed by a permutation, including the
    /// padding-only block of empty AAD. The domain separator is folded into
    /// the first data block.
    fn absorb_aad(&mut self, mut aad: &[u8]) {
        loop {
            let todo = aad.len().min(P::RATE);
            self.sponge.absorb_rate(&aad[..todo], 0);
            aad = &aad[todo..];

            if aad.is_empty() {
                self.sponge.pad(todo);
                self.sponge.permute();
                break;
            }
            self.sponge.permute();
        }

        self.sponge.separate_domain();
        self.cursor = 0;
    }

    /// Pad the data segment, mix in the key slot and squeeze the tag.
    fn finalize(&mut self, tag: &mut [u8]) {
        self.sponge.pad(self.cursor);

        self.sponge.mix_key_slot(&self.key_slot[..]);
        self.sponge.permute();
        self.sponge.mix_key_slot(&self.key_slot[..]);

        self.sponge.extract_tag(tag);
        self.cursor = 0;
        self.phase = Phase::Finalized;
    }
}

impl<P: Permutation> Default for AsconKeccak<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Permutation> Drop for AsconKeccak<P> {
    fn drop(&mut self) {
        self.zero();
    }
}

impl<P: Permutation> std::fmt::Debug for AsconKeccak<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsconKeccak")
            .field("rate", &P::RATE)
            .field("variant", &self.variant)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

fn check_output_len(input: usize, output: usize) -> Result<(), AeadError> {
    if input != output {
        return Err(AeadError::invalid_parameter(format!(
            "output buffer length {output} does not match input length {input}"
        )));
    }
    Ok(())
}
