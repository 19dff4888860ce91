//! Supported Ascon-Keccak parameter sets.
//!
//! | Variant | Key | IV | Tag (min) | Rate | Rounds |
//! |---------|-----|----|-----------|------|--------|
//! | Ascon-Keccak 512/512 | 512 bit | 128 bit | 128 bit | 576 bit | 24 |
//! | Ascon-Keccak 256/512 | 256 bit | 128 bit | 128 bit | 576 bit | 24 |
//! | Ascon-Keccak 256/256 | 256 bit | 128 bit | 128 bit | 1088 bit | 24 |
//!
//! Every variant offers 256-bit security since the capacity is at least
//! 512 bits. Tags may grow up to the capacity.

use crate::error::AeadError;
use crate::permutation::{KECCAK_STATE_SIZE, Permutation};

/// IV length shared by all variants.
pub const IV_SIZE: usize = 16;

/// Width of the key slot mixed into the capacity during finalization.
pub const KEY_SLOT_SIZE: usize = 32;

/// Smallest accepted tag.
pub const MIN_TAG_SIZE: usize = 16;

/// One supported (key size, permutation) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 512-bit key, rate 72
    Ak512_512,
    /// 256-bit key, rate 72
    Ak256_512,
    /// 256-bit key, rate 136
    Ak256_256,
}

impl Variant {
    /// Pick the variant for a permutation rate and key/IV lengths.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for any combination not listed in the
    /// module table, including non-Keccak state sizes.
    pub fn select(
        rate: usize,
        state_size: usize,
        key_len: usize,
        iv_len: usize,
    ) -> Result<Self, AeadError> {
        if state_size != KECCAK_STATE_SIZE {
            return Err(AeadError::invalid_parameter(format!(
                "unsupported permutation state size {state_size}"
            )));
        }
        if iv_len != IV_SIZE {
            return Err(AeadError::invalid_parameter(format!(
                "IV length {iv_len}, expected {IV_SIZE}"
            )));
        }

        match (rate, key_len) {
            (72, 64) => Ok(Self::Ak512_512),
            (72, 32) => Ok(Self::Ak256_512),
            (136, 32) => Ok(Self::Ak256_256),
            (72 | 136, _) => Err(AeadError::invalid_parameter(format!(
                "key length {key_len} not supported with rate {rate}"
            ))),
            _ => Err(AeadError::invalid_parameter(format!(
                "unsupported permutation rate {rate}"
            ))),
        }
    }

    /// Pick the variant for permutation `P`.
    ///
    /// # Errors
    ///
    /// See [`Variant::select`].
    pub fn for_permutation<P: Permutation>(
        key_len: usize,
        iv_len: usize,
    ) -> Result<Self, AeadError> {
        Self::select(P::RATE, P::STATE_SIZE, key_len, iv_len)
    }

    /// Domain word written into the first state lane before keying.
    ///
    /// Encodes key size, rate and round counts.
    #[must_use]
    pub const fn init_word(self) -> u64 {
        match self {
            Self::Ak512_512 => 0x0200_0240_0018_0018,
            Self::Ak256_512 => 0x0100_0240_0018_0018,
            Self::Ak256_256 => 0x0100_0440_0018_0018,
        }
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Ak512_512 => 64,
            Self::Ak256_512 | Self::Ak256_256 => 32,
        }
    }

    /// Rate of the underlying permutation in bytes.
    #[must_use]
    pub const fn rate(self) -> usize {
        match self {
            Self::Ak512_512 | Self::Ak256_512 => 72,
            Self::Ak256_256 => 136,
        }
    }

    /// Largest tag the variant can produce (its capacity).
    #[must_use]
    pub const fn max_tag_len(self) -> usize {
        KECCAK_STATE_SIZE - self.rate()
    }

    /// Fill the finalization key slot from the full key.
    ///
    /// The 136-rate variant only carries the first half of its key into the
    /// slot and zero-fills the remainder; the 72-rate variants use the first
    /// [`KEY_SLOT_SIZE`] key bytes.
    pub fn fill_key_slot(self, key: &[u8], slot: &mut [u8; KEY_SLOT_SIZE]) {
        debug_assert_eq!(key.len(), self.key_len());
        slot.fill(0);
        let used = match self {
            Self::Ak512_512 | Self::Ak256_512 => KEY_SLOT_SIZE,
            Self::Ak256_256 => KEY_SLOT_SIZE / 2,
        };
        slot[..used].copy_from_slice(&key[..used]);
    }

    /// Check a requested tag length against this variant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tag is shorter than
    /// [`MIN_TAG_SIZE`] or longer than the capacity.
    pub fn check_tag_len(self, tag_len: usize) -> Result<(), AeadError> {
        check_tag_len(tag_len, self.max_tag_len())
    }
}

pub(crate) fn check_tag_len(tag_len: usize, max: usize) -> Result<(), AeadError> {
    if !(MIN_TAG_SIZE..=max).contains(&tag_len) {
        return Err(AeadError::invalid_parameter(format!(
            "tag length {tag_len} outside {MIN_TAG_SIZE}..={max}"
        )));
    }
    Ok(())
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ak512_512 => "Ascon-Keccak 512/512",
            Self::Ak256_512 => "Ascon-Keccak 256/512",
            Self::Ak256_256 => "Ascon-Keccak 256/256",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::{Sha3_256Permutation, Sha3_512Permutation};

    #[test]
    fn test_select_supported() {
        assert_eq!(
            Variant::for_permutation::<Sha3_512Permutation>(64, 16),
            Ok(Variant::Ak512_512)
        );
        assert_eq!(
            Variant::for_permutation::<Sha3_512Permutation>(32, 16),
            Ok(Variant::Ak256_512)
        );
        assert_eq!(
            Variant::for_permutation::<Sha3_256Permutation>(32, 16),
            Ok(Variant::Ak256_256)
        );
    }

    #[test]
    fn test_select_rejects_bad_key() {
        assert!(matches!(
            Variant::for_permutation::<Sha3_256Permutation>(64, 16),
            Err(AeadError::InvalidParameter(_))
        ));
        assert!(Variant::for_permutation::<Sha3_512Permutation>(16, 16).is_err());
        assert!(Variant::for_permutation::<Sha3_512Permutation>(0, 16).is_err());
    }

    #[test]
    fn test_select_rejects_bad_iv() {
        assert!(Variant::for_permutation::<Sha3_256Permutation>(32, 12).is_err());
        assert!(Variant::for_permutation::<Sha3_512Permutation>(32, 32).is_err());
    }

    #[test]
    fn test_select_rejects_foreign_state() {
        // Ascon-sized state
        assert!(Variant::select(8, 40, 32, 16).is_err());
        assert!(Variant::select(104, 200, 32, 16).is_err());
    }

    #[test]
    fn test_init_words_encode_parameters() {
        for variant in [Variant::Ak512_512, Variant::Ak256_512, Variant::Ak256_256] {
            let word = variant.init_word();
            // Rate in bits sits in bits 32..48, rounds in the low bytes
            assert_eq!(((word >> 32) & 0xffff) as usize, variant.rate() * 8);
            assert_eq!(word & 0xffff, 24);
            assert_eq!((word >> 16) & 0xffff, 24);
            assert_eq!((word >> 56) as usize, variant.key_len() / 32);
        }
    }

    #[test]
    fn test_key_slot_256_256_uses_half_key() {
        let key: Vec<u8> = (0x80..0xa0).collect();
        let mut slot = [0xffu8; KEY_SLOT_SIZE];
        Variant::Ak256_256.fill_key_slot(&key, &mut slot);

        assert_eq!(&slot[..16], &key[..16]);
        assert_eq!(&slot[16..], &[0u8; 16]);
    }

    #[test]
    fn test_key_slot_512_variants_use_first_32_bytes() {
        let key: Vec<u8> = (0..64).collect();
        let mut slot = [0u8; KEY_SLOT_SIZE];
        Variant::Ak512_512.fill_key_slot(&key, &mut slot);
        assert_eq!(&slot[..], &key[..32]);

        let key: Vec<u8> = (0..32).collect();
        Variant::Ak256_512.fill_key_slot(&key, &mut slot);
        assert_eq!(&slot[..], &key[..]);
    }

    #[test]
    fn test_tag_bounds() {
        assert!(Variant::Ak256_256.check_tag_len(15).is_err());
        assert!(Variant::Ak256_256.check_tag_len(16).is_ok());
        assert!(Variant::Ak256_256.check_tag_len(64).is_ok());
        assert!(Variant::Ak256_256.check_tag_len(65).is_err());
        assert!(Variant::Ak256_512.check_tag_len(128).is_ok());
        assert!(Variant::Ak256_512.check_tag_len(129).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Variant::Ak256_256.to_string(), "Ascon-Keccak 256/256");
    }
}
