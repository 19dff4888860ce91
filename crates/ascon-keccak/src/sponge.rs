//! Duplex view over a permutation state.
//!
//! Data paths (AAD, plaintext, ciphertext) only get the `*_rate` helpers,
//! which are bounded to the rate. Keying and finalization use the separately
//! named helpers below, which are the only ones that reach into the capacity.

use crate::permutation::Permutation;
use zeroize::Zeroize;

/// Byte appended after the last byte of every input segment.
pub const PAD_BYTE: u8 = 0x80;

/// Byte XORed into the last state byte once AAD absorption is complete.
pub const DOMAIN_SEPARATOR: u8 = 0x01;

pub(crate) struct Duplex<P: Permutation> {
    state: P,
    #[cfg(test)]
    permutations: usize,
}

impl<P: Permutation> Duplex<P> {
    pub(crate) fn new() -> Self {
        Self {
            state: P::default(),
            #[cfg(test)]
            permutations: 0,
        }
    }

    pub(crate) fn permute(&mut self) {
        self.state.permute();
        #[cfg(test)]
        {
            self.permutations += 1;
        }
    }

    pub(crate) fn absorb_rate(&mut self, data: &[u8], offset: usize) {
        debug_assert!(offset + data.len() <= P::RATE);
        self.state.add_bytes(data, offset);
    }

    pub(crate) fn squeeze_rate(&self, out: &mut [u8], offset: usize) {
        debug_assert!(offset + out.len() <= P::RATE);
        self.state.extract_bytes(out, offset);
    }

    pub(crate) fn replace_rate(&mut self, data: &[u8], offset: usize) {
        debug_assert!(offset + data.len() <= P::RATE);
        self.state.overwrite_bytes(data, offset);
    }

    /// Terminate a segment whose last byte ended at `offset`.
    ///
    /// A segment ending exactly on the rate boundary gets one more
    /// permutation first; the pad byte then sits at offset `RATE`.
    pub(crate) fn pad(&mut self, offset: usize) {
        debug_assert!(offset <= P::RATE);
        if offset == P::RATE {
            self.permute();
        }
        self.state.add_bytes(&[PAD_BYTE], offset);
    }

    pub(crate) fn separate_domain(&mut self) {
        self.state.add_bytes(&[DOMAIN_SEPARATOR], P::STATE_SIZE - 1);
    }

    // Keying

    pub(crate) fn load_init_word(&mut self, word: u64) {
        self.state.overwrite_bytes(&word.to_le_bytes(), 0);
    }

    /// XOR `data` so that it ends `from_end` bytes before the end of the state.
    pub(crate) fn absorb_tail(&mut self, data: &[u8], from_end: usize) {
        debug_assert!(data.len() + from_end <= P::STATE_SIZE);
        self.state.add_bytes(data, P::STATE_SIZE - from_end - data.len());
    }

    // Finalization

    pub(crate) fn mix_key_slot(&mut self, key_slot: &[u8]) {
        self.state.add_bytes(key_slot, P::RATE);
    }

    pub(crate) fn extract_tag(&self, tag: &mut [u8]) {
        debug_assert!(tag.len() <= P::CAPACITY);
        self.state.extract_bytes(tag, P::RATE);
    }

    pub(crate) fn wipe(&mut self) {
        self.state.zeroize();
        #[cfg(test)]
        {
            self.permutations = 0;
        }
    }

    #[cfg(test)]
    pub(crate) fn permutations(&self) -> usize {
        self.permutations
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Vec<u8> {
        let mut out = vec![0u8; P::STATE_SIZE];
        self.state.extract_bytes(&mut out, 0);
        out
    }
}
