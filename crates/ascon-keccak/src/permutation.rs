//! Permutation providers for the duplex sponge.
//!
//! The AEAD engine only ever talks to a [`Permutation`]: a fixed-size state
//! split into a rate and a capacity, a `permute` function and byte-granular
//! access at arbitrary offsets. Which permutation backs the session decides
//! the rate and therefore the security level.
//!
//! [`KeccakPermutation`] provides Keccak-f\[1600\] (200-byte state) with the
//! rate as a const parameter. Byte `i` of the state is byte `i % 8` of lane
//! `i / 8`, lanes little-endian, which is the Keccak/SHA-3 convention.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keccak-f\[1600\] state size in bytes.
pub const KECCAK_STATE_SIZE: usize = 200;

const KECCAK_LANES: usize = KECCAK_STATE_SIZE / 8;

/// A fixed-width permutation with byte-level state access.
///
/// Offsets are byte offsets into the whole state (rate followed by capacity).
/// Implementations may panic when `offset + len` exceeds [`Self::STATE_SIZE`].
pub trait Permutation: Default + Zeroize {
    /// Bytes absorbed or squeezed per permutation call.
    const RATE: usize;

    /// Bytes of state never exposed to data.
    const CAPACITY: usize;

    /// Total state size.
    const STATE_SIZE: usize = Self::RATE + Self::CAPACITY;

    /// Apply the permutation to the state in place.
    fn permute(&mut self);

    /// XOR `data` into the state starting at `offset`.
    fn add_bytes(&mut self, data: &[u8], offset: usize);

    /// Copy `out.len()` state bytes starting at `offset` into `out`.
    fn extract_bytes(&self, out: &mut [u8], offset: usize);

    /// Replace state bytes starting at `offset` with `data`.
    fn overwrite_bytes(&mut self, data: &[u8], offset: usize);
}

/// Keccak-f\[1600\] with a `RATE`-byte rate.
///
/// The state is wiped on drop.
#[derive(Default)]
pub struct KeccakPermutation<const RATE: usize> {
    lanes: [u64; KECCAK_LANES],
}

/// Keccak-f\[1600\] with SHA3-256 parameters (rate 136, capacity 64).
pub type Sha3_256Permutation = KeccakPermutation<136>;

/// Keccak-f\[1600\] with SHA3-512 parameters (rate 72, capacity 128).
pub type Sha3_512Permutation = KeccakPermutation<72>;

impl<const RATE: usize> KeccakPermutation<RATE> {
    #[inline]
    fn byte(&self, pos: usize) -> u8 {
        (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8
    }

    #[inline]
    fn xor_byte(&mut self, pos: usize, value: u8) {
        self.lanes[pos / 8] ^= u64::from(value) << (8 * (pos % 8));
    }
}

impl<const RATE: usize> Zeroize for KeccakPermutation<RATE> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
    }
}

impl<const RATE: usize> Drop for KeccakPermutation<RATE> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const RATE: usize> ZeroizeOnDrop for KeccakPermutation<RATE> {}

impl<const RATE: usize> Permutation for KeccakPermutation<RATE> {
    const RATE: usize = RATE;
    const CAPACITY: usize = KECCAK_STATE_SIZE - RATE;

    fn permute(&mut self) {
        keccak::f1600(&mut self.lanes);
    }

    fn add_bytes(&mut self, data: &[u8], offset: usize) {
        debug_assert!(offset + data.len() <= KECCAK_STATE_SIZE);
        for (i, &b) in data.iter().enumerate() {
            self.xor_byte(offset + i, b);
        }
    }

    fn extract_bytes(&self, out: &mut [u8], offset: usize) {
        debug_assert!(offset + out.len() <= KECCAK_STATE_SIZE);
        for (i, b) in out.iter_mut().enumerate() {
            *b = self.byte(offset + i);
        }
    }

    fn overwrite_bytes(&mut self, data: &[u8], offset: usize) {
        debug_assert!(offset + data.len() <= KECCAK_STATE_SIZE);
        for (i, &b) in data.iter().enumerate() {
            let pos = offset + i;
            let current = self.byte(pos);
            self.xor_byte(pos, current ^ b);
        }
    }
}
