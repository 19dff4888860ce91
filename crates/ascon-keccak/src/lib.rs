//! # Ascon-Keccak
//!
//! Authenticated encryption with associated data built as a duplex sponge
//! over the Keccak-f\[1600\] permutation.
//!
//! This crate provides:
//! - Keying from a 256-bit or 512-bit key and a 128-bit IV
//! - One-shot encryption/decryption (out-of-place, in-place, `Vec`-returning)
//! - Streaming init/update/final with arbitrary chunking
//! - Variable-length tags verified in constant time
//! - Zeroization of all session state and key material
//! - A known-answer self-test run once per process
//!
//! ## Parameter Sets
//!
//! | Session | Key | IV | Tag | Rate | Security Level |
//! |---------|-----|----|-----|------|----------------|
//! | [`AsconKeccak256`] | 256 bit | 128 bit | 16..=64 bytes | 136 bytes | 256-bit |
//! | [`AsconKeccak512`] | 256 bit | 128 bit | 16..=128 bytes | 72 bytes | 256-bit |
//! | [`AsconKeccak512`] | 512 bit | 128 bit | 16..=128 bytes | 72 bytes | 256-bit |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod aead;
pub mod config;
pub mod constant_time;
pub mod error;
pub mod permutation;
pub mod variant;

mod selftest;
mod sponge;

pub use aead::{AnyAsconKeccak, AsconKeccak, AsconKeccak256, AsconKeccak512, Phase};
pub use config::{AeadConfig, PermutationKind};
pub use error::AeadError;
pub use permutation::{KeccakPermutation, Permutation};
pub use selftest::init;
pub use sponge::{DOMAIN_SEPARATOR, PAD_BYTE};
pub use variant::{IV_SIZE, MIN_TAG_SIZE, Variant};
