//! Configuration for runtime-selected sessions.
//!
//! Meant to be embedded in a host application's own TOML/JSON configuration.

use crate::error::AeadError;
use crate::permutation::{Permutation, Sha3_256Permutation, Sha3_512Permutation};
use crate::variant::{MIN_TAG_SIZE, check_tag_len};
use serde::{Deserialize, Serialize};

/// Keccak-f\[1600\] parameterization backing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PermutationKind {
    /// Rate 136, capacity 64 (256-bit keys)
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// Rate 72, capacity 128 (256-bit or 512-bit keys)
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl PermutationKind {
    /// Rate in bytes.
    #[must_use]
    pub const fn rate(self) -> usize {
        match self {
            Self::Sha3_256 => Sha3_256Permutation::RATE,
            Self::Sha3_512 => Sha3_512Permutation::RATE,
        }
    }

    /// Capacity in bytes, which is also the largest tag.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            Self::Sha3_256 => Sha3_256Permutation::CAPACITY,
            Self::Sha3_512 => Sha3_512Permutation::CAPACITY,
        }
    }
}

/// Ascon-Keccak session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AeadConfig {
    /// Permutation parameters
    #[serde(default)]
    pub permutation: PermutationKind,
    /// Tag length in bytes
    #[serde(default = "default_tag_len")]
    pub tag_len: usize,
}

impl AeadConfig {
    /// Create a configuration for `permutation` with the default tag length.
    #[must_use]
    pub fn new(permutation: PermutationKind) -> Self {
        Self {
            permutation,
            tag_len: default_tag_len(),
        }
    }

    /// Set the tag length.
    #[must_use]
    pub fn with_tag_len(mut self, tag_len: usize) -> Self {
        self.tag_len = tag_len;
        self
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tag length is outside
    /// 16..=capacity for the chosen permutation.
    pub fn validate(&self) -> Result<(), AeadError> {
        check_tag_len(self.tag_len, self.permutation.capacity())
    }
}

impl Default for AeadConfig {
    fn default() -> Self {
        Self::new(PermutationKind::default())
    }
}

// Default values

fn default_tag_len() -> usize {
    MIN_TAG_SIZE
}
