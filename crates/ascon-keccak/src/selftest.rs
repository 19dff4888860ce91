//! Known-answer self-test.
//!
//! Runs once per process. A failure is remembered: every later keying
//! attempt reports `SelfTestFailed`.

use crate::aead::AsconKeccak256;
use crate::constant_time::ct_eq;
use crate::error::AeadError;
use std::sync::OnceLock;

static SELF_TEST: OnceLock<bool> = OnceLock::new();

const KEY: [u8; 32] = [
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x8d, 0x8e, 0x8f,
    0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b, 0x9c, 0x9d, 0x9e, 0x9f,
];

const IV: [u8; 16] = [
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f,
];

const CIPHERTEXT: [u8; 64] = [
    0x66, 0xeb, 0x20, 0xf0, 0x33, 0xf0, 0x12, 0xe0, 0x5a, 0xe3, 0x41, 0x0f, 0xf0, 0xf4, 0xe2, 0x86,
    0xa7, 0xec, 0xd6, 0x5a, 0x91, 0x74, 0x62, 0x04, 0xcd, 0x4c, 0xb7, 0xf5, 0x65, 0x68, 0x98, 0x03,
    0x1a, 0xf2, 0x49, 0xcf, 0x9f, 0x09, 0x86, 0x0c, 0xe4, 0xda, 0xaa, 0xfa, 0xf0, 0x74, 0xc5, 0x4c,
    0x87, 0x66, 0x49, 0x53, 0x45, 0x1a, 0x63, 0x3f, 0x57, 0xfa, 0x5c, 0x7b, 0x4b, 0xbe, 0xa1, 0xca,
];

const TAG: [u8; 16] = [
    0x03, 0x3b, 0x2d, 0x50, 0x90, 0x16, 0x72, 0x4f, 0x36, 0xf4, 0xe3, 0x0a, 0xfd, 0x58, 0x5c, 0x65,
];

/// Run the library self-test if it has not run yet.
///
/// Called implicitly by the first `set_key`; calling it up front moves the
/// cost to a predictable point.
///
/// # Errors
///
/// Returns `SelfTestFailed` if the engine does not reproduce its reference
/// vector.
pub fn init() -> Result<(), AeadError> {
    if *SELF_TEST.get_or_init(run) {
        Ok(())
    } else {
        Err(AeadError::SelfTestFailed)
    }
}

fn run() -> bool {
    let passed = known_answer().unwrap_or(false);
    if passed {
        tracing::info!("Ascon-Keccak self-test passed");
    } else {
        tracing::error!("Ascon-Keccak self-test failed");
    }
    passed
}

fn known_answer() -> Result<bool, AeadError> {
    let input: [u8; 64] = std::array::from_fn(|i| i as u8);

    let mut cipher = AsconKeccak256::new();
    cipher.load_key(&KEY, &IV)?;
    let mut buffer = input;
    let mut tag = [0u8; 16];
    cipher.encrypt_in_place(&mut buffer, &input, &mut tag)?;
    if !ct_eq(&buffer, &CIPHERTEXT) || !ct_eq(&tag, &TAG) {
        return Ok(false);
    }

    cipher.load_key(&KEY, &IV)?;
    cipher.decrypt_in_place(&mut buffer, &input, &TAG)?;
    Ok(ct_eq(&buffer, &input))
}
