//! Fuzz target for decryption of arbitrary ciphertexts
//!
//! Forged inputs must be rejected without panicking and without releasing
//! plaintext.

#![no_main]

use arbitrary::Arbitrary;
use ascon_keccak::{AeadError, AsconKeccak256};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DecryptInput {
    key: [u8; 32],
    iv: [u8; 16],
    ciphertext: Vec<u8>,
    aad: Vec<u8>,
    tag: Vec<u8>,
}

fuzz_target!(|input: DecryptInput| {
    let Ok(mut cipher) = AsconKeccak256::with_key(&input.key, &input.iv) else {
        return;
    };

    let mut buffer = input.ciphertext.clone();
    match cipher.decrypt_in_place(&mut buffer, &input.aad, &input.tag) {
        Ok(()) => {}
        Err(AeadError::AuthenticationFailure) => {
            assert!(buffer.iter().all(|&b| b == 0));
        }
        Err(_) => assert_eq!(buffer, input.ciphertext),
    }
});
