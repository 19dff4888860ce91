//! Fuzz target for one-shot encryption
//!
//! Encrypting then decrypting with the same parameters must always recover
//! the plaintext, for every parameter set and tag length.

#![no_main]

use arbitrary::Arbitrary;
use ascon_keccak::{AsconKeccak256, AsconKeccak512};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key: [u8; 64],
    iv: [u8; 16],
    variant: u8,
    tag_len: u8,
    plaintext: Vec<u8>,
    aad: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    let tag_len = usize::from(input.tag_len);

    match input.variant % 3 {
        0 => {
            let Ok(mut enc) = AsconKeccak256::with_key(&input.key[..32], &input.iv) else {
                return;
            };
            // Out-of-range tag lengths must be rejected, never panic
            let Ok((ct, tag)) = enc.encrypt(&input.plaintext, &input.aad, tag_len) else {
                return;
            };
            let mut dec = AsconKeccak256::with_key(&input.key[..32], &input.iv).unwrap();
            assert_eq!(dec.decrypt(&ct, &input.aad, &tag).unwrap(), input.plaintext);
        }
        variant => {
            let key = if variant == 1 { &input.key[..32] } else { &input.key[..] };
            let Ok(mut enc) = AsconKeccak512::with_key(key, &input.iv) else {
                return;
            };
            let Ok((ct, tag)) = enc.encrypt(&input.plaintext, &input.aad, tag_len) else {
                return;
            };
            let mut dec = AsconKeccak512::with_key(key, &input.iv).unwrap();
            assert_eq!(dec.decrypt(&ct, &input.aad, &tag).unwrap(), input.plaintext);
        }
    }
});
