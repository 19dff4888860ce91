//! Fuzz target for the streaming interface
//!
//! Splitting the message at arbitrary points must give the same ciphertext
//! and tag as a one-shot call.

#![no_main]

use arbitrary::Arbitrary;
use ascon_keccak::AsconKeccak512;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct StreamInput {
    key: [u8; 32],
    iv: [u8; 16],
    plaintext: Vec<u8>,
    aad: Vec<u8>,
    cuts: Vec<u16>,
}

fuzz_target!(|input: StreamInput| {
    let Ok(mut one_shot) = AsconKeccak512::with_key(&input.key, &input.iv) else {
        return;
    };
    let (expected_ct, expected_tag) = one_shot.encrypt(&input.plaintext, &input.aad, 32).unwrap();

    let len = input.plaintext.len();
    let mut points: Vec<usize> = input
        .cuts
        .iter()
        .map(|&c| usize::from(c) % (len + 1))
        .chain([0, len])
        .collect();
    points.sort_unstable();
    points.dedup();

    let mut stream = AsconKeccak512::with_key(&input.key, &input.iv).unwrap();
    stream.enc_init(&input.aad).unwrap();
    let mut ct = vec![0u8; len];
    for pair in points.windows(2) {
        stream
            .enc_update(&input.plaintext[pair[0]..pair[1]], &mut ct[pair[0]..pair[1]])
            .unwrap();
    }
    let mut tag = [0u8; 32];
    stream.enc_final(&mut tag).unwrap();

    assert_eq!(ct, expected_ct);
    assert_eq!(&tag[..], &expected_tag[..]);
});
