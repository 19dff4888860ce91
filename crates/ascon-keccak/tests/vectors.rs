//! Known-answer vectors for every supported parameter set.
//!
//! Unless stated otherwise: key `80 81 ..`, IV `20 21 .. 2f`, and the
//! plaintext and AAD are both the byte sequence `00 01 02 ..`.

use ascon_keccak::{AeadError, AsconKeccak256, AsconKeccak512};

fn key(len: usize) -> Vec<u8> {
    (0..len).map(|i| 0x80 + i as u8).collect()
}

fn iv() -> Vec<u8> {
    (0x20..0x30).collect()
}

fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 64) as u8).collect()
}

fn decode_hex(hex: &str) -> Vec<u8> {
    hex::decode(hex).expect("valid hex")
}

struct Vector {
    key_len: usize,
    plaintext: Vec<u8>,
    aad: Vec<u8>,
    ciphertext: &'static str,
    tag: &'static str,
}

fn check_256(v: &Vector) {
    let tag_len = v.tag.len() / 2;
    let mut enc = AsconKeccak256::with_key(&key(v.key_len), &iv()).unwrap();
    let (ct, tag) = enc.encrypt(&v.plaintext, &v.aad, tag_len).unwrap();
    assert_eq!(hex::encode(&ct), v.ciphertext);
    assert_eq!(hex::encode(&tag), v.tag);

    let mut dec = AsconKeccak256::with_key(&key(v.key_len), &iv()).unwrap();
    let pt = dec
        .decrypt(&decode_hex(v.ciphertext), &v.aad, &decode_hex(v.tag))
        .unwrap();
    assert_eq!(pt, v.plaintext);
}

fn check_512(v: &Vector) {
    let tag_len = v.tag.len() / 2;
    let mut enc = AsconKeccak512::with_key(&key(v.key_len), &iv()).unwrap();
    let (ct, tag) = enc.encrypt(&v.plaintext, &v.aad, tag_len).unwrap();
    assert_eq!(hex::encode(&ct), v.ciphertext);
    assert_eq!(hex::encode(&tag), v.tag);

    let mut dec = AsconKeccak512::with_key(&key(v.key_len), &iv()).unwrap();
    let pt = dec
        .decrypt(&decode_hex(v.ciphertext), &v.aad, &decode_hex(v.tag))
        .unwrap();
    assert_eq!(pt, v.plaintext);
}

const CT_256_64: &str = "66eb20f033f012e05ae3410ff0f4e286a7ecd65a91746204cd4cb7f565689803\
                         1af249cf9f09860ce4daaafaf074c54c87664953451a633f57fa5c7b4bbea1ca";

// ============================================================================
// Ascon-Keccak 256/256 (rate 136)
// ============================================================================

#[test]
fn test_256_256_reference() {
    check_256(&Vector {
        key_len: 32,
        plaintext: counting(64),
        aad: counting(64),
        ciphertext: CT_256_64,
        tag: "033b2d509016724f36f4e30afd585c65",
    });
}

#[test]
fn test_256_256_full_capacity_tag() {
    // A longer tag extends the shorter one
    check_256(&Vector {
        key_len: 32,
        plaintext: counting(64),
        aad: counting(64),
        ciphertext: CT_256_64,
        tag: "033b2d509016724f36f4e30afd585c65845f3ec6885f6f3ec61eee17c0609edb\
              acb0d35acfc50b21ca4cbeae5cb3de8efa0470a344d63c71e8a5f548a733468d",
    });
}

#[test]
fn test_256_256_empty_plaintext() {
    check_256(&Vector {
        key_len: 32,
        plaintext: Vec::new(),
        aad: counting(64),
        ciphertext: "",
        tag: "50b32ae85480c19d7a77bd42a965602a",
    });
}

#[test]
fn test_256_256_empty_aad() {
    check_256(&Vector {
        key_len: 32,
        plaintext: counting(64),
        aad: Vec::new(),
        ciphertext: "06948c89ab5acb3830ccb188b757f05057bd09cef145ae02d96f7c42eba92aef\
                     a9ea3e828529ce7363d80d86c9219c25539777bbeb2089542903ef4dd751709f",
        tag: "f7a344293c104542f833fa24db07726a",
    });
}

#[test]
fn test_256_256_empty_everything() {
    check_256(&Vector {
        key_len: 32,
        plaintext: Vec::new(),
        aad: Vec::new(),
        ciphertext: "",
        tag: "6ace0e13b55b8a9ac55651ec35fbed0c",
    });
}

#[test]
fn test_256_256_exact_rate() {
    let block: Vec<u8> = (0..136).map(|i| i as u8).collect();
    check_256(&Vector {
        key_len: 32,
        plaintext: block.clone(),
        aad: block,
        ciphertext: "05ad29e8a7e16f91902aa9a35ecf7d3841f1433ad8c3d5a5ee8eb206716ff62b\
                     25dc6a3a498c264eac3c2a5eebc0a2a8edf37c2df33ae253b3772cbcadbe7488\
                     caec8b506c6d258221ff7f1d722d4e20c703b107f964936a9336cf4b3fd10890\
                     fc05ffbd596df7f4197d4b487473e59b3ad78a7b2a72d3007be98a9246fe9ff0\
                     aa60ca7ee3e8dffb",
        tag: "dbf3fd45cfc75906df36460e78f20c0a",
    });
}

// ============================================================================
// Ascon-Keccak 256/512 (rate 72, 256-bit key)
// ============================================================================

#[test]
fn test_256_512_multi_block() {
    check_512(&Vector {
        key_len: 32,
        plaintext: counting(200),
        aad: counting(200),
        ciphertext: "f9cb29aebae47e6f2056dc7687b414cda9f78c2bfc56795213410a830294e9f1\
                     8c30459ca6c1576708cf3ab3d7cf0f9a24362d252c0a7e46c34b3f68bd08707c\
                     385e5f542f44cd1ec53263896877e386519d9a490214512437e9d5866e6fdaba\
                     81a261da57a3ac0875ea17d4cb9db04f73f8924a0b072eba9f374a74a9fa6957\
                     7e98fbdcfe1dc37dd27aeef3450eef1317fe43146362733b71e5597bbc8bedc0\
                     7ff7357cb8948e12b91eaf5052b736360d38c13e4b5cc77e9c89db34cda1f598\
                     e4c9d25c15aa2244",
        tag: "2e50abf3f0da93797bd08e83799224cd",
    });
}

#[test]
fn test_256_512_exact_rate() {
    let block: Vec<u8> = (0..72).collect();
    check_512(&Vector {
        key_len: 32,
        plaintext: block.clone(),
        aad: block,
        ciphertext: "aac19f7c115c34190000e60dda51c4c1c59890e282566c1c5bd9f8fd1000d6ab\
                     27027fc39c6546d2db4e845651b9d8dd8c3c1a8ada91e9beff138f5873639f4b\
                     5faaa376ab268934",
        tag: "18cba69abc67c07600ee365885f1e333",
    });
}

// ============================================================================
// Ascon-Keccak 512/512 (rate 72, 512-bit key)
// ============================================================================

const CT_512_64: &str = "2401c4509a7153c950c054b77ce12d359c37106da2fc32166933b4afbce77a0c\
                         1a3fa3c37e6f2f3d0c32f25f8645ff850f4e470099a393b756de235a04b2909d";

#[test]
fn test_512_512_reference() {
    check_512(&Vector {
        key_len: 64,
        plaintext: counting(64),
        aad: counting(64),
        ciphertext: CT_512_64,
        tag: "a61f3a283b73c1e08077e0044f2203be",
    });
}

#[test]
fn test_512_512_full_capacity_tag() {
    check_512(&Vector {
        key_len: 64,
        plaintext: counting(64),
        aad: counting(64),
        ciphertext: CT_512_64,
        tag: "a61f3a283b73c1e08077e0044f2203be5178be1d5a8ff88143056e429e5dfeef\
              2ed759728e5616a5acbbb2e2029f57a7169f4b3702ebd7a44e3fe005a13a4664\
              864936134cb64f766f9c343639cd8420477b6dcc538a2f8a5ea9439e3cfaa7f1\
              b972e9ad61b06525870450d1122122d3208560c3ca2c65397634e9fc28701181",
    });
}

// ============================================================================
// Negative cases
// ============================================================================

#[test]
fn test_reference_tampered_ciphertext() {
    let mut ct = decode_hex(CT_256_64);
    ct[0] ^= 0x01;

    let mut dec = AsconKeccak256::with_key(&key(32), &iv()).unwrap();
    let result = dec.decrypt(
        &ct,
        &counting(64),
        &decode_hex("033b2d509016724f36f4e30afd585c65"),
    );
    assert_eq!(result, Err(AeadError::AuthenticationFailure));
}

#[test]
fn test_reference_truncated_tag_rejected() {
    // A 16-byte prefix of the 64-byte tag is a valid 16-byte tag, but an
    // 8-byte prefix is below the minimum
    let mut dec = AsconKeccak256::with_key(&key(32), &iv()).unwrap();
    let result = dec.decrypt(
        &decode_hex(CT_256_64),
        &counting(64),
        &decode_hex("033b2d509016724f"),
    );
    assert!(matches!(result, Err(AeadError::InvalidParameter(_))));
}

#[test]
fn test_key_length_must_match_permutation() {
    assert!(AsconKeccak256::with_key(&key(64), &iv()).is_err());
    assert!(AsconKeccak512::with_key(&key(48), &iv()).is_err());
    assert!(AsconKeccak512::with_key(&key(64), &iv()[..12]).is_err());
}

#[test]
fn test_explicit_init() {
    assert!(ascon_keccak::init().is_ok());
}
