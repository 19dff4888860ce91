//! Fuzz test for configuration parsing
//!
//! Arbitrary TOML must never panic when parsed and validated as an
//! `AeadConfig`, and a validated config must always build a session.

#![no_main]

use ascon_keccak::{AeadConfig, AnyAsconKeccak};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<AeadConfig>(s) {
            if config.validate().is_ok() {
                assert!(AnyAsconKeccak::from_config(&config).is_ok());
            }
        }
    }
});
