//! Shared fixtures so the suite pays for RSA key generation once.

use std::sync::OnceLock;

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::keygen::RsaKeyPair;

// 2048-bit keys keep the tests fast; full-size generation is covered by the
// keygen shape test.
const TEST_MODULUS_BITS: usize = 2048;

fn new_keypair() -> RsaKeyPair {
    let private = RsaPrivateKey::new(&mut OsRng, TEST_MODULUS_BITS)
        .unwrap_or_else(|e| panic!("test key generation failed: {}", e));
    let public = RsaPublicKey::from(&private);
    RsaKeyPair { private, public }
}

/// Cached keypair used by most tests.
pub(crate) fn test_keypair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(new_keypair)
}

/// A second, distinct keypair for wrong-key cases.
pub(crate) fn other_keypair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(new_keypair)
}
