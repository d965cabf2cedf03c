//! PIN-based protection of key material at rest.
//!
//! The symmetric key is the bare SHA-256 of the PIN (legacy v1 derivation,
//! no salt or work factor) and the blob layout is `iv || AES-256-CBC
//! ciphertext` with PKCS#7 padding. Existing encrypted key files depend on
//! this exact construction, so the derivation must stay byte-compatible.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use cbc::{Decryptor, Encryptor};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::Error;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// AES block size in bytes; also the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Derive the 32-byte wrapping key from a PIN.
///
/// Deterministic: SHA-256 of the PIN's UTF-8 bytes, nothing else. The PIN is
/// never persisted; the derived key is recomputed on every call.
pub fn derive_key(pin: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hasher.finalize().into()
}

/// Encrypt a plaintext under the derived key.
///
/// A fresh random IV is drawn from the OS for every call and prepended to
/// the ciphertext. PKCS#7 padding always adds at least one byte, so the
/// ciphertext is never empty (a full extra block when the plaintext is
/// already block-aligned).
pub fn encrypt(plaintext: &[u8], key: &[u8; 32]) -> Vec<u8> {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);

    let pad_len = BLOCK_SIZE - (plaintext.len() % BLOCK_SIZE);
    let mut blob = Vec::with_capacity(BLOCK_SIZE + plaintext.len() + pad_len);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(plaintext);
    blob.extend(std::iter::repeat(pad_len as u8).take(pad_len));

    let mut cipher = Aes256CbcEnc::new(key.into(), (&iv).into());
    for block in blob[BLOCK_SIZE..].chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }
    blob
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// - [`Error::MalformedBlob`] if the blob is shorter than one IV block or the
///   ciphertext length is not a positive multiple of the block size.
/// - [`Error::InvalidPin`] if the PKCS#7 padding does not validate. A wrong
///   PIN and a tampered blob are indistinguishable here. A wrong key slips
///   through padding validation with probability ≈1/256, so callers must
///   treat any parse failure of the recovered plaintext as a wrong-PIN
///   signal as well.
pub fn decrypt(blob: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, Error> {
    if blob.len() < BLOCK_SIZE {
        return Err(Error::MalformedBlob("blob shorter than one IV block"));
    }
    let (iv, ciphertext) = blob.split_at(BLOCK_SIZE);
    if ciphertext.is_empty() {
        return Err(Error::MalformedBlob("ciphertext is empty"));
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::MalformedBlob(
            "ciphertext length is not a multiple of the block size",
        ));
    }

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    let mut cipher = Aes256CbcDec::new(key.into(), GenericArray::from_slice(iv));
    for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    let plaintext_len = strip_padding(&buffer)?;
    Ok(buffer[..plaintext_len].to_vec())
}

/// Validate PKCS#7 padding and return the unpadded length.
fn strip_padding(padded: &[u8]) -> Result<usize, Error> {
    let pad_len = *padded.last().ok_or(Error::InvalidPin)? as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > padded.len() {
        return Err(Error::InvalidPin);
    }
    let body_len = padded.len() - pad_len;
    if padded[body_len..].iter().any(|&b| b != pad_len as u8) {
        return Err(Error::InvalidPin);
    }
    Ok(body_len)
}
