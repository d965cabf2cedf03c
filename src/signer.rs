//! Document signing and verification using RSA PKCS#1 v1.5 over SHA-256.

use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::container;
use crate::error::Error;

/// Compute the SHA-256 digest of the given bytes.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Sign a document and return the signed container bytes.
///
/// The document digest is SHA-256; the signature is RSA PKCS#1 v1.5 over the
/// prehashed digest. The returned bytes are
/// `document || marker || raw signature` — see [`container`].
///
/// # Errors
///
/// Returns an error if the RSA signing primitive fails (e.g., the digest does
/// not fit the key modulus).
pub fn sign_document(document: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>, Error> {
    let digest = sha256(document);
    let signature = private_key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)?;
    Ok(container::embed(document, &signature))
}

/// Verify a signed container against a public key.
///
/// Boolean contract: any failure along the path — missing marker, malformed
/// signature bytes, digest mismatch — yields `false`. This never panics and
/// never returns an error. Callers wanting the failure reason should use
/// [`verify_container_detailed`].
pub fn verify_container(container_bytes: &[u8], public_key: &RsaPublicKey) -> bool {
    matches!(
        verify_container_detailed(container_bytes, public_key),
        VerifyOutcome::Valid
    )
}

/// Structured verification outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifyOutcome {
    /// Signature checks out against the content before the marker.
    Valid,
    /// Verification failed; the reason is for caller-side logging only and
    /// must not change control flow relative to the boolean contract.
    Invalid(InvalidReason),
}

/// Why verification failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    #[serde(rename = "MARKER_MISSING")]
    MarkerMissing,
    #[serde(rename = "SIGNATURE_MISMATCH")]
    SignatureMismatch,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvalidReason::MarkerMissing => "MARKER_MISSING",
            InvalidReason::SignatureMismatch => "SIGNATURE_MISMATCH",
        };
        write!(f, "{}", s)
    }
}

/// Verify a signed container, reporting why verification failed.
pub fn verify_container_detailed(
    container_bytes: &[u8],
    public_key: &RsaPublicKey,
) -> VerifyOutcome {
    let (content, signature) = match container::split(container_bytes) {
        Ok(parts) => parts,
        Err(_) => return VerifyOutcome::Invalid(InvalidReason::MarkerMissing),
    };

    let digest = sha256(content);
    match public_key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature) {
        Ok(()) => VerifyOutcome::Valid,
        Err(_) => VerifyOutcome::Invalid(InvalidReason::SignatureMismatch),
    }
}
