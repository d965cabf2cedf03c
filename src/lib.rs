//! # pdfseal
//!
//! Detached-signature embedding for PDF documents with PIN-protected RSA keys.
//!
//! pdfseal implements the cryptographic layer of a desktop document-signing
//! tool: it computes document digests, embeds and verifies detached RSA
//! signatures in a marker-delimited container, and protects the private key
//! at rest under a PIN-derived AES key. File pickers, dialogs, and other UI
//! concerns live outside this crate; callers hand in byte buffers, paths,
//! and PIN strings and get back bytes or a boolean.
//!
//! ## Features
//!
//! - **RSA-4096 Key Generation**: generate keypairs with exponent 65537 and
//!   export them as SPKI (public) and PKCS#8 (private) PEM
//! - **Detached Signatures**: SHA-256 digests signed with RSA PKCS#1 v1.5,
//!   stored after the content behind a `%%__PADES__%%` marker line
//! - **Swallowing Verification**: `verify` is a pure boolean — malformed
//!   containers and bad signatures both come back as `false`, never a panic
//! - **PIN Protection**: AES-256-CBC wrapping of the private key with a key
//!   derived from the PIN (legacy single-SHA-256 derivation, kept for byte
//!   compatibility with existing key files)
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfseal::{keygen, signer};
//!
//! // Generate a keypair and protect the private half under a PIN
//! let pair = keygen::generate_keypair().unwrap();
//! let protected = keygen::protect(&pair, "1234").unwrap();
//!
//! // Later: unlock, sign, verify
//! let private = keygen::unlock_private_key(&protected.encrypted_private, "1234").unwrap();
//! let container = signer::sign_document(b"document bytes", &private).unwrap();
//!
//! let public = keygen::load_public_key_pem(&protected.public_pem).unwrap();
//! assert!(signer::verify_container(&container, &public));
//! ```
//!
//! ## Security
//!
//! The container marker is a naive delimiter, not a PAdES/CMS structure, and
//! the encrypted key blob carries no MAC; PKCS#7 padding validity is the only
//! tamper signal, with an inherent ≈1/256 false-accept for a wrong PIN.
//! Callers supply an already-trusted public key — there is no chain
//! validation or revocation checking. Key material lives in zeroized buffers
//! for the duration of a call and is never cached.
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, Error>`; see [`error::Error`] for
//! the taxonomy. The verification entry points never return an error.

pub mod container;
pub mod error;
pub mod keygen;
pub mod keywrap;
pub mod signer;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::Error;
