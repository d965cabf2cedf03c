//! File-level signing flows composing the core primitives.
//!
//! Every operation takes explicit paths and a PIN per call; nothing is held
//! between calls. Disk access is not coordinated across processes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::{keygen, signer};

/// Output file name used by [`sign_file`].
pub const SIGNED_FILE_NAME: &str = "result_signed.pdf";

/// Generate a fresh keypair and write both halves to disk: the encrypted
/// private blob to `private_key_path` and the public SPKI PEM to
/// `public_key_path`.
pub fn generate_to_files(
    private_key_path: &Path,
    public_key_path: &Path,
    pin: &str,
) -> Result<(), Error> {
    let pair = keygen::generate_keypair()?;
    let protected = keygen::protect(&pair, pin)?;
    fs::write(private_key_path, &protected.encrypted_private)?;
    fs::write(public_key_path, protected.public_pem.as_bytes())?;
    Ok(())
}

/// Sign a document file with an encrypted private key unlocked by `pin`.
///
/// Writes the signed container to `out_dir` and returns the written path.
///
/// # Errors
///
/// [`Error::InvalidPin`] when the PIN does not unlock the key file,
/// [`Error::MalformedBlob`] when the key file is not an encrypted blob, and
/// [`Error::Io`] for any file failure.
pub fn sign_file(
    document_path: &Path,
    key_path: &Path,
    pin: &str,
    out_dir: &Path,
) -> Result<PathBuf, Error> {
    let blob = fs::read(key_path)?;
    let private_key = keygen::unlock_private_key(&blob, pin)?;
    let document = fs::read(document_path)?;
    let container = signer::sign_document(&document, &private_key)?;

    let out_path = out_dir.join(SIGNED_FILE_NAME);
    fs::write(&out_path, container)?;
    Ok(out_path)
}

/// Verify a signed container file against a public-key PEM file.
///
/// Boolean contract: any failure — unreadable files, bad PEM, missing
/// marker, signature mismatch — yields `false`.
pub fn verify_file(document_path: &Path, public_key_path: &Path) -> bool {
    verify_file_inner(document_path, public_key_path).unwrap_or(false)
}

fn verify_file_inner(document_path: &Path, public_key_path: &Path) -> Result<bool, Error> {
    let container = fs::read(document_path)?;
    let pem = fs::read_to_string(public_key_path)?;
    let public_key = keygen::load_public_key_pem(&pem)?;
    Ok(signer::verify_container(&container, &public_key))
}
