use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The signature marker was not found in the container bytes.
    #[error("Signature marker not found in container")]
    MalformedContainer,

    /// Encrypted blob is structurally invalid (too short or ragged length).
    #[error("Malformed encrypted blob: {0}")]
    MalformedBlob(&'static str),

    /// Padding validation failed during decryption. A wrong PIN and a
    /// corrupted blob are indistinguishable by design.
    #[error("Invalid PIN or corrupted key blob")]
    InvalidPin,

    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("PKCS#8 error: {0}")]
    Pkcs8(String),

    #[error("SPKI error: {0}")]
    Spki(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rsa::pkcs8::Error> for Error {
    fn from(err: rsa::pkcs8::Error) -> Self {
        Error::Pkcs8(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        Error::Spki(err.to_string())
    }
}
