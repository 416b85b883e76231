//! # Error Types
//!
//! Defines a structured error hierarchy for the encryption core using `thiserror`.
//! Each error variant carries enough context for meaningful diagnostics without
//! exposing key material or plaintext to the caller.

use thiserror::Error;

/// Top-level error type encompassing all failure modes in sealfile.
#[derive(Error, Debug)]
pub enum SealError {
    #[error("invalid key: {0}")]
    Key(#[from] KeyError),

    #[error("malformed blob: {0}")]
    Blob(#[from] BlobError),

    #[error("decryption failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Key text parsing and validation errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("not valid URL-safe base64: {source}")]
    Encoding {
        #[source]
        source: base64::DecodeError,
    },

    #[error("decodes to {found} bytes, expected exactly 32")]
    Length { found: usize },
}

/// Blob layout violations detected before any cryptographic processing.
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("{found} bytes is shorter than the 64-byte minimum (IV + one block + tag)")]
    TooShort { found: usize },

    #[error("ciphertext segment of {found} bytes is not a positive multiple of the 16-byte block size")]
    Misaligned { found: usize },
}

/// Failures on the authenticated decryption path.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("authentication tag mismatch (tampered data or wrong key)")]
    Authentication,

    #[error("inconsistent PKCS#7 padding in authenticated ciphertext")]
    Padding,
}

pub type Result<T> = std::result::Result<T, SealError>;
