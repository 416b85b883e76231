//! # Blob Codec
//!
//! (De)serialization of the on-disk ciphertext layout. Both the encrypt and
//! decrypt paths go through this module so the offset arithmetic exists in
//! exactly one place.
//!
//! ```text
//! ┌───────────┬──────────────────────────────┬──────────────┐
//! │  IV (16B)  │  ciphertext (n × 16B)        │  tag (32B)   │
//! └───────────┴──────────────────────────────┴──────────────┘
//! ```

use crate::error::BlobError;

/// AES-CBC initialization vector length.
pub const IV_LEN: usize = 16;

/// HMAC-SHA256 tag length.
pub const TAG_LEN: usize = 32;

/// AES block size; ciphertext length is always a multiple of this.
pub const BLOCK_LEN: usize = 16;

/// Smallest well-formed blob: IV + one ciphertext block + tag.
pub const MIN_BLOB_LEN: usize = IV_LEN + BLOCK_LEN + TAG_LEN;

/// The three regions of a decoded blob.
#[derive(Debug, PartialEq, Eq)]
pub struct BlobParts<'a> {
    pub iv: [u8; IV_LEN],
    pub ciphertext: &'a [u8],
    pub tag: [u8; TAG_LEN],
}

/// Concatenates IV, ciphertext, and tag into the wire layout.
pub fn encode(iv: &[u8; IV_LEN], ciphertext: &[u8], tag: &[u8; TAG_LEN]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(IV_LEN + ciphertext.len() + TAG_LEN);
    blob.extend_from_slice(iv);
    blob.extend_from_slice(ciphertext);
    blob.extend_from_slice(tag);
    blob
}

/// Splits a blob back into its regions, validating the layout.
///
/// Fails if the blob cannot contain all three regions, or if the ciphertext
/// segment is empty or not block-aligned. No cryptographic checks happen
/// here — the caller must still verify the tag.
pub fn decode(blob: &[u8]) -> Result<BlobParts<'_>, BlobError> {
    if blob.len() < MIN_BLOB_LEN {
        return Err(BlobError::TooShort { found: blob.len() });
    }

    let (head, tag) = blob.split_at(blob.len() - TAG_LEN);
    let (iv, ciphertext) = head.split_at(IV_LEN);

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(BlobError::Misaligned {
            found: ciphertext.len(),
        });
    }

    let mut parts = BlobParts {
        iv: [0; IV_LEN],
        ciphertext,
        tag: [0; TAG_LEN],
    };
    parts.iv.copy_from_slice(iv);
    parts.tag.copy_from_slice(tag);
    Ok(parts)
}
