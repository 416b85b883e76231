//! # Key Management
//!
//! Generates and validates the 256-bit symmetric keys shared between the
//! encrypting and decrypting side. Keys travel out-of-band as URL-safe base64
//! text; everything else in the tool works with the decoded raw bytes.

use crate::error::{KeyError, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

/// Raw key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// A 256-bit symmetric key.
///
/// Construction goes through [`Key::generate`] or [`Key::decode`] only, so a
/// `Key` in hand is always exactly 32 bytes. The `Debug` impl is redacted —
/// key bytes must never end up in logs or error messages.
#[derive(Clone)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Draws a fresh key from the OS secure random source.
    pub fn generate() -> Key {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Key(bytes)
    }

    /// Parses the URL-safe base64 text form of a key.
    ///
    /// Rejects text that is not valid base64 or that decodes to anything
    /// other than exactly 32 bytes.
    pub fn decode(text: &str) -> Result<Key> {
        let bytes = URL_SAFE
            .decode(text)
            .map_err(|source| KeyError::Encoding { source })?;
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|rejected: Vec<u8>| KeyError::Length {
                found: rejected.len(),
            })?;
        Ok(Key(bytes))
    }

    /// Returns the URL-safe base64 text form, suitable for handing to an operator.
    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}
