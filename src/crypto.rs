//! # Cryptographic Operations
//!
//! Provides authenticated encryption of whole-file payloads using AES-256-CBC
//! with an HMAC-SHA256 tag in the encrypt-then-MAC construction. Each call
//! draws a unique random 128-bit IV, so encrypting the same plaintext twice
//! never reuses an IV under the same key.
//!
//! ## Wire format
//!
//! ```text
//! ┌───────────┬──────────────────────────────┬─────────────────────┐
//! │  IV (16B)  │  AES-256-CBC ciphertext      │  HMAC-SHA256 (32B)  │
//! └───────────┴──────────────────────────────┴─────────────────────┘
//! ```
//!
//! The tag covers IV ‖ ciphertext, keyed by the same 256-bit key as the
//! cipher. Decryption verifies the tag before touching the ciphertext, so a
//! tampered blob (or the wrong key) is rejected without exposing any partial
//! plaintext.

use crate::blob::{self, IV_LEN, TAG_LEN};
use crate::error::{CryptoError, Result};
use crate::key::Key;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Encrypts plaintext into a self-contained blob using a fresh random IV.
///
/// The plaintext is PKCS#7-padded to the AES block size (an already-aligned
/// plaintext gains a full padding block, so even empty input produces one
/// ciphertext block), encrypted, then tagged.
pub fn encrypt(plaintext: &[u8], key: &Key) -> Vec<u8> {
    encrypt_with_rng(plaintext, key, &mut OsRng)
}

/// Same transform as [`encrypt`] with an explicit randomness source.
///
/// Production callers should use [`encrypt`]; this entry point exists so
/// tests can pin the IV with a deterministic generator. The `CryptoRng`
/// bound keeps non-cryptographic generators out of release code paths.
pub fn encrypt_with_rng<R>(plaintext: &[u8], key: &Key, rng: &mut R) -> Vec<u8>
where
    R: RngCore + CryptoRng,
{
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let tag = compute_tag(key, &iv, &ciphertext);
    blob::encode(&iv, &ciphertext, &tag)
}

/// Decrypts a blob produced by [`encrypt`].
///
/// Verification order is fixed: layout checks, then tag verification in
/// constant time, then decryption and padding removal. A tag mismatch fails
/// closed — no decryption is attempted on unauthenticated bytes. A padding
/// error after a valid tag cannot be caused by tampering and is reported
/// separately.
pub fn decrypt(blob_bytes: &[u8], key: &Key) -> Result<Vec<u8>> {
    let parts = blob::decode(blob_bytes)?;

    let mut mac = new_mac(key);
    mac.update(&parts.iv);
    mac.update(parts.ciphertext);
    mac.verify_slice(&parts.tag)
        .map_err(|_| CryptoError::Authentication)?;

    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), (&parts.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(parts.ciphertext)
        .map_err(|_| CryptoError::Padding)?;

    Ok(plaintext)
}

fn compute_tag(key: &Key, iv: &[u8; IV_LEN], ciphertext: &[u8]) -> [u8; TAG_LEN] {
    let mut mac = new_mac(key);
    mac.update(iv);
    mac.update(ciphertext);
    mac.finalize().into_bytes().into()
}

fn new_mac(key: &Key) -> HmacSha256 {
    // Infallible: HMAC accepts keys of any length
    HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts a 32-byte key")
}
