//! # File Adapter
//!
//! Thin boundary between the cipher and the filesystem: read a whole file,
//! transform it, write a whole file. Handles are scoped and released on every
//! exit path. Whole-file-in-memory is a deliberate limitation — the tool
//! targets modest data files, not unbounded streams.

use crate::crypto;
use crate::error::Result;
use crate::key::Key;
use std::fs;
use std::path::Path;

/// Encrypts `input` into a blob written at `output`.
pub fn encrypt_file(input: &Path, output: &Path, key: &Key) -> Result<()> {
    let plaintext = fs::read(input)?;
    let blob = crypto::encrypt(&plaintext, key);
    fs::write(output, blob)?;
    Ok(())
}

/// Decrypts the blob at `input`, writing the recovered plaintext to `output`.
///
/// Authentication and unpadding complete before the output file is created,
/// so a failed decryption never leaves a partial plaintext on disk.
pub fn decrypt_file(input: &Path, output: &Path, key: &Key) -> Result<()> {
    let blob = fs::read(input)?;
    let plaintext = crypto::decrypt(&blob, key)?;
    fs::write(output, plaintext)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SealError;

    #[test]
    fn file_roundtrip() {
        let dir = std::env::temp_dir().join("sealfile-test-roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let plain = dir.join("data.txt");
        let sealed = dir.join("data.txt.enc");
        let restored = dir.join("data.txt.dec");

        std::fs::write(&plain, b"file adapter roundtrip contents").unwrap();

        let key = Key::generate();
        encrypt_file(&plain, &sealed, &key).unwrap();
        assert_ne!(
            std::fs::read(&sealed).unwrap(),
            std::fs::read(&plain).unwrap()
        );

        decrypt_file(&sealed, &restored, &key).unwrap();
        assert_eq!(
            std::fs::read(&restored).unwrap(),
            b"file adapter roundtrip contents"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = std::env::temp_dir().join("sealfile-test-missing");
        std::fs::create_dir_all(&dir).unwrap();

        let result = encrypt_file(
            &dir.join("does-not-exist"),
            &dir.join("out.enc"),
            &Key::generate(),
        );
        assert!(matches!(result, Err(SealError::Io(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_decrypt_writes_nothing() {
        let dir = std::env::temp_dir().join("sealfile-test-failclosed");
        std::fs::create_dir_all(&dir).unwrap();
        let sealed = dir.join("tampered.enc");
        let out = dir.join("tampered.dec");

        let key = Key::generate();
        let mut blob = crypto::encrypt(b"payload", &key);
        blob[20] ^= 0xFF;
        std::fs::write(&sealed, &blob).unwrap();

        assert!(decrypt_file(&sealed, &out, &key).is_err());
        assert!(!out.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
