//! Key resolution and generation.
//!
//! A [`KeySource`] names where key bytes come from: a file on disk or text
//! typed by the user. Resolution yields the raw bytes plus whether a key
//! file had to be created; [`KeyMaterial`] is the engine-ready 32-byte form.
//!
//! Text keys shorter than 32 bytes are PKCS7-padded up to 32 and the pad
//! bytes are used as key bytes verbatim. That matches the format this crate
//! round-trips with and is kept for compatibility, quirk included.

use std::fs;
use std::path::PathBuf;

use block_padding::{Pkcs7, RawPadding};
use rand::{Rng, RngCore};
use secrecy::{ExposeSecret, SecretBox};

use crate::config::{KEY_CHAR_EXCLUDED, KEY_CHAR_MAX, KEY_CHAR_MIN, KEY_SIZE};
use crate::error::{CoreError, Result};

/// Where key bytes come from.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// Raw bytes read from a file. An absent path is not an error: a fresh
    /// random key is generated and persisted there.
    File(PathBuf),

    /// Literal text typed by the user. Must be 1..=32 bytes.
    Text(String),
}

/// Engine-ready key material, exactly [`KEY_SIZE`] bytes.
pub struct KeyMaterial {
    inner: SecretBox<[u8; KEY_SIZE]>,
}

impl KeyMaterial {
    /// Coerces raw key bytes of any length to exactly [`KEY_SIZE`] bytes:
    /// longer input is truncated, shorter input is PKCS7-padded.
    #[must_use]
    pub fn coerce(raw: &[u8]) -> Self {
        let mut key = [0u8; KEY_SIZE];
        if raw.len() >= KEY_SIZE {
            key.copy_from_slice(&raw[..KEY_SIZE]);
        } else {
            key[..raw.len()].copy_from_slice(raw);
            Pkcs7::raw_pad(&mut key, raw.len());
        }

        Self { inner: SecretBox::new(Box::new(key)) }
    }

    pub(crate) fn expose_secret(&self) -> &[u8; KEY_SIZE] {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyMaterial([... {KEY_SIZE} bytes ...])")
    }
}

/// Raw bytes produced by resolving a [`KeySource`].
///
/// File-backed bytes are kept verbatim at whatever length the file has;
/// coercion to [`KeyMaterial`] happens at use time.
pub struct ResolvedKey {
    raw: SecretBox<Vec<u8>>,

    /// True when the key file was absent and a fresh key was generated and
    /// persisted. Informational, not a failure.
    pub generated: bool,
}

impl ResolvedKey {
    /// The engine-ready 32-byte form of these bytes.
    #[must_use]
    pub fn material(&self) -> KeyMaterial {
        KeyMaterial::coerce(self.raw.expose_secret())
    }
}

impl std::fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResolvedKey([... {} bytes ...], generated: {})", self.raw.expose_secret().len(), self.generated)
    }
}

/// Resolves a key source into raw key bytes.
///
/// File-backed sources read the file verbatim with no length check; if the
/// path does not exist, a 32-byte random key is generated and written there
/// first. Note the check-then-create is not atomic against other processes
/// touching the same path.
///
/// Text sources fail with [`CoreError::KeyMissing`] when empty and
/// [`CoreError::KeyTooLong`] past 32 bytes, and are padded to exactly
/// 32 bytes otherwise.
pub fn resolve(source: &KeySource) -> Result<ResolvedKey> {
    match source {
        KeySource::File(path) => {
            if path.exists() {
                let raw = fs::read(path)?;
                Ok(ResolvedKey { raw: SecretBox::new(Box::new(raw)), generated: false })
            } else {
                let mut key = [0u8; KEY_SIZE];
                rand::rng().fill_bytes(&mut key);
                fs::write(path, key)?;
                tracing::debug!(path = %path.display(), "key file absent, generated and persisted a new key");
                Ok(ResolvedKey { raw: SecretBox::new(Box::new(key.to_vec())), generated: true })
            }
        }
        KeySource::Text(text) => {
            let bytes = text.as_bytes();
            if bytes.is_empty() {
                return Err(CoreError::KeyMissing);
            }
            if bytes.len() > KEY_SIZE {
                return Err(CoreError::KeyTooLong { len: bytes.len() });
            }

            let padded = KeyMaterial::coerce(bytes);
            Ok(ResolvedKey { raw: SecretBox::new(Box::new(padded.expose_secret().to_vec())), generated: false })
        }
    }
}

/// Generates a 32-character key of printable ASCII, drawn uniformly from
/// `!`..=`~` with `"`, `'`, `/` and `\` resampled away so the key is safe
/// to embed in quoted strings and paths.
#[must_use]
pub fn generate_readable_key() -> String {
    let mut rng = rand::rng();
    let mut key = String::with_capacity(KEY_SIZE);
    while key.len() < KEY_SIZE {
        let byte = rng.random_range(KEY_CHAR_MIN..=KEY_CHAR_MAX);
        if KEY_CHAR_EXCLUDED.contains(&byte) {
            continue;
        }
        key.push(char::from(byte));
    }

    key
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_text_key_pads_to_key_size() {
        let resolved = resolve(&KeySource::Text("key".into())).unwrap();
        let material = resolved.material();
        let bytes = material.expose_secret();

        assert_eq!(&bytes[..3], b"key");
        // 29 bytes of PKCS7 pad, each holding the pad length.
        assert!(bytes[3..].iter().all(|&b| b == 29));
    }

    #[test]
    fn test_text_key_deterministic() {
        let a = resolve(&KeySource::Text("hunter2".into())).unwrap();
        let b = resolve(&KeySource::Text("hunter2".into())).unwrap();
        assert_eq!(a.material().expose_secret(), b.material().expose_secret());
    }

    #[test]
    fn test_text_key_exact_length_unchanged() {
        let text = "01234567890123456789012345678901";
        let resolved = resolve(&KeySource::Text(text.into())).unwrap();
        assert_eq!(resolved.material().expose_secret(), text.as_bytes());
    }

    #[test]
    fn test_text_key_empty() {
        assert!(matches!(resolve(&KeySource::Text(String::new())), Err(CoreError::KeyMissing)));
    }

    #[test]
    fn test_text_key_too_long() {
        let result = resolve(&KeySource::Text("x".repeat(33)));
        assert!(matches!(result, Err(CoreError::KeyTooLong { len: 33 })));
    }

    #[test]
    fn test_text_key_multibyte_length_counts_bytes() {
        // 17 chars of 2 bytes each is 34 encoded bytes.
        let result = resolve(&KeySource::Text("é".repeat(17)));
        assert!(matches!(result, Err(CoreError::KeyTooLong { len: 34 })));
    }

    #[test]
    fn test_file_key_created_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secret.key");

        let resolved = resolve(&KeySource::File(path.clone())).unwrap();
        assert!(resolved.generated);
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap().len(), KEY_SIZE);

        // Second resolution reads the persisted bytes back.
        let again = resolve(&KeySource::File(path)).unwrap();
        assert!(!again.generated);
        assert_eq!(resolved.material().expose_secret(), again.material().expose_secret());
    }

    #[test]
    fn test_file_key_read_verbatim_and_truncated_at_use() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("long.key");
        let long: Vec<u8> = (0u8..48).collect();
        fs::write(&path, &long).unwrap();

        let resolved = resolve(&KeySource::File(path)).unwrap();
        assert!(!resolved.generated);
        assert_eq!(resolved.material().expose_secret(), &long[..KEY_SIZE]);
    }

    #[test]
    fn test_file_key_short_is_padded_at_use() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.key");
        fs::write(&path, b"abcd").unwrap();

        let resolved = resolve(&KeySource::File(path)).unwrap();
        let material = resolved.material();
        let bytes = material.expose_secret();
        assert_eq!(&bytes[..4], b"abcd");
        assert!(bytes[4..].iter().all(|&b| b == 28));
    }

    #[test]
    fn test_generate_readable_key_constraints() {
        for _ in 0..50 {
            let key = generate_readable_key();
            assert_eq!(key.len(), KEY_SIZE);
            for byte in key.bytes() {
                assert!((KEY_CHAR_MIN..=KEY_CHAR_MAX).contains(&byte));
                assert!(!KEY_CHAR_EXCLUDED.contains(&byte));
            }
        }
    }
}
