//! Container encoding and decoding.
//!
//! On-disk layout: `[1-byte mode tag][16-byte IV][ciphertext]`. The codec
//! performs no cryptographic validation; a container full of garbage
//! ciphertext parses fine and only fails at decrypt time. Tag recognition
//! is the negotiator's job, so decoding keeps the raw tag byte around.

use crate::cipher::CipherMode;
use crate::config::{CONTAINER_MIN_LEN, IV_SIZE};
use crate::error::{CoreError, Result};

/// A parsed or about-to-be-written container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// The raw tag byte. For freshly built containers this is the mode's
    /// stable tag; for decoded ones it may be anything found on disk.
    pub tag: u8,

    /// Always present, even for ECB containers where it is inert.
    pub iv: [u8; IV_SIZE],

    /// Block-aligned ciphertext. May be empty after decoding a bare header.
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Builds a container for freshly encrypted data.
    #[must_use]
    pub fn new(mode: CipherMode, iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { tag: mode.tag(), iv, ciphertext }
    }

    /// Serializes to the persisted byte layout.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + IV_SIZE + self.ciphertext.len());
        out.push(self.tag);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parses the persisted byte layout.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ContainerTooShort`] when `bytes` cannot hold a
    /// tag and an IV. Anything longer splits cleanly; garbage is caught
    /// later by decryption, not here.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < CONTAINER_MIN_LEN {
            return Err(CoreError::ContainerTooShort { len: bytes.len() });
        }

        let tag = bytes[0];
        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&bytes[1..=IV_SIZE]);

        Ok(Self { tag, iv, ciphertext: bytes[CONTAINER_MIN_LEN..].to_vec() })
    }
}
