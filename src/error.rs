//! Public error type for the crate.
//!
//! Every fallible operation returns one of these kinds. `DecryptionFailed`
//! is deliberately generic: wrong key, wrong mode, and corrupted ciphertext
//! are indistinguishable from the bytes alone and are reported identically.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{CONTAINER_MIN_LEN, KEY_SIZE};

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The named input path does not exist.
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// A text key was empty.
    #[error("key is empty")]
    KeyMissing,

    /// A text key exceeded the maximum length.
    #[error("key is too long: {len} bytes, must be {KEY_SIZE} bytes max")]
    KeyTooLong { len: usize },

    /// Too few bytes were given to decode to hold a tag and an IV; the
    /// input cannot be a container produced by this crate.
    #[error("container too short: {len} bytes, need at least {CONTAINER_MIN_LEN}")]
    ContainerTooShort { len: usize },

    /// The container tag byte maps to no recognized cipher mode.
    #[error("unsupported container format: unknown tag {tag:#04x}")]
    UnsupportedFormat { tag: u8 },

    /// Padding was invalid after the block transform. Wrong key, wrong mode,
    /// and corruption all surface as this one kind.
    #[error("decryption failed: wrong key, wrong mode, or corrupted data")]
    DecryptionFailed,

    /// The operation succeeded in memory but no destination was given.
    /// Surfaced as a warning on an otherwise valid result.
    #[error("no output path provided")]
    OutputPathMissing,

    /// Unexpected filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
