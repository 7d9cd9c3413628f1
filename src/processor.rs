//! High-level encryption and decryption operations.
//!
//! Buffer-level entry points glue the engine, codec, and negotiator
//! together; file-level entry points add the filesystem plumbing around
//! them. Both sides of every operation get a bounded hex preview for
//! display.

use std::fs;
use std::path::Path;

use crate::cipher::{CipherMode, engine};
use crate::container::Container;
use crate::error::{CoreError, Result};
use crate::key::{self, KeyMaterial, KeySource};
use crate::negotiate::NegotiatedMode;
use crate::preview::preview;

/// Result of a buffer-level decrypt: the plaintext plus how the mode was
/// settled.
#[derive(Debug)]
pub struct Decrypted {
    pub plaintext: Vec<u8>,
    pub mode: NegotiatedMode,
}

/// Result of a file-level operation.
///
/// The produced bytes are always populated, even when no output path was
/// given; in that case `warning` holds [`CoreError::OutputPathMissing`]
/// and nothing was written to disk.
#[derive(Debug)]
pub struct Outcome {
    /// Encoded container (encrypt) or recovered plaintext (decrypt).
    pub bytes: Vec<u8>,

    /// The mode that actually drove the transform.
    pub mode: CipherMode,

    /// True when decrypt-time negotiation overrode the configured mode.
    pub mode_switched: bool,

    /// True when a file-backed key source generated and persisted a fresh
    /// key as a side effect.
    pub key_file_created: bool,

    /// Hex preview of the operation's input bytes.
    pub input_preview: String,

    /// Hex preview of the operation's output bytes.
    pub output_preview: String,

    /// Non-fatal condition worth surfacing to the user.
    pub warning: Option<CoreError>,
}

/// Encrypts a plaintext buffer into an encoded container.
#[must_use]
pub fn encrypt_buffer(plaintext: &[u8], key: &KeyMaterial, mode: CipherMode) -> Vec<u8> {
    let (iv, ciphertext) = engine::encrypt(plaintext, key, mode);
    Container::new(mode, iv, ciphertext).encode()
}

/// Decrypts an encoded container, reconciling its tag against the
/// configured mode first.
///
/// # Errors
///
/// [`CoreError::ContainerTooShort`] and [`CoreError::UnsupportedFormat`]
/// for structurally bad input, [`CoreError::DecryptionFailed`] when the
/// transform's padding does not check out.
pub fn decrypt_buffer(bytes: &[u8], key: &KeyMaterial, configured: CipherMode) -> Result<Decrypted> {
    let container = Container::decode(bytes)?;
    let mode = NegotiatedMode::resolve(container.tag, configured)?;
    let plaintext = engine::decrypt(&container.iv, &container.ciphertext, key, mode.effective())?;

    Ok(Decrypted { plaintext, mode })
}

/// Encrypts a file into a container, resolving the key source along the
/// way.
///
/// With `output` set, the container is written there; without it the
/// operation still succeeds in memory and the outcome carries an
/// [`CoreError::OutputPathMissing`] warning.
///
/// # Errors
///
/// [`CoreError::InputNotFound`] when `input` does not exist, plus anything
/// key resolution or the filesystem can return.
pub fn encrypt_file(input: &Path, output: Option<&Path>, source: &KeySource, mode: CipherMode) -> Result<Outcome> {
    let plaintext = read_input(input)?;
    let resolved = key::resolve(source)?;

    let (iv, ciphertext) = engine::encrypt(&plaintext, &resolved.material(), mode);
    let input_preview = preview(&plaintext);
    let output_preview = preview(&ciphertext);
    let bytes = Container::new(mode, iv, ciphertext).encode();

    let warning = write_output(output, &bytes)?;

    Ok(Outcome {
        bytes,
        mode,
        mode_switched: false,
        key_file_created: resolved.generated,
        input_preview,
        output_preview,
        warning,
    })
}

/// Decrypts a container file, auto-recovering the mode from its tag when
/// the configured one disagrees.
///
/// # Errors
///
/// [`CoreError::InputNotFound`] for a missing container file, the codec
/// and negotiator errors for structurally bad containers, and
/// [`CoreError::DecryptionFailed`] for everything the bytes alone cannot
/// explain.
pub fn decrypt_file(input: &Path, output: Option<&Path>, source: &KeySource, configured: CipherMode) -> Result<Outcome> {
    let encoded = read_input(input)?;
    let resolved = key::resolve(source)?;

    let container = Container::decode(&encoded)?;
    let negotiated = NegotiatedMode::resolve(container.tag, configured)?;
    let plaintext = engine::decrypt(&container.iv, &container.ciphertext, &resolved.material(), negotiated.effective())?;

    let input_preview = preview(&container.ciphertext);
    let output_preview = preview(&plaintext);

    let warning = write_output(output, &plaintext)?;

    Ok(Outcome {
        bytes: plaintext,
        mode: negotiated.effective(),
        mode_switched: negotiated.switched(),
        key_file_created: resolved.generated,
        input_preview,
        output_preview,
        warning,
    })
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if !input.exists() {
        return Err(CoreError::InputNotFound { path: input.to_path_buf() });
    }

    Ok(fs::read(input)?)
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<Option<CoreError>> {
    match output {
        Some(path) => {
            fs::write(path, bytes)?;
            Ok(None)
        }
        None => {
            tracing::warn!("operation succeeded but no output path was provided, result kept in memory only");
            Ok(Some(CoreError::OutputPathMissing))
        }
    }
}
