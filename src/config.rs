//! Format and limit constants.
//!
//! Everything that defines the on-disk container layout or constrains key
//! material lives here. The tag values are part of the persisted format and
//! must never change once containers exist in the wild.

/// AES block size in bytes.
///
/// Plaintext is PKCS7-padded to a multiple of this before encryption, so
/// ciphertext length is always a multiple of it as well.
pub const BLOCK_SIZE: usize = 16;

/// Size of engine-ready key material in bytes (AES-256).
///
/// Key sources may hold fewer or more bytes at rest; they are coerced to
/// exactly this length before reaching the cipher.
pub const KEY_SIZE: usize = 32;

/// Size of the initialization vector in bytes.
///
/// Every container carries an IV, including ECB containers where it plays
/// no cryptographic role. This keeps the header a fixed size.
pub const IV_SIZE: usize = 16;

/// Minimum length of a parseable container: one tag byte plus an IV.
///
/// A container of this exact length holds a zero-length ciphertext, which
/// parses but cannot decrypt.
pub const CONTAINER_MIN_LEN: usize = 1 + IV_SIZE;

// === Mode tags ===
// Stable wire-format identifiers, deliberately decoupled from anything a
// cipher library defines internally. New modes get the next free value.

/// Container tag for AES-256-ECB.
pub const TAG_ECB: u8 = 0x01;

/// Container tag for AES-256-CBC.
pub const TAG_CBC: u8 = 0x02;

/// Maximum number of hex characters returned by a preview.
///
/// Buffers longer than 250 bytes render as their first 500 hex characters.
pub const PREVIEW_MAX_HEX: usize = 500;

// === Readable key generation ===

/// Lowest byte value drawn for a generated readable key (`!`).
pub const KEY_CHAR_MIN: u8 = 33;

/// Highest byte value drawn for a generated readable key (`~`).
pub const KEY_CHAR_MAX: u8 = 126;

/// Byte values excluded from generated readable keys: `"`, `'`, `/`, `\`.
///
/// Keeps generated keys safe to paste into quoted strings and paths.
pub const KEY_CHAR_EXCLUDED: [u8; 4] = [34, 39, 47, 92];
