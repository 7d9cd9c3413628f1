//! Bounded hex rendering of byte buffers.
//!
//! Purely presentational: collaborators display these next to each other
//! for the input and output of an operation. No cryptographic meaning.

use crate::config::PREVIEW_MAX_HEX;

/// Renders `buffer` as lowercase hex, capped at [`PREVIEW_MAX_HEX`]
/// characters. Buffers up to 250 bytes render in full.
#[must_use]
pub fn preview(buffer: &[u8]) -> String {
    let mut rendered = hex::encode(buffer);
    rendered.truncate(PREVIEW_MAX_HEX);
    rendered
}
