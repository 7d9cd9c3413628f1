//! Cipher modes and the block cipher engine.
//!
//! [`CipherMode`] owns the stable wire tags written into containers. The
//! tags are crate-defined small integers, deliberately decoupled from any
//! cipher library's internal mode identifiers, so the on-disk format stays
//! contractually stable. A future mode needs a new tag constant in
//! `config` and an arm in [`CipherMode::from_tag`]; nothing else.

pub mod engine;

use std::fmt::{Display, Formatter};

use crate::config::{TAG_CBC, TAG_ECB};

/// Block cipher mode of operation.
///
/// Determines whether the initialization vector participates in the
/// transform: CBC chains blocks through it, ECB ignores it entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherMode {
    /// Electronic codebook: each block transformed independently.
    Ecb,

    /// Cipher block chaining: each block depends on the previous one
    /// through the IV.
    Cbc,
}

impl CipherMode {
    /// All supported modes, for iteration.
    pub const ALL: &'static [Self] = &[Self::Ecb, Self::Cbc];

    /// The stable tag byte written into containers for this mode.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Ecb => TAG_ECB,
            Self::Cbc => TAG_CBC,
        }
    }

    /// Maps a container tag byte back to a mode, `None` for unrecognized
    /// tags. This is the single extension point for future modes.
    #[inline]
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            TAG_ECB => Some(Self::Ecb),
            TAG_CBC => Some(Self::Cbc),
            _ => None,
        }
    }

    /// Human-readable label for display.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
        }
    }
}

impl Display for CipherMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
