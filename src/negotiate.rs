//! Decrypt-time mode negotiation.
//!
//! A container records the mode it was encrypted with; the caller arrives
//! with whatever mode they have configured. When the two disagree but the
//! container's tag is recognized, the tag wins for that one call. Nothing
//! is persisted and no shared state is mutated; the caller learns what
//! happened from the returned value.

use crate::cipher::CipherMode;
use crate::error::{CoreError, Result};

/// Outcome of reconciling a container tag against the configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiatedMode {
    /// The tag matched the configured mode.
    Matched(CipherMode),

    /// The tag named a different recognized mode; it applies for this
    /// operation only.
    Switched {
        configured: CipherMode,
        effective: CipherMode,
    },
}

impl NegotiatedMode {
    /// Reconciles a decoded tag byte with the caller's configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedFormat`] when the tag maps to no
    /// recognized mode; no further decoding should happen in that case.
    pub fn resolve(tag: u8, configured: CipherMode) -> Result<Self> {
        match CipherMode::from_tag(tag) {
            None => Err(CoreError::UnsupportedFormat { tag }),
            Some(tagged) if tagged == configured => Ok(Self::Matched(tagged)),
            Some(tagged) => {
                tracing::warn!(configured = %configured, effective = %tagged, "container mode differs from configured mode, switching for this operation");
                Ok(Self::Switched { configured, effective: tagged })
            }
        }
    }

    /// The mode that should drive the transform.
    #[inline]
    #[must_use]
    pub const fn effective(self) -> CipherMode {
        match self {
            Self::Matched(mode) | Self::Switched { effective: mode, .. } => mode,
        }
    }

    /// Whether auto-recovery kicked in.
    #[inline]
    #[must_use]
    pub const fn switched(self) -> bool {
        matches!(self, Self::Switched { .. })
    }
}
