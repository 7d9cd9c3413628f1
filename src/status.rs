//! Pre-flight checks for paths and keys.
//!
//! These produce display-only signals for collaborators to render as
//! labeled, colored text while the user is still filling in fields. They
//! carry no cryptographic meaning and nothing here blocks an operation;
//! the real errors come from the resolver and the engine.

use std::path::Path;

use crate::config::KEY_SIZE;

/// How a [`VerificationStatus`] should read to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Renders green: nothing to fix.
    Ok,

    /// Renders orange: heads up, but the operation can proceed.
    Warning,

    /// Renders red: the user must correct this first.
    Error,
}

/// Display-only verdict about a path or key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// The field is empty.
    Missing,

    /// The named input does not exist.
    NotFound,

    /// The path does not exist and will be created.
    WillCreate,

    /// The path exists and will be overwritten.
    WillOverwrite,

    /// The path or key exists and is usable as-is.
    Exists,

    /// The path exists but is not a usable file.
    Invalid,

    /// The key exceeds the maximum length.
    TooLong,
}

impl VerificationStatus {
    /// Label for collaborators to render next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Missing => "field is empty",
            Self::NotFound => "file does not exist",
            Self::WillCreate => "does not exist, will be created",
            Self::WillOverwrite => "exists, will be overwritten",
            Self::Exists => "exists",
            Self::Invalid => "not a usable file",
            Self::TooLong => "key is too long, must be 32 bytes max",
        }
    }

    /// Suggested rendering severity for the label.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Exists => Severity::Ok,
            Self::WillCreate | Self::WillOverwrite => Severity::Warning,
            Self::Missing | Self::NotFound | Self::Invalid | Self::TooLong => Severity::Error,
        }
    }
}

/// Checks the input-file field: must name an existing regular file.
#[must_use]
pub fn check_input_path(path: &str) -> VerificationStatus {
    if path.is_empty() {
        return VerificationStatus::Missing;
    }

    let path = Path::new(path);
    if !path.exists() {
        VerificationStatus::NotFound
    } else if path.is_file() {
        VerificationStatus::Exists
    } else {
        VerificationStatus::Invalid
    }
}

/// Checks the output-file field: absence is fine, presence means the file
/// gets overwritten.
#[must_use]
pub fn check_output_path(path: &str) -> VerificationStatus {
    if path.is_empty() {
        VerificationStatus::Missing
    } else if Path::new(path).exists() {
        VerificationStatus::WillOverwrite
    } else {
        VerificationStatus::WillCreate
    }
}

/// Checks the key-file field: an absent file is created with a fresh key
/// at resolve time, so absence is a warning, not an error.
#[must_use]
pub fn check_key_file(path: &str) -> VerificationStatus {
    if path.is_empty() {
        return VerificationStatus::Missing;
    }

    let path = Path::new(path);
    if !path.exists() {
        VerificationStatus::WillCreate
    } else if path.is_file() {
        VerificationStatus::Exists
    } else {
        VerificationStatus::Invalid
    }
}

/// Checks the text-key field against the resolver's length rules.
#[must_use]
pub fn check_key_text(text: &str) -> VerificationStatus {
    if text.is_empty() {
        VerificationStatus::Missing
    } else if text.len() > KEY_SIZE {
        VerificationStatus::TooLong
    } else {
        VerificationStatus::Exists
    }
}
