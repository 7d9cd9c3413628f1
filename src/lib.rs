//! Bytelock - self-describing symmetric-encryption containers.
//!
//! Turns AES-256 plus a user-supplied key into a versioned, round-trippable
//! byte format and back again:
//! - AES-256 in ECB or CBC mode with PKCS7 padding
//! - Mode-tagged framing: `[1-byte tag][16-byte IV][ciphertext]`
//! - Decrypt-time mode auto-recovery from the container tag
//! - Key material from a file (created on demand) or typed text
//! - Bounded hex previews for display
//!
//! # Limitations
//!
//! Containers are confidentiality-only. There is no MAC or integrity check;
//! tampering is detected only when it happens to break the PKCS7 padding.
//! The key-file check-then-create sequence is not atomic with respect to
//! other processes touching the same path.

pub mod cipher;
pub mod config;
pub mod container;
pub mod error;
pub mod key;
pub mod negotiate;
pub mod preview;
pub mod processor;
pub mod status;

pub use cipher::CipherMode;
pub use container::Container;
pub use error::{CoreError, Result};
pub use key::{KeyMaterial, KeySource, ResolvedKey, generate_readable_key, resolve};
pub use negotiate::NegotiatedMode;
pub use preview::preview;
pub use processor::{Decrypted, Outcome, decrypt_buffer, decrypt_file, encrypt_buffer, encrypt_file};
pub use status::{Severity, VerificationStatus};
