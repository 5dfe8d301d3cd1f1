//! Error type for cipher construction.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by `aes-core`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key length is not 16, 24 or 32 bytes.
    #[error("invalid AES key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),
}
