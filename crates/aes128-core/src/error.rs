//! Error type for the raw-mode boundary.

use thiserror::Error;

/// Errors reported by this crate.
///
/// Buffer length and aliasing mistakes cannot be expressed through the typed
/// API, so the only runtime failure is an unrecognized mode value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested mode is neither encryption nor decryption.
    #[error("invalid cipher mode: {raw}")]
    InvalidMode {
        /// The rejected value, as supplied by the caller.
        raw: String,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
