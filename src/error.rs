//! Error type for the protocol operations and the message framing layer.

use thiserror::Error;

/// Result alias for operations that can fail.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures surfaced by the KEM.
///
/// The arithmetic and reconciliation kernels themselves cannot fail; the
/// only fallible points are the entropy source and message framing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The random source did not deliver the requested bytes.
    #[error("entropy source failed to deliver random bytes")]
    Entropy,

    /// An incoming message has the wrong length.
    #[error("invalid message length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Required message size in bytes.
        expected: usize,
        /// Size of the rejected input.
        actual: usize,
    },
}
