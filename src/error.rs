//! Errors reported at the checked entry points of [`MathSet`](crate::MathSet).

use thiserror::Error;

/// Result type for the checked set operations.
pub type Result<T, E = SetError> = core::result::Result<T, E>;

/// Failures a set operation can report.
///
/// Lookups and insertions on a well-formed key cannot fail; the only failure is being handed no
/// key at all, which leaves nothing to order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// An operation that orders keys was called without a key.
    #[error("invalid argument: `{operation}` requires a key")]
    InvalidArgument {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
