//! Error types for vector operations.

use thiserror::Error;

/// Errors returned by indexed operations on a [`Vector`](crate::Vector).
///
/// Every variant is a local, recoverable, returned-to-caller outcome; no
/// operation panics or aborts for any caller input. Note that a sparse hole
/// is *not* an error: reading an unwritten index below the length yields
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The index needs more than `D` base-`B` digits and cannot be encoded
    /// as a path at all.
    #[error("index {index} exceeds the maximum representable index {max}")]
    Unrepresentable { index: usize, max: usize },

    /// The index is past the end of the vector.
    #[error("index {index} is out of range for a vector of length {length}")]
    OutOfRange { index: usize, length: usize },
}
