//! Error types for graph lookups.

use thiserror::Error;

/// Errors reported by fallible graph operations.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Duplicate edge insertion is not an error: `add_edge` reports it through
/// the bool in its return pair, and the caller must check that flag.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex-by-position lookup past the current vertex count.
    #[error("vertex position {position} out of range for graph with {len} vertices")]
    PositionOutOfRange {
        /// The requested enumeration position.
        position: usize,
        /// The vertex count at the time of the lookup.
        len: usize,
    },
}
