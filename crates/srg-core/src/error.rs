//! Error types for srg-core
//!
//! Provides a unified error type for all operations on the core
//! containers. Each variant captures enough context for diagnostics
//! without exposing internal implementation details.

use thiserror::Error;

/// srg-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid volume dimensions
    #[error("invalid volume dimensions: {width}x{height}x{depth}")]
    InvalidDimension { width: u32, height: u32, depth: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Data length does not match the declared shape
    #[error("data length mismatch: got {got}, shape requires {expected}")]
    DataLengthMismatch { got: usize, expected: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for srg-core operations
pub type Result<T> = std::result::Result<T, Error>;
