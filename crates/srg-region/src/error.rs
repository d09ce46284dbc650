//! Error types for srg-region

use crate::connectivity::Connectivity;
use thiserror::Error;

/// Errors that can occur during region growing
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] srg_core::Error),

    /// Image and seed volumes have different shapes
    #[error(
        "shape mismatch: image {}x{}x{}, seeds {}x{}x{}",
        .image.0, .image.1, .image.2, .seeds.0, .seeds.1, .seeds.2
    )]
    ShapeMismatch {
        image: (u32, u32, u32),
        seeds: (u32, u32, u32),
    },

    /// Connectivity scheme does not match the volume rank
    #[error("connectivity {connectivity:?} not applicable to rank-{rank} volume")]
    ConnectivityRank {
        connectivity: Connectivity,
        rank: u32,
    },

    /// Result requested before `segment()` has run
    #[error("not yet segmented: call segment() before reading the result")]
    NotSegmented,
}

/// Result type for region growing operations
pub type RegionResult<T> = Result<T, RegionError>;
