//! srg-region - Seeded region growing segmentation
//!
//! This crate implements deterministic Seeded Region Growing (SRG)
//! over dense 2D and 3D scalar volumes:
//!
//! - **Grid connectivity** - 4/8-way (2D) and 6/18/26-way (3D) neighborhoods
//! - **Region statistics** - incremental per-label count and mean intensity
//! - **Frontier queue** - min-priority boundary with FIFO tie-breaking
//! - **Growth engine** - the segmentation run itself
//!
//! # Examples
//!
//! ```
//! use srg_core::{LabelVolume, ScalarVolume, UNLABELED};
//! use srg_region::{GrowOptions, grow_regions};
//!
//! // Two seeds on a dark/bright gradient
//! let image = ScalarVolume::from_data_2d(4, 1, vec![10u8, 20, 200, 210]).unwrap();
//! let seeds = LabelVolume::from_data_2d(4, 1, vec![1, 0, 0, 2]).unwrap();
//!
//! let labels = grow_regions(image, &seeds, &GrowOptions::default()).unwrap();
//! assert_eq!(labels.data(), &[1, 1, 2, 2]);
//! ```

pub mod connectivity;
pub mod error;
pub mod frontier;
pub mod grow;
pub mod stats;

// Re-export core types
pub use srg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export connectivity types
pub use connectivity::Connectivity;

// Re-export stats types
pub use stats::{RegionRegistry, RegionStats};

// Re-export frontier types
pub use frontier::{Frontier, FrontierEntry};

// Re-export the segmentation surface
pub use grow::{GrowOptions, SeededRegionGrowing, grow_regions};
