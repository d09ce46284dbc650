//! SRG - Seeded region growing segmentation for Rust
//!
//! Deterministic Seeded Region Growing over dense 2D and 3D scalar
//! volumes, aimed at scientific image-analysis pipelines such as
//! porous-media tomography segmentation.
//!
//! # Overview
//!
//! Supply an intensity volume and a sparse seed labeling of the same
//! shape; every cell reachable from a seed is assigned to the adjacent
//! region it most resembles, growing along the path of least intensity
//! dissimilarity. Identical inputs always produce bit-identical
//! results.
//!
//! # Example
//!
//! ```
//! use srg::{LabelVolume, ScalarVolume};
//! use srg::region::SeededRegionGrowing;
//!
//! let image = ScalarVolume::from_data_2d(3, 1, vec![0u8, 5, 10]).unwrap();
//! let seeds = LabelVolume::from_data_2d(3, 1, vec![1, 0, 2]).unwrap();
//!
//! let mut srg = SeededRegionGrowing::new(image, &seeds).unwrap();
//! srg.segment();
//! assert_eq!(srg.result().unwrap().data(), &[1, 1, 2]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use srg_core::*;

// Re-export the engine crate as a module
pub use srg_region as region;
