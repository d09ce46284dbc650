//! SRG Core - Basic data structures for seeded region growing
//!
//! This crate provides the fundamental containers used by the
//! segmentation engine:
//!
//! - [`ScalarVolume`] - Dense 2D/3D scalar array (intensity image)
//! - [`LabelVolume`] - Dense label array, `0` = unlabeled
//! - [`VolumeShape`] - Per-axis extents with C-order addressing
//! - [`Intensity`] - Sample types accepted as voxel intensities

pub mod error;
pub mod volume;

pub use error::{Error, Result};
pub use volume::{Intensity, LabelVolume, ScalarVolume, UNLABELED, VolumeShape};
