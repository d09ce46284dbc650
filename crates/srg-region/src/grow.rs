//! Seeded region growing
//!
//! Given a scalar image and a sparse seed labeling, every cell
//! reachable from a seed is assigned to the adjacent region it most
//! resembles. Regions grow outward through a global min-priority
//! frontier: at each step the pending proposal with the lowest
//! intensity dissimilarity anywhere in the volume is committed, region
//! statistics are updated, and the newly committed cell's unlabeled
//! neighbors are proposed against the updated mean.
//!
//! The run is fully deterministic: seed registration scans the volume
//! in C order, and score ties in the frontier resolve by insertion
//! order. Repeated runs on identical input produce bit-identical
//! label arrays.

use crate::connectivity::Connectivity;
use crate::error::{RegionError, RegionResult};
use crate::frontier::Frontier;
use crate::stats::RegionRegistry;
use srg_core::{Intensity, LabelVolume, ScalarVolume, UNLABELED};

/// Options for seeded region growing
#[derive(Debug, Clone, Default)]
pub struct GrowOptions {
    /// Connectivity scheme; `None` selects the minimal von Neumann
    /// neighborhood for the volume's rank (4-way in 2D, 6-way in 3D).
    pub connectivity: Option<Connectivity>,
}

impl GrowOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connectivity scheme.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }
}

/// Seeded region growing segmentation
///
/// Wraps one segmentation run: construct from an intensity volume and
/// a seed labeling of the same shape, call [`segment`](Self::segment),
/// then read the finished label array.
///
/// # Examples
///
/// ```
/// use srg_core::{LabelVolume, ScalarVolume};
/// use srg_region::SeededRegionGrowing;
///
/// let image = ScalarVolume::from_data_2d(3, 1, vec![0u8, 5, 10]).unwrap();
/// let seeds = LabelVolume::from_data_2d(3, 1, vec![1, 0, 2]).unwrap();
///
/// let mut srg = SeededRegionGrowing::new(image, &seeds).unwrap();
/// srg.segment();
/// assert_eq!(srg.result().unwrap().data(), &[1, 1, 2]);
/// ```
#[derive(Debug)]
pub struct SeededRegionGrowing<T> {
    image: ScalarVolume<T>,
    labels: LabelVolume,
    connectivity: Connectivity,
    segmented: bool,
}

impl<T: Intensity> SeededRegionGrowing<T> {
    /// Create a segmentation run with the default connectivity for the
    /// image's rank.
    ///
    /// The seed array is copied into the working label buffer; the
    /// caller's seeds are never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::ShapeMismatch`] if the image and seed
    /// shapes differ.
    pub fn new(image: ScalarVolume<T>, seeds: &LabelVolume) -> RegionResult<Self> {
        Self::with_options(image, seeds, &GrowOptions::default())
    }

    /// Create a segmentation run with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::ShapeMismatch`] if the image and seed
    /// shapes differ, or [`RegionError::ConnectivityRank`] if the
    /// requested connectivity does not match the volume's rank.
    pub fn with_options(
        image: ScalarVolume<T>,
        seeds: &LabelVolume,
        options: &GrowOptions,
    ) -> RegionResult<Self> {
        let shape = image.shape();
        if shape != seeds.shape() {
            let s = seeds.shape();
            return Err(RegionError::ShapeMismatch {
                image: (shape.width(), shape.height(), shape.depth()),
                seeds: (s.width(), s.height(), s.depth()),
            });
        }

        let connectivity = options
            .connectivity
            .unwrap_or_else(|| Connectivity::default_for(shape.rank()));
        if connectivity.rank() != shape.rank() {
            return Err(RegionError::ConnectivityRank {
                connectivity,
                rank: shape.rank(),
            });
        }

        Ok(SeededRegionGrowing {
            image,
            labels: seeds.clone(),
            connectivity,
            segmented: false,
        })
    }

    /// Connectivity scheme used for this run.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Whether `segment()` has already run to completion.
    pub fn is_segmented(&self) -> bool {
        self.segmented
    }

    /// Run the region growing to completion.
    ///
    /// Synchronous and single-threaded; each commit depends on the
    /// just-updated region mean, so there is no partial or incremental
    /// mode. Calling `segment()` a second time is a no-op: the first
    /// run already committed every reachable cell.
    pub fn segment(&mut self) {
        if self.segmented {
            return;
        }

        let mut registry = RegionRegistry::new();
        let mut frontier = Frontier::new();

        self.register_seeds(&mut registry);
        self.push_seed_neighbors(&registry, &mut frontier);
        self.grow(&mut registry, &mut frontier);

        self.segmented = true;
    }

    /// Borrow the finished label array.
    ///
    /// Every cell holds either a seed label or [`UNLABELED`] for cells
    /// unreachable from any seed (expected for disconnected inputs,
    /// not an error).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NotSegmented`] before the first
    /// `segment()` call completes.
    pub fn result(&self) -> RegionResult<&LabelVolume> {
        if !self.segmented {
            return Err(RegionError::NotSegmented);
        }
        Ok(&self.labels)
    }

    /// Consume the run and return the finished label array.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NotSegmented`] before the first
    /// `segment()` call completes.
    pub fn into_result(self) -> RegionResult<LabelVolume> {
        if !self.segmented {
            return Err(RegionError::NotSegmented);
        }
        Ok(self.labels)
    }

    // Register every seed cell with the registry. The z/y/x scan order
    // fixes the registration order and thereby the frontier sequence
    // numbers assigned in the second pass.
    fn register_seeds(&self, registry: &mut RegionRegistry) {
        let shape = self.image.shape();
        for z in 0..shape.depth() {
            for y in 0..shape.height() {
                for x in 0..shape.width() {
                    let label = self.labels.get_voxel_unchecked(x, y, z);
                    if label != UNLABELED {
                        let value = self.image.get_voxel_unchecked(x, y, z).to_f64();
                        registry.register_seed(label, value);
                    }
                }
            }
        }
    }

    // Propose every unlabeled neighbor of every seed cell, scored
    // against the seed-only region means.
    fn push_seed_neighbors(&self, registry: &RegionRegistry, frontier: &mut Frontier) {
        let shape = self.image.shape();
        for z in 0..shape.depth() {
            for y in 0..shape.height() {
                for x in 0..shape.width() {
                    let label = self.labels.get_voxel_unchecked(x, y, z);
                    if label == UNLABELED {
                        continue;
                    }

                    // Every seed label was registered in the first pass.
                    let Some(mean) = registry.mean(label) else {
                        continue;
                    };

                    for (nx, ny, nz) in self.connectivity.neighbors(shape, x, y, z) {
                        if self.labels.get_voxel_unchecked(nx, ny, nz) == UNLABELED {
                            let value = self.image.get_voxel_unchecked(nx, ny, nz).to_f64();
                            frontier.push((nx, ny, nz), label, (value - mean).abs());
                        }
                    }
                }
            }
        }
    }

    // Main loop: commit the globally best proposal, update the region
    // mean, re-propose the committed cell's unlabeled neighbors.
    fn grow(&mut self, registry: &mut RegionRegistry, frontier: &mut Frontier) {
        let shape = self.image.shape();
        while let Some(entry) = frontier.pop() {
            let (x, y, z) = entry.cell;

            // Lazy deletion: a prior pop already claimed this cell.
            if self.labels.get_voxel_unchecked(x, y, z) != UNLABELED {
                continue;
            }

            self.labels.set_voxel_unchecked(x, y, z, entry.label);
            registry.commit(entry.label, self.image.get_voxel_unchecked(x, y, z).to_f64());

            // The label was just committed, so its mean exists.
            let Some(mean) = registry.mean(entry.label) else {
                continue;
            };

            for (nx, ny, nz) in self.connectivity.neighbors(shape, x, y, z) {
                if self.labels.get_voxel_unchecked(nx, ny, nz) == UNLABELED {
                    let value = self.image.get_voxel_unchecked(nx, ny, nz).to_f64();
                    frontier.push((nx, ny, nz), entry.label, (value - mean).abs());
                }
            }
        }
    }
}

/// Segment an image in one call.
///
/// Convenience wrapper: construct, run and return the label array.
///
/// # Errors
///
/// Same construction errors as
/// [`SeededRegionGrowing::with_options`].
pub fn grow_regions<T: Intensity>(
    image: ScalarVolume<T>,
    seeds: &LabelVolume,
    options: &GrowOptions,
) -> RegionResult<LabelVolume> {
    let mut srg = SeededRegionGrowing::with_options(image, seeds, options)?;
    srg.segment();
    srg.into_result()
}
