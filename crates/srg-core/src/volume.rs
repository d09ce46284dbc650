//! Dense scalar volumes
//!
//! `ScalarVolume` is a dense array of scalar samples over a 2D or 3D
//! grid. It is the container handed to the segmentation engine, both
//! for the read-only intensity image and for the label arrays.
//!
//! # Memory layout
//!
//! Data is stored in C order with no padding: `x` varies fastest, then
//! `y`, then `z`. The sample at `(x, y, z)` is at index
//! `(z * height + y) * width + x`. A 2D image is a volume with
//! `depth == 1`.

use crate::error::{Error, Result};

/// Sentinel label value meaning "not assigned to any region".
pub const UNLABELED: u32 = 0;

/// Scalar sample type usable as voxel intensity.
///
/// Implemented for the fixed-width unsigned integers and floats that
/// tomography pipelines produce. All region statistics are kept in
/// `f64`, so the only requirement is a lossless widening conversion.
pub trait Intensity: Copy {
    /// Widen the sample to `f64` for statistics arithmetic.
    fn to_f64(self) -> f64;
}

impl Intensity for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for u16 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for u32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Extents of a 2D or 3D volume.
///
/// `depth == 1` encodes a 2D image; [`VolumeShape::rank`] reports 2 in
/// that case. All extents are nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeShape {
    width: u32,
    height: u32,
    depth: u32,
}

impl VolumeShape {
    /// Create a 2D shape (depth = 1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_2d(width: u32, height: u32) -> Result<Self> {
        Self::new_3d(width, height, 1)
    }

    /// Create a 3D shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any extent is 0.
    pub fn new_3d(width: u32, height: u32, depth: u32) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(Error::InvalidDimension {
                width,
                height,
                depth,
            });
        }

        Ok(VolumeShape {
            width,
            height,
            depth,
        })
    }

    /// Get the width in cells.
    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Get the depth in cells (1 for 2D images).
    #[inline]
    pub fn depth(self) -> u32 {
        self.depth
    }

    /// Rank of the grid: 2 for single-slice shapes, 3 otherwise.
    #[inline]
    pub fn rank(self) -> u32 {
        if self.depth == 1 { 2 } else { 3 }
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(self) -> usize {
        (self.width as usize) * (self.height as usize) * (self.depth as usize)
    }

    /// Check whether a coordinate lies inside the volume.
    #[inline]
    pub fn contains(self, x: u32, y: u32, z: u32) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    /// Linear index of a coordinate (C order, x fastest).
    ///
    /// Out-of-bounds coordinates are caller bugs, checked only in
    /// debug builds.
    #[inline]
    pub fn index(self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(self.contains(x, y, z));
        ((z as usize) * (self.height as usize) + (y as usize)) * (self.width as usize)
            + (x as usize)
    }
}

/// Dense scalar volume
///
/// A 2D or 3D array of scalar samples. Unlike packed bit-level image
/// containers, one sample is stored per cell, so any [`Intensity`]
/// type can be used directly.
///
/// # Examples
///
/// ```
/// use srg_core::ScalarVolume;
///
/// let mut vol: ScalarVolume<u8> = ScalarVolume::filled_2d(4, 4, 0).unwrap();
/// vol.set_voxel(1, 2, 0, 200).unwrap();
/// assert_eq!(vol.get_voxel(1, 2, 0).unwrap(), 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarVolume<T> {
    shape: VolumeShape,
    data: Vec<T>,
}

/// Label array: one `u32` region identifier per cell, 0 = unlabeled.
pub type LabelVolume = ScalarVolume<u32>;

impl<T: Copy> ScalarVolume<T> {
    /// Create a 2D volume with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled_2d(width: u32, height: u32, value: T) -> Result<Self> {
        let shape = VolumeShape::new_2d(width, height)?;
        Ok(Self::filled(shape, value))
    }

    /// Create a 3D volume with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any extent is 0.
    pub fn filled_3d(width: u32, height: u32, depth: u32, value: T) -> Result<Self> {
        let shape = VolumeShape::new_3d(width, height, depth)?;
        Ok(Self::filled(shape, value))
    }

    /// Create a volume of the given shape with every cell set to `value`.
    pub fn filled(shape: VolumeShape, value: T) -> Self {
        ScalarVolume {
            shape,
            data: vec![value; shape.num_cells()],
        }
    }

    /// Create a 2D volume from raw data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// does not match the shape.
    pub fn from_data_2d(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let shape = VolumeShape::new_2d(width, height)?;
        Self::from_data(shape, data)
    }

    /// Create a 3D volume from raw data in C order (x fastest).
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// does not match the shape.
    pub fn from_data_3d(width: u32, height: u32, depth: u32, data: Vec<T>) -> Result<Self> {
        let shape = VolumeShape::new_3d(width, height, depth)?;
        Self::from_data(shape, data)
    }

    /// Create a volume of the given shape from raw data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len()` differs
    /// from `shape.num_cells()`.
    pub fn from_data(shape: VolumeShape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.num_cells() {
            return Err(Error::DataLengthMismatch {
                got: data.len(),
                expected: shape.num_cells(),
            });
        }

        Ok(ScalarVolume { shape, data })
    }

    /// Get the volume shape.
    #[inline]
    pub fn shape(&self) -> VolumeShape {
        self.shape
    }

    /// Get the width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.shape.width()
    }

    /// Get the height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.shape.height()
    }

    /// Get the depth in cells (1 for 2D images).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.shape.depth()
    }

    /// Rank of the grid: 2 or 3.
    #[inline]
    pub fn rank(&self) -> u32 {
        self.shape.rank()
    }

    /// Get the sample at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside
    /// the volume.
    #[inline]
    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Result<T> {
        if !self.shape.contains(x, y, z) {
            return Err(Error::IndexOutOfBounds {
                index: self.out_of_bounds_index(x, y, z),
                len: self.data.len(),
            });
        }

        Ok(self.data[self.shape.index(x, y, z)])
    }

    /// Get the sample at `(x, y, z)` without a bounds check.
    ///
    /// Out-of-bounds access is a caller bug, caught by a debug
    /// assertion.
    #[inline]
    pub fn get_voxel_unchecked(&self, x: u32, y: u32, z: u32) -> T {
        self.data[self.shape.index(x, y, z)]
    }

    /// Set the sample at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside
    /// the volume.
    #[inline]
    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, value: T) -> Result<()> {
        if !self.shape.contains(x, y, z) {
            return Err(Error::IndexOutOfBounds {
                index: self.out_of_bounds_index(x, y, z),
                len: self.data.len(),
            });
        }

        let idx = self.shape.index(x, y, z);
        self.data[idx] = value;
        Ok(())
    }

    /// Set the sample at `(x, y, z)` without a bounds check.
    #[inline]
    pub fn set_voxel_unchecked(&mut self, x: u32, y: u32, z: u32, value: T) {
        let idx = self.shape.index(x, y, z);
        self.data[idx] = value;
    }

    /// View the raw sample data in C order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the volume and return the raw sample data.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    // Index reported in IndexOutOfBounds errors. The C-order formula
    // is still meaningful for diagnostics even when out of range.
    fn out_of_bounds_index(&self, x: u32, y: u32, z: u32) -> usize {
        ((z as usize) * (self.shape.height() as usize) + (y as usize))
            * (self.shape.width() as usize)
            + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_rank() {
        assert_eq!(VolumeShape::new_2d(4, 3).unwrap().rank(), 2);
        assert_eq!(VolumeShape::new_3d(4, 3, 2).unwrap().rank(), 3);
        assert_eq!(VolumeShape::new_3d(4, 3, 1).unwrap().rank(), 2);
    }

    #[test]
    fn test_shape_zero_extent() {
        assert!(VolumeShape::new_2d(0, 3).is_err());
        assert!(VolumeShape::new_3d(4, 0, 2).is_err());
        assert!(VolumeShape::new_3d(4, 3, 0).is_err());
    }

    #[test]
    fn test_index_c_order() {
        let shape = VolumeShape::new_3d(4, 3, 2).unwrap();
        assert_eq!(shape.index(0, 0, 0), 0);
        assert_eq!(shape.index(1, 0, 0), 1);
        assert_eq!(shape.index(0, 1, 0), 4);
        assert_eq!(shape.index(0, 0, 1), 12);
        assert_eq!(shape.index(3, 2, 1), 23);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut vol: ScalarVolume<u16> = ScalarVolume::filled_3d(3, 3, 3, 0).unwrap();
        vol.set_voxel(2, 1, 0, 777).unwrap();
        assert_eq!(vol.get_voxel(2, 1, 0).unwrap(), 777);
        assert_eq!(vol.get_voxel(0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut vol: ScalarVolume<u8> = ScalarVolume::filled_2d(4, 4, 0).unwrap();
        assert!(vol.get_voxel(4, 0, 0).is_err());
        assert!(vol.get_voxel(0, 0, 1).is_err());
        assert!(vol.set_voxel(0, 4, 0, 1).is_err());
    }

    #[test]
    fn test_from_data_length_check() {
        assert!(ScalarVolume::from_data_2d(2, 2, vec![1u8, 2, 3]).is_err());

        let vol = ScalarVolume::from_data_2d(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(vol.get_voxel(1, 1, 0).unwrap(), 4);
    }

    #[test]
    fn test_intensity_widening() {
        assert_eq!(200u8.to_f64(), 200.0);
        assert_eq!(65_000u16.to_f64(), 65_000.0);
        assert_eq!(0.5f32.to_f64(), 0.5);
    }
}
