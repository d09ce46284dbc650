//! Grid connectivity model
//!
//! This module defines the neighborhood schemes used to enumerate the
//! neighbors of a cell in a 2D or 3D volume. The scheme is fixed for a
//! whole segmentation run; neighbor enumeration is a pure function of
//! shape and coordinate.

use srg_core::VolumeShape;

/// Connectivity scheme for neighbor enumeration
///
/// 2D images support 4-way and 8-way neighborhoods; 3D volumes support
/// 6-way, 18-way and 26-way. The minimal (von Neumann) neighborhood is
/// the default for each rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// 4-way 2D connectivity (edge neighbors)
    FourWay,
    /// 8-way 2D connectivity (edge and corner neighbors)
    EightWay,
    /// 6-way 3D connectivity (face neighbors)
    SixWay,
    /// 18-way 3D connectivity (face and edge neighbors)
    EighteenWay,
    /// 26-way 3D connectivity (face, edge and corner neighbors)
    TwentySixWay,
}

const OFFSETS_4: [(i32, i32, i32); 4] = [(-1, 0, 0), (1, 0, 0), (0, -1, 0), (0, 1, 0)];

const OFFSETS_8: [(i32, i32, i32); 8] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
];

const OFFSETS_6: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

// Face neighbors first, then the twelve edge neighbors.
const OFFSETS_18: [(i32, i32, i32); 18] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
];

// Face, edge, then corner neighbors.
const OFFSETS_26: [(i32, i32, i32); 26] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1),
];

impl Connectivity {
    /// Minimal (von Neumann) neighborhood for a grid of the given rank.
    pub fn default_for(rank: u32) -> Self {
        if rank == 2 {
            Connectivity::FourWay
        } else {
            Connectivity::SixWay
        }
    }

    /// Rank of grid this scheme applies to (2 or 3).
    pub fn rank(self) -> u32 {
        match self {
            Connectivity::FourWay | Connectivity::EightWay => 2,
            _ => 3,
        }
    }

    /// Number of neighbors of an interior cell.
    pub fn num_neighbors(self) -> usize {
        self.offsets().len()
    }

    /// Coordinate offsets of the neighborhood.
    pub fn offsets(self) -> &'static [(i32, i32, i32)] {
        match self {
            Connectivity::FourWay => &OFFSETS_4,
            Connectivity::EightWay => &OFFSETS_8,
            Connectivity::SixWay => &OFFSETS_6,
            Connectivity::EighteenWay => &OFFSETS_18,
            Connectivity::TwentySixWay => &OFFSETS_26,
        }
    }

    /// Enumerate the in-bounds neighbors of `(x, y, z)` within `shape`.
    ///
    /// Neighbors are yielded in the fixed offset-table order, which
    /// keeps frontier insertion order (and therefore tie-breaking)
    /// reproducible across runs.
    pub fn neighbors(
        self,
        shape: VolumeShape,
        x: u32,
        y: u32,
        z: u32,
    ) -> impl Iterator<Item = (u32, u32, u32)> {
        debug_assert!(shape.contains(x, y, z));
        self.offsets().iter().filter_map(move |&(dx, dy, dz)| {
            let nx = i64::from(x) + i64::from(dx);
            let ny = i64::from(y) + i64::from(dy);
            let nz = i64::from(z) + i64::from(dz);
            if nx >= 0
                && ny >= 0
                && nz >= 0
                && (nx as u32) < shape.width()
                && (ny as u32) < shape.height()
                && (nz as u32) < shape.depth()
            {
                Some((nx as u32, ny as u32, nz as u32))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_rank() {
        assert_eq!(Connectivity::default_for(2), Connectivity::FourWay);
        assert_eq!(Connectivity::default_for(3), Connectivity::SixWay);
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(Connectivity::FourWay.num_neighbors(), 4);
        assert_eq!(Connectivity::EightWay.num_neighbors(), 8);
        assert_eq!(Connectivity::SixWay.num_neighbors(), 6);
        assert_eq!(Connectivity::EighteenWay.num_neighbors(), 18);
        assert_eq!(Connectivity::TwentySixWay.num_neighbors(), 26);
    }

    #[test]
    fn test_interior_cell_2d() {
        let shape = VolumeShape::new_2d(5, 5).unwrap();
        let n: Vec<_> = Connectivity::FourWay.neighbors(shape, 2, 2, 0).collect();
        assert_eq!(n, vec![(1, 2, 0), (3, 2, 0), (2, 1, 0), (2, 3, 0)]);
    }

    #[test]
    fn test_corner_clipping() {
        let shape = VolumeShape::new_2d(5, 5).unwrap();
        let n: Vec<_> = Connectivity::EightWay.neighbors(shape, 0, 0, 0).collect();
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0, 0)));
        assert!(n.contains(&(0, 1, 0)));
        assert!(n.contains(&(1, 1, 0)));
    }

    #[test]
    fn test_interior_cell_3d() {
        let shape = VolumeShape::new_3d(3, 3, 3).unwrap();
        assert_eq!(Connectivity::SixWay.neighbors(shape, 1, 1, 1).count(), 6);
        assert_eq!(
            Connectivity::EighteenWay.neighbors(shape, 1, 1, 1).count(),
            18
        );
        assert_eq!(
            Connectivity::TwentySixWay.neighbors(shape, 1, 1, 1).count(),
            26
        );
    }

    #[test]
    fn test_corner_clipping_3d() {
        let shape = VolumeShape::new_3d(3, 3, 3).unwrap();
        assert_eq!(
            Connectivity::TwentySixWay.neighbors(shape, 0, 0, 0).count(),
            7
        );
    }

    #[test]
    fn test_offsets_are_distinct() {
        for conn in [
            Connectivity::EightWay,
            Connectivity::EighteenWay,
            Connectivity::TwentySixWay,
        ] {
            let offsets = conn.offsets();
            for (i, a) in offsets.iter().enumerate() {
                assert_ne!(*a, (0, 0, 0));
                for b in &offsets[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
