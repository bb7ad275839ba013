use glam::DVec3;
use smallvec::SmallVec;
use std::convert::From;
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Deref;

use crate::grid_dimensions::GridDimensions;

pub trait Coordinate
    : PartialEq + Eq + Hash + Copy + Clone + Debug + Display + Ord + PartialOrd {
    /// The coordinate at `index` when the whole coordinate space of `dimensions` is laid
    /// out x fastest, then y, then z.
    fn from_row_major_index(index: usize, dimensions: &dyn GridDimensions) -> Self;

    /// The coordinate one unit away along `direction`. Directions along an axis the
    /// coordinate does not have leave it unchanged.
    fn offset(&self, direction: AxisDirection) -> Self;

    /// Minimum corner of the unit cube this coordinate occupies. 2d coordinates lie at z = 0.
    fn as_point(&self) -> DVec3;
}

pub trait Cell {
    type Coord: Coordinate;
    // Deref<Target=[Self::Coord]> gives access to the `iter` of slices.
    type CoordinateSmallVec: FromIterator<Self::Coord> + Deref<Target = [Self::Coord]>;
    type DirectionSmallVec: FromIterator<AxisDirection> + Deref<Target = [AxisDirection]>;

    /// The directions away from a cell, in the fixed order neighbours are listed in.
    fn offset_directions() -> Self::DirectionSmallVec;

    /// Creates a new `Coord` offset 1 cell away in the given direction.
    /// The result may lie outside of any grid, validity is for the grid to decide.
    fn offset_coordinate(coord: Self::Coord, dir: AxisDirection) -> Self::Coord {
        coord.offset(dir)
    }
}

/// Unit steps along the three axes.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum AxisDirection {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl AxisDirection {
    pub const ALL: [AxisDirection; 6] = [AxisDirection::NegX,
                                         AxisDirection::PosX,
                                         AxisDirection::NegY,
                                         AxisDirection::PosY,
                                         AxisDirection::NegZ,
                                         AxisDirection::PosZ];

    /// (dx, dy, dz)
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            AxisDirection::NegX => (-1, 0, 0),
            AxisDirection::PosX => (1, 0, 0),
            AxisDirection::NegY => (0, -1, 0),
            AxisDirection::PosY => (0, 1, 0),
            AxisDirection::NegZ => (0, 0, -1),
            AxisDirection::PosZ => (0, 0, 1),
        }
    }

    /// Corners of the unit cube face on this side of a cell, relative to the cell's minimum
    /// corner. Counter-clockwise when seen from outside, so the face normal points along `self`.
    pub fn face_corners(self) -> [DVec3; 4] {
        match self {
            AxisDirection::PosX => [DVec3::new(1.0, 0.0, 0.0),
                                    DVec3::new(1.0, 1.0, 0.0),
                                    DVec3::new(1.0, 1.0, 1.0),
                                    DVec3::new(1.0, 0.0, 1.0)],
            AxisDirection::NegX => [DVec3::new(0.0, 0.0, 0.0),
                                    DVec3::new(0.0, 0.0, 1.0),
                                    DVec3::new(0.0, 1.0, 1.0),
                                    DVec3::new(0.0, 1.0, 0.0)],
            AxisDirection::PosY => [DVec3::new(0.0, 1.0, 0.0),
                                    DVec3::new(0.0, 1.0, 1.0),
                                    DVec3::new(1.0, 1.0, 1.0),
                                    DVec3::new(1.0, 1.0, 0.0)],
            AxisDirection::NegY => [DVec3::new(0.0, 0.0, 0.0),
                                    DVec3::new(1.0, 0.0, 0.0),
                                    DVec3::new(1.0, 0.0, 1.0),
                                    DVec3::new(0.0, 0.0, 1.0)],
            AxisDirection::PosZ => [DVec3::new(0.0, 0.0, 1.0),
                                    DVec3::new(1.0, 0.0, 1.0),
                                    DVec3::new(1.0, 1.0, 1.0),
                                    DVec3::new(0.0, 1.0, 1.0)],
            AxisDirection::NegZ => [DVec3::new(0.0, 0.0, 0.0),
                                    DVec3::new(0.0, 1.0, 0.0),
                                    DVec3::new(1.0, 1.0, 0.0),
                                    DVec3::new(1.0, 0.0, 0.0)],
        }
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: i32,
    pub y: i32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: i32, y: i32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl Coordinate for Cartesian2DCoordinate {
    #[inline]
    fn from_row_major_index(index: usize, dimensions: &dyn GridDimensions) -> Cartesian2DCoordinate {
        let [width, _, _] = dimensions.axis_lengths();
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as i32, y as i32)
    }

    #[inline]
    fn offset(&self, direction: AxisDirection) -> Cartesian2DCoordinate {
        let (dx, dy, _) = direction.offset();
        Cartesian2DCoordinate::new(self.x + dx, self.y + dy)
    }

    #[inline]
    fn as_point(&self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), 0.0)
    }
}

impl From<(i32, i32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (i32, i32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian3DCoordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cartesian3DCoordinate {
    pub fn new(x: i32, y: i32, z: i32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate { x, y, z }
    }

    #[inline]
    pub fn components(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Coordinate for Cartesian3DCoordinate {
    #[inline]
    fn from_row_major_index(index: usize, dimensions: &dyn GridDimensions) -> Cartesian3DCoordinate {
        let [width, height, _] = dimensions.axis_lengths();
        let x = index % width;
        let y = (index / width) % height;
        let z = index / (width * height);

        Cartesian3DCoordinate::new(x as i32, y as i32, z as i32)
    }

    #[inline]
    fn offset(&self, direction: AxisDirection) -> Cartesian3DCoordinate {
        let (dx, dy, dz) = direction.offset();
        Cartesian3DCoordinate::new(self.x + dx, self.y + dy, self.z + dz)
    }

    #[inline]
    fn as_point(&self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl From<(i32, i32, i32)> for Cartesian3DCoordinate {
    fn from(xyz: (i32, i32, i32)) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(xyz.0, xyz.1, xyz.2)
    }
}

impl From<[i32; 3]> for Cartesian3DCoordinate {
    fn from(xyz: [i32; 3]) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(xyz[0], xyz[1], xyz[2])
    }
}

impl fmt::Display for Cartesian3DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A cell of a flat grid with four neighbours.
#[derive(Copy, Clone, Debug)]
pub struct SquareCell;

impl Cell for SquareCell {
    type Coord = Cartesian2DCoordinate;
    type CoordinateSmallVec = SmallVec<[Self::Coord; 4]>;
    type DirectionSmallVec = SmallVec<[AxisDirection; 4]>;

    fn offset_directions() -> Self::DirectionSmallVec {
        AxisDirection::ALL[..4].iter().cloned().collect()
    }
}

/// A cell of a volume with six neighbours.
#[derive(Copy, Clone, Debug)]
pub struct CubeCell;

impl Cell for CubeCell {
    type Coord = Cartesian3DCoordinate;
    type CoordinateSmallVec = SmallVec<[Self::Coord; 6]>;
    type DirectionSmallVec = SmallVec<[AxisDirection; 6]>;

    fn offset_directions() -> Self::DirectionSmallVec {
        AxisDirection::ALL.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_dimensions::{BoxGridDimensions, RectGridDimensions};
    use crate::units::{Depth, Height, Width};

    #[test]
    fn square_cells_have_four_planar_directions() {
        assert_eq!(&*SquareCell::offset_directions(),
                   &[AxisDirection::NegX, AxisDirection::PosX, AxisDirection::NegY, AxisDirection::PosY]);
    }

    #[test]
    fn cube_cells_have_six_directions_in_axis_order() {
        assert_eq!(&*CubeCell::offset_directions(), &AxisDirection::ALL[..]);
    }

    #[test]
    fn offsets_may_leave_the_positive_quadrant() {
        let origin = Cartesian2DCoordinate::new(0, 0);
        assert_eq!(SquareCell::offset_coordinate(origin, AxisDirection::NegX),
                   Cartesian2DCoordinate::new(-1, 0));
        assert_eq!(SquareCell::offset_coordinate(origin, AxisDirection::PosY),
                   Cartesian2DCoordinate::new(0, 1));
        // no z axis on a flat grid
        assert_eq!(origin.offset(AxisDirection::PosZ), origin);

        let c = Cartesian3DCoordinate::new(1, 2, 3);
        assert_eq!(c.offset(AxisDirection::NegZ), Cartesian3DCoordinate::new(1, 2, 2));
        assert_eq!(c.offset(AxisDirection::PosX).offset(AxisDirection::NegX), c);
    }

    #[test]
    fn row_major_index_2d() {
        let dims = RectGridDimensions::new(Width(3), Height(2));
        let coords: Vec<Cartesian2DCoordinate> = (0..6)
            .map(|i| Cartesian2DCoordinate::from_row_major_index(i, &dims))
            .collect();
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(coords, vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1)]);
    }

    #[test]
    fn row_major_index_3d() {
        let dims = BoxGridDimensions::new(Width(2), Height(3), Depth(4));
        assert_eq!(Cartesian3DCoordinate::from_row_major_index(0, &dims),
                   Cartesian3DCoordinate::new(0, 0, 0));
        assert_eq!(Cartesian3DCoordinate::from_row_major_index(1, &dims),
                   Cartesian3DCoordinate::new(1, 0, 0));
        assert_eq!(Cartesian3DCoordinate::from_row_major_index(2, &dims),
                   Cartesian3DCoordinate::new(0, 1, 0));
        assert_eq!(Cartesian3DCoordinate::from_row_major_index(6, &dims),
                   Cartesian3DCoordinate::new(0, 0, 1));
        assert_eq!(Cartesian3DCoordinate::from_row_major_index(23, &dims),
                   Cartesian3DCoordinate::new(1, 2, 3));
    }

    #[test]
    fn face_templates_wind_outwards() {
        for dir in AxisDirection::ALL.iter().cloned() {
            let [p0, p1, p2, p3] = dir.face_corners();
            let normal = (p1 - p0).cross(p2 - p0);
            let (dx, dy, dz) = dir.offset();
            let expected = DVec3::new(f64::from(dx), f64::from(dy), f64::from(dz));
            assert_eq!(normal, expected, "{:?}", dir);

            // planar quad: the fourth corner shares the plane and the winding
            assert_eq!((p2 - p0).cross(p3 - p0), expected, "{:?}", dir);
        }
    }

    #[test]
    fn face_templates_sit_on_their_side_of_the_unit_cube() {
        for dir in AxisDirection::ALL.iter().cloned() {
            let (dx, dy, dz) = dir.offset();
            let side = |offset: i32| if offset > 0 { 1.0 } else { 0.0 };
            for corner in dir.face_corners().iter() {
                if dx != 0 {
                    assert_eq!(corner.x, side(dx));
                }
                if dy != 0 {
                    assert_eq!(corner.y, side(dy));
                }
                if dz != 0 {
                    assert_eq!(corner.z, side(dz));
                }
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Cartesian2DCoordinate::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Cartesian3DCoordinate::new(0, 3, 9).to_string(), "(0, 3, 9)");
    }
}
