//! Validity predicates decide which coordinates of a grid's space are cells.
//!
//! A grid is handed one of these when it is built, so a cube shell maze and a solid box maze
//! are the same grid type with different predicates.

use std::rc::Rc;

use crate::cells::{Cartesian2DCoordinate, Cartesian3DCoordinate};
use crate::masks::BinaryMask2D;
use crate::units::{Depth, Height, SideLength, Width};

/// A pure test of whether a coordinate is a cell.
pub type Validity<CoordT> = Rc<dyn Fn(CoordT) -> bool>;

#[inline]
fn within(value: i32, length: usize) -> bool {
    value >= 0 && (value as usize) < length
}

/// Every coordinate inside `width` x `height`.
pub fn rectangle(width: Width, height: Height) -> Validity<Cartesian2DCoordinate> {
    Rc::new(move |coord: Cartesian2DCoordinate| within(coord.x, width.0) && within(coord.y, height.0))
}

/// Every coordinate inside `width` x `height` x `depth`.
pub fn cuboid(width: Width, height: Height, depth: Depth) -> Validity<Cartesian3DCoordinate> {
    Rc::new(move |coord: Cartesian3DCoordinate| {
        within(coord.x, width.0) && within(coord.y, height.0) && within(coord.z, depth.0)
    })
}

/// The outer shell of a cube: inside the cube and touching at least one of its faces.
pub fn cube_surface(length: SideLength) -> Validity<Cartesian3DCoordinate> {
    let inside = cuboid(Width(length.0), Height(length.0), Depth(length.0));
    let last = length.0 as i32 - 1;
    Rc::new(move |coord: Cartesian3DCoordinate| {
        inside(coord) && coord.components().iter().any(|&c| c == 0 || c == last)
    })
}

/// A rectangle with the cells switched off in `mask` removed.
pub fn masked_rectangle(width: Width,
                        height: Height,
                        mask: BinaryMask2D)
                        -> Validity<Cartesian2DCoordinate> {
    let inside = rectangle(width, height);
    Rc::new(move |coord: Cartesian2DCoordinate| inside(coord) && !mask.is_masked(coord))
}
