use std::rc::Rc;

use crate::cells::{CubeCell, SquareCell};
use crate::grid::{Grid, IndexType};
use crate::grid_dimensions::{BoxGridDimensions, GridDimensions, RectGridDimensions};
use crate::masks::BinaryMask2D;
use crate::units::{Depth, Height, SideLength, Width};
use crate::validity;

pub type RectGrid = Grid<u32, SquareCell>;
pub type BoxGrid = Grid<u32, CubeCell>;
pub type CubeGrid = Grid<u32, CubeCell>;

/// The space's cell count is worked out from its axis lengths so that spaces too big to count
/// are refused rather than overflowing.
fn fits_index_type<GridIndexType: IndexType>(dimensions: &dyn GridDimensions) -> bool {
    dimensions.axis_lengths()
              .iter()
              .try_fold(1usize, |cells, &length| cells.checked_mul(length))
              .map_or(false, |cells| cells < <GridIndexType as IndexType>::max().index())
}

/// A flat `width` x `height` grid.
pub fn rect_grid(width: Width, height: Height) -> Option<RectGrid> {
    let dimensions = RectGridDimensions::new(width, height);
    if fits_index_type::<u32>(&dimensions) {
        Some(RectGrid::new(Rc::new(dimensions), validity::rectangle(width, height)))
    } else {
        None
    }
}

/// A flat `width` x `height` grid without the cells switched off in `mask`.
pub fn masked_rect_grid(width: Width, height: Height, mask: BinaryMask2D) -> Option<RectGrid> {
    let dimensions = RectGridDimensions::new(width, height);
    if fits_index_type::<u32>(&dimensions) {
        Some(RectGrid::new(Rc::new(dimensions),
                           validity::masked_rectangle(width, height, mask)))
    } else {
        None
    }
}

/// A solid `width` x `height` x `depth` volume of cells.
pub fn box_grid(width: Width, height: Height, depth: Depth) -> Option<BoxGrid> {
    let dimensions = BoxGridDimensions::new(width, height, depth);
    if fits_index_type::<u32>(&dimensions) {
        Some(BoxGrid::new(Rc::new(dimensions), validity::cuboid(width, height, depth)))
    } else {
        None
    }
}

/// The surface shell of a `length` sided cube, the interior cells do not exist.
pub fn cube_grid(length: SideLength) -> Option<CubeGrid> {
    let dimensions = BoxGridDimensions::cube(length);
    if fits_index_type::<u32>(&dimensions) {
        Some(CubeGrid::new(Rc::new(dimensions), validity::cube_surface(length)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Cartesian2DCoordinate;

    #[test]
    fn grid_cell_counts() {
        assert_eq!(rect_grid(Width(3), Height(5)).unwrap().size(), 15);
        assert_eq!(box_grid(Width(2), Height(3), Depth(4)).unwrap().size(), 24);
        assert_eq!(cube_grid(SideLength(4)).unwrap().size(), 56);
        assert_eq!(cube_grid(SideLength(16)).unwrap().size(), 16 * 16 * 16 - 14 * 14 * 14);
    }

    #[test]
    fn masked_grid_drops_cells() {
        let mask = BinaryMask2D::from_text("X..\n.X.");
        let g = masked_rect_grid(Width(3), Height(2), mask).unwrap();
        assert_eq!(g.size(), 4);
        assert!(!g.is_valid_coordinate(Cartesian2DCoordinate::new(0, 0)));
        assert!(!g.is_valid_coordinate(Cartesian2DCoordinate::new(1, 1)));
        assert!(g.is_valid_coordinate(Cartesian2DCoordinate::new(2, 1)));
    }

    #[test]
    fn oversized_grids_are_refused() {
        assert!(rect_grid(Width(1 << 20), Height(1 << 20)).is_none());
    }

    #[test]
    fn uncountable_grids_are_refused() {
        assert!(cube_grid(SideLength(3_000_000)).is_none());
        assert!(box_grid(Width(usize::MAX), Height(2), Depth(1)).is_none());
        assert!(rect_grid(Width(usize::MAX), Height(usize::MAX)).is_none());
        assert!(masked_rect_grid(Width(usize::MAX), Height(3), BinaryMask2D::from_text("X")).is_none());
    }
}
