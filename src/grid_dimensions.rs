use std::fmt::Debug;

use crate::units::{Depth, EdgesCount, Height, NodesCount, SideLength, Width};

/// The extent of a grid's coordinate space. Not every coordinate in the space has to be a
/// cell of the grid, that is up to the grid's validity predicate.
pub trait GridDimensions: Debug {
    /// Number of coordinates in the whole space.
    fn size(&self) -> NodesCount;

    /// Lengths along x, y and z. Flat spaces have a z length of 1.
    fn axis_lengths(&self) -> [usize; 3];

    /// Capacity hints for the cell graph.
    fn graph_size(&self) -> (NodesCount, EdgesCount);

    /// The side length if the space is a cube.
    fn side_length(&self) -> Option<SideLength> {
        None
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RectGridDimensions {
    width: Width,
    height: Height,
}

impl RectGridDimensions {
    pub fn new(width: Width, height: Height) -> RectGridDimensions {
        RectGridDimensions { width, height }
    }
}

impl GridDimensions for RectGridDimensions {
    #[inline(always)]
    fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    #[inline(always)]
    fn axis_lengths(&self) -> [usize; 3] {
        [self.width.0, self.height.0, 1]
    }

    fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        // A spanning tree never needs more than one edge per cell.
        (cells_count, EdgesCount(cells_count.0))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct BoxGridDimensions {
    width: Width,
    height: Height,
    depth: Depth,
}

impl BoxGridDimensions {
    pub fn new(width: Width, height: Height, depth: Depth) -> BoxGridDimensions {
        BoxGridDimensions { width, height, depth }
    }

    pub fn cube(length: SideLength) -> BoxGridDimensions {
        BoxGridDimensions::new(Width(length.0), Height(length.0), Depth(length.0))
    }
}

impl GridDimensions for BoxGridDimensions {
    #[inline(always)]
    fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0 * self.depth.0)
    }

    #[inline(always)]
    fn axis_lengths(&self) -> [usize; 3] {
        [self.width.0, self.height.0, self.depth.0]
    }

    fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0))
    }

    fn side_length(&self) -> Option<SideLength> {
        if self.width.0 == self.height.0 && self.height.0 == self.depth.0 {
            Some(SideLength(self.width.0))
        } else {
            None
        }
    }
}
