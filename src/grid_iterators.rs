use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::cells::Coordinate;
use crate::grid_dimensions::GridDimensions;

/// Every coordinate of a grid's coordinate space in row major order, valid cell or not.
#[derive(Clone)]
pub struct SpaceIter<CoordT: Coordinate> {
    dimensions: Rc<dyn GridDimensions>,
    current_cell_number: usize,
    cells_count: usize,
    coordinate_type: PhantomData<CoordT>,
}

impl<CoordT: Coordinate> SpaceIter<CoordT> {
    pub fn new(dimensions: &Rc<dyn GridDimensions>) -> SpaceIter<CoordT> {
        SpaceIter {
            dimensions: dimensions.clone(),
            current_cell_number: 0,
            cells_count: dimensions.size().0,
            coordinate_type: PhantomData,
        }
    }
}

impl<CoordT: Coordinate> fmt::Debug for SpaceIter<CoordT> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "SpaceIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl<CoordT: Coordinate> ExactSizeIterator for SpaceIter<CoordT> {} // default impl using size_hint()
impl<CoordT: Coordinate> Iterator for SpaceIter<CoordT> {
    type Item = CoordT;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = CoordT::from_row_major_index(self.current_cell_number,
                                                     self.dimensions.as_ref());
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
