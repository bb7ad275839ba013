use bit_set::BitSet;
use log::debug;
use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::Cell;
use crate::errors::{MazeError, MazeResult};
use crate::grid::{Grid, IndexType};

type NeighbourSmallVec<CoordT> = SmallVec<[CoordT; 6]>;

struct Frame<CoordT> {
    cell: CoordT,
    unvisited: NeighbourSmallVec<CoordT>,
}

/// Carve a perfect maze with the recursive backtracker (randomised depth first search).
///
/// From the current cell pick a random neighbour not visited yet, link to it and carry on
/// from there. When every neighbour of a cell has been visited, backtrack to the last cell
/// that still has unvisited neighbours. The result is a spanning tree over every cell
/// reachable from `start`, with long twisty passages and few dead ends.
///
/// The walk keeps its own stack, so the size of the grid is not limited by call depth.
/// `start` defaults to the first cell of the grid. Returns the number of links carved.
pub fn randomise<GridIndexType, CellT>(grid: &mut Grid<GridIndexType, CellT>,
                                       start: Option<CellT::Coord>,
                                       rng: &mut XorShiftRng)
                                       -> MazeResult<usize>
    where GridIndexType: IndexType,
          CellT: Cell
{
    let start_coord = match start {
        Some(coord) => coord,
        None => grid.iter()
                    .next()
                    .ok_or_else(|| MazeError::degenerate("the grid has no cells to carve a maze through"))?,
    };
    let start_index = grid.grid_coordinate_to_index(start_coord)
                          .ok_or_else(|| MazeError::invalid_cell(start_coord))?;

    let mut visited = BitSet::with_capacity(grid.size());
    let _ = visited.insert(start_index);
    let mut stack = vec![Frame {
                             cell: start_coord,
                             unvisited: shuffled_neighbours(grid, start_coord, rng)?,
                         }];
    let mut carved = 0;

    loop {
        let (cell, next) = match stack.last_mut() {
            Some(frame) => (frame.cell, frame.unvisited.pop()),
            None => break,
        };

        match next {
            Some(neighbour) => {
                let neighbour_index = grid.grid_coordinate_to_index(neighbour)
                                          .ok_or_else(|| MazeError::invalid_cell(neighbour))?;
                if visited.insert(neighbour_index) {
                    grid.connect(cell, neighbour)?;
                    carved += 1;
                    stack.push(Frame {
                                   cell: neighbour,
                                   unvisited: shuffled_neighbours(grid, neighbour, rng)?,
                               });
                }
            }
            None => {
                let _ = stack.pop();
            }
        }
    }

    debug!("carved {} links from {} over {} cells", carved, start_coord, grid.size());
    Ok(carved)
}

fn shuffled_neighbours<GridIndexType, CellT>(grid: &Grid<GridIndexType, CellT>,
                                             coord: CellT::Coord,
                                             rng: &mut XorShiftRng)
                                             -> MazeResult<NeighbourSmallVec<CellT::Coord>>
    where GridIndexType: IndexType,
          CellT: Cell
{
    let mut neighbours: NeighbourSmallVec<CellT::Coord> = grid.neighbours(coord)?
                                                              .iter()
                                                              .cloned()
                                                              .collect();
    neighbours.shuffle(rng);
    Ok(neighbours)
}
