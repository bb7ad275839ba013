use log::info;

use crate::cells::{AxisDirection, Cell, Coordinate};
use crate::errors::{MazeError, MazeResult};
use crate::grid::{Grid, IndexType};
use crate::mesh::Mesh;

/// What to do with the side of a cell that faces out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryWalls {
    /// No wall where the neighbour is not a cell. A cube shell maze relies on this, its
    /// outside is drawn separately.
    Open,
    /// Close off the grid's outline as well.
    Closed,
}

impl Default for BoundaryWalls {
    fn default() -> Self {
        BoundaryWalls::Open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallMeshConfig {
    pub boundary_walls: BoundaryWalls,
}

/// Builds a mesh of unit square walls, one between every cell and each neighbouring cell it is
/// not linked to. Walls face away from the cell that owns them, so a wall between two cells
/// is emitted once from each side. Flat grids get walls one unit high standing on z = 0.
///
/// Points shared by several walls are merged.
pub fn generate_maze_mesh<GridIndexType, CellT>(grid: &Grid<GridIndexType, CellT>,
                                                config: &WallMeshConfig)
                                                -> MazeResult<Mesh>
    where GridIndexType: IndexType,
          CellT: Cell
{
    if grid.is_empty() {
        return Err(MazeError::degenerate("cannot build walls for a grid with no cells"));
    }

    let directions = CellT::offset_directions();
    let mut mesh = Mesh::with_capacity(grid.size() * directions.len() * 4,
                                       grid.size() * directions.len());

    for cell in grid.iter() {
        let base = cell.as_point();
        for dir in directions.iter().cloned() {
            if !has_wall(grid, cell, dir, config.boundary_walls) {
                continue;
            }
            let [p0, p1, p2, p3] = dir.face_corners();
            let a = mesh.add_point(base + p0);
            let b = mesh.add_point(base + p1);
            let c = mesh.add_point(base + p2);
            let d = mesh.add_point(base + p3);
            mesh.add_quad(a, b, c, d);
        }
    }

    let _ = mesh.merge_coincident_points();
    info!("wall mesh: {} walls, {} points over {} cells",
          mesh.quad_count(),
          mesh.point_count(),
          grid.size());
    Ok(mesh)
}

fn has_wall<GridIndexType, CellT>(grid: &Grid<GridIndexType, CellT>,
                                  cell: CellT::Coord,
                                  direction: AxisDirection,
                                  boundary_walls: BoundaryWalls)
                                  -> bool
    where GridIndexType: IndexType,
          CellT: Cell
{
    match grid.neighbour_at_direction(cell, direction) {
        Some(_) => !grid.is_neighbour_linked(cell, direction),
        None => boundary_walls == BoundaryWalls::Closed,
    }
}
