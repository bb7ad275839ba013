use petgraph::graph;
pub use petgraph::graph::IndexType;
use petgraph::{Graph, Undirected};
use std::fmt;
use std::rc::Rc;
use std::slice;

use crate::cells::{AxisDirection, Cell, Coordinate};
use crate::errors::{MazeError, MazeResult};
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::SpaceIter;
use crate::utils::{self, FnvHashMap};
use crate::validity::Validity;

/// Cells of a coordinate space that pass a validity predicate, and the passages linking them.
///
/// Every valid cell is a node from construction onwards. Links are undirected and only
/// change through `connect`.
pub struct Grid<GridIndexType: IndexType, CellT: Cell> {
    graph: Graph<CellT::Coord, (), Undirected, GridIndexType>,
    nodes: FnvHashMap<CellT::Coord, graph::NodeIndex<GridIndexType>>,
    dimensions: Rc<dyn GridDimensions>,
}

impl<GridIndexType: IndexType, CellT: Cell> fmt::Debug for Grid<GridIndexType, CellT> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: graph: {:?}, dimensions: {:?}", self.graph, self.dimensions)
    }
}

impl<GridIndexType: IndexType, CellT: Cell> Grid<GridIndexType, CellT> {
    /// Builds a grid holding every coordinate of `dimensions` that `validity` accepts, with no links.
    ///
    /// Panics if there are more valid cells than `GridIndexType` can index, see `grids` for
    /// checked constructors.
    pub fn new(dimensions: Rc<dyn GridDimensions>,
               validity: Validity<CellT::Coord>)
               -> Grid<GridIndexType, CellT> {

        let (nodes_hint, edges_hint) = dimensions.graph_size();

        let mut grid = Grid {
            graph: Graph::with_capacity(nodes_hint.0, edges_hint.0),
            nodes: utils::fnv_hashmap(nodes_hint.0),
            dimensions: dimensions.clone(),
        };
        for coord in SpaceIter::<CellT::Coord>::new(&dimensions).filter(|c| validity(*c)) {
            let node = grid.graph.add_node(coord);
            let _ = grid.nodes.insert(coord, node);
        }

        grid
    }

    #[inline]
    pub fn dimensions(&self) -> &dyn GridDimensions {
        self.dimensions.as_ref()
    }

    /// Number of valid cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[inline]
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Is the coordinate a cell of this grid - inside its space and accepted by its validity predicate.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellT::Coord) -> bool {
        self.nodes.contains_key(&coord)
    }

    /// Link two cells with a passage. Linking an already linked pair changes nothing.
    pub fn connect(&mut self, a: CellT::Coord, b: CellT::Coord) -> MazeResult<()> {
        if a == b {
            return Err(MazeError::SelfLink { cell: a.to_string() });
        }
        let a_index = self.graph_index(a)?;
        let b_index = self.graph_index(b)?;
        let _ = self.graph.update_edge(a_index, b_index, ());
        Ok(())
    }

    /// Cell nodes that are linked to a particular node by a passage.
    pub fn links(&self, coord: CellT::Coord) -> MazeResult<CellT::CoordinateSmallVec> {
        let graph_node_index = self.graph_index(coord)?;
        Ok(self.graph
               .neighbors(graph_node_index)
               .map(|linked_index| self.graph[linked_index])
               .collect())
    }

    /// Cells one step along each axis from a particular cell, but not necessarily linked by
    /// a passage. Listed in -x, +x, -y, +y, -z, +z order.
    pub fn neighbours(&self, coord: CellT::Coord) -> MazeResult<CellT::CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return Err(MazeError::invalid_cell(coord));
        }

        Ok(CellT::offset_directions()
               .iter()
               .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
               .collect())
    }

    pub fn neighbour_at_direction(&self,
                                  coord: CellT::Coord,
                                  direction: AxisDirection)
                                  -> Option<CellT::Coord> {
        let neighbour_coord = CellT::offset_coordinate(coord, direction);
        if self.is_valid_coordinate(neighbour_coord) {
            Some(neighbour_coord)
        } else {
            None
        }
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: CellT::Coord, b: CellT::Coord) -> bool {
        match (self.nodes.get(&a), self.nodes.get(&b)) {
            (Some(a_index), Some(b_index)) => self.graph.find_edge(*a_index, *b_index).is_some(),
            _ => false,
        }
    }

    pub fn is_neighbour_linked(&self, coord: CellT::Coord, direction: AxisDirection) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the coordinate is not a cell of the grid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: CellT::Coord) -> Option<usize> {
        self.nodes.get(&coord).map(|node| node.index())
    }

    /// The valid cells, in row major order of the coordinate space.
    pub fn iter(&self) -> CellIter<CellT, GridIndexType> {
        CellIter { graph_node_iter: self.graph.raw_nodes().iter() }
    }

    pub fn iter_links(&self) -> LinksIter<CellT, GridIndexType> {
        LinksIter {
            graph_edge_iter: self.graph.raw_edges().iter(),
            graph: &self.graph,
        }
    }

    fn graph_index(&self, coord: CellT::Coord) -> MazeResult<graph::NodeIndex<GridIndexType>> {
        self.nodes.get(&coord).cloned().ok_or_else(|| MazeError::invalid_cell(coord))
    }
}

pub struct CellIter<'a, CellT: Cell, GridIndexType: IndexType> {
    graph_node_iter: slice::Iter<'a, graph::Node<CellT::Coord, GridIndexType>>,
}

impl<'a, CellT: Cell, GridIndexType: IndexType> Iterator for CellIter<'a, CellT, GridIndexType> {
    type Item = CellT::Coord;

    fn next(&mut self) -> Option<Self::Item> {
        self.graph_node_iter.next().map(|node| node.weight)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_node_iter.size_hint()
    }
}
impl<'a, CellT: Cell, GridIndexType: IndexType> ExactSizeIterator
    for CellIter<'a, CellT, GridIndexType> {
} // default impl using size_hint()

pub struct LinksIter<'a, CellT: Cell, GridIndexType: IndexType> {
    graph_edge_iter: slice::Iter<'a, graph::Edge<(), GridIndexType>>,
    graph: &'a Graph<CellT::Coord, (), Undirected, GridIndexType>,
}

impl<'a, CellT: Cell, GridIndexType: IndexType> Iterator for LinksIter<'a, CellT, GridIndexType> {
    type Item = (CellT::Coord, CellT::Coord);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.graph_edge_iter
            .next()
            .map(|edge| (graph[edge.source()], graph[edge.target()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
impl<'a, CellT: Cell, GridIndexType: IndexType> ExactSizeIterator
    for LinksIter<'a, CellT, GridIndexType> {
} // default impl using size_hint()

impl<'a, CellT: Cell, GridIndexType: IndexType> fmt::Debug for LinksIter<'a, CellT, GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinksIter :: edges iter : {:?}", self.graph_edge_iter)
    }
}
