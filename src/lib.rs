//! **mazes3d** generates perfect mazes on flat, box and cube surface grids and builds meshes
//! from them: unit quad walls, or a cube projected onto a sphere with bevelled walls.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_iterators;
pub mod grids;
pub mod masks;
pub mod mesh;
pub mod renderers;
pub mod sphere_mesh;
pub mod units;
pub mod utils;
pub mod validity;
pub mod wall_mesh;
