//! # Cube Sphere Mesh
//!
//! The surface of a cube maze drawn as a sphere. Each of the six cube faces is sampled on a
//! `length` x `length` lattice spanning [-1, 1], pushed out onto the unit sphere, and covered
//! with a triangulated shell. Every lattice quad stands for the maze cell under it and each quad
//! edge that separates the cell from a neighbour it is not linked to is raised into a bevel wall
//! reaching out to `outer_scale` times the sphere's radius.
//!
//! Cell (i, j) of a face is the quad with corners at lattice points (i, j) and (i + 1, j + 1), so
//! the last row and column of cells on a face own no quad of their own. Their walls are raised by
//! the quads next to them, or by the adjoining face.

use glam::DVec3;
use log::info;

use crate::cells::{Cartesian3DCoordinate, CubeCell};
use crate::errors::{MazeError, MazeResult};
use crate::grid::{Grid, IndexType};
use crate::mesh::Mesh;
use crate::units::SideLength;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSphereConfig {
    /// Radius of the top of the bevel walls, relative to the unit sphere.
    pub outer_scale: f64,
    /// Leave out the shell and emit only the walls.
    pub is_hollow: bool,
}

impl Default for CubeSphereConfig {
    fn default() -> Self {
        CubeSphereConfig {
            outer_scale: 0.9,
            is_hollow: false,
        }
    }
}

/// One side of the cube: the axis held at an extreme and the two axes that vary across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeFace {
    pub fixed_axis: usize,
    pub positive: bool,
    pub u_axis: usize,
    pub v_axis: usize,
}

/// +X, -X, +Y, -Y, +Z, -Z. The order fixes the order of points in the mesh.
pub const CUBE_FACES: [CubeFace; 6] = [CubeFace { fixed_axis: 0, positive: true, u_axis: 1, v_axis: 2 },
                                       CubeFace { fixed_axis: 0, positive: false, u_axis: 1, v_axis: 2 },
                                       CubeFace { fixed_axis: 1, positive: true, u_axis: 0, v_axis: 2 },
                                       CubeFace { fixed_axis: 1, positive: false, u_axis: 0, v_axis: 2 },
                                       CubeFace { fixed_axis: 2, positive: true, u_axis: 0, v_axis: 1 },
                                       CubeFace { fixed_axis: 2, positive: false, u_axis: 0, v_axis: 1 }];

impl CubeFace {
    /// The cube cell at face local position (`i`, `j`) on a cube with sides of `length` cells.
    /// Positions off the face give coordinates the grid does not contain.
    pub fn cell_at(&self, i: i32, j: i32, length: SideLength) -> Cartesian3DCoordinate {
        let mut xyz = [0; 3];
        xyz[self.fixed_axis] = if self.positive { length.0 as i32 - 1 } else { 0 };
        xyz[self.u_axis] = i;
        xyz[self.v_axis] = j;
        Cartesian3DCoordinate::from(xyz)
    }

    fn cube_point(&self, u: f64, v: f64) -> DVec3 {
        let mut xyz = [0.0; 3];
        xyz[self.fixed_axis] = if self.positive { 1.0 } else { -1.0 };
        xyz[self.u_axis] = u;
        xyz[self.v_axis] = v;
        DVec3::from_array(xyz)
    }
}

/// Maps a point on the surface of the [-1, 1] cube onto the unit sphere.
///
/// Unlike normalising, this spreads the points evenly: cells near the cube's corners do not
/// get squashed.
pub fn project_to_sphere(point: DVec3) -> DVec3 {
    DVec3::new(warp(point.x, point.y, point.z),
               warp(point.y, point.x, point.z),
               warp(point.z, point.x, point.y))
}

#[inline]
fn warp(i: f64, j: f64, k: f64) -> f64 {
    let (j2, k2) = (j * j, k * k);
    i * (1.0 - j2 / 2.0 - k2 / 2.0 + j2 * k2 / 3.0).sqrt()
}

/// `count` evenly spaced samples from -1 to 1 inclusive. A single sample sits at -1.
fn samples(count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![-1.0];
    }
    let step = 2.0 / (count - 1) as f64;
    (0..count)
        .map(|k| if k == count - 1 { 1.0 } else { -1.0 + k as f64 * step })
        .collect()
}

/// Builds the sphere mesh for a maze carved over the surface of a cube.
///
/// The grid must have cube dimensions and at least one cell, and `outer_scale` must be a
/// positive finite number.
///
/// Points are laid out face by face in `CUBE_FACES` order: the face's `length` x `length`
/// lattice first, row by row, followed by two fresh points per bevel raised on that face. Shell
/// triangles come before bevel triangles within each face.
pub fn generate_cube_sphere_mesh<GridIndexType>(grid: &Grid<GridIndexType, CubeCell>,
                                                config: &CubeSphereConfig)
                                                -> MazeResult<Mesh>
    where GridIndexType: IndexType
{
    if grid.is_empty() {
        return Err(MazeError::degenerate("cannot build a sphere for a grid with no cells"));
    }
    let length = grid.dimensions()
                     .side_length()
                     .ok_or_else(|| MazeError::degenerate("the grid is not shaped like a cube"))?;
    if !(config.outer_scale.is_finite() && config.outer_scale > 0.0) {
        return Err(MazeError::degenerate(format!("bevel scale must be positive, not {}",
                                                 config.outer_scale)));
    }

    let lattice = samples(length.0);
    let quads_per_face = (length.0 - 1) * (length.0 - 1);
    let mut mesh = Mesh::with_capacity(6 * length.0 * length.0, 6 * 2 * quads_per_face);
    let mut bevels = 0;
    for face in CUBE_FACES.iter() {
        bevels += add_face(&mut mesh, grid, face, &lattice, length, config)?;
    }

    info!("cube sphere: {} triangles, {} points, {} bevels, hollow {}",
          mesh.triangle_count(),
          mesh.point_count(),
          bevels,
          config.is_hollow);
    Ok(mesh)
}

/// Adds one face's lattice, shell and bevels. Returns the number of bevels raised.
fn add_face<GridIndexType>(mesh: &mut Mesh,
                           grid: &Grid<GridIndexType, CubeCell>,
                           face: &CubeFace,
                           lattice: &[f64],
                           length: SideLength,
                           config: &CubeSphereConfig)
                           -> MazeResult<usize>
    where GridIndexType: IndexType
{
    let n = lattice.len();
    let start = mesh.point_count() as u32;
    for &u in lattice {
        for &v in lattice {
            let _ = mesh.add_point(project_to_sphere(face.cube_point(u, v)));
        }
    }

    // a b
    // c d
    let corners = move |i: usize, j: usize| {
        let a = start + (i * n + j) as u32;
        let c = a + n as u32;
        (a, a + 1, c, c + 1)
    };

    if !config.is_hollow {
        for i in 0..n - 1 {
            for j in 0..n - 1 {
                let (a, b, c, d) = corners(i, j);
                mesh.add_triangle(a, b, d);
                mesh.add_triangle(a, d, c);
            }
        }
    }

    let mut bevels = 0;
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let (a, b, c, d) = corners(i, j);
            let (fi, fj) = (i as i32, j as i32);
            let cell = face.cell_at(fi, fj, length);
            let links = grid.links(cell)?;
            let edges = [(a, b, face.cell_at(fi - 1, fj, length)),
                         (b, d, face.cell_at(fi, fj + 1, length)),
                         (c, d, face.cell_at(fi + 1, fj, length)),
                         (a, c, face.cell_at(fi, fj - 1, length))];

            for &(base0, base1, neighbour) in edges.iter() {
                if !grid.is_valid_coordinate(neighbour) || links.contains(&neighbour) {
                    continue;
                }
                add_bevel(mesh, base0, base1, config.outer_scale);
                bevels += 1;
            }
        }
    }
    Ok(bevels)
}

/// A wall standing on the shell edge `base0`-`base1`, reaching out to `scale`.
fn add_bevel(mesh: &mut Mesh, base0: u32, base1: u32, scale: f64) {
    let (bottom0, bottom1) = (mesh.point(base0), mesh.point(base1));
    let top0 = mesh.add_point(bottom0 * scale);
    let top1 = mesh.add_point(bottom1 * scale);
    mesh.add_triangle(base0, base1, top1);
    mesh.add_triangle(base0, top1, top0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::randomise;
    use crate::grids::{box_grid, cube_grid};
    use crate::mesh::Polygon;
    use crate::units::{Depth, Height, Width};
    use crate::utils::{self, seeded_rng};

    const EPSILON: f64 = 1e-12;

    fn carved_cube(length: usize, seed: u64) -> Grid<u32, CubeCell> {
        let mut g = cube_grid(SideLength(length)).unwrap();
        let _ = randomise(&mut g, None, &mut seeded_rng(Some(seed))).unwrap();
        g
    }

    #[test]
    fn projection_keeps_face_centres_and_spreads_corners() {
        assert_eq!(project_to_sphere(DVec3::X), DVec3::X);
        assert_eq!(project_to_sphere(DVec3::NEG_Z), DVec3::NEG_Z);
        let corner = project_to_sphere(DVec3::ONE);
        let third = (1.0f64 / 3.0).sqrt();
        assert!((corner - DVec3::splat(third)).length() < EPSILON);
    }

    #[test]
    fn lattice_samples() {
        assert_eq!(samples(1), vec![-1.0]);
        assert_eq!(samples(2), vec![-1.0, 1.0]);
        assert_eq!(samples(5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn faces_cover_the_cube_surface() {
        let length = SideLength(4);
        let g = cube_grid(length).unwrap();
        let mut covered = utils::fnv_hashset(g.size());
        for face in CUBE_FACES.iter() {
            for i in 0..4 {
                for j in 0..4 {
                    let cell = face.cell_at(i, j, length);
                    assert!(g.is_valid_coordinate(cell), "{} off the surface", cell);
                    let _ = covered.insert(cell);
                }
            }
            assert!(!g.is_valid_coordinate(face.cell_at(-1, 0, length)));
            assert!(!g.is_valid_coordinate(face.cell_at(0, 4, length)));
        }
        assert_eq!(covered.len(), g.size());
    }

    #[test]
    fn unlinked_two_cube() {
        let g = cube_grid(SideLength(2)).unwrap();
        let mesh = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();

        // one quad per face, its right and bottom edges face cells on the same face
        assert_eq!(mesh.point_count(), 24 + 2 * 12);
        assert_eq!(mesh.triangle_count(), 12 + 2 * 12);
        assert_eq!(mesh.quad_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn carved_two_cube_point_and_triangle_counts() {
        let g = carved_cube(2, 4);
        let mesh = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();
        let bevel_triangles = mesh.triangle_count() - 12;
        assert_eq!(bevel_triangles % 2, 0);
        assert_eq!(mesh.point_count(), 24 + bevel_triangles);
        assert!(bevel_triangles < 2 * 12);
    }

    #[test]
    fn hollow_sphere_drops_only_the_shell() {
        let g = carved_cube(5, 17);
        let solid = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();
        let hollow = generate_cube_sphere_mesh(&g,
                                               &CubeSphereConfig {
                                                   is_hollow: true,
                                                   ..CubeSphereConfig::default()
                                               })
            .unwrap();

        assert_eq!(solid.triangle_count() - hollow.triangle_count(), 6 * 2 * 4 * 4);
        assert_eq!(solid.point_count(), hollow.point_count());
        assert_eq!(hollow.triangle_count() % 2, 0);
        assert!(hollow.validate().is_ok());
    }

    #[test]
    fn shell_points_lie_on_the_unit_sphere() {
        let length = 6;
        let g = carved_cube(length, 23);
        let mesh = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();

        let mut face_start = 0;
        for _ in CUBE_FACES.iter() {
            for p in &mesh.points()[face_start..face_start + length * length] {
                assert!((p.length() - 1.0).abs() < EPSILON, "{} is off the sphere", p);
            }
            // skip past this face's bevel points
            face_start += length * length;
            let bevel_points = mesh.points()[face_start..]
                .iter()
                .take_while(|p| (p.length() - 0.9).abs() < EPSILON)
                .count();
            face_start += bevel_points;
        }
        assert_eq!(face_start, mesh.point_count());
    }

    #[test]
    fn bevel_tops_are_scaled_bases() {
        let g = carved_cube(4, 31);
        let config = CubeSphereConfig { outer_scale: 1.25, is_hollow: true };
        let mesh = generate_cube_sphere_mesh(&g, &config).unwrap();

        assert!(mesh.polygon_count() > 0);
        for pair in mesh.polygons().chunks(2) {
            match (pair[0], pair[1]) {
                (Polygon::Triangle([b0, b1, t1]), Polygon::Triangle([b0_again, t1_again, t0])) => {
                    assert_eq!(b0, b0_again);
                    assert_eq!(t1, t1_again);
                    assert_eq!(mesh.point(t0), mesh.point(b0) * 1.25);
                    assert_eq!(mesh.point(t1), mesh.point(b1) * 1.25);
                }
                other => panic!("not a bevel: {:?}", other),
            }
        }
    }

    #[test]
    fn linking_cells_removes_their_bevels() {
        let length = SideLength(3);
        let mut g = cube_grid(length).unwrap();
        let before = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();

        let plus_x = CUBE_FACES[0];
        g.connect(plus_x.cell_at(0, 0, length), plus_x.cell_at(0, 1, length)).unwrap();
        let after = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();

        // both quads sharing the edge drop their bevel
        assert_eq!(before.triangle_count() - after.triangle_count(), 4);
        assert_eq!(before.point_count() - after.point_count(), 4);
    }

    #[test]
    fn single_cell_cube_has_no_quads() {
        let g = cube_grid(SideLength(1)).unwrap();
        let mesh = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();
        assert_eq!(mesh.point_count(), 6);
        assert_eq!(mesh.polygon_count(), 0);
    }

    #[test]
    fn synthesis_is_repeatable() {
        let g = carved_cube(7, 5);
        let first = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();
        let second = generate_cube_sphere_mesh(&g, &CubeSphereConfig::default()).unwrap();
        assert_eq!(first, second);
        let bits = |m: &Mesh| m.points().iter().map(|p| p.to_array().map(f64::to_bits)).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn bad_configurations_are_degenerate() {
        let g = carved_cube(3, 0);
        for &scale in &[0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = CubeSphereConfig { outer_scale: scale, is_hollow: false };
            match generate_cube_sphere_mesh(&g, &config) {
                Err(MazeError::DegenerateConfiguration { .. }) => {}
                other => panic!("scale {} gave {:?}", scale, other),
            }
        }

        let not_a_cube = box_grid(Width(2), Height(3), Depth(4)).unwrap();
        assert!(generate_cube_sphere_mesh(&not_a_cube, &CubeSphereConfig::default()).is_err());

        let empty = cube_grid(SideLength(0)).unwrap();
        assert!(generate_cube_sphere_mesh(&empty, &CubeSphereConfig::default()).is_err());
    }
}
