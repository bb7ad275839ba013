//! # Mesh Data Structure
//!
//! Points plus polygons that index into them. Wall meshes are made of quads and sphere meshes
//! of triangles, so every polygon carries its own arity.

use glam::DVec3;
use log::debug;

use crate::errors::{MazeError, MazeResult};
use crate::utils::{self, FnvHashMap};

/// A face of a mesh as indices into the mesh's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polygon {
    Triangle([u32; 3]),
    Quad([u32; 4]),
}

impl Polygon {
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Polygon::Triangle(indices) => &indices[..],
            Polygon::Quad(indices) => &indices[..],
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.indices().len()
    }

    fn remapped(&self, remap: &[u32]) -> Polygon {
        match *self {
            Polygon::Triangle([a, b, c]) => {
                Polygon::Triangle([remap[a as usize], remap[b as usize], remap[c as usize]])
            }
            Polygon::Quad([a, b, c, d]) => Polygon::Quad([remap[a as usize],
                                                          remap[b as usize],
                                                          remap[c as usize],
                                                          remap[d as usize]]),
        }
    }
}

/// A polygon mesh.
///
/// # Example
///
/// ```rust
/// use mazes3d::mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_point(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_point(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    points: Vec<DVec3>,
    polygons: Vec<Polygon>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(point_count: usize, polygon_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            polygons: Vec::with_capacity(polygon_count),
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.arity() == 3).count()
    }

    pub fn quad_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.arity() == 4).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point and returns its index.
    pub fn add_point(&mut self, position: DVec3) -> u32 {
        let index = self.points.len() as u32;
        self.points.push(position);
        index
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.polygons.push(Polygon::Triangle([a, b, c]));
    }

    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.polygons.push(Polygon::Quad([a, b, c, d]));
    }

    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn point(&self, index: u32) -> DVec3 {
        self.points[index as usize]
    }

    /// Unit normal of a polygon from its first three corners, following the winding order.
    /// Zero for a degenerate polygon. Panics if the polygon indexes a missing point, see
    /// `validate`.
    pub fn face_normal(&self, polygon: &Polygon) -> DVec3 {
        let indices = polygon.indices();
        let (p0, p1, p2) = (self.point(indices[0]), self.point(indices[1]), self.point(indices[2]));
        (p1 - p0).cross(p2 - p0).normalize_or_zero()
    }

    /// Checks that every polygon index refers to an existing point.
    pub fn validate(&self) -> MazeResult<()> {
        let points = self.points.len();
        for polygon in &self.polygons {
            if let Some(&index) = polygon.indices().iter().find(|&&i| i as usize >= points) {
                return Err(MazeError::IndexOutOfRange { index, points });
            }
        }
        Ok(())
    }

    /// Collapses points at identical positions into one, keeping the first occurrence, and
    /// points the polygons at the survivors. Returns how many points were removed.
    pub fn merge_coincident_points(&mut self) -> usize {
        let before = self.points.len();
        let mut first_index: FnvHashMap<[u64; 3], u32> = utils::fnv_hashmap(before);
        let mut merged = Vec::with_capacity(before);
        let mut remap = Vec::with_capacity(before);

        for point in &self.points {
            let next_index = merged.len() as u32;
            let index = *first_index.entry(position_key(*point)).or_insert(next_index);
            if index == next_index {
                merged.push(*point);
            }
            remap.push(index);
        }

        self.polygons = self.polygons.iter().map(|polygon| polygon.remapped(&remap)).collect();
        self.points = merged;

        let removed = before - self.points.len();
        debug!("merged {} coincident points, {} remain", removed, self.points.len());
        removed
    }
}

/// Exact position as a hashable key. -0.0 + 0.0 is 0.0, so both zeros share a key.
#[inline]
fn position_key(point: DVec3) -> [u64; 3] {
    [(point.x + 0.0).to_bits(), (point.y + 0.0).to_bits(), (point.z + 0.0).to_bits()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square(mesh: &mut Mesh, z: f64) {
        let a = mesh.add_point(DVec3::new(0.0, 0.0, z));
        let b = mesh.add_point(DVec3::new(1.0, 0.0, z));
        let c = mesh.add_point(DVec3::new(1.0, 1.0, z));
        let d = mesh.add_point(DVec3::new(0.0, 1.0, z));
        mesh.add_quad(a, b, c, d);
    }

    #[test]
    fn counts_by_arity() {
        let mut mesh = Mesh::new();
        unit_square(&mut mesh, 0.0);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.polygon_count(), 2);
        assert_eq!(mesh.quad_count(), 1);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.polygons()[1].indices(), &[0, 1, 2]);
    }

    #[test]
    fn validate_catches_bad_indices() {
        let mut mesh = Mesh::new();
        unit_square(&mut mesh, 0.0);
        assert_eq!(mesh.validate(), Ok(()));

        mesh.add_triangle(0, 1, 4);
        assert_eq!(mesh.validate(), Err(MazeError::IndexOutOfRange { index: 4, points: 4 }));
    }

    #[test]
    fn merge_collapses_shared_corners() {
        let mut mesh = Mesh::new();
        unit_square(&mut mesh, 0.0);
        unit_square(&mut mesh, 0.0);
        unit_square(&mut mesh, 1.0);

        let removed = mesh.merge_coincident_points();
        assert_eq!(removed, 4);
        assert_eq!(mesh.point_count(), 8);
        assert_eq!(mesh.polygons()[0], mesh.polygons()[1]);
        assert_eq!(mesh.polygons()[2], Polygon::Quad([4, 5, 6, 7]));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn merge_treats_signed_zeros_alike() {
        let mut mesh = Mesh::new();
        let a = mesh.add_point(DVec3::new(0.0, 1.0, 0.0));
        let b = mesh.add_point(DVec3::new(-0.0, 1.0, 0.0));
        let c = mesh.add_point(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_triangle(a, b, c);
        assert_eq!(mesh.merge_coincident_points(), 1);
        assert_eq!(mesh.polygons()[0], Polygon::Triangle([0, 0, 1]));
    }

    #[test]
    fn merge_keeps_first_occurrence_order() {
        let mut mesh = Mesh::new();
        unit_square(&mut mesh, 2.0);
        let before = mesh.clone();
        assert_eq!(mesh.merge_coincident_points(), 0);
        assert_eq!(mesh, before);
    }

    #[test]
    fn face_normal_follows_winding() {
        let mut mesh = Mesh::new();
        unit_square(&mut mesh, 0.0);
        let quad = mesh.polygons()[0];
        assert_eq!(mesh.face_normal(&quad), DVec3::Z);
    }
}
