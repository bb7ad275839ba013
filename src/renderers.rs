use std::io::{self, Write};

use crate::mesh::Mesh;

/// Writes `mesh` as a Wavefront OBJ document: one `v` line per point, then per polygon a `vn`
/// line with its face normal and an `f` line. OBJ counts from one.
///
/// A mesh with polygons indexing missing points is refused with `InvalidData` before anything
/// is written.
pub fn write_wavefront_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    mesh.validate().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "# {} points, {} polygons", mesh.point_count(), mesh.polygon_count())?;
    for point in mesh.points() {
        writeln!(writer, "v {} {} {}", point.x, point.y, point.z)?;
    }
    for polygon in mesh.polygons() {
        let normal = mesh.face_normal(polygon);
        writeln!(writer, "vn {} {} {}", normal.x, normal.y, normal.z)?;
    }
    for (normal_index, polygon) in mesh.polygons().iter().enumerate() {
        write!(writer, "f")?;
        for index in polygon.indices() {
            write!(writer, " {}//{}", index + 1, normal_index + 1)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
