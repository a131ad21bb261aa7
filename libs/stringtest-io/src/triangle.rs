//! # Triangle Records
//!
//! Flat triangle representation for export. STL stores raw triangle
//! geometry with no shared-vertex indexing, so the indexed mesh is
//! denormalized into these records before writing.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;
use stringtest_mesh::Mesh;

/// One export triangle: a unit normal plus three explicit vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Outward unit normal derived from the winding order, or zero for
    /// a degenerate (zero-area) triangle.
    pub normal: DVec3,
    /// The three corners, in winding order.
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Builds a record from three corners in winding order.
    ///
    /// The normal is the normalized cross product of the two edges from
    /// the first corner; a degenerate triangle gets a zero normal.
    pub fn from_vertices(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        let len = normal.length();
        let normal = if len > DEGENERATE_AREA_EPSILON {
            normal / len
        } else {
            DVec3::ZERO
        };

        Self {
            normal,
            vertices: [v0, v1, v2],
        }
    }
}

/// Denormalizes an indexed mesh into flat triangle records.
///
/// For each face `(i0, i1, i2)` the record carries the vertex rows
/// `i0, i1, i2` in that order, so the winding (and with it the outward
/// normal) is preserved exactly as assembled.
///
/// The whole list is materialized in memory; the file write that follows
/// touches the filesystem only once everything has been built.
///
/// # Example
///
/// ```rust
/// use stringtest_io::denormalize;
/// use stringtest_mesh::{build_test_plate, PlateSpec};
///
/// let mesh = build_test_plate(&PlateSpec::default()).unwrap();
/// let triangles = denormalize(&mesh);
/// assert_eq!(triangles.len(), mesh.triangle_count());
/// ```
pub fn denormalize(mesh: &Mesh) -> Vec<Triangle> {
    mesh.triangles()
        .iter()
        .map(|&[i0, i1, i2]| {
            Triangle::from_vertices(mesh.vertex(i0), mesh.vertex(i1), mesh.vertex(i2))
        })
        .collect()
}
