//! # Base Plate Primitive
//!
//! Generates the mesh for the rectangular base plate.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates the rectangular base plate mesh.
///
/// An axis-aligned box spanning `[0,width] x [0,depth] x [0,thickness]`
/// with its corner at the origin.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use stringtest_mesh::primitives::create_plate;
///
/// let mesh = create_plate(48.2, 13.0, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_plate(width: f64, depth: f64, thickness: f64) -> Result<Mesh, MeshError> {
    if width <= 0.0 || depth <= 0.0 || thickness <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Plate dimensions must be positive: {} x {} x {}",
            width, depth, thickness
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let min = DVec3::ZERO;
    let max = DVec3::new(width, depth, thickness);

    // Add 8 vertices (corners of the box)
    // Bottom face (z = 0)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = thickness)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Add 12 triangles (2 per face, counter-clockwise winding for outward normals)

    // Bottom face (z = 0) - looking from below, CCW
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top face (z = thickness) - looking from above, CCW
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front face (y = 0) - looking from front, CCW
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back face (y = depth) - looking from back, CCW
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left face (x = 0) - looking from left, CCW
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right face (x = width) - looking from right, CCW
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
