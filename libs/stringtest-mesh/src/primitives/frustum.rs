//! # Tapered Cylinder Primitive
//!
//! Generates the mesh for a tapered cylinder (frustum).

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a tapered cylinder (frustum) mesh.
///
/// The solid sits on the XY plane: the bottom ring at z=0, the top ring at
/// z=height. Ring vertices are interleaved, bottom point `i` at index `2i`
/// and top point `i` at index `2i+1`, with the two cap-center vertices
/// appended after all rings. The result is a closed solid with
/// `2*segments + 2` vertices and `4*segments` triangles.
///
/// # Arguments
///
/// * `radius_bottom` - Radius of the bottom ring (must be positive)
/// * `radius_top` - Radius of the top ring (0 collapses the top to an apex)
/// * `height` - Height along the Z axis
/// * `segments` - Number of segments around the circumference
///
/// # Example
///
/// ```rust
/// use stringtest_mesh::primitives::create_frustum;
///
/// // Tapered test cylinder
/// let mesh = create_frustum(2.6, 2.0, 20.0, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 32 + 2);
/// assert_eq!(mesh.triangle_count(), 4 * 32);
///
/// // Cone (top radius 0)
/// let cone = create_frustum(2.6, 0.0, 20.0, 32).unwrap();
/// assert!(cone.validate());
/// ```
pub fn create_frustum(
    radius_bottom: f64,
    radius_top: f64,
    height: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Frustum height must be positive: {}",
            height
        )));
    }

    if radius_bottom <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Frustum bottom radius must be positive: {}",
            radius_bottom
        )));
    }

    if radius_top < 0.0 {
        return Err(MeshError::degenerate(format!(
            "Frustum top radius must be non-negative: {}",
            radius_top
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Frustum segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    let mut mesh = Mesh::with_capacity(2 * segments as usize + 2, 4 * segments as usize);

    // Interleaved ring vertices: bottom_i at 2i, top_i at 2i+1
    for i in 0..segments {
        let theta = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(radius_bottom * cos, radius_bottom * sin, 0.0));
        mesh.add_vertex(DVec3::new(radius_top * cos, radius_top * sin, height));
    }

    // Side faces: a quad strip between adjacent rings, wrapping at segments-1
    for i in 0..segments {
        let b0 = 2 * i;
        let b1 = 2 * ((i + 1) % segments);
        let t0 = b0 + 1;
        let t1 = b1 + 1;
        mesh.add_triangle(b0, b1, t0);
        mesh.add_triangle(t0, b1, t1);
    }

    // Cap centers go after every ring vertex
    let bottom_center = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, height));

    // Cap fans
    for i in 0..segments {
        let b0 = 2 * i;
        let b1 = 2 * ((i + 1) % segments);
        let t0 = b0 + 1;
        let t1 = b1 + 1;
        mesh.add_triangle(b0, b1, bottom_center);
        mesh.add_triangle(t1, t0, top_center);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frustum_counts() {
        for segments in [3u32, 4, 7, 32, 100] {
            let mesh = create_frustum(2.6, 2.0, 20.0, segments).unwrap();
            assert_eq!(mesh.vertex_count(), 2 * segments as usize + 2);
            assert_eq!(mesh.triangle_count(), 4 * segments as usize);
        }
    }

    #[test]
    fn test_frustum_validates() {
        let mesh = create_frustum(2.6, 2.0, 20.0, 32).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_frustum_is_closed_manifold() {
        for segments in [3u32, 5, 32] {
            let mesh = create_frustum(2.6, 2.0, 20.0, segments).unwrap();
            assert!(mesh.is_closed_manifold());
        }
    }

    #[test]
    fn test_frustum_bounds() {
        let mesh = create_frustum(5.0, 2.0, 10.0, 64).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 10.0);
        // The widest ring is the bottom one
        assert_eq!(max.x, 5.0);
    }

    #[test]
    fn test_frustum_vertex_layout() {
        let mesh = create_frustum(2.6, 2.0, 20.0, 32).unwrap();
        // Ring i occupies 2i (bottom, z=0) and 2i+1 (top, z=height)
        for i in 0..32u32 {
            assert_eq!(mesh.vertex(2 * i).z, 0.0);
            assert_eq!(mesh.vertex(2 * i + 1).z, 20.0);
        }
        // Cap centers appended last
        assert_eq!(mesh.vertex(64), DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(65), DVec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn test_cone_degenerate_top() {
        let mesh = create_frustum(2.6, 0.0, 20.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 32 + 2);
        assert_eq!(mesh.triangle_count(), 4 * 32);
        // All coordinates stay finite; topology is still closed
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
    }

    #[test]
    fn test_frustum_minimum_segments() {
        let mesh = create_frustum(1.0, 0.5, 1.0, 3).unwrap();
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
    }

    #[test]
    fn test_frustum_invalid_height() {
        assert!(create_frustum(2.6, 2.0, 0.0, 32).is_err());
        assert!(create_frustum(2.6, 2.0, -1.0, 32).is_err());
    }

    #[test]
    fn test_frustum_invalid_bottom_radius() {
        assert!(create_frustum(0.0, 2.0, 20.0, 32).is_err());
        assert!(create_frustum(-2.6, 2.0, 20.0, 32).is_err());
    }

    #[test]
    fn test_frustum_negative_top_radius() {
        assert!(create_frustum(2.6, -0.1, 20.0, 32).is_err());
    }

    #[test]
    fn test_frustum_too_few_segments() {
        let result = create_frustum(2.6, 2.0, 20.0, 2);
        assert!(result.is_err());
    }
}
