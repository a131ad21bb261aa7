//! # Stringtest Mesh
//!
//! Mesh kernel for the stringing-test generator. Builds the calibration
//! object (a base plate carrying a row of tapered cylinders) as a single
//! indexed triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! primitives (frustum, plate) → scene (layout + merge) → Mesh
//! ```
//!
//! All geometry uses f64; parts are built in local coordinates, translated
//! into place, and merged into one combined index space.
//!
//! ## Usage
//!
//! ```rust
//! use stringtest_mesh::{build_test_plate, PlateSpec};
//!
//! let mesh = build_test_plate(&PlateSpec::default()).unwrap();
//! assert!(mesh.is_closed_manifold());
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod scene;

pub use error::MeshError;
pub use mesh::Mesh;
pub use scene::{assemble, PlateLayout, PlateSpec};

/// Builds the complete stringing-test plate.
///
/// This is the main entry point for the mesh pipeline: validates the
/// parameters, lays out the scene, and returns the combined mesh.
///
/// # Example
///
/// ```rust
/// use stringtest_mesh::{build_test_plate, PlateSpec};
///
/// let mesh = build_test_plate(&PlateSpec::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 + 3 * (2 * 32 + 2));
/// assert_eq!(mesh.triangle_count(), 12 + 3 * 4 * 32);
/// ```
pub fn build_test_plate(spec: &PlateSpec) -> Result<Mesh, MeshError> {
    scene::assemble(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_plate() {
        let mesh = build_test_plate(&PlateSpec::default()).unwrap();
        assert_eq!(mesh.triangle_count(), 396);
        assert!(mesh.validate());
    }

    #[test]
    fn test_build_rejects_empty_row() {
        let spec = PlateSpec {
            num_cylinders: 0,
            ..PlateSpec::default()
        };
        assert!(build_test_plate(&spec).is_err());
    }
}
