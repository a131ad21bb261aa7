//! # Scene Assembly
//!
//! Lays out the base plate and the cylinder row, and merges all parts
//! into one combined mesh.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_frustum, create_plate};
use config::constants::{MAX_TRIANGLES, MAX_VERTICES, MIN_SEGMENTS};
use glam::DVec3;

/// Parameters of the stringing-test plate.
///
/// `Default` yields the production values from the `config` crate; tests
/// construct arbitrary values directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateSpec {
    /// Cylinder radius at the plate surface
    pub radius_bottom: f64,
    /// Cylinder radius at the tip (0 for a cone)
    pub radius_top: f64,
    /// Cylinder height above the plate
    pub cylinder_height: f64,
    /// Horizontal gap between adjacent cylinders
    pub cylinder_gap: f64,
    /// Segments around each cylinder's circumference
    pub segments: u32,
    /// Number of cylinders in the row
    pub num_cylinders: u32,
    /// Base plate thickness
    pub plate_thickness: f64,
}

impl Default for PlateSpec {
    fn default() -> Self {
        use config::constants::{
            CYLINDER_GAP, CYLINDER_HEIGHT, NUM_CYLINDERS, PLATE_THICKNESS, RADIUS_BOTTOM,
            RADIUS_TOP, SEGMENTS,
        };

        Self {
            radius_bottom: RADIUS_BOTTOM,
            radius_top: RADIUS_TOP,
            cylinder_height: CYLINDER_HEIGHT,
            cylinder_gap: CYLINDER_GAP,
            segments: SEGMENTS,
            num_cylinders: NUM_CYLINDERS,
            plate_thickness: PLATE_THICKNESS,
        }
    }
}

impl PlateSpec {
    /// Validates every parameter before any geometry is built.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.num_cylinders < 1 {
            return Err(MeshError::invalid_scene(format!(
                "At least one cylinder is required: {}",
                self.num_cylinders
            )));
        }

        if self.radius_bottom <= 0.0 {
            return Err(MeshError::invalid_scene(format!(
                "Bottom radius must be positive: {}",
                self.radius_bottom
            )));
        }

        if self.radius_top < 0.0 {
            return Err(MeshError::invalid_scene(format!(
                "Top radius must be non-negative: {}",
                self.radius_top
            )));
        }

        if self.cylinder_height <= 0.0 {
            return Err(MeshError::invalid_scene(format!(
                "Cylinder height must be positive: {}",
                self.cylinder_height
            )));
        }

        if self.segments < MIN_SEGMENTS {
            return Err(MeshError::invalid_scene(format!(
                "Segments must be at least {}: {}",
                MIN_SEGMENTS, self.segments
            )));
        }

        if self.plate_thickness <= 0.0 {
            return Err(MeshError::invalid_scene(format!(
                "Plate thickness must be positive: {}",
                self.plate_thickness
            )));
        }

        let vertices = self.expected_vertex_count();
        if vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices,
                max: MAX_VERTICES,
            });
        }

        let triangles = self.expected_triangle_count();
        if triangles > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: triangles,
                max: MAX_TRIANGLES,
            });
        }

        Ok(())
    }

    /// Vertex count of the assembled scene: 8 for the plate plus
    /// `2*segments + 2` per cylinder.
    pub fn expected_vertex_count(&self) -> usize {
        8 + self.num_cylinders as usize * (2 * self.segments as usize + 2)
    }

    /// Triangle count of the assembled scene: 12 for the plate plus
    /// `4*segments` per cylinder.
    pub fn expected_triangle_count(&self) -> usize {
        12 + self.num_cylinders as usize * 4 * self.segments as usize
    }
}

/// Computed plate dimensions and cylinder-row placement.
///
/// The plate reserves an edge margin of one bottom radius in width, and a
/// fixed depth of five bottom radii; both conventions are kept exactly as
/// the original test object defines them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateLayout {
    /// Plate width including the edge margin
    pub total_width: f64,
    /// Plate depth (five bottom radii)
    pub total_depth: f64,
    /// Width of the cylinder row without margin
    pub row_width: f64,
    /// Horizontal margin centering the row on the plate
    pub margin_x: f64,
}

impl PlateLayout {
    /// Computes the layout for the given parameters.
    pub fn from_spec(spec: &PlateSpec) -> Self {
        let n = spec.num_cylinders as f64;
        let total_width =
            n * 2.0 * spec.radius_bottom + (n - 1.0) * spec.cylinder_gap + spec.radius_bottom;
        let total_depth = 4.0 * spec.radius_bottom + spec.radius_bottom;
        let row_width = n * 2.0 * spec.radius_bottom + (n - 1.0) * spec.cylinder_gap;
        let margin_x = (total_width - row_width) / 2.0;

        Self {
            total_width,
            total_depth,
            row_width,
            margin_x,
        }
    }

    /// World-space offset of cylinder `index`.
    ///
    /// The row is centered in depth and sits flush on top of the plate.
    pub fn cylinder_offset(&self, spec: &PlateSpec, index: u32) -> DVec3 {
        let x = index as f64 * (2.0 * spec.radius_bottom + spec.cylinder_gap)
            + spec.radius_bottom
            + self.margin_x;
        let y = self.total_depth / 2.0;
        let z = spec.plate_thickness;
        DVec3::new(x, y, z)
    }
}

/// Assembles the full test plate: base plate first, then each cylinder in
/// index order, translated into place and merged into one mesh.
///
/// # Example
///
/// ```rust
/// use stringtest_mesh::scene::{assemble, PlateSpec};
///
/// let mesh = assemble(&PlateSpec::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 3 * 4 * 32 + 12);
/// ```
pub fn assemble(spec: &PlateSpec) -> Result<Mesh, MeshError> {
    spec.validate()?;

    let layout = PlateLayout::from_spec(spec);

    // Plate first: it establishes vertex-index base 0
    let mut combined = create_plate(layout.total_width, layout.total_depth, spec.plate_thickness)?;

    for i in 0..spec.num_cylinders {
        let mut cylinder = create_frustum(
            spec.radius_bottom,
            spec.radius_top,
            spec.cylinder_height,
            spec.segments,
        )?;
        cylinder.translate(layout.cylinder_offset(spec, i));
        combined.merge(&cylinder);
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;

    #[test]
    fn test_layout_production_dimensions() {
        // r_b=2.6, gap=15, n=3:
        //   total width = 3*2*2.6 + 2*15 + 2.6 = 48.2
        //   total depth = 5*2.6 = 13.0
        let spec = PlateSpec::default();
        let layout = PlateLayout::from_spec(&spec);
        assert!(approx_equal(layout.total_width, 48.2));
        assert!(approx_equal(layout.total_depth, 13.0));
    }

    #[test]
    fn test_layout_margin_formula() {
        let spec = PlateSpec::default();
        let layout = PlateLayout::from_spec(&spec);
        // total width exceeds the row width by exactly one bottom radius,
        // so the centering margin is half of that
        assert!(approx_equal(
            layout.total_width - layout.row_width,
            spec.radius_bottom
        ));
        assert!(approx_equal(layout.margin_x, spec.radius_bottom / 2.0));
    }

    #[test]
    fn test_layout_cylinder_offsets() {
        let spec = PlateSpec::default();
        let layout = PlateLayout::from_spec(&spec);

        for i in 0..spec.num_cylinders {
            let offset = layout.cylinder_offset(&spec, i);
            let expected_x = i as f64 * (2.0 * spec.radius_bottom + spec.cylinder_gap)
                + spec.radius_bottom
                + layout.margin_x;
            assert!(approx_equal(offset.x, expected_x));
            assert!(approx_equal(offset.y, layout.total_depth / 2.0));
            assert!(approx_equal(offset.z, spec.plate_thickness));
        }
    }

    #[test]
    fn test_layout_single_cylinder() {
        let spec = PlateSpec {
            num_cylinders: 1,
            ..PlateSpec::default()
        };
        let layout = PlateLayout::from_spec(&spec);
        // With one cylinder the gap term vanishes
        assert!(approx_equal(layout.row_width, 2.0 * spec.radius_bottom));
        assert!(approx_equal(layout.total_width, 3.0 * spec.radius_bottom));
    }

    #[test]
    fn test_assemble_counts() {
        let spec = PlateSpec::default();
        let mesh = assemble(&spec).unwrap();
        assert_eq!(mesh.vertex_count(), spec.expected_vertex_count());
        assert_eq!(mesh.triangle_count(), spec.expected_triangle_count());
        assert_eq!(mesh.triangle_count(), 3 * 4 * 32 + 12);
    }

    #[test]
    fn test_assemble_indices_valid() {
        let mesh = assemble(&PlateSpec::default()).unwrap();
        let vertex_count = mesh.vertex_count() as u32;
        for tri in mesh.triangles() {
            assert!(tri[0] < vertex_count);
            assert!(tri[1] < vertex_count);
            assert!(tri[2] < vertex_count);
        }
        assert!(mesh.validate());
    }

    #[test]
    fn test_assemble_is_closed_manifold() {
        // Disjoint watertight solids stay watertight after merging
        let mesh = assemble(&PlateSpec::default()).unwrap();
        assert!(mesh.is_closed_manifold());
    }

    #[test]
    fn test_assemble_cylinders_sit_on_plate() {
        let spec = PlateSpec::default();
        let mesh = assemble(&spec).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(approx_equal(min.z, 0.0));
        assert!(approx_equal(
            max.z,
            spec.plate_thickness + spec.cylinder_height
        ));
    }

    #[test]
    fn test_assemble_varies_with_count() {
        for n in 1..=5u32 {
            let spec = PlateSpec {
                num_cylinders: n,
                ..PlateSpec::default()
            };
            let mesh = assemble(&spec).unwrap();
            assert_eq!(
                mesh.triangle_count(),
                n as usize * 4 * spec.segments as usize + 12
            );
        }
    }

    #[test]
    fn test_assemble_zero_cylinders_rejected() {
        let spec = PlateSpec {
            num_cylinders: 0,
            ..PlateSpec::default()
        };
        assert!(assemble(&spec).is_err());
    }

    #[test]
    fn test_assemble_invalid_parameters_rejected() {
        let bad_radius = PlateSpec {
            radius_bottom: -1.0,
            ..PlateSpec::default()
        };
        assert!(assemble(&bad_radius).is_err());

        let bad_segments = PlateSpec {
            segments: 2,
            ..PlateSpec::default()
        };
        assert!(assemble(&bad_segments).is_err());

        let bad_thickness = PlateSpec {
            plate_thickness: 0.0,
            ..PlateSpec::default()
        };
        assert!(assemble(&bad_thickness).is_err());
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let spec = PlateSpec::default();
        let a = assemble(&spec).unwrap();
        let b = assemble(&spec).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.triangles(), b.triangles());
    }
}
