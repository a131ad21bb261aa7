//! # Configuration Constants
//!
//! Centralized constants for the stringing-test generator. All geometry
//! parameters, export settings, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Test Object**: Dimensions of the calibration plate and cylinders
//! - **Tessellation**: Angular resolution of the cylinder surfaces
//! - **Limits**: Maximum values for safety bounds
//! - **Export**: Output file settings

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon below which a triangle's area (cross-product length) is treated
/// as zero when computing export normals.
///
/// Degenerate triangles still get written, but with a zero normal rather
/// than a normalized garbage vector.
pub const DEGENERATE_AREA_EPSILON: f64 = f64::EPSILON;

// =============================================================================
// TEST OBJECT CONSTANTS
// =============================================================================

/// Radius of each test cylinder at its base, in millimeters.
///
/// # Example
///
/// ```rust
/// use config::constants::{RADIUS_BOTTOM, RADIUS_TOP};
///
/// // Cylinders taper towards the top to stress retraction settings
/// assert!(RADIUS_BOTTOM > RADIUS_TOP);
/// ```
pub const RADIUS_BOTTOM: f64 = 2.6;

/// Radius of each test cylinder at its top, in millimeters.
///
/// A value of 0 would collapse the top ring into an apex (a cone); the
/// stringing test uses a gentle taper instead.
pub const RADIUS_TOP: f64 = 2.0;

/// Height of each test cylinder, in millimeters.
///
/// Tall enough that the nozzle travels between cylinder tips with no
/// intervening geometry, which is where stringing shows up.
pub const CYLINDER_HEIGHT: f64 = 20.0;

/// Horizontal gap between adjacent cylinders, in millimeters.
///
/// # Example
///
/// ```rust
/// use config::constants::{CYLINDER_GAP, RADIUS_BOTTOM};
///
/// // The travel distance between cylinder walls equals the gap
/// assert!(CYLINDER_GAP > 2.0 * RADIUS_BOTTOM);
/// ```
pub const CYLINDER_GAP: f64 = 15.0;

/// Number of test cylinders placed in a row on the base plate.
pub const NUM_CYLINDERS: u32 = 3;

/// Thickness of the base plate, in millimeters.
pub const PLATE_THICKNESS: f64 = 1.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of segments around each cylinder's circumference.
///
/// # Example
///
/// ```rust
/// use config::constants::{SEGMENTS, MIN_SEGMENTS};
///
/// assert!(SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const SEGMENTS: u32 = 32;

/// Minimum number of segments for any circular cross-section.
///
/// Fewer than 3 segments cannot form a closed ring.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme parameter values.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme parameter values.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Fixed name of the exported mesh file.
///
/// One file per run; an existing file is overwritten.
pub const OUTPUT_FILENAME: &str = "PETG_Stringing_Test.stl";

/// Text placed at the start of the binary STL header.
///
/// The remainder of the 80-byte header is padded with spaces. Fixed text,
/// no timestamps: re-running the generator must be byte-for-byte
/// reproducible.
pub const STL_HEADER_TEXT: &str = "Binary STL generated by stringtest";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
