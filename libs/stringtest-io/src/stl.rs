//! # STL Export
//!
//! Writes triangle records as STL, binary or ASCII.
//!
//! ## Binary Format
//!
//! ```text
//! UINT8[80]    – Header (padded with spaces, fixed text)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! ## ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Output is deterministic: fixed header text, fixed precision, no
//! timestamps. Re-running the generator produces identical bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::STL_HEADER_TEXT;
use glam::DVec3;

use crate::error::{ExportError, ExportResult};
use crate::triangle::Triangle;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Output flavor of the STL writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    /// 50-byte little-endian triangle records (the slicer default)
    Binary,
    /// Human-readable `facet normal` blocks
    Ascii,
}

/// Writes triangle records to an STL file.
///
/// The target file is created (or truncated) only after the caller has
/// fully materialized the triangle list; a geometry failure never leaves
/// a partial file behind.
///
/// # Errors
///
/// Returns an error if the triangle count exceeds the format's `u32`
/// counter or if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use stringtest_io::{denormalize, save_stl, StlFormat};
/// use stringtest_mesh::{build_test_plate, PlateSpec};
///
/// let mesh = build_test_plate(&PlateSpec::default()).unwrap();
/// let triangles = denormalize(&mesh);
/// save_stl("PETG_Stringing_Test.stl", &triangles, StlFormat::Binary).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(
    path: P,
    triangles: &[Triangle],
    format: StlFormat,
) -> ExportResult<()> {
    let path = path.as_ref();

    if triangles.len() > u32::MAX as usize {
        return Err(ExportError::TooManyTriangles {
            count: triangles.len(),
            max: u32::MAX,
        });
    }

    let result = (|| -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        match format {
            StlFormat::Binary => write_binary(&mut writer, triangles)?,
            StlFormat::Ascii => write_ascii(&mut writer, triangles)?,
        }
        writer.flush()
    })();

    result.map_err(|source| ExportError::io(path, source))
}

/// Writes the binary STL layout.
fn write_binary<W: Write>(writer: &mut W, triangles: &[Triangle]) -> std::io::Result<()> {
    // 80-byte header, fixed text padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = STL_HEADER_TEXT.as_bytes();
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    writer.write_all(&(triangles.len() as u32).to_le_bytes())?;

    for triangle in triangles {
        write_point_binary(writer, triangle.normal)?;
        for vertex in triangle.vertices {
            write_point_binary(writer, vertex)?;
        }
        // Attribute byte count
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes one coordinate triple as three little-endian f32 values.
///
/// STL stores single precision; this is the only place the f64 kernel
/// coordinates get narrowed.
fn write_point_binary<W: Write>(writer: &mut W, point: DVec3) -> std::io::Result<()> {
    writer.write_all(&(point.x as f32).to_le_bytes())?;
    writer.write_all(&(point.y as f32).to_le_bytes())?;
    writer.write_all(&(point.z as f32).to_le_bytes())?;
    Ok(())
}

/// Writes the ASCII STL layout with fixed precision.
fn write_ascii<W: Write>(writer: &mut W, triangles: &[Triangle]) -> std::io::Result<()> {
    writeln!(writer, "solid stringtest")?;

    for triangle in triangles {
        let n = triangle.normal;
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in triangle.vertices {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid stringtest")?;

    Ok(())
}
