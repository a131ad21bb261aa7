//! # Stringtest IO
//!
//! Export layer for the stringing-test generator. Denormalizes the
//! indexed mesh into flat triangle records and writes them as STL.
//!
//! ## Architecture
//!
//! ```text
//! stringtest-mesh (Mesh) → triangle records → STL file
//! ```
//!
//! The exporter trusts the assembler's winding convention: each record's
//! normal is derived from the face's vertex order, never recomputed from
//! neighbors or validated against them.

pub mod error;
pub mod stl;
pub mod triangle;

pub use error::{ExportError, ExportResult};
pub use stl::{save_stl, StlFormat};
pub use triangle::{denormalize, Triangle};
