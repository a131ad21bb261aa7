//! Generator entry point: builds the stringing-test plate from the fixed
//! configuration and writes it as binary STL.

use anyhow::Context;
use env_logger::Env;
use log::info;

use config::constants::OUTPUT_FILENAME;
use stringtest_io::{denormalize, save_stl, StlFormat};
use stringtest_mesh::{build_test_plate, PlateLayout, PlateSpec};

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    let spec = PlateSpec::default();
    let layout = PlateLayout::from_spec(&spec);
    info!(
        "building test plate: {:.1} x {:.1} mm, {} cylinders of {:.1} mm",
        layout.total_width, layout.total_depth, spec.num_cylinders, spec.cylinder_height
    );

    let mesh = build_test_plate(&spec).context("failed to build test plate geometry")?;
    let triangles = denormalize(&mesh);
    info!(
        "assembled {} vertices, {} triangles",
        mesh.vertex_count(),
        triangles.len()
    );

    save_stl(OUTPUT_FILENAME, &triangles, StlFormat::Binary)
        .with_context(|| format!("failed to export {}", OUTPUT_FILENAME))?;

    println!("STL saved as {}", OUTPUT_FILENAME);
    Ok(())
}
