//! End-to-end conversion: sample, tile, render and optionally write.

use std::fs;
use std::path::{Path, PathBuf};

use relief_format::{write_script, ScriptHeader};
use relief_types::{HeightField, Settings};
use tracing::{info, instrument};

use crate::sampler::{sample_bytes, sample_path};
use crate::tiler::emit;
use crate::types::ReliefError;

/// File name of the script written by [`convert_file`].
pub const OUTPUT_FILE_NAME: &str = "output.scad";

pub const GENERATOR: &str = concat!("relief ", env!("CARGO_PKG_VERSION"));

/// Result of an in-memory conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub script: String,
    pub cols: usize,
    pub rows: usize,
    pub shape_count: usize,
}

pub fn convert_bytes(bytes: &[u8], settings: &Settings) -> Result<Conversion, ReliefError> {
    let field = sample_bytes(bytes, settings)?;
    finish(&field, settings)
}

/// Convert the image at `image_path` and write `output.scad` into `output_dir`.
#[instrument(skip(settings))]
pub fn convert_file(
    image_path: &Path,
    output_dir: &Path,
    settings: &Settings,
) -> Result<PathBuf, ReliefError> {
    let field = sample_path(image_path, settings)?;
    let conversion = finish(&field, settings)?;
    fs::create_dir_all(output_dir).map_err(|e| {
        ReliefError::GeometrySerialization(format!("{}: {}", output_dir.display(), e))
    })?;
    let header = ScriptHeader::new(GENERATOR, Some(settings.clone()));
    let path = write_script(output_dir.join(OUTPUT_FILE_NAME), &header, &conversion.script)?;
    info!(path = %path.display(), shapes = conversion.shape_count, "conversion written");
    Ok(path)
}

fn finish(field: &HeightField, settings: &Settings) -> Result<Conversion, ReliefError> {
    let script = emit(field, settings)?;
    Ok(Conversion {
        script,
        cols: field.cols(),
        rows: field.rows(),
        shape_count: field.non_zero_count(),
    })
}
