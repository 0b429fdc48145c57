//! Image sampling: decode, reduce to luma, resize to the working grid and
//! map brightness to extrusion height.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::io::Reader;
use image::{DynamicImage, GrayImage};
use relief_types::{HeightField, Settings};
use tracing::{debug, instrument};

use crate::types::ReliefError;

/// Map an 8-bit intensity to a height in `[0, max_height]`.
pub fn intensity_to_height(value: u8, max_height: f64, invert: bool) -> f64 {
    let v = if invert { 255 - value } else { value };
    v as f64 / 255.0 * max_height
}

/// Decode image bytes and sample them. Settings are checked before decoding.
#[instrument(skip(bytes, settings), fields(len = bytes.len()))]
pub fn sample_bytes(bytes: &[u8], settings: &Settings) -> Result<HeightField, ReliefError> {
    settings.validate()?;
    let img = image::load_from_memory(bytes).map_err(|e| ReliefError::ImageLoad(e.to_string()))?;
    sample_image(&img, settings)
}

/// Open an image file and sample it. Settings are checked before decoding.
#[instrument(skip(settings))]
pub fn sample_path(path: &Path, settings: &Settings) -> Result<HeightField, ReliefError> {
    settings.validate()?;
    let load_err = |e: &dyn std::fmt::Display| {
        ReliefError::ImageLoad(format!("{}: {}", path.display(), e))
    };
    // Format comes from the content; uploads carry no extension.
    let img = Reader::open(path)
        .map_err(|e| load_err(&e))?
        .with_guessed_format()
        .map_err(|e| load_err(&e))?
        .decode()
        .map_err(|e| load_err(&e))?;
    sample_image(&img, settings)
}

pub fn sample_image(img: &DynamicImage, settings: &Settings) -> Result<HeightField, ReliefError> {
    sample_luma(&img.to_luma8(), settings)
}

/// Sample an already-decoded grayscale image.
pub fn sample_luma(luma: &GrayImage, settings: &Settings) -> Result<HeightField, ReliefError> {
    settings.validate()?;
    let (src_w, src_h) = luma.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ReliefError::ImageLoad(format!(
            "image has no pixels ({}x{})",
            src_w, src_h
        )));
    }

    let cols = settings.columns();
    let rows = settings.rows_for(src_w, src_h);
    let resized;
    let grid = if (cols, rows) == (src_w, src_h) {
        luma
    } else {
        resized = imageops::resize(luma, cols, rows, FilterType::Lanczos3);
        &resized
    };

    let margin = settings.effective_edge_margin() as usize;
    let (cols, rows) = (cols as usize, rows as usize);
    let field = HeightField::from_fn(cols, rows, (src_w, src_h), |c, r| {
        if in_margin(c, r, cols, rows, margin) {
            return 0.0;
        }
        let v = grid.get_pixel(c as u32, r as u32)[0];
        intensity_to_height(v, settings.max_height, settings.backlight_optimized)
    });

    debug!(
        cols,
        rows,
        source_width = src_w,
        source_height = src_h,
        non_zero = field.non_zero_count(),
        "sampled height field"
    );
    Ok(field)
}

fn in_margin(col: usize, row: usize, cols: usize, rows: usize, margin: usize) -> bool {
    margin > 0
        && (col < margin
            || row < margin
            || col + margin >= cols
            || row + margin >= rows)
}
