//! Helper functions: error type and synthetic image builders.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use relief_ops::ReliefError;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("image encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Relief(#[from] ReliefError),
}

// ── Image Builders ──────────────────────────────────────────────────────────

/// Grayscale image from row-major values. Missing values read as 0.
pub fn gray_image(width: u32, height: u32, values: &[u8]) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([values
            .get((y * width + x) as usize)
            .copied()
            .unwrap_or(0)])
    })
}

pub fn uniform_image(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Left-to-right ramp from 0 to 255.
pub fn horizontal_gradient(width: u32, height: u32) -> GrayImage {
    let span = width.saturating_sub(1).max(1);
    GrayImage::from_fn(width, height, |x, _| Luma([(x * 255 / span) as u8]))
}

/// Alternating black and white cells of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    let cell = cell.max(1);
    GrayImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Encode a grayscale image as PNG bytes.
pub fn png_bytes(img: &GrayImage) -> Result<Vec<u8>, HarnessError> {
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .map_err(|e| HarnessError::Encode(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_spans_full_range() {
        let img = horizontal_gradient(5, 2);
        assert_eq!(img.get_pixel(0, 1)[0], 0);
        assert_eq!(img.get_pixel(4, 0)[0], 255);
    }

    #[test]
    fn png_decodes_back() {
        let img = checkerboard(4, 4, 2);
        let bytes = png_bytes(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded, img);
    }
}
