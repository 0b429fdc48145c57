use serde::{Deserialize, Serialize};

use crate::shape::{CompositionMode, ShapeKind};

/// Largest accepted grid resolution (cells per row).
pub const MAX_RESOLUTION: i64 = 4096;

/// Conversion settings. Every field has a default, so a partial JSON object
/// deserializes into a complete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Maximum extrusion height in mm.
    pub max_height: f64,
    /// Radius of the unit shape in mm.
    pub cylinder_radius: f64,
    /// Gap between neighbouring unit shapes in mm.
    pub spacing: f64,
    /// Number of grid cells along the image width.
    pub resolution: i64,
    /// Solid floor under the relief in mm.
    pub base_thickness: f64,
    /// Invert intensities before mapping them to height.
    pub backlight_optimized: bool,
    pub shape: ShapeKind,
    pub composition: CompositionMode,
    /// Scale the row count by the source aspect ratio instead of a square grid.
    pub preserve_aspect: bool,
    /// Width of the border ring whose cells emit no geometry.
    /// `None` means 1 when `preserve_aspect` is set, otherwise 0.
    pub edge_margin: Option<u32>,
    /// Rescale the footprint so one mm covers this many source pixels.
    pub pixels_per_mm: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_height: 20.0,
            cylinder_radius: 1.0,
            spacing: 0.5,
            resolution: 50,
            base_thickness: 1.0,
            backlight_optimized: false,
            shape: ShapeKind::Cylinder,
            composition: CompositionMode::Difference,
            preserve_aspect: false,
            edge_margin: None,
            pixels_per_mm: None,
        }
    }
}

impl Settings {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.resolution <= 0 || self.resolution > MAX_RESOLUTION {
            return Err(SettingsError::ResolutionOutOfRange {
                value: self.resolution,
                max: MAX_RESOLUTION,
            });
        }
        positive("maxHeight", self.max_height)?;
        positive("cylinderRadius", self.cylinder_radius)?;
        non_negative("spacing", self.spacing)?;
        non_negative("baseThickness", self.base_thickness)?;
        if let Some(ppm) = self.pixels_per_mm {
            positive("pixelsPerMm", ppm)?;
        }
        if self.composition == CompositionMode::Union && self.base_thickness <= 0.0 {
            return Err(SettingsError::UnionWithoutBase);
        }
        Ok(())
    }

    /// Grid resolution as a cell count. Only meaningful after `validate`.
    pub fn columns(&self) -> u32 {
        self.resolution.clamp(1, MAX_RESOLUTION) as u32
    }

    /// Number of grid rows for a source image of the given size.
    /// Never exceeds [`MAX_RESOLUTION`].
    pub fn rows_for(&self, source_width: u32, source_height: u32) -> u32 {
        let cols = self.columns();
        if !self.preserve_aspect || source_width == 0 {
            return cols;
        }
        let rows = (cols as f64 * source_height as f64 / source_width as f64).round();
        rows.clamp(1.0, MAX_RESOLUTION as f64) as u32
    }

    pub fn effective_edge_margin(&self) -> u32 {
        self.edge_margin
            .unwrap_or(if self.preserve_aspect { 1 } else { 0 })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(SettingsError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(SettingsError::Negative { field, value });
    }
    Ok(())
}

/// Errors from settings validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("resolution must be between 1 and {max}, got {value}")]
    ResolutionOutOfRange { value: i64, max: i64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("union composition needs a positive baseThickness")]
    UnionWithoutBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn zero_resolution_rejected() {
        let settings = Settings {
            resolution: 0,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ResolutionOutOfRange {
                value: 0,
                max: MAX_RESOLUTION
            })
        );
    }

    #[test]
    fn negative_spacing_rejected() {
        let settings = Settings {
            spacing: -0.1,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Negative { field: "spacing", .. })
        ));
    }

    #[test]
    fn nan_height_rejected() {
        let settings = Settings {
            max_height: f64::NAN,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NotFinite { field: "maxHeight" })
        );
    }

    #[test]
    fn union_needs_base() {
        let settings = Settings {
            composition: CompositionMode::Union,
            base_thickness: 0.0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::UnionWithoutBase));
    }

    #[test]
    fn rows_follow_aspect_ratio() {
        let mut settings = Settings {
            resolution: 100,
            ..Settings::default()
        };
        assert_eq!(settings.rows_for(400, 200), 100);
        settings.preserve_aspect = true;
        assert_eq!(settings.rows_for(400, 200), 50);
        assert_eq!(settings.rows_for(1000, 1), 1);
    }

    #[test]
    fn tall_images_keep_rows_bounded() {
        let settings = Settings {
            resolution: MAX_RESOLUTION,
            preserve_aspect: true,
            ..Settings::default()
        };
        let rows = settings.rows_for(1, 100_000);
        assert_eq!(rows as i64, MAX_RESOLUTION);
        let cells = settings.columns() as u64 * rows as u64;
        assert!(cells <= (MAX_RESOLUTION * MAX_RESOLUTION) as u64);
    }

    #[test]
    fn edge_margin_defaults_with_aspect() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_edge_margin(), 0);
        settings.preserve_aspect = true;
        assert_eq!(settings.effective_edge_margin(), 1);
        settings.edge_margin = Some(3);
        assert_eq!(settings.effective_edge_margin(), 3);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{"maxHeight": 12.5, "resolution": 80, "shape": "hexagon"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.max_height, 12.5);
        assert_eq!(settings.resolution, 80);
        assert_eq!(settings.shape, ShapeKind::Hexagon);
        assert_eq!(settings.spacing, 0.5);
        assert_eq!(settings.composition, CompositionMode::Difference);
    }
}
