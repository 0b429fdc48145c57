//! Calibration plates: one script per intensity level, each with a single
//! hole whose depth follows the level. Printing the set shows how much light
//! each depth lets through.

use std::fs;
use std::path::{Path, PathBuf};

use csg_script::{to_scad, RenderQuality, Solid};
use relief_format::{write_script, ScriptHeader};
use relief_types::SettingsError;
use tracing::info;

use crate::pipeline::GENERATOR;
use crate::tiler::{CYLINDER_FACETS, OVERSHOOT};
use crate::types::ReliefError;

/// Number of intensity levels in a calibration set.
pub const CALIBRATION_LEVELS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationSettings {
    /// Edge length of the square plate in mm.
    pub block_size: f64,
    /// Largest hole depth in mm. The plate is twice as thick.
    pub base_height: f64,
    pub cylinder_radius: f64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            block_size: 20.0,
            base_height: 1.0,
            cylinder_radius: 1.0,
        }
    }
}

impl CalibrationSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("blockSize", self.block_size),
            ("baseHeight", self.base_height),
            ("cylinderRadius", self.cylinder_radius),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn plate_thickness(&self) -> f64 {
        2.0 * self.base_height
    }
}

/// Carved depth for intensity `level`.
pub fn calibration_depth(level: u8, cal: &CalibrationSettings) -> f64 {
    level as f64 / 255.0 * cal.base_height
}

/// Plate for one intensity level.
pub fn calibration_solid(level: u8, cal: &CalibrationSettings) -> Solid {
    let t = cal.plate_thickness();
    let plate = Solid::cuboid([cal.block_size, cal.block_size, t]);
    if level == 0 {
        return plate;
    }
    let depth = calibration_depth(level, cal);
    let c = cal.block_size / 2.0;
    let hole =
        Solid::cylinder_with_segments(cal.cylinder_radius, depth + OVERSHOOT, CYLINDER_FACETS)
            .translate([c, c, t - depth]);
    Solid::difference(plate, [hole])
}

/// Every calibration plate, named `cylinder_{level}`.
pub fn calibration_solids(
    cal: &CalibrationSettings,
) -> Result<Vec<(String, Solid)>, ReliefError> {
    cal.validate()?;
    Ok((0..=u8::MAX)
        .map(|level| (format!("cylinder_{}", level), calibration_solid(level, cal)))
        .collect())
}

/// Write `cylinder_{level}.scad` for every level into `dir`.
pub fn write_calibration_set(
    dir: &Path,
    cal: &CalibrationSettings,
) -> Result<Vec<PathBuf>, ReliefError> {
    let solids = calibration_solids(cal)?;
    fs::create_dir_all(dir)
        .map_err(|e| ReliefError::GeometrySerialization(format!("{}: {}", dir.display(), e)))?;
    let quality = RenderQuality::fixed(CYLINDER_FACETS);
    let mut paths = Vec::with_capacity(solids.len());
    for (name, solid) in &solids {
        let body = to_scad(solid, &quality)?;
        let header = ScriptHeader::new(GENERATOR, None);
        paths.push(write_script(dir.join(format!("{}.scad", name)), &header, &body)?);
    }
    info!(dir = %dir.display(), files = paths.len(), "wrote calibration set");
    Ok(paths)
}
