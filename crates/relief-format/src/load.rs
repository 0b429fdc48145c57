use relief_types::Settings;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::PresetMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// Oldest preset version that can be read.
pub const MIN_FORMAT_VERSION: u32 = 1;

/// The top-level preset structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetFileRaw {
    pub format: String,
    pub version: u32,
    pub preset: PresetMetadata,
    pub settings: Settings,
}

/// Deserialize a preset from a JSON string.
///
/// Validates the format identifier, the version and the settings ranges.
pub fn load_preset(json: &str) -> Result<(Settings, PresetMetadata), LoadError> {
    let raw: PresetFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    if raw.version < MIN_FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            version: raw.version,
            min: MIN_FORMAT_VERSION,
        });
    }

    raw.settings.validate()?;
    Ok((raw.settings, raw.preset))
}
