use relief_types::Settings;
use serde::Serialize;

use crate::errors::WriteError;
use crate::metadata::PresetMetadata;

/// Format identifier written into every preset file.
pub const FORMAT_ID: &str = "relief-preset";

/// Current preset format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level preset file structure.
#[derive(Debug, Clone, Serialize)]
pub struct PresetFile<'a> {
    pub format: &'a str,
    pub version: u32,
    pub preset: &'a PresetMetadata,
    pub settings: &'a Settings,
}

/// Serialize a settings preset to a pretty-printed JSON string.
pub fn save_preset(settings: &Settings, metadata: &PresetMetadata) -> Result<String, WriteError> {
    let file = PresetFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        preset: metadata,
        settings,
    };
    serde_json::to_string_pretty(&file).map_err(|e| WriteError::Serialize(e.to_string()))
}
