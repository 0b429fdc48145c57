use std::fs;
use std::path::Path;

use relief_ops::{convert_file, ReliefError};
use relief_types::{Settings, SettingsError};
use tracing::{info, warn};

use crate::messages::UploadResponse;
use crate::scratch::ScratchDir;

/// Name the uploaded image is saved under inside the scratch directory.
pub const INPUT_FILE_NAME: &str = "input_image";
pub const OUTPUT_DIR_NAME: &str = "output";

/// Errors raised while serving an upload.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed settings: {0}")]
    SettingsJson(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    #[error(transparent)]
    Relief(#[from] ReliefError),

    #[error("{context}: {reason}")]
    Io {
        context: &'static str,
        reason: String,
    },
}

/// Parse and validate the settings form field. An empty field means defaults.
pub fn parse_settings(json: &str) -> Result<Settings, BridgeError> {
    let settings: Settings = if json.trim().is_empty() {
        Settings::default()
    } else {
        serde_json::from_str(json).map_err(|e| BridgeError::SettingsJson(e.to_string()))?
    };
    settings.validate()?;
    Ok(settings)
}

/// Convert an upload, using the system temp dir for scratch space.
pub fn process_upload(image_bytes: &[u8], settings_json: &str) -> UploadResponse {
    process_upload_in(&std::env::temp_dir(), image_bytes, settings_json)
}

/// Convert an upload with scratch space under `scratch_root`.
///
/// Every failure becomes a `500` response whose JSON body carries the error text.
pub fn process_upload_in(
    scratch_root: &Path,
    image_bytes: &[u8],
    settings_json: &str,
) -> UploadResponse {
    match handle_upload(scratch_root, image_bytes, settings_json) {
        Ok(script) => {
            info!(bytes = script.len(), "upload converted");
            UploadResponse::script(script)
        }
        Err(e) => {
            warn!(error = %e, "upload failed");
            UploadResponse::error(e.to_string())
        }
    }
}

fn handle_upload(
    scratch_root: &Path,
    image_bytes: &[u8],
    settings_json: &str,
) -> Result<Vec<u8>, BridgeError> {
    let settings = parse_settings(settings_json)?;
    let scratch = ScratchDir::create_in(scratch_root).map_err(io("creating scratch dir"))?;

    let input = scratch.path().join(INPUT_FILE_NAME);
    fs::write(&input, image_bytes).map_err(io("saving upload"))?;

    let output = convert_file(&input, &scratch.path().join(OUTPUT_DIR_NAME), &settings)?;
    let script = fs::read(&output).map_err(io("reading script"))?;
    Ok(script)
}

fn io(context: &'static str) -> impl Fn(std::io::Error) -> BridgeError {
    move |e| BridgeError::Io {
        context,
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_types::ShapeKind;

    #[test]
    fn empty_settings_mean_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
        assert_eq!(parse_settings("  {} ").unwrap(), Settings::default());
    }

    #[test]
    fn settings_fields_parsed() {
        let settings =
            parse_settings(r#"{"resolution": 10, "shape": "hollowCylinder"}"#).unwrap();
        assert_eq!(settings.resolution, 10);
        assert_eq!(settings.shape, ShapeKind::HollowCylinder);
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            parse_settings("{resolution: "),
            Err(BridgeError::SettingsJson(_))
        ));
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            parse_settings(r#"{"resolution": 0}"#),
            Err(BridgeError::InvalidSettings(SettingsError::ResolutionOutOfRange { .. }))
        ));
    }
}
