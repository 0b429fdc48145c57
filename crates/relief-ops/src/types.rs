use csg_script::ScriptError;
use relief_format::WriteError;
use relief_types::SettingsError;

/// Errors from the image-to-relief conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReliefError {
    /// Input image is missing, unreadable or corrupt.
    #[error("image load error: {0}")]
    ImageLoad(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    /// Script could not be rendered or written.
    #[error("geometry serialization error: {0}")]
    GeometrySerialization(String),
}

impl From<ScriptError> for ReliefError {
    fn from(e: ScriptError) -> Self {
        ReliefError::GeometrySerialization(e.to_string())
    }
}

impl From<WriteError> for ReliefError {
    fn from(e: WriteError) -> Self {
        ReliefError::GeometrySerialization(e.to_string())
    }
}
