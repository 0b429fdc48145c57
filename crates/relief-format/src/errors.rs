/// Errors during preset file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("file version {version} is older than the first supported version {min}")]
    UnsupportedVersion { version: u32, min: u32 },

    #[error("preset contains invalid settings: {0}")]
    InvalidSettings(#[from] relief_types::SettingsError),
}

/// Errors while writing scripts or presets.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WriteError {
    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to serialize: {0}")]
    Serialize(String),
}
