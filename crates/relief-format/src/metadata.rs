use chrono::{DateTime, Utc};
use relief_types::Settings;
use serde::{Deserialize, Serialize};

/// Metadata stored alongside the settings in a preset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetMetadata {
    /// Human-readable preset name.
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl PresetMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }
}

/// Comment block written above a generated script.
#[derive(Debug, Clone)]
pub struct ScriptHeader {
    /// Tool name and version.
    pub generator: String,
    pub created: DateTime<Utc>,
    /// Settings the script was generated with, if known.
    pub settings: Option<Settings>,
}

impl ScriptHeader {
    pub fn new(generator: impl Into<String>, settings: Option<Settings>) -> Self {
        Self {
            generator: generator.into(),
            created: Utc::now(),
            settings,
        }
    }
}
