use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::WriteError;
use crate::metadata::ScriptHeader;

/// Prefix the script body with the header comment block.
pub fn render_script_file(header: &ScriptHeader, body: &str) -> Result<String, WriteError> {
    let mut out = String::with_capacity(body.len() + 256);
    out.push_str(&format!("// Generated by {}\n", header.generator));
    out.push_str(&format!(
        "// Created: {}\n",
        header.created.format("%Y-%m-%dT%H:%M:%SZ")
    ));
    if let Some(settings) = &header.settings {
        let json =
            serde_json::to_string(settings).map_err(|e| WriteError::Serialize(e.to_string()))?;
        out.push_str(&format!("// Settings: {}\n", json));
    }
    out.push('\n');
    out.push_str(body);
    Ok(out)
}

/// Write a script with its header to `path` and return the path.
pub fn write_script(
    path: impl AsRef<Path>,
    header: &ScriptHeader,
    body: &str,
) -> Result<PathBuf, WriteError> {
    let path = path.as_ref();
    let text = render_script_file(header, body)?;
    fs::write(path, &text).map_err(|e| WriteError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), bytes = text.len(), "wrote script");
    Ok(path.to_path_buf())
}
