use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

/// Per-request working directory, removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create `relief-<uuid>` under `root`.
    pub fn create_in(root: &Path) -> std::io::Result<Self> {
        let path = root.join(format!("relief-{}", Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        debug!(path = %path.display(), "created scratch dir");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove scratch dir");
        }
    }
}
