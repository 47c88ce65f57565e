use crate::Result;
use std::path::{Path, PathBuf};

/// Browser user-data directory for one scrape run
///
/// A temporary profile is removed when the manager is dropped, so a run never
/// inherits cookies from an earlier one. A persistent profile is left in place.
pub struct ProfileManager {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileManager {
    pub fn temporary() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("jobscout-profile-")
            .tempdir()?
            .keep();

        tracing::debug!("Created temporary profile at {}", path.display());

        Ok(Self {
            path,
            is_temporary: true,
        })
    }

    pub fn persistent(path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&path)?;

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                tracing::debug!("Failed to remove profile {}: {}", self.path.display(), e);
            }
        }
    }
}
