use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Binary names tried on PATH when no well-known install location matches
const PATH_CANDIDATES: [&str; 4] = ["google-chrome", "chromium", "chromium-browser", "chrome"];

/// Locates a Chrome or Chromium binary to drive
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Resolve the browser binary
    ///
    /// An explicit path is authoritative: if it is unusable the search stops
    /// there. Otherwise install locations are checked before PATH.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return validate_binary(path);
        }

        for path in Self::install_locations() {
            if let Ok(found) = validate_binary(&path) {
                tracing::debug!("Using Chrome at install location {}", found.display());
                return Ok(found);
            }
        }

        for name in PATH_CANDIDATES {
            if let Ok(found) = which::which(name) {
                tracing::debug!("Using Chrome from PATH: {}", found.display());
                return Ok(found);
            }
        }

        Err(Error::Browser(format!(
            "Chrome not found. Checked: {} and PATH ({}). Use --chrome-path to specify location.",
            Self::install_locations()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            PATH_CANDIDATES.join(", ")
        )))
    }

    fn install_locations() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return vec![];
    }
}

fn validate_binary(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::Browser(format!(
            "Chrome not found at: {}",
            path.display()
        )));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)?.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_executable_is_used() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let found = ChromeFinder::new(Some(path.to_path_buf())).find().unwrap();

        assert_eq!(found, path);
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_back() {
        let result = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome"))).find();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("not found"));
        assert!(err.contains("/nonexistent/chrome"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let result = ChromeFinder::new(Some(temp.path().to_path_buf())).find();

        assert!(result.unwrap_err().to_string().contains("not executable"));
    }
}
