use std::fmt;
use std::path::{Path, PathBuf};

use super::AppError;

/// Directory next to the entry point that holds the prebuilt editor.
pub const BUILD_DIR: &str = "build";

/// File name of the prebuilt editor executable.
pub const EXECUTABLE_NAME: &str = "WolfEdit";

/// Absolute path of the WolfEdit executable.
///
/// Guarantees:
/// - Always absolute
/// - Always `<anchor>/build/WolfEdit`
///
/// The path is derived lexically; whether a file exists there is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutablePath(PathBuf);

impl ExecutablePath {
    /// Resolve the executable under `anchor_dir`.
    ///
    /// Relative anchors are made absolute against the current directory first.
    pub fn resolve(anchor_dir: &Path) -> Result<Self, AppError> {
        let anchor = std::path::absolute(anchor_dir).map_err(|e| {
            AppError::entry_point_unresolved(format!("{}: {}", anchor_dir.display(), e))
        })?;
        Ok(Self(anchor.join(BUILD_DIR).join(EXECUTABLE_NAME)))
    }

    /// Resolve the executable next to the given entry-point file.
    pub fn from_entry_point(entry_point: &Path) -> Result<Self, AppError> {
        let dir = entry_point.parent().ok_or_else(|| {
            AppError::entry_point_unresolved(format!(
                "'{}' has no parent directory",
                entry_point.display()
            ))
        })?;

        // A bare file name has an empty parent.
        if dir.as_os_str().is_empty() { Self::resolve(Path::new(".")) } else { Self::resolve(dir) }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ExecutablePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ExecutablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
