use std::path::{Path, PathBuf};

/// Default marker file identifying a project root.
pub const DEFAULT_MARKER: &str = "pubspec.yaml";

/// Default subdirectory reported alongside a resolved root.
pub const DEFAULT_SUBDIR: &str = "test";

/// Walk upward from the directory containing `start` until a directory
/// holding `marker` is found.
///
/// Returns `None` once no parent directory remains, so a path with no
/// marker anywhere in its ancestry terminates at the filesystem root.
pub fn find_marker_dir(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut dir = start.parent()?;
    loop {
        if dir.join(marker).exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Resolves the development root reported to the host.
#[derive(Debug, Clone)]
pub struct RootResolver {
    marker: String,
    subdir: String,
}

impl RootResolver {
    pub fn new(marker: impl Into<String>, subdir: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            subdir: subdir.into(),
        }
    }

    /// Marker file name this resolver looks for.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Directory containing the marker file, if any ancestor of `start`
    /// holds one.
    pub fn project_root(&self, start: &Path) -> Option<PathBuf> {
        find_marker_dir(start, &self.marker)
    }

    /// Conventional root reported to the host: the marker directory
    /// joined with the paired subdirectory name.
    pub fn resolve(&self, start: &Path) -> Option<PathBuf> {
        self.project_root(start).map(|root| root.join(&self.subdir))
    }
}

impl Default for RootResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_SUBDIR)
    }
}
