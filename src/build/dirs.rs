//! Project root discovery.
//!
//! The root is the nearest directory holding a package manifest, searched
//! upward from a known path first and from the working directory second.

use super::BuildError;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Manifest file marking a project root.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Directory with user assets, relative to the root.
pub const ASSETS_DIR: &str = "Assets";

/// Directory with user content, relative to the root.
pub const CONTENT_DIR: &str = "Content";

/// Default build directory, relative to the root.
pub const DEFAULT_BUILD_DIR: &str = "output";

/// Locate the project root starting from `start` (a file or a directory).
pub fn select_root(start: &Path) -> Result<PathBuf, BuildError> {
    select_root_with(start, env::current_dir().ok().as_deref())
}

fn select_root_with(start: &Path, fallback: Option<&Path>) -> Result<PathBuf, BuildError> {
    let absolute = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());

    find_manifest_dir(&absolute)
        .or_else(|| fallback.and_then(find_manifest_dir))
        .ok_or_else(|| BuildError::MissingPackageDirectory(start.to_path_buf()))
}

fn find_manifest_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
}
