//! Build pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the build context itself.
///
/// Errors returned by user loaders, providers and pages are never wrapped
/// in this type; they travel through `anyhow::Error` untouched.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("duplicate content with the same path: `{0}`")]
    DuplicateContentPath(String),

    #[error("failed to create build directory `{}`", .0.display())]
    BuildDirectoryCreationFailed(PathBuf, #[source] std::io::Error),

    #[error("failed to write build file `{}`", .0.display())]
    BuildFileWriteFailed(PathBuf, #[source] std::io::Error),

    #[error("could not find a package directory starting from `{}`", .0.display())]
    MissingPackageDirectory(PathBuf),

    #[error("IO error at `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}
