//! Path helpers for turning files into site paths.

use std::path::{Component, Path};

/// `/`-joined path of `path` below `base`, without a leading slash.
///
/// Returns `None` when `path` does not live under `base`.
///
/// `relative_path("/site/Content/blog/a.md", "/site/Content")` → `"blog/a.md"`
pub fn relative_path(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;

    let segments: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect();

    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/site/Content/blog/a.md"), Path::new("/site/Content")).as_deref(),
            Some("blog/a.md")
        );
    }

    #[test]
    fn test_relative_path_same_dir() {
        assert_eq!(
            relative_path(Path::new("/site/Content"), Path::new("/site/Content")).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_relative_path_outside_base() {
        assert_eq!(relative_path(Path::new("/elsewhere/a.md"), Path::new("/site")), None);
    }
}
