//! Sitemap bookkeeping.
//!
//! Every page written during a run records a [`Location`] unless its
//! priority is [`SitemapPriority::Hidden`]. Insertion order is kept so
//! generated sitemaps diff cleanly between builds.

use std::slice;

/// How important a page is for search engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SitemapPriority {
    /// Priority of 1.0
    Highest,
    /// Priority of 0.5
    #[default]
    Default,
    /// Priority of 0.4
    Low,
    /// Rendered and written, but never listed in the sitemap
    Hidden,
}

impl SitemapPriority {
    /// Numeric weight, `None` for hidden pages.
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Highest => Some(1.0),
            Self::Default => Some(0.5),
            Self::Low => Some(0.4),
            Self::Hidden => None,
        }
    }
}

/// A location that can be written into the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Path relative to the build directory, e.g. `/blog/post-1`.
    pub path: String,
    /// Weight between 0.0 and 1.0.
    pub priority: f64,
}

impl Location {
    pub fn new(path: impl Into<String>, priority: f64) -> Self {
        Self {
            path: path.into(),
            priority,
        }
    }
}

/// Ordered, path-unique list of generated locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteMap {
    locations: Vec<Location>,
}

impl SiteMap {
    pub fn contains(&self, path: &str) -> bool {
        self.locations.iter().any(|location| location.path == path)
    }

    /// Append a location. The caller checks uniqueness first.
    pub(crate) fn push(&mut self, location: Location) {
        debug_assert!(!self.contains(&location.path));
        self.locations.push(location);
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }
}

impl<'a> IntoIterator for &'a SiteMap {
    type Item = &'a Location;
    type IntoIter = slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values() {
        assert_eq!(SitemapPriority::Highest.value(), Some(1.0));
        assert_eq!(SitemapPriority::Default.value(), Some(0.5));
        assert_eq!(SitemapPriority::Low.value(), Some(0.4));
        assert_eq!(SitemapPriority::Hidden.value(), None);
        assert_eq!(SitemapPriority::default(), SitemapPriority::Default);
    }

    #[test]
    fn test_sitemap_keeps_insertion_order() {
        let mut map = SiteMap::default();
        map.push(Location::new("/z", 0.5));
        map.push(Location::new("/a", 1.0));
        map.push(Location::new("", 0.4));

        let paths: Vec<_> = map.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, ["/z", "/a", ""]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_sitemap_contains() {
        let mut map = SiteMap::default();
        assert!(map.is_empty());
        map.push(Location::new("/blog", 0.5));

        assert!(map.contains("/blog"));
        assert!(!map.contains("/blog/"));
        assert!(!map.contains(""));
    }
}
