//! `[site]` section configuration.
//!
//! Describes the site being generated: name, author, language and base URL.
//! The descriptor is read-only for the whole generation run.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in site.toml - the site descriptor.
///
/// # Example
/// ```toml
/// [site]
/// name = "Example"
/// description = "An example site"
/// author = "Alice"
/// language = "en"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Site {
    /// Name of the site, used for titles and feeds.
    pub name: String,

    /// Optional description for feeds and meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Author of the site.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// BCP 47 language tag (e.g., "en", "en-US").
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Base URL of the published site, e.g. `https://example.com`.
    pub url: String,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Base URL without trailing slashes, ready for joining paths.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Absolute URL for a path in the output tree.
    ///
    /// Each path segment is percent-encoded; `/` separators are kept.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let encoded = urlencoding::encode(path).into_owned().replace("%2F", "/");
        format!("{}/{}", self.base_url(), encoded)
    }
}
