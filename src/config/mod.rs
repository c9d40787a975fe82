//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                     |
//! |-----------|---------------------------------------------|
//! | `[site]`  | Site descriptor (name, author, url)         |
//! | `[build]` | Build directory, cleaning, assets, reading  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [build]
//! output = "output"
//! clean = true
//! ```

mod build;
pub mod defaults;
mod error;
mod site;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use site::Site;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site descriptor
    pub site: Site,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Serialize back to pretty TOML (used by `init`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("[site.name] must not be empty".into()));
        }
        if self.site.url.trim().is_empty() {
            return Err(ConfigError::Validation("[site.url] must not be empty".into()));
        }
        if self.build.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "[build.words_per_minute] must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
