//! `[build]` section configuration.
//!
//! Contains build settings: output directory, cleaning, assets, reading speed.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in site.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "output"        # Build directory, relative to the root
/// clean = true             # Clear the build directory first
/// assets = true            # Copy the Assets directory
/// words_per_minute = 250   # Reading speed for reading-time estimates
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output directory, relative to the project root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Clear the build directory before generating.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub clean: bool,

    /// Copy the `Assets` directory into the build directory.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub assets: bool,

    /// Reading speed used for reading-time estimates.
    #[serde(default = "defaults::build::words_per_minute")]
    #[educe(Default = defaults::build::words_per_minute())]
    pub words_per_minute: u32,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    const SITE: &str = r#"
        [site]
        name = "Test"
        url = "https://example.com"
    "#;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str(SITE).unwrap();

        assert_eq!(config.build.output, PathBuf::from("output"));
        assert!(config.build.clean);
        assert!(config.build.assets);
        assert_eq!(config.build.words_per_minute, 250);
    }

    #[test]
    fn test_build_config_custom() {
        let config = format!(
            r#"{SITE}
            [build]
            output = "public"
            clean = false
            assets = false
            words_per_minute = 180
            "#
        );
        let config: SiteConfig = toml::from_str(&config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
        assert!(!config.build.assets);
        assert_eq!(config.build.words_per_minute, 180);
    }

    #[test]
    fn test_build_config_unknown_field() {
        let config = format!(
            r#"{SITE}
            [build]
            minify = true
            "#
        );
        let result: Result<SiteConfig, _> = toml::from_str(&config);
        assert!(result.is_err());
    }
}
