//! Site initialization module.
//!
//! Creates a new site structure with default configuration.

use anyhow::{Context, Result, bail};
use scriptorium::{
    Site, SiteConfig,
    build::dirs::{ASSETS_DIR, CONTENT_DIR},
    log,
};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// First post of a fresh site
const HELLO_WORLD: &str = "\
# Hello World

Welcome to your new site. Every markdown file in `Content/` becomes a post,
the first `# heading` is its title.
";

/// Create a new site at `root` with default structure
pub fn new_site(root: &Path, config_file: &Path) -> Result<()> {
    let config_path = root.join(config_file);
    if config_path.exists() {
        bail!("Config file already exists. Remove it manually or init in a different path.");
    }

    init_site_structure(root)?;
    init_default_config(root, &config_path)?;
    init_ignored_files(root, &[Path::new("/output")])?;

    log!("init"; "new site at {}", root.display());
    Ok(())
}

/// Write default configuration file
fn init_default_config(root: &Path, config_path: &Path) -> Result<()> {
    let name = root
        .canonicalize()
        .ok()
        .and_then(|root| root.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| String::from("My Site"));

    let config = SiteConfig {
        site: Site::new(name, "https://example.com"),
        ..SiteConfig::default()
    };
    fs::write(config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in [CONTENT_DIR, ASSETS_DIR] {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    let post = root.join(CONTENT_DIR).join("hello-world.md");
    if !post.exists() {
        fs::write(&post, HELLO_WORLD)
            .with_context(|| format!("Failed to write {}", post.display()))?;
    }
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
