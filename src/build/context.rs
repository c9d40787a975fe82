//! The build context: shared state of one generation run.
//!
//! The driver owns the [`Context`] and calls the pipeline steps on it in
//! whatever order it likes. Loaders, providers and pages only ever get a
//! shared reference; every mutation goes through the driver.
//!
//! # Pipeline
//!
//! ```text
//! clear_build_folder()      remove + recreate <root>/<build>
//! copy_assets()             <root>/Assets/* → <root>/<build>/*
//! load_content(loaders)     loader₁ → loader₂ → …   (path-unique content)
//! generate_static_pages()   page₁ → page₂ → …       (render → write → sitemap)
//! generate_content_pages()  provider₁ → its pages → provider₂ → …
//! check_warnings()
//! ```

use super::{
    BuildError, Content, ContentKind, ContentLoader, Location, Page, PageProvider, SiteMap,
    SitemapPriority,
    dirs::{self, ASSETS_DIR, CONTENT_DIR},
    page::{path_segments, sitemap_path},
};
use crate::{
    config::{Site, SiteConfig},
    log,
};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Shared, mutable state of a single generation run.
pub struct Context<C> {
    /// The site currently being built.
    site: Site,

    /// Root directory of the site project.
    root_directory: PathBuf,

    /// Directory containing custom assets.
    assets_directory: PathBuf,

    /// Directory containing content sources.
    content_directory: PathBuf,

    /// Directory receiving the built site.
    build_directory: PathBuf,

    /// Warnings issued during the build.
    warnings: Vec<String>,

    /// Every loaded content item, in load order.
    all_content: Vec<C>,

    /// Every written location, in write order.
    site_map: SiteMap,
}

impl<C: Content> Context<C> {
    /// Create a context rooted at `root`, building into `root/build_directory_path`.
    pub fn new(
        site: Site,
        root: impl Into<PathBuf>,
        build_directory_path: impl AsRef<Path>,
    ) -> Self {
        let root_directory = root.into();
        Self {
            site,
            assets_directory: root_directory.join(ASSETS_DIR),
            content_directory: root_directory.join(CONTENT_DIR),
            build_directory: root_directory.join(build_directory_path),
            root_directory,
            warnings: Vec::new(),
            all_content: Vec::new(),
            site_map: SiteMap::default(),
        }
    }

    /// Create a context whose root is found by walking upward from `start`
    /// until a package manifest shows up.
    pub fn discover(
        site: Site,
        start: &Path,
        build_directory_path: impl AsRef<Path>,
    ) -> Result<Self, BuildError> {
        let root = dirs::select_root(start)?;
        Ok(Self::new(site, root, build_directory_path))
    }

    /// Create a context from a loaded `site.toml`.
    pub fn from_config(config: &SiteConfig, root: impl Into<PathBuf>) -> Self {
        Self::new(config.site.clone(), root, &config.build.output)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn assets_directory(&self) -> &Path {
        &self.assets_directory
    }

    pub fn content_directory(&self) -> &Path {
        &self.content_directory
    }

    pub fn build_directory(&self) -> &Path {
        &self.build_directory
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn all_content(&self) -> &[C] {
        &self.all_content
    }

    pub fn site_map(&self) -> &SiteMap {
        &self.site_map
    }

    /// All loaded content of kind `T`, in load order.
    pub fn content<T: ContentKind<C>>(&self) -> Vec<&T> {
        self.all_content.iter().filter_map(T::from_content).collect()
    }

    /// Output directory for a path in the site tree.
    pub fn output_directory(&self, path: &str) -> PathBuf {
        path_segments(path).fold(self.build_directory.clone(), |dir, segment| {
            dir.join(segment)
        })
    }

    fn has_content(&self, path: &str) -> bool {
        self.all_content.iter().any(|content| content.path() == path)
    }

    // ========================================================================
    // Housekeeping
    // ========================================================================

    pub fn report_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Print the collected warnings, if any.
    pub fn check_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        log!("warn"; "completed with {} warnings:", self.warnings.len());
        for warning in &self.warnings {
            log!("warn"; "- {warning}");
        }
    }

    /// Remove everything in the build directory and recreate it.
    ///
    /// A build directory that cannot be removed is only logged; the
    /// recreation must succeed though.
    pub fn clear_build_folder(&mut self) -> Result<(), BuildError> {
        let build = &self.build_directory;

        if let Err(err) = fs::remove_dir_all(build)
            && err.kind() != ErrorKind::NotFound
        {
            log!("clean"; "could not remove {} ({err}), recreating anyway", build.display());
        }

        fs::create_dir_all(build)
            .map_err(|err| BuildError::BuildDirectoryCreationFailed(build.clone(), err))
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Run every loader in order and store what they return.
    ///
    /// Fails on the first item whose path is already taken; that item and
    /// everything after it is dropped.
    pub async fn load_content(
        &mut self,
        loaders: Vec<Box<dyn ContentLoader<C>>>,
    ) -> anyhow::Result<()> {
        for loader in &loaders {
            let loaded = loader.load(self).await?;

            for content in loaded {
                if self.has_content(content.path()) {
                    return Err(BuildError::DuplicateContentPath(content.path().to_owned()).into());
                }
                self.all_content.push(content);
            }
        }

        log!("content"; "{} items loaded", self.all_content.len());
        Ok(())
    }

    /// Edit the content of kind `T` at `path` in place.
    ///
    /// Returns `Ok(false)` without touching anything when no content of
    /// that kind lives at `path`. An edit that would move the content onto
    /// another item's path is rejected and discarded.
    pub fn mutate_content<T>(
        &mut self,
        path: &str,
        mutate: impl FnOnce(&mut T),
    ) -> Result<bool, BuildError>
    where
        T: ContentKind<C> + Clone,
    {
        let Some(index) = self.all_content.iter().position(|c| c.path() == path) else {
            return Ok(false);
        };
        let Some(mut updated) = T::from_content(&self.all_content[index]).cloned() else {
            return Ok(false);
        };

        mutate(&mut updated);

        let new_path = updated.path();
        if new_path != path
            && self
                .all_content
                .iter()
                .enumerate()
                .any(|(i, content)| i != index && content.path() == new_path)
        {
            return Err(BuildError::DuplicateContentPath(new_path.to_owned()));
        }

        if let Some(slot) = T::from_content_mut(&mut self.all_content[index]) {
            *slot = updated;
        }
        Ok(true)
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// Render pages one after another into the build directory.
    pub async fn generate_static_pages(
        &mut self,
        pages: Vec<Box<dyn Page<C>>>,
    ) -> anyhow::Result<()> {
        let count = pages.len();
        for page in &pages {
            self.render(page.as_ref()).await?;
        }

        log!("pages"; "{count} pages rendered");
        Ok(())
    }

    /// Run each provider and render its pages before moving to the next one.
    pub async fn generate_content_pages(
        &mut self,
        providers: Vec<Box<dyn PageProvider<C>>>,
    ) -> anyhow::Result<()> {
        for provider in &providers {
            let pages = provider.source(self).await?;
            self.generate_static_pages(pages).await?;
        }
        Ok(())
    }

    async fn render(&mut self, page: &dyn Page<C>) -> anyhow::Result<()> {
        let output = page.render(self).await?;
        self.write(&output, page.path(), page.file_name(), page.priority())
            .await?;
        Ok(())
    }

    /// Write rendered output and record it in the sitemap.
    ///
    /// The sitemap is checked before the file is touched, so a page
    /// colliding with an earlier one never reaches the disk.
    async fn write(
        &mut self,
        output: &str,
        path: &str,
        file_name: &str,
        priority: SitemapPriority,
    ) -> Result<(), BuildError> {
        let directory = self.output_directory(path);
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|err| BuildError::BuildDirectoryCreationFailed(directory.clone(), err))?;

        let site_map_path = sitemap_path(path, file_name);
        if self.site_map.contains(&site_map_path) {
            return Err(BuildError::DuplicateContentPath(site_map_path));
        }

        let output_file = directory.join(file_name);
        tokio::fs::write(&output_file, output)
            .await
            .map_err(|err| BuildError::BuildFileWriteFailed(output_file, err))?;

        if let Some(value) = priority.value() {
            self.site_map.push(Location::new(site_map_path, value));
        }
        Ok(())
    }
}
