//! Scriptorium - a minimal static site generation toolkit.
//!
//! A site is described by three kinds of user types:
//!
//! - [`ContentLoader`]: produces content items (blog posts, notes, ...)
//! - [`PageProvider`]: turns loaded content into pages
//! - [`Page`]: renders one output file
//!
//! A driver owns a [`Context`] and runs the pipeline steps in order. Every
//! written page is recorded in the [`SiteMap`] unless it is
//! [`SitemapPriority::Hidden`].
//!
//! ```ignore
//! let mut context = Context::new(site, root, "output");
//! context.clear_build_folder()?;
//! context.copy_assets()?;
//! context.load_content(vec![Box::new(BlogLoader)]).await?;
//! context.generate_static_pages(vec![Box::new(HomePage)]).await?;
//! context.generate_content_pages(vec![Box::new(BlogPostProvider)]).await?;
//! context.generate_static_pages(vec![Box::new(SitemapPage)]).await?;
//! context.check_warnings();
//! ```

pub mod build;
pub mod config;
pub mod generator;
pub mod logger;
pub mod utils;

pub use build::{
    BuildError, Content, ContentKind, ContentLoader, Context, Location, Page, PageProvider,
    SiteMap, SitemapPriority,
};
pub use config::{Site, SiteConfig};
