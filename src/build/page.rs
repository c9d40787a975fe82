//! Page model and providers.

use super::{Content, Context, SitemapPriority};
use async_trait::async_trait;

/// File name used when a page does not ask for another one.
pub const DEFAULT_FILE_NAME: &str = "index.html";

/// A single renderable page of the site.
///
/// # Example
///
/// ```ignore
/// struct HomePage;
///
/// #[async_trait]
/// impl Page<SiteContent> for HomePage {
///     fn path(&self) -> &str {
///         ""
///     }
///
///     async fn render(&self, context: &Context<SiteContent>) -> anyhow::Result<String> {
///         Ok(format!("<h1>{}</h1>", context.site().name))
///     }
/// }
/// ```
#[async_trait]
pub trait Page<C: Content>: Send + Sync {
    /// Directory of the page inside the output folder, like `/blog/today`.
    fn path(&self) -> &str;

    /// Name of the written file. Override for feeds, sitemaps, robots, ...
    fn file_name(&self) -> &str {
        DEFAULT_FILE_NAME
    }

    fn priority(&self) -> SitemapPriority {
        SitemapPriority::Default
    }

    async fn render(&self, context: &Context<C>) -> anyhow::Result<String>;
}

/// Reads loaded content from the context to create pages.
#[async_trait]
pub trait PageProvider<C: Content>: Send + Sync {
    async fn source(&self, context: &Context<C>) -> anyhow::Result<Vec<Box<dyn Page<C>>>>;
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Non-empty segments of a page path: `"/blog//post-1/"` → `["blog", "post-1"]`.
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Sitemap path of a page relative to the build directory.
///
/// Index pages are addressed by their directory, any other file by its
/// full path.
///
/// | page path       | file name    | sitemap path             |
/// |-----------------|--------------|--------------------------|
/// | `""`            | `index.html` | `""`                     |
/// | `/blog/post-1`  | `index.html` | `/blog/post-1`           |
/// | `/blog/post-1`  | `feed.xml`   | `/blog/post-1/feed.xml`  |
pub(crate) fn sitemap_path(path: &str, file_name: &str) -> String {
    let directory: String = path_segments(path)
        .flat_map(|segment| ["/", segment])
        .collect();

    if file_name == DEFAULT_FILE_NAME {
        directory
    } else {
        format!("{directory}/{file_name}")
    }
}
