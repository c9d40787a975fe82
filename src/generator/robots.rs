//! robots.txt generation.

use super::sitemap::SITEMAP_FILE;
use crate::{Content, Context, Page, SitemapPriority};
use async_trait::async_trait;

/// Output file name
pub const ROBOTS_FILE: &str = "robots.txt";

/// `robots.txt` allowing every crawler and pointing at the sitemap.
#[derive(Debug, Clone, Copy, Default)]
pub struct RobotsPage;

#[async_trait]
impl<C: Content> Page<C> for RobotsPage {
    fn path(&self) -> &str {
        ""
    }

    fn file_name(&self) -> &str {
        ROBOTS_FILE
    }

    fn priority(&self) -> SitemapPriority {
        SitemapPriority::Hidden
    }

    async fn render(&self, context: &Context<C>) -> anyhow::Result<String> {
        let sitemap = context.site().url_for(SITEMAP_FILE);
        Ok(format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap}\n"))
    }
}
