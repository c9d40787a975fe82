//! Sitemap generation.
//!
//! Turns the locations recorded by the context into a sitemap.xml file.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{Content, Context, Location, Page, SitemapPriority, config::Site};
use async_trait::async_trait;
use quick_xml::escape::escape;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Output file name
pub const SITEMAP_FILE: &str = "sitemap.xml";

// ============================================================================
// Page
// ============================================================================

/// `sitemap.xml` at the site root.
///
/// Only lists pages written before it, so render it last. The sitemap
/// itself is hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct SitemapPage;

#[async_trait]
impl<C: Content> Page<C> for SitemapPage {
    fn path(&self) -> &str {
        ""
    }

    fn file_name(&self) -> &str {
        SITEMAP_FILE
    }

    fn priority(&self) -> SitemapPriority {
        SitemapPriority::Hidden
    }

    async fn render(&self, context: &Context<C>) -> anyhow::Result<String> {
        Ok(into_xml(context.site(), context.site_map().as_slice()))
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn into_xml(site: &Site, locations: &[Location]) -> String {
    let mut xml = String::with_capacity(128 + locations.len() * 96);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for location in locations {
        let loc = site.url_for(&location.path);
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(loc.as_str())));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", location.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::DEFAULT_FILE_NAME;
    use async_trait::async_trait;
    use std::fs;

    struct Nothing;

    impl Content for Nothing {
        fn path(&self) -> &str {
            ""
        }
    }

    struct Plain(&'static str, SitemapPriority);

    #[async_trait]
    impl Page<Nothing> for Plain {
        fn path(&self) -> &str {
            self.0
        }

        fn priority(&self) -> SitemapPriority {
            self.1
        }

        async fn render(&self, _context: &Context<Nothing>) -> anyhow::Result<String> {
            Ok(String::from("<html></html>"))
        }
    }

    fn site() -> Site {
        Site::new("Example", "https://example.com/")
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = into_xml(&site(), &[]);

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_entries_in_order() {
        let locations = [
            Location::new("", 1.0),
            Location::new("/blog/post-1", 0.5),
            Location::new("/feed.xml", 0.4),
        ];
        let xml = into_xml(&site(), &locations);

        let root = xml.find("<loc>https://example.com/</loc>").unwrap();
        let post = xml.find("<loc>https://example.com/blog/post-1</loc>").unwrap();
        let feed = xml.find("<loc>https://example.com/feed.xml</loc>").unwrap();
        assert!(root < post && post < feed);
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.4</priority>"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = into_xml(&site(), &[Location::new("/a&b", 0.5)]);
        assert!(xml.contains("<loc>https://example.com/a%26b</loc>"));

        let site = Site::new("Example", "https://example.com/?q=a&b");
        let xml = into_xml(&site, &[Location::new("", 0.5)]);
        assert!(xml.contains("<loc>https://example.com/?q=a&amp;b/</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = into_xml(&site(), &[Location::new("", 0.5)]);

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().map(|line| line.trim()), Some("</urlset>"));
    }

    #[tokio::test]
    async fn test_sitemap_page_lists_written_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx: Context<Nothing> = Context::new(site(), dir.path(), "output");

        ctx.generate_static_pages(vec![
            Box::new(Plain("", SitemapPriority::Highest)),
            Box::new(Plain("/hidden", SitemapPriority::Hidden)),
            Box::new(Plain("/about", SitemapPriority::Default)),
        ])
        .await
        .unwrap();
        ctx.generate_static_pages(vec![Box::new(SitemapPage)])
            .await
            .unwrap();

        let xml = fs::read_to_string(ctx.build_directory().join(SITEMAP_FILE)).unwrap();
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(!xml.contains("hidden"));
        assert!(!xml.contains(SITEMAP_FILE));
        assert_eq!(ctx.site_map().len(), 2);
        assert!(ctx.build_directory().join(DEFAULT_FILE_NAME).is_file());
    }
}
