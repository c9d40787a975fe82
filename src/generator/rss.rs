//! RSS feed generation.
//!
//! Builds an RSS 2.0 channel from every loaded content of one kind.

use crate::{
    Content, ContentKind, Context, Page, SitemapPriority,
    utils::{date::to_rfc822, html::make_absolute_links},
};
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};
use std::marker::PhantomData;

/// Output file name
pub const FEED_FILE: &str = "feed.xml";

/// Generator tag written into the channel
const GENERATOR: &str = "scriptorium";

/// Content that can appear in a feed.
pub trait FeedEntry: Content {
    fn title(&self) -> &str;

    /// HTML summary; relative links are made absolute against the entry URL.
    fn summary(&self) -> Option<&str> {
        None
    }

    fn published(&self) -> Option<DateTime<FixedOffset>> {
        None
    }
}

// ============================================================================
// Page
// ============================================================================

/// RSS feed over every content of kind `T`, in load order.
pub struct FeedPage<T> {
    path: String,
    _kind: PhantomData<fn() -> T>,
}

impl<T> FeedPage<T> {
    /// Feed at `/feed.xml`.
    pub fn new() -> Self {
        Self::at("")
    }

    /// Feed inside another directory, e.g. `/blog/feed.xml`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            _kind: PhantomData,
        }
    }
}

impl<T> Default for FeedPage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C, T> Page<C> for FeedPage<T>
where
    C: Content,
    T: ContentKind<C> + FeedEntry,
{
    fn path(&self) -> &str {
        &self.path
    }

    fn file_name(&self) -> &str {
        FEED_FILE
    }

    fn priority(&self) -> SitemapPriority {
        SitemapPriority::Low
    }

    async fn render(&self, context: &Context<C>) -> anyhow::Result<String> {
        let site = context.site();
        let items: Vec<Item> = context
            .content::<T>()
            .into_iter()
            .map(|entry| entry_to_item(entry, context))
            .collect();

        let channel = ChannelBuilder::default()
            .title(site.name.clone())
            .link(site.url_for(""))
            .description(site.description.clone().unwrap_or_default())
            .language(site.language.clone())
            .generator(GENERATOR.to_owned())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validate: {e}"))?;

        Ok(channel.to_string())
    }
}

fn entry_to_item<C: Content, T: FeedEntry>(entry: &T, context: &Context<C>) -> Item {
    let site = context.site();
    let link = entry.url_in(site);
    let description = entry
        .summary()
        .map(|summary| make_absolute_links(summary, &link, site.base_url()));

    ItemBuilder::default()
        .title(entry.title().to_owned())
        .link(link.clone())
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(description)
        .pub_date(entry.published().map(|date| to_rfc822(&date)))
        .author(site.author.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Site;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::fs;

    #[derive(Debug, Clone)]
    struct Post {
        path: String,
        title: String,
    }

    #[derive(Debug, Clone)]
    struct Draft {
        path: String,
    }

    #[derive(Debug, Clone)]
    enum Entry {
        Post(Post),
        Draft(Draft),
    }

    impl Content for Post {
        fn path(&self) -> &str {
            &self.path
        }
    }

    impl Content for Draft {
        fn path(&self) -> &str {
            &self.path
        }
    }

    impl Content for Entry {
        fn path(&self) -> &str {
            match self {
                Entry::Post(post) => post.path(),
                Entry::Draft(draft) => draft.path(),
            }
        }
    }

    crate::content_kind!(Entry::Post => Post, Entry::Draft => Draft);

    impl FeedEntry for Post {
        fn title(&self) -> &str {
            &self.title
        }

        fn summary(&self) -> Option<&str> {
            Some(r#"<img src="cover.png">"#)
        }

        fn published(&self) -> Option<DateTime<FixedOffset>> {
            FixedOffset::east_opt(0)?
                .with_ymd_and_hms(2024, 1, 2, 15, 4, 5)
                .single()
        }
    }

    struct Posts(Vec<Entry>);

    #[async_trait]
    impl crate::ContentLoader<Entry> for Posts {
        async fn load(&self, _context: &Context<Entry>) -> anyhow::Result<Vec<Entry>> {
            Ok(self.0.clone())
        }
    }

    async fn build_feed() -> (tempfile::TempDir, Context<Entry>) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new("Example", "https://example.com").with_description("desc");
        let mut ctx = Context::new(site, dir.path(), "output");

        ctx.load_content(vec![Box::new(Posts(vec![
            Entry::Post(Post {
                path: "/blog/first".into(),
                title: "First".into(),
            }),
            Entry::Draft(Draft {
                path: "/drafts/secret".into(),
            }),
            Entry::Post(Post {
                path: "/blog/second".into(),
                title: "Second & more".into(),
            }),
        ]))])
        .await
        .unwrap();

        ctx.generate_static_pages(vec![Box::new(FeedPage::<Post>::new())])
            .await
            .unwrap();
        (dir, ctx)
    }

    #[tokio::test]
    async fn test_feed_lists_entries_of_kind() {
        let (_dir, ctx) = build_feed().await;
        let xml = fs::read_to_string(ctx.build_directory().join(FEED_FILE)).unwrap();

        assert!(xml.contains("<title>First</title>"));
        assert!(xml.contains("<title>Second &amp; more</title>"));
        assert!(xml.contains("<link>https://example.com/blog/first</link>"));
        assert!(!xml.contains("secret"));
        assert!(xml.contains("Tue, 02 Jan 2024 15:04:05 +0000"));
        assert!(xml.find("First").unwrap() < xml.find("Second").unwrap());
    }

    #[tokio::test]
    async fn test_feed_summary_links_absolute() {
        let (_dir, ctx) = build_feed().await;
        let xml = fs::read_to_string(ctx.build_directory().join(FEED_FILE)).unwrap();

        assert!(xml.contains("https://example.com/blog/first/cover.png"));
    }

    #[tokio::test]
    async fn test_feed_recorded_with_low_priority() {
        let (_dir, ctx) = build_feed().await;
        assert_eq!(
            ctx.site_map().as_slice(),
            [crate::Location::new("/feed.xml", 0.4)]
        );
    }
}
