//! A markdown blog built on the library.
//!
//! Every `*.md` file directly inside `Content/` becomes a [`BlogPost`] at
//! `/<slug>`. The home page links all posts, each post gets its own page.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use quick_xml::escape::escape;
use scriptorium::{
    BuildError, Content, ContentLoader, Context, Page, PageProvider, SitemapPriority,
    generator::FeedEntry,
    utils::{
        date::file_creation_date,
        markdown::ParsedMarkdown,
        path::relative_path,
        reading_time::{EstimatedReadingTime, WordsStrategy},
        slug::to_slug,
    },
};
use std::{fs, path::Path};

// ============================================================================
// Content
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub path: String,
    pub title: String,
    pub reading_time: EstimatedReadingTime,
    pub html_body: String,
    pub published: DateTime<FixedOffset>,
}

/// Everything the blog can load.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteContent {
    Post(BlogPost),
}

scriptorium::content_kind!(SiteContent::Post => BlogPost);

impl Content for BlogPost {
    fn path(&self) -> &str {
        &self.path
    }
}

impl Content for SiteContent {
    fn path(&self) -> &str {
        match self {
            SiteContent::Post(post) => post.path(),
        }
    }
}

impl FeedEntry for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        Some(&self.html_body)
    }

    fn published(&self) -> Option<DateTime<FixedOffset>> {
        Some(self.published)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Loads every markdown file at the top level of the content directory,
/// sorted by file name.
pub struct BlogLoader {
    words_per_minute: u32,
}

impl BlogLoader {
    pub fn new(words_per_minute: u32) -> Self {
        Self { words_per_minute }
    }

    fn load_post(&self, file: &Path, content_dir: &Path) -> anyhow::Result<BlogPost> {
        let markdown = ParsedMarkdown::from_path(file)?;
        let relative = relative_path(&file.with_extension(""), content_dir).unwrap_or_default();
        let slug = to_slug(&relative).unwrap_or(relative);

        Ok(BlogPost {
            path: format!("/{slug}"),
            reading_time: EstimatedReadingTime::with_strategy(
                &markdown.body,
                WordsStrategy::Html,
                self.words_per_minute,
            ),
            title: markdown.title,
            html_body: markdown.body,
            published: file_creation_date(file).fixed_offset(),
        })
    }
}

#[async_trait]
impl ContentLoader<SiteContent> for BlogLoader {
    async fn load(&self, context: &Context<SiteContent>) -> anyhow::Result<Vec<SiteContent>> {
        let content_dir = context.content_directory();

        let mut files = fs::read_dir(content_dir)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?;
        files.retain(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"));
        files.sort();

        files
            .iter()
            .map(|file| Ok(SiteContent::Post(self.load_post(file, content_dir)?)))
            .collect()
    }
}

/// Give posts without a `# title` their path as title and warn about it.
pub fn fill_missing_titles(context: &mut Context<SiteContent>) -> Result<(), BuildError> {
    let untitled: Vec<String> = context
        .content::<BlogPost>()
        .into_iter()
        .filter(|post| post.title.trim().is_empty())
        .map(|post| post.path.clone())
        .collect();

    for path in untitled {
        context.mutate_content::<BlogPost>(&path, |post| {
            post.title = post.path.trim_start_matches('/').to_owned();
        })?;
        context.report_warning(format!("`{path}` has no title, using its path instead"));
    }
    Ok(())
}

// ============================================================================
// Pages
// ============================================================================

/// The site root, listing every post.
pub struct HomePage;

#[async_trait]
impl Page<SiteContent> for HomePage {
    fn path(&self) -> &str {
        ""
    }

    fn priority(&self) -> SitemapPriority {
        SitemapPriority::Highest
    }

    async fn render(&self, context: &Context<SiteContent>) -> anyhow::Result<String> {
        let site = context.site();
        let items: String = context
            .content::<BlogPost>()
            .into_iter()
            .map(|post| {
                format!(
                    r#"<li><a href="{}">{}</a> · {} min</li>"#,
                    post.path,
                    escape(post.title.as_str()),
                    post.reading_time.minutes.max(1)
                )
            })
            .collect();

        Ok(format!(
            r#"<html lang="{lang}">
<head><title>{name}</title><link rel="alternate" type="application/rss+xml" href="/feed.xml"></head>
<body>
<h1>{name}</h1>
<ul>{items}</ul>
</body>
</html>
"#,
            lang = site.language,
            name = escape(site.name.as_str()),
        ))
    }
}

/// One page per loaded post.
pub struct BlogPostProvider;

#[async_trait]
impl PageProvider<SiteContent> for BlogPostProvider {
    async fn source(&self, context: &Context<SiteContent>) -> anyhow::Result<Vec<Box<dyn Page<SiteContent>>>> {
        Ok(context
            .content::<BlogPost>()
            .into_iter()
            .map(|post| Box::new(BlogPostPage { post: post.clone() }) as Box<dyn Page<SiteContent>>)
            .collect())
    }
}

pub struct BlogPostPage {
    post: BlogPost,
}

#[async_trait]
impl Page<SiteContent> for BlogPostPage {
    fn path(&self) -> &str {
        &self.post.path
    }

    async fn render(&self, context: &Context<SiteContent>) -> anyhow::Result<String> {
        let post = &self.post;
        Ok(format!(
            r#"<html lang="{lang}">
<head><title>{title}</title></head>
<body>
<p><a href="/">{name}</a></p>
<article>
{body}
</article>
</body>
</html>
"#,
            lang = context.site().language,
            title = escape(post.title.as_str()),
            name = escape(context.site().name.as_str()),
            body = post.html_body,
        ))
    }
}
