//! Markdown parsing for content loaders.

use anyhow::{Context as _, Result};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use std::{fs, path::Path};

/// A markdown document rendered to HTML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMarkdown {
    /// Text of the first level-1 heading, empty if there is none.
    pub title: String,
    /// The whole document as HTML.
    pub body: String,
}

impl ParsedMarkdown {
    pub fn parse(markdown: &str) -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS;
        let events: Vec<Event> = Parser::new_ext(markdown, options).collect();

        let title = first_title(&events);
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, events.into_iter());

        Self { title, body }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let markdown = fs::read_to_string(path)
            .with_context(|| format!("failed to read markdown file {}", path.display()))?;
        Ok(Self::parse(&markdown))
    }
}

fn first_title(events: &[Event]) -> String {
    let mut title = String::new();
    let mut in_title = false;

    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => break,
            Event::Text(text) | Event::Code(text) if in_title => title.push_str(text),
            Event::SoftBreak | Event::HardBreak if in_title => title.push(' '),
            _ => {}
        }
    }

    title
}
