//! HTML string helpers, mostly for feeds.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());
static RE_LINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(src|href)="([^"]*)""#).unwrap());

/// Remove every tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    RE_TAGS.replace_all(html, "").into_owned()
}

/// Rewrite relative `src` and `href` attributes into absolute URLs.
///
/// | attribute          | result                |
/// |--------------------|-----------------------|
/// | `src="img.png"`    | `src="{url}/img.png"` |
/// | `href="next"`      | `href="{url}/next"`   |
/// | `href="/about"`    | `href="{root}/about"` |
/// | `src="/logo.png"`  | unchanged             |
/// | `href="https://…"` | unchanged             |
pub fn make_absolute_links(html: &str, url: &str, root: &str) -> String {
    let url = url.trim_end_matches('/');
    let root = root.trim_end_matches('/');

    RE_LINKS
        .replace_all(html, |caps: &Captures| {
            let attr = &caps[1];
            let value = &caps[2];

            if value.starts_with("http") {
                caps[0].to_owned()
            } else if let Some(rooted) = value.strip_prefix('/') {
                match attr {
                    "href" => format!(r#"href="{root}/{rooted}""#),
                    _ => caps[0].to_owned(),
                }
            } else {
                format!(r#"{attr}="{url}/{value}""#)
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>there</b></p>"), "Hello there");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_relative_links_use_page_url() {
        let html = r#"<img src="cat.png"><a href="next">n</a>"#;
        assert_eq!(
            make_absolute_links(html, "https://example.com/blog/post", "https://example.com"),
            r#"<img src="https://example.com/blog/post/cat.png"><a href="https://example.com/blog/post/next">n</a>"#
        );
    }

    #[test]
    fn test_root_relative_href_uses_root() {
        let html = r#"<a href="/about">a</a><img src="/logo.png">"#;
        assert_eq!(
            make_absolute_links(html, "https://example.com/blog", "https://example.com/"),
            r#"<a href="https://example.com/about">a</a><img src="/logo.png">"#
        );
    }

    #[test]
    fn test_absolute_links_untouched() {
        let html = r#"<a href="https://rust-lang.org">r</a><img src="http://x.y/z.png">"#;
        assert_eq!(make_absolute_links(html, "https://example.com", "https://example.com"), html);
    }
}
