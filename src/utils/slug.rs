//! URL slugification.
//!
//! Turns titles and file names into URL-safe path segments.

use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in a slug besides ASCII letters and digits
const SLUG_EXTRA_CHARS: &[char] = &['-'];

static RE_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

// ============================================================================
// Slugification
// ============================================================================

/// Convert text to a URL-safe slug, `None` when nothing usable is left.
///
/// | input              | slug                  |
/// |--------------------|-----------------------|
/// | `"Hello World"`    | `"hello-world"`       |
/// | `"CamelCase"`      | `"camel-case"`        |
/// | `"Crème brûlée!"`  | `"creme-brulee"`      |
/// | `"!!!"`            | `None`                |
pub fn to_slug(text: &str) -> Option<String> {
    let latin = deunicode::deunicode(&to_dash_case(text)).to_lowercase();

    let joined = latin
        .split(|c: char| !(c.is_ascii_alphanumeric() || SLUG_EXTRA_CHARS.contains(&c)))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if joined.is_empty() {
        return None;
    }
    Some(RE_DASHES.replace_all(&joined, "-").into_owned())
}

/// Insert a dash before every uppercase character but the first, then lowercase.
///
/// `"BlogPostPage"` → `"blog-post-page"`
pub fn to_dash_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);

    for (index, c) in text.chars().enumerate() {
        if c.is_uppercase() && index != 0 {
            result.push('-');
        }
        result.push(c);
    }

    result.to_lowercase()
}

/// Lowercase, whitespace becomes `-`, everything but letters and digits is dropped.
pub fn normalized(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
