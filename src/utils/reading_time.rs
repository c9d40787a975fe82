//! Reading time estimation.

use regex::Regex;
use std::sync::LazyLock;

/// Average adult reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 250;

static RE_WORDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w-]+").unwrap());
static RE_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\p{P}]+").unwrap());

/// How words are counted in a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordsStrategy {
    /// Count runs of word characters and dashes.
    #[default]
    RegexWords,
    /// Drop HTML tags, then split on whitespace and punctuation.
    Html,
}

impl WordsStrategy {
    pub fn count_words(self, text: &str) -> usize {
        match self {
            Self::RegexWords => RE_WORDS.find_iter(text).count(),
            Self::Html => {
                let text = RE_TAGS.replace_all(text, " ");
                RE_SEPARATORS
                    .split(&text)
                    .filter(|word| !word.is_empty())
                    .count()
            }
        }
    }
}

/// Estimated time needed to read a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedReadingTime {
    /// Words found by the strategy.
    pub words: usize,
    /// Unrounded estimate.
    pub time_minutes: f64,
    /// Estimate rounded to whole minutes.
    pub minutes: u64,
}

impl EstimatedReadingTime {
    pub fn new(text: &str) -> Self {
        Self::with_strategy(text, WordsStrategy::default(), DEFAULT_WORDS_PER_MINUTE)
    }

    /// A `words_per_minute` of zero is treated as one.
    pub fn with_strategy(text: &str, strategy: WordsStrategy, words_per_minute: u32) -> Self {
        let words = strategy.count_words(text);
        let time_minutes = words as f64 / f64::from(words_per_minute.max(1));

        Self {
            words,
            time_minutes,
            minutes: time_minutes.round() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_words_count() {
        assert_eq!(WordsStrategy::RegexWords.count_words("one two-three, four!"), 3);
        assert_eq!(WordsStrategy::RegexWords.count_words(""), 0);
    }

    #[test]
    fn test_html_words_ignore_tags() {
        let html = r#"<p class="lead">Hello, <em>big</em> world.</p>"#;
        assert_eq!(WordsStrategy::Html.count_words(html), 3);
    }

    #[test]
    fn test_html_words_split_on_unicode_punctuation() {
        let html = "<p>Hello—world «quoted» text…end</p>";
        assert_eq!(WordsStrategy::Html.count_words(html), 5);
    }

    #[test]
    fn test_reading_time_rounding() {
        let text = "word ".repeat(375);
        let time = EstimatedReadingTime::new(&text);

        assert_eq!(time.words, 375);
        assert_eq!(time.time_minutes, 1.5);
        assert_eq!(time.minutes, 2);
    }

    #[test]
    fn test_reading_time_short_text_rounds_down() {
        let time = EstimatedReadingTime::new("just a few words");
        assert_eq!(time.words, 4);
        assert_eq!(time.minutes, 0);
    }

    #[test]
    fn test_custom_speed() {
        let text = "word ".repeat(100);
        let time = EstimatedReadingTime::with_strategy(&text, WordsStrategy::Html, 50);
        assert_eq!(time.minutes, 2);
    }

    #[test]
    fn test_zero_speed_does_not_divide_by_zero() {
        let time = EstimatedReadingTime::with_strategy("a b", WordsStrategy::RegexWords, 0);
        assert_eq!(time.time_minutes, 2.0);
    }
}
