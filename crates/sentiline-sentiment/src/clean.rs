//! Text cleaning for Chinese social-media posts

use regex::Regex;

/// Three-stage regex cleaner.
///
/// Substitution order matters: hashtags/mentions must be removed before the
/// symbol strip, or `#`/`@` would be eaten by the symbol rule and their tokens
/// left behind.
pub struct TextCleaner {
    whitespace: Regex,
    tags: Regex,
    symbols: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("invalid pattern"),
            tags: Regex::new(r"#\S+|@\S+").expect("invalid pattern"),
            // Keep word characters, whitespace, and CJK ideographs
            symbols: Regex::new(r"[^\w\s\u{4e00}-\u{9fff}]").expect("invalid pattern"),
        }
    }

    /// Clean one post: collapse whitespace runs, strip `#hashtag`/`@mention`
    /// tokens, strip symbols outside the word/whitespace/CJK set, collapse
    /// again, trim. May return an empty string.
    pub fn clean(&self, text: &str) -> String {
        let text = self.whitespace.replace_all(text, " ");
        let text = self.tags.replace_all(&text, "");
        let text = self.symbols.replace_all(&text, "");
        // Token removal leaves double spaces behind
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
