//! Content metrics - raw signals derived from an article body.
//!
//! These values are heuristic. They come from pattern scans over HTML or
//! Markdown, not from a real document parser.

use serde::{Deserialize, Serialize};

/// Raw structural and lexical signals extracted from one content string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    /// Whitespace-delimited tokens after tag stripping
    pub word_count: usize,

    /// Number of HTML `h1`-`h6` tags plus Markdown `#` heading lines
    pub section_count: usize,

    /// Zero-based line indices of the detected headings
    pub heading_lines: Vec<usize>,

    /// Fenced code, `<pre>` or `<code>`
    pub has_code_blocks: bool,

    /// `1.`-style Markdown items or `<ol>`
    pub has_numbered_list: bool,

    /// `-`/`*`/`+` Markdown items or `<ul>`
    pub has_bulleted_list: bool,

    /// Markdown `>` lines or `<blockquote>`
    pub has_quotes: bool,

    /// Markdown `![..](..)` or `<img>`
    pub has_images: bool,

    /// Markdown pipe tables or `<table>`
    pub has_data_tables: bool,

    /// Comparison language such as "versus" or "compared to"
    pub has_comparisons: bool,

    /// "Step 1" style markers
    pub has_step_markers: bool,

    /// Links pointing at allow-listed internal paths, summed per pattern
    pub internal_link_count: usize,

    /// Any AI-disclosure phrase present
    pub has_ai_disclosure: bool,

    /// Vocabulary and sentence statistics
    pub lexical: LexicalProfile,
}

impl ContentMetrics {
    /// Whether any kind of list is present.
    pub fn has_lists(&self) -> bool {
        self.has_numbered_list || self.has_bulleted_list
    }

    /// Reading time at 200 words per minute, rounded up.
    pub fn reading_time_minutes(&self) -> u32 {
        reading_time_minutes(self.word_count)
    }
}

/// Vocabulary hits and sentence statistics over the de-tagged text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalProfile {
    /// Non-empty segments between `.`, `!` and `?`
    pub sentence_count: usize,

    /// Words of ten characters or more
    pub long_word_count: usize,

    /// Literal `?` characters
    pub question_mark_count: usize,

    /// Formal connector hits ("therefore", "moreover", ...)
    pub formal_hits: usize,

    /// Casual vocabulary hits ("awesome", "gonna", ...)
    pub casual_hits: usize,

    /// Technical vocabulary hits ("api", "database", ...)
    pub technical_hits: usize,

    /// First-person opinion markers ("i think", "in my opinion", ...)
    pub opinion_hits: usize,

    /// Call-to-action phrase present
    pub has_call_to_action: bool,

    /// Example markers present ("for example", "such as", ...)
    pub has_example_markers: bool,

    /// Rating language present ("out of 5", "verdict", ...)
    pub has_rating_language: bool,
}

/// Words per minute used for every reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// `ceil(word_count / 200)`.
pub fn reading_time_minutes(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u32
}
