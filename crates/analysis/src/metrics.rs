//! Text metrics extraction.
//!
//! Word counts run on de-tagged text. Structural checks (code, lists,
//! images, quotes, tables) inspect the original markup because both HTML
//! tags and Markdown sigils are valid signals.

use once_cell::sync::Lazy;
use regex::Regex;
use zenx_core::{ContentMetrics, LexicalProfile};

use crate::vocabulary::{self, count_hits};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static HTML_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?>").expect("heading pattern is valid"));

static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s{0,3}#{1,6}\s+\S").expect("heading pattern is valid"));

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)```|~~~|<pre[\s>]|<code[\s>]").expect("code pattern is valid")
});

static NUMBERED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*\d+[.)]\s+\S|<ol[\s>]").expect("numbered list pattern is valid")
});

static BULLETED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*[-*+]\s+\S|<ul[\s>]").expect("bulleted list pattern is valid")
});

static QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*>\s?\S|<blockquote[\s>]").expect("quote pattern is valid"));

static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)!\[[^\]]*\]\([^)]+\)|<img[\s>/]").expect("image pattern is valid")
});

static DATA_TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)<table[\s>]|^\s*\|(?:\s*:?-{3,}:?\s*\|)+\s*$").expect("table pattern is valid")
});

/// Internal link patterns. Counts are summed per pattern, so a relative
/// `/blog/` href is counted by both the relative and the site-href pattern.
static INTERNAL_LINKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\[[^\]]*\]\(/blog/[^)\s]*\)",
        r"\[[^\]]*\]\(/category/[^)\s]*\)",
        r"\[[^\]]*\]\(/(?:about|how-we-use-ai)[^)\s]*\)",
        r#"href=["']/blog/[^"']*["']"#,
        r#"href=["']/category/[^"']*["']"#,
        r#"href=["']/(?:about|how-we-use-ai)[^"']*["']"#,
        r#"href=["'](?:https?://(?:www\.)?imzenx\.[a-z]+)?/blog/"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("internal link pattern is valid"))
    .collect()
});

/// Replace every tag with a space, so adjacent elements stay separate words.
pub fn strip_tags(content: &str) -> String {
    TAG.replace_all(content, " ").into_owned()
}

/// Whitespace-delimited tokens after tag stripping.
pub fn count_words(content: &str) -> usize {
    strip_tags(content).split_whitespace().count()
}

/// Count internal links as the sum of independent pattern matches.
pub fn count_internal_links(content: &str) -> usize {
    INTERNAL_LINKS
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum()
}

/// Derive every metric from one content string.
///
/// Total over its input: empty content yields zeroes and `false`s.
pub fn extract_metrics(content: &str) -> ContentMetrics {
    let plain = strip_tags(content);

    let mut heading_lines = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let html = HTML_HEADING.find_iter(line).count();
        let markdown = usize::from(MARKDOWN_HEADING.is_match(line));
        heading_lines.extend(std::iter::repeat(index).take(html + markdown));
    }

    ContentMetrics {
        word_count: plain.split_whitespace().count(),
        section_count: heading_lines.len(),
        heading_lines,
        has_code_blocks: CODE_BLOCK.is_match(content),
        has_numbered_list: NUMBERED_LIST.is_match(content),
        has_bulleted_list: BULLETED_LIST.is_match(content),
        has_quotes: QUOTE.is_match(content),
        has_images: IMAGE.is_match(content),
        has_data_tables: DATA_TABLE.is_match(content),
        has_comparisons: vocabulary::COMPARISON.is_match(&plain),
        has_step_markers: vocabulary::STEP_MARKER.is_match(&plain),
        internal_link_count: count_internal_links(content),
        has_ai_disclosure: vocabulary::AI_DISCLOSURE.is_match(&plain),
        lexical: lexical_profile(&plain),
    }
}

fn lexical_profile(plain: &str) -> LexicalProfile {
    let sentence_count = plain
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let long_word_count = plain
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() >= 10)
        .count();

    LexicalProfile {
        sentence_count,
        long_word_count,
        question_mark_count: plain.matches('?').count(),
        formal_hits: count_hits(&vocabulary::FORMAL, plain),
        casual_hits: count_hits(&vocabulary::CASUAL, plain),
        technical_hits: count_hits(&vocabulary::TECHNICAL, plain),
        opinion_hits: count_hits(&vocabulary::OPINION, plain),
        has_call_to_action: vocabulary::CALL_TO_ACTION.is_match(plain),
        has_example_markers: vocabulary::EXAMPLE.is_match(plain),
        has_rating_language: vocabulary::RATING.is_match(plain),
    }
}
