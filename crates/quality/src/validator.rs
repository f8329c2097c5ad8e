//! Publication-quality validation.
//!
//! Errors block publication; warnings are advisory and never affect
//! `is_valid`. The validator runs off the same metrics as the classifier
//! but never feeds back into it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use zenx_analysis::{count_words, extract_metrics, strip_tags};
use zenx_core::{ContentMetrics, PostDraft, ValidationResult, ValidationRules, ValidationStats};

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Words above the minimum that still draw a "close to minimum" warning.
pub const NEAR_MINIMUM_MARGIN: usize = 100;

/// Recommended title length in characters, inclusive.
pub const TITLE_LENGTH_RANGE: (usize, usize) = (30, 100);

/// Shortest word considered for keyword-stuffing checks.
pub const STUFFING_MIN_WORD_LENGTH: usize = 5;

/// Share of all words a single word may take before it looks stuffed.
pub const STUFFING_MAX_SHARE: f64 = 0.05;

/// Raw occurrences a word must exceed before it looks stuffed.
pub const STUFFING_MIN_OCCURRENCES: usize = 10;

/// Paragraphs under this many words count as short.
pub const SHORT_PARAGRAPH_WORDS: usize = 20;

/// Validates posts against a rule set.
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    rules: ValidationRules,
}

impl ContentValidator {
    /// Create a validator for the given rules.
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// The active rules.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate a post draft.
    pub fn validate_post(&self, post: &PostDraft) -> ValidationResult {
        self.validate(
            &post.content,
            &post.title,
            post.excerpt.as_deref(),
            &post.tags,
            post.featured_image.as_deref(),
        )
    }

    /// Validate raw post fields.
    pub fn validate(
        &self,
        content: &str,
        title: &str,
        excerpt: Option<&str>,
        tags: &[String],
        featured_image: Option<&str>,
    ) -> ValidationResult {
        let metrics = extract_metrics(content);
        self.validate_metrics(&metrics, content, title, excerpt, tags, featured_image)
    }

    /// Validate using metrics that were already extracted from `content`.
    pub fn validate_metrics(
        &self,
        metrics: &ContentMetrics,
        content: &str,
        title: &str,
        excerpt: Option<&str>,
        tags: &[String],
        featured_image: Option<&str>,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        self.check_word_count(metrics.word_count, &mut errors, &mut warnings);
        self.check_disclosure(metrics, &mut errors);
        self.check_internal_links(metrics, &mut errors);
        self.check_excerpt(excerpt, &mut errors, &mut warnings);
        self.check_tags(tags, &mut warnings);
        let has_featured_image = check_featured_image(featured_image, &mut warnings);
        check_title(title, &mut warnings);
        check_keyword_stuffing(content, &mut warnings);
        check_paragraphs(content, &mut warnings);
        if metrics.section_count == 0 {
            warnings.push("No headings found: break the content into sections".to_string());
        }

        let stats = ValidationStats {
            word_count: metrics.word_count,
            read_time: metrics.reading_time_minutes(),
            has_ai_disclosure: metrics.has_ai_disclosure,
            has_internal_links: metrics.internal_link_count > 0,
            has_featured_image,
        };

        let result = ValidationResult::new(errors, warnings, stats);
        tracing::debug!(
            valid = result.is_valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            words = stats.word_count,
            "Validated content"
        );
        result
    }

    fn check_word_count(&self, word_count: usize, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        let min = self.rules.min_word_count;
        if word_count < min {
            errors.push(format!(
                "Thin content: {} words (minimum {} required)",
                word_count, min
            ));
        } else if word_count < min.saturating_add(NEAR_MINIMUM_MARGIN) {
            warnings.push(format!(
                "Word count {} is close to the minimum of {}",
                word_count, min
            ));
        }

        if word_count > self.rules.max_word_count {
            warnings.push(format!(
                "Content is long: {} words (recommended maximum {})",
                word_count, self.rules.max_word_count
            ));
        }
    }

    fn check_disclosure(&self, metrics: &ContentMetrics, errors: &mut Vec<String>) {
        if self.rules.require_ai_disclosure && !metrics.has_ai_disclosure {
            errors.push(
                "Missing AI disclosure: state how AI was used (see /how-we-use-ai)".to_string(),
            );
        }
    }

    fn check_internal_links(&self, metrics: &ContentMetrics, errors: &mut Vec<String>) {
        if self.rules.require_internal_links && metrics.internal_link_count < self.rules.min_internal_links {
            errors.push(format!(
                "Insufficient internal links: {} found, {} required",
                metrics.internal_link_count, self.rules.min_internal_links
            ));
        }
    }

    fn check_excerpt(&self, excerpt: Option<&str>, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
        match excerpt.map(str::trim).filter(|e| !e.is_empty()) {
            None => {
                if self.rules.require_excerpt {
                    errors.push("Missing excerpt".to_string());
                }
            }
            Some(excerpt) => {
                let length = excerpt.chars().count();
                if length < self.rules.min_excerpt_length {
                    warnings.push(format!(
                        "Excerpt is short: {} characters (recommended {}+)",
                        length, self.rules.min_excerpt_length
                    ));
                }
            }
        }
    }

    fn check_tags(&self, tags: &[String], warnings: &mut Vec<String>) {
        let count = tags.iter().filter(|t| !t.trim().is_empty()).count();
        if self.rules.require_tags && count < self.rules.min_tags {
            warnings.push(format!(
                "Only {} tags (recommended {}+)",
                count, self.rules.min_tags
            ));
        }
    }
}

/// A missing image only ever warns, whatever `require_featured_image` says.
fn check_featured_image(featured_image: Option<&str>, warnings: &mut Vec<String>) -> bool {
    let present = featured_image.is_some_and(|url| !url.trim().is_empty());
    if !present {
        warnings.push("No featured image set".to_string());
    }
    present
}

fn check_title(title: &str, warnings: &mut Vec<String>) {
    let (min, max) = TITLE_LENGTH_RANGE;
    let length = title.trim().chars().count();
    if length < min {
        warnings.push(format!(
            "Title is short: {} characters (recommended {}-{})",
            length, min, max
        ));
    } else if length > max {
        warnings.push(format!(
            "Title is long: {} characters (recommended {}-{})",
            length, min, max
        ));
    }
}

fn check_keyword_stuffing(content: &str, warnings: &mut Vec<String>) {
    let plain = strip_tags(content).to_lowercase();
    let words: Vec<&str> = plain
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    if words.is_empty() {
        return;
    }

    let mut frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words.iter().copied().filter(|w| w.chars().count() >= STUFFING_MIN_WORD_LENGTH) {
        *frequency.entry(word).or_default() += 1;
    }

    let total = words.len() as f64;
    let mut stuffed: Vec<(&str, usize)> = frequency
        .into_iter()
        .filter(|(_, count)| *count > STUFFING_MIN_OCCURRENCES && *count as f64 / total > STUFFING_MAX_SHARE)
        .collect();
    stuffed.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (word, count) in stuffed {
        warnings.push(format!(
            "Possible keyword stuffing: '{}' appears {} times ({:.1}% of words)",
            word,
            count,
            count as f64 / total * 100.0
        ));
    }
}

fn check_paragraphs(content: &str, warnings: &mut Vec<String>) {
    let paragraphs: Vec<usize> = BLANK_LINE
        .split(content)
        .map(count_words)
        .filter(|&words| words > 0)
        .collect();

    let short = paragraphs.iter().filter(|&&words| words < SHORT_PARAGRAPH_WORDS).count();
    if short * 2 > paragraphs.len() {
        warnings.push(format!(
            "Most paragraphs are very short ({} of {} under {} words)",
            short,
            paragraphs.len(),
            SHORT_PARAGRAPH_WORDS
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `n` distinct filler words in paragraphs of 50.
    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .chunks(50)
            .map(|c| c.join(" "))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{}", i)).collect()
    }

    #[test]
    fn test_validator_exposes_its_rules() {
        let mut rules = ValidationRules::default();
        rules.min_word_count = 300;
        let validator = ContentValidator::new(rules.clone());
        assert_eq!(validator.rules(), &rules);
        assert_eq!(ContentValidator::default().rules(), &ValidationRules::default());
    }

    #[test]
    fn test_thin_content_without_disclosure_fails() {
        let content = format!("[related](/blog/related-post) {}", words(649));
        let result = ContentValidator::default().validate(
            &content,
            "A Reasonably Long Title About Productivity",
            Some(&"x".repeat(150)),
            &tags(3),
            Some("https://cdn.example.com/a.png"),
        );

        assert!(!result.is_valid);
        assert_eq!(result.stats.word_count, 650);
        assert!(result.errors.iter().any(|e| e.starts_with("Thin content: 650 words")));
        assert!(result.errors.iter().any(|e| e.contains("AI disclosure")));
        assert!(result.errors.iter().any(|e| e.contains("1 found, 2 required")));
    }

    #[test]
    fn test_complete_post_passes() {
        let content = format!(
            "## Overview\n\nThis article was created with AI assistance. See [a](/blog/a) [b](/blog/b) [c](/blog/c)\n\n{}",
            words(987)
        );
        let result = ContentValidator::default().validate(
            &content,
            "A Complete Look at Modern Productivity Systems",
            Some(&"x".repeat(150)),
            &tags(3),
            Some("https://cdn.example.com/a.png"),
        );

        assert_eq!(result.stats.word_count, 1000);
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(result.stats.has_ai_disclosure);
        assert!(result.stats.has_internal_links);
        assert!(result.stats.has_featured_image);
        assert_eq!(result.stats.read_time, 5);
    }

    #[test]
    fn test_validation_is_pure() {
        let validator = ContentValidator::default();
        let content = words(700);
        let first = validator.validate(&content, "Short", None, &[], None);
        let second = validator.validate(&content, "Short", None, &[], None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lowering_minimum_never_adds_word_count_errors() {
        let content = words(500);
        let mut previous = usize::MAX;
        for min in [900, 700, 500, 300, 0] {
            let rules = ValidationRules { min_word_count: min, ..Default::default() };
            let result = ContentValidator::new(rules).validate(&content, "t", None, &[], None);
            let count = result.errors.iter().filter(|e| e.starts_with("Thin content")).count();
            assert!(count <= previous);
            previous = count;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_close_to_minimum_is_warning_only() {
        let rules = ValidationRules {
            min_word_count: 100,
            require_ai_disclosure: false,
            require_internal_links: false,
            require_excerpt: false,
            ..Default::default()
        };
        let result = ContentValidator::new(rules).validate(&words(150), "t", None, &[], None);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("close to the minimum of 100")));
    }

    #[test]
    fn test_over_maximum_is_warning_only() {
        let rules = ValidationRules {
            min_word_count: 10,
            max_word_count: 100,
            require_ai_disclosure: false,
            require_internal_links: false,
            require_excerpt: false,
            ..Default::default()
        };
        let result = ContentValidator::new(rules).validate(&words(150), "t", None, &[], None);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.starts_with("Content is long: 150 words")));
    }

    #[test]
    fn test_featured_image_flag_is_inert() {
        let strict = ValidationRules { require_featured_image: true, ..Default::default() };
        let result = ContentValidator::new(strict).validate("", "t", None, &[], None);
        assert!(result.warnings.contains(&"No featured image set".to_string()));
        assert!(!result.errors.iter().any(|e| e.contains("image")));

        let relaxed = ValidationRules { require_featured_image: false, ..Default::default() };
        let result = ContentValidator::new(relaxed).validate("", "t", None, &[], None);
        assert!(result.warnings.contains(&"No featured image set".to_string()));
    }

    #[test]
    fn test_excerpt_rules() {
        let validator = ContentValidator::default();
        let missing = validator.validate("", "t", Some("   "), &[], None);
        assert!(missing.errors.contains(&"Missing excerpt".to_string()));

        let short = validator.validate("", "t", Some("Too short"), &[], None);
        assert!(!short.errors.contains(&"Missing excerpt".to_string()));
        assert!(short.warnings.iter().any(|w| w.starts_with("Excerpt is short: 9 characters")));

        let optional = ContentValidator::new(ValidationRules { require_excerpt: false, ..Default::default() });
        assert!(!optional.validate("", "t", None, &[], None).errors.contains(&"Missing excerpt".to_string()));
    }

    #[test]
    fn test_tags_only_warn() {
        let result = ContentValidator::default().validate("", "t", None, &tags(1), None);
        assert!(result.warnings.contains(&"Only 1 tags (recommended 3+)".to_string()));
        assert!(!result.errors.iter().any(|e| e.contains("tags")));
    }

    #[test]
    fn test_title_bounds_use_100_characters() {
        let mut warnings = Vec::new();
        check_title(&"t".repeat(29), &mut warnings);
        check_title(&"t".repeat(30), &mut warnings);
        check_title(&"t".repeat(85), &mut warnings);
        check_title(&"t".repeat(100), &mut warnings);
        check_title(&"t".repeat(101), &mut warnings);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Title is short: 29"));
        assert!(warnings[1].starts_with("Title is long: 101"));
    }

    #[test]
    fn test_keyword_stuffing_detected() {
        let mut content = words(100);
        content.push_str(&" productivity".repeat(11));
        let mut warnings = Vec::new();
        check_keyword_stuffing(&content, &mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'productivity' appears 11 times"));
    }

    #[test]
    fn test_keyword_stuffing_needs_both_thresholds() {
        // 11 hits in 1011 words is only ~1%.
        let mut content = words(1000);
        content.push_str(&" productivity".repeat(11));
        let mut warnings = Vec::new();
        check_keyword_stuffing(&content, &mut warnings);
        assert!(warnings.is_empty());

        // 10 hits is not "more than 10", whatever the share.
        let mut warnings = Vec::new();
        check_keyword_stuffing(&"productivity ".repeat(10), &mut warnings);
        assert!(warnings.is_empty());

        // Short words are ignored.
        let mut warnings = Vec::new();
        check_keyword_stuffing(&"tool ".repeat(50), &mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_short_paragraphs_warning() {
        let mut warnings = Vec::new();
        check_paragraphs("one two\n\nthree four\n\n   \n\n", &mut warnings);
        assert_eq!(warnings.len(), 1);

        let mut warnings = Vec::new();
        check_paragraphs(&words(100), &mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_headings_warning() {
        let result = ContentValidator::default().validate(&words(50), "t", None, &[], None);
        assert!(result.warnings.iter().any(|w| w.starts_with("No headings found")));

        let result = ContentValidator::default().validate("## Intro\n\nbody", "t", None, &[], None);
        assert!(!result.warnings.iter().any(|w| w.starts_with("No headings found")));
    }

    #[test]
    fn test_empty_input_is_total() {
        let result = ContentValidator::default().validate("", "", None, &[], None);
        assert!(!result.is_valid);
        assert_eq!(result.stats.word_count, 0);
        assert_eq!(result.stats.read_time, 0);
    }

    #[test]
    fn test_validate_post_uses_draft_fields() {
        let post = PostDraft::new("t", words(10))
            .with_excerpt("x".repeat(200))
            .with_featured_image("https://cdn.example.com/a.png");
        let result = ContentValidator::default().validate_post(&post);
        assert!(result.stats.has_featured_image);
        assert!(!result.errors.contains(&"Missing excerpt".to_string()));
    }
}
