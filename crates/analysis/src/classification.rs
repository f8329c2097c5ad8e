//! Rule-based content classification.
//!
//! Content type is decided by an ordered list of `(type, predicate)` rules
//! evaluated top to bottom; the first predicate that holds wins. A title
//! like "Tutorial: My Honest Review" therefore resolves to `tutorial`.

use once_cell::sync::Lazy;
use regex::Regex;
use zenx_core::{
    Complexity, ContentAnalysis, ContentDepth, ContentMetrics, ContentType, Engagement,
    SeoQuality, StructureSummary, Tone,
};

use crate::metrics::extract_metrics;

static TUTORIAL_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:tutorial|guide|how to|how-to|walkthrough)\b").expect("tutorial pattern is valid")
});

static NEWS_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:breaking|announces?|announced|announcement|launches|launched|unveils?|just in)\b")
        .expect("news pattern is valid")
});

static REVIEW_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:review|reviewed|vs|versus|compared|comparison|rating|hands-on)\b")
        .expect("review pattern is valid")
});

static LISTICLE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*\d+\s|\b(?:top|best)\b|\b\d+\s+(?:ways|tips|reasons|things|ideas|tools|apps|steps|mistakes)\b",
    )
    .expect("listicle pattern is valid")
});

static INTERVIEW_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:interview|q&a|conversation with|talks with|in conversation|sits down with)\b")
        .expect("interview pattern is valid")
});

/// Technical vocabulary hits needed to call prose technical without code.
pub const TECHNICAL_VOCABULARY_MIN: usize = 3;

/// Opinion marker hits above which the tone is `opinion`.
pub const OPINION_TONE_THRESHOLD: usize = 3;

/// Average words per sentence below which prose reads as beginner level.
pub const BEGINNER_SENTENCE_LENGTH: f64 = 15.0;

/// Long-word count below which prose reads as beginner level.
pub const BEGINNER_LONG_WORDS: usize = 20;

/// Average words per sentence above which prose reads as advanced.
pub const ADVANCED_SENTENCE_LENGTH: f64 = 25.0;

/// Long-word count above which prose reads as advanced.
pub const ADVANCED_LONG_WORDS: usize = 50;

/// Inputs visible to a content-type rule.
pub struct RuleInput<'a> {
    /// Extracted metrics
    pub metrics: &'a ContentMetrics,
    /// Post title
    pub title: &'a str,
}

/// A content-type rule: the type it yields and when it applies.
pub type ContentTypeRule = (ContentType, fn(&RuleInput<'_>) -> bool);

/// Content-type rules in priority order. `story` is the fallback.
pub const CONTENT_TYPE_RULES: &[ContentTypeRule] = &[
    (ContentType::Tutorial, is_tutorial),
    (ContentType::News, is_news),
    (ContentType::Review, is_review),
    (ContentType::Listicle, is_listicle),
    (ContentType::Opinion, is_opinion),
    (ContentType::Interview, is_interview),
    (ContentType::Technical, is_technical),
];

fn is_tutorial(input: &RuleInput<'_>) -> bool {
    input.metrics.has_step_markers || TUTORIAL_TITLE.is_match(input.title)
}

fn is_news(input: &RuleInput<'_>) -> bool {
    NEWS_TITLE.is_match(input.title)
}

fn is_review(input: &RuleInput<'_>) -> bool {
    REVIEW_TITLE.is_match(input.title)
        || input.metrics.lexical.has_rating_language
        || input.metrics.has_comparisons
}

fn is_listicle(input: &RuleInput<'_>) -> bool {
    input.metrics.has_lists() && LISTICLE_TITLE.is_match(input.title)
}

fn is_opinion(input: &RuleInput<'_>) -> bool {
    input.metrics.lexical.opinion_hits > 0
}

fn is_interview(input: &RuleInput<'_>) -> bool {
    INTERVIEW_TITLE.is_match(input.title)
}

fn is_technical(input: &RuleInput<'_>) -> bool {
    input.metrics.has_code_blocks || input.metrics.lexical.technical_hits >= TECHNICAL_VOCABULARY_MIN
}

/// Interactivity points per engagement signal.
const CALL_TO_ACTION_POINTS: u32 = 20;
const QUESTION_POINTS: u32 = 15;
const EXAMPLE_POINTS: u32 = 15;
const STEP_POINTS: u32 = 20;
const VISUAL_POINTS: u32 = 15;
const LIST_POINTS: u32 = 15;

/// Rule-based content classifier.
#[derive(Debug, Clone, Default)]
pub struct ContentClassifier;

impl ContentClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Extract metrics from `content` and classify them.
    pub fn analyze(&self, content: &str, title: &str, category: &str) -> ContentAnalysis {
        self.classify(&extract_metrics(content), title, category)
    }

    /// Classify extracted metrics. Always returns a complete record.
    pub fn classify(&self, metrics: &ContentMetrics, title: &str, category: &str) -> ContentAnalysis {
        let content_type = Self::content_type(metrics, title);
        let engagement = Self::engagement(metrics);
        let seo_quality = Self::seo_quality(metrics);

        let analysis = ContentAnalysis {
            content_type,
            tone: Self::tone(metrics),
            complexity: Self::complexity(metrics),
            reading_time_minutes: metrics.reading_time_minutes(),
            engagement,
            seo_quality,
            structure: StructureSummary {
                word_count: metrics.word_count,
                section_count: metrics.section_count,
                has_lists: metrics.has_lists(),
                has_code_blocks: metrics.has_code_blocks,
                has_images: metrics.has_images,
                has_data_tables: metrics.has_data_tables,
                has_comparisons: metrics.has_comparisons,
                has_step_markers: metrics.has_step_markers,
            },
        };

        tracing::debug!(
            category,
            content_type = %analysis.content_type,
            tone = ?analysis.tone,
            complexity = ?analysis.complexity,
            interactivity = analysis.engagement.interactivity_score,
            "Classified content"
        );

        analysis
    }

    /// First matching content-type rule, else `story`.
    pub fn content_type(metrics: &ContentMetrics, title: &str) -> ContentType {
        let input = RuleInput { metrics, title };
        CONTENT_TYPE_RULES
            .iter()
            .find(|(_, applies)| applies(&input))
            .map(|(content_type, _)| *content_type)
            .unwrap_or(ContentType::Story)
    }

    /// Tone from the four vocabulary counts.
    pub fn tone(metrics: &ContentMetrics) -> Tone {
        let lexical = &metrics.lexical;
        if lexical.opinion_hits > OPINION_TONE_THRESHOLD {
            return Tone::Opinion;
        }

        let (formal, casual, technical) = (lexical.formal_hits, lexical.casual_hits, lexical.technical_hits);
        if formal == 0 && casual == 0 && technical == 0 {
            Tone::Professional
        } else if casual > formal && casual > technical {
            Tone::Casual
        } else if technical > formal && technical > casual {
            Tone::Technical
        } else {
            Tone::Formal
        }
    }

    /// Complexity from average sentence length and long-word count.
    pub fn complexity(metrics: &ContentMetrics) -> Complexity {
        let sentences = metrics.lexical.sentence_count.max(1);
        let average = metrics.word_count as f64 / sentences as f64;
        let long_words = metrics.lexical.long_word_count;

        if average > ADVANCED_SENTENCE_LENGTH || long_words > ADVANCED_LONG_WORDS {
            Complexity::Advanced
        } else if average < BEGINNER_SENTENCE_LENGTH && long_words < BEGINNER_LONG_WORDS {
            Complexity::Beginner
        } else {
            Complexity::Intermediate
        }
    }

    /// Engagement signals and the capped interactivity score.
    pub fn engagement(metrics: &ContentMetrics) -> Engagement {
        let lexical = &metrics.lexical;
        let has_call_to_action = lexical.has_call_to_action;
        let has_questions = lexical.question_mark_count > 2;
        let has_examples = lexical.has_example_markers;
        let is_visually_rich = metrics.has_images || metrics.has_data_tables;

        let signals = [
            (has_call_to_action, CALL_TO_ACTION_POINTS),
            (has_questions, QUESTION_POINTS),
            (has_examples, EXAMPLE_POINTS),
            (metrics.has_step_markers, STEP_POINTS),
            (is_visually_rich, VISUAL_POINTS),
            (metrics.has_lists(), LIST_POINTS),
        ];
        let score: u32 = signals
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, points)| points)
            .sum();

        Engagement {
            has_call_to_action,
            has_questions,
            has_examples,
            is_visually_rich,
            interactivity_score: score.min(100) as u8,
        }
    }

    /// Subheadings, heading density and depth.
    pub fn seo_quality(metrics: &ContentMetrics) -> SeoQuality {
        let heading_density = if metrics.word_count == 0 {
            0.0
        } else {
            metrics.section_count as f64 / metrics.word_count as f64 * 1000.0
        };

        let content_depth = if metrics.word_count < 500 || metrics.section_count < 3 {
            ContentDepth::Shallow
        } else if metrics.word_count > 1500 && metrics.section_count > 5 {
            ContentDepth::Deep
        } else {
            ContentDepth::Medium
        };

        SeoQuality {
            has_subheadings: metrics.section_count > 0,
            heading_density,
            content_depth,
        }
    }
}
