//! Vocabulary tables used by the metrics extractor.
//!
//! Each set is matched case-insensitively on word boundaries against the
//! de-tagged text. The four tone sets are disjoint.

use once_cell::sync::Lazy;
use regex::Regex;

/// Formal connector words.
pub const FORMAL_TERMS: &[&str] = &[
    "therefore", "furthermore", "moreover", "consequently", "nevertheless",
    "thus", "hence", "accordingly", "whereas", "notwithstanding",
];

/// Casual vocabulary.
pub const CASUAL_TERMS: &[&str] = &[
    "hey", "awesome", "cool", "gonna", "wanna", "stuff", "kinda", "pretty much",
    "lol", "btw", "super", "folks",
];

/// Technical vocabulary.
pub const TECHNICAL_TERMS: &[&str] = &[
    "api", "algorithm", "database", "framework", "server", "deployment",
    "architecture", "configuration", "implementation", "latency", "runtime",
    "compiler", "protocol", "endpoint", "query", "backend", "kubernetes",
];

/// First-person opinion markers.
pub const OPINION_TERMS: &[&str] = &[
    "i think", "i believe", "in my opinion", "in my view", "personally",
    "i feel", "frankly", "if you ask me",
];

/// Call-to-action phrases.
pub const CALL_TO_ACTION_TERMS: &[&str] = &[
    "subscribe", "sign up", "click here", "learn more", "get started",
    "try it", "download", "contact us", "join us", "share this",
];

/// Example markers.
pub const EXAMPLE_TERMS: &[&str] = &[
    "for example", "for instance", "e.g.", "such as", "example",
];

/// Rating and verdict language.
pub const RATING_TERMS: &[&str] = &[
    "out of 5", "out of 10", "stars", "rating", "verdict", "pros and cons",
    "our score",
];

/// Phrases that count as an AI disclosure. Any single match is enough.
///
/// The two-word phrases allow any gap, including line breaks.
pub static AI_DISCLOSURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)ai-generated|artificial intelligence|how we use ai|editorial process|\bai\b.*?assist|machine learning|automated.*?content",
    )
    .expect("disclosure pattern is valid")
});

/// Comparison language.
pub static COMPARISON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:vs\.?|versus|compared to|compared with|better than|worse than|head-to-head)(?:\s|$)")
        .expect("comparison pattern is valid")
});

/// "Step 1" style markers.
pub static STEP_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bstep\s*\d+\b|\bstep-by-step\b").expect("step pattern is valid")
});

pub(crate) static FORMAL: Lazy<Regex> = Lazy::new(|| term_set(FORMAL_TERMS));
pub(crate) static CASUAL: Lazy<Regex> = Lazy::new(|| term_set(CASUAL_TERMS));
pub(crate) static TECHNICAL: Lazy<Regex> = Lazy::new(|| term_set(TECHNICAL_TERMS));
pub(crate) static OPINION: Lazy<Regex> = Lazy::new(|| term_set(OPINION_TERMS));
pub(crate) static CALL_TO_ACTION: Lazy<Regex> = Lazy::new(|| term_set(CALL_TO_ACTION_TERMS));
pub(crate) static EXAMPLE: Lazy<Regex> = Lazy::new(|| term_set(EXAMPLE_TERMS));
pub(crate) static RATING: Lazy<Regex> = Lazy::new(|| term_set(RATING_TERMS));

/// Build one case-insensitive alternation over escaped terms.
///
/// The trailing boundary is a lookahead-free `(?:\W|$)` so terms ending in
/// punctuation ("e.g.") still match.
fn term_set(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})(?:\W|$)", alternation)).expect("escaped term set is valid")
}

/// Count non-overlapping matches of a term set.
pub(crate) fn count_hits(set: &Regex, text: &str) -> usize {
    set.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_sets_are_disjoint() {
        let sets = [FORMAL_TERMS, CASUAL_TERMS, TECHNICAL_TERMS, OPINION_TERMS];
        for (i, a) in sets.iter().enumerate() {
            for b in sets.iter().skip(i + 1) {
                assert!(a.iter().all(|t| !b.contains(t)), "overlap between tone sets");
            }
        }
    }

    #[test]
    fn test_term_set_respects_word_boundaries() {
        assert_eq!(count_hits(&TECHNICAL, "The API is rapid"), 1);
        assert_eq!(count_hits(&TECHNICAL, "capital"), 0);
        assert_eq!(count_hits(&FORMAL, "Thus, moreover; therefore."), 3);
    }

    #[test]
    fn test_term_set_handles_trailing_punctuation() {
        assert_eq!(count_hits(&EXAMPLE, "fruit, e.g. apples"), 1);
        assert_eq!(count_hits(&OPINION, "In my opinion it works"), 1);
    }

    #[test]
    fn test_ai_disclosure_phrases() {
        assert!(AI_DISCLOSURE.is_match("This article was created with AI assistance"));
        assert!(AI_DISCLOSURE.is_match("Read about our Editorial Process"));
        assert!(AI_DISCLOSURE.is_match("Some automated blog content"));
        assert!(!AI_DISCLOSURE.is_match("We maintain a tidy garden and assist neighbours"));
        assert!(!AI_DISCLOSURE.is_match("Content first, automated later"));
    }

    #[test]
    fn test_ai_disclosure_spans_long_gaps_and_lines() {
        assert!(AI_DISCLOSURE.is_match(
            "This draft was produced with AI tools and then our human editors assisted in polishing it."
        ));
        assert!(AI_DISCLOSURE.is_match("AI\nassistance was used."));
        assert!(AI_DISCLOSURE.is_match("Automated drafting tools.\n\nEvery piece of content is reviewed."));
    }

    #[test]
    fn test_comparison_and_steps() {
        assert!(COMPARISON.is_match("iPhone vs Pixel"));
        assert!(COMPARISON.is_match("faster compared to last year"));
        assert!(!COMPARISON.is_match("the versatile tool"));
        assert!(STEP_MARKER.is_match("Step 1: install"));
        assert!(STEP_MARKER.is_match("a step-by-step walkthrough"));
        assert!(!STEP_MARKER.is_match("one small step for man"));
    }
}
