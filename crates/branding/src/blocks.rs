//! Editorial block injection and removal.
//!
//! Blocks are flat `<div class="zenx-*">` elements joined to the content
//! with a blank line. Detection is marker based: any owned class name or
//! the attribution phrase counts as branding.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Fixed author-attribution phrase.
pub const ATTRIBUTION_PHRASE: &str = "Written by the ImZenx Editorial Team";

/// Separator between injected blocks and the content.
const SEPARATOR: &str = "\n\n";

const ATTRIBUTION_CLASS: &str = "zenx-attribution";
const AI_SUMMARY_CLASS: &str = "zenx-ai-summary";
const EDITORS_NOTE_CLASS: &str = "zenx-editors-note";
const IMAGE_SUGGESTIONS_CLASS: &str = "zenx-image-suggestions";
const KEY_TAKEAWAYS_CLASS: &str = "zenx-key-takeaways";
pub(crate) const DISCLOSURE_CLASS: &str = "zenx-disclosure";

const OWNED_CLASSES: [&str; 6] = [
    ATTRIBUTION_CLASS,
    AI_SUMMARY_CLASS,
    EDITORS_NOTE_CLASS,
    IMAGE_SUGGESTIONS_CLASS,
    KEY_TAKEAWAYS_CLASS,
    DISCLOSURE_CLASS,
];

static OWNED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<div class="zenx-(?:attribution|ai-summary|editors-note|image-suggestions|key-takeaways|disclosure)">.*?</div>"#,
    )
    .expect("block pattern is valid")
});

/// Optional blocks for [`inject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOptions {
    /// Short AI-generated summary placed above the content.
    pub ai_summary: Option<String>,

    /// Editor's note placed below the content.
    pub editors_note: Option<String>,

    /// Key takeaway bullet points.
    pub key_takeaways: Vec<String>,

    /// Suggested image descriptions.
    pub images: Vec<String>,

    /// Leave out the disclosure footer.
    pub skip_disclosure: bool,

    /// Strip existing branding and inject again.
    pub rebrand: bool,
}

impl InjectOptions {
    /// Set the AI summary.
    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }

    /// Set the editor's note.
    pub fn with_editors_note(mut self, note: impl Into<String>) -> Self {
        self.editors_note = Some(note.into());
        self
    }

    /// Set the key takeaways.
    pub fn with_key_takeaways(mut self, takeaways: Vec<String>) -> Self {
        self.key_takeaways = takeaways;
        self
    }

    /// Set the image suggestions.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Leave out the disclosure footer.
    pub fn without_disclosure(mut self) -> Self {
        self.skip_disclosure = true;
        self
    }

    /// Replace existing branding instead of leaving it untouched.
    pub fn rebranding(mut self) -> Self {
        self.rebrand = true;
        self
    }
}

/// Whether the content already carries any owned block or the attribution phrase.
pub fn has_branding(content: &str) -> bool {
    content.contains(ATTRIBUTION_PHRASE)
        || OWNED_CLASSES
            .iter()
            .any(|class| content.contains(&format!("class=\"{class}\"")))
}

/// Wrap content with the standard editorial blocks.
///
/// Order: attribution, AI summary, content, editor's note, image
/// suggestions, key takeaways, disclosure footer. Content that already has
/// branding is returned unchanged unless `options.rebrand` is set.
pub fn inject(content: &str, options: &InjectOptions) -> String {
    let base = if options.rebrand {
        strip(content)
    } else if has_branding(content) {
        debug!("Content already branded, skipping injection");
        return content.to_string();
    } else {
        content.to_string()
    };

    let mut parts = vec![attribution_block()];

    if let Some(summary) = non_blank(options.ai_summary.as_deref()) {
        parts.push(paragraph_block(AI_SUMMARY_CLASS, "AI Summary:", summary));
    }

    if !base.is_empty() {
        parts.push(base);
    }

    if let Some(note) = non_blank(options.editors_note.as_deref()) {
        parts.push(paragraph_block(EDITORS_NOTE_CLASS, "Editor's Note:", note));
    }

    if !options.images.is_empty() {
        parts.push(format!(
            "<div class=\"{IMAGE_SUGGESTIONS_CLASS}\"><p><strong>Suggested images:</strong></p>{}</div>",
            list_items(&options.images)
        ));
    }

    if !options.key_takeaways.is_empty() {
        parts.push(format!(
            "<div class=\"{KEY_TAKEAWAYS_CLASS}\"><h3>Key Takeaways</h3>{}</div>",
            list_items(&options.key_takeaways)
        ));
    }

    if !options.skip_disclosure {
        parts.push(disclosure_block());
    }

    debug!(blocks = parts.len(), rebrand = options.rebrand, "Injected branding");
    parts.join(SEPARATOR)
}

/// Remove every owned block, leaving all other content untouched.
///
/// Content without owned blocks is returned as-is. Removal repeats until no
/// owned block remains, since taking one out can join its neighbours into
/// another.
pub fn strip(content: &str) -> String {
    let mut current = content.to_string();
    while OWNED_BLOCK.is_match(&current) {
        current = strip_pass(&current);
    }
    current
}

fn strip_pass(content: &str) -> String {
    // Each block takes one adjacent separator with it: the following one
    // when present, otherwise the one before it.
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for block in OWNED_BLOCK.find_iter(content) {
        out.push_str(&content[cursor..block.start()]);
        cursor = block.end();
        if content[cursor..].starts_with(SEPARATOR) {
            cursor += SEPARATOR.len();
        } else if out.ends_with(SEPARATOR) {
            out.truncate(out.len() - SEPARATOR.len());
        }
    }
    out.push_str(&content[cursor..]);
    out
}

/// Standard disclosure footer.
pub fn disclosure_block() -> String {
    format!(
        "<div class=\"{DISCLOSURE_CLASS}\"><p><em>This article was created with AI assistance \
         and reviewed by the ImZenx editorial team. Learn \
         <a href=\"/how-we-use-ai\">how we use AI</a>.</em></p></div>"
    )
}

fn attribution_block() -> String {
    format!("<div class=\"{ATTRIBUTION_CLASS}\"><p>{ATTRIBUTION_PHRASE}</p></div>")
}

fn paragraph_block(class: &str, label: &str, text: &str) -> String {
    format!(
        "<div class=\"{class}\"><p><strong>{label}</strong> {}</p></div>",
        escape_html(text)
    )
}

fn list_items(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{items}</ul>")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_options() -> InjectOptions {
        InjectOptions::default()
            .with_ai_summary("A short summary.")
            .with_editors_note("Reviewed on Monday.")
            .with_key_takeaways(vec!["First".to_string(), "Second".to_string()])
            .with_images(vec!["A chart of results".to_string()])
    }

    #[test]
    fn test_inject_block_order() {
        let branded = inject("<p>Body text.</p>", &full_options());

        let positions: Vec<usize> = [
            ATTRIBUTION_CLASS,
            AI_SUMMARY_CLASS,
            "<p>Body text.</p>",
            EDITORS_NOTE_CLASS,
            IMAGE_SUGGESTIONS_CLASS,
            KEY_TAKEAWAYS_CLASS,
            DISCLOSURE_CLASS,
        ]
        .iter()
        .map(|marker| branded.find(marker).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_inject_minimal_options() {
        let branded = inject("Body", &InjectOptions::default());
        assert!(branded.starts_with("<div class=\"zenx-attribution\">"));
        assert!(branded.contains("\n\nBody\n\n"));
        assert!(branded.ends_with(&disclosure_block()));
        assert!(!branded.contains(AI_SUMMARY_CLASS));
        assert!(!branded.contains(IMAGE_SUGGESTIONS_CLASS));
        assert!(!branded.contains(KEY_TAKEAWAYS_CLASS));
    }

    #[test]
    fn test_skip_disclosure() {
        let branded = inject("Body", &InjectOptions::default().without_disclosure());
        assert!(!branded.contains(DISCLOSURE_CLASS));
    }

    #[test]
    fn test_inject_twice_does_not_duplicate() {
        let options = full_options();
        let once = inject("Body", &options);
        let twice = inject(&once, &options);
        assert_eq!(once, twice);
        assert_eq!(twice.matches(ATTRIBUTION_PHRASE).count(), 1);
    }

    #[test]
    fn test_already_attributed_content_unchanged() {
        let content = format!("<p>{ATTRIBUTION_PHRASE}</p>\n\nThe article body.");
        assert!(has_branding(&content));
        assert_eq!(inject(&content, &InjectOptions::default()), content);
    }

    #[test]
    fn test_rebrand_replaces_blocks() {
        let first = inject("Body", &InjectOptions::default().with_ai_summary("Old"));
        let second = inject(
            &first,
            &InjectOptions::default().with_ai_summary("New").rebranding(),
        );
        assert!(second.contains("New"));
        assert!(!second.contains("Old"));
        assert_eq!(second.matches(ATTRIBUTION_CLASS).count(), 1);
    }

    /// Removing the inner block leaves a complete disclosure block behind.
    const NESTED_BLOCKS: &str =
        "<div class=\"zenx-<div class=\"zenx-attribution\">x</div>disclosure\">y</div>\n\nBody";

    #[test]
    fn test_strip_removes_blocks_formed_by_removal() {
        assert_eq!(strip(NESTED_BLOCKS), "Body");
        assert_eq!(strip(&strip(NESTED_BLOCKS)), strip(NESTED_BLOCKS));
    }

    #[test]
    fn test_strip_without_blocks_is_noop() {
        let content = "  <div class=\"other\">keep</div>\n\n";
        assert_eq!(strip(content), content);
    }

    #[test]
    fn test_strip_leaves_foreign_content() {
        let content = "<div class=\"callout\">Tip</div>\n\nBody";
        let branded = inject(content, &full_options());
        assert_eq!(strip(&branded), content);
    }

    #[test]
    fn test_strip_inject_roundtrip_property() {
        let samples = [
            "",
            "Body",
            "Body\n",
            "\n\nLeading blank lines",
            "# Heading\n\nParagraph one.\n\nParagraph two.\n",
            NESTED_BLOCKS,
        ];
        let options = [InjectOptions::default(), full_options(), full_options().without_disclosure()];

        for sample in samples {
            let base = strip(sample);
            for opts in &options {
                let branded = inject(&base, opts);
                assert!(has_branding(&branded));
                assert_eq!(strip(&branded), base, "sample {sample:?}");
            }
        }
    }

    #[test]
    fn test_strip_of_branded_input_matches_original() {
        let original = "Intro.\n\nMore text.";
        let branded = inject(original, &full_options());
        let base = strip(&branded);
        assert_eq!(base, original);
        assert_eq!(strip(&inject(&base, &InjectOptions::default())), base);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let branded = inject(
            "Body",
            &InjectOptions::default().with_editors_note("Use <b> & </div> carefully"),
        );
        assert!(branded.contains("Use &lt;b&gt; &amp; &lt;/div&gt; carefully"));
        assert_eq!(strip(&branded), "Body");
    }

    #[test]
    fn test_blank_summary_is_skipped() {
        let branded = inject("Body", &InjectOptions::default().with_ai_summary("   "));
        assert!(!branded.contains(AI_SUMMARY_CLASS));
    }
}
