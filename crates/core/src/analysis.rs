//! Content analysis model - classifier output.

use serde::{Deserialize, Serialize};

/// Editorial content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// How-to and guides
    Tutorial,
    /// News and announcements
    News,
    /// Reviews and comparisons
    Review,
    /// Numbered or ranked lists
    Listicle,
    /// Opinion pieces
    Opinion,
    /// Interviews and Q&A
    Interview,
    /// Everything else
    Story,
    /// Code-heavy or technical writing
    Technical,
}

impl ContentType {
    /// Lowercase slug as used by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Tutorial => "tutorial",
            ContentType::News => "news",
            ContentType::Review => "review",
            ContentType::Listicle => "listicle",
            ContentType::Opinion => "opinion",
            ContentType::Interview => "interview",
            ContentType::Story => "story",
            ContentType::Technical => "technical",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing tone.
///
/// `Conversational` and `Inspirational` are never produced by the keyword
/// classifier; they are accepted from analyses supplied by the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral business register
    Professional,
    /// Informal
    Casual,
    /// Jargon-heavy
    Technical,
    /// Academic register
    Formal,
    /// First-person argument
    Opinion,
    /// Chatty, reader-addressed
    Conversational,
    /// Motivational
    Inspirational,
}

/// Reading complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Short sentences, plain words
    Beginner,
    /// Default tier
    Intermediate,
    /// Long sentences, long words
    Advanced,
}

/// How deep the content goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDepth {
    /// Under 500 words or fewer than 3 sections
    Shallow,
    /// Between shallow and deep
    Medium,
    /// Over 1500 words and more than 5 sections
    Deep,
}

/// Engagement signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    /// Call-to-action language present
    pub has_call_to_action: bool,
    /// Asks the reader questions
    pub has_questions: bool,
    /// Example markers present
    pub has_examples: bool,
    /// Images or tables present
    pub is_visually_rich: bool,
    /// 0-100
    pub interactivity_score: u8,
}

/// SEO structure signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeoQuality {
    /// At least one heading
    pub has_subheadings: bool,
    /// Headings per thousand words
    pub heading_density: f64,
    /// Depth tier
    pub content_depth: ContentDepth,
}

/// Structural facts carried over from the metrics for layout decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSummary {
    /// Words after tag stripping
    pub word_count: usize,
    /// Headings found
    pub section_count: usize,
    /// Numbered or bulleted list
    pub has_lists: bool,
    /// Code blocks
    pub has_code_blocks: bool,
    /// Images
    pub has_images: bool,
    /// Tables
    pub has_data_tables: bool,
    /// Comparison language
    pub has_comparisons: bool,
    /// "Step N" markers
    pub has_step_markers: bool,
}

/// Complete classification of one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Content type
    pub content_type: ContentType,

    /// Tone
    pub tone: Tone,

    /// Complexity tier
    pub complexity: Complexity,

    /// `ceil(word_count / 200)`
    pub reading_time_minutes: u32,

    /// Engagement sub-record
    pub engagement: Engagement,

    /// SEO sub-record
    pub seo_quality: SeoQuality,

    /// Structural facts
    pub structure: StructureSummary,
}
