//! Layout model - rendering instructions handed to the template layer.

use serde::{Deserialize, Serialize};

/// Page template identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Step-by-step instructional page
    Tutorial,
    /// Compact news article
    News,
    /// Product or comparison review
    Review,
    /// Visual, list-driven magazine page
    Magazine,
    /// Long-form feature
    Feature,
    /// Plain fallback
    Minimal,
}

impl LayoutType {
    /// Lowercase slug as used by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Tutorial => "tutorial",
            LayoutType::News => "news",
            LayoutType::Review => "review",
            LayoutType::Magazine => "magazine",
            LayoutType::Feature => "feature",
            LayoutType::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for LayoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hero image treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroStyle {
    /// Full-width hero
    Large,
    /// Regular hero
    Standard,
    /// Small header image
    Compact,
}

/// Where the table of contents renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocPosition {
    /// In the sidebar
    Sidebar,
    /// Above the body
    Inline,
    /// Floating over the page
    Floating,
}

/// UI regions and how they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutComponents {
    /// Table of contents
    pub show_toc: bool,
    /// Sidebar column
    pub show_sidebar: bool,
    /// Comment thread
    pub show_comments: bool,
    /// Related posts
    pub show_related_posts: bool,
    /// Author bio
    pub show_author_bio: bool,
    /// Reading progress bar
    pub show_reading_progress: bool,
    /// Share buttons
    pub show_share_buttons: bool,
    /// Newsletter signup
    pub show_newsletter_signup: bool,
    /// Hero treatment
    pub hero_style: HeroStyle,
    /// Table of contents placement
    pub toc_position: TocPosition,
}

/// Article header treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Image hero header
    Hero,
    /// Headline banner
    Banner,
    /// Title and byline
    Standard,
    /// Title only
    Minimal,
}

/// Accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Blue accents
    Blue,
    /// Green accents
    Green,
    /// Purple accents
    Purple,
    /// Orange accents
    Orange,
    /// Greyscale
    Neutral,
}

/// Vertical rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Tight
    Compact,
    /// Default
    Comfortable,
    /// Generous
    Spacious,
}

/// Body font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    /// Small body text
    Small,
    /// Default body text
    Medium,
    /// Large body text
    Large,
}

/// Visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStyling {
    /// Header treatment
    pub header_style: HeaderStyle,
    /// Accent palette
    pub color_scheme: ColorScheme,
    /// Vertical rhythm
    pub spacing: Spacing,
    /// Body font size
    pub font_size: FontSize,
}

/// What the page optimises for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPriority {
    /// Long reads
    Readability,
    /// Interaction
    Engagement,
    /// Imagery
    Visual,
    /// No single focus
    Balanced,
}

/// Navigation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    /// Pinned while scrolling
    Sticky,
    /// Scrolls with the page
    Standard,
    /// Reduced to essentials
    Minimal,
}

/// Width of the main column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
    /// Reading column
    Narrow,
    /// Default column
    Standard,
    /// Room for tables and code
    Wide,
}

/// How loudly callouts and pull quotes render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisLevel {
    /// Understated
    Subtle,
    /// Default
    Moderate,
    /// Prominent
    Strong,
}

/// Advanced layout tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAdvanced {
    /// What the page optimises for
    pub layout_priority: LayoutPriority,
    /// Navigation behaviour
    pub navigation_style: NavigationStyle,
    /// Main column width
    pub content_width: ContentWidth,
    /// Callout emphasis
    pub emphasis_level: EmphasisLevel,
}

/// Complete rendering instruction for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLayout {
    /// Template identity
    pub layout_type: LayoutType,

    /// Component visibility
    pub components: LayoutComponents,

    /// Styling
    pub styling: LayoutStyling,

    /// Advanced tuning
    pub advanced: LayoutAdvanced,
}
