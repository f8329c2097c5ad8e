//! Zenx core data models.
//!
//! Transient value objects shared by the content analysis, validation,
//! layout and branding crates. Nothing here is persisted.

#![warn(missing_docs)]

// Identities
mod id;

// Analysis pipeline
mod content;
mod analysis;
mod quality;
mod layout;

// Posts and audits
mod post;

pub use id::AuditId;

pub use content::{ContentMetrics, LexicalProfile, reading_time_minutes, WORDS_PER_MINUTE};
pub use analysis::{
    ContentAnalysis, ContentType, Tone, Complexity, ContentDepth,
    Engagement, SeoQuality, StructureSummary,
};
pub use quality::{ValidationRules, ValidationResult, ValidationStats, RulesError};
pub use layout::{
    CustomLayout, LayoutType, LayoutComponents, LayoutStyling, LayoutAdvanced,
    HeroStyle, TocPosition, HeaderStyle, ColorScheme, Spacing, FontSize,
    LayoutPriority, NavigationStyle, ContentWidth, EmphasisLevel,
};
pub use post::{PostDraft, ContentAudit};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
