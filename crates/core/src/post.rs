//! Post drafts and audits.

use serde::{Deserialize, Serialize};
use crate::analysis::ContentAnalysis;
use crate::id::AuditId;
use crate::layout::CustomLayout;
use crate::quality::ValidationResult;
use crate::Time;

/// A generated post as handed over by the generation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    /// Headline
    pub title: String,

    /// Body, HTML or Markdown
    pub content: String,

    /// Short summary shown in listings
    pub excerpt: Option<String>,

    /// Tag slugs
    pub tags: Vec<String>,

    /// Featured image URL
    pub featured_image: Option<String>,

    /// Category slug
    pub category: Option<String>,
}

impl PostDraft {
    /// Create a draft with a title and body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the featured image.
    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category slug, or `fallback` when absent or blank.
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => fallback,
        }
    }
}

/// Combined analysis, layout and validation of one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAudit {
    /// Unique identifier
    pub id: AuditId,

    /// When the audit ran
    pub audited_at: Time,

    /// Post title
    pub title: String,

    /// Category the layout was decided for
    pub category: String,

    /// Classifier output
    pub analysis: ContentAnalysis,

    /// Layout decision
    pub layout: CustomLayout,

    /// Validator output
    pub validation: ValidationResult,
}

impl ContentAudit {
    /// Create a new audit stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        analysis: ContentAnalysis,
        layout: CustomLayout,
        validation: ValidationResult,
    ) -> Self {
        Self {
            id: AuditId::new(),
            audited_at: chrono::Utc::now(),
            title: title.into(),
            category: category.into(),
            analysis,
            layout,
            validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_draft_from_minimal_json() {
        let draft: PostDraft = serde_json::from_str(r#"{"title": "Hello", "content": "Body"}"#).unwrap();
        assert_eq!(draft.title, "Hello");
        assert!(draft.tags.is_empty());
        assert!(draft.excerpt.is_none());
    }

    #[test]
    fn test_category_fallback() {
        let draft = PostDraft::new("t", "c");
        assert_eq!(draft.category_or("general"), "general");

        let draft = draft.with_category("  ");
        assert_eq!(draft.category_or("general"), "general");

        let draft = PostDraft::new("t", "c").with_category("health");
        assert_eq!(draft.category_or("general"), "health");
    }
}
