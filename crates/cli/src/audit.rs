//! Post audits: classification, layout and validation for one draft, and
//! bounded-concurrency batches.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use zenx_analysis::{extract_metrics, ContentClassifier};
use zenx_core::{ContentAudit, PostDraft};
use zenx_layout::{normalize_category, LayoutEngine};
use zenx_quality::ContentValidator;

use crate::config::ZenxConfig;
use crate::source::LoadedPost;

/// Runs the three pipelines over a draft.
#[derive(Debug, Clone)]
pub struct Auditor {
    classifier: ContentClassifier,
    validator: ContentValidator,
    engine: LayoutEngine,
    default_category: String,
}

impl Auditor {
    /// Create a new auditor from configuration.
    pub fn new(config: &ZenxConfig) -> Self {
        Self {
            classifier: ContentClassifier::new(),
            validator: ContentValidator::new(config.rules.clone()),
            engine: LayoutEngine::new(),
            default_category: config.default_category.clone(),
        }
    }

    /// Normalised category for a draft, falling back to the default.
    pub fn category_for(&self, draft: &PostDraft) -> String {
        normalize_category(draft.category_or(&self.default_category))
    }

    /// Audit one draft. Metrics are extracted once and shared.
    pub fn audit(&self, draft: &PostDraft) -> ContentAudit {
        let category = self.category_for(draft);
        let metrics = extract_metrics(&draft.content);

        let analysis = self.classifier.classify(&metrics, &draft.title, &category);
        let layout = self.engine.decide(&analysis, &category);
        let validation = self.validator.validate_metrics(
            &metrics,
            &draft.content,
            &draft.title,
            draft.excerpt.as_deref(),
            &draft.tags,
            draft.featured_image.as_deref(),
        );

        ContentAudit::new(draft.title.clone(), category, analysis, layout, validation)
    }

    /// Audit drafts concurrently, at most `concurrency` at a time.
    /// Results keep the input order.
    pub async fn audit_batch(
        self: Arc<Self>,
        posts: Vec<LoadedPost>,
        concurrency: usize,
    ) -> Result<Vec<AuditEntry>> {
        let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

        let mut handles = Vec::with_capacity(posts.len());
        for post in posts {
            let auditor = Arc::clone(&self);
            let semaphore = Arc::clone(&semaphore);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .context("audit semaphore closed")?;
                let audit = auditor.audit(&post.draft);
                tracing::debug!(origin = %post.origin.display(), valid = audit.validation.is_valid, "Audited draft");
                Ok::<_, anyhow::Error>(AuditEntry {
                    origin: post.origin,
                    audit,
                })
            }));
        }

        let mut entries = Vec::with_capacity(handles.len());
        for handle in handles {
            entries.push(handle.await.context("audit task panicked")??);
        }
        Ok(entries)
    }
}

/// One audited draft.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// File the draft came from.
    pub origin: PathBuf,

    /// Audit result.
    pub audit: ContentAudit,
}

impl AuditEntry {
    /// One-line summary for terminal output.
    pub fn summary_line(&self) -> String {
        let audit = &self.audit;
        format!(
            "{} {} | {} words | {} -> {} | {} error(s), {} warning(s)",
            if audit.validation.is_valid { "PASS" } else { "FAIL" },
            self.origin.display(),
            audit.validation.stats.word_count,
            audit.analysis.content_type,
            audit.layout.layout_type,
            audit.validation.errors.len(),
            audit.validation.warnings.len(),
        )
    }
}

/// Totals over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Drafts audited.
    pub audited: usize,

    /// Drafts that passed validation.
    pub valid: usize,

    /// Drafts that failed validation.
    pub invalid: usize,

    /// Files that could not be loaded.
    pub unreadable: usize,
}

impl AuditSummary {
    /// Tally a batch.
    pub fn from_entries(entries: &[AuditEntry], unreadable: usize) -> Self {
        let valid = entries.iter().filter(|e| e.audit.validation.is_valid).count();
        Self {
            audited: entries.len(),
            valid,
            invalid: entries.len() - valid,
            unreadable,
        }
    }

    /// Whether every loaded draft passed and nothing was unreadable.
    pub fn all_passed(&self) -> bool {
        self.invalid == 0 && self.unreadable == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenx_core::{ContentType, LayoutType};

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ")
    }

    fn compliant_draft() -> PostDraft {
        let content = format!(
            "## Overview\n\nThis article was created with AI assistance. \
             Read [one](/blog/one), [two](/blog/two) and [three](/blog/three).\n\n{}",
            words(1000)
        );
        PostDraft::new("A complete guide to quarterly planning for teams", content)
            .with_excerpt("x".repeat(150))
            .with_tags(vec!["a".into(), "b".into(), "c".into()])
            .with_featured_image("/img/cover.png")
            .with_category("Business")
    }

    fn loaded(name: &str, draft: PostDraft) -> LoadedPost {
        LoadedPost {
            origin: PathBuf::from(name),
            draft,
        }
    }

    #[test]
    fn test_audit_combines_pipelines() {
        let auditor = Auditor::new(&ZenxConfig::default());
        let audit = auditor.audit(&compliant_draft());

        assert_eq!(audit.category, "business");
        assert!(audit.validation.is_valid, "{:?}", audit.validation.errors);
        assert_eq!(audit.analysis.structure.word_count, audit.validation.stats.word_count);
    }

    #[test]
    fn test_missing_category_uses_default() {
        let auditor = Auditor::new(&ZenxConfig::default());
        let audit = auditor.audit(&PostDraft::new("Title", "Body"));
        assert_eq!(audit.category, "general");
        assert!(!audit.validation.is_valid);
    }

    #[test]
    fn test_breaking_news_audit() {
        let auditor = Auditor::new(&ZenxConfig::default());
        let draft = PostDraft::new(
            "Breaking: Company Announces Merger",
            "Markets reacted calmly to the deal. ".repeat(120),
        );
        let audit = auditor.audit(&draft);

        assert_eq!(audit.analysis.content_type, ContentType::News);
        assert_eq!(audit.layout.layout_type, LayoutType::News);
        assert!(!audit.layout.components.show_comments);
    }

    #[tokio::test]
    async fn test_batch_keeps_order_and_counts() {
        let auditor = Arc::new(Auditor::new(&ZenxConfig::default()));
        let posts = vec![
            loaded("a.json", compliant_draft()),
            loaded("b.json", PostDraft::new("Thin", "Too short.")),
            loaded("c.json", compliant_draft()),
        ];

        let entries = auditor.audit_batch(posts, 2).await.unwrap();
        let origins: Vec<_> = entries.iter().map(|e| e.origin.clone()).collect();
        assert_eq!(
            origins,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json"), PathBuf::from("c.json")]
        );

        let summary = AuditSummary::from_entries(&entries, 1);
        assert_eq!(
            summary,
            AuditSummary {
                audited: 3,
                valid: 2,
                invalid: 1,
                unreadable: 1
            }
        );
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_summary_line() {
        let auditor = Auditor::new(&ZenxConfig::default());
        let entry = AuditEntry {
            origin: PathBuf::from("posts/thin.json"),
            audit: auditor.audit(&PostDraft::new("Thin", "Too short.")),
        };
        let line = entry.summary_line();
        assert!(line.starts_with("FAIL posts/thin.json | 2 words"));
    }
}
