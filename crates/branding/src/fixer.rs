//! Automated compliance fixes.
//!
//! Appends the missing pieces the validator would otherwise block on: the
//! disclosure footer and a further-reading block of internal links. Content
//! that already satisfies a rule is left alone, so fixing twice is a no-op.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use zenx_analysis::{count_internal_links, extract_metrics};
use zenx_core::ValidationRules;

use crate::blocks::{disclosure_block, escape_html, DISCLOSURE_CLASS};

const FURTHER_READING_CLASS: &str = "zenx-further-reading";

/// Site pages used once related posts run out.
const STANDARD_PAGES: [(&str, &str); 3] = [
    ("/about", "About ImZenx"),
    ("/category/technology", "More in Technology"),
    ("/category/business", "More in Business"),
];

/// An internal link offered to the fixer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Site-relative path, e.g. `/blog/my-post`.
    pub path: String,

    /// Link text.
    pub title: String,
}

impl RelatedLink {
    /// Create a new related link.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// A change made by the fixer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FixAction {
    /// Appended the disclosure footer.
    AddedDisclosure,

    /// Appended a further-reading block.
    AddedInternalLinks {
        /// Links in the block.
        links: usize,
    },
}

impl fmt::Display for FixAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixAction::AddedDisclosure => write!(f, "added AI disclosure footer"),
            FixAction::AddedInternalLinks { links } => {
                write!(f, "added further reading block with {} link(s)", links)
            }
        }
    }
}

/// Result of a fix pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixOutcome {
    /// Fixed content.
    pub content: String,

    /// Changes made, in order.
    pub applied: Vec<FixAction>,
}

impl FixOutcome {
    /// Whether the content was changed.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Appends disclosure and internal links where rules require them.
#[derive(Debug, Clone, Default)]
pub struct ComplianceFixer {
    related: Vec<RelatedLink>,
}

impl ComplianceFixer {
    /// Create a fixer that links only standard site pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer these links before the standard pages.
    pub fn with_related(mut self, related: Vec<RelatedLink>) -> Self {
        self.related = related;
        self
    }

    /// Fix the content against the rules.
    pub fn fix(&self, content: &str, rules: &ValidationRules) -> FixOutcome {
        let metrics = extract_metrics(content);
        let mut applied = Vec::new();

        let add_disclosure = rules.require_ai_disclosure && !metrics.has_ai_disclosure;
        let mut link_count = metrics.internal_link_count;
        let footer = if add_disclosure {
            let footer = disclosure_block();
            link_count += count_internal_links(&footer);
            Some(footer)
        } else {
            None
        };

        let mut fixed = content.to_string();

        if rules.require_internal_links
            && link_count < rules.min_internal_links
            && !content.contains(FURTHER_READING_CLASS)
        {
            if let Some((block, links)) =
                self.further_reading(content, rules.min_internal_links - link_count)
            {
                fixed = insert_before_disclosure(&fixed, &block);
                applied.push(FixAction::AddedInternalLinks { links });
            }
        }

        if let Some(footer) = footer {
            fixed = append_block(&fixed, &footer);
            applied.push(FixAction::AddedDisclosure);
        }

        debug!(actions = applied.len(), "Compliance fix complete");
        FixOutcome {
            content: fixed,
            applied,
        }
    }

    /// Build a block worth at least `needed` counted links, skipping paths
    /// already present in the content.
    fn further_reading(&self, content: &str, needed: usize) -> Option<(String, usize)> {
        let candidates = self
            .related
            .iter()
            .map(|link| (link.path.as_str(), link.title.as_str()))
            .chain(STANDARD_PAGES.iter().copied())
            .filter(|(path, _)| !links_to(content, path));

        let mut items = String::new();
        let mut links = 0;
        let mut counted = 0;
        for (path, title) in candidates {
            if counted >= needed {
                break;
            }
            let anchor = format!(
                "<a href=\"{}\">{}</a>",
                escape_html(path),
                escape_html(title)
            );
            let value = count_internal_links(&anchor);
            if value == 0 {
                continue;
            }
            items.push_str(&format!("<li>{anchor}</li>"));
            links += 1;
            counted += value;
        }

        if links == 0 {
            return None;
        }
        Some((
            format!(
                "<div class=\"{FURTHER_READING_CLASS}\"><h3>Further reading</h3><ul>{items}</ul></div>"
            ),
            links,
        ))
    }
}

/// Whether the content already links `path` as an HTML href or a Markdown target.
fn links_to(content: &str, path: &str) -> bool {
    [
        format!("\"{path}\""),
        format!("'{path}'"),
        format!("]({path})"),
        format!("]({path} "),
    ]
    .iter()
    .any(|needle| content.contains(needle.as_str()))
}

fn append_block(content: &str, block: &str) -> String {
    let body = content.trim_end();
    if body.is_empty() {
        block.to_string()
    } else {
        format!("{body}\n\n{block}")
    }
}

/// Keep the disclosure footer last when one is already present.
fn insert_before_disclosure(content: &str, block: &str) -> String {
    let marker = format!("<div class=\"{DISCLOSURE_CLASS}\">");
    match content.find(&marker) {
        Some(at) => format!("{}{block}\n\n{}", &content[..at], &content[at..]),
        None => append_block(content, block),
    }
}
