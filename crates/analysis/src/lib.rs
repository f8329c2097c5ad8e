//! Content analysis.
//!
//! Heuristic metrics extraction and rule-based classification of article
//! bodies. The scans here are pattern matches over HTML or Markdown, not a
//! document parser: they only need to be good enough to drive thresholds
//! and layout choices.

#![warn(missing_docs)]

pub mod vocabulary;
pub mod metrics;
pub mod classification;

pub use metrics::{count_internal_links, count_words, extract_metrics, strip_tags};
pub use classification::ContentClassifier;
