//! Branding and compliance transforms.
//!
//! Idempotent insertion and removal of the standard editorial blocks, plus
//! automated fixes for disclosure and internal-link requirements. All
//! functions return new strings; input is never modified in place.

#![warn(missing_docs)]

pub mod blocks;
pub mod fixer;

pub use blocks::{inject, strip, has_branding, InjectOptions};
pub use fixer::{ComplianceFixer, FixAction, FixOutcome, RelatedLink};
