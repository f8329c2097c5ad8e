//! Content Quality Assurance
//!
//! Publication-quality validation and operator reports.

#![warn(missing_docs)]

pub mod validator;
pub mod report;

pub use validator::ContentValidator;
pub use report::format_report;
