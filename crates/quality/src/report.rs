//! Human-readable validation reports for the CLI and logs.

use std::fmt::Write;
use zenx_core::ValidationResult;

/// Format a validation result as a multi-line report.
pub fn format_report(result: &ValidationResult) -> String {
    let mut out = String::new();
    let stats = &result.stats;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Content Validation Report");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out, "Status: {}", if result.is_valid { "PASSED" } else { "FAILED" });
    let _ = writeln!(out, "Words: {} ({} min read)", stats.word_count, stats.read_time);
    let _ = writeln!(out, "AI disclosure: {}", yes_no(stats.has_ai_disclosure));
    let _ = writeln!(out, "Internal links: {}", yes_no(stats.has_internal_links));
    let _ = writeln!(out, "Featured image: {}", yes_no(stats.has_featured_image));

    if !result.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors ({}):", result.errors.len());
        for error in &result.errors {
            let _ = writeln!(out, "  x {}", error);
        }
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings ({}):", result.warnings.len());
        for warning in &result.warnings {
            let _ = writeln!(out, "  ! {}", warning);
        }
    }

    out
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenx_core::ValidationStats;

    fn stats() -> ValidationStats {
        ValidationStats {
            word_count: 650,
            read_time: 4,
            has_ai_disclosure: false,
            has_internal_links: true,
            has_featured_image: true,
        }
    }

    #[test]
    fn test_failed_report_lists_errors_and_warnings() {
        let result = ValidationResult::new(
            vec!["Thin content: 650 words (minimum 800 required)".to_string()],
            vec!["No featured image set".to_string()],
            stats(),
        );
        let report = format_report(&result);

        assert!(report.contains("Status: FAILED"));
        assert!(report.contains("Words: 650 (4 min read)"));
        assert!(report.contains("AI disclosure: no"));
        assert!(report.contains("Errors (1):\n  x Thin content"));
        assert!(report.contains("Warnings (1):\n  ! No featured image set"));
    }

    #[test]
    fn test_passed_report_omits_empty_sections() {
        let result = ValidationResult::new(vec![], vec![], stats());
        let report = format_report(&result);

        assert!(report.contains("Status: PASSED"));
        assert!(!report.contains("Errors"));
        assert!(!report.contains("Warnings"));
    }
}
