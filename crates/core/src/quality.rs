//! Quality model - validation rules and results.

use serde::{Deserialize, Serialize};

/// Errors raised when a rule set violates its own invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Word-count bounds are inverted or empty
    #[error("min_word_count ({min}) must be below max_word_count ({max})")]
    WordCountBounds {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Publication thresholds applied by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Below this many words the post is thin (blocking).
    pub min_word_count: usize,

    /// Above this many words the post gets a length warning.
    pub max_word_count: usize,

    /// Block posts without an AI disclosure phrase.
    pub require_ai_disclosure: bool,

    /// Block posts with fewer than `min_internal_links` internal links.
    pub require_internal_links: bool,

    /// Required internal link count.
    pub min_internal_links: usize,

    /// Currently inert: a missing image is always a warning.
    pub require_featured_image: bool,

    /// Block posts without an excerpt.
    pub require_excerpt: bool,

    /// Shorter excerpts get a warning.
    pub min_excerpt_length: usize,

    /// Warn when fewer than `min_tags` tags are set.
    pub require_tags: bool,

    /// Recommended tag count.
    pub min_tags: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_word_count: 800,
            max_word_count: 5000,
            require_ai_disclosure: true,
            require_internal_links: true,
            min_internal_links: 2,
            require_featured_image: true,
            require_excerpt: true,
            min_excerpt_length: 120,
            require_tags: true,
            min_tags: 3,
        }
    }
}

impl ValidationRules {
    /// Check the rule-set invariants.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_word_count >= self.max_word_count {
            return Err(RulesError::WordCountBounds {
                min: self.min_word_count,
                max: self.max_word_count,
            });
        }
        Ok(())
    }
}

/// Snapshot of the numbers behind a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    /// Words after tag stripping
    pub word_count: usize,
    /// Reading time in minutes
    pub read_time: u32,
    /// Disclosure phrase found
    pub has_ai_disclosure: bool,
    /// At least one internal link
    pub has_internal_links: bool,
    /// Featured image set
    pub has_featured_image: bool,
}

/// Outcome of validating one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `errors.is_empty()`
    pub is_valid: bool,

    /// Blocking problems, in check order
    pub errors: Vec<String>,

    /// Advisory problems, in check order
    pub warnings: Vec<String>,

    /// Stats snapshot, always present
    pub stats: ValidationStats,
}

impl ValidationResult {
    /// Build a result, deriving validity from the error list.
    pub fn new(errors: Vec<String>, warnings: Vec<String>, stats: ValidationStats) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_consistent() {
        assert!(ValidationRules::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let rules = ValidationRules {
            min_word_count: 900,
            max_word_count: 900,
            ..Default::default()
        };
        assert_eq!(
            rules.validate(),
            Err(RulesError::WordCountBounds { min: 900, max: 900 })
        );
    }

    #[test]
    fn test_partial_rules_json_uses_defaults() {
        let rules: ValidationRules = serde_json::from_str(r#"{"min_word_count": 300}"#).unwrap();
        assert_eq!(rules.min_word_count, 300);
        assert_eq!(rules.max_word_count, 5000);
        assert!(rules.require_ai_disclosure);
    }

    #[test]
    fn test_validity_derives_from_errors() {
        let stats = ValidationStats {
            word_count: 10,
            read_time: 1,
            has_ai_disclosure: false,
            has_internal_links: false,
            has_featured_image: false,
        };
        assert!(ValidationResult::new(vec![], vec!["w".to_string()], stats).is_valid);
        assert!(!ValidationResult::new(vec!["e".to_string()], vec![], stats).is_valid);
    }
}
