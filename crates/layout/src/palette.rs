//! Category lookups.

use zenx_core::{ColorScheme, LayoutType};

/// Category to colour scheme. Unknown categories are neutral.
pub const CATEGORY_COLORS: &[(&str, ColorScheme)] = &[
    ("technology", ColorScheme::Blue),
    ("health", ColorScheme::Green),
    ("lifestyle", ColorScheme::Purple),
    ("entertainment", ColorScheme::Orange),
    ("business", ColorScheme::Blue),
    ("world-news", ColorScheme::Neutral),
    ("science", ColorScheme::Blue),
    ("politics", ColorScheme::Neutral),
    ("sports", ColorScheme::Orange),
];

/// Trim, lower-case and hyphenate a category slug.
///
/// "World News" and "world_news" both become `world-news`.
pub fn normalize_category(category: &str) -> String {
    category
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Colour scheme for a category.
pub fn color_scheme(category: &str) -> ColorScheme {
    let slug = normalize_category(category);
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == slug)
        .map(|(_, scheme)| *scheme)
        .unwrap_or(ColorScheme::Neutral)
}

/// Layout used when no content rule matched.
pub fn category_default_layout(category: &str) -> LayoutType {
    match normalize_category(category).as_str() {
        "entertainment" => LayoutType::Magazine,
        "business" | "world-news" => LayoutType::Feature,
        _ => LayoutType::Minimal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("  World News "), "world-news");
        assert_eq!(normalize_category("world_news"), "world-news");
        assert_eq!(normalize_category("Technology"), "technology");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn test_color_table() {
        assert_eq!(color_scheme("technology"), ColorScheme::Blue);
        assert_eq!(color_scheme("Health"), ColorScheme::Green);
        assert_eq!(color_scheme("lifestyle"), ColorScheme::Purple);
        assert_eq!(color_scheme("entertainment"), ColorScheme::Orange);
        assert_eq!(color_scheme("sports"), ColorScheme::Orange);
        assert_eq!(color_scheme("World News"), ColorScheme::Neutral);
        assert_eq!(color_scheme("gardening"), ColorScheme::Neutral);
        assert_eq!(color_scheme(""), ColorScheme::Neutral);
    }

    #[test]
    fn test_category_default_layout() {
        assert_eq!(category_default_layout("entertainment"), LayoutType::Magazine);
        assert_eq!(category_default_layout("business"), LayoutType::Feature);
        assert_eq!(category_default_layout("world-news"), LayoutType::Feature);
        assert_eq!(category_default_layout("health"), LayoutType::Minimal);
        assert_eq!(category_default_layout(""), LayoutType::Minimal);
    }
}
