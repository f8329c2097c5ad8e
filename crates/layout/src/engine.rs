//! Layout decision engine.

use zenx_core::{
    Complexity, ContentAnalysis, ContentDepth, ContentType, ContentWidth, CustomLayout,
    EmphasisLevel, FontSize, HeaderStyle, HeroStyle, LayoutAdvanced, LayoutComponents,
    LayoutPriority, LayoutStyling, LayoutType, NavigationStyle, Spacing, TocPosition, Tone,
};

use crate::palette::{category_default_layout, color_scheme};

/// A layout rule: the template it yields and when it applies.
pub type LayoutRule = (LayoutType, fn(&ContentAnalysis) -> bool);

/// Layout rules in priority order. The category default is the fallback.
pub const LAYOUT_RULES: &[LayoutRule] = &[
    (LayoutType::Tutorial, is_instructional),
    (LayoutType::News, is_quick_news),
    (LayoutType::Review, is_comparative),
    (LayoutType::Magazine, is_list_driven),
    (LayoutType::Feature, is_long_form),
    (LayoutType::Magazine, is_highly_interactive),
];

fn is_instructional(a: &ContentAnalysis) -> bool {
    matches!(a.content_type, ContentType::Tutorial | ContentType::Technical)
}

fn is_quick_news(a: &ContentAnalysis) -> bool {
    a.content_type == ContentType::News && a.reading_time_minutes < 5
}

fn is_comparative(a: &ContentAnalysis) -> bool {
    a.content_type == ContentType::Review || a.structure.has_comparisons
}

fn is_list_driven(a: &ContentAnalysis) -> bool {
    a.content_type == ContentType::Listicle || (a.structure.has_lists && a.structure.section_count > 4)
}

fn is_long_form(a: &ContentAnalysis) -> bool {
    a.seo_quality.content_depth == ContentDepth::Deep && a.reading_time_minutes > 8
}

fn is_highly_interactive(a: &ContentAnalysis) -> bool {
    a.engagement.interactivity_score > 60
}

/// Deterministic, side-effect-free layout selection.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Decide the complete layout for an analysed article.
    pub fn decide(&self, analysis: &ContentAnalysis, category: &str) -> CustomLayout {
        let layout = CustomLayout {
            layout_type: Self::layout_type(analysis, category),
            components: Self::components(analysis),
            styling: Self::styling(analysis, category),
            advanced: Self::advanced(analysis),
        };

        tracing::debug!(
            category,
            content_type = %analysis.content_type,
            layout = %layout.layout_type,
            "Selected layout"
        );

        layout
    }

    /// First matching layout rule, else the category default.
    pub fn layout_type(analysis: &ContentAnalysis, category: &str) -> LayoutType {
        LAYOUT_RULES
            .iter()
            .find(|(_, applies)| applies(analysis))
            .map(|(layout_type, _)| *layout_type)
            .unwrap_or_else(|| category_default_layout(category))
    }

    /// Component visibility.
    pub fn components(a: &ContentAnalysis) -> LayoutComponents {
        let depth = a.seo_quality.content_depth;
        let deep = depth == ContentDepth::Deep;
        let advanced = a.complexity == Complexity::Advanced;

        let hero_style = if matches!(
            a.content_type,
            ContentType::Story | ContentType::Opinion | ContentType::Interview
        ) {
            HeroStyle::Large
        } else if matches!(
            a.content_type,
            ContentType::Tutorial | ContentType::Technical | ContentType::News
        ) {
            HeroStyle::Compact
        } else {
            HeroStyle::Standard
        };

        let toc_position = if advanced || deep {
            TocPosition::Sidebar
        } else if a.structure.has_step_markers {
            TocPosition::Inline
        } else {
            TocPosition::Floating
        };

        LayoutComponents {
            show_toc: a.structure.section_count >= 4
                || a.reading_time_minutes > 5
                || a.structure.has_step_markers
                || deep,
            show_sidebar: advanced
                || deep
                || a.content_type == ContentType::Tutorial
                || a.structure.has_comparisons
                || a.structure.has_data_tables,
            show_comments: a.content_type != ContentType::News,
            show_related_posts: !(depth == ContentDepth::Shallow && a.reading_time_minutes < 2),
            show_author_bio: advanced
                || matches!(
                    a.content_type,
                    ContentType::Opinion | ContentType::Review | ContentType::Interview | ContentType::Story
                ),
            show_reading_progress: a.reading_time_minutes > 5,
            show_share_buttons: a.engagement.interactivity_score >= 30
                || matches!(a.content_type, ContentType::News | ContentType::Listicle),
            show_newsletter_signup: a.engagement.has_call_to_action || deep,
            hero_style,
            toc_position,
        }
    }

    /// Visual styling.
    pub fn styling(a: &ContentAnalysis, category: &str) -> LayoutStyling {
        let header_style = match a.content_type {
            ContentType::News => HeaderStyle::Banner,
            ContentType::Story | ContentType::Opinion | ContentType::Interview => HeaderStyle::Hero,
            ContentType::Tutorial | ContentType::Technical => HeaderStyle::Minimal,
            ContentType::Review | ContentType::Listicle => HeaderStyle::Standard,
        };

        let spacing = if a.complexity == Complexity::Advanced
            || a.seo_quality.content_depth == ContentDepth::Deep
        {
            Spacing::Spacious
        } else if matches!(a.content_type, ContentType::News | ContentType::Listicle) {
            Spacing::Compact
        } else {
            Spacing::Comfortable
        };

        let font_size = match a.tone {
            Tone::Casual | Tone::Conversational => FontSize::Large,
            Tone::Technical => FontSize::Small,
            _ => FontSize::Medium,
        };

        LayoutStyling {
            header_style,
            color_scheme: color_scheme(category),
            spacing,
            font_size,
        }
    }

    /// Advanced tuning.
    pub fn advanced(a: &ContentAnalysis) -> LayoutAdvanced {
        let layout_priority = if a.complexity == Complexity::Advanced
            || a.seo_quality.content_depth == ContentDepth::Deep
        {
            LayoutPriority::Readability
        } else if a.engagement.interactivity_score > 60 {
            LayoutPriority::Engagement
        } else if a.engagement.is_visually_rich {
            LayoutPriority::Visual
        } else {
            LayoutPriority::Balanced
        };

        let navigation_style = if a.content_type == ContentType::News {
            NavigationStyle::Minimal
        } else if a.structure.section_count >= 4 || a.reading_time_minutes > 8 {
            NavigationStyle::Sticky
        } else {
            NavigationStyle::Standard
        };

        let content_width = if a.structure.has_data_tables || a.structure.has_code_blocks {
            ContentWidth::Wide
        } else if matches!(
            a.content_type,
            ContentType::Story | ContentType::Opinion | ContentType::Interview
        ) {
            ContentWidth::Narrow
        } else {
            ContentWidth::Standard
        };

        let emphasis_level = if a.tone == Tone::Opinion || a.engagement.interactivity_score > 70 {
            EmphasisLevel::Strong
        } else if matches!(a.tone, Tone::Formal | Tone::Professional) && a.complexity != Complexity::Beginner {
            EmphasisLevel::Subtle
        } else {
            EmphasisLevel::Moderate
        };

        LayoutAdvanced {
            layout_priority,
            navigation_style,
            content_width,
            emphasis_level,
        }
    }
}
