//! Data models for context selection
//!
//! Field names follow the JSON written by the page capture scripts
//! (`dom-hierarchy.json`, `dimensions-summary.json`).

use crate::lenient::{is_truthy, lenient, lenient_items, opt_string, opt_u8, truthy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Richness level of the context exposed to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextTier {
    ScreenshotOnly = 1,
    Markup = 2,
    Dimensions = 3,
    Hierarchy = 4,
}

impl ContextTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScreenshotOnly => "screenshot_only",
            Self::Markup => "markup",
            Self::Dimensions => "dimensions",
            Self::Hierarchy => "hierarchy",
        }
    }
}

/// Optional structured inputs available for one run
#[derive(Debug, Clone, Default)]
pub struct ContextInputs {
    pub hierarchy: Option<DomHierarchy>,
    pub dimensions: Option<DimensionsSummary>,
    pub markup: Option<MarkupSource>,
    /// Content-count summary, appended to whichever tier is chosen
    pub content_summary: Option<String>,
}

impl ContextInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hierarchy(mut self, hierarchy: DomHierarchy) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    pub fn with_dimensions(mut self, dimensions: DimensionsSummary) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_markup(mut self, html: Option<String>, css: Option<String>) -> Self {
        self.markup = Some(MarkupSource { html, css });
        self
    }

    pub fn with_content_summary(mut self, summary: impl Into<String>) -> Self {
        self.content_summary = Some(summary.into());
        self
    }
}

/// Raw page markup and its stylesheet; only usable when both are present
#[derive(Debug, Clone, Default)]
pub struct MarkupSource {
    pub html: Option<String>,
    pub css: Option<String>,
}

impl MarkupSource {
    /// Both halves, non-empty
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (self.html.as_deref(), self.css.as_deref()) {
            (Some(html), Some(css)) if !html.is_empty() && !css.is_empty() => Some((html, css)),
            _ => None,
        }
    }
}

/// Document-tree summary captured from the live page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomHierarchy {
    #[serde(default, deserialize_with = "lenient")]
    pub landmarks: Landmarks,

    #[serde(default, rename = "headingTree", deserialize_with = "lenient_items")]
    pub heading_tree: Vec<HeadingNode>,

    #[serde(default, deserialize_with = "lenient")]
    pub root: Option<DomNode>,
}

/// Landmark markers; a marker counts when it is truthy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Landmarks {
    #[serde(default)]
    pub header: Option<Value>,
    #[serde(default)]
    pub main: Option<Value>,
    #[serde(default)]
    pub footer: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub aside: Vec<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub nav: Vec<Value>,
}

impl Landmarks {
    pub fn has_header(&self) -> bool {
        self.header.as_ref().map_or(false, is_truthy)
    }

    pub fn has_main(&self) -> bool {
        self.main.as_ref().map_or(false, is_truthy)
    }

    pub fn has_footer(&self) -> bool {
        self.footer.as_ref().map_or(false, is_truthy)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadingNode {
    #[serde(default, deserialize_with = "opt_u8")]
    pub level: Option<u8>,
    #[serde(default, deserialize_with = "opt_string")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomNode {
    #[serde(default, rename = "tagName", deserialize_with = "opt_string")]
    pub tag_name: Option<String>,
    /// Semantic role; nodes without one are flattened when rendering
    #[serde(default, deserialize_with = "opt_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub children: Vec<DomNode>,
}

/// Exact measurements taken with getBoundingClientRect/getComputedStyle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DimensionsSummary {
    #[serde(default, rename = "EXACT_DIMENSIONS", deserialize_with = "lenient")]
    pub exact: ExactDimensions,

    #[serde(default, rename = "EXACT_TYPOGRAPHY", deserialize_with = "lenient")]
    pub typography: HeadingSizes,

    #[serde(default, rename = "TYPOGRAPHY_BY_SECTION", deserialize_with = "lenient")]
    pub by_section: SectionTypography,

    #[serde(default, rename = "RESPONSIVE", deserialize_with = "lenient")]
    pub responsive: Responsive,

    #[serde(default, rename = "SECTIONS", deserialize_with = "lenient")]
    pub sections: SectionsFound,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExactDimensions {
    #[serde(default, deserialize_with = "opt_string")]
    pub container_max_width: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub section_padding: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub gap: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub card_dimensions: CardDimensions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardDimensions {
    #[serde(default, deserialize_with = "opt_string")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub padding: Option<String>,
}

/// Font sizes per heading level; `p` is the per-section body size
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadingSizes {
    #[serde(default, deserialize_with = "opt_string")]
    pub h1: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub h2: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub h3: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub p: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionTypography {
    #[serde(default, deserialize_with = "lenient")]
    pub hero: HeadingSizes,
    #[serde(default, deserialize_with = "lenient")]
    pub content: HeadingSizes,
    #[serde(default, deserialize_with = "lenient")]
    pub footer: HeadingSizes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Responsive {
    #[serde(default, deserialize_with = "opt_string")]
    pub desktop_breakpoint: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub tablet_breakpoint: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub mobile_breakpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub typography_scaling: TypographyScaling,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypographyScaling {
    #[serde(default, deserialize_with = "lenient")]
    pub h1: ViewportSizes,
    #[serde(default, deserialize_with = "lenient")]
    pub h2: ViewportSizes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewportSizes {
    #[serde(default, deserialize_with = "opt_string")]
    pub desktop: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub tablet: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsFound {
    #[serde(default, deserialize_with = "lenient")]
    pub hero: SectionPresence,
    #[serde(default, deserialize_with = "lenient")]
    pub content: SectionPresence,
    #[serde(default, deserialize_with = "lenient")]
    pub footer: SectionPresence,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPresence {
    #[serde(default, deserialize_with = "truthy")]
    pub found: bool,
    #[serde(default, rename = "containerWidth", deserialize_with = "opt_string")]
    pub container_width: Option<String>,
}

/// Rendered request description for the vision model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextPayload {
    pub tier: ContextTier,
    pub prompt: String,
    pub content_counts_appended: bool,
    /// Inputs that were cut to their byte budget
    pub truncated: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_ordering() {
        assert!(ContextTier::Hierarchy > ContextTier::Dimensions);
        assert!(ContextTier::Dimensions > ContextTier::Markup);
        assert!(ContextTier::Markup > ContextTier::ScreenshotOnly);
    }

    #[test]
    fn test_markup_requires_both_halves() {
        let html_only = MarkupSource {
            html: Some("<main></main>".to_string()),
            css: None,
        };
        let empty_css = MarkupSource {
            html: Some("<main></main>".to_string()),
            css: Some(String::new()),
        };
        let both = MarkupSource {
            html: Some("<main></main>".to_string()),
            css: Some("main{}".to_string()),
        };
        assert!(html_only.complete().is_none());
        assert!(empty_css.complete().is_none());
        assert_eq!(both.complete(), Some(("<main></main>", "main{}")));
    }

    #[test]
    fn test_dimensions_parse_with_extractor_keys() {
        let summary: DimensionsSummary = serde_json::from_value(json!({
            "EXACT_DIMENSIONS": {
                "container_max_width": "1140px",
                "gap": 32,
                "card_dimensions": "not-an-object"
            },
            "EXACT_TYPOGRAPHY": { "h1": "52px" },
            "RESPONSIVE": {
                "tablet_breakpoint": "820px",
                "typography_scaling": { "h1": { "tablet": "40px" }, "h2": "bad" }
            },
            "SECTIONS": { "hero": { "found": true, "containerWidth": 1200 } }
        }))
        .unwrap();

        assert_eq!(summary.exact.container_max_width.as_deref(), Some("1140px"));
        assert_eq!(summary.exact.gap.as_deref(), Some("32"));
        assert!(summary.exact.card_dimensions.width.is_none());
        assert_eq!(summary.typography.h1.as_deref(), Some("52px"));
        assert_eq!(
            summary.responsive.typography_scaling.h1.tablet.as_deref(),
            Some("40px")
        );
        assert!(summary.responsive.typography_scaling.h2.tablet.is_none());
        assert!(summary.sections.hero.found);
        assert_eq!(summary.sections.hero.container_width.as_deref(), Some("1200"));
    }

    #[test]
    fn test_hierarchy_parse() {
        let hierarchy: DomHierarchy = serde_json::from_value(json!({
            "landmarks": { "header": { "tag": "header" }, "main": null, "nav": [{}, {}] },
            "headingTree": [{ "level": 1, "section": "hero", "text": "Welcome" }],
            "root": { "tagName": "body", "role": "document", "children": [] },
            "stats": { "totalNodes": 120, "maxDepth": 9 }
        }))
        .unwrap();

        assert!(hierarchy.landmarks.has_header());
        assert!(!hierarchy.landmarks.has_main());
        assert_eq!(hierarchy.landmarks.nav.len(), 2);
        assert_eq!(hierarchy.heading_tree.len(), 1);
        assert_eq!(
            hierarchy.root.and_then(|r| r.tag_name).as_deref(),
            Some("body")
        );
    }

    #[test]
    fn test_one_bad_heading_keeps_the_rest() {
        let hierarchy: DomHierarchy = serde_json::from_value(json!({
            "headingTree": [
                { "level": 1, "text": "A" },
                { "level": "2", "text": "B" },
                { "level": 300, "text": "C" },
                "not a heading",
                { "level": 3, "text": ["D"] }
            ],
            "root": {
                "tagName": "body",
                "children": [{ "tagName": "main", "role": "main" }, 42]
            }
        }))
        .unwrap();

        let levels: Vec<Option<u8>> = hierarchy.heading_tree.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![Some(1), Some(2), None, Some(3)]);
        assert_eq!(hierarchy.heading_tree[1].text.as_deref(), Some("B"));
        assert!(hierarchy.heading_tree[3].text.is_none());
        assert_eq!(hierarchy.root.map(|r| r.children.len()), Some(1));
    }

    #[test]
    fn test_section_found_by_truthiness() {
        let sections: SectionsFound = serde_json::from_value(json!({
            "hero": { "found": "yes", "containerWidth": "1200" },
            "content": { "found": 0 },
            "footer": { "found": null }
        }))
        .unwrap();

        assert!(sections.hero.found);
        assert_eq!(sections.hero.container_width.as_deref(), Some("1200"));
        assert!(!sections.content.found);
        assert!(!sections.footer.found);
    }
}
