//! Integration tests for context tier selection
//!
//! Summaries are built from JSON shaped like the browser-side extractors
//! produce, then rendered through the selector.

use design_clone::{
    config::SelectorConfig,
    context::{ContextInputs, ContextSelector, ContextTier, DimensionsSummary, DomHierarchy},
};
use serde_json::json;

fn hierarchy() -> DomHierarchy {
    serde_json::from_value(json!({
        "landmarks": { "header": { "tag": "header" }, "main": true, "footer": null, "nav": [{}, {}] },
        "headingTree": [
            { "level": 1, "section": "hero", "text": "Build faster websites with confidence" },
            { "level": 2, "section": "content", "text": "Features" }
        ],
        "root": {
            "tagName": "body",
            "children": [
                { "tagName": "header", "role": "header" },
                { "tagName": "main", "role": "main", "children": [
                    { "tagName": "section", "role": "section" }
                ]}
            ]
        },
        "stats": { "totalNodes": 120, "maxDepth": 9 }
    }))
    .expect("hierarchy parses")
}

fn dimensions() -> DimensionsSummary {
    serde_json::from_value(json!({
        "EXACT_DIMENSIONS": {
            "container_max_width": "1280px",
            "card_dimensions": { "width": "360px" }
        },
        "EXACT_TYPOGRAPHY": { "h1": "56px", "h2": "40px" },
        "TYPOGRAPHY_BY_SECTION": { "hero": { "h1": "72px" } },
        "RESPONSIVE": { "tablet_breakpoint": "1024px" },
        "SECTIONS": { "hero": { "found": true, "containerWidth": "1280" } }
    }))
    .expect("dimensions parse")
}

fn assert_no_placeholders(prompt: &str) {
    for marker in ["{", "}"] {
        assert!(
            !prompt.contains(marker),
            "unresolved placeholder marker {:?} in payload",
            marker
        );
    }
}

#[test]
fn test_tree_and_measurements_beat_markup() {
    let inputs = ContextInputs::new()
        .with_hierarchy(hierarchy())
        .with_dimensions(dimensions())
        .with_markup(
            Some("<main class=\"page\">unique-markup-marker</main>".into()),
            Some(".unique-stylesheet-marker{color:red}".into()),
        );

    let payload = ContextSelector::default().build(&inputs);

    assert_eq!(payload.tier, ContextTier::Hierarchy);
    assert!(!payload.prompt.contains("unique-markup-marker"));
    assert!(!payload.prompt.contains("unique-stylesheet-marker"));
    assert!(payload.prompt.contains("Hero: H1 72px"));
    assert!(payload.prompt.contains("Max container width: 1280px"));
    assert!(payload.prompt.contains("- Nav elements: 2"));
    assert!(payload.prompt.contains("- H1 (hero): \"Build faster websites with con...\""));
    assert!(payload.truncated.is_empty());
}

#[test]
fn test_markup_without_stylesheet_is_screenshot_only() {
    let inputs = ContextInputs::new().with_markup(Some("<body></body>".into()), None);
    let payload = ContextSelector::default().build(&inputs);
    assert_eq!(payload.tier, ContextTier::ScreenshotOnly);

    let empty_css = ContextInputs::new().with_markup(Some("<body></body>".into()), Some(String::new()));
    assert_eq!(
        ContextSelector::select_tier(&empty_css),
        ContextTier::ScreenshotOnly
    );
}

#[test]
fn test_tree_alone_is_not_enough() {
    let inputs = ContextInputs::new().with_hierarchy(hierarchy());
    assert_eq!(
        ContextSelector::select_tier(&inputs),
        ContextTier::ScreenshotOnly
    );
}

#[test]
fn test_measurement_tier_fills_literals() {
    let inputs = ContextInputs::new().with_dimensions(DimensionsSummary::default());
    let payload = ContextSelector::default().build(&inputs);

    assert_eq!(payload.tier, ContextTier::Dimensions);
    assert!(payload.prompt.contains("Container max-width: 1200px"));
    assert!(payload.prompt.contains("Tablet: 768px"));
    assert_no_placeholders(&payload.prompt);
}

#[test]
fn test_every_tier_renders_completely() {
    let selector = ContextSelector::default();
    let cases = vec![
        ContextInputs::new(),
        ContextInputs::new().with_markup(Some("<p>x</p>".into()), Some("p{}".into())),
        ContextInputs::new().with_dimensions(dimensions()),
        ContextInputs::new()
            .with_hierarchy(DomHierarchy::default())
            .with_dimensions(DimensionsSummary::default()),
    ];

    for inputs in cases {
        let payload = selector.build(&inputs);
        assert!(!payload.prompt.is_empty());
        if payload.tier != ContextTier::Markup {
            assert_no_placeholders(&payload.prompt);
        }
    }
}

#[test]
fn test_content_counts_appended_to_any_tier() {
    let summary = "## Content Counts\n- Feature cards: 6\n- Testimonials: 3";
    let selector = ContextSelector::default();

    for inputs in [
        ContextInputs::new(),
        ContextInputs::new().with_dimensions(dimensions()),
    ] {
        let payload = selector.build(&inputs.with_content_summary(summary));
        assert!(payload.content_counts_appended);
        assert!(payload.prompt.contains(summary));
        assert!(payload.prompt.contains("EXACT item counts"));
    }

    let without = selector.build(&ContextInputs::new());
    assert!(!without.content_counts_appended);
}

#[test]
fn test_empty_content_summary_is_ignored() {
    let selector = ContextSelector::default();
    let payload = selector.build(&ContextInputs::new().with_content_summary(""));

    assert!(!payload.content_counts_appended);
    assert!(!payload.prompt.contains("EXACT item counts"));
    assert_eq!(payload.prompt, selector.build(&ContextInputs::new()).prompt);
}

#[test]
fn test_markup_truncated_at_budget() {
    let selector = ContextSelector::new(SelectorConfig {
        markup_max_bytes: 16,
        stylesheet_max_bytes: 8,
        ..SelectorConfig::default()
    });

    // exactly at the budget: nothing is cut
    let at_budget = ContextInputs::new().with_markup(Some("a".repeat(16)), Some("b".repeat(8)));
    let payload = selector.build(&at_budget);
    assert_eq!(payload.tier, ContextTier::Markup);
    assert!(payload.truncated.is_empty());

    // one byte over on each input
    let over = ContextInputs::new().with_markup(
        Some(format!("{}~", "a".repeat(16))),
        Some(format!("{}^", "b".repeat(8))),
    );
    let payload = selector.build(&over);
    assert_eq!(payload.truncated, vec!["markup".to_string(), "stylesheet".to_string()]);
    assert!(payload.prompt.contains(&"a".repeat(16)));
    assert!(!payload.prompt.contains('~'));
    assert!(!payload.prompt.contains('^'));
}
