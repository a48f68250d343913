//! End-to-end run through the extraction seam with a canned extractor

use async_trait::async_trait;
use design_clone::{
    config::Config,
    driver::{run_section_extraction, SectionExtractor},
    ordering::SectionRequest,
    tokens::{render_tokens_css, SectionExtraction, TokenMerger},
};
use serde_json::json;

/// Returns fixed JSON per section name, as a model client would
struct CannedExtractor;

#[async_trait]
impl SectionExtractor for CannedExtractor {
    async fn extract(&self, request: &SectionRequest) -> anyhow::Result<SectionExtraction> {
        let body = match request.name.as_str() {
            "header" => json!({
                "colors": { "background": "#0F172A", "text": "#F8FAFC", "accent": "#22C55E" },
                "typography": { "fontFamily": "Manrope, sans-serif", "fontWeights": { "Bold": 800 } },
                "notes": ["sticky header"]
            }),
            "hero" => json!({
                "colors": { "background": "#FFFFFF", "heading": "#111827" },
                "typography": { "headingSize": "64px", "bodySize": "18px" },
                "spacing": { "sectionPadding": "120px", "gap": "32px" },
                "borderRadius": "14px"
            }),
            "pricing" => anyhow::bail!("model returned malformed JSON"),
            other => json!({ "notes": [format!("{} looks plain", other)] }),
        };
        Ok(serde_json::from_value(body)?)
    }
}

#[test]
fn test_full_run_with_cap() {
    let mut config = Config::default();
    config.extraction.max_sections = 4;
    config.extraction.inter_call_delay_ms = 0;

    let outcome = tokio_test::block_on(run_section_extraction(
        &CannedExtractor,
        ["header", "hero", "pricing", "footer", "legal"],
        &config.extraction,
        &TokenMerger::new(),
    ));
    let tokens = &outcome.tokens;

    assert_eq!(outcome.failed, 1);
    assert_eq!(tokens.section_count, Some(4));
    assert_eq!(
        tokens.sections,
        Some(vec![
            "section-0-header".to_string(),
            "section-1-hero".to_string(),
            "section-3-footer".to_string(),
        ])
    );

    assert_eq!(tokens.colors.background.as_deref(), Some("#0F172A"));
    assert_eq!(tokens.colors.text.primary.as_deref(), Some("#F8FAFC"));
    assert_eq!(tokens.colors.text.secondary.as_deref(), Some("#111827"));
    assert_eq!(tokens.colors.primary.as_deref(), Some("#22C55E"));
    assert_eq!(tokens.typography.font_family.body.as_deref(), Some("Manrope, sans-serif"));
    assert_eq!(tokens.typography.font_weight.bold, Some(800));
    assert_eq!(tokens.typography.font_size.xl4.as_deref(), Some("64px"));
    assert_eq!(tokens.spacing.s16.as_deref(), Some("120px"));
    assert_eq!(tokens.spacing.s4.as_deref(), Some("32px"));
    assert_eq!(tokens.border_radius.md.as_deref(), Some("14px"));

    assert_eq!(
        tokens.notes,
        vec![
            "sticky header".to_string(),
            "Section section-2-pricing failed: model returned malformed JSON".to_string(),
            "footer looks plain".to_string(),
        ]
    );

    let css = render_tokens_css(tokens);
    assert!(css.contains("  --color-primary: #22C55E;"));
    assert!(css.contains("  --space-16: 120px;"));
}
