//! Context priority selection
//!
//! Picks the single richest context tier available and renders it:
//! tree + measurements, then measurements alone, then markup + stylesheet,
//! then the screenshot on its own. Pure function of its inputs.

use super::formatting::{format_dom_nesting, format_heading_hierarchy, format_section_structure};
use super::models::{ContextInputs, ContextPayload, ContextTier, DimensionsSummary, DomHierarchy};
use super::templates::{
    content_counts_suffix, dimensions_prompt, hierarchy_prompt, markup_prompt,
    screenshot_only_prompt, token_prompt_with_stylesheet, HierarchyValues, MeasurementValues,
    TOKEN_EXTRACTION_PROMPT,
};
use super::truncation::truncate_to_budget;
use crate::config::SelectorConfig;
use tracing::{debug, info};

/// Literal fallbacks used when a summary lacks a field
pub mod fallback {
    pub const CONTAINER_MAX_WIDTH: &str = "1200px";
    pub const SECTION_PADDING: &str = "64px 0";
    pub const GAP: &str = "24px";
    pub const CARD_WIDTH: &str = "380px";
    pub const CARD_HEIGHT: &str = "auto";
    pub const CARD_PADDING: &str = "24px";
    pub const DESKTOP_BREAKPOINT: &str = "1440px";
    pub const TABLET_BREAKPOINT: &str = "768px";
    pub const MOBILE_BREAKPOINT: &str = "375px";
    pub const H1: &str = "48px";
    pub const H2: &str = "36px";
    pub const H3: &str = "28px";
    pub const BODY: &str = "16px";
    pub const H1_TABLET: &str = "36px";
    pub const H1_MOBILE: &str = "28px";
    pub const H2_TABLET: &str = "28px";
    pub const H2_MOBILE: &str = "24px";
    pub const HERO_H1: &str = "64px";
    pub const HERO_H2: &str = "48px";
    pub const HERO_BODY: &str = "18px";
    pub const CONTENT_H2: &str = "32px";
    pub const CONTENT_H3: &str = "24px";
    pub const CONTENT_BODY: &str = "16px";
    pub const FOOTER_BODY: &str = "14px";
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// First present value, then the literal
fn first_of(values: &[&Option<String>], default: &str) -> String {
    values
        .iter()
        .find_map(|v| v.as_ref())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

impl MeasurementValues {
    /// Resolve every slot from the summary or its literal fallback
    pub fn resolve(dimensions: &DimensionsSummary) -> Self {
        let exact = &dimensions.exact;
        let card = &exact.card_dimensions;
        let typo = &dimensions.typography;
        let resp = &dimensions.responsive;
        let scaling = &resp.typography_scaling;

        Self {
            container_max_width: or_default(&exact.container_max_width, fallback::CONTAINER_MAX_WIDTH),
            section_padding: or_default(&exact.section_padding, fallback::SECTION_PADDING),
            gap: or_default(&exact.gap, fallback::GAP),
            card_width: or_default(&card.width, fallback::CARD_WIDTH),
            card_height: or_default(&card.height, fallback::CARD_HEIGHT),
            card_padding: or_default(&card.padding, fallback::CARD_PADDING),
            h1: or_default(&typo.h1, fallback::H1),
            h2: or_default(&typo.h2, fallback::H2),
            h3: or_default(&typo.h3, fallback::H3),
            body: or_default(&typo.body, fallback::BODY),
            desktop_breakpoint: or_default(&resp.desktop_breakpoint, fallback::DESKTOP_BREAKPOINT),
            tablet_breakpoint: or_default(&resp.tablet_breakpoint, fallback::TABLET_BREAKPOINT),
            mobile_breakpoint: or_default(&resp.mobile_breakpoint, fallback::MOBILE_BREAKPOINT),
            h1_tablet: or_default(&scaling.h1.tablet, fallback::H1_TABLET),
            h1_mobile: or_default(&scaling.h1.mobile, fallback::H1_MOBILE),
            h2_tablet: or_default(&scaling.h2.tablet, fallback::H2_TABLET),
            h2_mobile: or_default(&scaling.h2.mobile, fallback::H2_MOBILE),
        }
    }
}

impl HierarchyValues {
    /// Per-section typography falls back to the global measurement, then
    /// to the section literal
    pub fn resolve(dimensions: &DimensionsSummary, hierarchy: &DomHierarchy) -> Self {
        let exact = &dimensions.exact;
        let card = &exact.card_dimensions;
        let typo = &dimensions.typography;
        let hero = &dimensions.by_section.hero;
        let content = &dimensions.by_section.content;
        let footer = &dimensions.by_section.footer;
        let resp = &dimensions.responsive;
        let scaling = &resp.typography_scaling;
        let landmarks = &hierarchy.landmarks;

        Self {
            header_found: landmarks.has_header(),
            main_found: landmarks.has_main(),
            footer_found: landmarks.has_footer(),
            sidebar_count: landmarks.aside.len(),
            nav_count: landmarks.nav.len(),
            heading_hierarchy: format_heading_hierarchy(&hierarchy.heading_tree),
            section_structure: format_section_structure(landmarks, &dimensions.sections),
            dom_nesting: format_dom_nesting(hierarchy.root.as_ref()),
            container_max_width: or_default(&exact.container_max_width, fallback::CONTAINER_MAX_WIDTH),
            section_padding: or_default(&exact.section_padding, fallback::SECTION_PADDING),
            gap: or_default(&exact.gap, fallback::GAP),
            card_width: or_default(&card.width, fallback::CARD_WIDTH),
            card_height: or_default(&card.height, fallback::CARD_HEIGHT),
            card_padding: or_default(&card.padding, fallback::CARD_PADDING),
            hero_h1: first_of(&[&hero.h1, &typo.h1], fallback::HERO_H1),
            hero_h2: first_of(&[&hero.h2, &typo.h2], fallback::HERO_H2),
            hero_body: first_of(&[&hero.p, &typo.body], fallback::HERO_BODY),
            content_h2: first_of(&[&content.h2, &typo.h2], fallback::CONTENT_H2),
            content_h3: first_of(&[&content.h3, &typo.h3], fallback::CONTENT_H3),
            content_body: first_of(&[&content.p, &typo.body], fallback::CONTENT_BODY),
            footer_body: or_default(&footer.p, fallback::FOOTER_BODY),
            desktop_breakpoint: or_default(&resp.desktop_breakpoint, fallback::DESKTOP_BREAKPOINT),
            tablet_breakpoint: or_default(&resp.tablet_breakpoint, fallback::TABLET_BREAKPOINT),
            mobile_breakpoint: or_default(&resp.mobile_breakpoint, fallback::MOBILE_BREAKPOINT),
            h1_tablet: or_default(&scaling.h1.tablet, fallback::H1_TABLET),
            h1_mobile: or_default(&scaling.h1.mobile, fallback::H1_MOBILE),
            h2_tablet: or_default(&scaling.h2.tablet, fallback::H2_TABLET),
            h2_mobile: or_default(&scaling.h2.mobile, fallback::H2_MOBILE),
        }
    }
}

/// Context priority selector
#[derive(Debug, Clone, Default)]
pub struct ContextSelector {
    config: SelectorConfig,
}

impl ContextSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Richest tier the inputs support
    pub fn select_tier(inputs: &ContextInputs) -> ContextTier {
        match (&inputs.hierarchy, &inputs.dimensions) {
            (Some(_), Some(_)) => ContextTier::Hierarchy,
            (None, Some(_)) => ContextTier::Dimensions,
            _ if inputs.markup.as_ref().and_then(|m| m.complete()).is_some() => {
                ContextTier::Markup
            }
            _ => ContextTier::ScreenshotOnly,
        }
    }

    /// Select a tier and render its payload
    pub fn build(&self, inputs: &ContextInputs) -> ContextPayload {
        let tier = Self::select_tier(inputs);
        let mut truncated = Vec::new();

        let mut prompt = match (tier, &inputs.hierarchy, &inputs.dimensions, &inputs.markup) {
            (ContextTier::Hierarchy, Some(hierarchy), Some(dimensions), _) => {
                hierarchy_prompt(&HierarchyValues::resolve(dimensions, hierarchy))
            }
            (ContextTier::Dimensions, _, Some(dimensions), _) => {
                dimensions_prompt(&MeasurementValues::resolve(dimensions))
            }
            (ContextTier::Markup, _, _, Some(markup)) => match markup.complete() {
                Some((html, css)) => {
                    let html = truncate_to_budget(html, self.config.markup_max_bytes);
                    let css = truncate_to_budget(css, self.config.stylesheet_max_bytes);
                    if html.truncated {
                        truncated.push("markup".to_string());
                    }
                    if css.truncated {
                        truncated.push("stylesheet".to_string());
                    }
                    markup_prompt(html.text, css.text)
                }
                None => screenshot_only_prompt(),
            },
            _ => screenshot_only_prompt(),
        };

        let content_counts_appended = match inputs
            .content_summary
            .as_deref()
            .filter(|summary| !summary.is_empty())
        {
            Some(summary) => {
                prompt.push_str(&content_counts_suffix(summary));
                true
            }
            None => false,
        };

        info!(
            "Selected context tier {} (content counts: {}, truncated: {:?})",
            tier.as_str(),
            content_counts_appended,
            truncated
        );
        debug!("Rendered context payload: {} bytes", prompt.len());

        ContextPayload {
            tier,
            prompt,
            content_counts_appended,
            truncated,
        }
    }

    /// Whole-document token extraction prompt; the stylesheet variant is used
    /// when stylesheet text is present
    pub fn build_extraction_prompt(&self, css: Option<&str>) -> String {
        match css.filter(|c| !c.is_empty()) {
            Some(css) => {
                let css = truncate_to_budget(css, self.config.token_stylesheet_max_bytes);
                debug!(
                    "Token extraction prompt with stylesheet context ({} of {} bytes)",
                    css.text.len(),
                    css.original_bytes
                );
                token_prompt_with_stylesheet(css.text)
            }
            None => TOKEN_EXTRACTION_PROMPT.to_string(),
        }
    }
}
