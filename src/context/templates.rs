//! Prompt text for each context tier
//!
//! Every placeholder is a `format!` argument, so a rendered payload can never
//! contain an unresolved slot.

/// Values for the measurement tier, every field already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementValues {
    pub container_max_width: String,
    pub section_padding: String,
    pub gap: String,
    pub card_width: String,
    pub card_height: String,
    pub card_padding: String,
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub body: String,
    pub desktop_breakpoint: String,
    pub tablet_breakpoint: String,
    pub mobile_breakpoint: String,
    pub h1_tablet: String,
    pub h1_mobile: String,
    pub h2_tablet: String,
    pub h2_mobile: String,
}

/// Values for the tree-plus-measurement tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyValues {
    pub header_found: bool,
    pub main_found: bool,
    pub footer_found: bool,
    pub sidebar_count: usize,
    pub nav_count: usize,
    pub heading_hierarchy: String,
    pub section_structure: String,
    pub dom_nesting: String,
    pub container_max_width: String,
    pub section_padding: String,
    pub gap: String,
    pub card_width: String,
    pub card_height: String,
    pub card_padding: String,
    pub hero_h1: String,
    pub hero_h2: String,
    pub hero_body: String,
    pub content_h2: String,
    pub content_h3: String,
    pub content_body: String,
    pub footer_body: String,
    pub desktop_breakpoint: String,
    pub tablet_breakpoint: String,
    pub mobile_breakpoint: String,
    pub h1_tablet: String,
    pub h1_mobile: String,
    pub h2_tablet: String,
    pub h2_mobile: String,
}

const OUTLINE_SECTIONS: &str = "\
## 1. Header Section
- Logo, navigation, CTA button, mobile menu

## 2. Hero Section
- Layout, headline, subheadline, primary/secondary CTA, background, visuals

## 3. Content Sections
For each distinct section: purpose, layout pattern, item count, key components

## 4. Footer Section
- Layout, content blocks, copyright";

/// Screenshot-only prompt
pub fn screenshot_only_prompt() -> String {
    format!(
        "Analyze this website screenshot and describe the page structure in detail.\n\
         Output a markdown document titled \"# Page Structure Analysis\" with these sections:\n\n\
         {outline}\n\n\
         ## 5. Global Patterns\n\
         - Container max-width, section padding, card style, color scheme, typography style\n\n\
         ## 6. Responsive Hints\n\
         - Mobile indicators, collapsible elements, stacking on small screens\n\n\
         ## 7. BEM Class Suggestions\n\
         - Semantic BEM names for header, hero, content sections and footer\n\n\
         Estimate sizes where needed. This analysis will be used to generate HTML/CSS.",
        outline = OUTLINE_SECTIONS
    )
}

/// Markup tier; `html` and `css` are already truncated
pub fn markup_prompt(html: &str, css: &str) -> String {
    format!(
        "Analyze this website using the screenshot AND the source HTML/CSS below.\n\
         Use the source to give ACCURATE values instead of estimates.\n\n\
         ## Source HTML Structure\n```html\n{html}\n```\n\n\
         ## Source CSS (key rules)\n```css\n{css}\n```\n\n---\n\n\
         Output a markdown document titled \"# Page Structure Analysis\":\n\n\
         {outline}\n\n\
         ## 5. Actual CSS Values (from source)\n\
         - Container max-width, section padding, border-radius, primary color, font-family, font-sizes\n\n\
         ## 6. Responsive Breakpoints (from @media queries)\n\
         - Breakpoint values and what changes at each\n\n\
         ## 7. Recommended BEM Classes\n\
         - Clean BEM names mapped to the existing classes\n\n\
         CRITICAL: Extract EXACT values from the CSS where possible. Do not estimate.",
        html = html,
        css = css,
        outline = OUTLINE_SECTIONS
    )
}

/// Measurement tier: global typography, no per-section breakdown
pub fn dimensions_prompt(v: &MeasurementValues) -> String {
    format!(
        "Analyze this website screenshot using the EXACT extracted dimensions below.\n\
         All measurements come from the live DOM. USE ONLY these values; do not estimate.\n\n\
         ## EXACT EXTRACTED DIMENSIONS\n\n\
         ### Layout\n\
         - Container max-width: {container}\n\
         - Section padding: {padding}\n\
         - Gap between elements: {gap}\n\n\
         ### Cards\n\
         - Card: {card_w} x {card_h}, padding {card_p}\n\n\
         ### Typography\n\
         - H1: {h1}\n- H2: {h2}\n- H3: {h3}\n- Body: {body}\n\n\
         ### Responsive Breakpoints\n\
         - Desktop: {desktop}\n- Tablet: {tablet}\n- Mobile: {mobile}\n\n\
         ### Typography Scaling\n\
         - H1: {h1} -> {h1_tablet} (tablet) -> {h1_mobile} (mobile)\n\
         - H2: {h2} -> {h2_tablet} (tablet) -> {h2_mobile} (mobile)\n\n---\n\n\
         Output a markdown document titled \"# Page Structure Analysis\":\n\n\
         {outline}\n\n\
         ## 5. EXACT CSS Values (repeat verbatim, DO NOT MODIFY)\n\
         - Container max-width: {container}\n\
         - Section padding: {padding}\n\
         - Card: {card_w} x {card_h}, padding {card_p}\n\
         - Gap: {gap}\n\
         - H1: {h1}, H2: {h2}, H3: {h3}, Body: {body}\n\
         - Breakpoints: {desktop} / {tablet} / {mobile}\n\n\
         ## 6. Responsive Behavior\n\
         - At {tablet}: layout changes\n\
         - At {mobile}: layout changes\n\n\
         ## 7. BEM Class Suggestions",
        container = v.container_max_width,
        padding = v.section_padding,
        gap = v.gap,
        card_w = v.card_width,
        card_h = v.card_height,
        card_p = v.card_padding,
        h1 = v.h1,
        h2 = v.h2,
        h3 = v.h3,
        body = v.body,
        desktop = v.desktop_breakpoint,
        tablet = v.tablet_breakpoint,
        mobile = v.mobile_breakpoint,
        h1_tablet = v.h1_tablet,
        h1_mobile = v.h1_mobile,
        h2_tablet = v.h2_tablet,
        h2_mobile = v.h2_mobile,
        outline = OUTLINE_SECTIONS
    )
}

/// Tree-plus-measurement tier: typography resolved per page section
pub fn hierarchy_prompt(v: &HierarchyValues) -> String {
    format!(
        "Analyze this website screenshot using the EXACT dimensions and DOM hierarchy below.\n\
         Typography varies BY SECTION: use the section-specific values.\n\n\
         ## EXTRACTED DOM HIERARCHY\n\n\
         ### Landmarks Found\n\
         - Header: {header}\n- Main content: {main}\n- Footer: {footer}\n\
         - Sidebars: {sidebars}\n- Nav elements: {navs}\n\n\
         ### Heading Hierarchy (by section)\n{headings}\n\n\
         ### Section Structure\n{sections}\n\n\
         ## EXACT DIMENSIONS\n\n\
         ### Container Layout\n\
         - Max container width: {container}\n\
         - Section padding: {padding}\n\
         - Element gap: {gap}\n\n\
         ### Cards\n\
         - Card: {card_w} x {card_h}, padding {card_p}\n\n\
         ### Typography BY SECTION\n\
         - Hero: H1 {hero_h1}, H2 {hero_h2}, body {hero_body}\n\
         - Content: H2 {content_h2}, H3 {content_h3}, body {content_body}\n\
         - Footer: body {footer_body}\n\n\
         ### Responsive Breakpoints\n\
         - Desktop: {desktop}\n- Tablet: {tablet}\n- Mobile: {mobile}\n\n\
         ### Typography Scaling\n\
         - H1: {hero_h1} -> {h1_tablet} (tablet) -> {h1_mobile} (mobile)\n\
         - H2: {content_h2} -> {h2_tablet} (tablet) -> {h2_mobile} (mobile)\n\n---\n\n\
         Output a markdown document titled \"# Page Structure Analysis\":\n\n\
         {outline}\n\n\
         ## 5. EXACT CSS Values (DO NOT MODIFY)\n\
         - Container max-width: {container}\n\
         - Section padding: {padding}\n\
         - Card: {card_w} x {card_h}, padding {card_p}\n\
         - Gap: {gap}\n\
         - Hero H1 {hero_h1}, Hero H2 {hero_h2}, Content H2 {content_h2}, Content H3 {content_h3}\n\
         - Content body {content_body}, Footer body {footer_body}\n\
         - Breakpoints: {desktop} / {tablet} / {mobile}\n\n\
         ## 6. Responsive Behavior\n\
         - At {tablet}: layout changes\n\
         - At {mobile}: layout changes\n\n\
         ## 7. DOM Nesting Structure\n\
         Reproduce this nesting in generated HTML:\n{nesting}\n\n\
         ## 8. BEM Class Suggestions",
        header = yes_no(v.header_found),
        main = yes_no(v.main_found),
        footer = yes_no(v.footer_found),
        sidebars = v.sidebar_count,
        navs = v.nav_count,
        headings = v.heading_hierarchy,
        sections = v.section_structure,
        container = v.container_max_width,
        padding = v.section_padding,
        gap = v.gap,
        card_w = v.card_width,
        card_h = v.card_height,
        card_p = v.card_padding,
        hero_h1 = v.hero_h1,
        hero_h2 = v.hero_h2,
        hero_body = v.hero_body,
        content_h2 = v.content_h2,
        content_h3 = v.content_h3,
        content_body = v.content_body,
        footer_body = v.footer_body,
        desktop = v.desktop_breakpoint,
        tablet = v.tablet_breakpoint,
        mobile = v.mobile_breakpoint,
        h1_tablet = v.h1_tablet,
        h1_mobile = v.h1_mobile,
        h2_tablet = v.h2_tablet,
        h2_mobile = v.h2_mobile,
        nesting = v.dom_nesting,
        outline = OUTLINE_SECTIONS
    )
}

/// Content-count summary appended to any tier
pub fn content_counts_suffix(summary: &str) -> String {
    format!(
        "\n\n---\n\n{}\n\nIMPORTANT: Use the EXACT item counts above when describing sections. Do NOT estimate.",
        summary
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Whole-document token extraction, screenshots only
pub const TOKEN_EXTRACTION_PROMPT: &str = r##"Analyze these website screenshots (desktop, tablet, mobile) and extract design tokens.

Return ONLY valid JSON in this exact format:

{
  "colors": {
    "primary": "#hex", "secondary": "#hex", "accent": "#hex",
    "background": "#hex", "surface": "#hex",
    "text": { "primary": "#hex", "secondary": "#hex", "muted": "#hex" },
    "border": "#hex"
  },
  "typography": {
    "fontFamily": { "heading": "Font Name, sans-serif", "body": "Font Name, sans-serif" },
    "fontSize": { "xs": "12px", "sm": "14px", "base": "16px", "lg": "18px", "xl": "20px", "2xl": "24px", "3xl": "30px", "4xl": "36px" },
    "fontWeight": { "normal": 400, "medium": 500, "semibold": 600, "bold": 700 },
    "lineHeight": { "tight": 1.25, "normal": 1.5, "relaxed": 1.75 }
  },
  "spacing": { "1": "4px", "2": "8px", "3": "12px", "4": "16px", "6": "24px", "8": "32px", "12": "48px", "16": "64px" },
  "borderRadius": { "sm": "4px", "md": "8px", "lg": "16px", "full": "9999px" },
  "shadows": { "sm": "0 1px 2px rgba(0,0,0,0.05)", "md": "0 4px 6px rgba(0,0,0,0.1)", "lg": "0 10px 15px rgba(0,0,0,0.1)" },
  "notes": []
}

RULES:
1. Use exact 6-digit hex codes (#RRGGBB), not color names
2. Identify common web fonts (Inter, Roboto, Open Sans, Poppins, Montserrat, Lato, ...)
3. If a font is unknown, use a reasonable fallback (sans-serif or serif)
4. Detect spacing patterns (an 8px grid is common)
5. Add observations or accessibility concerns to the notes array"##;

/// Whole-document token extraction with the page stylesheet as ground truth
pub fn token_prompt_with_stylesheet(css: &str) -> String {
    format!(
        "Extract design tokens from the provided CSS and screenshots.\n\
         CRITICAL: Extract EXACT values from the CSS. Do not estimate colors or fonts.\n\n\
         ## Source CSS\n```css\n{css}\n```\n\n---\n\n\
         Return ONLY valid JSON with the keys colors (primary, secondary, accent, background, \
         surface, text.primary, text.secondary, text.muted, border), typography (fontFamily.heading, \
         fontFamily.body, fontSize xs..4xl, fontWeight normal/medium/semibold/bold, lineHeight \
         tight/normal/relaxed), spacing (1, 2, 3, 4, 6, 8, 12, 16), borderRadius (sm, md, lg, full), \
         shadows (sm, md, lg) and notes.\n\n\
         RULES:\n\
         1. Copy EXACT hex codes and font-family values from the CSS\n\
         2. Convert rem to px where needed (1rem = 16px)\n\
         3. Look for custom properties (--color-*, --font-*, --space-*) and list them in notes\n\
         4. If a value is not in the CSS, estimate it from the screenshots",
        css = css
    )
}
