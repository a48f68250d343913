//! Stylesheet-variable projection of a token document
//!
//! Each category maps to a fixed, ordered set of custom property names.
//! Values absent from the document are taken from the Defaults Document.

use super::defaults::DEFAULT_TOKENS;
use super::models::{ColorSlot, TokenDocument};
use indexmap::IndexMap;

/// One commented block of the rendered `:root` rule
#[derive(Debug, Clone, PartialEq)]
pub struct VariableGroup {
    pub title: &'static str,
    pub variables: Vec<(String, String)>,
}

fn color_variable(slot: ColorSlot) -> &'static str {
    match slot {
        ColorSlot::Primary => "--color-primary",
        ColorSlot::Secondary => "--color-secondary",
        ColorSlot::Accent => "--color-accent",
        ColorSlot::Background => "--color-background",
        ColorSlot::Surface => "--color-surface",
        ColorSlot::TextPrimary => "--color-text-primary",
        ColorSlot::TextSecondary => "--color-text-secondary",
        ColorSlot::TextMuted => "--color-text-muted",
        ColorSlot::Border => "--color-border",
    }
}

/// Stylesheet order: border comes after the text colors
const COLOR_ORDER: [ColorSlot; 9] = [
    ColorSlot::Primary,
    ColorSlot::Secondary,
    ColorSlot::Accent,
    ColorSlot::Background,
    ColorSlot::Surface,
    ColorSlot::TextPrimary,
    ColorSlot::TextSecondary,
    ColorSlot::TextMuted,
    ColorSlot::Border,
];

fn pick<T: ToString>(value: &Option<T>, default: &Option<T>) -> String {
    value
        .as_ref()
        .or(default.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn prefixed<T: ToString>(
    prefix: &str,
    entries: impl IntoIterator<Item = (&'static str, Option<T>, Option<T>)>,
) -> Vec<(String, String)> {
    entries
        .into_iter()
        .map(|(key, value, default)| (format!("{}{}", prefix, key), pick(&value, &default)))
        .collect()
}

/// Variables grouped by category, in stylesheet order
pub fn css_variable_groups(tokens: &TokenDocument) -> Vec<VariableGroup> {
    let defaults = &*DEFAULT_TOKENS;
    let typo = &tokens.typography;
    let default_typo = &defaults.typography;

    let colors = COLOR_ORDER
        .iter()
        .map(|slot| {
            (
                color_variable(*slot).to_string(),
                pick(slot.get(&tokens.colors), slot.get(&defaults.colors)),
            )
        })
        .collect();

    let mut typography = vec![
        (
            "--font-heading".to_string(),
            pick(&typo.font_family.heading, &default_typo.font_family.heading),
        ),
        (
            "--font-body".to_string(),
            pick(&typo.font_family.body, &default_typo.font_family.body),
        ),
    ];
    typography.extend(prefixed(
        "--font-size-",
        zip_entries(typo.font_size.entries(), default_typo.font_size.entries()),
    ));
    typography.extend(prefixed(
        "--font-weight-",
        zip_entries(typo.font_weight.entries(), default_typo.font_weight.entries()),
    ));
    typography.extend(prefixed(
        "--line-height-",
        zip_entries(typo.line_height.entries(), default_typo.line_height.entries()),
    ));

    vec![
        VariableGroup {
            title: "Colors",
            variables: colors,
        },
        VariableGroup {
            title: "Typography",
            variables: typography,
        },
        VariableGroup {
            title: "Spacing",
            variables: prefixed(
                "--space-",
                zip_entries(tokens.spacing.entries(), defaults.spacing.entries()),
            ),
        },
        VariableGroup {
            title: "Border Radius",
            variables: prefixed(
                "--radius-",
                zip_entries(tokens.border_radius.entries(), defaults.border_radius.entries()),
            ),
        },
        VariableGroup {
            title: "Shadows",
            variables: prefixed(
                "--shadow-",
                zip_entries(tokens.shadows.entries(), defaults.shadows.entries()),
            ),
        },
    ]
}

fn zip_entries<'a, T: Clone + 'a, const N: usize>(
    values: [(&'static str, &'a Option<T>); N],
    defaults: [(&'static str, &'a Option<T>); N],
) -> impl Iterator<Item = (&'static str, Option<T>, Option<T>)> + 'a {
    values
        .into_iter()
        .zip(defaults)
        .map(|((key, value), (_, default))| (key, value.clone(), default.clone()))
}

/// Flat, ordered variable listing
pub fn css_variables(tokens: &TokenDocument) -> IndexMap<String, String> {
    css_variable_groups(tokens)
        .into_iter()
        .flat_map(|group| group.variables)
        .collect()
}

/// Render the `:root` custom property block
pub fn render_tokens_css(tokens: &TokenDocument) -> String {
    let mut lines = vec![
        "/* Design Tokens - Auto-generated */".to_string(),
        "/* Edit values below to customize the design */".to_string(),
        String::new(),
        ":root {".to_string(),
    ];

    for (i, group) in css_variable_groups(tokens).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("  /* {} */", group.title));
        for (name, value) in &group.variables {
            lines.push(format!("  {}: {};", name, value));
        }
    }

    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}
