//! Hex color validation

use super::models::{ColorSlot, TokenDocument};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

/// True iff `value` is `#` followed by exactly six hex digits
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Notes for every present color that fails validation, in slot order
pub fn validate_tokens(tokens: &TokenDocument) -> Vec<String> {
    ColorSlot::ALL
        .iter()
        .filter_map(|slot| {
            slot.get(&tokens.colors)
                .as_deref()
                .filter(|value| !is_valid_hex_color(value))
                .map(|value| format!("Invalid hex color: {} = {}", slot.path(), value))
        })
        .collect()
}
