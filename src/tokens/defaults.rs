//! Defaults Document
//!
//! Fully populated fallback used to fill whatever a run leaves absent.

use super::models::{
    BorderRadius, ColorPalette, FontFamily, FontSizes, FontWeights, LineHeights, Shadows, Spacing,
    TextColors, TokenDocument, Typography,
};
use once_cell::sync::Lazy;

/// Note carried by the untouched Defaults Document
pub const DEFAULTS_NOTE: &str = "Using default tokens - extraction failed or was not performed";

/// Shared read-only Defaults Document
pub static DEFAULT_TOKENS: Lazy<TokenDocument> = Lazy::new(build_defaults);

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn build_defaults() -> TokenDocument {
    TokenDocument {
        colors: ColorPalette {
            primary: s("#2563eb"),
            secondary: s("#64748b"),
            accent: s("#f59e0b"),
            background: s("#ffffff"),
            surface: s("#f8fafc"),
            text: TextColors {
                primary: s("#0f172a"),
                secondary: s("#475569"),
                muted: s("#94a3b8"),
            },
            border: s("#e2e8f0"),
        },
        typography: Typography {
            font_family: FontFamily {
                heading: s("Inter, sans-serif"),
                body: s("Inter, sans-serif"),
            },
            font_size: FontSizes {
                xs: s("12px"),
                sm: s("14px"),
                base: s("16px"),
                lg: s("18px"),
                xl: s("20px"),
                xl2: s("24px"),
                xl3: s("30px"),
                xl4: s("36px"),
            },
            font_weight: FontWeights {
                normal: Some(400),
                medium: Some(500),
                semibold: Some(600),
                bold: Some(700),
            },
            line_height: LineHeights {
                tight: Some(1.25),
                normal: Some(1.5),
                relaxed: Some(1.75),
            },
        },
        spacing: Spacing {
            s1: s("4px"),
            s2: s("8px"),
            s3: s("12px"),
            s4: s("16px"),
            s6: s("24px"),
            s8: s("32px"),
            s12: s("48px"),
            s16: s("64px"),
        },
        border_radius: BorderRadius {
            sm: s("4px"),
            md: s("8px"),
            lg: s("16px"),
            full: s("9999px"),
        },
        shadows: Shadows {
            sm: s("0 1px 2px rgba(0,0,0,0.05)"),
            md: s("0 4px 6px rgba(0,0,0,0.1)"),
            lg: s("0 10px 15px rgba(0,0,0,0.1)"),
        },
        notes: vec![DEFAULTS_NOTE.to_string()],
        sections: None,
        section_count: None,
    }
}

impl TokenDocument {
    /// Fresh copy of the Defaults Document
    pub fn defaults() -> Self {
        DEFAULT_TOKENS.clone()
    }
}
