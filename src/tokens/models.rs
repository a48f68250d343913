//! Canonical token document
//!
//! Every leaf is an `Option`: `None` means "not supplied yet". Absent leaves
//! are omitted when serialized, so a partial document never carries nulls.

use crate::lenient::{lenient, opt_float, opt_string, opt_weight};
use serde::{Deserialize, Serialize};

/// First-wins write into an optional slot
pub trait SlotFill<T> {
    /// Store `value` only if the slot is still empty; returns whether it was written
    fn fill_first(&mut self, value: T) -> bool;
}

impl<T> SlotFill<T> for Option<T> {
    fn fill_first(&mut self, value: T) -> bool {
        if self.is_some() {
            return false;
        }
        *self = Some(value);
        true
    }
}

/// Copy each absent leaf from `$defaults`
macro_rules! fill_absent {
    ($target:expr, $defaults:expr; $($field:ident),+ $(,)?) => {
        $(
            if $target.$field.is_none() {
                $target.$field = $defaults.$field.clone();
            }
        )+
    };
}

/// Canonical design token document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub colors: ColorPalette,

    #[serde(default, deserialize_with = "lenient")]
    pub typography: Typography,

    #[serde(default, deserialize_with = "lenient")]
    pub spacing: Spacing,

    #[serde(default, rename = "borderRadius", deserialize_with = "lenient")]
    pub border_radius: BorderRadius,

    #[serde(default, deserialize_with = "lenient")]
    pub shadows: Shadows,

    #[serde(default, deserialize_with = "lenient")]
    pub notes: Vec<String>,

    /// Identifiers of sections merged successfully, in input order
    #[serde(default, rename = "_sections", skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,

    /// Inputs considered, failures included
    #[serde(default, rename = "_sectionCount", skip_serializing_if = "Option::is_none")]
    pub section_count: Option<usize>,
}

impl TokenDocument {
    /// Fill every absent leaf from `defaults`.
    ///
    /// Values already present are never overwritten. Notes and bookkeeping
    /// fields are left to the caller.
    pub fn merge_defaults(&mut self, defaults: &TokenDocument) {
        self.colors.fill_from(&defaults.colors);
        self.typography.fill_from(&defaults.typography);
        fill_absent!(self.spacing, defaults.spacing; s1, s2, s3, s4, s6, s8, s12, s16);
        fill_absent!(self.border_radius, defaults.border_radius; sm, md, lg, full);
        fill_absent!(self.shadows, defaults.shadows; sm, md, lg);
    }

    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub surface: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: TextColors,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub border: Option<String>,
}

impl ColorPalette {
    fn fill_from(&mut self, defaults: &ColorPalette) {
        fill_absent!(self, defaults; primary, secondary, accent, background, surface, border);
        fill_absent!(self.text, defaults.text; primary, secondary, muted);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub muted: Option<String>,
}

/// Addressable color slot of the canonical palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Border,
    TextPrimary,
    TextSecondary,
    TextMuted,
}

impl ColorSlot {
    /// Validation order: top-level slots, then nested text colors
    pub const ALL: [ColorSlot; 9] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Accent,
        ColorSlot::Background,
        ColorSlot::Surface,
        ColorSlot::Border,
        ColorSlot::TextPrimary,
        ColorSlot::TextSecondary,
        ColorSlot::TextMuted,
    ];

    /// Dotted path inside the token document
    pub fn path(&self) -> &'static str {
        match self {
            Self::Primary => "colors.primary",
            Self::Secondary => "colors.secondary",
            Self::Accent => "colors.accent",
            Self::Background => "colors.background",
            Self::Surface => "colors.surface",
            Self::Border => "colors.border",
            Self::TextPrimary => "colors.text.primary",
            Self::TextSecondary => "colors.text.secondary",
            Self::TextMuted => "colors.text.muted",
        }
    }

    pub fn get<'a>(&self, palette: &'a ColorPalette) -> &'a Option<String> {
        match self {
            Self::Primary => &palette.primary,
            Self::Secondary => &palette.secondary,
            Self::Accent => &palette.accent,
            Self::Background => &palette.background,
            Self::Surface => &palette.surface,
            Self::Border => &palette.border,
            Self::TextPrimary => &palette.text.primary,
            Self::TextSecondary => &palette.text.secondary,
            Self::TextMuted => &palette.text.muted,
        }
    }

    pub fn get_mut<'a>(&self, palette: &'a mut ColorPalette) -> &'a mut Option<String> {
        match self {
            Self::Primary => &mut palette.primary,
            Self::Secondary => &mut palette.secondary,
            Self::Accent => &mut palette.accent,
            Self::Background => &mut palette.background,
            Self::Surface => &mut palette.surface,
            Self::Border => &mut palette.border,
            Self::TextPrimary => &mut palette.text.primary,
            Self::TextSecondary => &mut palette.text.secondary,
            Self::TextMuted => &mut palette.text.muted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(default, rename = "fontFamily", deserialize_with = "lenient")]
    pub font_family: FontFamily,
    #[serde(default, rename = "fontSize", deserialize_with = "lenient")]
    pub font_size: FontSizes,
    #[serde(default, rename = "fontWeight", deserialize_with = "lenient")]
    pub font_weight: FontWeights,
    #[serde(default, rename = "lineHeight", deserialize_with = "lenient")]
    pub line_height: LineHeights,
}

impl Typography {
    fn fill_from(&mut self, defaults: &Typography) {
        fill_absent!(self.font_family, defaults.font_family; heading, body);
        fill_absent!(self.font_size, defaults.font_size; xs, sm, base, lg, xl, xl2, xl3, xl4);
        fill_absent!(self.font_weight, defaults.font_weight; normal, medium, semibold, bold);
        fill_absent!(self.line_height, defaults.line_height; tight, normal, relaxed);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontFamily {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub body: Option<String>,
}

/// Font size buckets `xs` through `4xl`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub xs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub sm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub lg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub xl: Option<String>,
    #[serde(default, rename = "2xl", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub xl2: Option<String>,
    #[serde(default, rename = "3xl", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub xl3: Option<String>,
    #[serde(default, rename = "4xl", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub xl4: Option<String>,
}

impl FontSizes {
    pub fn entries(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("xs", &self.xs),
            ("sm", &self.sm),
            ("base", &self.base),
            ("lg", &self.lg),
            ("xl", &self.xl),
            ("2xl", &self.xl2),
            ("3xl", &self.xl3),
            ("4xl", &self.xl4),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_weight")]
    pub normal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_weight")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_weight")]
    pub semibold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_weight")]
    pub bold: Option<u32>,
}

impl FontWeights {
    pub fn entries(&self) -> [(&'static str, &Option<u32>); 4] {
        [
            ("normal", &self.normal),
            ("medium", &self.medium),
            ("semibold", &self.semibold),
            ("bold", &self.bold),
        ]
    }

    /// Slot for a canonical weight name, matched case-insensitively
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<u32>> {
        match name.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(&mut self.normal),
            "medium" => Some(&mut self.medium),
            "semibold" => Some(&mut self.semibold),
            "bold" => Some(&mut self.bold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_float")]
    pub tight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_float")]
    pub normal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_float")]
    pub relaxed: Option<f64>,
}

impl LineHeights {
    pub fn entries(&self) -> [(&'static str, &Option<f64>); 3] {
        [
            ("tight", &self.tight),
            ("normal", &self.normal),
            ("relaxed", &self.relaxed),
        ]
    }
}

/// Spacing scale keyed by multiples of 4px
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default, rename = "1", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s1: Option<String>,
    #[serde(default, rename = "2", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s2: Option<String>,
    #[serde(default, rename = "3", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s3: Option<String>,
    #[serde(default, rename = "4", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s4: Option<String>,
    #[serde(default, rename = "6", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s6: Option<String>,
    #[serde(default, rename = "8", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s8: Option<String>,
    #[serde(default, rename = "12", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s12: Option<String>,
    #[serde(default, rename = "16", skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub s16: Option<String>,
}

impl Spacing {
    pub fn entries(&self) -> [(&'static str, &Option<String>); 8] {
        [
            ("1", &self.s1),
            ("2", &self.s2),
            ("3", &self.s3),
            ("4", &self.s4),
            ("6", &self.s6),
            ("8", &self.s8),
            ("12", &self.s12),
            ("16", &self.s16),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub sm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub md: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub lg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub full: Option<String>,
}

impl BorderRadius {
    pub fn entries(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("sm", &self.sm),
            ("md", &self.md),
            ("lg", &self.lg),
            ("full", &self.full),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shadows {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub sm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub md: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_string")]
    pub lg: Option<String>,
}

impl Shadows {
    pub fn entries(&self) -> [(&'static str, &Option<String>); 3] {
        [("sm", &self.sm), ("md", &self.md), ("lg", &self.lg)]
    }
}
