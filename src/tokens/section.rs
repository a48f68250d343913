//! Section Extraction Result
//!
//! Loose, untrusted token fragment produced for one page section. Colors are
//! flat, radius and shadow are single values, and any field may be missing
//! or malformed.

use crate::lenient::{lenient, opt_marker, opt_string};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionExtraction {
    /// Assigned identifier, e.g. `section-0-header`
    #[serde(default, alias = "_section", deserialize_with = "opt_string")]
    pub section: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub colors: SectionColors,

    #[serde(default, deserialize_with = "lenient")]
    pub typography: TypographyHints,

    /// Free-form keys, kept in the order the model produced them
    #[serde(default, deserialize_with = "lenient")]
    pub spacing: IndexMap<String, Value>,

    #[serde(default, rename = "borderRadius", deserialize_with = "opt_string")]
    pub border_radius: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub shadow: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub notes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "opt_marker")]
    pub error: Option<String>,
}

impl SectionExtraction {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            ..Default::default()
        }
    }

    /// Result for a section whose extraction call failed
    pub fn failed(section: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn section_id(&self) -> &str {
        self.section.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionColors {
    #[serde(default, deserialize_with = "opt_string")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub accent: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographyHints {
    #[serde(default, rename = "fontFamily", deserialize_with = "opt_string")]
    pub font_family: Option<String>,
    #[serde(default, rename = "headingSize", deserialize_with = "opt_string")]
    pub heading_size: Option<String>,
    #[serde(default, rename = "bodySize", deserialize_with = "opt_string")]
    pub body_size: Option<String>,
    /// Weight name to value; values may be numbers or numeric strings
    #[serde(default, rename = "fontWeights", deserialize_with = "lenient")]
    pub font_weights: IndexMap<String, Value>,
}

/// Canonical spacing slot a free-form key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingSlot {
    /// Scale key `16`
    Scale16,
    /// Scale key `4`
    Scale4,
    Ignored,
}

/// Classify a model-provided spacing key.
///
/// Case-insensitive substring match: `section` or `container` wins over
/// `gap`, everything else is ignored.
pub fn classify_spacing_key(key: &str) -> SpacingSlot {
    let key = key.to_lowercase();
    if key.contains("section") || key.contains("container") {
        SpacingSlot::Scale16
    } else if key.contains("gap") {
        SpacingSlot::Scale4
    } else {
        SpacingSlot::Ignored
    }
}
