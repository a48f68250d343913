//! Token Merge Engine
//!
//! Folds section extraction results, in page order, into one canonical
//! Token Document. Every write is first-wins: a slot that already holds a
//! value is never touched again, so the earliest section supplying a valid
//! value owns it. Invalid colors are rejected outright and never reach the
//! document.

use super::defaults::DEFAULT_TOKENS;
use super::models::{ColorSlot, SlotFill, TokenDocument};
use super::section::{classify_spacing_key, SectionColors, SectionExtraction, SpacingSlot};
use super::validator::is_valid_hex_color;
use crate::lenient::{value_as_text, value_as_weight};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Source field to canonical slot, applied in this order
const COLOR_MAPPINGS: [(SectionColorField, ColorSlot); 5] = [
    (SectionColorField::Background, ColorSlot::Background),
    (SectionColorField::Text, ColorSlot::TextPrimary),
    (SectionColorField::Heading, ColorSlot::TextSecondary),
    (SectionColorField::Accent, ColorSlot::Accent),
    (SectionColorField::Border, ColorSlot::Border),
];

#[derive(Debug, Clone, Copy)]
enum SectionColorField {
    Background,
    Text,
    Heading,
    Accent,
    Border,
}

impl SectionColorField {
    fn get(self, colors: &SectionColors) -> Option<&str> {
        match self {
            Self::Background => colors.background.as_deref(),
            Self::Text => colors.text.as_deref(),
            Self::Heading => colors.heading.as_deref(),
            Self::Accent => colors.accent.as_deref(),
            Self::Border => colors.border.as_deref(),
        }
    }
}

/// Result of one aggregation run
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Complete document, defaults already applied
    pub tokens: TokenDocument,
    /// Inputs that carried an error marker
    pub failed: usize,
    /// Present color values dropped for failing hex validation
    pub rejected_colors: usize,
}

/// Token merger
#[derive(Debug, Clone)]
pub struct TokenMerger {
    defaults: TokenDocument,
}

impl Default for TokenMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenMerger {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_TOKENS.clone())
    }

    /// Merger that finalizes against a custom Defaults Document
    pub fn with_defaults(defaults: TokenDocument) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &TokenDocument {
        &self.defaults
    }

    /// Merge results in sequence order, then fill gaps from the defaults
    pub fn merge(&self, results: &[SectionExtraction]) -> MergeOutcome {
        let mut run = MergeRun::default();

        for result in results {
            run.apply(result);
        }

        let MergeRun {
            mut tokens,
            merged,
            failed,
            rejected_colors,
            ..
        } = run;

        let merged_any = !merged.is_empty();
        tokens.sections = Some(merged);
        tokens.section_count = Some(results.len());
        tokens.merge_defaults(&self.defaults);

        if !merged_any {
            let mut notes = self.defaults.notes.clone();
            notes.append(&mut tokens.notes);
            tokens.notes = notes;
        }

        info!(
            "Merged {} of {} sections ({} failed, {} colors rejected)",
            results.len() - failed,
            results.len(),
            failed,
            rejected_colors
        );

        MergeOutcome {
            tokens,
            failed,
            rejected_colors,
        }
    }
}

/// Accumulator for a single run
#[derive(Default)]
struct MergeRun {
    tokens: TokenDocument,
    merged: Vec<String>,
    seen_sizes: HashSet<String>,
    failed: usize,
    rejected_colors: usize,
}

impl MergeRun {
    fn apply(&mut self, result: &SectionExtraction) {
        let id = result.section_id();

        if let Some(error) = &result.error {
            warn!("Section {} failed: {}", id, error);
            self.failed += 1;
            self.tokens
                .notes
                .push(format!("Section {} failed: {}", id, error));
            return;
        }

        debug!("Merging section {}", id);
        self.merged.push(id.to_string());

        self.merge_colors(id, &result.colors);
        self.merge_typography(result);
        self.merge_spacing(result);

        if let Some(radius) = &result.border_radius {
            self.tokens.border_radius.md.fill_first(radius.clone());
        }
        if let Some(shadow) = &result.shadow {
            self.tokens.shadows.md.fill_first(shadow.clone());
        }

        self.tokens.notes.extend(result.notes.iter().cloned());
    }

    fn merge_colors(&mut self, id: &str, colors: &SectionColors) {
        for (field, slot) in COLOR_MAPPINGS {
            let Some(value) = field.get(colors) else {
                continue;
            };
            if !is_valid_hex_color(value) {
                warn!("Section {}: rejected {} = {:?}", id, slot.path(), value);
                self.rejected_colors += 1;
                continue;
            }
            if slot.get_mut(&mut self.tokens.colors).fill_first(value.to_string()) {
                debug!("Section {}: {} = {}", id, slot.path(), value);
            }
        }

        if let Some(accent) = colors.accent.as_deref().filter(|a| is_valid_hex_color(a)) {
            if self.tokens.colors.primary.fill_first(accent.to_string()) {
                debug!("Section {}: colors.primary inferred from accent {}", id, accent);
            }
        }
    }

    fn merge_typography(&mut self, result: &SectionExtraction) {
        let hints = &result.typography;
        let typography = &mut self.tokens.typography;

        if let Some(family) = &hints.font_family {
            typography.font_family.heading.fill_first(family.clone());
            typography.font_family.body.fill_first(family.clone());
        }

        let sizes = [
            (&hints.heading_size, &mut typography.font_size.xl4),
            (&hints.body_size, &mut typography.font_size.base),
        ];
        for (size, bucket) in sizes {
            if let Some(size) = size {
                if self.seen_sizes.insert(size.clone()) {
                    bucket.fill_first(size.clone());
                }
            }
        }

        for (name, value) in &hints.font_weights {
            let (Some(slot), Some(weight)) = (
                typography.font_weight.slot_mut(name),
                value_as_weight(value),
            ) else {
                continue;
            };
            slot.fill_first(weight);
        }
    }

    fn merge_spacing(&mut self, result: &SectionExtraction) {
        for (key, value) in &result.spacing {
            let slot = match classify_spacing_key(key) {
                SpacingSlot::Scale16 => &mut self.tokens.spacing.s16,
                SpacingSlot::Scale4 => &mut self.tokens.spacing.s4,
                SpacingSlot::Ignored => continue,
            };
            if let Some(value) = value_as_text(value) {
                slot.fill_first(value);
            }
        }
    }
}
