//! Context priority selection
//!
//! Decides which structured inputs are exposed to the vision model and
//! renders them into a request payload. Four tiers, richest first:
//! DOM hierarchy with exact measurements, measurements alone, source
//! markup with its stylesheet, and the bare screenshot.

pub mod formatting;
pub mod models;
pub mod selector;
pub mod templates;
pub mod truncation;

pub use models::{
    ContextInputs, ContextPayload, ContextTier, DimensionsSummary, DomHierarchy, MarkupSource,
};
pub use selector::ContextSelector;
pub use truncation::{truncate_to_budget, Truncated};
