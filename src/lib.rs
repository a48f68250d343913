//! Context selection and design-token aggregation for screenshot-driven
//! page cloning.
//!
//! Two pure components sit at the core:
//!
//! - [`context::ContextSelector`] picks the richest structured context
//!   available for a vision-model request and renders it.
//! - [`tokens::TokenMerger`] folds per-section token fragments, in page
//!   order, into one canonical design token document.
//!
//! The [`driver`] module is the seam to the calling layer that actually
//! talks to a model.

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod lenient;
pub mod logging;
pub mod metrics;
pub mod ordering;
pub mod tokens;

pub use config::Config;
pub use context::{ContextInputs, ContextPayload, ContextSelector, ContextTier};
pub use driver::{extract_sections, run_section_extraction, SectionExtractor};
pub use error::{ContextError, Result};
pub use ordering::{plan_sections, restore_request_order, SectionPlan, SectionRequest};
pub use tokens::{MergeOutcome, SectionExtraction, TokenDocument, TokenMerger};
