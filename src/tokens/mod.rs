//! Design token aggregation
//!
//! Section extraction results are merged first-wins into a canonical
//! [`TokenDocument`], which is then completed from the Defaults Document.
//! A whole-page response takes the looser [`finalize`] path instead.

pub mod css;
pub mod defaults;
pub mod finalize;
pub mod merge;
pub mod models;
pub mod output;
pub mod section;
pub mod validator;

pub use css::{css_variables, render_tokens_css};
pub use defaults::DEFAULT_TOKENS;
pub use finalize::{
    finalize_whole_document, parse_token_document, tokens_from_response, WholeDocument,
};
pub use merge::{MergeOutcome, TokenMerger};
pub use models::{ColorSlot, SlotFill, TokenDocument};
pub use output::{write_token_files, TokenFiles};
pub use section::{classify_spacing_key, SectionExtraction, SpacingSlot};
pub use validator::{is_valid_hex_color, validate_tokens};
