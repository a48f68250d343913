//! Whole-document extraction path
//!
//! A single model response covering the whole page. Unlike the section
//! merge, invalid colors are kept in place and only reported as notes.

use super::models::TokenDocument;
use super::validator::validate_tokens;
use crate::error::{ContextError, Result};
use tracing::{debug, warn};

/// Parsed whole-document response
#[derive(Debug, Clone, PartialEq)]
pub struct WholeDocument {
    pub tokens: TokenDocument,
    /// Whether the response carried a non-null `notes` key
    pub notes_supplied: bool,
}

impl From<TokenDocument> for WholeDocument {
    fn from(tokens: TokenDocument) -> Self {
        Self {
            tokens,
            notes_supplied: true,
        }
    }
}

/// Parse raw model output into a token document
pub fn parse_token_document(text: &str) -> Result<WholeDocument> {
    let value: serde_json::Value = serde_json::from_str(text.trim())?;
    if !value.is_object() {
        return Err(ContextError::Extraction(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    let notes_supplied = value.get("notes").map_or(false, |n| !n.is_null());
    Ok(WholeDocument {
        tokens: serde_json::from_value(value)?,
        notes_supplied,
    })
}

/// Append validation notes and fill gaps from the defaults.
///
/// Invalid values stay where the model put them. Without validation notes,
/// a response that omitted `notes` takes the defaults note; an explicit
/// empty list stays empty.
pub fn finalize_whole_document(document: impl Into<WholeDocument>) -> TokenDocument {
    let WholeDocument {
        mut tokens,
        notes_supplied,
    } = document.into();
    let defaults = TokenDocument::defaults();

    let errors = validate_tokens(&tokens);
    if !errors.is_empty() {
        warn!("Validation warnings: {:?}", errors);
        tokens.notes.extend(errors);
    } else if !notes_supplied {
        tokens.notes = defaults.notes.clone();
    }

    tokens.merge_defaults(&defaults);
    tokens
}

/// Token document for a raw whole-document response.
///
/// Missing or empty responses yield the Defaults Document; unparseable ones
/// yield the defaults with a single failure note.
pub fn tokens_from_response(response: Option<&str>) -> TokenDocument {
    let text = match response.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => {
            warn!("Empty response, using default tokens");
            return TokenDocument::defaults();
        }
    };

    match parse_token_document(text) {
        Ok(document) => {
            debug!("Parsed whole-document token response");
            finalize_whole_document(document)
        }
        Err(e) => {
            warn!("Error during token extraction: {}", e);
            let mut tokens = TokenDocument::defaults();
            tokens.notes = vec![format!("Extraction failed: {}", e.note_text())];
            tokens
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
