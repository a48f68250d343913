//! Writing a finished token document to disk

use super::css::render_tokens_css;
use super::models::TokenDocument;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TOKENS_JSON_FILE: &str = "design-tokens.json";
pub const TOKENS_CSS_FILE: &str = "tokens.css";

/// Paths of the files produced by [`write_token_files`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFiles {
    pub json: PathBuf,
    pub css: PathBuf,
}

/// Write `design-tokens.json` and `tokens.css` into `output_dir`, creating it
/// if needed
pub fn write_token_files(tokens: &TokenDocument, output_dir: impl AsRef<Path>) -> Result<TokenFiles> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let json = output_dir.join(TOKENS_JSON_FILE);
    fs::write(&json, tokens.to_json_pretty()?)?;

    let css = output_dir.join(TOKENS_CSS_FILE);
    fs::write(&css, render_tokens_css(tokens))?;

    info!("Saved {} and {}", json.display(), css.display());
    Ok(TokenFiles { json, css })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContextError;
    use tempfile::TempDir;

    #[test]
    fn test_write_token_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("tokens");

        let files = write_token_files(&TokenDocument::defaults(), &out).unwrap();

        let written: TokenDocument =
            serde_json::from_str(&fs::read_to_string(&files.json).unwrap()).unwrap();
        assert_eq!(written, TokenDocument::defaults());

        let css = fs::read_to_string(&files.css).unwrap();
        assert!(css.starts_with("/* Design Tokens - Auto-generated */"));
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_token_files(&TokenDocument::defaults(), &blocker).unwrap_err();
        assert!(matches!(err, ContextError::Io(_)));
    }
}
