//! Configuration for context selection, section extraction and logging
//!
//! Values come from (lowest to highest precedence) built-in defaults, an
//! optional TOML file, `DESIGN_CLONE__*` environment variables and the flat
//! `DESIGN_CLONE_*` overrides applied by [`Config::from_env`].

use crate::error::{ContextError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Truncation budgets applied while rendering context payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Byte budget for raw page markup in the markup tier
    #[serde(default = "default_markup_max_bytes")]
    pub markup_max_bytes: usize,

    /// Byte budget for stylesheet text in the markup tier
    #[serde(default = "default_stylesheet_max_bytes")]
    pub stylesheet_max_bytes: usize,

    /// Byte budget for stylesheet text in the token extraction prompt
    #[serde(default = "default_token_stylesheet_max_bytes")]
    pub token_stylesheet_max_bytes: usize,
}

fn default_markup_max_bytes() -> usize {
    100_000
}

fn default_stylesheet_max_bytes() -> usize {
    100_000
}

fn default_token_stylesheet_max_bytes() -> usize {
    15_000
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            markup_max_bytes: default_markup_max_bytes(),
            stylesheet_max_bytes: default_stylesheet_max_bytes(),
            token_stylesheet_max_bytes: default_token_stylesheet_max_bytes(),
        }
    }
}

/// Settings for the calling layer that requests one extraction per section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Sections requested per run; the remainder is discarded
    #[serde(default = "default_max_sections")]
    pub max_sections: usize,

    /// Pause between two consecutive model calls
    #[serde(default = "default_inter_call_delay_ms")]
    pub inter_call_delay_ms: u64,

    #[serde(default = "default_model")]
    pub model: String,

    /// Falls back to GEMINI_API_KEY / GOOGLE_API_KEY when unset
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_max_sections() -> usize {
    8
}

fn default_inter_call_delay_ms() -> u64 {
    1000
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_sections: default_max_sections(),
            inter_call_delay_ms: default_inter_call_delay_ms(),
            model: default_model(),
            api_key: None,
        }
    }
}

impl ExtractionConfig {
    /// Delay between consecutive extraction calls
    pub fn inter_call_delay(&self) -> Duration {
        Duration::from_millis(self.inter_call_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file plus `DESIGN_CLONE__*` variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    /// Load configuration, with the file source optional
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(::config::File::from(path.to_path_buf()));
        }

        let config: Config = builder
            .add_source(
                ::config::Environment::with_prefix("DESIGN_CLONE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        let config = config.from_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply flat environment variable overrides
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("DESIGN_CLONE_MAX_SECTIONS") {
            if let Ok(max) = val.parse() {
                self.extraction.max_sections = max;
            }
        }

        if let Ok(val) = std::env::var("DESIGN_CLONE_CALL_DELAY_MS") {
            if let Ok(ms) = val.parse() {
                self.extraction.inter_call_delay_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("DESIGN_CLONE_MODEL") {
            self.extraction.model = val;
        }

        if let Ok(val) = std::env::var("DESIGN_CLONE_LOG_LEVEL") {
            self.logging.level = val;
        }

        self
    }

    /// Reject budgets and caps that would make every run empty
    pub fn validate(&self) -> Result<()> {
        if self.extraction.max_sections == 0 {
            return Err(ContextError::Configuration(
                "extraction.max_sections must be at least 1".to_string(),
            ));
        }

        let budgets = [
            ("selector.markup_max_bytes", self.selector.markup_max_bytes),
            ("selector.stylesheet_max_bytes", self.selector.stylesheet_max_bytes),
            (
                "selector.token_stylesheet_max_bytes",
                self.selector.token_stylesheet_max_bytes,
            ),
        ];
        for (name, value) in budgets {
            if value == 0 {
                return Err(ContextError::Configuration(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn inter_call_delay(&self) -> Duration {
        self.extraction.inter_call_delay()
    }

    /// API key from the environment, then from the configuration file
    pub fn resolve_api_key(&self) -> Option<String> {
        ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .or_else(|| self.extraction.api_key.clone())
    }
}

/// Directories searched for a `.env` file, first match wins
pub fn env_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        paths.push(home.join(".claude").join("skills"));
        paths.push(home.join(".claude"));
    }
    paths
}

/// Load the first `.env` found in `search_paths`.
///
/// Variables already present in the process environment are kept. Returns the
/// path of the file that was loaded, if any.
pub fn load_env_files(search_paths: &[PathBuf]) -> Option<PathBuf> {
    for dir in search_paths {
        let env_file = dir.join(".env");
        if !env_file.is_file() {
            continue;
        }

        match dotenvy::from_path(&env_file) {
            Ok(()) => {
                info!("Loaded environment from {}", env_file.display());
                return Some(env_file);
            }
            Err(e) => {
                debug!("Failed to read {}: {}", env_file.display(), e);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.selector.markup_max_bytes, 100_000);
        assert_eq!(config.selector.stylesheet_max_bytes, 100_000);
        assert_eq!(config.selector.token_stylesheet_max_bytes, 15_000);
        assert_eq!(config.extraction.max_sections, 8);
        assert_eq!(config.extraction.model, "gemini-2.5-flash");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_section_cap_rejected() {
        let mut config = Config::default();
        config.extraction.max_sections = 0;
        assert!(matches!(
            config.validate(),
            Err(ContextError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut config = Config::default();
        config.selector.stylesheet_max_bytes = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stylesheet_max_bytes"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design-clone.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[selector]\nmarkup_max_bytes = 2048\n\n[extraction]\nmax_sections = 3\ninter_call_delay_ms = 250"
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.selector.markup_max_bytes, 2048);
        assert_eq!(config.selector.stylesheet_max_bytes, 100_000);
        assert_eq!(config.extraction.max_sections, 3);
        assert_eq!(config.inter_call_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_env_file_keeps_existing_variables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "DESIGN_CLONE_TEST_FRESH=from-file\nDESIGN_CLONE_TEST_KEPT=from-file\n",
        )
        .unwrap();
        std::env::set_var("DESIGN_CLONE_TEST_KEPT", "from-process");

        let missing = dir.path().join("missing");
        let loaded = load_env_files(&[missing, dir.path().to_path_buf()]);

        assert_eq!(loaded, Some(dir.path().join(".env")));
        assert_eq!(std::env::var("DESIGN_CLONE_TEST_FRESH").unwrap(), "from-file");
        assert_eq!(std::env::var("DESIGN_CLONE_TEST_KEPT").unwrap(), "from-process");

        std::env::remove_var("DESIGN_CLONE_TEST_FRESH");
        std::env::remove_var("DESIGN_CLONE_TEST_KEPT");
    }

    #[test]
    fn test_load_env_files_none_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_env_files(&[dir.path().to_path_buf()]), None);
    }
}
