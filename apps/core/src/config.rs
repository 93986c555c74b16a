//! Runtime configuration.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! `dotenv` in `main`) and can be overridden by command-line flags.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use validator::{Validate, ValidationError};

use crate::error::AppError;

pub const ENV_PDF_DIR: &str = "BOOKBOT_PDF_DIR";
pub const ENV_DESKTOP_PATH: &str = "BOOKBOT_DESKTOP_PATH";
pub const ENV_LOG_LEVEL: &str = "BOOKBOT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "BOOKBOT_LOG_FORMAT";

const DEFAULT_PDF_DIR: &str = "pdfs";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["text", "json"];

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    if LOG_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_format"))
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Local working directory PDFs are copied into.
    #[validate(length(min = 1))]
    pub pdf_dir: String,
    /// Explicit desktop folder, skipping discovery when set.
    #[validate(length(min = 1))]
    pub desktop_path: Option<String>,
    /// Log level used when `RUST_LOG` is not set.
    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String,
    /// `text` or `json` log lines.
    #[validate(custom(function = "validate_log_format"))]
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pdf_dir: DEFAULT_PDF_DIR.to_string(),
            desktop_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            pdf_dir: env::var(ENV_PDF_DIR).unwrap_or(defaults.pdf_dir),
            desktop_path: env::var(ENV_DESKTOP_PATH).ok(),
            log_level: env::var(ENV_LOG_LEVEL)
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.log_level),
            log_format: env::var(ENV_LOG_FORMAT)
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.log_format),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        pdf_dir: Option<PathBuf>,
        desktop_path: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self, AppError> {
        if let Some(dir) = pdf_dir {
            self.pdf_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(path) = desktop_path {
            self.desktop_path = Some(path.to_string_lossy().into_owned());
        }
        if let Some(level) = log_level {
            self.log_level = level.to_lowercase();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn pdf_dir(&self) -> PathBuf {
        PathBuf::from(&self.pdf_dir)
    }

    pub fn desktop_path(&self) -> Option<PathBuf> {
        self.desktop_path.as_ref().map(PathBuf::from)
    }

    /// Whether log lines should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pdf_dir(), PathBuf::from("pdfs"));
        assert!(!config.json_logs());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pdf_dir_rejected() {
        let result = AppConfig::default().with_overrides(Some(PathBuf::new()), None, None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
