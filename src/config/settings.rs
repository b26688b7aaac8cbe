//! User settings for the command-line front end.
//!
//! The preparation core reads none of these; its constants are fixed.

use std::path::Path;

use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable overriding `api_url`.
pub const ENV_API_URL: &str = "SENTISCOPE_API_URL";
/// Environment variable overriding `api_version`.
pub const ENV_API_VERSION: &str = "SENTISCOPE_API_VERSION";

/// How prepared results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document of the prepared datasets.
    #[default]
    Json,
    /// Plain-text report.
    Text,
}

impl OutputFormat {
    /// What: Parse an output format from settings or CLI.
    ///
    /// Inputs: `s` (`json` or `text`, also `plain`/`report`), case-insensitive.
    ///
    /// Output: `Some(OutputFormat)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "plain" | "report" => Some(Self::Text),
            _ => None,
        }
    }

    /// Settings key for this format.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

/// Front-end settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Backend origin.
    pub api_url: String,
    /// Backend API version segment.
    pub api_version: String,
    /// Default output format.
    pub output_format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            api_version: "v1".to_string(),
            output_format: OutputFormat::Json,
            pretty_json: true,
        }
    }
}

impl Settings {
    /// What: Load settings from an explicit path or the default location, then apply env overrides.
    ///
    /// Inputs:
    /// - `explicit`: Path given on the command line, if any.
    ///
    /// Output:
    /// - `Ok(Settings)`; defaults when no file exists at the default location.
    ///
    /// # Errors
    /// - An explicitly given path cannot be read.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read settings {}: {e}", path.display()))?;
            settings.apply_content(&content);
            tracing::debug!(path = %path.display(), "loaded settings");
        } else if let Some(path) = super::paths::resolve_settings_path() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    settings.apply_content(&content);
                    tracing::debug!(path = %path.display(), "loaded settings");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
                }
            }
        }
        settings.apply_overrides(|k| std::env::var(k).ok());
        Ok(settings)
    }

    /// What: Apply `key = value` lines on top of the current values.
    ///
    /// Inputs:
    /// - `content`: Settings file text.
    ///
    /// Output:
    /// - None (modifies `self` in-place).
    ///
    /// Details:
    /// - Unknown keys and unparsable values are logged and ignored.
    pub fn apply_content(&mut self, content: &str) {
        for line in content.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, val)) = parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "api_url" | "base_url" => {
                    if !val.is_empty() {
                        self.api_url = val;
                    }
                }
                "api_version" => {
                    if !val.is_empty() {
                        self.api_version = val;
                    }
                }
                "output_format" | "format" => match OutputFormat::from_config_key(&val) {
                    Some(f) => self.output_format = f,
                    None => tracing::warn!(value = %val, "unknown output_format; keeping current"),
                },
                "pretty_json" => self.pretty_json = parse_bool(&val),
                _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
            }
        }
    }

    /// What: Apply environment overrides for the backend address.
    ///
    /// Inputs:
    /// - `lookup`: Variable lookup, normally `std::env::var`.
    ///
    /// Output:
    /// - None (modifies `self` in-place). Blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(version) = lookup(ENV_API_VERSION).filter(|v| !v.trim().is_empty()) {
            self.api_version = version.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse a full settings file with comments and aliases.
    ///
    /// Inputs:
    /// - Content setting every key, with an unknown key and a bad format.
    ///
    /// Output:
    /// - Known keys applied, bad values ignored.
    fn apply_content_reads_known_keys() {
        let mut s = Settings::default();
        s.apply_content(
            "# backend\napi_url = https://analyzer.example.org/ # prod\napi-version = v2\n\
             format = text\npretty_json = no\ncolor = yes\n",
        );
        assert_eq!(s.api_url, "https://analyzer.example.org/");
        assert_eq!(s.api_version, "v2");
        assert_eq!(s.output_format, OutputFormat::Text);
        assert!(!s.pretty_json);

        s.apply_content("output_format = yaml\napi_url =\n");
        assert_eq!(s.output_format, OutputFormat::Text);
        assert_eq!(s.api_url, "https://analyzer.example.org/");
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut s = Settings::default();
        s.apply_content("api_url = http://file\n");
        s.apply_overrides(|k| match k {
            ENV_API_URL => Some("http://env".to_string()),
            ENV_API_VERSION => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(s.api_url, "http://env");
        assert_eq!(s.api_version, "v1");
    }

    #[test]
    fn load_reports_missing_explicit_file() {
        let missing = std::path::Path::new("/nonexistent/sentiscope/settings.conf");
        assert!(Settings::load(Some(missing)).is_err());
    }
}
