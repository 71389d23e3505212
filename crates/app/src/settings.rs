use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use quadra_explain::ExplainConfig;
use quadra_report::ReportConfig;

/// Environment variable pointing at a settings file.
pub const CONFIG_VAR: &str = "QUADRA_CONFIG";

/// User settings, read from an optional TOML file.
///
/// ```toml
/// [explain]
/// model = "gemini-2.5-flash"
/// timeout_secs = 30
///
/// [report]
/// path = "reports/equation.txt"
/// width = 72
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub explain: ExplainConfig,
    pub report: ReportConfig,
}

impl Settings {
    /// Loads settings from `$QUADRA_CONFIG` or `~/.quadra/config.toml`.
    ///
    /// A missing file yields defaults. Environment variables then override the
    /// explanation API key and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let settings = match config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        Ok(settings.with_env())
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    fn with_env(mut self) -> Self {
        self.explain = self.explain.with_env();
        self
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs_next::home_dir().map(|home| home.join(".quadra").join("config.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let settings = Settings::from_toml_str("").expect("parses");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [explain]
            model = "gemini-2.5-flash"

            [report]
            width = 72
            "#,
        )
        .expect("parses");

        assert_eq!(settings.explain.model, "gemini-2.5-flash");
        assert_eq!(settings.explain.base_url, ExplainConfig::DEFAULT_BASE_URL);
        assert_eq!(settings.report.width, 72);
        assert_eq!(settings.report.lines_per_page, ReportConfig::default().lines_per_page);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Settings::from_toml_str("[report]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[report]\ntitle = \"Homework\"\n").expect("writes");

        let settings = Settings::from_file(&path).expect("loads");
        assert_eq!(settings.report.title, "Homework");
    }

    #[test]
    fn missing_file_is_an_error_when_read_directly() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Settings::from_file(&dir.path().join("absent.toml")).expect_err("missing");
        assert!(err.to_string().starts_with("reading "));
    }
}
