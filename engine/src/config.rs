//! Configuration loading.
//!
//! Tally reads an optional TOML file from `~/.tally/config.toml` (or the
//! path named by `TALLY_CONFIG`). A missing file is not an error; every
//! field has a default.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use tally_types::CalcMode;

use crate::app::UiOptions;

#[derive(Debug, Default, Deserialize)]
pub struct TallyConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Startup keypad mode when no session file exists ("standard" or
    /// "scientific"). A persisted session's mode takes precedence.
    pub mode: Option<String>,
    /// Use ASCII-only glyphs for operators and indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the key-flash effect and other motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl TallyConfig {
    /// The config file path: `TALLY_CONFIG` if set, else
    /// `~/.tally/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("TALLY_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".tally").join("config.toml"))
    }

    /// Load the config file, defaulting every field when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The keypad mode to start in when no session file overrides it.
    #[must_use]
    pub fn start_mode(&self) -> CalcMode {
        let Some(mode) = self.app.as_ref().and_then(|app| app.mode.as_deref()) else {
            return CalcMode::default();
        };
        match mode {
            "standard" => CalcMode::Standard,
            "scientific" => CalcMode::Scientific,
            other => {
                tracing::warn!(mode = other, "Unknown mode in config; using standard");
                CalcMode::Standard
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
            reduced_motion: app.is_some_and(|app| app.reduced_motion),
        }
    }
}

#[cfg(test)]
mod tests {
    use tally_types::CalcMode;

    use super::TallyConfig;

    #[test]
    fn empty_config_uses_defaults() {
        let config: TallyConfig = toml::from_str("").expect("parse");
        assert_eq!(config.start_mode(), CalcMode::Standard);
        let options = config.ui_options();
        assert!(!options.ascii_only);
        assert!(!options.high_contrast);
        assert!(!options.reduced_motion);
    }

    #[test]
    fn parses_app_section() {
        let config: TallyConfig = toml::from_str(
            r#"
            [app]
            mode = "scientific"
            ascii_only = true
            "#,
        )
        .expect("parse");

        assert_eq!(config.start_mode(), CalcMode::Scientific);
        assert!(config.ui_options().ascii_only);
        assert!(!config.ui_options().high_contrast);
    }

    #[test]
    fn unknown_mode_falls_back_to_standard() {
        let config: TallyConfig = toml::from_str(
            r#"
            [app]
            mode = "programmer"
            "#,
        )
        .expect("parse");

        assert_eq!(config.start_mode(), CalcMode::Standard);
    }

    #[test]
    fn load_from_missing_path_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let config = TallyConfig::load_from(&path).expect("load");
        assert!(config.app.is_none());
    }

    #[test]
    fn load_from_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\nmode = ").expect("write");

        let err = TallyConfig::load_from(&path).expect_err("parse error");
        assert_eq!(err.path(), &path);
    }
}
