//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `XUL_RENDER__STRICT=true`, `XUL_OUTPUT__NO_COLOR=1`
//! 3. Config file (`--config`, `XUL_CONFIG`, or the platform config dir)
//! 4. Built-in defaults (always present)
//!
//! # File format
//!
//! ```toml
//! [render]
//! data   = "data/report.toml"   # optional
//! format = "html"               # html | json
//! strict = false
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::RenderFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `xul render`.
    pub render: RenderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Data file used when `--data` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    pub format: RenderFormat,
    /// Reject unknown tags.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist. Otherwise the default location is used if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_file.map_or_else(Self::config_path, Path::to_path_buf);
        debug!(path = %path.display(), explicit = config_file.is_some(), "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("XUL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.xul.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "xul", "xul")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".xul.toml"))
    }

    /// The configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_render_html_leniently() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.render.format, RenderFormat::Html);
        assert!(!cfg.render.strict);
        assert!(cfg.render.data.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xul.toml");
        std::fs::write(&path, "[render]\nformat = \"json\"\nstrict = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.render.format, RenderFormat::Json);
        assert!(cfg.render.strict);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn written_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xul.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
