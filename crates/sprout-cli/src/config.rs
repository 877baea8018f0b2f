//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_<SECTION>__<KEY>`, e.g.
//!    `SPROUT_OUTPUT__UNKNOWN_STYLE=warn`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use sprout_core::{
    application::FallbackPolicy,
    domain::project::{DEFAULT_PLACEHOLDER_CONTENT, DEFAULT_PLACEHOLDER_FILE, DEFAULT_PROJECT_NAME},
};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SPROUT";
/// Name of the per-directory config file written by `sprout init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".sprout.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// What goes inside a new project.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub placeholder_file: String,
    pub placeholder_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `silent` (default) or `warn`: whether an unknown style token is
    /// reported on the diagnostic log.
    pub unknown_style: FallbackPolicy,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            placeholder_file: DEFAULT_PLACEHOLDER_FILE.into(),
            placeholder_content: DEFAULT_PLACEHOLDER_CONTENT.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_name() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_name, "My-app");
        assert_eq!(cfg.scaffold.placeholder_file, "server.js");
    }

    #[test]
    fn default_unknown_style_is_silent() {
        assert_eq!(AppConfig::default().output.unknown_style, FallbackPolicy::Silent);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.defaults.project_name, "My-app");
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sprout.toml");
        std::fs::write(
            &path,
            "[output]\nunknown_style = \"warn\"\n\n[scaffold]\nplaceholder_file = \"app.py\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.output.unknown_style, FallbackPolicy::Warn);
        assert_eq!(cfg.scaffold.placeholder_file, "app.py");
        assert_eq!(cfg.scaffold.placeholder_content, "//servercode");
        assert_eq!(cfg.defaults.project_name, "My-app");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, text).unwrap();
        assert_eq!(AppConfig::load_from(&path, true).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
