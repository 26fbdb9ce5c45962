//! Configuration file discovery and loading.
//!
//! The file is JSON and every field is optional (see [`SiteConfig`]). Lookup
//! order: an explicit path from the command line, then
//! `AISTUDIO_CONFIG_PATH`, then `~/.config/aistudio/config.json` on most
//! platforms. A missing file yields defaults; a malformed one is an error.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use aistudio_types::SiteConfig;
use thiserror::Error;
use tracing::{debug, info};

use crate::paths::{config_home, expand_tilde};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "AISTUDIO_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when reading or validating configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exists but is not valid JSON for [`SiteConfig`].
    #[error("config parse error at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A value is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration together with the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub source: Option<PathBuf>,
}

/// Resolves the config path: explicit argument, then environment, then default.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return expand_tilde(&path.to_string_lossy());
    }
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    config_home().join(CONFIG_FILE_NAME)
}

/// Loads and validates configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = resolve_config_path(explicit);
    let loaded = match fs::read_to_string(&path) {
        Ok(data) => {
            let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "configuration loaded");
            LoadedConfig {
                config,
                source: Some(path),
            }
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no configuration file; using defaults");
            LoadedConfig {
                config: SiteConfig::default(),
                source: None,
            }
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    validate(&loaded.config)?;
    Ok(loaded)
}

/// Rejects values the state machines cannot work with.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    let threshold = config.reveal.threshold;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::Invalid {
            field: "reveal.threshold",
            reason: format!("{threshold} is outside 0.0..=1.0"),
        });
    }
    if config.reveal.bottom_margin_px < 0.0 {
        return Err(ConfigError::Invalid {
            field: "reveal.bottom_margin_px",
            reason: "must not be negative".to_string(),
        });
    }
    if config.terminal.px_per_row == 0 {
        return Err(ConfigError::Invalid {
            field: "terminal.px_per_row",
            reason: "must be at least 1".to_string(),
        });
    }
    if !config.navigation.reference_line_px.is_finite() {
        return Err(ConfigError::Invalid {
            field: "navigation.reference_line_px",
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.config, SiteConfig::default());
        assert_eq!(loaded.source, None);
    }

    #[test]
    fn explicit_file_overrides_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "navigation": { "route_settle_ms": 250 } }"#).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.config.navigation.route_settle_delay(), Duration::from_millis(250));
        assert_eq!(loaded.config.navigation.reference_line_px, 100.0);
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn environment_variable_is_consulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.json");
        fs::write(&path, r#"{ "switcher": { "crossfade_ms": 120 } }"#).unwrap();

        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            assert_eq!(resolve_config_path(None), path);
            let loaded = load_config(None).unwrap();
            assert_eq!(loaded.config.switcher.crossfade_ms, 120);
        });
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.5;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Invalid {
                field: "reveal.threshold",
                ..
            })
        ));
        config.reveal.threshold = 0.15;
        config.terminal.px_per_row = 0;
        assert!(validate(&config).is_err());
    }
}
