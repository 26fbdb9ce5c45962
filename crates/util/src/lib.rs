//! Configuration loading and filesystem helpers for the AIStudio binary.

pub mod config;
pub mod paths;

pub use config::{CONFIG_PATH_ENV, ConfigError, LoadedConfig, load_config, resolve_config_path};
pub use paths::{config_home, default_log_path, expand_tilde};
