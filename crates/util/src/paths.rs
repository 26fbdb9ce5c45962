//! Filesystem locations used by the AIStudio binary.

use std::path::PathBuf;

use dirs_next::{config_dir, data_dir, home_dir};

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "aistudio";

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// `<config-dir>/aistudio`, falling back to the working directory.
pub fn config_home() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Default log file used while the terminal UI owns the screen.
pub fn default_log_path() -> PathBuf {
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("aistudio.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_tilde(" /etc/aistudio.json "), PathBuf::from("/etc/aistudio.json"));
        assert_eq!(expand_tilde("relative/config.json"), PathBuf::from("relative/config.json"));
    }

    #[test]
    fn tilde_prefix_resolves_under_home() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/site/config.json"), home.join("site/config.json"));
    }
}
