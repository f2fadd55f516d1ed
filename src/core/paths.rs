// src/core/paths.rs

//! Where the settings live.

use crate::constants::{CONFIG_DIR_NAME, ENV_PREFIX, SETTINGS_FILENAME};
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

lazy_static! {
    static ref DG_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Why a path could not be worked out.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// `~` or a variable in the path could not be expanded.
    #[error("Failed to expand path '{path}': {message}")]
    Expansion {
        /// The path as written.
        path: String,
        /// What went wrong.
        message: String,
    },
}

/// Returns `<system config dir>/daily-grind`. The directory is not created;
/// the tool never writes there.
///
/// Memoized: the first call computes and caches the path.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = DG_CONFIG_DIR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join(CONFIG_DIR_NAME);
    *cached_path_guard = Some(config_path.clone());
    Ok(config_path)
}

/// Name of an environment variable carrying the tool's prefix.
pub fn env_var_name(suffix: &str) -> String {
    format!("{}{}", ENV_PREFIX, suffix)
}

/// Locates `settings.toml`.
///
/// Priority: `DAILY_GRIND_SETTINGS` (full file path), then
/// `DAILY_GRIND_CONFIG_DIR` (directory), then the system config directory.
pub fn settings_path(env: &dyn Fn(&str) -> Option<String>) -> Result<PathBuf, PathError> {
    if let Some(file) = env(&env_var_name("SETTINGS")).filter(|v| !v.trim().is_empty()) {
        return expand_path(&file);
    }
    if let Some(dir) = env(&env_var_name("CONFIG_DIR")).filter(|v| !v.trim().is_empty()) {
        return Ok(expand_path(&dir)?.join(SETTINGS_FILENAME));
    }
    Ok(get_config_dir()?.join(SETTINGS_FILENAME))
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path.
pub fn expand_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        path: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fake_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_settings_file_override_wins() {
        let env = fake_env(&[
            ("DAILY_GRIND_SETTINGS", "/tmp/custom.toml"),
            ("DAILY_GRIND_CONFIG_DIR", "/tmp/ignored"),
        ]);
        assert_eq!(settings_path(&env).unwrap(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_config_dir_override() {
        let env = fake_env(&[("DAILY_GRIND_CONFIG_DIR", "/tmp/dg")]);
        assert_eq!(
            settings_path(&env).unwrap(),
            PathBuf::from("/tmp/dg/settings.toml")
        );
    }

    #[test]
    fn test_expand_path_rejects_unknown_variable() {
        let result = expand_path("$DAILY_GRIND_SURELY_UNSET_VARIABLE/x");
        assert!(matches!(result, Err(PathError::Expansion { .. })));
    }
}
