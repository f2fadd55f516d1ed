//! # Config Loader
//!
//! Builds the registry for one run: the built-in catalog first, then the
//! optional `settings.toml` on top of it. Apps and groups from the file are
//! applied in file order, and an id that already exists is redefined rather
//! than rejected.
//!
//! Environment variables with the `DAILY_GRIND_` prefix can move the settings
//! file (`DAILY_GRIND_SETTINGS`, `DAILY_GRIND_CONFIG_DIR`) and force dry-run
//! mode (`DAILY_GRIND_DRY_RUN`).

use crate::{
    core::{
        paths::{self, PathError},
        registry::Registry,
    },
    models::{App, MemberRef, SettingsFile, TomlApp, TomlGroup},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Why the settings could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Could not read settings file '{path}': {source}")]
    Io {
        /// The settings file.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML.
    #[error("Failed to parse TOML file at '{path}': {source}")]
    TomlParse {
        /// The settings file.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: toml::de::Error,
    },
    /// An app or group table has the wrong shape.
    #[error("Invalid {kind} '{name}' in settings: {source}")]
    InvalidEntry {
        /// `"app"` or `"group"`.
        kind: &'static str,
        /// The app name or group id.
        name: String,
        /// What was wrong with it.
        #[source]
        source: toml::de::Error,
    },
    /// The settings path could not be worked out.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Everything the binary needs from configuration.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Built-ins plus the settings file.
    pub registry: Registry,
    /// Dry-run forced through the environment.
    pub dry_run: bool,
    /// Where the settings file was looked for.
    pub settings_path: PathBuf,
}

/// Loads the registry and environment overrides using the process environment.
pub fn load() -> Result<LoadedConfig, ConfigError> {
    load_with_env(&|key| std::env::var(key).ok())
}

/// Same as [`load`], reading environment variables through `env`.
pub fn load_with_env(env: &dyn Fn(&str) -> Option<String>) -> Result<LoadedConfig, ConfigError> {
    let settings_path = paths::settings_path(env)?;
    let mut registry = Registry::builtin();

    match load_settings_file(&settings_path)? {
        Some(settings) => {
            log::debug!("Applying settings from '{}'.", settings_path.display());
            apply_settings(&mut registry, &settings)?;
        }
        None => log::debug!(
            "No settings file at '{}', using the built-in registry.",
            settings_path.display()
        ),
    }

    Ok(LoadedConfig {
        registry,
        dry_run: env_flag(env, "DRY_RUN"),
        settings_path,
    })
}

/// Reads and parses `path`. A missing file is `Ok(None)`.
pub fn load_settings_file(path: &Path) -> Result<Option<SettingsFile>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    parse_settings(&content, path).map(Some)
}

/// Parses the text of a settings file; `path` is only used in errors.
pub fn parse_settings(content: &str, path: &Path) -> Result<SettingsFile, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Registers the file's apps, then defines its groups.
pub fn apply_settings(registry: &mut Registry, settings: &SettingsFile) -> Result<(), ConfigError> {
    for (name, value) in &settings.apps {
        let toml_app: TomlApp =
            value
                .clone()
                .try_into()
                .map_err(|e| ConfigError::InvalidEntry {
                    kind: "app",
                    name: name.clone(),
                    source: e,
                })?;
        registry.apps.register(app_from_toml(name, toml_app)?);
    }

    for (id, value) in &settings.groups {
        let toml_group: TomlGroup =
            value
                .clone()
                .try_into()
                .map_err(|e| ConfigError::InvalidEntry {
                    kind: "group",
                    name: id.clone(),
                    source: e,
                })?;
        let members = toml_group
            .apps
            .iter()
            .map(|raw| MemberRef::parse(raw))
            .collect();
        registry
            .groups
            .define(id.clone(), toml_group.description, toml_group.function, members);
    }
    Ok(())
}

fn app_from_toml(name: &str, toml_app: TomlApp) -> Result<App, ConfigError> {
    let mut app = App::new(name)
        .open_commands(toml_app.open_commands)
        .kill_commands(toml_app.kill_commands);
    if toml_app.cli {
        app = app.cli();
    }
    if toml_app.background {
        app = app.background();
    }
    if let Some(process) = toml_app.pkill {
        app = app.pkill(process);
    }
    if let Some(key) = toml_app.collection {
        app = app.collection(key);
    }
    // An explicit path wins over the `PATH` lookup done for CLI apps.
    if let Some(path) = toml_app.path {
        app = app.path(paths::expand_path(&path)?);
    }
    Ok(app)
}

/// True when `DAILY_GRIND_<suffix>` is set to a truthy value.
pub fn env_flag(env: &dyn Fn(&str) -> Option<String>, suffix: &str) -> bool {
    env(&paths::env_var_name(suffix)).is_some_and(|value| {
        matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
