// src/constants.rs

//! Names and locations shared across the crate.

/// Short name of the binary, used in help and log lines.
pub const PROJECT_NAME_SHORT: &str = "dg";

/// The name of the directory holding daily-grind configuration (in the system config dir).
pub const CONFIG_DIR_NAME: &str = "daily-grind";

/// The name of the settings file inside the configuration directory.
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Prefix shared by every environment variable the tool reads.
pub const ENV_PREFIX: &str = "DAILY_GRIND_";

/// Prefix that marks a group reference inside a group's member list.
pub const GROUP_REF_PREFIX: &str = "groups.";

/// Where GUI bundles live when no explicit path is configured.
pub const APPLICATIONS_DIR: &str = "/Applications";

/// Appended to open commands of background apps.
pub const BACKGROUND_SUFFIX: &str = " &";
