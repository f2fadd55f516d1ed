// src/models.rs

//! Apps, groups, and the shapes of `settings.toml`.

use crate::constants::{APPLICATIONS_DIR, GROUP_REF_PREFIX};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// --- ACTIONS ---

/// The two things the tool can do to an app.
///
/// In `settings.toml` it is written as `on`/`turn_on`/`open` or
/// `off`/`turn_off`/`close`, in any case.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Action {
    /// Launch the app.
    Open,
    /// Quit or kill the app.
    Close,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "on" | "turn_on" | "open" => Ok(Self::Open),
            "off" | "turn_off" | "close" => Ok(Self::Close),
            _ => Err(format!(
                "unknown function '{}', expected 'on' or 'off'",
                raw
            )),
        }
    }
}

impl TryFrom<String> for Action {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("turn_on"),
            Self::Close => f.write_str("turn_off"),
        }
    }
}

/// Normalizes an app or group identifier for lookups: trims, collapses inner
/// whitespace and case-folds.
pub fn normalize_id(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// --- APPS ---

/// How an app is opened, derived from its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchSpec {
    /// Explicit shell command lines.
    Commands(Vec<String>),
    /// A GUI bundle handed to the OS opener.
    Bundle(PathBuf),
    /// A command-line executable invoked directly.
    Executable(PathBuf),
}

/// How an app is closed, derived from its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillSpec {
    /// Explicit shell command lines.
    Commands(Vec<String>),
    /// Send a terminate signal to processes matching this name.
    Terminate { process: String },
}

/// A desktop application or a command-line script.
///
/// Apps are built once at startup with the chained setters below and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// The display name, also the identifier users type.
    pub name: String,
    /// Bundle or executable location.
    pub path: PathBuf,
    /// Process name to kill instead of `name`.
    pub pkill: Option<String>,
    /// Explicit open commands; empty means "use the default".
    pub open_commands: Vec<String>,
    /// Explicit kill commands; empty means "use the default".
    pub kill_commands: Vec<String>,
    /// Invoke the executable directly instead of asking the OS to open a bundle.
    pub cli: bool,
    /// Launch without waiting for the command to return.
    pub background: bool,
    /// Named set the app belongs to. Apps with a collection are left out of
    /// "every app" groups and must be listed by name.
    pub collection: Option<String>,
}

impl App {
    /// A GUI app living at `/Applications/<name>.app`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = PathBuf::from(APPLICATIONS_DIR).join(format!("{}.app", name));
        Self {
            name,
            path,
            pkill: None,
            open_commands: Vec::new(),
            kill_commands: Vec::new(),
            cli: false,
            background: false,
            collection: None,
        }
    }

    /// Marks the app as a command-line tool, resolving its executable on `PATH`.
    /// Falls back to the bare name, left for the shell to find.
    pub fn cli(mut self) -> Self {
        self.cli = true;
        self.path = crate::system::which::find_executable(&self.name)
            .unwrap_or_else(|| PathBuf::from(&self.name));
        self
    }

    /// Launches in the background.
    pub fn background(mut self) -> Self {
        self.background = true;
        self
    }

    /// Puts the app in a named collection, outside "every app" groups.
    pub fn collection(mut self, key: impl Into<String>) -> Self {
        self.collection = Some(key.into());
        self
    }

    /// Overrides the bundle or executable path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Kills processes named `process` instead of the app name.
    pub fn pkill(mut self, process: impl Into<String>) -> Self {
        self.pkill = Some(process.into());
        self
    }

    /// Replaces the default launch with explicit command lines.
    pub fn open_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the default kill with explicit command lines.
    pub fn kill_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kill_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// The normalized registry key.
    pub fn id(&self) -> String {
        normalize_id(&self.name)
    }

    /// How this app is opened.
    pub fn launch_spec(&self) -> LaunchSpec {
        if !self.open_commands.is_empty() {
            LaunchSpec::Commands(self.open_commands.clone())
        } else if self.cli {
            LaunchSpec::Executable(self.path.clone())
        } else {
            LaunchSpec::Bundle(self.path.clone())
        }
    }

    /// How this app is closed.
    pub fn kill_spec(&self) -> KillSpec {
        if self.kill_commands.is_empty() {
            KillSpec::Terminate {
                process: self.pkill.clone().unwrap_or_else(|| self.name.clone()),
            }
        } else {
            KillSpec::Commands(self.kill_commands.clone())
        }
    }
}

// --- GROUPS ---

/// One entry of a group's member list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberRef {
    /// Reference to an app by name.
    App(String),
    /// Reference to another group by id, looked up lazily at resolution time.
    Group(String),
}

impl MemberRef {
    /// Shorthand for an app reference.
    pub fn app(name: impl Into<String>) -> Self {
        Self::App(name.into())
    }

    /// Shorthand for a group reference.
    pub fn group(id: impl Into<String>) -> Self {
        Self::Group(id.into())
    }

    /// Parses a member as written in the settings file, where group
    /// references carry the `groups.` prefix.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.strip_prefix(GROUP_REF_PREFIX) {
            Some(group_id) => Self::Group(group_id.to_string()),
            None => Self::App(trimmed.to_string()),
        }
    }

    /// The name as written.
    pub fn name(&self) -> &str {
        match self {
            Self::App(name) | Self::Group(name) => name,
        }
    }

    /// Identity used for cycle and duplicate detection.
    pub fn key(&self) -> MemberKey {
        match self {
            Self::App(name) => MemberKey::App(normalize_id(name)),
            Self::Group(id) => MemberKey::Group(normalize_id(id)),
        }
    }
}

/// Normalized form of a [`MemberRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKey {
    /// Normalized app id.
    App(String),
    /// Normalized group id.
    Group(String),
}

/// A named, ordered collection of apps and nested groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The identifier users type.
    pub id: String,
    /// Shown in the listing.
    pub description: String,
    /// Applied to every resolved app unless `--off` is given.
    pub default_action: Action,
    /// Ordered members. Empty means "every registered app".
    pub members: Vec<MemberRef>,
}

// --- `settings.toml` MODELS ---

/// Raw contents of `settings.toml`. Tables keep file order.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SettingsFile {
    /// App definitions keyed by app name.
    #[serde(default)]
    pub apps: toml::Table,
    /// Group definitions keyed by group id.
    #[serde(default)]
    pub groups: toml::Table,
}

/// One `[apps."<name>"]` table.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TomlApp {
    /// Process name to kill instead of the app name.
    pub pkill: Option<String>,
    /// Explicit open command lines.
    #[serde(default)]
    pub open_commands: Vec<String>,
    /// Explicit kill command lines.
    #[serde(default)]
    pub kill_commands: Vec<String>,
    /// Command-line tool found on `PATH`.
    #[serde(default)]
    pub cli: bool,
    /// Launch in the background.
    #[serde(default)]
    pub background: bool,
    /// Bundle or executable path; `~` and `$VAR` are expanded.
    pub path: Option<String>,
    /// Named collection, see [`App::collection`].
    pub collection: Option<String>,
}

/// One `[groups.<id>]` table.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TomlGroup {
    /// Shown in the listing.
    #[serde(default)]
    pub description: String,
    /// Default action, `on` unless given.
    #[serde(default = "default_function")]
    pub function: Action,
    /// Member names; `groups.<id>` refers to another group.
    #[serde(default)]
    pub apps: Vec<String>,
}

fn default_function() -> Action {
    Action::Open
}
