// src/core/registry.rs

//! In-memory tables of apps and groups.

use crate::core::catalog;
use crate::models::{Action, App, Group, MemberRef, normalize_id};
use std::collections::HashMap;

/// An insertion-ordered table keyed by normalized id.
///
/// Inserting an existing key replaces the value in place, so the entry keeps
/// its original position.
#[derive(Debug, Clone)]
pub struct OrderedTable<T> {
    entries: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> Default for OrderedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> OrderedTable<T> {
    /// Inserts or replaces the value stored under `key`.
    pub fn upsert(&mut self, key: String, value: T) {
        if let Some(slot) = self
            .positions
            .get(&key)
            .and_then(|&pos| self.entries.get_mut(pos))
        {
            *slot = value;
            return;
        }
        self.positions.insert(key, self.entries.len());
        self.entries.push(value);
    }

    /// Looks up a value by its normalized key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.positions
            .get(key)
            .and_then(|&pos| self.entries.get(pos))
    }

    /// Values in insertion order.
    pub fn values(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every app the tool knows about.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    table: OrderedTable<App>,
}

impl AppRegistry {
    /// Adds an app. A second app with the same normalized name replaces the first.
    pub fn register(&mut self, app: App) {
        if self.table.get(&app.id()).is_some() {
            log::debug!("Redefining app '{}'.", app.name);
        }
        self.table.upsert(app.id(), app);
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn lookup(&self, id: &str) -> Option<&App> {
        self.table.get(&normalize_id(id))
    }

    /// All apps, in registration order.
    pub fn all(&self) -> &[App] {
        self.table.values()
    }

    /// Number of apps.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when no app is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Every group the tool knows about.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    table: OrderedTable<Group>,
}

impl GroupRegistry {
    /// Defines a group. Redefining an id replaces the group but keeps its listing position.
    pub fn define(
        &mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        default_action: Action,
        members: Vec<MemberRef>,
    ) {
        let id = id.into();
        let key = normalize_id(&id);
        if self.table.get(&key).is_some() {
            log::debug!("Redefining group '{}'.", id);
        }
        self.table.upsert(
            key,
            Group {
                id,
                description: description.into(),
                default_action,
                members,
            },
        );
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn lookup(&self, id: &str) -> Option<&Group> {
        self.table.get(&normalize_id(id))
    }

    /// Group ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.table.values().iter().map(|g| g.id.as_str()).collect()
    }

    /// Groups in registration order.
    pub fn all(&self) -> &[Group] {
        self.table.values()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when no group is defined.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// The apps and groups of one run, built at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Registered apps.
    pub apps: AppRegistry,
    /// Defined groups.
    pub groups: GroupRegistry,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        catalog::seed(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_same_normalized_name_overwrites() {
        let mut apps = AppRegistry::default();
        apps.register(App::new("Telegram"));
        apps.register(App::new("Spotify"));
        apps.register(App::new(" telegram ").kill_commands(["pkill -9 Telegram"]));

        assert_eq!(apps.len(), 2);
        let telegram = apps.lookup("TELEGRAM").unwrap();
        assert_eq!(telegram.name, " telegram ");
        assert_eq!(telegram.kill_commands, vec!["pkill -9 Telegram".to_string()]);
        // The redefinition keeps the original position.
        assert_eq!(apps.all()[0].id(), "telegram");
    }

    #[test]
    fn test_lookup_is_loose() {
        let mut apps = AppRegistry::default();
        apps.register(App::new("Visual Studio Code"));
        assert!(apps.lookup("  visual studio   CODE").is_some());
        assert!(apps.lookup("vscode").is_none());
    }

    #[test]
    fn test_group_ids_keep_registration_order() {
        let mut groups = GroupRegistry::default();
        groups.define("work", "Work apps", Action::Open, vec![]);
        groups.define("music", "Music", Action::Open, vec![]);
        groups.define("Work", "Work apps, again", Action::Close, vec![]);

        assert_eq!(groups.ids(), vec!["Work", "music"]);
        let work = groups.lookup("work").unwrap();
        assert_eq!(work.description, "Work apps, again");
        assert_eq!(work.default_action, Action::Close);
    }

    #[test]
    fn test_builtin_registry_is_populated() {
        let registry = Registry::builtin();
        assert!(!registry.apps.is_empty());
        assert!(registry.groups.lookup("off").unwrap().members.is_empty());
        assert!(registry.apps.lookup("Spotify").is_some());
    }
}
