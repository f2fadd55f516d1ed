// src/core/resolver.rs

//! Expands a group into the flat list of apps it stands for.

use crate::core::registry::Registry;
use crate::models::{App, MemberKey, MemberRef};
use std::collections::HashSet;
use std::fmt;

/// A non-fatal problem found while expanding a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// A group id that is not defined, requested directly or nested.
    GroupNotFound(String),
    /// An app name listed in a group that is not registered.
    AppNotFound(String),
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupNotFound(id) => write!(f, t!("resolve.warning.group_not_found"), id = id),
            Self::AppNotFound(name) => write!(f, t!("resolve.warning.app_not_found"), name = name),
        }
    }
}

/// The flat app list of one group plus everything that was skipped on the way.
#[derive(Debug, Default)]
pub struct Resolution<'r> {
    /// Apps in traversal order, each at most once.
    pub apps: Vec<&'r App>,
    /// Missing groups and apps, in the order they were met.
    pub warnings: Vec<ResolveWarning>,
}

/// Expands `group_id` into a flat, ordered, duplicate-free app list.
pub fn resolve<'r>(registry: &'r Registry, group_id: &str) -> Resolution<'r> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    let apps = resolve_group(registry, group_id, &mut seen, &mut warnings);
    Resolution { apps, warnings }
}

/// Recursive worker behind [`resolve`].
///
/// `seen` is shared by the whole call tree: a member that was already visited
/// anywhere in the traversal is skipped, which both breaks cycles and keeps the
/// first occurrence of each app. Problems are appended to `warnings` in the
/// order they are found.
pub fn resolve_group<'r>(
    registry: &'r Registry,
    group_id: &str,
    seen: &mut HashSet<MemberKey>,
    warnings: &mut Vec<ResolveWarning>,
) -> Vec<&'r App> {
    let Some(group) = registry.groups.lookup(group_id) else {
        log::debug!("Group '{}' is not defined.", group_id);
        warnings.push(ResolveWarning::GroupNotFound(group_id.to_string()));
        return Vec::new();
    };

    // An empty member list stands for every registered app outside a collection.
    if group.members.is_empty() {
        return registry
            .apps
            .all()
            .iter()
            .filter(|app| app.collection.is_none())
            .filter(|app| seen.insert(MemberKey::App(app.id())))
            .collect();
    }

    let mut found_apps = Vec::new();
    for member in &group.members {
        if !seen.insert(member.key()) {
            log::trace!("Skipping already visited member '{}'.", member.name());
            continue;
        }

        match member {
            MemberRef::Group(nested_id) => {
                found_apps.extend(resolve_group(registry, nested_id, seen, warnings));
            }
            MemberRef::App(name) => match registry.apps.lookup(name) {
                Some(app) => found_apps.push(app),
                None => warnings.push(ResolveWarning::AppNotFound(name.clone())),
            },
        }
    }
    found_apps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Action;

    fn registry_with_apps(names: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for name in names {
            registry.apps.register(App::new(*name));
        }
        registry
    }

    fn names(resolution: &Resolution<'_>) -> Vec<String> {
        resolution.apps.iter().map(|app| app.name.clone()).collect()
    }

    #[test]
    fn test_cycle_terminates() {
        let mut registry = registry_with_apps(&["app1"]);
        registry
            .groups
            .define("a", "", Action::Open, vec![MemberRef::group("b")]);
        registry.groups.define(
            "b",
            "",
            Action::Open,
            vec![MemberRef::group("a"), MemberRef::app("app1")],
        );

        let resolution = resolve(&registry, "a");
        assert_eq!(names(&resolution), vec!["app1"]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_order_is_kept_and_duplicates_dropped() {
        let mut registry = registry_with_apps(&["app1", "app2", "app3"]);
        registry.groups.define(
            "g",
            "",
            Action::Open,
            vec![
                MemberRef::app("app1"),
                MemberRef::app("app2"),
                MemberRef::group("h"),
            ],
        );
        registry.groups.define(
            "h",
            "",
            Action::Open,
            vec![MemberRef::app("app1"), MemberRef::app("app3")],
        );

        assert_eq!(names(&resolve(&registry, "g")), vec!["app1", "app2", "app3"]);
    }

    #[test]
    fn test_empty_members_means_all_apps() {
        let mut registry = registry_with_apps(&["Zed", "Alpha", "Mid"]);
        registry.groups.define("off", "", Action::Close, vec![]);

        assert_eq!(names(&resolve(&registry, "off")), vec!["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn test_empty_members_leave_out_collection_apps() {
        let mut registry = registry_with_apps(&["app1", "app2"]);
        registry
            .apps
            .register(App::new("bluetooth").collection("switch"));
        registry.groups.define("off", "", Action::Close, vec![]);
        registry.groups.define(
            "switch",
            "",
            Action::Close,
            vec![MemberRef::group("off"), MemberRef::app("bluetooth")],
        );

        assert_eq!(names(&resolve(&registry, "off")), vec!["app1", "app2"]);
        assert_eq!(
            names(&resolve(&registry, "switch")),
            vec!["app1", "app2", "bluetooth"]
        );
    }

    #[test]
    fn test_nested_all_group_skips_apps_already_listed() {
        let mut registry = registry_with_apps(&["app1", "app2"]);
        registry.groups.define("off", "", Action::Close, vec![]);
        registry.groups.define(
            "switch",
            "",
            Action::Close,
            vec![MemberRef::app("app2"), MemberRef::group("off")],
        );

        assert_eq!(names(&resolve(&registry, "switch")), vec!["app2", "app1"]);
    }

    #[test]
    fn test_unknown_group_warns_and_yields_nothing() {
        let registry = registry_with_apps(&["app1"]);
        let resolution = resolve(&registry, "ghost");
        assert!(resolution.apps.is_empty());
        assert_eq!(
            resolution.warnings,
            vec![ResolveWarning::GroupNotFound("ghost".to_string())]
        );
    }

    #[test]
    fn test_missing_members_are_skipped_with_warnings() {
        let mut registry = registry_with_apps(&["app1", "app2"]);
        registry.groups.define(
            "g",
            "",
            Action::Open,
            vec![
                MemberRef::app("app1"),
                MemberRef::app("renamed"),
                MemberRef::group("gone"),
                MemberRef::app("app2"),
            ],
        );

        let resolution = resolve(&registry, "g");
        assert_eq!(names(&resolution), vec!["app1", "app2"]);
        assert_eq!(
            resolution.warnings,
            vec![
                ResolveWarning::AppNotFound("renamed".to_string()),
                ResolveWarning::GroupNotFound("gone".to_string()),
            ]
        );
    }

    #[test]
    fn test_forward_reference_resolves_lazily() {
        let mut registry = registry_with_apps(&["app1"]);
        registry
            .groups
            .define("early", "", Action::Open, vec![MemberRef::group("late")]);
        registry
            .groups
            .define("late", "", Action::Open, vec![MemberRef::app("APP1")]);

        assert_eq!(names(&resolve(&registry, "early")), vec!["app1"]);
    }

    #[test]
    fn test_warning_messages_name_the_missing_entry() {
        assert!(
            ResolveWarning::GroupNotFound("ghost".to_string())
                .to_string()
                .contains("ghost")
        );
        assert!(
            ResolveWarning::AppNotFound("Skype".to_string())
                .to_string()
                .contains("Skype")
        );
    }
}
