// src/core/matcher.rs

//! Maps a loosely typed token to one group or app.
//!
//! Candidates are the group ids (registration order) followed by the app
//! names (registration order). An exact match after normalization wins
//! outright; otherwise the token is scored fuzzily against every candidate.

use crate::core::registry::Registry;
use crate::models::normalize_id;
use dialoguer::{Error as DialoguerError, Select, theme::ColorfulTheme};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::io::IsTerminal;

/// What a token resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A group id, as registered.
    Group(String),
    /// An app name, as registered.
    App(String),
}

impl Selection {
    /// The registered name shown to the user.
    pub fn label(&self) -> &str {
        match self {
            Self::Group(id) => id,
            Self::App(name) => name,
        }
    }
}

/// How to settle a token that fuzzily matches several candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    /// Ask the user when stdin is a terminal, otherwise take the best score.
    Interactive,
    /// Always take the best score.
    BestMatch,
}

/// Every selectable name: groups first, then apps.
pub fn candidates(registry: &Registry) -> Vec<Selection> {
    registry
        .groups
        .all()
        .iter()
        .map(|group| Selection::Group(group.id.clone()))
        .chain(
            registry
                .apps
                .all()
                .iter()
                .map(|app| Selection::App(app.name.clone())),
        )
        .collect()
}

/// The first candidate whose normalized label equals the normalized query.
fn exact_match(query: &str, candidates: &[Selection]) -> Option<Selection> {
    let wanted = normalize_id(query);
    candidates
        .iter()
        .find(|candidate| normalize_id(candidate.label()) == wanted)
        .cloned()
}

/// Fuzzy hits as `(candidate index, score)`, best score first. Ties keep
/// candidate order.
pub fn fuzzy_hits(query: &str, candidates: &[Selection]) -> Vec<(usize, i64)> {
    let matcher = SkimMatcherV2::default();
    let pattern = normalize_id(query);
    let mut hits: Vec<(usize, i64)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, candidate)| {
            matcher
                .fuzzy_match(&candidate.label().to_lowercase(), &pattern)
                .map(|score| (i, score))
        })
        .collect();
    hits.sort_by_key(|&(i, score)| (std::cmp::Reverse(score), i));
    hits
}

/// How a token was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The token names this group or app.
    Picked(Selection),
    /// No candidate matches the token.
    NoMatch,
    /// Several candidates matched and the user dismissed the prompt.
    Dismissed,
}

/// Resolves one user token to a group or app, prompting on a terminal when
/// several candidates match.
pub fn choose(registry: &Registry, query: &str, mode: PickMode) -> Result<Choice, DialoguerError> {
    let mode = if mode == PickMode::Interactive && std::io::stdin().is_terminal() {
        PickMode::Interactive
    } else {
        PickMode::BestMatch
    };
    choose_with(registry, query, mode, pick_interactive)
}

/// Same as [`choose`], settling ambiguous tokens with `pick` in
/// [`PickMode::Interactive`]. `pick` returns a candidate index, or `None` when
/// the user backs out.
pub fn choose_with<F>(
    registry: &Registry,
    query: &str,
    mode: PickMode,
    pick: F,
) -> Result<Choice, DialoguerError>
where
    F: FnOnce(&str, &[(usize, i64)], &[Selection]) -> Result<Option<usize>, DialoguerError>,
{
    let candidates = candidates(registry);

    if let Some(exact) = exact_match(query, &candidates) {
        log::debug!("Token '{}' matched '{}' exactly.", query, exact.label());
        return Ok(Choice::Picked(exact));
    }

    let hits = fuzzy_hits(query, &candidates);
    log::debug!("Token '{}' has {} fuzzy match(es).", query, hits.len());

    let chosen_index = match hits.as_slice() {
        [] => return Ok(Choice::NoMatch),
        [(only, _)] => *only,
        [(best, _), ..] => match mode {
            PickMode::BestMatch => *best,
            PickMode::Interactive => match pick(query, &hits, &candidates)? {
                Some(index) => index,
                None => return Ok(Choice::Dismissed),
            },
        },
    };

    Ok(candidates
        .get(chosen_index)
        .cloned()
        .map_or(Choice::NoMatch, Choice::Picked))
}

/// Lets the user pick among several fuzzy hits. Returns a candidate index.
fn pick_interactive(
    query: &str,
    hits: &[(usize, i64)],
    candidates: &[Selection],
) -> Result<Option<usize>, DialoguerError> {
    let items: Vec<String> = hits
        .iter()
        .filter_map(|(i, _)| candidates.get(*i))
        .map(|candidate| match candidate {
            Selection::Group(id) => format!("{} {}", id, t!("matcher.tag.group")),
            Selection::App(name) => name.clone(),
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(t!("matcher.prompt.choose"), query = query))
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|pos| hits.get(pos)).map(|(i, _)| *i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, App};

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        for name in ["Slack", "Spotify", "Signal", "Visual Studio Code", "web"] {
            registry.apps.register(App::new(name));
        }
        registry.groups.define("work", "Work apps", Action::Open, vec![]);
        registry.groups.define("web", "Browse", Action::Open, vec![]);
        registry
    }

    #[test]
    fn test_candidates_list_groups_before_apps() {
        let registry = sample_registry();
        let labels: Vec<_> = candidates(&registry)
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["work", "web", "Slack", "Spotify", "Signal", "Visual Studio Code", "web"]
        );
    }

    #[test]
    fn test_exact_match_prefers_group_over_same_named_app() {
        let registry = sample_registry();
        let chosen = choose(&registry, "WEB", PickMode::BestMatch).unwrap();
        assert_eq!(chosen, Choice::Picked(Selection::Group("web".to_string())));
    }

    #[test]
    fn test_exact_match_is_whitespace_insensitive() {
        let registry = sample_registry();
        let chosen = choose(&registry, " visual  studio code", PickMode::BestMatch).unwrap();
        assert_eq!(
            chosen,
            Choice::Picked(Selection::App("Visual Studio Code".to_string()))
        );
    }

    #[test]
    fn test_single_fuzzy_hit_is_auto_selected() {
        let registry = sample_registry();
        let chosen = choose(&registry, "vscode", PickMode::Interactive).unwrap();
        assert_eq!(
            chosen,
            Choice::Picked(Selection::App("Visual Studio Code".to_string()))
        );
    }

    #[test]
    fn test_no_hit_yields_none() {
        let registry = sample_registry();
        assert_eq!(
            choose(&registry, "qqqq", PickMode::BestMatch).unwrap(),
            Choice::NoMatch
        );
    }

    #[test]
    fn test_several_hits_take_the_best_score_without_a_terminal() {
        let registry = sample_registry();
        let hits = fuzzy_hits("sl", &candidates(&registry));
        assert!(!hits.is_empty());
        let chosen = choose(&registry, "sl", PickMode::BestMatch).unwrap();
        let best = candidates(&registry).get(hits[0].0).cloned().unwrap();
        assert_eq!(chosen, Choice::Picked(best));
        assert_eq!(chosen, Choice::Picked(Selection::App("Slack".to_string())));
    }

    #[test]
    fn test_dismissed_prompt_is_not_reported_as_no_match() {
        let registry = sample_registry();
        let chosen =
            choose_with(&registry, "sl", PickMode::Interactive, |_, _, _| Ok(None)).unwrap();
        assert_eq!(chosen, Choice::Dismissed);
    }

    #[test]
    fn test_prompt_answer_is_used() {
        let registry = sample_registry();
        let chosen = choose_with(&registry, "sl", PickMode::Interactive, |_, hits, _| {
            Ok(hits.last().map(|(i, _)| *i))
        })
        .unwrap();
        assert_ne!(chosen, Choice::Picked(Selection::App("Slack".to_string())));
        assert!(matches!(chosen, Choice::Picked(_)));
    }
}
