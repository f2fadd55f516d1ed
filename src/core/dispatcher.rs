// src/core/dispatcher.rs

//! Turns the user's tokens into one action per app and runs them.
//!
//! Tokens are processed in order. Each group token assigns its action to every
//! app it resolves to, and each app token assigns "open" (or "close" under
//! `--off`). A later token overwrites the action an earlier token gave the same
//! app, so `dg off slack` closes everything except Slack, which is opened.

use crate::core::{
    action_executor::{self, RunMode},
    listing,
    matcher::{self, Choice, PickMode, Selection},
    registry::{OrderedTable, Registry},
    resolver,
};
use crate::models::{Action, App, normalize_id};
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// Why a dispatch stopped.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No token matched a group or app.
    #[error("{}", t!("dispatch.error.nothing_selected"))]
    NothingSelected,
    /// Progress output could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    /// The disambiguation prompt failed.
    #[error("User Interface Error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Flags of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Close every matched app, whatever its group says.
    pub force_off: bool,
    /// Execute the commands or only print them.
    pub run_mode: RunMode,
    /// How ambiguous tokens are settled.
    pub pick_mode: PickMode,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            force_off: false,
            run_mode: RunMode::Execute,
            pick_mode: PickMode::Interactive,
        }
    }
}

/// The final action of every selected app, in first-selection order.
#[derive(Debug, Default)]
pub struct ActionPlan<'r> {
    assignments: OrderedTable<(&'r App, Action)>,
}

impl<'r> ActionPlan<'r> {
    /// Sets the action of `app`, replacing any earlier one but keeping the
    /// app's original position.
    pub fn assign(&mut self, app: &'r App, action: Action) {
        self.assignments.upsert(app.id(), (app, action));
    }

    /// The final action for an app name, if it was selected.
    pub fn action_for(&self, name: &str) -> Option<Action> {
        self.assignments
            .get(&normalize_id(name))
            .map(|(_, action)| *action)
    }

    /// True when no app was selected.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of selected apps.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Apps grouped by action. Buckets appear in the order they were first
    /// populated, and apps keep their first-selection order inside a bucket.
    pub fn buckets(&self) -> Vec<(Action, Vec<&'r App>)> {
        let mut buckets: Vec<(Action, Vec<&'r App>)> = Vec::new();
        for &(app, action) in self.assignments.values() {
            match buckets.iter_mut().find(|(a, _)| *a == action) {
                Some((_, apps)) => apps.push(app),
                None => buckets.push((action, vec![app])),
            }
        }
        buckets
    }
}

/// Builds the plan for `tokens`, printing progress and resolution warnings
/// to `out` as they are found.
///
/// Fails with [`DispatchError::NothingSelected`] when no token matched anything.
pub fn build_plan<'r, W: Write>(
    registry: &'r Registry,
    tokens: &[String],
    options: &DispatchOptions,
    out: &mut W,
) -> Result<ActionPlan<'r>, DispatchError> {
    let mut plan = ActionPlan::default();

    for token in tokens {
        let selection = match matcher::choose(registry, token, options.pick_mode)? {
            Choice::Picked(selection) => selection,
            Choice::NoMatch => {
                log::debug!("Nothing matches '{}', skipping.", token);
                writeln!(
                    out,
                    "{}",
                    format!(t!("dispatch.warning.no_match"), token = token).yellow()
                )?;
                continue;
            }
            Choice::Dismissed => {
                log::debug!("Prompt for '{}' dismissed, skipping.", token);
                writeln!(
                    out,
                    "{}",
                    format!(t!("dispatch.warning.dismissed"), token = token).yellow()
                )?;
                continue;
            }
        };

        match selection {
            Selection::Group(group_id) => {
                let Some(group) = registry.groups.lookup(&group_id) else {
                    continue;
                };
                let action = if options.force_off {
                    Action::Close
                } else {
                    group.default_action
                };
                writeln!(
                    out,
                    "{}",
                    format!(t!("dispatch.header.group"), id = group.id, action = action)
                        .green()
                        .bold()
                )?;

                let resolution = resolver::resolve(registry, &group.id);
                for warning in &resolution.warnings {
                    writeln!(out, "{}", warning.to_string().red())?;
                }
                let names: Vec<&str> = resolution.apps.iter().map(|a| a.name.as_str()).collect();
                writeln!(out, "  {}", names.join(", "))?;

                for app in resolution.apps {
                    plan.assign(app, action);
                }
            }
            Selection::App(name) => {
                let Some(app) = registry.apps.lookup(&name) else {
                    continue;
                };
                // A bare app name means "open it" unless everything is forced off.
                let action = if options.force_off {
                    Action::Close
                } else {
                    Action::Open
                };
                writeln!(
                    out,
                    "{}",
                    format!(t!("dispatch.header.app"), name = app.name, action = action)
                        .green()
                        .bold()
                )?;
                plan.assign(app, action);
            }
        }
    }

    if plan.is_empty() {
        return Err(DispatchError::NothingSelected);
    }
    Ok(plan)
}

/// Lists the registry when there are no tokens; otherwise plans and runs the
/// actions for `tokens`.
pub fn dispatch<W: Write>(
    registry: &Registry,
    tokens: &[String],
    options: &DispatchOptions,
    out: &mut W,
) -> Result<(), DispatchError> {
    if tokens.is_empty() {
        listing::print_directory(registry, out)?;
        return Ok(());
    }

    let plan = build_plan(registry, tokens, options, out)?;
    log::debug!("Plan ready with {} app(s).", plan.len());
    action_executor::execute_plan(&plan, options.run_mode, out)?;
    Ok(())
}
