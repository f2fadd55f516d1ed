//! Runs an [`ActionPlan`](crate::core::dispatcher::ActionPlan).

use crate::{
    core::{dispatcher::ActionPlan, shell_commands},
    models::{Action, App},
    system::executor,
};
use colored::*;
use std::io::{self, Write};

/// Whether commands are run or only shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Hand each command line to the shell.
    Execute,
    /// Print each command line and run nothing.
    DryRun,
}

// --- Main Public Function ---

/// Runs every bucket of the plan, one app after another.
///
/// Commands are independent: a failing command is logged and the next one
/// still runs.
pub fn execute_plan<W: Write>(plan: &ActionPlan<'_>, mode: RunMode, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", t!("execute.header").green().bold())?;
    for (action, apps) in plan.buckets() {
        log::debug!("Applying {} to {} app(s).", action, apps.len());
        for app in apps {
            apply(action, app, mode, out)?;
        }
    }
    Ok(())
}

/// Opens or closes a single app.
pub fn apply<W: Write>(action: Action, app: &App, mode: RunMode, out: &mut W) -> io::Result<()> {
    let lines = match action {
        Action::Open => shell_commands::open_lines(app),
        Action::Close => shell_commands::close_lines(app),
    };
    for line in &lines {
        run_line(line, mode, out)?;
    }
    Ok(())
}

// --- Execution Helpers ---

fn run_line<W: Write>(command_str: &str, mode: RunMode, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", "→".blue(), command_str.green())?;
    if mode == RunMode::DryRun {
        return Ok(());
    }
    // The shell inherits our stdout, so flush ours first to keep the order.
    out.flush()?;
    if let Err(e) = executor::run_shell_line(command_str) {
        log::warn!("{}", e);
    }
    Ok(())
}
