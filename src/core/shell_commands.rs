// src/core/shell_commands.rs

//! Shell command lines for opening and closing apps.

use crate::constants::BACKGROUND_SUFFIX;
use crate::models::{App, KillSpec, LaunchSpec};
use std::path::Path;

/// The program that opens a GUI bundle or document.
pub const OPEN_PROGRAM: &str = if cfg!(target_os = "macos") {
    "open"
} else {
    "xdg-open"
};

/// Wraps a value in single quotes for a POSIX shell, escaping embedded quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}

/// Extra knobs for [`ps_aux_kill`].
#[derive(Debug, Clone, Default)]
pub struct KillOptions<'a> {
    /// Patterns whose matching lines are dropped before killing.
    pub exclude: &'a [&'a str],
    /// Kill through `sudo`, asking for a password only when there is something to kill.
    pub sudo: bool,
    /// Use `kill -9`.
    pub force: bool,
}

/// Builds a pipeline that finds processes whose `ps aux` line matches
/// `partial_name` and kills them.
pub fn ps_aux_kill(partial_name: &str, options: &KillOptions<'_>) -> String {
    let exclude_str: String = options
        .exclude
        .iter()
        .map(|item| format!(" | rg -v {}", item))
        .collect();
    let list_pids = format!(
        "ps aux | rg {0} | rg -v 'rg {0}'{1} | awk '{{print $2}}'",
        partial_name, exclude_str
    );
    let dash_nine = if options.force { " -9" } else { "" };
    if options.sudo {
        format!(
            "test -n \"$({0})\" && {0} | sudo xargs kill{1}",
            list_pids, dash_nine
        )
    } else {
        format!("{} | xargs kill{}", list_pids, dash_nine)
    }
}

/// The command lines that open `app`, in order.
pub fn open_lines(app: &App) -> Vec<String> {
    let back = if app.background { BACKGROUND_SUFFIX } else { "" };
    match app.launch_spec() {
        LaunchSpec::Commands(commands) => commands
            .iter()
            .map(|command| format!("{}{}", command, back))
            .collect(),
        LaunchSpec::Executable(path) => vec![format!("{}{}", quote_path(&path), back)],
        LaunchSpec::Bundle(path) => vec![format!("{} {}", OPEN_PROGRAM, quote_path(&path))],
    }
}

/// The command lines that close `app`, in order.
pub fn close_lines(app: &App) -> Vec<String> {
    match app.kill_spec() {
        KillSpec::Commands(commands) => commands,
        KillSpec::Terminate { process } => vec![format!("pkill {}", quote(&process))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes_single_quotes() {
        assert_eq!(quote("Brave Browser"), "'Brave Browser'");
        assert_eq!(quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_ps_aux_kill_plain() {
        assert_eq!(
            ps_aux_kill("scansnap", &KillOptions::default()),
            "ps aux | rg scansnap | rg -v 'rg scansnap' | awk '{print $2}' | xargs kill"
        );
    }

    #[test]
    fn test_ps_aux_kill_with_sudo_force_and_excludes() {
        let options = KillOptions {
            exclude: &["FinderSync", "Helper"],
            sudo: true,
            force: true,
        };
        let list = "ps aux | rg OneDrive | rg -v 'rg OneDrive' | rg -v FinderSync | rg -v Helper | awk '{print $2}'";
        assert_eq!(
            ps_aux_kill("OneDrive", &options),
            format!("test -n \"$({list})\" && {list} | sudo xargs kill -9")
        );
    }

    #[test]
    fn test_open_lines_for_bundle() {
        let app = App::new("Brave Browser");
        assert_eq!(
            open_lines(&app),
            vec![format!("{} '/Applications/Brave Browser.app'", OPEN_PROGRAM)]
        );
    }

    #[test]
    fn test_open_lines_background_suffix_applies_to_every_command() {
        let app = App::new("dontforget")
            .open_commands(["dontforget menu", "echo started"])
            .background();
        assert_eq!(
            open_lines(&app),
            vec!["dontforget menu &", "echo started &"]
        );
    }

    #[test]
    fn test_open_lines_for_cli_executable() {
        let mut app = App::new("mytool").path("/usr/local/bin/mytool").background();
        app.cli = true;
        assert_eq!(open_lines(&app), vec!["'/usr/local/bin/mytool' &"]);
    }

    #[test]
    fn test_close_lines() {
        let vscode = App::new("Visual Studio Code").pkill("Electron");
        assert_eq!(close_lines(&vscode), vec!["pkill 'Electron'"]);

        let warp = App::new("Cloudflare WARP")
            .kill_commands(["warp-cli disconnect", "pkill 'Cloudflare WARP'"]);
        assert_eq!(
            close_lines(&warp),
            vec!["warp-cli disconnect", "pkill 'Cloudflare WARP'"]
        );
    }
}
