//! Command-line surface of `dg`.

use clap::Parser;

pub mod dispatcher;
pub mod handlers;

/// dg: start and stop apps in groups, processed in the order they were given.
///
/// Each GROUP_OR_APP is fuzzy-matched against the known group ids and app
/// names. Groups apply their own action (open or close) to every app they
/// contain; a bare app name opens it. When the same app is reached by several
/// arguments, the last one decides.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate::constants::PROJECT_NAME_SHORT,
    author,
    version,
    about,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Groups or apps to turn on or off. Without any, the list is shown.
    #[arg(value_name = "GROUP_OR_APP")]
    pub targets: Vec<String>,

    /// Only show what would be done, without actually doing it.
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// List the available groups and apps.
    #[arg(long = "list", short = 'l')]
    pub show_list: bool,

    /// Turn off the apps instead of opening them.
    #[arg(long, short = 'x')]
    pub off: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_and_targets() {
        let cli = Cli::try_parse_from(["dg", "-x", "work", "music", "-n"]).unwrap();
        assert!(cli.off);
        assert!(cli.dry_run);
        assert!(!cli.show_list);
        assert_eq!(cli.targets, vec!["work", "music"]);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["dg", "--list", "--off", "--dry-run"]).unwrap();
        assert!(cli.show_list && cli.off && cli.dry_run);
        assert!(cli.targets.is_empty());
    }
}
