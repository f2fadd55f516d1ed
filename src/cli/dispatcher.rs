//! Routes parsed arguments to a handler.

use anyhow::Result;

use crate::{
    cli::{Cli, handlers},
    core::{
        action_executor::RunMode,
        dispatcher::DispatchOptions,
        matcher::PickMode,
        registry::Registry,
    },
};

/// Turns parsed flags into dispatch options. `env_dry_run` comes from
/// `DAILY_GRIND_DRY_RUN`.
pub fn options_from_cli(cli: &Cli, env_dry_run: bool) -> DispatchOptions {
    DispatchOptions {
        force_off: cli.off,
        run_mode: if cli.dry_run || env_dry_run {
            RunMode::DryRun
        } else {
            RunMode::Execute
        },
        pick_mode: PickMode::Interactive,
    }
}

/// Routes to the listing or to the open/close handler.
pub fn dispatch(cli: &Cli, registry: &Registry, env_dry_run: bool) -> Result<()> {
    log::debug!("Dispatching: {:?}", cli);

    if cli.show_list || cli.targets.is_empty() {
        return handlers::list::handle(registry);
    }

    let options = options_from_cli(cli, env_dry_run);
    handlers::toggle::handle(registry, &cli.targets, &options)
}
