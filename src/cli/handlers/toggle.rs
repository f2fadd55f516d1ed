//! `dg <GROUP_OR_APP>...`.

use crate::core::{
    dispatcher::{self, DispatchOptions},
    registry::Registry,
};
use anyhow::Result;
use std::io;

/// Opens or closes whatever `targets` select.
pub fn handle(registry: &Registry, targets: &[String], options: &DispatchOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatcher::dispatch(registry, targets, options, &mut out)?;
    Ok(())
}
