//! `dg`, `dg --list`.

use crate::core::{listing, registry::Registry};
use anyhow::Result;
use std::io;

/// Prints the groups and apps; no app is touched.
pub fn handle(registry: &Registry) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    listing::print_directory(registry, &mut out)?;
    Ok(())
}
