// src/core/listing.rs

//! The `--list` output.

use crate::core::registry::Registry;
use colored::Colorize;
use std::io::{self, Write};

/// Prints the group directory (id and description, column-aligned) followed by
/// every app name in alphabetical order.
pub fn print_directory<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", t!("listing.header.groups").green().bold())?;
    let width = registry
        .groups
        .all()
        .iter()
        .map(|group| group.id.chars().count())
        .max()
        .unwrap_or(0);
    for group in registry.groups.all() {
        writeln!(out, "{:width$}  {}", group.id, group.description, width = width)?;
    }

    writeln!(out, "{}", t!("listing.header.apps").green().bold())?;
    let mut names: Vec<&str> = registry.apps.all().iter().map(|a| a.name.as_str()).collect();
    names.sort_by_key(|name| name.to_lowercase());
    writeln!(out, "  {}", names.join(", "))?;
    Ok(())
}
