// src/cli/handlers/mod.rs

//! One module per thing the binary can do.

pub mod list;
pub mod toggle;
