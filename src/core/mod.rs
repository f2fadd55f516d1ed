// src/core/mod.rs

//! Registry, resolution, matching and dispatch.

pub mod action_executor;
pub mod catalog;
pub mod config_loader;
pub mod dispatcher;
pub mod listing;
pub mod matcher;
pub mod paths;
pub mod registry;
pub mod resolver;
pub mod shell_commands;
