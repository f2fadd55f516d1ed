//! daily-grind: open and close groups of desktop apps from the command line.

include!(concat!(env!("OUT_DIR"), "/messages.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
