//! # System Interaction Layer
//!
//! The boundary between the dispatch logic and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: Runs a single shell command line through the platform shell,
//!   inheriting the terminal's stdio, and reports spawn failures and non-zero exits.
//! - **`which`**: Looks up command-line tools on `PATH`.

pub mod executor;
pub mod which;
