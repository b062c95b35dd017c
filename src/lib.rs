//! TUI Pig (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pig::{core,input,term,types}` and
//! hosts the binary's startup pieces: environment configuration and logging.

pub mod config;
pub mod logging;

pub use tui_pig_core as core;
pub use tui_pig_input as input;
pub use tui_pig_term as term;
pub use tui_pig_types as types;

pub use config::AppConfig;
