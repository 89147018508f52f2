//! Lane-crossing arcade game for the terminal (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under short names and adds the host configuration and
//! logging setup used by the binaries.

pub mod config;
pub mod logging;

pub use tui_crossing_core as core;
pub use tui_crossing_input as input;
pub use tui_crossing_term as term;
pub use tui_crossing_types as types;
