//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Direction`](types::Direction) moves and
//! host commands. Only discrete presses count: auto-repeat and release events
//! are ignored so one press is exactly one grid step.

pub mod map;

pub use tui_crossing_types as types;

pub use map::{direction_for_key, should_quit, translate_event, HostEvent};
