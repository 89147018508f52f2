//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation of the lane-crossing game: the
//! grid, every entity, spawning and placement, collisions, scoring, and the
//! scene draw order. It has no dependencies on terminals, input devices, or
//! clocks other than through small seams:
//!
//! - **Rendering**: [`Canvas`] receives draw calls in pixel coordinates
//! - **Input**: [`Simulation::handle_input`] takes a [`Direction`](types::Direction)
//! - **Scheduling**: the host calls [`Simulation::tick`] once per frame with
//!   the elapsed seconds (see [`FrameClock`])
//!
//! # Module Structure
//!
//! - [`grid`]: field dimensions, lane layout, grid/pixel mapping
//! - [`entity`]: shared position/visibility/collision state and the [`ScreenEntity`] trait
//! - [`enemy`], [`player`], [`collectable`], [`feedback`]: the entity kinds
//! - [`placement`]: non-overlapping random placement of collectables
//! - [`score`]: score and session high score
//! - [`simulation`]: the per-frame update/collision/render orchestration
//! - [`rng`]: seeded LCG used for every random decision
//!
//! # Example
//!
//! ```
//! use tui_crossing_core::{RecordingCanvas, ScreenEntity, SimConfig, Simulation};
//! use tui_crossing_core::types::Direction;
//!
//! let mut sim = Simulation::new(&SimConfig::default().with_seed(42)).unwrap();
//! sim.handle_input(Direction::Up);
//! let events = sim.tick(0.016);
//! assert!(!events.reached_goal);
//! assert_eq!(sim.player().row(), 4);
//!
//! let mut canvas = RecordingCanvas::new();
//! sim.render(&mut canvas);
//! assert!(canvas.texts().any(|t| t == "Score: 0"));
//! ```

pub mod canvas;
pub mod clock;
pub mod collectable;
pub mod config;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod feedback;
pub mod grid;
pub mod placement;
pub mod player;
pub mod rng;
pub mod score;
pub mod simulation;

pub use tui_crossing_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use clock::FrameClock;
pub use collectable::{default_roster, Collectable};
pub use config::SimConfig;
pub use enemy::{Enemy, EnemyTuning};
pub use entity::{Entity, EntityShape, ScreenEntity};
pub use error::ConfigError;
pub use feedback::FeedbackText;
pub use grid::{pixel_x_to_col, to_pixel, Grid};
pub use placement::place_collectables;
pub use player::Player;
pub use rng::SimpleRng;
pub use score::Scoreboard;
pub use simulation::{Simulation, TickEvents};
