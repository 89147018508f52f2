//! Configuration errors.
//!
//! The simulation itself has no fallible operations; every error here is a
//! startup precondition on [`SimConfig`](crate::config::SimConfig).

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroColumns,
    ZeroObstacleLanes,
    ZeroSafeRows,
    TooManyCollectables { count: usize, cells: usize },
    InvalidSpeedRange { min: f32, max: f32 },
    InvalidEntryDelay { min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid must have at least one column"),
            Self::ZeroObstacleLanes => write!(f, "grid must have at least one obstacle lane"),
            Self::ZeroSafeRows => write!(f, "grid must have at least one safe row"),
            Self::TooManyCollectables { count, cells } => write!(
                f,
                "{count} collectables do not fit in {cells} obstacle-lane cells"
            ),
            Self::InvalidSpeedRange { min, max } => {
                write!(f, "enemy speed range {min}..{max} must be positive and ordered")
            }
            Self::InvalidEntryDelay { min, max } => {
                write!(f, "enemy entry delay {min}..{max} must be non-negative and ordered")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
