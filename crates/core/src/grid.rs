//! Grid geometry and grid/pixel coordinate mapping.
//!
//! Row 0 is the goal lane, followed by the obstacle lanes and then the safe
//! rows. Every cell maps to a `TILE_WIDTH × TILE_HEIGHT` pixel rectangle.

use crate::error::ConfigError;
use crate::types::{
    LaneKind, DEFAULT_COLS, DEFAULT_OBSTACLE_LANES, DEFAULT_SAFE_ROWS, TILE_HEIGHT, TILE_WIDTH,
};

/// Pixel position of the top-left corner of cell `(col, row)`
pub fn to_pixel(col: i32, row: i32) -> (f32, f32) {
    (col as f32 * TILE_WIDTH, row as f32 * TILE_HEIGHT)
}

/// Column containing pixel `x` (floors, so negative x maps to negative columns)
pub fn pixel_x_to_col(x: f32) -> i32 {
    (x / TILE_WIDTH).floor() as i32
}

/// Field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u8,
    obstacle_lanes: u8,
    safe_rows: u8,
}

impl Grid {
    pub fn new(cols: u8, obstacle_lanes: u8, safe_rows: u8) -> Result<Self, ConfigError> {
        if cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if obstacle_lanes == 0 {
            return Err(ConfigError::ZeroObstacleLanes);
        }
        if safe_rows == 0 {
            return Err(ConfigError::ZeroSafeRows);
        }
        Ok(Self {
            cols,
            obstacle_lanes,
            safe_rows,
        })
    }

    pub fn cols(&self) -> i32 {
        self.cols as i32
    }

    pub fn rows(&self) -> i32 {
        1 + self.obstacle_lanes as i32 + self.safe_rows as i32
    }

    pub fn obstacle_lanes(&self) -> i32 {
        self.obstacle_lanes as i32
    }

    /// Width of the field in pixels; enemies past this edge respawn
    pub fn field_width(&self) -> f32 {
        self.cols() as f32 * TILE_WIDTH
    }

    pub fn lane_kind(&self, row: i32) -> LaneKind {
        if row <= 0 {
            LaneKind::Goal
        } else if row <= self.obstacle_lanes() {
            LaneKind::Obstacle
        } else {
            LaneKind::Safe
        }
    }

    /// Number of cells in the obstacle lanes
    pub fn obstacle_cells(&self) -> usize {
        self.obstacle_lanes as usize * self.cols as usize
    }

    /// Decode an obstacle-cell index in `[0, obstacle_cells())` to `(col, row)`
    pub fn obstacle_cell(&self, index: usize) -> (i32, i32) {
        let cols = self.cols as usize;
        ((index % cols) as i32, (index / cols) as i32 + 1)
    }

    /// Player start cell: centre column, bottom row
    pub fn start_cell(&self) -> (i32, i32) {
        (self.cols() / 2, self.rows() - 1)
    }

    pub fn clamp_col(&self, col: i32) -> i32 {
        col.clamp(0, self.cols() - 1)
    }

    pub fn clamp_row(&self, row: i32) -> i32 {
        row.clamp(0, self.rows() - 1)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            obstacle_lanes: DEFAULT_OBSTACLE_LANES,
            safe_rows: DEFAULT_SAFE_ROWS,
        }
    }
}
