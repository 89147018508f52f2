//! Simulation configuration and its startup checks.

use crate::collectable::default_roster;
use crate::enemy::EnemyTuning;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{
    CollectableKind, DEFAULT_COLS, DEFAULT_ENEMY_COUNT, DEFAULT_OBSTACLE_LANES, DEFAULT_SAFE_ROWS,
    GOAL_BONUS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub cols: u8,
    pub obstacle_lanes: u8,
    pub safe_rows: u8,
    pub enemy_count: u8,
    /// One collectable is created per entry, in this order
    pub roster: Vec<CollectableKind>,
    pub seed: u32,
    pub enemy: EnemyTuning,
    pub goal_bonus: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            obstacle_lanes: DEFAULT_OBSTACLE_LANES,
            safe_rows: DEFAULT_SAFE_ROWS,
            enemy_count: DEFAULT_ENEMY_COUNT,
            roster: default_roster(),
            seed: 1,
            enemy: EnemyTuning::default(),
            goal_bonus: GOAL_BONUS,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check every precondition and build the grid.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.cols, self.obstacle_lanes, self.safe_rows)?;

        if self.roster.len() > grid.obstacle_cells() {
            return Err(ConfigError::TooManyCollectables {
                count: self.roster.len(),
                cells: grid.obstacle_cells(),
            });
        }

        let EnemyTuning {
            min_speed,
            max_speed,
            min_entry_delay,
            max_entry_delay,
        } = self.enemy;
        // Negated comparisons also reject NaN.
        if !(min_speed > 0.0 && min_speed <= max_speed) {
            return Err(ConfigError::InvalidSpeedRange {
                min: min_speed,
                max: max_speed,
            });
        }
        // A zero delay would spawn enemies on the left edge with no stagger.
        if !(min_entry_delay > 0.0 && min_entry_delay <= max_entry_delay) {
            return Err(ConfigError::InvalidEntryDelay {
                min: min_entry_delay,
                max: max_entry_delay,
            });
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let grid = SimConfig::default().validate().unwrap();
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn roster_must_fit_obstacle_cells() {
        let config = SimConfig {
            cols: 2,
            obstacle_lanes: 1,
            ..SimConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyCollectables { count: 7, cells: 2 })
        );
    }

    #[test]
    fn inverted_speed_range_is_rejected() {
        let mut config = SimConfig::default();
        config.enemy.min_speed = 500.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn negative_delay_is_rejected() {
        let mut config = SimConfig::default();
        config.enemy.min_entry_delay = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEntryDelay { .. })
        ));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let mut config = SimConfig::default();
        config.enemy.min_entry_delay = 0.0;
        config.enemy.max_entry_delay = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEntryDelay { min: 0.0, max: 0.0 })
        );
    }
}
