//! Enemies: lane-bound obstacles that cross the field left to right.
//!
//! An enemy is either on its way across the field or, once its `x` passes the
//! right edge, immediately respawned by [`Enemy::reset`] in a random obstacle
//! lane, with a random speed, a random distance to the left of the field.

use crate::entity::{Entity, EntityShape, ScreenEntity};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{
    SpriteId, ENEMY_COLLISION_MARGIN, ENEMY_MAX_ENTRY_DELAY, ENEMY_MAX_SPEED, ENEMY_MIN_ENTRY_DELAY,
    ENEMY_MIN_SPEED, ENEMY_RENDER_OFFSET_Y,
};

pub const ENEMY_SHAPE: EntityShape = EntityShape {
    offset_x: 0.0,
    offset_y: ENEMY_RENDER_OFFSET_Y,
    margin_left: ENEMY_COLLISION_MARGIN,
    margin_right: ENEMY_COLLISION_MARGIN,
};

/// Respawn parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTuning {
    /// Pixels per second
    pub min_speed: f32,
    pub max_speed: f32,
    /// Seconds of travel before a respawned enemy reaches the left edge
    pub min_entry_delay: f32,
    pub max_entry_delay: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            min_speed: ENEMY_MIN_SPEED,
            max_speed: ENEMY_MAX_SPEED,
            min_entry_delay: ENEMY_MIN_ENTRY_DELAY,
            max_entry_delay: ENEMY_MAX_ENTRY_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    entity: Entity,
    speed: f32,
    lanes: i32,
    field_width: f32,
    tuning: EnemyTuning,
    rng: SimpleRng,
}

impl Enemy {
    /// Create an enemy already placed off-screen to the left.
    pub fn new(grid: &Grid, tuning: EnemyTuning, seed: u32) -> Self {
        let mut enemy = Self {
            entity: Entity::new(SpriteId::EnemyBug, ENEMY_SHAPE),
            speed: tuning.min_speed,
            lanes: grid.obstacle_lanes(),
            field_width: grid.field_width(),
            tuning,
            rng: SimpleRng::new(seed),
        };
        enemy.reset();
        enemy
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Pick a new lane and speed and move left of the field.
    ///
    /// The lead-in distance is `speed × delay`, so enemies enter staggered.
    pub fn reset(&mut self) {
        let lane = 1 + self.rng.next_range(self.lanes as u32) as i32;
        self.entity.set_row(lane);

        self.speed = self
            .rng
            .range_f32(self.tuning.min_speed, self.tuning.max_speed);

        let delay = self
            .rng
            .range_f32(self.tuning.min_entry_delay, self.tuning.max_entry_delay);
        self.entity.set_col(0);
        self.entity.set_x(-delay * self.speed);
    }

    /// True once the enemy has moved past the right edge of the field.
    pub fn is_off_screen(&self) -> bool {
        self.entity.x() > self.field_width
    }
}

impl ScreenEntity for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn update(&mut self, dt: f32) {
        self.entity.shift(self.speed * dt, 0.0);
        if self.is_off_screen() {
            self.reset();
        }
    }
}
