//! The player avatar: moves one cell per input, never on its own.

use crate::entity::{Entity, EntityShape, ScreenEntity};
use crate::grid::Grid;
use crate::types::{Direction, SpriteId, PLAYER_COLLISION_MARGIN};

pub const PLAYER_SHAPE: EntityShape = EntityShape {
    offset_x: 0.0,
    offset_y: 0.0,
    margin_left: PLAYER_COLLISION_MARGIN,
    margin_right: PLAYER_COLLISION_MARGIN,
};

#[derive(Debug, Clone)]
pub struct Player {
    entity: Entity,
    grid: Grid,
}

impl Player {
    /// Create the player at the grid's start cell.
    pub fn new(grid: Grid) -> Self {
        let mut player = Self {
            entity: Entity::new(SpriteId::CharBoy, PLAYER_SHAPE),
            grid,
        };
        player.reset();
        player
    }

    /// Return to the start cell.
    pub fn reset(&mut self) {
        let (col, row) = self.grid.start_cell();
        self.entity.set_row(row);
        self.entity.set_col(col);
    }

    /// Step one cell in `direction`, clamped to the field.
    pub fn handle_input(&mut self, direction: Direction) {
        let (dcol, drow) = direction.delta();
        if dcol != 0 {
            let col = self.grid.clamp_col(self.entity.col() + dcol);
            self.entity.set_col(col);
        }
        if drow != 0 {
            let row = self.grid.clamp_row(self.entity.row() + drow);
            self.entity.set_row(row);
        }
    }

    /// True when standing in the goal lane.
    pub fn at_goal(&self) -> bool {
        self.entity.row() == 0
    }
}

impl ScreenEntity for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
