//! Bonus items placed in the obstacle lanes at the start of every round.
//!
//! Collectables never move. Picking one up only hides it; the object stays in
//! the roster and is re-placed and re-rolled on the next placement pass.

use crate::entity::{Entity, EntityShape, ScreenEntity};
use crate::types::{CollectableKind, COLLECTABLE_RENDER_OFFSET_Y};

// No collision margins: items collide across the full tile width.
pub const COLLECTABLE_SHAPE: EntityShape = EntityShape {
    offset_x: 0.0,
    offset_y: COLLECTABLE_RENDER_OFFSET_Y,
    margin_left: 0.0,
    margin_right: 0.0,
};

/// Roster used by the arcade defaults: 4 blue gems, 2 green gems, 1 star.
pub fn default_roster() -> Vec<CollectableKind> {
    let mut roster = Vec::with_capacity(7);
    roster.extend([CollectableKind::BlueGem; 4]);
    roster.extend([CollectableKind::GreenGem; 2]);
    roster.push(CollectableKind::Star);
    roster
}

#[derive(Debug, Clone)]
pub struct Collectable {
    kind: CollectableKind,
    entity: Entity,
}

impl Collectable {
    pub fn new(kind: CollectableKind) -> Self {
        Self {
            kind,
            entity: Entity::new(kind.sprite(), COLLECTABLE_SHAPE),
        }
    }

    pub fn kind(&self) -> CollectableKind {
        self.kind
    }

    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    pub fn appear_probability(&self) -> f32 {
        self.kind.appear_probability()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.entity.set_visible(visible);
    }
}

impl ScreenEntity for Collectable {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
