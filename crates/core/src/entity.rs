//! Shared positional state for everything drawn on the field.
//!
//! An [`Entity`] keeps its grid cell and its pixel position in lockstep:
//! `x = col * TILE_WIDTH + offset_x` and `y = row * TILE_HEIGHT + offset_y`.
//! [`Entity::set_col`] and [`Entity::set_row`] are the only ways to move an
//! entity to a cell. Continuous motion (enemies, drifting labels) shifts the
//! pixel position without changing the cell.

use crate::canvas::Canvas;
use crate::grid::to_pixel;
use crate::types::{SpriteId, TILE_WIDTH};

/// Per-kind rendering offsets and collision margins, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntityShape {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Shaved off the left edge of the collision box
    pub margin_left: f32,
    /// Shaved off the right edge of the collision box
    pub margin_right: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    sprite: SpriteId,
    shape: EntityShape,
    col: i32,
    row: i32,
    x: f32,
    y: f32,
    visible: bool,
}

impl Entity {
    /// Create a visible entity at cell (0, 0)
    pub fn new(sprite: SpriteId, shape: EntityShape) -> Self {
        Self {
            sprite,
            shape,
            col: 0,
            row: 0,
            x: shape.offset_x,
            y: shape.offset_y,
            visible: true,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    pub fn shape(&self) -> EntityShape {
        self.shape
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_col(&mut self, col: i32) {
        self.col = col;
        self.x = to_pixel(col, 0).0 + self.shape.offset_x;
    }

    pub fn set_row(&mut self, row: i32) {
        self.row = row;
        self.y = to_pixel(0, row).1 + self.shape.offset_y;
    }

    /// Move horizontally without changing the logical cell.
    pub(crate) fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub(crate) fn shift(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Horizontal collision span `[left, right)` after margins
    pub fn collision_span(&self) -> (f32, f32) {
        (
            self.x + self.shape.margin_left,
            self.x + TILE_WIDTH - self.shape.margin_right,
        )
    }

    /// Collision predicate
    ///
    /// Both entities must be visible and share a row, and their margin-adjusted
    /// spans must intersect. Spans are half-open, so touching edges do not count.
    pub fn overlaps(&self, other: &Entity) -> bool {
        if !self.visible || !other.visible || self.row != other.row {
            return false;
        }
        let (left, right) = self.collision_span();
        let (other_left, other_right) = other.collision_span();
        right > other_left && left < other_right
    }

    /// Draw the sprite at the current pixel position, if visible.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.visible {
            canvas.draw_image(self.sprite, self.x, self.y);
        }
    }
}

/// Capability set shared by every on-field object.
///
/// Implementors only expose their [`Entity`]; positioning, collision and the
/// default sprite render come for free.
pub trait ScreenEntity {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Advance kinematic state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    fn render(&self, canvas: &mut dyn Canvas) {
        self.entity().draw(canvas);
    }

    fn overlaps(&self, other: &dyn ScreenEntity) -> bool {
        self.entity().overlaps(other.entity())
    }

    fn set_col(&mut self, col: i32) {
        self.entity_mut().set_col(col);
    }

    fn set_row(&mut self, row: i32) {
        self.entity_mut().set_row(row);
    }

    fn col(&self) -> i32 {
        self.entity().col()
    }

    fn row(&self) -> i32 {
        self.entity().row()
    }

    fn is_visible(&self) -> bool {
        self.entity().is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TILE_HEIGHT;

    fn shape(offset_x: f32, offset_y: f32, margin_left: f32, margin_right: f32) -> EntityShape {
        EntityShape {
            offset_x,
            offset_y,
            margin_left,
            margin_right,
        }
    }

    #[test]
    fn set_col_and_row_recompute_pixels_with_offsets() {
        let mut e = Entity::new(SpriteId::EnemyBug, shape(4.0, -20.0, 0.0, 0.0));
        e.set_col(3);
        e.set_row(2);
        assert_eq!(e.x(), 3.0 * TILE_WIDTH + 4.0);
        assert_eq!(e.y(), 2.0 * TILE_HEIGHT - 20.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let mut a = Entity::new(SpriteId::GemBlue, EntityShape::default());
        let mut b = Entity::new(SpriteId::GemBlue, EntityShape::default());
        a.set_row(1);
        b.set_row(1);
        a.set_col(0);
        b.set_col(1);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn invisible_entities_never_overlap() {
        let mut a = Entity::new(SpriteId::GemBlue, EntityShape::default());
        let b = Entity::new(SpriteId::CharBoy, EntityShape::default());
        assert!(a.overlaps(&b));
        a.set_visible(false);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn hidden_entities_are_not_drawn() {
        let mut canvas = crate::canvas::RecordingCanvas::new();
        let mut e = Entity::new(SpriteId::Star, EntityShape::default());
        e.draw(&mut canvas);
        e.set_visible(false);
        e.draw(&mut canvas);
        assert_eq!(canvas.images().count(), 1);
    }
}
