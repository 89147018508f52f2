//! Floating feedback labels ("+3", "!!!") that drift up and expire.

use core::fmt::Write;

use arrayvec::ArrayString;

use crate::canvas::Canvas;
use crate::entity::{Entity, EntityShape, ScreenEntity};
use crate::types::{
    SpriteId, TextColor, FEEDBACK_DRIFT_SPEED, FEEDBACK_TEXT_OFFSET_X, FEEDBACK_TEXT_OFFSET_Y,
    HUD_FONT,
};

/// Label storage; large enough for "+" followed by any u32.
pub type Label = ArrayString<12>;

/// Format a points label such as `+10`.
pub fn points_label(points: u32) -> Label {
    let mut label = Label::new();
    // Cannot overflow: at most 11 bytes.
    let _ = write!(label, "+{points}");
    label
}

#[derive(Debug, Clone)]
pub struct FeedbackText {
    entity: Entity,
    label: Label,
    remaining_secs: f32,
    drift_speed: f32,
    color: TextColor,
}

impl FeedbackText {
    /// Create a label anchored at cell `(col, row)`.
    ///
    /// Text longer than the label capacity is truncated.
    pub fn new(text: &str, col: i32, row: i32, duration_secs: f32, color: TextColor) -> Self {
        let mut label = Label::new();
        for ch in text.chars() {
            if label.try_push(ch).is_err() {
                break;
            }
        }

        // The sprite is never drawn; labels render as text.
        let mut entity = Entity::new(SpriteId::Star, EntityShape::default());
        entity.set_col(col);
        entity.set_row(row);

        Self {
            entity,
            label,
            remaining_secs: duration_secs,
            drift_speed: FEEDBACK_DRIFT_SPEED,
            color,
        }
    }

    pub fn text(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> TextColor {
        self.color
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining_secs
    }

    /// Expired once the remaining time has gone negative.
    pub fn is_expired(&self) -> bool {
        self.remaining_secs < 0.0
    }
}

impl ScreenEntity for FeedbackText {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn update(&mut self, dt: f32) {
        self.remaining_secs -= dt;
        self.entity.shift(0.0, -self.drift_speed * dt);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            &self.label,
            self.entity.x() + FEEDBACK_TEXT_OFFSET_X,
            self.entity.y() + FEEDBACK_TEXT_OFFSET_Y,
            HUD_FONT,
            self.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::types::TILE_HEIGHT;

    #[test]
    fn drifts_up_and_counts_down() {
        let mut text = FeedbackText::new("+3", 2, 2, 0.5, TextColor::Yellow);
        let y0 = text.entity().y();
        text.update(0.1);
        assert!((text.remaining_secs() - 0.4).abs() < 1e-6);
        assert!((text.entity().y() - (y0 - 5.0)).abs() < 1e-4);
        assert!(!text.is_expired());
    }

    #[test]
    fn expires_once_duration_goes_negative() {
        let mut text = FeedbackText::new("+3", 2, 2, 0.5, TextColor::Yellow);
        text.update(0.6);
        assert!(text.is_expired());
    }

    #[test]
    fn exactly_zero_is_not_expired() {
        let mut text = FeedbackText::new("+5", 0, 0, 0.5, TextColor::White);
        text.update(0.25);
        text.update(0.25);
        assert!(!text.is_expired());
    }

    #[test]
    fn renders_text_at_fixed_offset() {
        let text = FeedbackText::new("!!!", 1, 3, 0.5, TextColor::Red);
        let mut canvas = RecordingCanvas::new();
        text.render(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::Text { text, x, y, color, .. } => {
                assert_eq!(text, "!!!");
                assert_eq!(*x, 101.0 + 30.0);
                assert_eq!(*y, 3.0 * TILE_HEIGHT + 120.0);
                assert_eq!(*color, TextColor::Red);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn points_label_formats_with_plus() {
        assert_eq!(points_label(3).as_str(), "+3");
        assert_eq!(points_label(u32::MAX).as_str(), "+4294967295");
    }
}
