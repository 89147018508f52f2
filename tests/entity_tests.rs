use tui_crossing::core::enemy::ENEMY_SHAPE;
use tui_crossing::core::player::PLAYER_SHAPE;
use tui_crossing::core::{Entity, EntityShape};
use tui_crossing::types::SpriteId;

fn at(sprite: SpriteId, shape: EntityShape, col: i32, row: i32) -> Entity {
    let mut e = Entity::new(sprite, shape);
    e.set_col(col);
    e.set_row(row);
    e
}

#[test]
fn mismatched_margins_use_each_entitys_own_span() {
    let player = at(SpriteId::CharBoy, PLAYER_SHAPE, 2, 2);
    assert_eq!(player.collision_span(), (218.0, 287.0));

    // Enemy right edge lands exactly on the player's left edge.
    let touching = EntityShape {
        offset_x: 19.0,
        ..ENEMY_SHAPE
    };
    let enemy = at(SpriteId::EnemyBug, touching, 1, 2);
    assert_eq!(enemy.collision_span().1, 218.0);
    assert!(!enemy.overlaps(&player));
    assert!(!player.overlaps(&enemy));

    let one_more = EntityShape {
        offset_x: 20.0,
        ..ENEMY_SHAPE
    };
    let enemy = at(SpriteId::EnemyBug, one_more, 1, 2);
    assert!(enemy.overlaps(&player));
    assert!(player.overlaps(&enemy));
}

#[test]
fn different_rows_never_overlap() {
    let player = at(SpriteId::CharBoy, PLAYER_SHAPE, 2, 2);
    let enemy = at(SpriteId::EnemyBug, ENEMY_SHAPE, 2, 3);
    assert!(!enemy.overlaps(&player));
}

#[test]
fn render_offset_does_not_change_the_cell() {
    let enemy = at(SpriteId::EnemyBug, ENEMY_SHAPE, 1, 3);
    assert_eq!((enemy.col(), enemy.row()), (1, 3));
    assert_eq!(enemy.y(), 3.0 * 83.0 - 20.0);
}
