use std::collections::HashSet;

use tui_crossing::core::placement::shuffled_cells;
use tui_crossing::core::{
    default_roster, place_collectables, Collectable, Grid, ScreenEntity, SimpleRng,
};
use tui_crossing::types::CollectableKind;

fn roster() -> Vec<Collectable> {
    default_roster().into_iter().map(Collectable::new).collect()
}

#[test]
fn every_round_uses_distinct_obstacle_cells() {
    let grid = Grid::default();
    let mut items = roster();
    for seed in 1..200 {
        let mut rng = SimpleRng::new(seed);
        place_collectables(&grid, &mut items, &mut rng);

        let cells: HashSet<(i32, i32)> = items.iter().map(|c| (c.col(), c.row())).collect();
        assert_eq!(cells.len(), items.len(), "seed {seed}");
        for &(col, row) in &cells {
            assert!((0..5).contains(&col), "seed {seed}: col {col}");
            assert!((1..=3).contains(&row), "seed {seed}: row {row}");
        }
    }
}

#[test]
fn a_full_roster_covers_every_cell() {
    let grid = Grid::new(3, 2, 1).unwrap();
    let mut items: Vec<Collectable> = (0..grid.obstacle_cells())
        .map(|_| Collectable::new(CollectableKind::BlueGem))
        .collect();
    place_collectables(&grid, &mut items, &mut SimpleRng::new(7));

    let cells: HashSet<(i32, i32)> = items.iter().map(|c| (c.col(), c.row())).collect();
    assert_eq!(cells.len(), 6);
}

#[test]
fn shuffle_is_a_permutation() {
    let grid = Grid::default();
    let mut cells = shuffled_cells(&grid, &mut SimpleRng::new(99));
    cells.sort_unstable();
    assert_eq!(cells, (0..15).collect::<Vec<_>>());
}

#[test]
fn rarer_kinds_show_up_less_often() {
    let grid = Grid::default();
    let mut items = vec![
        Collectable::new(CollectableKind::BlueGem),
        Collectable::new(CollectableKind::Star),
    ];
    let mut rng = SimpleRng::new(3);
    let (mut blue, mut star) = (0, 0);
    for _ in 0..2000 {
        place_collectables(&grid, &mut items, &mut rng);
        blue += items[0].is_visible() as u32;
        star += items[1].is_visible() as u32;
    }
    assert!((1000..1400).contains(&blue), "blue {blue}");
    assert!((280..520).contains(&star), "star {star}");
}

#[test]
fn same_seed_same_layout() {
    let grid = Grid::default();
    let mut a = roster();
    let mut b = roster();
    place_collectables(&grid, &mut a, &mut SimpleRng::new(11));
    place_collectables(&grid, &mut b, &mut SimpleRng::new(11));
    let layout = |items: &[Collectable]| -> Vec<(i32, i32, bool)> {
        items.iter().map(|c| (c.col(), c.row(), c.is_visible())).collect()
    };
    assert_eq!(layout(&a), layout(&b));
}
