//! Placement pass: scatter collectables over the obstacle lanes.
//!
//! Cell indices `[0, obstacle_cells)` are shuffled and dealt one per
//! collectable, so no two collectables share a cell in the same round.
//! Visibility is then rolled per item against its kind's probability.

use crate::collectable::Collectable;
use crate::entity::ScreenEntity;
use crate::grid::Grid;
use crate::rng::SimpleRng;

/// Shuffled obstacle-cell indices, one per cell.
pub fn shuffled_cells(grid: &Grid, rng: &mut SimpleRng) -> Vec<usize> {
    let mut cells: Vec<usize> = (0..grid.obstacle_cells()).collect();
    rng.shuffle(&mut cells);
    cells
}

/// Re-place and re-roll every collectable.
///
/// Requires `collectables.len() <= grid.obstacle_cells()`; the config check
/// guarantees it, and surplus items are left where they are otherwise.
pub fn place_collectables(grid: &Grid, collectables: &mut [Collectable], rng: &mut SimpleRng) {
    let cells = shuffled_cells(grid, rng);
    debug_assert!(collectables.len() <= cells.len());

    for (collectable, &cell) in collectables.iter_mut().zip(cells.iter()) {
        let (col, row) = grid.obstacle_cell(cell);
        collectable.set_col(col);
        collectable.set_row(row);
        let visible = rng.chance(collectable.appear_probability());
        collectable.set_visible(visible);
    }
}
