//! Simulation module - owns every entity and runs the per-frame loop
//!
//! One frame is:
//!
//! 1. apply the buffered input move (if any)
//! 2. update collectables, enemies, the player, feedback labels; prune expired labels
//! 3. collision checks: at most one pickup, then enemies (a hit resets the round
//!    and skips the rest of the frame)
//! 4. goal check: reaching row 0 scores the bonus and resets player + collectables
//! 5. render (driven separately by the host through [`Simulation::render`])

use crate::canvas::Canvas;
use crate::collectable::Collectable;
use crate::config::SimConfig;
use crate::enemy::Enemy;
use crate::entity::ScreenEntity;
use crate::error::ConfigError;
use crate::feedback::{points_label, FeedbackText};
use crate::grid::{pixel_x_to_col, to_pixel, Grid};
use crate::placement::place_collectables;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::score::Scoreboard;
use crate::types::{
    CollectableKind, Direction, TextColor, FEEDBACK_DURATION_SECS, HIGH_SCORE_TEXT_POS, HUD_FONT,
    SCORE_TEXT_POS,
};

/// What happened during one call to [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub picked_up: Option<CollectableKind>,
    pub hit_by_enemy: bool,
    pub reached_goal: bool,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        self.picked_up.is_none() && !self.hit_by_enemy && !self.reached_goal
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rng: SimpleRng,
    enemies: Vec<Enemy>,
    player: Player,
    collectables: Vec<Collectable>,
    texts: Vec<FeedbackText>,
    scoreboard: Scoreboard,
    goal_bonus: u32,
    pending_move: Option<Direction>,
}

impl Simulation {
    /// Build a session and run the initial round reset.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let mut rng = SimpleRng::new(config.seed);

        let enemies = (0..config.enemy_count)
            .map(|_| Enemy::new(&grid, config.enemy, rng.next_u32()))
            .collect();
        let collectables = config.roster.iter().copied().map(Collectable::new).collect();

        let mut sim = Self {
            grid,
            rng,
            enemies,
            player: Player::new(grid),
            collectables,
            texts: Vec::new(),
            scoreboard: Scoreboard::new(),
            goal_bonus: config.goal_bonus,
            pending_move: None,
        };
        sim.reset_round();
        Ok(sim)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn collectables(&self) -> &[Collectable] {
        &self.collectables
    }

    pub fn collectables_mut(&mut self) -> &mut [Collectable] {
        &mut self.collectables
    }

    pub fn texts(&self) -> &[FeedbackText] {
        &self.texts
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn pending_move(&self) -> Option<Direction> {
        self.pending_move
    }

    /// Buffer a move for the next tick. A later press replaces an earlier one.
    pub fn handle_input(&mut self, direction: Direction) {
        self.pending_move = Some(direction);
    }

    /// Spawn a floating label at cell `(col, row)`.
    pub fn show_feedback(&mut self, text: &str, col: i32, row: i32, color: TextColor) {
        self.texts
            .push(FeedbackText::new(text, col, row, FEEDBACK_DURATION_SECS, color));
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickEvents {
        let mut events = TickEvents::default();

        if let Some(direction) = self.pending_move.take() {
            self.player.handle_input(direction);
        }

        self.update_entities(dt);

        if self.check_collisions(&mut events) {
            return events;
        }

        self.update_game_state(&mut events);
        events
    }

    /// Tick then redraw; the whole body of one host frame.
    pub fn run_frame(&mut self, dt: f32, canvas: &mut dyn Canvas) -> TickEvents {
        let events = self.tick(dt);
        self.render(canvas);
        events
    }

    fn update_entities(&mut self, dt: f32) {
        for collectable in &mut self.collectables {
            collectable.update(dt);
        }
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        self.player.update(dt);
        for text in &mut self.texts {
            text.update(dt);
        }
        self.texts.retain(|text| !text.is_expired());
    }

    /// Returns true when an enemy hit ended the frame early.
    fn check_collisions(&mut self, events: &mut TickEvents) -> bool {
        // Only one pickup per frame.
        if let Some(i) = self
            .collectables
            .iter()
            .position(|c| c.overlaps(&self.player))
        {
            let collectable = &mut self.collectables[i];
            collectable.set_visible(false);

            let points = collectable.points();
            let col = pixel_x_to_col(collectable.entity().x());
            let row = collectable.row();
            events.picked_up = Some(collectable.kind());

            self.scoreboard.add(points);
            self.show_feedback(&points_label(points), col, row, TextColor::Yellow);
        }

        if self.enemies.iter().any(|e| e.overlaps(&self.player)) {
            let (col, row) = (self.player.col(), self.player.row());
            self.show_feedback("!!!", col, row, TextColor::Red);
            self.reset_round();
            events.hit_by_enemy = true;
            return true;
        }

        false
    }

    fn update_game_state(&mut self, events: &mut TickEvents) {
        if !self.player.at_goal() {
            return;
        }

        self.scoreboard.add(self.goal_bonus);
        let (col, row) = (self.player.col(), self.player.row());
        self.show_feedback(&points_label(self.goal_bonus), col, row, TextColor::White);
        self.reset_player();
        events.reached_goal = true;
    }

    /// Full reset after losing a life: player, collectables, bank the score.
    pub fn reset_round(&mut self) {
        self.reset_player();
        self.scoreboard.bank_and_reset();
    }

    /// Send the player home and run a new placement pass.
    pub fn reset_player(&mut self) {
        self.player.reset();
        place_collectables(&self.grid, &mut self.collectables, &mut self.rng);
    }

    /// Redraw the whole scene.
    ///
    /// Draw order: background, HUD, collectables (top lane first), player,
    /// enemies, feedback labels.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear_frame();

        for row in 0..self.grid.rows() {
            let sprite = self.grid.lane_kind(row).background();
            for col in 0..self.grid.cols() {
                let (x, y) = to_pixel(col, row);
                canvas.draw_image(sprite, x, y);
            }
        }

        let score_line = format!("Score: {}", self.scoreboard.score());
        let (x, y) = SCORE_TEXT_POS;
        canvas.draw_text(&score_line, x, y, HUD_FONT, TextColor::Black);

        let high_line = format!("High Score: {}", self.scoreboard.high_score());
        let (x, y) = HIGH_SCORE_TEXT_POS;
        canvas.draw_text(&high_line, x, y, HUD_FONT, TextColor::Black);

        // Lower lanes overlap the ones above them, so draw top to bottom.
        for lane in 1..=self.grid.obstacle_lanes() {
            for collectable in self.collectables.iter().filter(|c| c.row() == lane) {
                collectable.render(canvas);
            }
        }

        self.player.render(canvas);

        for enemy in &self.enemies {
            enemy.render(canvas);
        }

        for text in &self.texts {
            text.render(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_clean() {
        let sim = Simulation::new(&SimConfig::default()).unwrap();
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.high_score(), 0);
        assert_eq!(sim.enemies().len(), 3);
        assert_eq!(sim.collectables().len(), 7);
        assert!(sim.texts().is_empty());
        assert_eq!((sim.player().col(), sim.player().row()), (2, 5));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = SimConfig {
            cols: 0,
            ..SimConfig::default()
        };
        assert_eq!(Simulation::new(&config).err(), Some(ConfigError::ZeroColumns));
    }

    #[test]
    fn buffered_move_applies_on_next_tick() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        sim.handle_input(Direction::Left);
        sim.handle_input(Direction::Right);
        assert_eq!(sim.player().col(), 2);

        sim.tick(0.0);
        assert_eq!(sim.player().col(), 3);
        assert_eq!(sim.pending_move(), None);
    }
}
