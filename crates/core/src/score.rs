//! Session score keeping.

/// Current score plus the best score banked this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score if beaten, then zero the current score.
    pub fn bank_and_reset(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.score = 0;
    }

    /// Overwrite both values; used to set up test scenarios.
    pub fn set(&mut self, score: u32, high_score: u32) {
        self.score = score;
        self.high_score = high_score;
    }
}
