use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Per-session statistics shown in the header. Nothing is persisted.
pub struct GameMetrics {
    pub round_start: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub food_eaten: u32,
    round_over: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            food_eaten: 0,
            round_over: false,
        }
    }

    /// Refresh the round clock; it stops once the round is over
    pub fn update(&mut self) {
        if !self.round_over {
            self.elapsed_time = self.round_start.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
        self.round_over = false;
    }

    /// Fold one tick's outcome into the counters
    pub fn on_tick(&mut self, outcome: &TickOutcome, score: u32) {
        if outcome.ate_food {
            self.food_eaten += 1;
        }
        if outcome.collision.is_some() {
            self.on_game_over(score);
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.round_over = true;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
