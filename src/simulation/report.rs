//! Per-game summary handed to whatever renders results.

use crate::game::{Game, GameError, StartingStats};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Immutable summary of a completed game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub total_hands: u32,
    pub total_ties: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub elapsed_micros: i64,
    pub winner_index: usize,
    pub winner: String,
    pub loser: String,
    /// Winnings size at each of the winner's recycles
    pub winner_shuffles: Vec<usize>,
    pub winner_stats: StartingStats,
    pub loser_stats: StartingStats,
}

impl GameReport {
    pub fn from_game(game: &Game) -> Result<Self, GameError> {
        let (winner_index, ended_at) = match (game.winner(), game.ended_at()) {
            (Some(winner), Some(ended_at)) => (winner, ended_at),
            _ => return Err(GameError::NotComplete),
        };
        let winner = game.player(winner_index);
        let loser = game.player(1 - winner_index);
        let elapsed_micros = ended_at
            .signed_duration_since(game.started_at())
            .num_microseconds()
            .unwrap_or(i64::MAX);

        Ok(GameReport {
            seed: game.seed(),
            total_hands: game.num_hands(),
            total_ties: game.num_ties(),
            started_at: game.started_at(),
            ended_at,
            elapsed_micros,
            winner_index,
            winner: winner.name().to_string(),
            loser: loser.name().to_string(),
            winner_shuffles: winner.shuffles().to_vec(),
            winner_stats: *winner.starting_stats(),
            loser_stats: *loser.starting_stats(),
        })
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_micros as f64 / 1000.0
    }

    /// Hands resolved per millisecond; `None` when the clock did not advance
    pub fn hands_per_ms(&self) -> Option<f64> {
        if self.elapsed_micros <= 0 {
            None
        } else {
            Some(self.total_hands as f64 / self.elapsed_ms())
        }
    }

    pub fn shuffle_count(&self) -> usize {
        self.winner_shuffles.len()
    }

    /// Whether the winner was dealt the higher total rank value
    pub fn winner_had_stronger_hand(&self) -> bool {
        self.winner_stats.hand_value > self.loser_stats.hand_value
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shuffles: Vec<String> = self.winner_shuffles.iter().map(|s| s.to_string()).collect();
        let stats = &self.winner_stats;

        writeln!(f, "============ GAME OVER =============")?;
        writeln!(f, "Game Stats:")?;
        writeln!(f, "Total Hands: {}", self.total_hands)?;
        writeln!(f, "Elapsed Time: {:.3} ms", self.elapsed_ms())?;
        match self.hands_per_ms() {
            Some(rate) => writeln!(f, "Hands per ms: {:.2}", rate)?,
            None => writeln!(f, "Hands per ms: n/a")?,
        }
        writeln!(f, "Number of Ties: {}", self.total_ties)?;
        writeln!(f, "-------------------------------------")?;
        writeln!(f, "Winner: {}", self.winner)?;
        writeln!(f, "Number of Shuffles: {}", self.shuffle_count())?;
        writeln!(f, "Shuffles: {}", shuffles.join(", "))?;
        writeln!(f, "startJ: {}", stats.jacks)?;
        writeln!(f, "startQ: {}", stats.queens)?;
        writeln!(f, "startK: {}", stats.kings)?;
        writeln!(f, "startA: {}", stats.aces)?;
        writeln!(f, "handValue: {}", stats.hand_value)?;
        writeln!(f, "highValues: {}", stats.high_values)?;
        writeln!(
            f,
            "Hand Value: winner {} : {}",
            stats.hand_value, self.loser_stats.hand_value
        )?;
        writeln!(
            f,
            "High Hand Value: winner {} : {}",
            stats.high_values, self.loser_stats.high_values
        )?;
        write!(f, "=====================================")
    }
}
