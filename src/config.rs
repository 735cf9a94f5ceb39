//! Batch simulation settings.

use crate::card::{validate_deck, Card, DeckError, DEFAULT_RANK_SPAN};
use thiserror::Error;

/// Largest rank span that stays within 2..=Ace
pub const MAX_RANK_SPAN: u8 = 13;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Number of games must be at least 1")]
    NoGames,
    #[error("Rank span {0} is outside 1..=13")]
    InvalidRankSpan(u8),
    #[error("Player names must be non-empty and distinct")]
    InvalidPlayerNames,
    #[error("Hand limit must be at least 1")]
    NoHandLimit,
    #[error("Histogram needs a non-zero bin width and bin count")]
    InvalidHistogram,
    #[error("Fixed deck is invalid: {0}")]
    InvalidDeck(#[from] DeckError),
}

/// Hand-count histogram layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    /// Hands covered by each bin
    pub bin_width: u32,
    /// Fixed-width bins before the overflow bin
    pub bin_count: u32,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        HistogramConfig {
            bin_width: 75,
            bin_count: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_games: usize,
    /// Ranks per suit; 13 gives the standard 52-card deck
    pub rank_span: u8,
    /// Base seed; game `i` is seeded with `seed + i`
    pub seed: Option<u64>,
    /// Fixed deck dealt as-is to every game instead of a fresh shuffled deck
    pub deck: Option<Vec<Card>>,
    pub player_names: [String; 2],
    /// Per-game safety bound on resolved hands
    pub max_hands: u32,
    /// Run games on the rayon pool instead of sequentially
    pub parallel: bool,
    pub histogram: HistogramConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 1000,
            rank_span: DEFAULT_RANK_SPAN,
            seed: None,
            deck: None,
            player_names: ["Art".to_string(), "Bob".to_string()],
            max_hands: 100_000,
            parallel: true,
            histogram: HistogramConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.rank_span == 0 || self.rank_span > MAX_RANK_SPAN {
            return Err(ConfigError::InvalidRankSpan(self.rank_span));
        }
        let [first, second] = &self.player_names;
        if first.trim().is_empty() || second.trim().is_empty() || first == second {
            return Err(ConfigError::InvalidPlayerNames);
        }
        if self.max_hands == 0 {
            return Err(ConfigError::NoHandLimit);
        }
        if self.histogram.bin_width == 0 || self.histogram.bin_count == 0 {
            return Err(ConfigError::InvalidHistogram);
        }
        if let Some(deck) = &self.deck {
            validate_deck(deck)?;
        }
        Ok(())
    }

    /// Cards per game
    pub fn deck_size(&self) -> usize {
        match &self.deck {
            Some(deck) => deck.len(),
            None => self.rank_span as usize * 4,
        }
    }

    pub fn names(&self) -> [&str; 2] {
        [self.player_names[0].as_str(), self.player_names[1].as_str()]
    }
}
