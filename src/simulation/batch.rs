//! Batch runner: many independent games fanned out, then aggregated once all finish.

use crate::config::{ConfigError, SimulationConfig};
use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::engine::run_game;
use crate::simulation::report::GameReport;
use crate::simulation::statistics::{win_tally, BatchStatistics, Histogram};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Game {index} (seed {seed}) failed: {source}")]
    Game {
        index: usize,
        seed: u64,
        #[source]
        source: GameError,
    },
    #[error("Failed to write summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a chart or report consumer needs from one batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub num_games: usize,
    pub base_seed: u64,
    pub elapsed_ms: f64,
    pub histogram: Histogram,
    pub wins: BTreeMap<String, usize>,
    pub statistics: BatchStatistics,
    pub reports: Vec<GameReport>,
}

impl BatchSummary {
    /// Aggregate finished reports. Reports are expected in game order.
    pub fn from_reports(
        config: &SimulationConfig,
        base_seed: u64,
        elapsed_ms: f64,
        reports: Vec<GameReport>,
    ) -> Self {
        let mut histogram = Histogram::new(config.histogram);
        for report in &reports {
            histogram.record(report.total_hands);
        }

        BatchSummary {
            num_games: reports.len(),
            base_seed,
            elapsed_ms,
            histogram,
            wins: win_tally(&config.names(), &reports),
            statistics: BatchStatistics::from_reports(&reports),
            reports,
        }
    }

    pub fn games_per_sec(&self) -> f64 {
        if self.elapsed_ms <= 0.0 {
            0.0
        } else {
            self.num_games as f64 / (self.elapsed_ms / 1000.0)
        }
    }

    /// Write the summary as pretty JSON
    pub fn write_json(&self, path: &str) -> Result<(), SimulationError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Run `config.num_games` games and aggregate them.
///
/// Game `i` is seeded with `base_seed + i`, so a fixed seed reproduces the batch exactly
/// whether games run on the rayon pool or sequentially.
pub fn run_batch(
    config: &SimulationConfig,
    progress: &ProgressBar,
) -> Result<BatchSummary, SimulationError> {
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(|| GameRng::new(None).seed());
    info!(
        games = config.num_games,
        base_seed,
        parallel = config.parallel,
        deck_size = config.deck_size(),
        "starting batch"
    );

    let play = |index: usize| {
        let rng = GameRng::for_game(base_seed, index);
        let seed = rng.seed();
        let result = run_game(config, rng).map_err(|source| SimulationError::Game {
            index,
            seed,
            source,
        });
        progress.inc(1);
        result
    };

    let start = Instant::now();
    let results: Vec<Result<GameReport, SimulationError>> = if config.parallel {
        (0..config.num_games).into_par_iter().map(play).collect()
    } else {
        (0..config.num_games).map(play).collect()
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let reports = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let summary = BatchSummary::from_reports(config, base_seed, elapsed_ms, reports);

    info!(
        games = summary.num_games,
        elapsed_ms = summary.elapsed_ms,
        mean_hands = summary.statistics.mean_hands,
        "batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HistogramConfig;

    fn config(num_games: usize, parallel: bool) -> SimulationConfig {
        SimulationConfig {
            num_games,
            seed: Some(2024),
            parallel,
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_of_ten_sums_to_ten() {
        let summary = run_batch(&config(10, true), &ProgressBar::hidden()).expect("batch should run");

        assert_eq!(summary.num_games, 10);
        assert_eq!(summary.reports.len(), 10);
        assert_eq!(summary.histogram.total(), 10);
        assert_eq!(summary.wins.values().sum::<usize>(), 10);
        assert_eq!(summary.wins.len(), 2);
        assert_eq!(summary.base_seed, 2024);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = run_batch(&config(16, true), &ProgressBar::hidden()).expect("batch should run");
        let sequential = run_batch(&config(16, false), &ProgressBar::hidden()).expect("batch should run");

        let hands = |s: &BatchSummary| s.reports.iter().map(|r| r.total_hands).collect::<Vec<_>>();
        assert_eq!(hands(&parallel), hands(&sequential));
        assert_eq!(parallel.wins, sequential.wins);
        assert_eq!(parallel.histogram, sequential.histogram);
    }

    #[test]
    fn test_reports_are_in_seed_order() {
        let summary = run_batch(&config(5, true), &ProgressBar::hidden()).expect("batch should run");
        let seeds: Vec<u64> = summary.reports.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![2024, 2025, 2026, 2027, 2028]);
    }

    #[test]
    fn test_progress_counts_every_game() {
        let progress = ProgressBar::hidden();
        run_batch(&config(8, true), &progress).expect("batch should run");
        assert_eq!(progress.position(), 8);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let bad = SimulationConfig {
            histogram: HistogramConfig {
                bin_width: 75,
                bin_count: 0,
            },
            ..config(3, true)
        };
        let result = run_batch(&bad, &ProgressBar::hidden());
        assert!(matches!(result, Err(SimulationError::Config(ConfigError::InvalidHistogram))));
    }

    #[test]
    fn test_game_failure_carries_seed() {
        let bad = SimulationConfig {
            max_hands: 1,
            ..config(3, false)
        };
        match run_batch(&bad, &ProgressBar::hidden()) {
            Err(SimulationError::Game { index, seed, source }) => {
                assert_eq!(index, 0);
                assert_eq!(seed, 2024);
                assert_eq!(source, GameError::HandLimitExceeded(1));
            }
            other => panic!("expected game failure, got {:?}", other.map(|s| s.num_games)),
        }
    }

    #[test]
    fn test_summary_serializes() {
        let summary = run_batch(&config(2, false), &ProgressBar::hidden()).expect("batch should run");
        let json = serde_json::to_value(&summary).expect("serialize summary");
        assert_eq!(json["num_games"], 2);
        assert_eq!(json["histogram"]["bins"].as_array().map(|b| b.len()), Some(21));
    }
}
