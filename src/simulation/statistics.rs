//! Aggregation of game reports into chart-ready batch data.

use crate::config::HistogramConfig;
use crate::simulation::report::GameReport;
use serde::Serialize;
use std::collections::BTreeMap;

// ── Hand-count histogram ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower bound on hands played
    pub lower: u32,
    /// Inclusive upper bound; `None` for the open-ended overflow bin
    pub upper: Option<u32>,
    pub count: usize,
}

impl HistogramBin {
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}-{}", self.lower, upper),
            None => format!("> {}", self.lower - 1),
        }
    }
}

/// Games bucketed by hands played. Bin `k` covers `k*w+1 ..= (k+1)*w`; the last bin
/// takes everything above the fixed-width range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub bin_width: u32,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn new(config: HistogramConfig) -> Self {
        let width = config.bin_width;
        let mut bins: Vec<HistogramBin> = (0..config.bin_count)
            .map(|k| HistogramBin {
                lower: k * width + 1,
                upper: Some((k + 1) * width),
                count: 0,
            })
            .collect();
        bins.push(HistogramBin {
            lower: config.bin_count * width + 1,
            upper: None,
            count: 0,
        });

        Histogram {
            bin_width: width,
            bins,
        }
    }

    pub fn record(&mut self, hands: u32) {
        let overflow = self.bins.len() - 1;
        let index = (hands.saturating_sub(1) / self.bin_width) as usize;
        self.bins[index.min(overflow)].count += 1;
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

// ── Batch-wide summary numbers ──────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchStatistics {
    pub mean_hands: f64,
    pub min_hands: u32,
    pub max_hands: u32,
    pub mean_ties: f64,
    pub mean_winner_shuffles: f64,
    /// Share of games won by the player dealt the higher total rank value (ties in value excluded)
    pub stronger_hand_win_rate: f64,
}

impl BatchStatistics {
    pub fn from_reports(reports: &[GameReport]) -> Self {
        if reports.is_empty() {
            return BatchStatistics::default();
        }

        let n = reports.len() as f64;
        let total_hands: u64 = reports.iter().map(|r| r.total_hands as u64).sum();
        let total_ties: u64 = reports.iter().map(|r| r.total_ties as u64).sum();
        let total_shuffles: usize = reports.iter().map(GameReport::shuffle_count).sum();

        let decided: Vec<_> = reports
            .iter()
            .filter(|r| r.winner_stats.hand_value != r.loser_stats.hand_value)
            .collect();
        let stronger_wins = decided.iter().filter(|r| r.winner_had_stronger_hand()).count();

        BatchStatistics {
            mean_hands: total_hands as f64 / n,
            min_hands: reports.iter().map(|r| r.total_hands).min().unwrap_or(0),
            max_hands: reports.iter().map(|r| r.total_hands).max().unwrap_or(0),
            mean_ties: total_ties as f64 / n,
            mean_winner_shuffles: total_shuffles as f64 / n,
            stronger_hand_win_rate: if decided.is_empty() {
                0.0
            } else {
                stronger_wins as f64 / decided.len() as f64
            },
        }
    }
}

/// Games won per player; every named player appears even with zero wins
pub fn win_tally(player_names: &[&str; 2], reports: &[GameReport]) -> BTreeMap<String, usize> {
    let mut tally: BTreeMap<String, usize> =
        player_names.iter().map(|name| (name.to_string(), 0)).collect();
    for report in reports {
        *tally.entry(report.winner.clone()).or_insert(0) += 1;
    }
    tally
}
