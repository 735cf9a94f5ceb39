pub mod batch;
pub mod engine;
pub mod report;
pub mod statistics;

pub use batch::{run_batch, BatchSummary, SimulationError};
pub use engine::{new_game, play_game, run_game};
pub use report::GameReport;
pub use statistics::{win_tally, BatchStatistics, Histogram, HistogramBin};
