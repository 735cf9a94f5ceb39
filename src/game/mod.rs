pub mod player;
pub mod state;
pub mod table;

pub use player::{Player, StartingStats};
pub use state::{Game, GameError, GameStatus, HandOutcome};
pub use table::Table;
