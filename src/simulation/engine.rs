use crate::config::SimulationConfig;
use crate::game::{Game, GameError};
use crate::rng::GameRng;
use crate::simulation::report::GameReport;

/// Set up a game: the configured fixed deck as-is, or a fresh deck shuffled with `rng`
pub fn new_game(config: &SimulationConfig, rng: GameRng) -> Game {
    match &config.deck {
        Some(deck) => Game::new(config.names(), deck.clone(), rng),
        None => Game::shuffled(config.names(), config.rank_span, rng),
    }
}

/// Play a complete game and return the finished game
pub fn play_game(config: &SimulationConfig, rng: GameRng) -> Result<Game, GameError> {
    let mut game = new_game(config, rng);
    game.play_to_completion(config.max_hands)?;
    Ok(game)
}

/// Run a complete game simulation
pub fn run_game(config: &SimulationConfig, rng: GameRng) -> Result<GameReport, GameError> {
    let game = play_game(config, rng)?;
    GameReport::from_game(&game)
}
