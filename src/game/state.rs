use crate::card::{deal, make_deck, shuffle, Card};
use crate::game::player::Player;
use crate::game::table::Table;
use crate::rng::GameRng;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is already complete")]
    AlreadyComplete,
    #[error("Game is still in progress")]
    NotComplete,
    #[error("Tie chain exceeded {0} rounds without a winner")]
    TieChainOverflow(usize),
    #[error("No winner after {0} hands")]
    HandLimitExceeded(u32),
    #[error("Card count changed from {expected} to {actual}")]
    CardsNotConserved { expected: usize, actual: usize },
}

/// Game lifecycle. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete { winner: usize },
}

/// Result of one resolved hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandOutcome {
    pub winner: usize,
    /// Tied rounds resolved before the decisive comparison
    pub ties: u32,
    /// Cards moved from the table to the winner
    pub cards_won: usize,
    /// The loser ran out of cards mid-hand
    pub forfeit: bool,
}

/// A two-player game of War
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    table: Table,
    rng: GameRng,
    deck_size: usize,
    num_hands: u32,
    num_ties: u32,
    status: GameStatus,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Deal `deck` as given (no shuffle) to two players and snapshot their starting hands.
    /// `rng` drives winnings recycling during play.
    pub fn new(player_names: [&str; 2], mut deck: Vec<Card>, rng: GameRng) -> Self {
        let deck_size = deck.len();
        let [first, second] = player_names;
        let mut players = [Player::new(first), Player::new(second)];

        deal(&mut deck, &mut players);
        for player in &mut players {
            player.compute_starting_stats();
        }

        Game {
            players,
            table: Table::new(),
            rng,
            deck_size,
            num_hands: 0,
            num_ties: 0,
            status: GameStatus::InProgress,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Build a fresh deck of `rank_span` ranks, shuffle it with `rng`, and deal it
    pub fn shuffled(player_names: [&str; 2], rank_span: u8, mut rng: GameRng) -> Self {
        let deck = shuffle(make_deck(rank_span), &mut rng);
        Game::new(player_names, deck, rng)
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn num_hands(&self) -> u32 {
        self.num_hands
    }

    pub fn num_ties(&self) -> u32 {
        self.num_ties
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, GameStatus::Complete { .. })
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Complete { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Wall-clock time from deal to completion
    pub fn elapsed(&self) -> Option<Duration> {
        self.ended_at.map(|end| end.signed_duration_since(self.started_at))
    }

    /// Cards across both hands, both winnings piles, and the table
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::card_count).sum::<usize>() + self.table.len()
    }

    /// Resolve one hand, including any chain of ties.
    ///
    /// Each player puts one card down; on equal ranks both put down two more and the
    /// second is compared, repeating until the ranks differ. A player who cannot place
    /// a required card forfeits the hand. The winner collects the whole table.
    pub fn play_hand(&mut self) -> Result<HandOutcome, GameError> {
        if self.is_complete() {
            return Err(GameError::AlreadyComplete);
        }

        let max_rounds = self.deck_size.max(1);
        let mut cards_per_player = 1;
        let mut ties = 0u32;
        let mut rounds = 0usize;

        let (winner, forfeit) = loop {
            rounds += 1;
            if rounds > max_rounds {
                return Err(GameError::TieChainOverflow(max_rounds));
            }

            if let Some(exhausted) = self.place_cards(cards_per_player) {
                warn!(
                    player = self.players[exhausted].name(),
                    hand = self.num_hands + 1,
                    ties,
                    "player ran out of cards mid-hand and forfeits"
                );
                break (1 - exhausted, true);
            }

            match self.compare_table() {
                Ordering::Greater => break (0, false),
                Ordering::Less => break (1, false),
                Ordering::Equal => {
                    ties += 1;
                    self.num_ties += 1;
                    trace!(hand = self.num_hands + 1, ties, table = self.table.len(), "war");
                    cards_per_player = 2;
                }
            }
        };

        let cards = self.table.take_all();
        let cards_won = cards.len();
        self.players[winner].collect(cards);
        self.num_hands += 1;

        let actual = self.total_cards();
        if actual != self.deck_size {
            return Err(GameError::CardsNotConserved {
                expected: self.deck_size,
                actual,
            });
        }

        debug!(
            hand = self.num_hands,
            winner = self.players[winner].name(),
            ties,
            cards_won,
            "hand resolved"
        );

        if self.players[winner].card_count() == self.deck_size {
            self.status = GameStatus::Complete { winner };
            self.ended_at = Some(Utc::now());
            debug!(
                winner = self.players[winner].name(),
                hands = self.num_hands,
                ties = self.num_ties,
                "game complete"
            );
        }

        Ok(HandOutcome {
            winner,
            ties,
            cards_won,
            forfeit,
        })
    }

    /// Play hands until one player holds every card, giving up after `max_hands`
    pub fn play_to_completion(&mut self, max_hands: u32) -> Result<(), GameError> {
        while !self.is_complete() {
            if self.num_hands >= max_hands {
                return Err(GameError::HandLimitExceeded(max_hands));
            }
            self.play_hand()?;
        }
        Ok(())
    }

    /// Each player places `count` cards. Returns the index of a player who ran dry.
    fn place_cards(&mut self, count: usize) -> Option<usize> {
        for _ in 0..count {
            for (index, player) in self.players.iter_mut().enumerate() {
                match player.draw(&mut self.rng) {
                    Some(card) => self.table.place(index, card),
                    None => return Some(index),
                }
            }
        }
        None
    }

    /// Compare the most recently placed cards by rank value only; suits never break ties
    fn compare_table(&self) -> Ordering {
        let first = self.table.top(0).map(|c| c.value);
        let second = self.table.top(1).map(|c| c.value);
        first.cmp(&second)
    }
}
