use crate::card::types::{Card, Suit, MAX_VALUE, MIN_VALUE};
use crate::game::Player;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Ranks per suit in a standard deck (2 through Ace)
pub const DEFAULT_RANK_SPAN: u8 = 13;
/// Size of a standard deck
pub const STANDARD_DECK_SIZE: usize = 52;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Deck is empty")]
    Empty,
    #[error("Deck has {0} cards; it must split evenly between two players")]
    OddSize(usize),
    #[error("Duplicate card: {0}")]
    DuplicateCard(String),
    #[error("Card value {0} is outside 2..=14")]
    InvalidValue(u8),
}

/// Build an ordered deck, suit by suit: every rank from 2 to `rank_span + 1` in
/// Diamonds, then Hearts, Spades and Clubs. No shuffling happens here.
///
/// Spans beyond the 13 legal ranks are clamped, so the deck never holds more than 52 cards.
pub fn make_deck(rank_span: u8) -> Vec<Card> {
    let span = rank_span.min(MAX_VALUE - MIN_VALUE + 1);
    let mut deck = Vec::with_capacity(span as usize * Suit::ALL.len());
    for suit in Suit::ALL {
        for value in MIN_VALUE..MIN_VALUE + span {
            deck.push(Card::new(suit, value));
        }
    }
    deck
}

/// Shuffle by repeatedly taking a uniformly random remaining element and appending it
/// to the output until the input is exhausted.
///
/// Empty and single-element inputs pass through untouched without consuming randomness.
pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    if items.len() < 2 {
        return items;
    }

    let mut shuffled = Vec::with_capacity(items.len());
    while !items.is_empty() {
        let index = rng.gen_range(0..items.len());
        shuffled.push(items.remove(index));
    }
    shuffled
}

/// Deal the deck from its end backward; the card at index `i` goes to player `i % 2`.
/// The deck is empty afterwards.
pub fn deal(deck: &mut Vec<Card>, players: &mut [Player; 2]) {
    while let Some(card) = deck.pop() {
        // deck.len() is now the index the card was popped from
        players[deck.len() % 2].receive(card);
    }
}

/// Check that a deck can be played: non-empty, even-sized, no duplicates, legal values
pub fn validate_deck(deck: &[Card]) -> Result<(), DeckError> {
    if deck.is_empty() {
        return Err(DeckError::Empty);
    }
    if deck.len() % 2 != 0 {
        return Err(DeckError::OddSize(deck.len()));
    }

    let mut seen = HashSet::with_capacity(deck.len());
    for card in deck {
        if !(MIN_VALUE..=MAX_VALUE).contains(&card.value) {
            return Err(DeckError::InvalidValue(card.value));
        }
        if !seen.insert(*card) {
            return Err(DeckError::DuplicateCard(card.name()));
        }
    }
    Ok(())
}

/// Parse a fixed deck from JSON: an array of `{"suit": "heart", "value": 12}` objects.
/// Cards are kept in file order and dealt from the end.
pub fn parse_deck_json(content: &str) -> Result<Vec<Card>, DeckError> {
    let deck: Vec<Card> = serde_json::from_str(content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

/// Load a fixed deck from a JSON file
pub fn load_deck_file(path: &str) -> Result<Vec<Card>, DeckError> {
    let content = std::fs::read_to_string(path)?;
    parse_deck_json(&content)
}
