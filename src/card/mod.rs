pub mod deck;
pub mod types;

pub use deck::{
    deal, load_deck_file, make_deck, parse_deck_json, shuffle, validate_deck, DeckError,
    DEFAULT_RANK_SPAN, STANDARD_DECK_SIZE,
};
pub use types::{Card, Suit, ACE, JACK, KING, QUEEN};
