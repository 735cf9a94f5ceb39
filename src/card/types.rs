use serde::{Deserialize, Serialize};
use std::fmt;

pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;
pub const ACE: u8 = 14;

/// Lowest rank value in any deck
pub const MIN_VALUE: u8 = 2;
/// Highest rank value a card can carry
pub const MAX_VALUE: u8 = ACE;

/// The four French suits, in deck construction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Diamond,
    Heart,
    Spade,
    Club,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
            Suit::Club => '♣',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
            Suit::Spade => "Spade",
            Suit::Club => "Club",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

/// A playing card. Only the rank value takes part in comparisons during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    /// Rank value 2..=14 (11 = Jack, 12 = Queen, 13 = King, 14 = Ace)
    pub value: u8,
}

impl Card {
    pub const fn new(suit: Suit, value: u8) -> Self {
        Card { suit, value }
    }

    /// Short rank label: digits for 2..=10, then J, Q, K, A
    pub fn rank_label(&self) -> String {
        match self.value {
            JACK => "J".to_string(),
            QUEEN => "Q".to_string(),
            KING => "K".to_string(),
            ACE => "A".to_string(),
            v => v.to_string(),
        }
    }

    /// Display name, e.g. "Q of ♥ Hearts"
    pub fn name(&self) -> String {
        format!("{} of {}s", self.rank_label(), self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_card_names() {
        assert_eq!(Card::new(Suit::Diamond, 2).name(), "2 of ♦ Diamonds");
        assert_eq!(Card::new(Suit::Club, 10).name(), "10 of ♣ Clubs");
    }

    #[test]
    fn test_face_card_names() {
        assert_eq!(Card::new(Suit::Heart, JACK).name(), "J of ♥ Hearts");
        assert_eq!(Card::new(Suit::Spade, QUEEN).name(), "Q of ♠ Spades");
        assert_eq!(Card::new(Suit::Club, KING).name(), "K of ♣ Clubs");
        assert_eq!(Card::new(Suit::Diamond, ACE).name(), "A of ♦ Diamonds");
    }

    #[test]
    fn test_short_display() {
        assert_eq!(Card::new(Suit::Spade, ACE).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Heart, 7).to_string(), "7♥");
    }

    #[test]
    fn test_serde_shape() {
        let card = Card::new(Suit::Heart, 12);
        let json = serde_json::to_string(&card).expect("serialize card");
        assert_eq!(json, r#"{"suit":"heart","value":12}"#);
    }
}
