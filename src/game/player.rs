use crate::card::{shuffle, Card, ACE, JACK, KING, QUEEN};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cards above this value count toward `high_values`
const HIGH_CARD_THRESHOLD: u8 = 7;

/// Composition of a hand at deal time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingStats {
    pub jacks: u32,
    pub queens: u32,
    pub kings: u32,
    pub aces: u32,
    /// Sum of every rank value in the hand
    pub hand_value: u32,
    /// Sum of rank values above 7
    pub high_values: u32,
}

impl StartingStats {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut stats = StartingStats::default();
        for card in cards {
            match card.value {
                JACK => stats.jacks += 1,
                QUEEN => stats.queens += 1,
                KING => stats.kings += 1,
                ACE => stats.aces += 1,
                _ => {}
            }

            stats.hand_value += card.value as u32;
            if card.value > HIGH_CARD_THRESHOLD {
                stats.high_values += card.value as u32;
            }
        }
        stats
    }
}

/// One side of a War game
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    /// Draw pile; the top card is the end of the vector
    hand: Vec<Card>,
    /// Captured cards waiting to be recycled into the hand
    winnings: Vec<Card>,
    /// Winnings size at each recycle
    shuffles: Vec<usize>,
    starting_stats: StartingStats,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            hand: Vec::new(),
            winnings: Vec::new(),
            shuffles: Vec::new(),
            starting_stats: StartingStats::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn winnings(&self) -> &[Card] {
        &self.winnings
    }

    pub fn shuffles(&self) -> &[usize] {
        &self.shuffles
    }

    pub fn starting_stats(&self) -> &StartingStats {
        &self.starting_stats
    }

    /// Cards owned: hand plus winnings
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.winnings.len()
    }

    pub fn is_out(&self) -> bool {
        self.card_count() == 0
    }

    /// Put a dealt card on top of the hand
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Snapshot the dealt hand. Call once after dealing, before any hand is played.
    pub fn compute_starting_stats(&mut self) {
        self.starting_stats = StartingStats::from_cards(&self.hand);
    }

    /// Add captured cards to the winnings pile
    pub fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.winnings.extend(cards);
    }

    /// Take the top card of the hand, recycling shuffled winnings first if the hand is empty.
    /// Returns `None` only when the player owns no cards at all.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.hand.is_empty() {
            self.recycle_winnings(rng);
        }
        self.hand.pop()
    }

    fn recycle_winnings<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.winnings.is_empty() {
            return;
        }
        let pile = std::mem::take(&mut self.winnings);
        self.shuffles.push(pile.len());
        self.hand = shuffle(pile, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::rng::GameRng;

    fn card(value: u8) -> Card {
        Card::new(Suit::Heart, value)
    }

    #[test]
    fn test_starting_stats() {
        let mut player = Player::new("Art");
        for value in [2, 7, 8, 11, 12, 12, 13, 14, 14, 14] {
            player.receive(card(value));
        }
        player.compute_starting_stats();

        let stats = player.starting_stats();
        assert_eq!(stats.jacks, 1);
        assert_eq!(stats.queens, 2);
        assert_eq!(stats.kings, 1);
        assert_eq!(stats.aces, 3);
        assert_eq!(stats.hand_value, 2 + 7 + 8 + 11 + 12 + 12 + 13 + 14 + 14 + 14);
        assert_eq!(stats.high_values, 8 + 11 + 12 + 12 + 13 + 14 + 14 + 14);
    }

    #[test]
    fn test_starting_stats_is_a_snapshot() {
        let mut player = Player::new("Art");
        player.receive(card(14));
        player.receive(card(3));
        player.compute_starting_stats();

        let mut rng = GameRng::new(Some(1));
        player.draw(&mut rng);
        assert_eq!(player.starting_stats().hand_value, 17);
        assert_eq!(player.starting_stats().aces, 1);
    }

    #[test]
    fn test_draw_takes_top_of_hand() {
        let mut player = Player::new("Art");
        player.receive(card(4));
        player.receive(card(9));

        let mut rng = GameRng::new(Some(1));
        assert_eq!(player.draw(&mut rng), Some(card(9)));
        assert_eq!(player.draw(&mut rng), Some(card(4)));
    }

    #[test]
    fn test_draw_recycles_winnings() {
        let mut player = Player::new("Bob");
        player.collect([card(2), card(3), card(4)]);
        assert!(player.hand().is_empty());

        let mut rng = GameRng::new(Some(5));
        let drawn = player.draw(&mut rng).expect("winnings should be recycled");

        assert!([2, 3, 4].contains(&drawn.value));
        assert!(player.winnings().is_empty());
        assert_eq!(player.hand().len(), 2);
        assert_eq!(player.shuffles(), &[3]);
    }

    #[test]
    fn test_draw_when_out_of_cards() {
        let mut player = Player::new("Bob");
        let mut rng = GameRng::new(Some(5));

        assert!(player.is_out());
        assert_eq!(player.draw(&mut rng), None);
        assert!(player.shuffles().is_empty(), "No recycle is recorded for an empty pile");
    }

    #[test]
    fn test_card_count_spans_hand_and_winnings() {
        let mut player = Player::new("Art");
        player.receive(card(5));
        player.collect([card(6), card(7)]);
        assert_eq!(player.card_count(), 3);
    }
}
