use crate::card::Card;

/// Face-up cards staged during one hand, one pile per player
#[derive(Debug, Clone, Default)]
pub struct Table {
    piles: [Vec<Card>; 2],
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, player: usize, card: Card) {
        self.piles[player].push(card);
    }

    /// Most recently placed card for a player
    pub fn top(&self, player: usize) -> Option<&Card> {
        self.piles[player].last()
    }

    pub fn pile(&self, player: usize) -> &[Card] {
        &self.piles[player]
    }

    pub fn len(&self) -> usize {
        self.piles[0].len() + self.piles[1].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear both piles, returning player 0's pile followed by player 1's
    pub fn take_all(&mut self) -> Vec<Card> {
        let [first, second] = &mut self.piles;
        let mut cards = std::mem::take(first);
        cards.append(second);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn test_place_and_top() {
        let mut table = Table::new();
        assert!(table.top(0).is_none());

        table.place(0, Card::new(Suit::Club, 3));
        table.place(0, Card::new(Suit::Club, 9));
        table.place(1, Card::new(Suit::Heart, 5));

        assert_eq!(table.top(0), Some(&Card::new(Suit::Club, 9)));
        assert_eq!(table.top(1), Some(&Card::new(Suit::Heart, 5)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_take_all_keeps_order_and_clears() {
        let mut table = Table::new();
        table.place(1, Card::new(Suit::Heart, 5));
        table.place(0, Card::new(Suit::Club, 3));
        table.place(0, Card::new(Suit::Club, 9));

        let cards = table.take_all();
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Club, 3),
                Card::new(Suit::Club, 9),
                Card::new(Suit::Heart, 5),
            ]
        );
        assert!(table.is_empty());
        assert!(table.pile(0).is_empty() && table.pile(1).is_empty());
    }
}
