use crate::card::Card;
use crate::deck::Deck;

/// Maximum number of cards left over after the tableau deal.
pub const RESERVE_SIZE: usize = 24;

/// Outcome of clicking the draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Drawn(Card),
    Recycled(usize),
    Empty,
}

/// Stock and waste: face-down `reserve` plus the face-up `revealed` buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPile {
    reserve: Vec<Card>,
    revealed: Vec<Card>,
}

impl DrawPile {
    /// Moves every card left in `deck` into the reserve.
    pub fn from_deck(deck: &mut Deck) -> Self {
        let mut reserve = Vec::with_capacity(RESERVE_SIZE);
        while let Some(mut card) = deck.take_top() {
            card.face_up = false;
            reserve.push(card);
        }
        Self {
            reserve,
            revealed: Vec::new(),
        }
    }

    pub fn reveal(&mut self) -> Reveal {
        match self.reserve.pop() {
            Some(mut card) => {
                card.face_up = true;
                self.revealed.push(card);
                Reveal::Drawn(card)
            }
            None if self.revealed.is_empty() => Reveal::Empty,
            None => Reveal::Recycled(self.recycle()),
        }
    }

    /// Returns the revealed cards to the reserve face down, keeping their order.
    pub fn recycle(&mut self) -> usize {
        let count = self.revealed.len();
        self.reserve.extend(self.revealed.drain(..).map(|mut card| {
            card.face_up = false;
            card
        }));
        count
    }

    pub fn top_revealed(&self) -> Option<&Card> {
        self.revealed.last()
    }

    pub fn remove_top_revealed(&mut self) -> Option<Card> {
        self.revealed.pop()
    }

    pub fn reserve(&self) -> &[Card] {
        &self.reserve
    }

    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    pub fn len(&self) -> usize {
        self.reserve.len() + self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserve.is_empty() && self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn pile_of(n: u8) -> DrawPile {
        let cards = (1..=n).map(|rank| Card::new(Suit::Spades, rank)).collect();
        DrawPile::from_deck(&mut Deck::from_cards(cards))
    }

    #[test]
    fn test_from_deck_drains_deck() {
        let mut deck = Deck::new();
        let pile = DrawPile::from_deck(&mut deck);
        assert!(deck.is_empty());
        assert_eq!(pile.reserve().len(), 52);
        assert!(pile.revealed().is_empty());
        // Deck top is taken first, so it ends up at the bottom of the reserve.
        assert_eq!(pile.reserve()[0], Card::new(Suit::Spades, 13));
    }

    #[test]
    fn test_reveal_until_recycle() {
        let mut pile = pile_of(5);
        for i in 1..=5 {
            let reserve_before = pile.reserve().len();
            let Reveal::Drawn(card) = pile.reveal() else {
                panic!("expected a drawn card");
            };
            assert!(card.face_up);
            assert_eq!(pile.reserve().len(), reserve_before - 1);
            assert_eq!(pile.revealed().len(), i);
            assert_eq!(pile.top_revealed(), Some(&card));
        }
        assert!(pile.reserve().is_empty());
        assert_eq!(pile.reveal(), Reveal::Recycled(5));
        assert_eq!(pile.reserve().len(), 5);
        assert!(pile.revealed().is_empty());
    }

    #[test]
    fn test_recycle_preserves_order() {
        let mut pile = pile_of(4);
        for _ in 0..4 {
            pile.reveal();
        }
        let revealed: Vec<_> = pile
            .revealed()
            .iter()
            .map(|c| (c.suit(), c.rank()))
            .collect();
        assert_eq!(pile.recycle(), 4);
        let reserve: Vec<_> = pile
            .reserve()
            .iter()
            .map(|c| (c.suit(), c.rank()))
            .collect();
        assert_eq!(reserve, revealed);
        assert!(pile.reserve().iter().all(|c| !c.face_up));

        let snapshot = pile.clone();
        assert_eq!(pile.recycle(), 0);
        assert_eq!(pile, snapshot);
    }

    #[test]
    fn test_remove_top_revealed() {
        let mut pile = pile_of(3);
        assert_eq!(pile.remove_top_revealed(), None);
        pile.reveal();
        pile.reveal();
        let top = *pile.top_revealed().unwrap();
        assert_eq!(pile.remove_top_revealed(), Some(top));
        assert_eq!(pile.revealed().len(), 1);
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_empty_pile() {
        let mut pile = DrawPile::default();
        assert_eq!(pile.reveal(), Reveal::Empty);
        assert!(pile.is_empty());
    }
}
