use crate::card::{Card, MAX_RANK, Suit, TOTAL_CARDS};

use rand::Rng;
use rand::seq::SliceRandom;

/// The undealt cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An ordered deck, Hearts through Spades, Ace through King, all face down.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS);
        for suit in Suit::ALL {
            for rank in 1..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle();
        deck
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle with the thread-local RNG, seeded from system entropy.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck() {
        let deck = Deck::new();
        assert_eq!(deck.len(), TOTAL_CARDS);
        let unique: HashSet<_> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
        assert_eq!(unique.len(), TOTAL_CARDS);
        assert!(deck.cards().iter().all(|c| !c.face_up));
        assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, 1));
        assert_eq!(deck.cards()[51], Card::new(Suit::Spades, 13));
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_ne!(deck, Deck::new());
        let mut sorted = deck.cards().to_vec();
        sorted.sort_by_key(|c| (c.suit(), c.rank()));
        assert_eq!(sorted, Deck::new().cards());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle_with(&mut StdRng::seed_from_u64(42));
        b.shuffle_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_take_top() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Suit::Clubs, 3),
            Card::new(Suit::Hearts, 9),
        ]);
        assert_eq!(deck.take_top(), Some(Card::new(Suit::Hearts, 9)));
        assert_eq!(deck.take_top(), Some(Card::new(Suit::Clubs, 3)));
        assert_eq!(deck.take_top(), None);
        assert!(deck.is_empty());
    }
}
