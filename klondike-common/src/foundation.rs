use crate::card::{Card, MAX_RANK, Suit, TOTAL_CARDS};
use crate::error::MoveError;

pub const TOTAL_FOUNDATIONS: usize = 4;

/// Four ascending stacks, stack `i` holding the suit whose value is `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Foundation {
    stacks: [Vec<Card>; TOTAL_FOUNDATIONS],
}

impl Foundation {
    pub fn can_accept(&self, card: &Card) -> bool {
        match self.top(card.suit()) {
            None => card.is_ace(),
            Some(top) => card.rank() == top.rank() + 1,
        }
    }

    pub fn place(&mut self, mut card: Card) -> Result<Suit, MoveError> {
        let suit = card.suit();
        if !self.can_accept(&card) {
            return Err(MoveError::FoundationRejected { card, suit });
        }
        card.face_up = true;
        self.stacks[suit.index()].push(card);
        Ok(suit)
    }

    pub fn stack(&self, suit: Suit) -> &[Card] {
        &self.stacks[suit.index()]
    }

    pub fn top(&self, suit: Suit) -> Option<&Card> {
        self.stacks[suit.index()].last()
    }

    pub fn len(&self) -> usize {
        self.stacks.iter().map(|stack| stack.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|stack| stack.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.len() == TOTAL_CARDS
            && self
                .stacks
                .iter()
                .all(|stack| stack.len() == MAX_RANK as usize)
    }
}
