use egui::{Pos2, Rect, Vec2};
use std::fmt;

pub const MAX_RANK: u8 = 13;
pub const TOTAL_CARDS: usize = 52;
/// Size of one cell in the face-card sprite sheet.
pub const SPRITE_CELL: Vec2 = Vec2::new(225.0, 315.0);

const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts = 0,
    Clubs = 1,
    Diamonds = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

/// Red/black alternation used for tableau stacking.
pub fn alternating_color(a: Suit, b: Suit) -> bool {
    a.color() != b.color()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
    pub face_up: bool,
}

impl Card {
    /// Creates a face-down card. `rank` runs from 1 (Ace) to 13 (King).
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((1..=MAX_RANK).contains(&rank), "rank out of range: {rank}");
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    pub fn is_king(&self) -> bool {
        self.rank == MAX_RANK
    }

    pub fn symbols(&self) -> (&'static str, char) {
        (RANKS[(self.rank - 1) as usize], self.suit.symbol())
    }

    /// Whether this card may sit directly on `below` in a tableau column.
    pub fn can_stack_on(&self, below: &Card) -> bool {
        below.rank == self.rank + 1 && alternating_color(below.suit, self.suit)
    }

    /// Lookup rectangle of this card's face in the sprite sheet.
    /// Columns are ranks, rows are suits.
    pub fn sprite_rect(&self) -> Rect {
        let min = Pos2::new(
            (self.rank - 1) as f32 * SPRITE_CELL.x,
            self.suit.index() as f32 * SPRITE_CELL.y,
        );
        Rect::from_min_size(min, SPRITE_CELL)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rank, suit) = self.symbols();
        write!(f, "{rank}{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_color() {
        for a in Suit::ALL {
            for b in Suit::ALL {
                let red = |s: Suit| matches!(s, Suit::Hearts | Suit::Diamonds);
                assert_eq!(alternating_color(a, b), red(a) != red(b), "{a:?} {b:?}");
            }
        }
        assert!(alternating_color(Suit::Hearts, Suit::Spades));
        assert!(!alternating_color(Suit::Clubs, Suit::Spades));
    }

    #[test]
    fn test_sprite_rect() {
        let rect = Card::new(Suit::Diamonds, 12).sprite_rect();
        assert_eq!(rect.min, Pos2::new(11.0 * 225.0, 2.0 * 315.0));
        assert_eq!(rect.size(), SPRITE_CELL);

        let rect = Card::new(Suit::Hearts, 1).sprite_rect();
        assert_eq!(rect.min, Pos2::ZERO);
    }

    #[test]
    fn test_can_stack_on() {
        let black_seven = Card::new(Suit::Clubs, 7);
        assert!(Card::new(Suit::Hearts, 6).can_stack_on(&black_seven));
        assert!(!Card::new(Suit::Spades, 6).can_stack_on(&black_seven));
        assert!(!Card::new(Suit::Diamonds, 8).can_stack_on(&black_seven));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, 1).to_string(), "A♠");
        assert_eq!(Card::new(Suit::Clubs, 13).to_string(), "K♣");
    }
}
