use crate::card::Card;
use crate::deck::Deck;
use crate::error::MoveError;

use smallvec::SmallVec;

pub const TOTAL_COLUMNS: usize = 7;
/// Six face-down cards under a full King-to-Ace run.
const COLUMN_SIZE: usize = 19;

pub type Column = SmallVec<[Card; COLUMN_SIZE]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tableau {
    columns: [Column; TOTAL_COLUMNS],
}

impl Tableau {
    /// Deals column `i` with `i + 1` cards from the deck top, turning the last one face up.
    pub fn deal_initial(deck: &mut Deck) -> Result<Self, MoveError> {
        let mut tableau = Self::default();
        for (i, column) in tableau.columns.iter_mut().enumerate() {
            for _ in 0..=i {
                let mut card = deck.take_top().ok_or(MoveError::DeckExhausted)?;
                card.face_up = false;
                column.push(card);
            }
            if let Some(card) = column.last_mut() {
                card.face_up = true;
            }
        }
        Ok(tableau)
    }

    /// Whether a run headed by `head` may be dropped on a column whose top is `top`.
    pub fn can_accept_run(top: Option<&Card>, head: &Card) -> bool {
        match top {
            None => head.is_king(),
            Some(top) => top.face_up && head.can_stack_on(top),
        }
    }

    /// Face-up, descending by one, alternating colors.
    pub fn is_valid_run(cards: &[Card]) -> bool {
        !cards.is_empty()
            && cards.iter().all(|card| card.face_up)
            && cards.windows(2).all(|pair| pair[1].can_stack_on(&pair[0]))
    }

    /// Moves `columns[from][index..]` onto the end of `columns[to]`.
    /// The newly exposed card of `from` is left as is.
    pub fn move_run(&mut self, from: usize, index: usize, to: usize) {
        debug_assert_ne!(from, to);
        let run: Column = self.columns[from].drain(index..).collect();
        self.columns[to].extend(run);
    }

    /// Turns the last card of `column` face up. Returns whether it flipped.
    pub fn flip_top(&mut self, column: usize) -> bool {
        match self.columns[column].last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    pub fn push(&mut self, column: usize, card: Card) {
        self.columns[column].push(card);
    }

    pub fn pop(&mut self, column: usize) -> Option<Card> {
        self.columns[column].pop()
    }

    pub fn column(&self, column: usize) -> &[Card] {
        &self.columns[column]
    }

    pub fn columns(&self) -> impl Iterator<Item = &[Card]> {
        self.columns.iter().map(|column| column.as_slice())
    }

    pub fn top(&self, column: usize) -> Option<&Card> {
        self.columns[column].last()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn face_up(suit: Suit, rank: u8) -> Card {
        let mut card = Card::new(suit, rank);
        card.face_up = true;
        card
    }

    #[test]
    fn test_deal_initial() {
        let mut deck = Deck::shuffled();
        let tableau = Tableau::deal_initial(&mut deck).unwrap();
        assert_eq!(tableau.len(), 28);
        assert_eq!(deck.len(), 24);

        assert_eq!(tableau.column(0).len(), 1);
        assert!(tableau.column(0)[0].face_up);

        let last = tableau.column(6);
        assert_eq!(last.len(), 7);
        assert_eq!(last.iter().filter(|c| !c.face_up).count(), 6);
        assert!(last[6].face_up);

        for (i, column) in tableau.columns().enumerate() {
            assert_eq!(column.len(), i + 1);
        }
    }

    #[test]
    fn test_deal_from_short_deck() {
        let mut deck = Deck::from_cards(Deck::new().cards()[..20].to_vec());
        assert_eq!(
            Tableau::deal_initial(&mut deck),
            Err(MoveError::DeckExhausted)
        );
    }

    #[test]
    fn test_can_accept_run_on_black_seven() {
        let black_seven = face_up(Suit::Spades, 7);
        let top = Some(&black_seven);
        assert!(Tableau::can_accept_run(top, &face_up(Suit::Hearts, 6)));
        assert!(Tableau::can_accept_run(top, &face_up(Suit::Diamonds, 6)));
        assert!(!Tableau::can_accept_run(top, &face_up(Suit::Clubs, 6)));
        assert!(!Tableau::can_accept_run(top, &face_up(Suit::Diamonds, 8)));
    }

    #[test]
    fn test_can_accept_run_on_empty_column() {
        assert!(!Tableau::can_accept_run(None, &face_up(Suit::Hearts, 10)));
        assert!(Tableau::can_accept_run(None, &face_up(Suit::Clubs, 13)));
    }

    #[test]
    fn test_face_down_top_rejects() {
        let hidden = Card::new(Suit::Spades, 7);
        assert!(!Tableau::can_accept_run(Some(&hidden), &face_up(Suit::Hearts, 6)));
    }

    #[test]
    fn test_is_valid_run() {
        let run = [
            face_up(Suit::Clubs, 9),
            face_up(Suit::Hearts, 8),
            face_up(Suit::Spades, 7),
        ];
        assert!(Tableau::is_valid_run(&run));
        assert!(Tableau::is_valid_run(&run[1..]));

        let broken = [face_up(Suit::Clubs, 9), face_up(Suit::Spades, 8)];
        assert!(!Tableau::is_valid_run(&broken));

        let gap = [face_up(Suit::Clubs, 9), face_up(Suit::Hearts, 7)];
        assert!(!Tableau::is_valid_run(&gap));

        assert!(!Tableau::is_valid_run(&[Card::new(Suit::Clubs, 9)]));
        assert!(!Tableau::is_valid_run(&[]));
    }

    #[test]
    fn test_move_run() {
        let mut tableau = Tableau::default();
        tableau.push(0, Card::new(Suit::Diamonds, 2));
        tableau.push(0, face_up(Suit::Clubs, 9));
        tableau.push(0, face_up(Suit::Hearts, 8));
        tableau.push(1, face_up(Suit::Diamonds, 10));

        tableau.move_run(0, 1, 1);
        assert_eq!(tableau.column(0), &[Card::new(Suit::Diamonds, 2)]);
        assert_eq!(
            tableau.column(1),
            &[
                face_up(Suit::Diamonds, 10),
                face_up(Suit::Clubs, 9),
                face_up(Suit::Hearts, 8)
            ]
        );

        assert!(tableau.flip_top(0));
        assert!(!tableau.flip_top(0));
        assert!(tableau.top(0).unwrap().face_up);
        assert!(!tableau.flip_top(2));
    }
}
