use crate::card::{Card, Suit};

/// Reasons a deal or a card move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("deck ran out of cards while dealing")]
    DeckExhausted,
    #[error("selection no longer refers to a card")]
    StaleSelection,
    #[error("a run cannot be dropped on its own column")]
    SameColumn,
    #[error("{card} cannot be placed on tableau column {column}")]
    TableauRejected { card: Card, column: usize },
    #[error("only a single card can be moved to a foundation")]
    RunToFoundation,
    #[error("{card} does not continue the {suit:?} foundation")]
    FoundationRejected { card: Card, suit: Suit },
}
