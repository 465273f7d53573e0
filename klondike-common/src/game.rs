use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::draw_pile::{DrawPile, Reveal};
use crate::error::MoveError;
use crate::foundation::Foundation;
use crate::input::Source;
use crate::tableau::Tableau;

use rand::Rng;
use tracing::{debug, info};

/// Everything on the table once the deck has been dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    tableau: Tableau,
    draw_pile: DrawPile,
    foundation: Foundation,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle_with(rng);
        Self::from_deck(deck).expect("a full deck always covers the deal")
    }

    /// Deals the tableau from `deck` and puts the rest into the draw pile.
    pub fn from_deck(mut deck: Deck) -> Result<Self, MoveError> {
        let tableau = Tableau::deal_initial(&mut deck)?;
        let draw_pile = DrawPile::from_deck(&mut deck);
        info!(
            dealt = tableau.len(),
            reserve = draw_pile.len(),
            "Dealt a new game"
        );
        Ok(Self {
            tableau,
            draw_pile,
            foundation: Foundation::default(),
        })
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    /// The cards a selection refers to, or `None` if it no longer resolves.
    pub fn run(&self, source: Source) -> Option<&[Card]> {
        match source {
            Source::Buffer => {
                let revealed = self.draw_pile.revealed();
                revealed.len().checked_sub(1).map(|top| &revealed[top..])
            }
            Source::Tableau { column, row } => {
                let cards = self.tableau.column(column);
                (row < cards.len()).then(|| &cards[row..])
            }
        }
    }

    pub fn reveal(&mut self) -> Reveal {
        let reveal = self.draw_pile.reveal();
        match reveal {
            Reveal::Drawn(card) => debug!(%card, "Revealed"),
            Reveal::Recycled(count) => debug!(count, "Recycled revealed cards"),
            Reveal::Empty => {}
        }
        reveal
    }

    pub fn move_to_tableau(&mut self, source: Source, to: usize) -> Result<(), MoveError> {
        if let Source::Tableau { column, .. } = source
            && column == to
        {
            return Err(MoveError::SameColumn);
        }
        let head = *self
            .run(source)
            .and_then(|run| run.first())
            .ok_or(MoveError::StaleSelection)?;
        if !Tableau::can_accept_run(self.tableau.top(to), &head) {
            return Err(MoveError::TableauRejected {
                card: head,
                column: to,
            });
        }

        match source {
            Source::Buffer => {
                let card = self
                    .draw_pile
                    .remove_top_revealed()
                    .ok_or(MoveError::StaleSelection)?;
                self.tableau.push(to, card);
            }
            Source::Tableau { column, row } => {
                self.tableau.move_run(column, row, to);
                self.tableau.flip_top(column);
            }
        }
        debug!(%head, ?source, to, "Moved to tableau");
        Ok(())
    }

    pub fn move_to_foundation(&mut self, source: Source) -> Result<Suit, MoveError> {
        let run = self.run(source).ok_or(MoveError::StaleSelection)?;
        let [card] = run else {
            return Err(MoveError::RunToFoundation);
        };
        let card = *card;
        if !self.foundation.can_accept(&card) {
            return Err(MoveError::FoundationRejected {
                card,
                suit: card.suit(),
            });
        }

        let card = match source {
            Source::Buffer => self.draw_pile.remove_top_revealed(),
            Source::Tableau { column, .. } => {
                let card = self.tableau.pop(column);
                self.tableau.flip_top(column);
                card
            }
        }
        .ok_or(MoveError::StaleSelection)?;
        let suit = self.foundation.place(card)?;
        debug!(%card, ?source, "Moved to foundation");
        if self.is_won() {
            info!("All cards are on the foundations");
        }
        Ok(suit)
    }

    pub fn is_won(&self) -> bool {
        let won = self.foundation.is_complete();
        debug_assert!(!won || (self.tableau.is_empty() && self.draw_pile.is_empty()));
        won
    }

    /// Every card on the table, container by container.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .reserve()
            .iter()
            .chain(self.draw_pile.revealed())
            .chain(self.tableau.columns().flatten())
            .chain(Suit::ALL.into_iter().flat_map(|suit| self.foundation.stack(suit)))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
