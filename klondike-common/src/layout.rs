//! Screen placement of every pile, derived from the window size alone.
//!
//! Cards never store a position: a settled card is placed by its container and
//! index, a dragged card by the pointer.

use crate::card::Suit;

use egui::{Pos2, Rect, Vec2};

pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1000.0, 800.0);

const TABLEAU_CARD_V_OFFSET: f32 = 30.0; // Vertical offset of cards in a tableau column
const REVEALED_GAP: f32 = 40.0; // Gap between the stock and the revealed cards
const COLUMN_GAP: f32 = 10.0;
const FOUNDATION_GAP: f32 = 20.0;
const TABLEAU_TOP_GAP: f32 = 50.0; // Gap between the top row and the tableau

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    screen: Vec2,
    card_size: Vec2,
}

impl Layout {
    pub fn new(screen: Vec2) -> Self {
        let width = (screen.x / 10.0).floor().max(1.0);
        let height = (width / 5.0).floor() * 7.0;
        Self {
            screen,
            card_size: Vec2::new(width, height),
        }
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    pub fn card_size(&self) -> Vec2 {
        self.card_size
    }

    pub fn stock_pos(&self) -> Pos2 {
        Pos2::new(self.screen.x / 8.0, self.screen.y / 16.0)
    }

    pub fn stock_rect(&self) -> Rect {
        self.card_rect(self.stock_pos())
    }

    pub fn revealed_pos(&self) -> Pos2 {
        self.stock_pos() + Vec2::new(self.card_size.x + REVEALED_GAP, 0.0)
    }

    pub fn revealed_rect(&self) -> Rect {
        self.card_rect(self.revealed_pos())
    }

    pub fn foundation_pos(&self, suit: Suit) -> Pos2 {
        Pos2::new(
            self.screen.x / 2.0 + suit.index() as f32 * (self.card_size.x + FOUNDATION_GAP),
            self.screen.y / 16.0,
        )
    }

    pub fn foundation_rect(&self, suit: Suit) -> Rect {
        self.card_rect(self.foundation_pos(suit))
    }

    pub fn tableau_pos(&self, column: usize, row: usize) -> Pos2 {
        let stock = self.stock_pos();
        Pos2::new(
            stock.x + column as f32 * (self.card_size.x + COLUMN_GAP),
            stock.y + self.card_size.y + TABLEAU_TOP_GAP + row as f32 * TABLEAU_CARD_V_OFFSET,
        )
    }

    pub fn tableau_rect(&self, column: usize, row: usize) -> Rect {
        self.card_rect(self.tableau_pos(column, row))
    }

    /// Where the `offset`-th card of a dragged run is drawn, centered on the pointer.
    pub fn drag_pos(&self, pointer: Pos2, offset: usize) -> Pos2 {
        pointer - self.card_size / 2.0 + Vec2::new(0.0, offset as f32 * TABLEAU_CARD_V_OFFSET)
    }

    pub fn drag_rect(&self, pointer: Pos2, offset: usize) -> Rect {
        self.card_rect(self.drag_pos(pointer, offset))
    }

    fn card_rect(&self, min: Pos2) -> Rect {
        Rect::from_min_size(min, self.card_size)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}
