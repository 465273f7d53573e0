use crate::card::{Card, SPRITE_CELL, Suit};
use crate::game::Game;
use crate::input::Source;
use crate::layout::Layout;
use crate::tableau::TOTAL_COLUMNS;

use egui::{Pos2, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texture {
    /// The face-card sprite sheet.
    Face,
    /// The single card-back image.
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Card {
        card: Card,
        texture: Texture,
        source: Rect,
        dest: Rect,
    },
    EmptySlot {
        dest: Rect,
    },
}

impl DrawCall {
    pub fn card(card: Card, dest: Rect) -> Self {
        let (texture, source) = if card.face_up {
            (Texture::Face, card.sprite_rect())
        } else {
            (Texture::Back, Rect::from_min_size(Pos2::ZERO, SPRITE_CELL))
        };
        DrawCall::Card {
            card,
            texture,
            source,
            dest,
        }
    }
}

/// Something that can draw textured rectangles.
pub trait Surface {
    fn draw(&mut self, call: &DrawCall);
}

/// Draws the whole table back to front. Cards of an active drag follow the
/// pointer and are drawn last.
pub fn draw_table(
    game: &Game,
    layout: &Layout,
    drag: Option<(Source, Pos2)>,
    surface: &mut impl Surface,
) {
    let dragged_column = drag.and_then(|(source, _)| match source {
        Source::Tableau { column, row } => Some((column, row)),
        Source::Buffer => None,
    });
    let dragging_buffer = matches!(drag, Some((Source::Buffer, _)));

    for column in 0..TOTAL_COLUMNS {
        let cards = game.tableau().column(column);
        let settled = match dragged_column {
            Some((dragged, row)) if dragged == column => &cards[..row.min(cards.len())],
            _ => cards,
        };
        if cards.is_empty() {
            surface.draw(&DrawCall::EmptySlot {
                dest: layout.tableau_rect(column, 0),
            });
        }
        for (row, card) in settled.iter().enumerate() {
            surface.draw(&DrawCall::card(*card, layout.tableau_rect(column, row)));
        }
    }

    let pile = game.draw_pile();
    match pile.reserve().last() {
        Some(card) => surface.draw(&DrawCall::card(*card, layout.stock_rect())),
        None => surface.draw(&DrawCall::EmptySlot {
            dest: layout.stock_rect(),
        }),
    }
    let revealed = match pile.revealed().split_last() {
        Some((_, below)) if dragging_buffer => below,
        _ => pile.revealed(),
    };
    // Only the top two matter: the one shown and the one under a dragged top.
    let skip = revealed.len().saturating_sub(2);
    for card in &revealed[skip..] {
        surface.draw(&DrawCall::card(*card, layout.revealed_rect()));
    }

    for suit in Suit::ALL {
        let dest = layout.foundation_rect(suit);
        match game.foundation().top(suit) {
            Some(card) => surface.draw(&DrawCall::card(*card, dest)),
            None => surface.draw(&DrawCall::EmptySlot { dest }),
        }
    }

    if let Some((source, pointer)) = drag
        && let Some(run) = game.run(source)
    {
        for (offset, card) in run.iter().enumerate() {
            surface.draw(&DrawCall::card(*card, layout.drag_rect(pointer, offset)));
        }
    }
}
