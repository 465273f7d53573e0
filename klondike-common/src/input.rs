//! Turns per-frame pointer samples into selections, drags and card moves.

use crate::card::Suit;
use crate::draw_pile::Reveal;
use crate::error::MoveError;
use crate::game::Game;
use crate::layout::Layout;
use crate::tableau::{TOTAL_COLUMNS, Tableau};

use egui::Pos2;
use tracing::debug;

/// Primary button state, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pos: Pos2,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

/// Where the selected cards came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Top card of the revealed buffer.
    Buffer,
    /// `column[row..]` of the tableau.
    Tableau { column: usize, row: usize },
}

impl Source {
    pub fn column(&self) -> Option<usize> {
        match self {
            Source::Buffer => None,
            Source::Tableau { column, .. } => Some(*column),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Dragging { source: Source, pointer: Pos2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Tableau(usize),
    Foundation(Suit),
}

/// What a frame's input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    None,
    Revealed(Reveal),
    Picked(Source),
    Dragged,
    Placed(Placement),
    Rejected(MoveError),
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: InputState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// The active drag, if any: its source and the latest pointer position.
    pub fn drag(&self) -> Option<(Source, Pos2)> {
        match self.state {
            InputState::Idle => None,
            InputState::Dragging { source, pointer } => Some((source, pointer)),
        }
    }

    /// Drops any selection without touching the game.
    pub fn reset(&mut self) {
        self.state = InputState::Idle;
    }

    pub fn update(
        &mut self,
        game: &mut Game,
        layout: &Layout,
        pointer: &PointerState,
    ) -> InputEvent {
        let mut event = InputEvent::None;

        if pointer.pressed && self.state == InputState::Idle {
            event = self.press(game, layout, pointer.pos);
            if matches!(event, InputEvent::Revealed(_)) {
                return event;
            }
        }

        if let InputState::Dragging { source, .. } = self.state {
            if pointer.released {
                self.state = InputState::Idle;
                return Self::release(game, layout, source, pointer.pos);
            }
            if !pointer.down {
                self.state = InputState::Idle;
                return InputEvent::Cancelled;
            }
            self.state = InputState::Dragging {
                source,
                pointer: pointer.pos,
            };
            if event == InputEvent::None {
                event = InputEvent::Dragged;
            }
        }

        event
    }

    fn press(&mut self, game: &mut Game, layout: &Layout, pos: Pos2) -> InputEvent {
        if layout.stock_rect().contains(pos) {
            return InputEvent::Revealed(game.reveal());
        }

        if game.draw_pile().top_revealed().is_some() && layout.revealed_rect().contains(pos) {
            return self.pick(Source::Buffer, pos);
        }

        for column in 0..TOTAL_COLUMNS {
            let cards = game.tableau().column(column);
            let hit = (0..cards.len())
                .rev()
                .find(|&row| cards[row].face_up && layout.tableau_rect(column, row).contains(pos));
            if let Some(row) = hit {
                if !Tableau::is_valid_run(&cards[row..]) {
                    debug!(column, row, "Refused to pick up an unordered run");
                    return InputEvent::None;
                }
                return self.pick(Source::Tableau { column, row }, pos);
            }
        }

        InputEvent::None
    }

    fn pick(&mut self, source: Source, pos: Pos2) -> InputEvent {
        self.state = InputState::Dragging {
            source,
            pointer: pos,
        };
        InputEvent::Picked(source)
    }

    fn release(game: &mut Game, layout: &Layout, source: Source, pos: Pos2) -> InputEvent {
        let event = match Self::drop_target(game, layout, source, pos) {
            Some(Placement::Tableau(to)) => game
                .move_to_tableau(source, to)
                .map(|()| Placement::Tableau(to)),
            Some(Placement::Foundation(_)) => {
                game.move_to_foundation(source).map(Placement::Foundation)
            }
            None => return InputEvent::Cancelled,
        };
        match event {
            Ok(placement) => InputEvent::Placed(placement),
            Err(err) => {
                debug!(%err, ?source, "Drop rejected");
                InputEvent::Rejected(err)
            }
        }
    }

    /// Picks the target under `pos`: non-empty columns first, then empty
    /// columns, then the foundations.
    fn drop_target(game: &Game, layout: &Layout, source: Source, pos: Pos2) -> Option<Placement> {
        let tableau = game.tableau();
        let head = game.run(source)?.first()?;
        let excluded = source.column();
        let columns = move || (0..TOTAL_COLUMNS).filter(move |&i| Some(i) != excluded);

        let occupied = columns().find(|&i| {
            let len = tableau.column(i).len();
            len > 0
                && layout.tableau_rect(i, len - 1).contains(pos)
                && Tableau::can_accept_run(tableau.top(i), head)
        });
        let empty = || {
            columns().find(|&i| {
                tableau.column(i).is_empty()
                    && layout.tableau_rect(i, 0).contains(pos)
                    && Tableau::can_accept_run(None, head)
            })
        };
        if let Some(column) = occupied.or_else(empty) {
            return Some(Placement::Tableau(column));
        }

        Suit::ALL
            .into_iter()
            .find(|&suit| layout.foundation_rect(suit).contains(pos))
            .map(Placement::Foundation)
    }
}
