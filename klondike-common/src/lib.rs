//! Game model, move rules and mouse input handling for Klondike Solitaire.
//!
//! The model knows nothing about windows or frames: a driver samples the
//! pointer once per frame into [`input::PointerState`], feeds it to
//! [`input::InputController::update`] and then renders the table through a
//! [`render::Surface`].
pub mod card;
pub mod deck;
pub mod draw_pile;
pub mod error;
pub mod foundation;
pub mod game;
pub mod input;
pub mod layout;
pub mod render;
pub mod tableau;

pub use crate::card::{Card, Suit};
pub use crate::error::MoveError;
pub use crate::game::Game;
pub use crate::input::{InputController, InputEvent, PointerState};
pub use crate::layout::Layout;
