//! Core types for the patzer chess engine.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`PieceKind`] and [`Player`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation

mod mov;
mod piece;
mod player;
mod square;

pub use mov::Move;
pub use piece::PieceKind;
pub use player::Player;
pub use square::Square;
