//! A deliberately small chess engine: mailbox board, per-piece movement
//! rules, and fixed-depth minimax search with alpha-beta pruning.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of optional pieces with a LIFO move history
//! - [`rules`] - pure per-kind movement predicates
//! - [`generate_moves`] / [`is_move_legal`] - pseudo-legal move enumeration
//! - [`evaluate`] - owner-blind material scoring
//! - [`Searcher`] / [`choose_move`] - the adversarial search
//!
//! # Scope
//!
//! The rule set is intentionally reduced: no check or checkmate detection,
//! no castling, en passant, promotion, or draw rules. Move enumeration is
//! pseudo-legal (king safety is never verified) and search termination is
//! purely depth-bounded.
//!
//! # Example
//!
//! ```
//! use patzer_core::Player;
//! use patzer_engine::{Board, Searcher};
//!
//! let mut board = Board::new();
//! let searcher = Searcher::with_depth(2);
//! let reply = searcher
//!     .find_best_move(&board, Player::White)
//!     .expect("opening moves exist");
//! board.apply(reply);
//! assert!(board.can_undo());
//! ```

mod board;
pub mod eval;
pub mod movegen;
pub mod rules;
mod search;

pub use board::{Board, MoveError};
pub use eval::evaluate;
pub use movegen::{generate_moves, is_move_legal};
pub use search::{choose_move, Searcher, DEFAULT_DEPTH};
