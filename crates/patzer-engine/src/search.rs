//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Each search call is a fresh recursive descent over hypothetical
//! successor boards; no state persists between calls. The maximizing side
//! is always the root player, the minimizing side always the opponent,
//! and leaves are scored by the material evaluator. Pruning is a pure
//! optimization: every returned score equals what plain minimax would
//! return for the same inputs.

use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::Board;
use patzer_core::{Move, Player};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// A fixed-depth minimax searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u8,
}

impl Searcher {
    /// Creates a searcher at the default depth.
    pub const fn new() -> Self {
        Searcher {
            depth: DEFAULT_DEPTH,
        }
    }

    /// Creates a searcher with a custom depth.
    pub const fn with_depth(depth: u8) -> Self {
        Searcher { depth }
    }

    /// Returns the search depth in plies.
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns the best-scoring move for `player`, or `None` when the
    /// player has no moves at all.
    ///
    /// Each candidate is scored by searching its successor board with the
    /// opponent to reply. The running best starts fresh on every call and
    /// only a strictly greater score displaces it, so ties keep the
    /// first-generated move.
    pub fn find_best_move(&self, board: &Board, player: Player) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for m in generate_moves(board, player) {
            let score = self.minimax(
                &board.successor(m),
                self.depth,
                i32::MIN,
                i32::MAX,
                false,
                player,
            );
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((m, score)),
            }
        }
        best.map(|(m, _)| m)
    }

    fn minimax(
        &self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Player,
    ) -> i32 {
        if depth == 0 || board.is_terminal() {
            return evaluate(board);
        }

        if maximizing {
            let mut value = i32::MIN;
            for m in generate_moves(board, root) {
                value = value.max(self.minimax(
                    &board.successor(m),
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    root,
                ));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for m in generate_moves(board, root.opponent()) {
                value = value.min(self.minimax(
                    &board.successor(m),
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    root,
                ));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a move for `player` at the default depth.
pub fn choose_move(board: &Board, player: Player) -> Option<Move> {
    Searcher::new().find_best_move(board, player)
}
