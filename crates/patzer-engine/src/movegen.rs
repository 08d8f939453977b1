//! Pseudo-legal move enumeration.
//!
//! Moves are enumerated in row-major order over origin squares, then
//! row-major over destinations. The ordering is deterministic so search
//! results and tie-breaks are reproducible.
//!
//! The enumeration is pseudo-legal only: it never checks whether a move
//! leaves the mover's own king capturable. It does skip same-owner
//! destinations, so friendly pieces are never captured even though the
//! raw slider predicates would accept such a landing square.

use crate::rules::legal_target;
use crate::Board;
use patzer_core::{Move, Player, Square};

/// Generates every pseudo-legal move for `player` on `board`.
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        let Some((kind, owner)) = board.get(from) else {
            continue;
        };
        if owner != player {
            continue;
        }
        for to in Square::all() {
            if is_own_piece(board, to, player) {
                continue;
            }
            if legal_target(kind, owner, from, to, board) {
                moves.push(Move::new(from, to, (kind, owner), board.get(to)));
            }
        }
    }
    moves
}

/// Returns true if a piece owned by `player` stands on `from` and may
/// move to `to`.
pub fn is_move_legal(board: &Board, from: Square, to: Square, player: Player) -> bool {
    match board.get(from) {
        Some((kind, owner)) if owner == player => {
            !is_own_piece(board, to, player) && legal_target(kind, owner, from, to, board)
        }
        _ => false,
    }
}

#[inline]
fn is_own_piece(board: &Board, sq: Square, player: Player) -> bool {
    matches!(board.get(sq), Some((_, owner)) if owner == player)
}
