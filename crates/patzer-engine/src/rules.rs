//! Per-piece movement rules.
//!
//! Each predicate answers whether a piece of a given kind may move between
//! two squares on the given board. The predicates are pure and check only
//! the movement pattern and path blocking:
//!
//! - Pawn diagonal captures and slider destinations are ownership-unaware;
//!   filtering out same-owner destinations is the move enumerator's job
//!   (see [`crate::movegen`]).
//! - King safety is never consulted, so the results are pseudo-legal.

use crate::Board;
use patzer_core::{PieceKind, Player, Square};

/// Returns true if a piece of `kind` owned by `owner` may move from
/// `from` to `to` on `board`.
pub fn legal_target(
    kind: PieceKind,
    owner: Player,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    match kind {
        PieceKind::Pawn => pawn_legal(owner, from, to, board),
        PieceKind::Knight => knight_legal(owner, from, to, board),
        PieceKind::Bishop => bishop_legal(from, to, board),
        PieceKind::Rook => rook_legal(from, to, board),
        PieceKind::Queen => rook_legal(from, to, board) || bishop_legal(from, to, board),
        PieceKind::King => king_legal(owner, from, to, board),
    }
}

fn pawn_legal(owner: Player, from: Square, to: Square, board: &Board) -> bool {
    let dir = owner.pawn_direction();
    let (from_row, from_col) = (from.row() as i8, from.col() as i8);
    let (to_row, to_col) = (to.row() as i8, to.col() as i8);

    // Single advance to an empty square.
    if to_row == from_row + dir && to_col == from_col && board.get(to).is_none() {
        return true;
    }

    // Diagonal advance onto an occupied square.
    if to_row == from_row + dir && (to_col - from_col).abs() == 1 && board.get(to).is_some() {
        return true;
    }

    // Double advance from the home pawn row when both squares are empty.
    if from.row() == owner.home_pawn_row()
        && to_col == from_col
        && to_row == from_row + 2 * dir
        && board.piece_at(from_row + dir, from_col).is_none()
        && board.get(to).is_none()
    {
        return true;
    }

    false
}

fn knight_legal(owner: Player, from: Square, to: Square, board: &Board) -> bool {
    let drow = (to.row() as i8 - from.row() as i8).abs();
    let dcol = (to.col() as i8 - from.col() as i8).abs();
    if !((drow == 2 && dcol == 1) || (drow == 1 && dcol == 2)) {
        return false;
    }
    match board.get(to) {
        None => true,
        Some((_, occupant)) => occupant != owner,
    }
}

fn bishop_legal(from: Square, to: Square, board: &Board) -> bool {
    let drow = to.row() as i8 - from.row() as i8;
    let dcol = to.col() as i8 - from.col() as i8;
    if drow.abs() != dcol.abs() {
        return false;
    }
    path_clear(board, from, to)
}

fn rook_legal(from: Square, to: Square, board: &Board) -> bool {
    // Exactly one axis may change.
    if (from.row() == to.row()) == (from.col() == to.col()) {
        return false;
    }
    path_clear(board, from, to)
}

fn king_legal(owner: Player, from: Square, to: Square, board: &Board) -> bool {
    let drow = (to.row() as i8 - from.row() as i8).abs();
    let dcol = (to.col() as i8 - from.col() as i8).abs();
    if drow > 1 || dcol > 1 {
        return false;
    }
    match board.get(to) {
        None => true,
        Some((_, occupant)) => occupant != owner,
    }
}

/// Returns true if every square strictly between `from` and `to` along a
/// straight or diagonal ray is empty. The endpoints themselves are not
/// examined.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();
    let mut row = from.row() as i8 + step_row;
    let mut col = from.col() as i8 + step_col;
    while (row, col) != (to.row() as i8, to.col() as i8) {
        if board.piece_at(row, col).is_some() {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}
