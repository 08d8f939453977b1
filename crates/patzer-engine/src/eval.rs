//! Static material evaluation.
//!
//! The score is the sum of fixed per-kind values over every occupied
//! square, both owners included. It is deliberately not perspective
//! relative: nothing is subtracted or negated for the side to move, so a
//! capture by either side lowers the total. The search consumes these
//! scores as-is.

use crate::Board;
use patzer_core::{PieceKind, Square};

pub const PAWN_VALUE: i32 = 10;
pub const KNIGHT_VALUE: i32 = 30;
pub const BISHOP_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 50;
pub const QUEEN_VALUE: i32 = 90;
/// Sentinel standing in for an effectively unbounded king value. Large
/// enough to dominate any material swing, small enough that summing both
/// kings cannot overflow.
pub const KING_VALUE: i32 = 1_000_000;

/// Returns the material value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Scores a board by summing the material of every piece on it.
pub fn evaluate(board: &Board) -> i32 {
    Square::all()
        .filter_map(|sq| board.get(sq))
        .map(|(kind, _)| piece_value(kind))
        .sum()
}
