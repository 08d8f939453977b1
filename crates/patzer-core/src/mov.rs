//! Move representation.

use crate::{PieceKind, Player, Square};
use std::fmt;

/// A single ply: who moved what, from where to where, and what (if
/// anything) stood on the destination when the move was generated.
///
/// A move records enough to be reversed: restoring the moved piece at its
/// origin and the captured piece at its destination recreates the pre-move
/// occupancy of both squares. A move is only meaningful against the board
/// state it was generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: (PieceKind, Player),
    captured: Option<(PieceKind, Player)>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: (PieceKind, Player),
        captured: Option<(PieceKind, Player)>,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the moved piece and its owner.
    #[inline]
    pub const fn piece(self) -> (PieceKind, Player) {
        self.piece
    }

    /// Returns the captured piece and its owner, if any.
    #[inline]
    pub const fn captured(self) -> Option<(PieceKind, Player)> {
        self.captured
    }

    /// Returns the player making this move.
    #[inline]
    pub const fn player(self) -> Player {
        self.piece.1
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}{})", self.piece.0.glyph(self.piece.1), self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
