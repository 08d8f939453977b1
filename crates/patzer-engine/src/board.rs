//! Mailbox board representation with move history.

use patzer_core::{Move, PieceKind, Player, Square};
use std::fmt;
use thiserror::Error;

use crate::movegen::is_move_legal;

/// Errors from validated move application.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece occupies the origin square.
    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    /// The piece on the origin square belongs to the other player.
    #[error("the piece on {0} belongs to {1}")]
    WrongOwner(Square, Player),

    /// The piece's movement rule rejects the destination.
    #[error("{kind} on {from} cannot move to {to}")]
    Illegal {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
}

/// An 8x8 grid of optional pieces plus a LIFO history of applied moves.
///
/// The grid is indexed `[row][col]`, row 0 being White's back rank. The
/// history stack makes every applied move reversible: popping the most
/// recent move restores the exact pre-move occupancy of its origin and
/// destination squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<(PieceKind, Player)>; 8]; 8],
    history: Vec<Move>,
}

/// Back rank layout, queen on column 3 and king on column 4 for both sides.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Creates a board with the standard starting layout.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.grid[0][col] = Some((kind, Player::White));
            board.grid[7][col] = Some((kind, Player::Black));
        }
        for col in 0..8 {
            board.grid[1][col] = Some((PieceKind::Pawn, Player::White));
            board.grid[6][col] = Some((PieceKind::Pawn, Player::Black));
        }
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            history: Vec::new(),
        }
    }

    /// Returns the piece at the given raw coordinates.
    ///
    /// Out-of-range coordinates read as empty rather than failing, so path
    /// scans can probe past the edge without separate bounds checks. An
    /// out-of-range square is never a legal destination because move
    /// enumeration only visits the 8x8 grid.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Option<(PieceKind, Player)> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            self.grid[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Returns the piece on the given square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<(PieceKind, Player)> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Puts a piece on a square, replacing whatever was there.
    ///
    /// Intended for setting up custom positions; it does not touch the
    /// move history.
    pub fn place(&mut self, sq: Square, kind: PieceKind, owner: Player) {
        self.grid[sq.row() as usize][sq.col() as usize] = Some((kind, owner));
    }

    /// Applies a move without any legality check.
    ///
    /// Callers must have validated the move against the current board
    /// state first; [`play`](Board::play) does both. The recorded history
    /// entry captures whatever occupied the destination at apply time, so
    /// undo restores the true pre-move occupancy even if the given move
    /// was generated earlier.
    pub fn apply(&mut self, m: Move) {
        let captured = self.get(m.to());
        let recorded = Move::new(m.from(), m.to(), m.piece(), captured);
        self.grid[m.to().row() as usize][m.to().col() as usize] = Some(m.piece());
        self.grid[m.from().row() as usize][m.from().col() as usize] = None;
        self.history.push(recorded);
    }

    /// Validates and applies a move for the given player.
    ///
    /// On success the applied move (with the actual captured piece, if
    /// any) is returned.
    pub fn play(&mut self, from: Square, to: Square, player: Player) -> Result<Move, MoveError> {
        let (kind, owner) = self.get(from).ok_or(MoveError::EmptyOrigin(from))?;
        if owner != player {
            return Err(MoveError::WrongOwner(from, owner));
        }
        if !is_move_legal(self, from, to, player) {
            return Err(MoveError::Illegal { kind, from, to });
        }
        let m = Move::new(from, to, (kind, owner), self.get(to));
        self.apply(m);
        Ok(m)
    }

    /// Reverses the most recently applied move, returning it.
    ///
    /// Returns `None` when the history is empty; that is a no-op, not an
    /// error.
    pub fn undo_last(&mut self) -> Option<Move> {
        let m = self.history.pop()?;
        self.grid[m.from().row() as usize][m.from().col() as usize] = Some(m.piece());
        self.grid[m.to().row() as usize][m.to().col() as usize] = m.captured();
        Some(m)
    }

    /// Returns true if there is a move to undo.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns an independent copy of this board with the move applied.
    ///
    /// The receiver is never mutated; the search uses this to explore
    /// hypothetical lines without touching the real game.
    pub fn successor(&self, m: Move) -> Board {
        let mut next = self.clone();
        next.apply(m);
        next
    }

    /// Returns true if the position is terminal.
    ///
    /// This rule set has no checkmate or stalemate detection, so no
    /// position is ever terminal; search termination is depth-bounded.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the board as eight rows of glyphs, Black's back rank on
    /// top, with '.' for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                match self.grid[row][col] {
                    Some((kind, owner)) => write!(f, "{}", kind.glyph(owner))?,
                    None => write!(f, ".")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn initial_layout() {
        let board = Board::new();
        assert_eq!(board.get(sq(0, 0)), Some((PieceKind::Rook, Player::White)));
        assert_eq!(board.get(sq(0, 3)), Some((PieceKind::Queen, Player::White)));
        assert_eq!(board.get(sq(0, 4)), Some((PieceKind::King, Player::White)));
        assert_eq!(board.get(sq(7, 4)), Some((PieceKind::King, Player::Black)));
        for col in 0..8 {
            assert_eq!(
                board.get(sq(1, col)),
                Some((PieceKind::Pawn, Player::White))
            );
            assert_eq!(
                board.get(sq(6, col)),
                Some((PieceKind::Pawn, Player::Black))
            );
        }
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get(sq(row, col)), None);
            }
        }
    }

    #[test]
    fn out_of_range_reads_empty() {
        let board = Board::new();
        assert_eq!(board.piece_at(-1, 0), None);
        assert_eq!(board.piece_at(0, -1), None);
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(board.piece_at(0, 8), None);
        // In-range reads still see pieces.
        assert_eq!(board.piece_at(0, 0), Some((PieceKind::Rook, Player::White)));
    }

    #[test]
    fn apply_moves_piece_and_records_history() {
        let mut board = Board::new();
        let m = Move::new(sq(1, 4), sq(3, 4), (PieceKind::Pawn, Player::White), None);
        board.apply(m);
        assert_eq!(board.get(sq(1, 4)), None);
        assert_eq!(board.get(sq(3, 4)), Some((PieceKind::Pawn, Player::White)));
        assert!(board.can_undo());
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn apply_records_actual_destination_occupant() {
        let mut board = Board::empty();
        board.place(sq(0, 0), PieceKind::Rook, Player::White);
        board.place(sq(0, 5), PieceKind::Knight, Player::Black);
        // The caller's move claims no capture; apply must still record the
        // knight so undo can restore it.
        let stale = Move::new(sq(0, 0), sq(0, 5), (PieceKind::Rook, Player::White), None);
        board.apply(stale);
        assert_eq!(
            board.history()[0].captured(),
            Some((PieceKind::Knight, Player::Black))
        );
        board.undo_last();
        assert_eq!(
            board.get(sq(0, 5)),
            Some((PieceKind::Knight, Player::Black))
        );
    }

    #[test]
    fn undo_restores_board() {
        let mut board = Board::new();
        let before = board.clone();
        let m = Move::new(sq(1, 4), sq(3, 4), (PieceKind::Pawn, Player::White), None);
        board.apply(m);
        assert_ne!(board, before);
        assert_eq!(board.undo_last(), Some(m));
        assert_eq!(board, before);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut board = Board::new();
        assert!(!board.can_undo());
        assert_eq!(board.undo_last(), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn undo_restores_captured_piece() {
        let mut board = Board::empty();
        board.place(sq(3, 3), PieceKind::Queen, Player::White);
        board.place(sq(3, 6), PieceKind::Bishop, Player::Black);
        let before = board.clone();

        let m = board.play(sq(3, 3), sq(3, 6), Player::White).unwrap();
        assert_eq!(m.captured(), Some((PieceKind::Bishop, Player::Black)));
        assert_eq!(board.get(sq(3, 6)), Some((PieceKind::Queen, Player::White)));

        board.undo_last();
        assert_eq!(board, before);
    }

    #[test]
    fn play_rejects_empty_origin() {
        let mut board = Board::new();
        assert_eq!(
            board.play(sq(4, 4), sq(5, 4), Player::White),
            Err(MoveError::EmptyOrigin(sq(4, 4)))
        );
    }

    #[test]
    fn play_rejects_opponent_piece() {
        let mut board = Board::new();
        assert_eq!(
            board.play(sq(6, 0), sq(5, 0), Player::White),
            Err(MoveError::WrongOwner(sq(6, 0), Player::Black))
        );
    }

    #[test]
    fn play_rejects_illegal_move() {
        let mut board = Board::new();
        let err = board.play(sq(1, 0), sq(4, 0), Player::White).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                kind: PieceKind::Pawn,
                from: sq(1, 0),
                to: sq(4, 0),
            }
        );
        // Nothing was mutated.
        assert_eq!(board, Board::new());
    }

    #[test]
    fn successor_leaves_original_untouched() {
        let board = Board::new();
        let m = Move::new(sq(1, 4), sq(3, 4), (PieceKind::Pawn, Player::White), None);
        let next = board.successor(m);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(sq(3, 4)), Some((PieceKind::Pawn, Player::White)));
        assert!(next.can_undo());
    }

    #[test]
    fn never_terminal() {
        assert!(!Board::new().is_terminal());
        assert!(!Board::empty().is_terminal());
    }

    #[test]
    fn display_startpos() {
        let board = Board::new();
        let expected = "rnbqkbnr\n\
                        pppppppp\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        PPPPPPPP\n\
                        RNBQKBNR";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn error_messages() {
        let err = MoveError::EmptyOrigin(sq(3, 4));
        assert_eq!(err.to_string(), "no piece on e4");
        let err = MoveError::WrongOwner(sq(6, 0), Player::Black);
        assert_eq!(err.to_string(), "the piece on a7 belongs to Black");
    }
}
