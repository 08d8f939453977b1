//! Board square representation.

use std::fmt;

/// A square on the 8x8 board, addressed by row and column, both in 0-7.
///
/// Row 0 is White's back rank and row 7 is Black's. In the algebraic text
/// form, columns map to files 'a'-'h' and rows to ranks '1'-'8', so
/// `(0, 0)` prints as "a1" and `(7, 7)` as "h8".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// The board edge length.
    pub const BOARD_SIZE: u8 = 8;

    /// Creates a square, returning `None` if either coordinate is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::BOARD_SIZE && col < Self::BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square offset by the given deltas, or `None` if the
    /// result falls off the board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Iterates every square in row-major order: row 0 column 0 first,
    /// then across each row before moving to the next.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::BOARD_SIZE).flat_map(|row| {
            (0..Self::BOARD_SIZE).map(move |col| Square { row, col })
        })
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        Square::new(row, col)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, (b'1' + self.row) as char)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
