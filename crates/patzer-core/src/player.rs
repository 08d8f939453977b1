//! Player representation.

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Returns the opposing player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the pawn advance direction for this player (+1 for White,
    /// -1 for Black). White pawns start on row 1 and advance toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Returns the row this player's pawns start on (1 for White, 6 for Black).
    #[inline]
    pub const fn home_pawn_row(self) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Returns the back rank row for this player (0 for White, 7 for Black).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
