//! Board squares.
//!
//! The board is a fixed 10x10 track numbered 1..=100. A player who has not
//! rolled yet is off the board; that is modeled as `Option<Square>::None`
//! rather than a magic square 0.

use serde::{Deserialize, Serialize};

/// Number of squares on the board. The last square is the goal.
pub const BOARD_SIZE: u8 = 100;

/// A square on the board, always in `1..=BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// The first square.
    pub const FIRST: Square = Square(1);

    /// The goal square.
    pub const FINISH: Square = Square(BOARD_SIZE);

    /// Create a square, returning `None` when `n` is off the board.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= BOARD_SIZE {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Pull any distance onto the board: 0 becomes the first square and
    /// anything past the goal becomes the goal.
    #[must_use]
    pub fn clamped(n: u64) -> Self {
        Self(n.clamp(1, u64::from(BOARD_SIZE)) as u8)
    }

    /// Raw square number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for the goal square.
    #[must_use]
    pub const fn is_finish(self) -> bool {
        self.0 == BOARD_SIZE
    }

    /// Distance travelled from the start, treating "not started" as square 0.
    #[must_use]
    pub fn ordinal(position: Option<Square>) -> u64 {
        position.map_or(0, |s| u64::from(s.0))
    }

    /// Iterate over every square on the board in ascending order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Square::new(n).ok_or_else(|| format!("square {} is off the board", n))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert_eq!(Square::new(0), None);
        assert_eq!(Square::new(1), Some(Square::FIRST));
        assert_eq!(Square::new(100), Some(Square::FINISH));
        assert_eq!(Square::new(101), None);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Square::clamped(0), Square::FIRST);
        assert_eq!(Square::clamped(57).get(), 57);
        assert_eq!(Square::clamped(u64::MAX), Square::FINISH);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(Square::ordinal(None), 0);
        assert_eq!(Square::ordinal(Square::new(42)), 42);
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 100);
        assert_eq!(squares[0], Square::FIRST);
        assert!(squares[99].is_finish());
    }

    #[test]
    fn test_serde_rejects_off_board() {
        let ok: Square = serde_json::from_str("17").unwrap();
        assert_eq!(ok.get(), 17);
        assert!(serde_json::from_str::<Square>("0").is_err());
        assert!(serde_json::from_str::<Square>("150").is_err());
    }
}
