//! The contents of a single board space, and the players who fill them.

use derive_more::{Display, Error};
use std::convert::TryFrom;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The [`Cell`] holding one of this player's discs.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Dense index for per-player tables: 0 for Black, 1 for White.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse "b"/"black" or "w"/"white", ignoring case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The state of one space. Its discriminant is the base-3 digit used in a [`LineCode`](crate::LineCode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// All cell states, in digit order.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::Black, Cell::White];

    /// The base-3 digit for this state.
    #[inline]
    pub fn digit(self) -> u16 {
        self as u16
    }

    /// Convert a base-3 digit back into a state. Digits above 2 are treated as 2.
    #[inline]
    pub fn from_digit(digit: u16) -> Self {
        match digit {
            0 => Cell::Empty,
            1 => Cell::Black,
            _ => Cell::White,
        }
    }

    /// The player owning a disc here, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Fixture character: 'n' (nothing), 'b' or 'w'.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => 'n',
            Cell::Black => 'b',
            Cell::White => 'w',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid cell character")]
pub struct ParseCellError;

impl TryFrom<char> for Cell {
    type Error = ParseCellError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'n' | '.' => Ok(Cell::Empty),
            'b' => Ok(Cell::Black),
            'w' => Ok(Cell::White),
            _ => Err(ParseCellError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_not() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn player_from_str() {
        assert_eq!("b".parse(), Ok(Player::Black));
        assert_eq!("White".parse(), Ok(Player::White));
        assert_eq!("x".parse::<Player>(), Err(ParsePlayerError));
    }

    #[test]
    fn cell_digits_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_digit(cell.digit()), cell);
        }
    }

    #[test]
    fn cell_from_char() {
        assert_eq!(Cell::try_from('n'), Ok(Cell::Empty));
        assert_eq!(Cell::try_from('b'), Ok(Cell::Black));
        assert_eq!(Cell::try_from('w'), Ok(Cell::White));
        assert_eq!(Cell::try_from('x'), Err(ParseCellError));
        assert_eq!(Cell::Black.to_char(), 'b');
    }
}
