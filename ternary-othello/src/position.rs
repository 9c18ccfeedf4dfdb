//! Code for working with [`Position`]s on the board.

use crate::{MAX_EDGE_LENGTH, MAX_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

const COLUMN_NAMES: &str = "ABCDEFGH";
const ROW_NAMES: &str = "12345678";

/// A space on the board, as row and column coordinates from the upper left.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Construct from row and column coordinates.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < MAX_EDGE_LENGTH && col < MAX_EDGE_LENGTH);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Convert from a row-major cell index on a board with the given edge length.
    #[inline]
    pub fn from_index(index: usize, edge_length: usize) -> Self {
        Self::from_coords(index / edge_length, index % edge_length)
    }

    /// Convert into a row-major cell index on a board with the given edge length.
    #[inline]
    pub fn to_index(self, edge_length: usize) -> usize {
        self.row as usize * edge_length + self.col as usize
    }

    /// Returns whether this position lies on a board with the given edge length.
    #[inline]
    pub fn is_within(self, edge_length: usize) -> bool {
        (self.row as usize) < edge_length && (self.col as usize) < edge_length
    }
}

/// Convert this [`Position`] into string notation ("A4": column letter, then row number).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_NAMES.chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = ROW_NAMES.chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = COLUMN_NAMES.find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || row > MAX_EDGE_LENGTH || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

/// A set of positions on one board, stored as a mask over cell indexes.
/// Iterates in increasing index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveList {
    mask: u64,
    edge_length: u8,
}

impl MoveList {
    /// An empty list for a board with the given edge length.
    #[inline]
    pub fn new(edge_length: usize) -> Self {
        Self {
            mask: 0,
            edge_length: edge_length as u8,
        }
    }

    #[inline]
    pub(crate) fn insert_index(&mut self, index: usize) {
        debug_assert!(index < MAX_SPACES);
        self.mask |= 1 << index;
    }

    /// Returns whether `position` is in this list.
    pub fn contains(self, position: Position) -> bool {
        position.is_within(self.edge_length as usize)
            && self.mask & (1 << position.to_index(self.edge_length as usize)) != 0
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// The cell indexes in this list, in increasing order.
    pub fn indexes(self) -> impl Iterator<Item = usize> {
        let mut mask = self.mask;
        std::iter::from_fn(move || {
            if mask == 0 {
                return None;
            }
            let index = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            Some(index)
        })
    }
}

impl ExactSizeIterator for MoveList {
    fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }
}

impl Iterator for MoveList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }

        let index = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;

        Some(Position::from_index(index, self.edge_length as usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
