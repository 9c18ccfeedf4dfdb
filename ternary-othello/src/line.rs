//! The line codec: one row, column or diagonal packed into a base-3 number.
//!
//! A line of `n` spaces with states `s(0) .. s(n-1)` is encoded as
//! `s(0) * 3^0 + s(1) * 3^1 + ... + s(n-1) * 3^(n-1)`, using the digits of [`Cell`].
//! The encoding is a bijection between line contents and `0 .. 3^n`, so a code can
//! directly index a lookup table, and a single space can be read or rewritten in O(1).

use crate::{Cell, Player, MAX_EDGE_LENGTH};
use arrayvec::ArrayVec;
use derive_more::Into;

/// Powers of three, up to the number of codes for the longest line.
pub const POW3: [u16; MAX_EDGE_LENGTH + 1] = [1, 3, 9, 27, 81, 243, 729, 2187, 6561];

/// The number of distinct codes for a line of `len` spaces.
#[inline]
pub fn num_codes(len: usize) -> usize {
    POW3[len] as usize
}

/// The encoded contents of one line. The line's length is not stored: all lines
/// on a board share the board's edge length, and spaces past the end of a shorter
/// line always read as [`Cell::Empty`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Into)]
pub struct LineCode(u16);

impl LineCode {
    /// A line with no discs.
    pub const EMPTY: Self = Self(0);

    /// Wrap a raw code. The caller guarantees it is below `3^n` for the intended length.
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// The raw base-3 value.
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Encode a whole line from scratch.
    pub fn encode(cells: &[Cell]) -> Self {
        assert!(cells.len() <= MAX_EDGE_LENGTH);
        let value = cells
            .iter()
            .zip(POW3.iter())
            .map(|(cell, pow)| cell.digit() * pow)
            .sum();
        Self(value)
    }

    /// Decode the first `len` spaces of this line.
    pub fn decode(self, len: usize) -> ArrayVec<Cell, MAX_EDGE_LENGTH> {
        (0..len).map(|offset| self.get(offset)).collect()
    }

    /// Read the state at `offset`.
    #[inline]
    pub fn get(self, offset: usize) -> Cell {
        Cell::from_digit(self.0 / POW3[offset] % 3)
    }

    /// Put one of `player`'s discs at `offset`, whatever was there before.
    /// Used both for placing a new disc and for flipping an existing one.
    #[inline]
    pub fn set(&mut self, offset: usize, player: Player) {
        let current = self.get(offset).digit();
        let target = player.cell().digit();
        // Add first so the intermediate value never underflows.
        self.0 = self.0 + target * POW3[offset] - current * POW3[offset];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_place_and_flip() {
        let mut code = LineCode::EMPTY;

        code.set(0, Player::Black);
        assert_eq!(code.value(), 1);

        code.set(0, Player::White);
        assert_eq!(code.value(), 2);

        code.set(2, Player::Black);
        assert_eq!(code.value(), 11);

        code.set(2, Player::White);
        assert_eq!(code.value(), 20);
    }

    #[test]
    fn set_is_idempotent() {
        let mut code = LineCode::EMPTY;
        code.set(3, Player::White);
        code.set(3, Player::White);
        assert_eq!(code.value(), 2 * 27);
    }

    #[test]
    fn get_reads_digits() {
        // |1|2|0|
        let code = LineCode::from_raw(7);
        assert_eq!(code.get(0), Cell::Black);
        assert_eq!(code.get(1), Cell::White);
        assert_eq!(code.get(2), Cell::Empty);
    }

    #[test]
    fn encode_decode() {
        let cells = [Cell::Empty, Cell::White, Cell::Black, Cell::Empty];
        let code = LineCode::encode(&cells);
        assert_eq!(code.value(), 2 * 3 + 9);
        assert_eq!(code.decode(4).as_slice(), &cells);
    }

    #[test]
    fn max_code_fits() {
        let full = [Cell::White; MAX_EDGE_LENGTH];
        assert_eq!(
            LineCode::encode(&full).value() as usize,
            num_codes(MAX_EDGE_LENGTH) - 1
        );
    }
}
