//! Precomputed flip counts for every possible line.
//!
//! For each line code, player, and offset, the table stores how many opposing discs
//! a disc placed at that offset would capture towards lower offsets ("backward") and
//! towards higher offsets ("forward"). A run of opposing discs only counts if it ends
//! in one of the mover's own discs; a run that reaches an empty space or falls off
//! the end of the line captures nothing.

use crate::line::{num_codes, LineCode};
use crate::{Cell, Player};

/// Discs captured in each direction along one line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flips {
    pub backward: u8,
    pub forward: u8,
}

impl Flips {
    #[inline]
    pub fn total(self) -> u8 {
        self.backward + self.forward
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.total() == 0
    }
}

/// Flip counts indexed by (line code, player, offset).
#[derive(Clone, Debug)]
pub struct MobilityTable {
    line_length: usize,
    entries: Vec<Flips>,
}

impl MobilityTable {
    /// Enumerate every line of `line_length` spaces and compute its flips.
    pub fn new(line_length: usize) -> Self {
        let codes = num_codes(line_length);
        let mut entries = vec![Flips::default(); codes * 2 * line_length];

        for value in 0..codes {
            let code = LineCode::from_raw(value as u16);
            let cells = code.decode(line_length);

            for player in [Player::Black, Player::White] {
                let base = Self::base(line_length, code, player);
                for offset in 0..line_length {
                    entries[base + offset] = count_flips(&cells, offset, player);
                }
            }
        }

        Self {
            line_length,
            entries,
        }
    }

    #[inline]
    fn base(line_length: usize, code: LineCode, player: Player) -> usize {
        (code.value() as usize * 2 + player.index()) * line_length
    }

    #[inline]
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Look up the flips for `player` placing at `offset` in a line holding `code`.
    #[inline]
    pub fn flips(&self, code: LineCode, player: Player, offset: usize) -> Flips {
        self.entries[Self::base(self.line_length, code, player) + offset]
    }
}

/// Count the flips for one placement by scanning the decoded line.
fn count_flips(cells: &[Cell], offset: usize, player: Player) -> Flips {
    if !cells[offset].is_empty() {
        return Flips::default();
    }

    Flips {
        backward: bounded_run(cells[..offset].iter().rev(), player),
        forward: bounded_run(cells[offset + 1..].iter(), player),
    }
}

/// Length of the run of opposing discs at the start of `cells`, if the mover's disc closes it.
fn bounded_run<'a>(cells: impl Iterator<Item = &'a Cell>, player: Player) -> u8 {
    let mut run = 0;
    for cell in cells {
        match cell.player() {
            Some(owner) if owner == player => return run,
            Some(_) => run += 1,
            None => return 0,
        }
    }

    // Fell off the end of the line without meeting our own disc.
    0
}
