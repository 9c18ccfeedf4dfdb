//! A plain grid implementation of the rules, scanning all 8 directions from a cell.
//! Slow, but simple enough to check the indexed [`Board`] against.

use crate::{Board, Cell, Player};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaiveBoard {
    edge_length: usize,
    cells: Vec<Cell>,
}

impl NaiveBoard {
    /// Copy the cells of an indexed board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            edge_length: board.edge_length(),
            cells: board.cells().collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells `player` would capture by placing at `cell`, in no particular order.
    pub fn flips(&self, cell: usize, player: Player) -> Vec<usize> {
        if !self.cells[cell].is_empty() {
            return Vec::new();
        }

        let n = self.edge_length as isize;
        let (row, col) = ((cell / self.edge_length) as isize, (cell % self.edge_length) as isize);
        let mut captured = Vec::new();

        for (row_step, col_step) in DIRECTIONS.iter() {
            let mut run = Vec::new();
            let (mut r, mut c) = (row + row_step, col + col_step);

            while r >= 0 && r < n && c >= 0 && c < n {
                let index = (r * n + c) as usize;
                match self.cells[index].player() {
                    Some(owner) if owner == player => {
                        captured.append(&mut run);
                        break;
                    }
                    Some(_) => run.push(index),
                    None => break,
                }
                r += row_step;
                c += col_step;
            }
        }

        captured
    }

    pub fn is_legal(&self, cell: usize, player: Player) -> bool {
        !self.flips(cell, player).is_empty()
    }

    /// Place and flip. Panics if the move is illegal.
    pub fn place(&mut self, cell: usize, player: Player) {
        let flips = self.flips(cell, player);
        assert!(!flips.is_empty(), "illegal move at {}", cell);
        for index in flips {
            self.cells[index] = player.cell();
        }
        self.cells[cell] = player.cell();
    }
}
