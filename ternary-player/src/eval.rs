//! Static evaluation: per-row score tables looked up by row code.
//!
//! A position's score is the sum of one table entry per row, so evaluation reads
//! `N` codes and never decodes a cell. Scores are computed for Black and negated
//! when White is to move, so a positive score always favours the side to move.

use crate::weights;
use once_cell::sync::OnceCell;
use ternary_othello::line::{num_codes, LineCode};
use ternary_othello::{Board, BoardSizeError, Cell, Player, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};

/// Which table leaf positions are scored with. Fixed for a whole search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Positional weights.
    Heuristic,
    /// Disc differential, for when the search can see the end of the game.
    Exact,
}

impl Evaluation {
    /// Use the exact score once fewer cells are empty than the search depth.
    pub fn for_search(board: &Board, depth: u8) -> Self {
        if board.count_empty() < depth as usize {
            Evaluation::Exact
        } else {
            Evaluation::Heuristic
        }
    }
}

/// Row scores for both evaluations, indexed by `row * 3^N + code`.
#[derive(Debug)]
pub struct ScoreTables {
    edge_length: usize,
    heuristic: Vec<i32>,
    exact: Vec<i32>,
}

const NUM_SIZES: usize = MAX_EDGE_LENGTH - MIN_EDGE_LENGTH + 1;

#[allow(clippy::declare_interior_mutable_const)]
const UNINIT: OnceCell<ScoreTables> = OnceCell::new();

static SCORE_TABLES: [OnceCell<ScoreTables>; NUM_SIZES] = [UNINIT; NUM_SIZES];

impl ScoreTables {
    /// Build the tables for a board size from its weight matrix.
    pub fn new(edge_length: usize) -> Result<Self, BoardSizeError> {
        let weights = weights::weights(edge_length).ok_or(BoardSizeError { edge_length })?;
        let codes = num_codes(edge_length);

        let mut heuristic = Vec::with_capacity(edge_length * codes);
        let mut exact = Vec::with_capacity(edge_length * codes);

        for row_weights in weights {
            for value in 0..codes {
                let cells = LineCode::from_raw(value as u16).decode(edge_length);
                let mut score = 0;
                let mut discs = 0;

                for (cell, weight) in cells.iter().zip(row_weights.iter()) {
                    match cell {
                        Cell::Black => {
                            score += weight;
                            discs += 1;
                        }
                        Cell::White => {
                            score -= weight;
                            discs -= 1;
                        }
                        Cell::Empty => {}
                    }
                }

                heuristic.push(score);
                exact.push(discs);
            }
        }

        Ok(Self {
            edge_length,
            heuristic,
            exact,
        })
    }

    /// Get the shared tables for a board size, building them on first use.
    pub fn shared(edge_length: usize) -> Result<&'static Self, BoardSizeError> {
        if !(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length) {
            return Err(BoardSizeError { edge_length });
        }

        SCORE_TABLES[edge_length - MIN_EDGE_LENGTH].get_or_try_init(|| {
            log::debug!("building score tables for {}x{} boards", edge_length, edge_length);
            Self::new(edge_length)
        })
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// The score of one row holding `code`, from Black's point of view.
    #[inline]
    pub fn row_score(&self, evaluation: Evaluation, row: usize, code: LineCode) -> i32 {
        let index = row * num_codes(self.edge_length) + code.value() as usize;
        match evaluation {
            Evaluation::Heuristic => self.heuristic[index],
            Evaluation::Exact => self.exact[index],
        }
    }

    /// Score `board` for the side to move.
    pub fn evaluate(&self, board: &Board, evaluation: Evaluation) -> i32 {
        let score: i32 = (0..self.edge_length)
            .map(|row| self.row_score(evaluation, row, board.row_code(row)))
            .sum();

        match board.turn() {
            Player::Black => score,
            Player::White => -score,
        }
    }
}
