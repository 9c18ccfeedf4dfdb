//! Depth-limited negamax search with alpha-beta pruning.
//!
//! Every search node works on its own copy of the board: children are made by
//! copying, placing, and handing the turn over. A pass does not cost a ply, and
//! two passes in a row end the game, so the leaf is scored immediately.

use crate::eval::{Evaluation, ScoreTables};
use ternary_othello::{Board, Position};

/// Larger than any reachable score. Negating it never overflows.
pub const INFINITY: i32 = i32::MAX;

/// The outcome of a search from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Position,
    /// Score of `best` for the side to move.
    pub score: i32,
    /// Leaf evaluations performed.
    pub evaluations: u64,
}

/// Runs searches with one fixed evaluation and counts leaf evaluations.
pub struct Searcher<'a> {
    scores: &'a ScoreTables,
    evaluation: Evaluation,
    evaluations: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(scores: &'a ScoreTables, evaluation: Evaluation) -> Self {
        Self {
            scores,
            evaluation,
            evaluations: 0,
        }
    }

    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> i32 {
        self.evaluations += 1;
        self.scores.evaluate(board, self.evaluation)
    }

    /// Fail-soft alpha-beta search. Returns the score for the side to move,
    /// exact when it lies strictly inside `(alpha, beta)`.
    pub fn negamax(&mut self, board: Board, depth: u8, mut alpha: i32, beta: i32, passed: bool) -> i32 {
        if depth == 0 {
            return self.leaf(&board);
        }

        let player = board.turn();
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            // Both players passed: game is over
            if passed {
                return self.leaf(&board);
            }

            let mut next = board;
            next.switch_turn();
            return -self.negamax(next, depth, -beta, -alpha, true);
        }

        let mut best = -INFINITY;
        for cell in moves.indexes() {
            let mut next = board;
            next.place_unchecked(cell, player);
            next.switch_turn();

            let score = -self.negamax(next, depth - 1, -beta, -alpha, false);

            // Fail high: the opponent will never allow this line.
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
            if score > best {
                best = score;
            }
        }

        best
    }

    /// Plain minimax over the same tree as [`Searcher::negamax`], without pruning.
    pub fn minimax(&mut self, board: Board, depth: u8, passed: bool) -> i32 {
        if depth == 0 {
            return self.leaf(&board);
        }

        let player = board.turn();
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            if passed {
                return self.leaf(&board);
            }

            let mut next = board;
            next.switch_turn();
            return -self.minimax(next, depth, true);
        }

        let mut best = -INFINITY;
        for cell in moves.indexes() {
            let mut next = board;
            next.place_unchecked(cell, player);
            next.switch_turn();
            best = best.max(-self.minimax(next, depth - 1, false));
        }

        best
    }
}

/// Search every legal move of the side to move to `depth` plies and pick the
/// best. Ties go to the lowest cell index. Returns `None` if there is no legal move.
pub fn search_root(board: &Board, scores: &ScoreTables, depth: u8) -> Option<SearchResult> {
    debug_assert!(depth > 0);

    let player = board.turn();
    let mut searcher = Searcher::new(scores, Evaluation::for_search(board, depth));
    let mut alpha = -INFINITY;
    let mut best = None;

    for cell in board.legal_moves(player).indexes() {
        let mut next = *board;
        next.place_unchecked(cell, player);
        next.switch_turn();

        let score = -searcher.negamax(next, depth.saturating_sub(1), -INFINITY, -alpha, false);
        log::debug!("{} scores {}", Position::from_index(cell, board.edge_length()), score);

        if best.is_none() || score > alpha {
            best = Some(cell);
            alpha = score;
        }
    }

    let result = best.map(|cell| SearchResult {
        best: Position::from_index(cell, board.edge_length()),
        score: alpha,
        evaluations: searcher.evaluations(),
    });
    log_result(result);
    result
}

/// Search each root move on its own thread with a full window. Picks the same
/// move as [`search_root`], at the cost of more evaluations.
#[cfg(feature = "rayon")]
pub fn search_root_parallel(board: &Board, scores: &ScoreTables, depth: u8) -> Option<SearchResult> {
    use rayon::prelude::*;

    debug_assert!(depth > 0);

    let player = board.turn();
    let evaluation = Evaluation::for_search(board, depth);
    let cells: Vec<usize> = board.legal_moves(player).indexes().collect();

    let scored: Vec<(usize, i32, u64)> = cells
        .into_par_iter()
        .map(|cell| {
            let mut next = *board;
            next.place_unchecked(cell, player);
            next.switch_turn();

            let mut searcher = Searcher::new(scores, evaluation);
            let score = -searcher.negamax(next, depth.saturating_sub(1), -INFINITY, INFINITY, false);
            (cell, score, searcher.evaluations())
        })
        .collect();

    let evaluations = scored.iter().map(|&(_, _, evaluations)| evaluations).sum();
    let mut best: Option<(usize, i32)> = None;
    for &(cell, score, _) in &scored {
        log::debug!("{} scores {}", Position::from_index(cell, board.edge_length()), score);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }

    let result = best.map(|(cell, score)| SearchResult {
        best: Position::from_index(cell, board.edge_length()),
        score,
        evaluations,
    });
    log_result(result);
    result
}

fn log_result(result: Option<SearchResult>) {
    match result {
        Some(result) => log::debug!(
            "best {} scores {} after {} evaluations",
            result.best,
            result.score,
            result.evaluations
        ),
        None => log::trace!("no legal move at the root"),
    }
}
