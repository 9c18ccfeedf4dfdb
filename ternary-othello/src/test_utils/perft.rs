//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking and tuning move generation.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Board;

/// Count the leaves `depth` plies below the starting position of an `edge_length` board.
/// A pass counts as a ply; the game ends after two passes in a row.
pub fn run_perft(edge_length: usize, depth: u64) -> u64 {
    leaves_below(Board::new(edge_length), depth, false)
}

fn leaves_below(board: Board, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let player = board.turn();
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = board;
        next.switch_turn();
        return leaves_below(next, depth - 1, true);
    }

    moves
        .indexes()
        .map(|cell| {
            let mut next = board;
            next.place_unchecked(cell, player);
            next.switch_turn();
            leaves_below(next, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(8, 4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(8, 5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(8, 6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(8, 7), 55092);
}

// The 3x3 game ends quickly, so deep counts stay stable once every line has finished.
#[test]
fn perft_3x3_saturates() {
    assert_eq!(run_perft(3, 1), 2);
    assert_eq!(run_perft(3, 40), run_perft(3, 41));
}
