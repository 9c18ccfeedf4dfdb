//! Checks the indexed board against the naive 8-direction implementation.

use proptest::prelude::*;
use ternary_othello::line::{num_codes, LineCode};
use ternary_othello::test_utils::naive::NaiveBoard;
use ternary_othello::{Board, Cell, Player, Position};

/// Every line's code must agree with the cells it runs through.
fn assert_lines_consistent(board: &Board) {
    let topology = board.topology();
    for (id, line) in topology.lines() {
        let cells: Vec<Cell> = line.cells.iter().map(|&c| board.cell(c as usize)).collect();
        assert_eq!(board.line_code(id), LineCode::encode(&cells), "line {}", id);
    }
}

/// Play `choices` from the opening, picking legal moves by index and passing when needed.
fn playout(edge_length: usize, choices: &[usize]) -> Vec<Board> {
    let mut board = Board::new(edge_length);
    let mut boards = vec![board];

    for &choice in choices {
        let player = board.turn();
        let moves: Vec<usize> = board.legal_moves(player).indexes().collect();
        if moves.is_empty() {
            if !board.has_legal_move(!player) {
                break;
            }
            board.switch_turn();
            continue;
        }

        let cell = moves[choice % moves.len()];
        board
            .place(Position::from_index(cell, edge_length))
            .expect("listed move must be legal");
        boards.push(board);
    }

    boards
}

fn check_against_naive(board: &Board) {
    let naive = NaiveBoard::from_board(board);

    for player in [Player::Black, Player::White] {
        for cell in 0..board.num_spaces() {
            assert_eq!(
                board.is_legal(cell, player),
                naive.is_legal(cell, player),
                "legality of {} for {} on {:?}",
                cell,
                player,
                board
            );

            if naive.is_legal(cell, player) {
                let mut indexed = *board;
                indexed.place_unchecked(cell, player);
                let mut expected = naive.clone();
                expected.place(cell, player);

                assert_eq!(NaiveBoard::from_board(&indexed), expected);
                assert_lines_consistent(&indexed);
            }
        }
    }
}

#[test]
fn opening_3x3_scenario() {
    let mut board = Board::new(3);
    let legal: Vec<Position> = board.legal_moves(Player::Black).collect();
    assert_eq!(
        legal,
        vec![Position::from_coords(0, 2), Position::from_coords(2, 0)]
    );

    let before = NaiveBoard::from_board(&board);
    board.place(Position::from_coords(2, 0)).unwrap();
    let after = NaiveBoard::from_board(&board);

    let changed: Vec<usize> = (0..9)
        .filter(|&c| before.cells()[c] != after.cells()[c])
        .collect();
    // The new disc and exactly one flipped disc.
    assert_eq!(changed, vec![3, 6]);
}

#[test]
fn every_line_codes_consistently_after_opening() {
    for n in 3..=8 {
        assert_lines_consistent(&Board::new(n));
    }
}

#[test]
fn mobility_matches_naive_on_single_lines() {
    // Lay each code out along the first row of an otherwise empty board.
    for n in 3..=6 {
        for value in 0..num_codes(n) {
            let code = LineCode::from_raw(value as u16);
            let mut rows = vec![vec![Cell::Empty; n]; n];
            rows[0] = code.decode(n).to_vec();
            let board = Board::from_cells(&rows).unwrap();
            assert_eq!(board.row_code(0), code);

            let naive = NaiveBoard::from_board(&board);
            for player in [Player::Black, Player::White] {
                for col in 0..n {
                    assert_eq!(board.is_legal(col, player), naive.is_legal(col, player));
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn codec_round_trips(cells in prop::collection::vec(0u16..3, 0..=8)) {
        let cells: Vec<Cell> = cells.into_iter().map(Cell::from_digit).collect();
        let code = LineCode::encode(&cells);
        prop_assert!((code.value() as usize) < num_codes(cells.len()));
        prop_assert_eq!(code.decode(cells.len()).to_vec(), cells);
    }

    #[test]
    fn codec_set_matches_full_encode(
        writes in prop::collection::vec((0usize..8, prop::bool::ANY), 0..40)
    ) {
        let mut cells = vec![Cell::Empty; 8];
        let mut code = LineCode::EMPTY;

        for (offset, black) in writes {
            let player = if black { Player::Black } else { Player::White };
            code.set(offset, player);
            cells[offset] = player.cell();
            prop_assert_eq!(code, LineCode::encode(&cells));
        }
    }

    #[test]
    fn playouts_match_naive(
        edge_length in 3usize..=8,
        choices in prop::collection::vec(0usize..64, 0..40),
    ) {
        for board in playout(edge_length, &choices) {
            assert_lines_consistent(&board);
            check_against_naive(&board);

            let naive = NaiveBoard::from_board(&board);
            let black = naive.cells().iter().filter(|&&c| c == Cell::Black).count();
            let white = naive.cells().iter().filter(|&&c| c == Cell::White).count();
            prop_assert_eq!(board.count(), (black, white));
        }
    }
}
