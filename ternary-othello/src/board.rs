//! The indexed board: one [`LineCode`] per line, kept consistent on every move.
//!
//! A cell's state is stored redundantly in every line that runs through it. All
//! writes go through `set_cell`, which updates each of those lines, so
//! reading a cell through any of its lines always agrees.

use crate::line::LineCode;
use crate::tables::{self, Tables};
use crate::topology::{LineId, Topology};
use crate::{Cell, MoveList, Player, Position, MAX_EDGE_LENGTH, MAX_LINES, MIN_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt;

/// The board edge length is outside the supported range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(
    fmt = "board edge length must be between {} and {}, got {}",
    MIN_EDGE_LENGTH,
    MAX_EDGE_LENGTH,
    edge_length
)]
pub struct BoardSizeError {
    pub edge_length: usize,
}

/// A placement that is off the board, on an occupied space, or captures nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "you can't place there")]
pub struct IllegalMoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unsupported board size")]
    InvalidSize,
    #[display(fmt = "board rows must all have one character per column")]
    NotSquare,
    #[display(fmt = "invalid cell character")]
    InvalidCell,
}

impl From<BoardSizeError> for ParseBoardError {
    fn from(_: BoardSizeError) -> Self {
        ParseBoardError::InvalidSize
    }
}

/// A board position: the line codes for every line, and the player to move.
///
/// Boards are small `Copy` values. Search code explores hypothetical moves by
/// copying a board and mutating the copy.
#[derive(Clone, Copy)]
pub struct Board {
    tables: &'static Tables,
    lines: [LineCode; MAX_LINES],
    turn: Player,
}

impl Board {
    /// Create a board in the starting position.
    /// Panics if the edge length is not supported; see [`Board::try_new`].
    pub fn new(edge_length: usize) -> Self {
        match Self::try_new(edge_length) {
            Ok(board) => board,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a board in the starting position: with `m = n / 2 - 1`, Black holds
    /// `(m, m)` and `(m + 1, m + 1)`, White holds `(m, m + 1)` and `(m + 1, m)`.
    /// Black moves first.
    pub fn try_new(edge_length: usize) -> Result<Self, BoardSizeError> {
        let mut board = Self::empty(edge_length)?;

        let m = edge_length / 2 - 1;
        board.set_cell(board.index(m, m), Player::Black);
        board.set_cell(board.index(m + 1, m + 1), Player::Black);
        board.set_cell(board.index(m, m + 1), Player::White);
        board.set_cell(board.index(m + 1, m), Player::White);

        Ok(board)
    }

    /// Create a board with no discs, Black to move.
    pub fn empty(edge_length: usize) -> Result<Self, BoardSizeError> {
        if !(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length) {
            return Err(BoardSizeError { edge_length });
        }

        Ok(Self {
            tables: tables::tables(edge_length),
            lines: [LineCode::EMPTY; MAX_LINES],
            turn: Player::Black,
        })
    }

    /// Build a board directly from a grid of cells, without checking that the
    /// position is reachable. The board size is the number of rows. Black moves.
    pub fn from_cells<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ParseBoardError> {
        let mut board = Self::empty(rows.len())?;
        board.load_cells(rows)?;
        Ok(board)
    }

    /// Reset every line, then write each non-empty cell of `rows` into every line it belongs to.
    pub fn load_cells<R: AsRef<[Cell]>>(&mut self, rows: &[R]) -> Result<(), ParseBoardError> {
        let n = self.edge_length();
        if rows.len() != n || rows.iter().any(|row| row.as_ref().len() != n) {
            return Err(ParseBoardError::NotSquare);
        }

        self.lines = [LineCode::EMPTY; MAX_LINES];
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.as_ref().iter().enumerate() {
                if let Some(player) = cell.player() {
                    self.set_cell(row * n + col, player);
                }
            }
        }

        Ok(())
    }

    /// Set the player to move.
    #[inline]
    pub fn with_turn(mut self, player: Player) -> Self {
        self.turn = player;
        self
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.tables.topology.edge_length()
    }

    #[inline]
    pub fn num_spaces(&self) -> usize {
        self.tables.topology.num_spaces()
    }

    #[inline]
    pub fn topology(&self) -> &'static Topology {
        &self.tables.topology
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Hand the move to the other player. This is also how a pass is made.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.edge_length() + col
    }

    /// The current code of one line.
    #[inline]
    pub fn line_code(&self, line: LineId) -> LineCode {
        self.lines[line.index()]
    }

    /// The current code of row `row`.
    #[inline]
    pub fn row_code(&self, row: usize) -> LineCode {
        self.line_code(self.tables.topology.row(row))
    }

    /// The state of the cell with row-major index `cell`.
    #[inline]
    pub fn cell(&self, cell: usize) -> Cell {
        let n = self.edge_length();
        self.row_code(cell / n).get(cell % n)
    }

    /// The state of the space at `position`.
    #[inline]
    pub fn cell_state(&self, position: Position) -> Cell {
        self.row_code(position.row as usize).get(position.col as usize)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.num_spaces()).map(move |cell| self.cell(cell))
    }

    /// Returns whether `player` may place a disc at `cell`: the sum of flips over every
    /// line through the cell is positive. Occupied cells have no flips in any line.
    /// `cell` must be below [`Board::num_spaces`].
    #[inline]
    pub fn is_legal(&self, cell: usize, player: Player) -> bool {
        debug_assert!(
            cell < self.num_spaces(),
            "cell {} is off a board with {} spaces",
            cell,
            self.num_spaces()
        );
        let mobility = &self.tables.mobility;
        self.tables
            .topology
            .slots(cell)
            .iter()
            .map(|slot| {
                mobility
                    .flips(self.lines[slot.line.index()], player, slot.offset as usize)
                    .total()
            })
            .sum::<u8>()
            > 0
    }

    /// Returns whether `player` has any legal placement.
    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..self.num_spaces()).any(|cell| self.is_legal(cell, player))
    }

    /// Get the legal placements for `player`.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new(self.edge_length());
        for cell in (0..self.num_spaces()).filter(|&cell| self.is_legal(cell, player)) {
            moves.insert_index(cell);
        }
        moves
    }

    /// Place a disc for the player to move, then hand the move to the opponent.
    /// On error the board is left unchanged.
    pub fn place(&mut self, position: Position) -> Result<(), IllegalMoveError> {
        if !position.is_within(self.edge_length()) {
            return Err(IllegalMoveError);
        }

        let cell = position.to_index(self.edge_length());
        if !self.is_legal(cell, self.turn) {
            return Err(IllegalMoveError);
        }

        self.place_unchecked(cell, self.turn);
        self.switch_turn();
        Ok(())
    }

    /// Place a disc for `player` at `cell` and flip every captured disc, without
    /// checking legality or changing the turn. Callers must know the move is legal.
    pub fn place_unchecked(&mut self, cell: usize, player: Player) {
        let tables: &'static Tables = self.tables;
        let n = tables.topology.edge_length();

        // Flips are looked up in the codes from before this move: flipping along one
        // line rewrites the codes of the other lines through the flipped cells.
        let before = self.lines;

        for slot in tables.topology.slots(cell) {
            let flips = tables.mobility.flips(
                before[slot.line.index()],
                player,
                slot.offset as usize,
            );
            let stride = slot.kind.stride(n);

            for step in -(flips.backward as isize)..=flips.forward as isize {
                self.set_cell((cell as isize + stride * step) as usize, player);
            }
        }
    }

    /// Put one of `player`'s discs at `cell`, in every line that contains it.
    #[inline]
    fn set_cell(&mut self, cell: usize, player: Player) {
        let tables: &'static Tables = self.tables;
        for slot in tables.topology.slots(cell) {
            self.lines[slot.line.index()].set(slot.offset as usize, player);
        }
    }

    /// Count discs as (black, white). Each cell is read once, through its row.
    pub fn count(&self) -> (usize, usize) {
        let n = self.edge_length();
        let mut black = 0;
        let mut white = 0;

        for row in 0..n {
            let code = self.row_code(row);
            for col in 0..n {
                match code.get(col) {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty => {}
                }
            }
        }

        (black, white)
    }

    /// Count the empty spaces.
    pub fn count_empty(&self) -> usize {
        let (black, white) = self.count();
        self.num_spaces() - black - white
    }

    /// Discs of `player` minus discs of the opponent.
    pub fn disc_difference(&self, player: Player) -> i32 {
        let (black, white) = self.count();
        let difference = black as i32 - white as i32;
        match player {
            Player::Black => difference,
            Player::White => -difference,
        }
    }

    /// The board as fixture rows of 'n'/'b'/'w', separated by '/'.
    pub fn to_fixture_string(&self) -> String {
        let n = self.edge_length();
        let chars: Vec<char> = self.cells().map(Cell::to_char).collect();
        chars
            .chunks(n)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<String>>()
            .join("/")
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        let num_lines = self.tables.topology.num_lines();
        self.edge_length() == other.edge_length()
            && self.turn == other.turn
            && self.lines[..num_lines] == other.lines[..num_lines]
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("edge_length", &self.edge_length())
            .field("turn", &self.turn)
            .field("cells", &self.to_fixture_string())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.edge_length();

        write!(f, "  ")?;
        for col in "ABCDEFGH".chars().take(n) {
            write!(f, " {}", col)?;
        }

        for row in 0..n {
            write!(f, "\n {}", row + 1)?;
            for col in 0..n {
                let symbol = match self.cell(self.index(row, col)) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {}", symbol)?;
            }
        }

        Ok(())
    }
}

/// Parse fixture rows of 'n' (or '.'), 'b' and 'w', separated by whitespace or '/'.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.chars()
                    .map(Cell::try_from)
                    .collect::<Result<Vec<Cell>, _>>()
                    .or(Err(ParseBoardError::InvalidCell))
            })
            .collect::<Result<Vec<Vec<Cell>>, _>>()?;

        Self::from_cells(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(board: &Board) -> Vec<u16> {
        (0..board.topology().num_lines())
            .map(|line| board.line_code(LineId::from(line as u8)).value())
            .collect()
    }

    #[test]
    fn unsupported_sizes_are_rejected() {
        assert_eq!(Board::try_new(2), Err(BoardSizeError { edge_length: 2 }));
        assert_eq!(Board::try_new(0), Err(BoardSizeError { edge_length: 0 }));
        assert_eq!(Board::try_new(9), Err(BoardSizeError { edge_length: 9 }));
        assert!(Board::try_new(3).is_ok());
        assert!(Board::try_new(8).is_ok());
    }

    #[test]
    #[should_panic(expected = "board edge length")]
    fn new_panics_on_tiny_board() {
        Board::new(2);
    }

    #[test]
    fn starting_lines_3x3() {
        let board = Board::new(3);
        // |1|2|0|
        // |2|1|0|
        // |0|0|0|
        assert_eq!(codes(&board), vec![7, 5, 0, 7, 5, 0, 4, 3]);
        assert_eq!(board.turn(), Player::Black);
    }

    #[test]
    fn place_unchecked_updates_every_line() {
        let mut board = Board::new(3);

        board.place_unchecked(2, Player::Black);
        // |1|1|1|
        // |2|1|0|
        // |0|0|0|
        assert_eq!(codes(&board), vec![13, 5, 0, 7, 4, 1, 4, 4]);

        board.place_unchecked(5, Player::White);
        // |1|1|1|
        // |2|2|2|
        // |0|0|0|
        assert_eq!(codes(&board), vec![13, 26, 0, 7, 7, 7, 7, 7]);

        // The turn is never touched by unchecked placement.
        assert_eq!(board.turn(), Player::Black);
    }

    #[test]
    #[should_panic]
    fn is_legal_rejects_cells_off_the_board() {
        Board::new(3).is_legal(9, Player::Black);
    }

    #[test]
    fn opening_3x3() {
        let board = Board::new(3);
        let legal: Vec<usize> = (0..9).filter(|&c| board.is_legal(c, Player::Black)).collect();
        assert_eq!(legal, vec![2, 6]);

        let legal: Vec<usize> = (0..9).filter(|&c| board.is_legal(c, Player::White)).collect();
        assert_eq!(legal, vec![5, 7]);
    }

    #[test]
    fn place_flips_one_disc() {
        let mut board = Board::new(3);
        board.place(Position::from_coords(0, 2)).unwrap();

        assert_eq!(board.cell_state(Position::from_coords(0, 1)), Cell::Black);
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.turn(), Player::White);
    }

    #[test]
    fn illegal_place_leaves_board_unchanged() {
        let mut board = Board::new(4);
        let before = board;

        // Occupied.
        assert_eq!(board.place(Position::from_coords(1, 1)), Err(IllegalMoveError));
        // Empty, but captures nothing.
        assert_eq!(board.place(Position::from_coords(0, 0)), Err(IllegalMoveError));
        // Off the board.
        assert_eq!(board.place(Position::from_coords(5, 0)), Err(IllegalMoveError));

        assert_eq!(board, before);
    }

    #[test]
    fn from_cells_matches_grid() {
        let board: Board = "nnn/bbb/www".parse().unwrap();
        assert_eq!(board.to_fixture_string(), "nnn/bbb/www");
        assert_eq!(board.count(), (3, 3));
        assert_eq!(board.count_empty(), 3);
        assert_eq!(board.cell(4), Cell::Black);
        // Column 0 reads |0|1|2| = 3 + 18.
        assert_eq!(board.line_code(LineId::from(3)).value(), 21);
    }

    #[test]
    fn load_cells_resets_lines() {
        let mut board = Board::new(4);
        let rows = vec![vec![Cell::Empty; 4]; 4];
        board.load_cells(&rows).unwrap();
        assert_eq!(board.count(), (0, 0));
        assert!(codes(&board).iter().all(|&code| code == 0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("nn/nn".parse::<Board>(), Err(ParseBoardError::InvalidSize));
        assert_eq!("nnn/nn/nnn".parse::<Board>(), Err(ParseBoardError::NotSquare));
        assert_eq!("nnn/nxn/nnn".parse::<Board>(), Err(ParseBoardError::InvalidCell));
    }

    #[test]
    fn filled_board_has_no_moves() {
        let board: Board = "bbbb/bbbb/bbbb/bbbn".parse().unwrap();
        assert!(!board.has_legal_move(Player::Black));
        assert!(!board.has_legal_move(Player::White));
        assert_eq!(board.count(), (15, 0));
        assert_eq!(board.disc_difference(Player::White), -15);
        assert!(board.legal_moves(Player::Black).is_empty());
    }

    #[test]
    fn starting_position_8x8() {
        let board = Board::new(8);
        let moves: Vec<String> = board
            .legal_moves(Player::Black)
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(moves, vec!["E3", "F4", "C5", "D6"]);
    }

    #[test]
    fn display() {
        let board = Board::new(4);
        assert_eq!(
            board.to_string(),
            "   A B C D\n 1 . . . .\n 2 . B W .\n 3 . W B .\n 4 . . . ."
        );
    }
}
