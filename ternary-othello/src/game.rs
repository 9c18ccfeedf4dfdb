//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but search code
//! should work on [`Board`] directly.

use crate::{Board, BoardSizeError, IllegalMoveError, MoveList, Player, Position};
use std::fmt;

/// An action in an Othello game: pass or place a disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Piece(Position),
    Pass,
}

impl From<Position> for Move {
    fn from(position: Position) -> Self {
        Self::Piece(position)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(position) => fmt::Display::fmt(position, f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    just_passed: bool,
}

impl Game {
    /// Start a game on a board with the given edge length.
    pub fn new(edge_length: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::from_board(Board::try_new(edge_length)?))
    }

    /// Continue a game from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            just_passed: false,
        }
    }

    /// The player to move.
    #[inline]
    pub fn active_player(&self) -> Player {
        self.board.turn()
    }

    /// Whether the previous action was a pass.
    #[inline]
    pub fn just_passed(&self) -> bool {
        self.just_passed
    }

    /// Get the placements available to the active player.
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.active_player())
    }

    /// Apply an action for the active player. Passing is only allowed when
    /// no placement is legal. On error the game is unchanged.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        let mut next = self;
        match mv {
            Move::Piece(position) => {
                next.board.place(position)?;
                next.just_passed = false;
            }
            Move::Pass => {
                if self.board.has_legal_move(self.active_player()) {
                    return Err(IllegalMoveError);
                }
                next.board.switch_turn();
                next.just_passed = true;
            }
        }
        Ok(next)
    }

    /// The game is over when neither player can place a disc.
    pub fn is_finished(&self) -> bool {
        !self.board.has_legal_move(Player::Black) && !self.board.has_legal_move(Player::White)
    }

    /// The player with more discs, or `None` for a draw. Only meaningful once the game is finished.
    pub fn winner(&self) -> Option<Player> {
        let difference = self.board.disc_difference(Player::Black);
        if difference > 0 {
            Some(Player::Black)
        } else if difference < 0 {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.is_finished() {
            let (black, white) = self.board.count();
            write!(f, "Black {}, White {}: ", black, white)?;
            match self.winner() {
                Some(player) => write!(f, "{} won", player)?,
                None => f.write_str("draw")?,
            }
        } else {
            write!(f, "{} to move", self.active_player())?;
        }
        if self.just_passed {
            f.write_str(" (last move was a pass)")?;
        }
        Ok(())
    }
}
