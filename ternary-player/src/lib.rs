//! Move selection for [`ternary_othello`] boards.
//!
//! [`AiPlayer`] runs a depth-limited negamax search over per-row score tables,
//! switching to an exact disc count when the search can reach the end of the
//! game. [`RandomPlayer`] picks any legal move. Both implement [`Strategy`],
//! which [`play_game`] uses to play a game to the end.

mod ai;
mod config;
pub mod eval;
mod random;
pub mod search;
mod weights;

pub use ai::{AiPlayer, PlayerError};
pub use config::{ConfigError, SearchConfig, DEFAULT_DEPTH};
pub use eval::{Evaluation, ScoreTables};
pub use random::RandomPlayer;

use ternary_othello::{Board, Game, IllegalMoveError, Move, Player, Position};

/// Something that can pick a move for the side to move.
pub trait Strategy {
    /// Choose a placement for `board.turn()`, or `None` if there is none.
    fn choose_move(&mut self, board: &Board) -> Option<Position>;
}

/// Play `game` to the end, asking `black` and `white` for their moves and
/// passing for whoever cannot move. Fails if a strategy picks an illegal move.
pub fn play_game(
    mut game: Game,
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
) -> Result<Game, IllegalMoveError> {
    while !game.is_finished() {
        let strategy: &mut dyn Strategy = match game.active_player() {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let mv = if game.legal_moves().is_empty() {
            Move::Pass
        } else {
            strategy
                .choose_move(&game.board)
                .map(Move::Piece)
                .ok_or(IllegalMoveError)?
        };

        log::trace!("{} plays {}", game.active_player(), mv);
        game = game.apply_move(mv)?;
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the lowest legal cell.
    struct FirstMove;

    impl Strategy for FirstMove {
        fn choose_move(&mut self, board: &Board) -> Option<Position> {
            board.legal_moves(board.turn()).next()
        }
    }

    /// Never has an answer.
    struct Resign;

    impl Strategy for Resign {
        fn choose_move(&mut self, _: &Board) -> Option<Position> {
            None
        }
    }

    #[test]
    fn games_run_to_completion() {
        for n in 3..=8 {
            let end = play_game(Game::new(n).unwrap(), &mut FirstMove, &mut FirstMove).unwrap();
            assert!(end.is_finished());
            let (black, white) = end.board.count();
            assert!(black + white <= n * n);
        }
    }

    #[test]
    fn finished_game_is_returned_unchanged() {
        let board: Board = "bbbb/bbbb/bbbb/bbbn".parse().unwrap();
        let game = Game::from_board(board);
        assert_eq!(play_game(game, &mut Resign, &mut Resign), Ok(game));
    }

    #[test]
    fn missing_move_is_an_error() {
        let game = Game::new(4).unwrap();
        assert_eq!(
            play_game(game, &mut Resign, &mut FirstMove),
            Err(IllegalMoveError)
        );
    }
}
