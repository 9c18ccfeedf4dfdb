//! The search-based player.

use crate::config::{ConfigError, SearchConfig};
use crate::eval::ScoreTables;
use crate::search::{self, SearchResult};
use crate::Strategy;
use derive_more::{Display, Error, From};
use std::thread;
use std::time::Instant;
use ternary_othello::{Board, BoardSizeError, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum PlayerError {
    #[display(fmt = "{}", _0)]
    BoardSize(BoardSizeError),
    #[display(fmt = "{}", _0)]
    Config(ConfigError),
}

/// Chooses moves by negamax search to a fixed depth.
pub struct AiPlayer {
    scores: &'static ScoreTables,
    config: SearchConfig,
    evaluations: u64,
}

impl AiPlayer {
    /// A player for `edge_length` boards with the default configuration.
    /// Panics if the board size is unsupported; see [`AiPlayer::try_new`].
    pub fn new(edge_length: usize) -> Self {
        match Self::try_new(edge_length) {
            Ok(player) => player,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(edge_length: usize) -> Result<Self, BoardSizeError> {
        Ok(Self {
            scores: ScoreTables::shared(edge_length)?,
            config: SearchConfig::default(),
            evaluations: 0,
        })
    }

    pub fn with_config(edge_length: usize, config: SearchConfig) -> Result<Self, PlayerError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::try_new(edge_length)?
        })
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.scores.edge_length()
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Leaf evaluations in the most recent search.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Search the position and return the full result, or `None` if the side
    /// to move has no legal move or the board is a different size.
    pub fn search(&mut self, board: &Board) -> Option<SearchResult> {
        self.evaluations = 0;
        if board.edge_length() != self.edge_length() {
            log::warn!(
                "{}x{} player asked to move on a {}x{} board",
                self.edge_length(),
                self.edge_length(),
                board.edge_length(),
                board.edge_length()
            );
            return None;
        }

        let start = Instant::now();
        let result = self.run_search(board);
        if let Some(result) = result {
            self.evaluations = result.evaluations;
        }

        // Pad fast searches; slow ones are never cut short.
        if let Some(rest) = self.config.min_think_time.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }

        result
    }

    #[cfg(feature = "rayon")]
    fn run_search(&self, board: &Board) -> Option<SearchResult> {
        if self.config.parallel {
            search::search_root_parallel(board, self.scores, self.config.depth)
        } else {
            search::search_root(board, self.scores, self.config.depth)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn run_search(&self, board: &Board) -> Option<SearchResult> {
        search::search_root(board, self.scores, self.config.depth)
    }
}

impl Strategy for AiPlayer {
    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.search(board).map(|result| result.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use ternary_othello::Player;

    #[test]
    fn unsupported_sizes_are_rejected() {
        assert!(AiPlayer::try_new(2).is_err());
        assert_eq!(
            AiPlayer::with_config(9, SearchConfig::default()).err(),
            Some(PlayerError::BoardSize(BoardSizeError { edge_length: 9 }))
        );
        assert_eq!(
            AiPlayer::with_config(6, SearchConfig::default().with_depth(0)).err(),
            Some(PlayerError::Config(ConfigError::ZeroDepth))
        );
    }

    #[test]
    #[should_panic(expected = "board edge length")]
    fn new_panics_on_tiny_board() {
        AiPlayer::new(2);
    }

    #[test]
    fn opening_3x3_picks_c1() {
        let mut player = AiPlayer::new(3);
        assert_eq!(player.config().depth, 7);
        assert_eq!(
            player.choose_move(&Board::new(3)),
            Some(Position::from_coords(0, 2))
        );
        assert!(player.evaluations() > 0);
    }

    #[test]
    fn chosen_moves_are_legal() {
        let config = SearchConfig::default().with_depth(3);
        for n in 3..=8 {
            let mut player = AiPlayer::with_config(n, config).unwrap();
            let board = Board::new(n);
            let position = player.choose_move(&board).unwrap();
            assert!(board.legal_moves(Player::Black).contains(position));
        }
    }

    #[test]
    fn no_moves_or_wrong_size_is_none() {
        let mut player = AiPlayer::new(4);
        let stuck: Board = "bbbb/bbbb/bbbb/bbbn".parse().unwrap();
        assert_eq!(player.choose_move(&stuck), None);
        assert_eq!(player.evaluations(), 0);
        assert_eq!(player.choose_move(&Board::new(6)), None);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_config_picks_the_sequential_move() {
        let sequential = SearchConfig::default().with_depth(4);
        let parallel = sequential.with_parallel(true);

        for n in [4, 6, 8] {
            let board = Board::new(n);
            let mut first = AiPlayer::with_config(n, sequential).unwrap();
            let mut second = AiPlayer::with_config(n, parallel).unwrap();
            let expected = first.search(&board).unwrap();
            let actual = second.search(&board).unwrap();

            assert_eq!((actual.best, actual.score), (expected.best, expected.score));
            assert!(second.evaluations() > 0);
        }
    }

    #[test]
    fn min_think_time_pads_the_search() {
        let config = SearchConfig::default()
            .with_depth(1)
            .with_min_think_time(Duration::from_millis(50));
        let mut player = AiPlayer::with_config(4, config).unwrap();

        let start = Instant::now();
        player.choose_move(&Board::new(4)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
