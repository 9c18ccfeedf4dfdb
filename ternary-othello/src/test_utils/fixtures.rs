//! Utilities for loading test positions from text files.
//!
//! Each non-empty line holds one position: the board rows joined by '/', using
//! 'n' for an empty space, 'b' for black and 'w' for white, then the player to
//! move ("b" or "w"). Lines starting with '#' are comments.
//!
//! ```text
//! # 3x3 opening, Black to move
//! bwn/wbn/nnn b
//! ```

use crate::{Board, ParseBoardError, ParsePlayerError, Player};
use derive_more::{Display, Error};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// A single test position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub board: Board,
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum LoadFixtureError {
    #[display(fmt = "missing board")]
    MissingBoard,
    #[display(fmt = "cannot parse board")]
    CannotParseBoard,
    #[display(fmt = "cannot parse player")]
    CannotParsePlayer,
    #[display(fmt = "unexpected trailing fields")]
    TrailingFields,
    #[display(fmt = "cannot read fixture file")]
    CannotReadFile,
}

impl From<ParsePlayerError> for LoadFixtureError {
    fn from(_: ParsePlayerError) -> Self {
        LoadFixtureError::CannotParsePlayer
    }
}

impl From<ParseBoardError> for LoadFixtureError {
    fn from(_: ParseBoardError) -> Self {
        LoadFixtureError::CannotParseBoard
    }
}

impl From<io::Error> for LoadFixtureError {
    fn from(_: io::Error) -> Self {
        LoadFixtureError::CannotReadFile
    }
}

/// Load all of the [`Fixture`]s in the file at `path`.
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<Vec<Fixture>, LoadFixtureError> {
    let reader = io::BufReader::new(File::open(path)?);
    let mut fixtures = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        fixtures.push(line.parse()?);
    }

    Ok(fixtures)
}

impl std::str::FromStr for Fixture {
    type Err = LoadFixtureError;

    fn from_str(fixture_string: &str) -> Result<Self, Self::Err> {
        let mut sections = fixture_string.split_whitespace();

        let board: Board = sections
            .next()
            .ok_or(LoadFixtureError::MissingBoard)?
            .parse()?;

        let player: Player = sections
            .next()
            .ok_or(LoadFixtureError::CannotParsePlayer)?
            .parse()?;

        if sections.next().is_some() {
            return Err(LoadFixtureError::TrailingFields);
        }

        Ok(Fixture {
            board: board.with_turn(player),
        })
    }
}
