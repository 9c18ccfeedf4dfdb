//! Play the search player against itself and report the results.
//!
//! Usage: `selfplay [edge_length] [depth] [games]`. Set `RUST_LOG=debug` to see
//! the root scores of every search.

use log::{error, info};
use std::env;
use std::process;
use std::str::FromStr;
use std::time::Instant;
use ternary_othello::{Game, Player};
use ternary_player::{play_game, AiPlayer, SearchConfig};

const DEFAULT_EDGE_LENGTH: usize = 6;
const DEFAULT_DEPTH: u8 = 5;
const DEFAULT_GAMES: usize = 4;

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &str, default: T) -> T {
    match args.get(index) {
        None => default,
        Some(arg) => match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                error!("invalid {}: {:?}", name, arg);
                eprintln!("usage: selfplay [edge_length] [depth] [games]");
                process::exit(2);
            }
        },
    }
}

fn new_player(edge_length: usize, config: SearchConfig) -> AiPlayer {
    match AiPlayer::with_config(edge_length, config) {
        Ok(player) => player,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let edge_length = parse_arg(&args, 0, "edge length", DEFAULT_EDGE_LENGTH);
    let depth = parse_arg(&args, 1, "depth", DEFAULT_DEPTH);
    let games = parse_arg(&args, 2, "game count", DEFAULT_GAMES);

    let config = SearchConfig::default().with_depth(depth).with_parallel(true);
    // Two players with the same settings, so each side keeps its own diagnostics.
    let mut first = new_player(edge_length, config);
    let mut second = new_player(edge_length, config);

    let mut wins = [0usize; 2];
    let mut draws = 0;

    for game_number in 0..games {
        // Swap colours between games.
        let first_colour = if game_number % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };

        let start = Instant::now();
        let game = match Game::new(edge_length) {
            Ok(game) => game,
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        };
        let result = match first_colour {
            Player::Black => play_game(game, &mut first, &mut second),
            Player::White => play_game(game, &mut second, &mut first),
        };
        let end = match result {
            Ok(end) => end,
            Err(err) => {
                error!("game {} stopped: {}", game_number + 1, err);
                process::exit(1);
            }
        };

        let (black, white) = end.board.count();
        match end.winner() {
            Some(winner) if winner == first_colour => wins[0] += 1,
            Some(_) => wins[1] += 1,
            None => draws += 1,
        }

        println!("{}", end);
        info!(
            "game {}: first player {}, Black {} White {}, {:.2?}",
            game_number + 1,
            first_colour,
            black,
            white,
            start.elapsed()
        );
    }

    info!(
        "{} games on {}x{} at depth {}: first {} wins, second {} wins, {} draws",
        games, edge_length, edge_length, depth, wins[0], wins[1], draws
    );
}
