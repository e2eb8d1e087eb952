//! Seeded random-playout runner.
//!
//! Usage:
//! `cargo run --release --bin playout`
//! `cargo run --release --bin playout -- --seed 7 --games 20 --plies 200 --show`
//!
//! Set `RUST_LOG=parlor_chess=debug` to see every commit.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use parlor_chess::errors::ChessResult;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::game_state::match_session::MatchSession;
use parlor_chess::game_state::settings::GameSettings;
use parlor_chess::utils::playout::PlayoutEnd;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = parse_arg("--seed", 1u64);
    let games = parse_arg("--games", 10usize);
    let max_plies = parse_arg("--plies", 300usize);
    let show = has_flag("--show");

    let mut settings = GameSettings::default();
    if let Some(rule) = std::env::args().skip_while(|a| a != "--rule").nth(1) {
        settings.set_option("CheckmateRule", &rule)?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = MatchSession::new(settings);
    let mut draws = 0usize;
    let started = Instant::now();

    for game_no in 1..=games {
        if game_no > 1 {
            session.rematch();
        }

        let report = session.random_playout(&mut rng, max_plies)?;
        match report.end {
            PlayoutEnd::Checkmate(winner) => {
                println!("game {game_no}: {winner} mates in {} plies", report.plies);
            }
            PlayoutEnd::NoLegalMoves(side) => {
                draws += 1;
                println!("game {game_no}: {side} has no legal move after {} plies", report.plies);
            }
            PlayoutEnd::PlyLimit => {
                draws += 1;
                println!("game {game_no}: ply limit {} reached", report.plies);
            }
        }

        if show {
            println!("{}\n", session.render());
        }
    }

    let board = session.scoreboard();
    println!(
        "{} {} - {} {} ({} undecided) in {:.2?}",
        board.name(Color::White),
        board.score(Color::White).value,
        board.score(Color::Black).value,
        board.name(Color::Black),
        draws,
        started.elapsed()
    );
    Ok(())
}
