//! Replays coordinate moves from the command line and prints each position

use chess_rules_core::{Coord, GameState, PieceKind};
use std::env;
use std::process;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut moves = &args[1..];
    let mut state = if moves[0] == "--fen" {
        let Some(fen) = moves.get(1) else {
            eprintln!("Error: --fen needs a position");
            process::exit(1);
        };
        match GameState::from_fen(fen) {
            Ok(s) => {
                moves = &moves[2..];
                s
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        GameState::new()
    };

    println!("{}", state.board);
    println!();

    for text in moves {
        let (from, to, promotion) = match parse_move(text) {
            Some(m) => m,
            None => {
                eprintln!("Error: cannot read move '{}'", text);
                process::exit(1);
            }
        };

        let mover = state.turn;
        let report = state.attempt_move(from, to, promotion);
        if !report.accepted {
            eprintln!("{} {}: rejected ({})", mover, text, report.status.as_str());
            process::exit(2);
        }

        match report.captured {
            Some(piece) => println!(
                "{} {}: {} (captured {})",
                mover,
                text,
                report.status.as_str(),
                piece
            ),
            None => println!("{} {}: {}", mover, text, report.status.as_str()),
        }
        println!("{}", state.board);
        println!();
    }

    println!("FEN: {}", state.to_fen());
}

/// `e2e4`, with an optional promotion letter as in `e7e8n`.
fn parse_move(text: &str) -> Option<(Coord, Coord, Option<PieceKind>)> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }
    let from: Coord = text[0..2].parse().ok()?;
    let to: Coord = text[2..4].parse().ok()?;
    let promotion = text[4..].chars().next().map(PieceKind::from_promotion_char);
    Some((from, to, promotion))
}

fn print_usage(program: &str) {
    println!("Usage: {} [--fen \"<fen>\"] <move>...", program);
    println!();
    println!("Moves are written square to square, e.g. e2e4 or e7e8n.");
    println!("Set RUST_LOG=debug to trace rule decisions.");
    println!();
    println!("Examples:");
    println!("  {} e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7", program);
    println!("  {} --fen \"6k1/5ppp/8/8/8/8/8/R5K1 w\" a1a8", program);
}
