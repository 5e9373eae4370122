use std::time::Instant;

use anyhow::{Context, Result};
use castellan_core::{Board, STARTING_FEN, divide, perft};
use castellan_eval::Evaluator;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Load a chess position, report its legal moves, status and evaluation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Count leaf nodes of the legal move tree to this depth
    #[arg(long)]
    perft: Option<usize>,

    /// Position as FEN, given as one or more words (default: starting position)
    fen: Vec<String>,
}

impl Args {
    fn fen(&self) -> Option<String> {
        (!self.fen.is_empty()).then(|| self.fen.join(" "))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let fen = args.fen();
    let fen = fen.as_deref().unwrap_or(STARTING_FEN);
    let board: Board = fen
        .parse()
        .with_context(|| format!("could not parse position {fen:?}"))?;

    let legal = board.legal_moves();
    let eval = Evaluator::new(&board);
    info!(
        fen = %board,
        side = ?board.side_to_move(),
        legal = legal.len(),
        status = ?board.status(),
        phase = eval.phase(),
        "position loaded"
    );
    debug!(breakdown = ?eval.breakdown(), "evaluation terms");
    info!(score = eval.evaluate(), "static evaluation");

    if let Some(depth) = args.perft {
        let start = Instant::now();
        let split = divide(&board, depth);
        for (mv, count) in &split {
            debug!(%mv, count, "divide");
        }
        let nodes = if split.is_empty() {
            perft(&board, depth)
        } else {
            split.iter().map(|(_, count)| count).sum()
        };
        let elapsed = start.elapsed();
        let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, nps, "perft complete");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn no_arguments_means_start_position() {
        let args = Args::try_parse_from(["castellan"]).unwrap();
        assert!(args.fen().is_none());
        assert!(args.perft.is_none());
    }

    #[test]
    fn fen_words_are_joined() {
        let args = Args::try_parse_from([
            "castellan", "--perft", "3", "8/8/8/8/8/8/8/K6k", "w", "-", "-", "0", "1",
        ])
        .unwrap();
        assert_eq!(args.fen().as_deref(), Some("8/8/8/8/8/8/8/K6k w - - 0 1"));
        assert_eq!(args.perft, Some(3));
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(Args::try_parse_from(["castellan", "--perft"]).is_err());
        assert!(Args::try_parse_from(["castellan", "--perft", "deep"]).is_err());
        assert!(Args::try_parse_from(["castellan", "--verbose"]).is_err());
    }
}
