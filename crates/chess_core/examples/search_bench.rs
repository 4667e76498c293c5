//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p chess_core -- [depth]
//!
//! Runs the automated side's move choice on a few positions and reports
//! visited nodes and nodes per second.

use chess_core::{choose_move_with_depth, perft, Board, Color, Decision};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr
         pppppppp
         ........
         ........
         ........
         ........
         PPPPPPPP
         RNBQKBNR",
    ),
    (
        "After e2e4",
        "rnbqkbnr
         pppppppp
         ........
         ........
         ....P...
         ........
         PPPP.PPP
         RNBQKBNR",
    ),
    (
        "Open middlegame",
        "r..qk..r
         ppp..ppp
         ..n.bn..
         ...pp...
         ...PP...
         ..N.BN..
         PPP..PPP
         R..QK..R",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2);

    println!("=== Search Benchmark ===");
    println!("Depth below root: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, diagram) in TEST_POSITIONS {
        let board = match Board::from_diagram(diagram) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let mut nodes = 0u64;
        let (decision, score) = choose_move_with_depth(&board, Color::Black, depth, &mut nodes);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let best = match decision {
            Decision::Move(mv) => mv.to_string(),
            Decision::Terminal(outcome) => format!("{outcome:?}"),
        };
        let nps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
        println!(" {best} ({score:+.1}) {nodes:>10} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = total_nodes as f64 / total_time.as_secs_f64().max(f64::EPSILON);
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
    println!(
        "perft(3) from the start: {}",
        perft(&Board::initial(), Color::White, 3)
    );
}
