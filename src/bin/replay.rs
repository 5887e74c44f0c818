//! Replays a single captured turn.
//!
//! Reads a board snapshot (a startup block followed by one turn block, as
//! logged by the main binary at debug level) and prints the moves the engine
//! would make for it.
//!
//! Usage:
//!   cargo run --release --bin replay -- SNAPSHOT [OPTIONS]
//!
//! Options:
//!   --config FILE   JSON engine configuration
//!   --turn N        Turn number used to seed jitter (default: 0)
//!   --status        Print the board summary to stderr before the moves

use std::env;
use std::fs;
use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use drone_commander::config::EngineConfig;
use drone_commander::engine::compute_moves;
use drone_commander::protocol::{describe, parse_snapshot, write_moves};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut snapshot_path: Option<String> = None;
    let mut config = EngineConfig::default();
    let mut turn: u32 = 0;
    let mut status = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    fail("--config needs a file path");
                };
                config = match EngineConfig::load(path) {
                    Ok(c) => c,
                    Err(e) => fail(&e.to_string()),
                };
            }
            "--turn" => {
                i += 1;
                turn = match args.get(i).map(|s| s.parse()) {
                    Some(Ok(n)) => n,
                    _ => fail("invalid --turn value"),
                };
            }
            "--status" => {
                status = true;
            }
            other if snapshot_path.is_none() && !other.starts_with("--") => {
                snapshot_path = Some(other.to_string());
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    let Some(path) = snapshot_path else {
        fail("Usage: replay SNAPSHOT [--config FILE] [--turn N] [--status]");
    };
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => fail(&format!("{}: {}", path, e)),
    };
    let board = match parse_snapshot(&text) {
        Ok(b) => b,
        Err(e) => fail(&format!("{}: {}", path, e)),
    };

    if status {
        eprint!("{}", describe(&board));
    }

    let start = Instant::now();
    let moves = compute_moves(&board, &config, turn);
    tracing::info!(
        turn,
        elapsed_us = start.elapsed().as_micros() as u64,
        "turn computed"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_moves(&mut out, &moves) {
        fail(&e.to_string());
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(2);
}
