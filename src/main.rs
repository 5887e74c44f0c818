//! drone-commander -- a Game of Drones bot.
//!
//! Reads the referee's startup and turn blocks from stdin and answers each
//! turn on stdout with one destination per own drone. Diagnostics go to
//! stderr through `tracing`; set `RUST_LOG` to control verbosity.
//!
//! Usage:
//!   drone-commander [OPTIONS]
//!
//! Options:
//!   --config FILE      JSON engine configuration
//!   --fallback NAME    centroid | nearest_zone
//!   --jitter N         Max per-axis offset for centroid destinations
//!   --seed N           Seed for the jitter generator
//!   --hold-the-line    Budget drones around owned zones first

use std::env;
use std::io::{self, BufWriter};
use std::process;

use drone_commander::config::EngineConfig;
use drone_commander::engine::Engine;

fn parse_args(args: &[String]) -> Result<Option<EngineConfig>, String> {
    let mut config = EngineConfig::default();

    // A config file is the base; flags override it regardless of position.
    if let Some(i) = args.iter().position(|a| a == "--config") {
        let path = args.get(i + 1).ok_or("--config needs a file path")?;
        config = EngineConfig::load(path).map_err(|e| e.to_string())?;
    }

    let mut i = 1;
    while i < args.len() {
        let value = |i: usize| {
            args.get(i + 1)
                .ok_or_else(|| format!("{} needs a value", args[i]))
        };
        match args[i].as_str() {
            "--config" => {
                i += 1;
            }
            "--fallback" => {
                config.fallback = value(i)?.parse().map_err(|e| format!("{}", e))?;
                i += 1;
            }
            "--jitter" => {
                config.centroid_jitter = value(i)?
                    .parse()
                    .map_err(|_| "invalid --jitter value".to_string())?;
                i += 1;
            }
            "--seed" => {
                config.seed = value(i)?
                    .parse()
                    .map_err(|_| "invalid --seed value".to_string())?;
                i += 1;
            }
            "--hold-the-line" => {
                config.hold_the_line = true;
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!("Usage: drone-commander [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE     JSON engine configuration");
    eprintln!("  --fallback NAME   centroid | nearest_zone (default: centroid)");
    eprintln!("  --jitter N        Max per-axis offset for centroid destinations (default: 0)");
    eprintln!("  --seed N          Seed for the jitter generator (default: 0)");
    eprintln!("  --hold-the-line   Budget drones around owned zones first");
    eprintln!("  --help            Show this help");
}

/// Runs the game loop over stdin/stdout.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut engine = Engine::new(config);

    if let Err(e) = engine.run(stdin.lock(), &mut out) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
